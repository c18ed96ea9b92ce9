pub mod header;
pub mod reader;
pub mod render;

pub use header::*;
pub use reader::*;
pub use render::*;
