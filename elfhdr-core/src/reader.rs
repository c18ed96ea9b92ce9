use crate::header::MAX_HEADER_SIZE;
use std::io::{self, Read};

/// Reads up to [`MAX_HEADER_SIZE`] bytes from `reader`.
///
/// Stops early at end of input; whether that is enough is for
/// [`decode`](crate::header::decode) to judge.
pub fn read_header<R: Read>(reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(MAX_HEADER_SIZE);
    reader.take(MAX_HEADER_SIZE as u64).read_to_end(&mut buf)?;
    log::debug!("Read {} header bytes", buf.len());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_at_most_one_header() -> io::Result<()> {
        let data = vec![0x11u8; 4096];
        let buf = read_header(Cursor::new(&data))?;
        assert_eq!(buf.len(), MAX_HEADER_SIZE);
        Ok(())
    }

    #[test]
    fn short_input_is_returned_whole() -> io::Result<()> {
        let buf = read_header(Cursor::new(b"\x7fELF\x01"))?;
        assert_eq!(buf, b"\x7fELF\x01");
        assert!(read_header(io::empty())?.is_empty());
        Ok(())
    }

    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn read_errors_propagate() {
        assert!(read_header(Failing).is_err());
    }
}
