use crate::header::DecodedHeader;
use std::fmt::Display;

/// Column at which field values start.
const LABEL_WIDTH: usize = 35;

fn field(label: &str, value: impl Display) -> String {
    format!("{:<width$}{}", format!("{label}:"), value, width = LABEL_WIDTH)
}

/// Renders a decoded header as one line per field, in `readelf -h` order.
pub fn render(header: &DecodedHeader) -> Vec<String> {
    let magic = header
        .ident
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    vec![
        format!("Magic:   {magic}"),
        field("Class", header.class),
        field("Data", header.data),
        field("Version", header.version),
        field("OS/ABI", header.os_abi),
        field("ABI Version", header.abi_version),
        field("Type", header.object_type),
        field("Entry point address", format_args!("0x{:x}", header.entry)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::elf::tests::build_header;
    use crate::header::decode;

    #[test]
    fn renders_linux_exec() -> anyhow::Result<()> {
        let hdr = decode(&build_header(2, 1, 3, 2, 0x401020))?;
        let lines = render(&hdr);
        assert_eq!(
            lines,
            vec![
                "Magic:   7f 45 4c 46 02 01 01 03 00 00 00 00 00 00 00 00",
                "Class:                             ELF64",
                "Data:                              2's complement, little endian",
                "Version:                           1 (current)",
                "OS/ABI:                            UNIX - Linux",
                "ABI Version:                       0",
                "Type:                              EXEC (Executable file)",
                "Entry point address:               0x401020",
            ]
        );
        Ok(())
    }

    #[test]
    fn renders_unknown_values_as_hex() -> anyhow::Result<()> {
        let mut bytes = build_header(9, 1, 0x80, 0x1234, 0);
        bytes[6] = 0;
        bytes[8] = 12;
        let lines = render(&decode(&bytes)?);
        assert_eq!(lines[1], "Class:                             <unknown: 9>");
        assert_eq!(lines[3], "Version:                           0 (invalid)");
        assert_eq!(lines[4], "OS/ABI:                            <unknown: 80>");
        assert_eq!(lines[5], "ABI Version:                       12");
        assert_eq!(lines[6], "Type:                              <unknown: 1234>");
        assert_eq!(lines[7], "Entry point address:               0x0");
        Ok(())
    }

    #[test]
    fn renders_elf32_big_endian() -> anyhow::Result<()> {
        let lines = render(&decode(&build_header(1, 2, 255, 4, 0x8048000))?);
        assert!(lines[0].starts_with("Magic:   7f 45 4c 46 01 02 01 ff"));
        assert_eq!(lines[1], "Class:                             ELF32");
        assert_eq!(lines[2], "Data:                              2's complement, big endian");
        assert_eq!(lines[4], "OS/ABI:                            Standalone App");
        assert_eq!(lines[6], "Type:                              CORE (Core file)");
        assert_eq!(lines[7], "Entry point address:               0x8048000");
        Ok(())
    }
}
