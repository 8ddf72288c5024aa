//! Output formatting for decoded traps.

use std::io::{self, Write};

use super::args::OutputFormat;
use crate::message::TrapMessage;
use crate::value::Value;

/// Write a decoded trap in the selected format.
pub fn write_trap<W: Write>(w: &mut W, msg: &TrapMessage, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Human => write_human(w, msg),
        OutputFormat::Raw => write_raw(w, msg),
    }
}

fn value_type(value: &Value) -> &'static str {
    value.type_name().unwrap_or("Unknown")
}

fn write_human<W: Write>(w: &mut W, msg: &TrapMessage) -> io::Result<()> {
    let trap = &msg.trap;

    writeln!(
        w,
        "SNMPv1 trap from {} (community \"{}\")",
        trap.agent_addr,
        msg.community.escape_debug()
    )?;
    if msg.version != 0 {
        writeln!(w, "  version:       {}", msg.version)?;
    }
    writeln!(w, "  enterprise:    {}", trap.enterprise)?;
    match trap.generic_trap_enum() {
        Some(generic) => writeln!(w, "  generic-trap:  {} ({})", generic, trap.generic_trap)?,
        None => writeln!(w, "  generic-trap:  {}", trap.generic_trap)?,
    }
    writeln!(w, "  specific-trap: {}", trap.specific_trap)?;
    writeln!(w, "  time-stamp:    {}", trap.time_stamp)?;
    if let Some(oid) = trap.v2_trap_oid() {
        writeln!(w, "  trap OID:      {}", oid)?;
    }
    writeln!(w, "  varbinds:      {}", trap.varbinds.len())?;
    for vb in &trap.varbinds {
        writeln!(w, "    {} = {}: {}", vb.oid, value_type(&vb.value), vb.value)?;
    }
    Ok(())
}

fn write_raw<W: Write>(w: &mut W, msg: &TrapMessage) -> io::Result<()> {
    let trap = &msg.trap;

    writeln!(w, "version\t{}", msg.version)?;
    writeln!(w, "community\t{}", msg.community.escape_debug())?;
    writeln!(w, "enterprise\t{}", trap.enterprise)?;
    writeln!(w, "agent-addr\t{}", trap.agent_addr)?;
    writeln!(w, "generic-trap\t{}", trap.generic_trap)?;
    writeln!(w, "specific-trap\t{}", trap.specific_trap)?;
    writeln!(w, "time-stamp\t{}", trap.time_stamp)?;
    for vb in &trap.varbinds {
        // Escape so embedded tabs and newlines cannot break the columns
        writeln!(
            w,
            "varbind\t{}\t{}\t{}",
            vb.oid,
            value_type(&vb.value),
            vb.value.to_string().escape_debug()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAP: &[u8] = &[
        0x30, 0x3A, 0x02, 0x01, 0x00, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', 0xA4, 0x2D,
        0x06, 0x06, 0x2B, 0x06, 0x01, 0x04, 0x01, 0x09, 0x40, 0x04, 10, 0, 0, 1, 0x02, 0x01, 0x06,
        0x02, 0x01, 0x01, 0x43, 0x02, 0x01, 0x00, 0x30, 0x13, 0x30, 0x11, 0x06, 0x08, 0x2B, 0x06,
        0x01, 0x02, 0x01, 0x01, 0x03, 0x00, 0x04, 0x05, b'h', b'e', b'l', b'l', b'o',
    ];

    fn render(format: OutputFormat) -> String {
        let msg = crate::decode(TRAP).unwrap();
        let mut out = Vec::new();
        write_trap(&mut out, &msg, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_output() {
        let out = render(OutputFormat::Human);
        assert!(out.starts_with("SNMPv1 trap from 10.0.0.1 (community \"public\")\n"));
        assert!(out.contains("  generic-trap:  enterpriseSpecific (6)\n"));
        assert!(out.contains("  trap OID:      1.3.6.1.4.1.9.0.1\n"));
        assert!(out.contains("    1.3.6.1.2.1.1.3.0 = OCTET STRING: hello\n"));
        assert!(!out.contains("version"));
    }

    #[test]
    fn test_raw_output() {
        let out = render(OutputFormat::Raw);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "version\t0");
        assert_eq!(lines[3], "agent-addr\t10.0.0.1");
        assert_eq!(lines[6], "time-stamp\t10");
        assert_eq!(lines[7], "varbind\t1.3.6.1.2.1.1.3.0\tOCTET STRING\thello");
        assert_eq!(lines.len(), 8);
    }
}
