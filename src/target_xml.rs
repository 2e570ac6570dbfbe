//! Rendering of the register table as GDB target-description XML.

use std::io::{self, Write};

use crate::register_info::{REGISTERS, RegisterInfo};

/// Render one `<reg …/>` element.
///
/// Attribute order is fixed: name, group_id, bitsize, offset, regnum,
/// generic, dwarf_regnum. Optional attributes are omitted entirely when the
/// descriptor doesn't carry them.
pub fn reg_element(info: &RegisterInfo) -> String {
    let mut attrs = format!("name=\"{}\"", info.name);
    if let Some(group) = info.group {
        attrs.push_str(&format!(" group_id=\"{}\"", group.id()));
    }
    attrs.push_str(&format!(
        " bitsize=\"{}\" offset=\"{}\" regnum=\"{}\"",
        info.width.bits(),
        info.offset,
        info.regnum
    ));
    if let Some(generic) = info.generic {
        attrs.push_str(&format!(" generic=\"{generic}\""));
    }
    if let Some(dwarf_id) = info.dwarf_id {
        attrs.push_str(&format!(" dwarf_regnum=\"{dwarf_id}\""));
    }

    format!("<reg {attrs} />")
}

/// Write the bare register map, one element per line, in table order.
pub fn write_register_map<W: Write>(out: &mut W) -> io::Result<()> {
    for info in REGISTERS.iter() {
        writeln!(out, "{}", reg_element(info))?;
    }
    Ok(())
}

/// The complete target.xml document a debug stub serves to the debugger:
/// the same register elements wrapped in the `org.gnu.gdb.mos` feature
/// envelope.
pub fn target_description() -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\"?>\n");
    doc.push_str("<!DOCTYPE target SYSTEM \"gdb-target.dtd\">\n");
    doc.push_str("<target version=\"1.0\">\n");
    doc.push_str("    <architecture>mos</architecture>\n");
    doc.push_str("    <feature name=\"org.gnu.gdb.mos\">\n");
    for info in REGISTERS.iter() {
        doc.push_str("        ");
        doc.push_str(&reg_element(info));
        doc.push('\n');
    }
    doc.push_str("    </feature>\n");
    doc.push_str("</target>\n");
    doc
}
