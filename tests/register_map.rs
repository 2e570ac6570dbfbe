use mos_regmap::register_info::{
    BYTE_BANK_LEN, REGISTERS, Register, RegisterType, WORD_BANK_LEN, register_buffer_size,
    register_info,
};
use mos_regmap::target_xml::{reg_element, target_description, write_register_map};

fn rendered_lines() -> Vec<String> {
    let mut buf = Vec::new();
    write_register_map(&mut buf).expect("writing to a Vec should not fail");
    String::from_utf8(buf)
        .expect("output should be valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

/// End-to-end shape of the emitted map: line count and the exact first and
/// last lines.
#[test]
fn emits_all_registers_in_order() {
    let lines = rendered_lines();
    assert_eq!(lines.len(), 57, "expected one line per register");
    assert_eq!(
        lines[0],
        r#"<reg name="PC" bitsize="16" offset="0" regnum="0" generic="pc" />"#
    );
    assert_eq!(
        lines[56],
        r#"<reg name="RS15" group_id="2" bitsize="16" offset="72" regnum="56" dwarf_regnum="543" />"#
    );
}

#[test]
fn regnums_are_contiguous_from_zero() {
    for (i, info) in REGISTERS.iter().enumerate() {
        assert_eq!(
            info.regnum as usize, i,
            "regnum of {} does not match its position",
            info.name
        );
    }
}

/// Every offset equals the running sum of the storage widths of all prior
/// registers; the bank-relative formulas coincide with the same counter.
#[test]
fn offsets_follow_running_byte_widths() {
    let mut expected = 0;
    for info in REGISTERS.iter() {
        assert_eq!(
            info.offset, expected,
            "offset of {} diverges from the running counter",
            info.name
        );
        expected += info.width.bytes();
    }
    assert_eq!(register_buffer_size(), expected);
    assert_eq!(register_buffer_size(), 74);
}

#[test]
fn byte_bank_dwarf_ids_stride_by_two() {
    for i in 0..BYTE_BANK_LEN {
        let info = register_info(Register::RC(i)).expect("RC register should be in the table");
        assert_eq!(info.dwarf_id, Some(16 + 2 * i as u16));
        assert_eq!(info.group.map(|g| g.id()), Some(1));
        assert_eq!(info.width.bits(), 8);
    }
}

#[test]
fn word_bank_dwarf_ids_are_contiguous() {
    for i in 0..WORD_BANK_LEN {
        let info = register_info(Register::RS(i)).expect("RS register should be in the table");
        assert_eq!(info.dwarf_id, Some(528 + i as u16));
        assert_eq!(info.group.map(|g| g.id()), Some(2));
        assert_eq!(info.width.bits(), 16);
    }
}

/// Scalar annotations: only PC carries a generic role, only A/X/Y carry
/// DWARF ids, and the four status flags are 1-bit but byte-addressed.
#[test]
fn scalar_register_annotations() {
    let pc = register_info(Register::PC).expect("PC should be in the table");
    assert_eq!(pc.generic.map(|g| g.to_string()), Some("pc".to_string()));
    assert_eq!(pc.dwarf_id, None);

    for (reg, dwarf_id) in [(Register::A, 0), (Register::X, 2), (Register::Y, 4)] {
        let info = register_info(reg).expect("GP register should be in the table");
        assert_eq!(info.dwarf_id, Some(dwarf_id));
        assert_eq!(info.generic, None);
    }

    let s = register_info(Register::S).expect("S should be in the table");
    assert_eq!(s.dwarf_id, None, "S has no DWARF id on this target");

    let flags: Vec<_> = REGISTERS
        .iter()
        .filter(|r| r.register_type == RegisterType::Flag)
        .collect();
    assert_eq!(flags.len(), 4);
    for flag in flags {
        assert_eq!(flag.width.bits(), 1);
        assert_eq!(flag.width.bytes(), 1);
        assert_eq!(flag.dwarf_id, None);
    }
}

#[test]
fn generation_is_idempotent() {
    assert_eq!(rendered_lines(), rendered_lines());

    let rebuilt: Vec<String> = mos_regmap::register_info::registers_info()
        .iter()
        .map(reg_element)
        .collect();
    assert_eq!(rebuilt, rendered_lines());
}

/// The full document wraps the same 57 elements, in order, inside the
/// `org.gnu.gdb.mos` feature.
#[test]
fn target_description_wraps_the_same_elements() {
    let doc = target_description();
    assert!(doc.starts_with("<?xml version=\"1.0\"?>\n"));
    assert!(doc.contains("<!DOCTYPE target SYSTEM \"gdb-target.dtd\">"));
    assert!(doc.contains("<architecture>mos</architecture>"));
    assert!(doc.contains("<feature name=\"org.gnu.gdb.mos\">"));
    assert!(doc.trim_end().ends_with("</target>"));

    let embedded: Vec<String> = doc
        .lines()
        .filter(|l| l.trim_start().starts_with("<reg "))
        .map(|l| l.trim().to_string())
        .collect();
    assert_eq!(embedded, rendered_lines());
}
