//! Register table for the MOS 6502 target, extended with the emulator's
//! auxiliary byte-wide and word-wide register banks.

use tracing::trace;

use super::{GenericRole, RegisterGroup, RegisterInfo, RegisterType, RegisterWidth};

/// DWARF id of RC0; the byte bank strides by 2 from here.
const BYTE_BANK_DWARF_BASE: u16 = 16;
/// DWARF id of RS0; the word bank numbers contiguously from here.
const WORD_BANK_DWARF_BASE: u16 = 528;

pub const BYTE_BANK_LEN: u8 = 32;
pub const WORD_BANK_LEN: u8 = 16;

/// This is your single source of truth for the scalar registers.
/// You edit *only* this list when you add/remove registers; the auxiliary
/// banks are generated by index in `registers_info`.
macro_rules! REGISTER_LIST {
    ($macro:ident) => {
        $macro! {
            // (EnumVariant, dwarf_id, generic role, reg_type, width)
            (PC, None, Some(GenericRole::Pc), Control, W16);
            (A, Some(0), None, GeneralPurpose, W8);
            (X, Some(2), None, GeneralPurpose, W8);
            (Y, Some(4), None, GeneralPurpose, W8);
            // stack pointer; no DWARF id on this target
            (S, None, None, GeneralPurpose, W8);
            (C, None, None, Flag, W1); // carry
            (Z, None, None, Flag, W1); // zero
            (V, None, None, Flag, W1); // overflow
            (N, None, None, Flag, W1); // negative
        }
    };
}

macro_rules! DEFINE_ENUM {
    ( $( ($register:ident, $dwarf:expr, $generic:expr, $reg_type:ident, $width:ident); )* ) => {
        /// Central enum of supported registers.
        ///
        /// The auxiliary bank variants carry the register's index within its
        /// bank (0..32 for RC, 0..16 for RS).
        #[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
        #[allow(clippy::upper_case_acronyms)]
        pub enum Register {
            $( $register, )*
            RC(u8),
            RS(u8),
        }
    };
}

struct ScalarSpec {
    register: Register,
    name: &'static str,
    dwarf_id: Option<u16>,
    generic: Option<GenericRole>,
    register_type: RegisterType,
    width: RegisterWidth,
}

macro_rules! DEFINE_SCALARS {
    ( $( ($register:ident, $dwarf:expr, $generic:expr, $reg_type:ident, $width:ident); )* ) => {
        const SCALAR_REGISTERS: &[ScalarSpec] = &[
            $(
                ScalarSpec {
                    register: Register::$register,
                    name: stringify!($register),
                    dwarf_id: $dwarf,
                    generic: $generic,
                    register_type: RegisterType::$reg_type,
                    width: RegisterWidth::$width,
                },
            )*
        ];
    };
}

REGISTER_LIST!(DEFINE_ENUM);
REGISTER_LIST!(DEFINE_SCALARS);

/// Build the complete table in declaration order.
///
/// Offsets come from a running byte counter: each scalar register advances
/// it by its storage width, and each bank occupies a contiguous range sized
/// to its element width starting at the counter's value when the bank
/// begins. Regnums are assigned contiguously from 0.
pub fn registers_info() -> Vec<RegisterInfo> {
    let capacity = SCALAR_REGISTERS.len() + BYTE_BANK_LEN as usize + WORD_BANK_LEN as usize;
    let mut regs = Vec::with_capacity(capacity);
    let mut offset = 0;

    for spec in SCALAR_REGISTERS {
        regs.push(RegisterInfo {
            register: spec.register,
            name: spec.name.to_string(),
            width: spec.width,
            offset,
            regnum: regs.len() as u16,
            register_type: spec.register_type,
            generic: spec.generic,
            dwarf_id: spec.dwarf_id,
            group: None,
        });
        offset += spec.width.bytes();
    }

    // Byte-wide bank: one byte per register from the bank start.
    let bank_start = offset;
    for i in 0..BYTE_BANK_LEN {
        regs.push(RegisterInfo {
            register: Register::RC(i),
            name: format!("RC{i}"),
            width: RegisterWidth::W8,
            offset: bank_start + i as usize,
            regnum: regs.len() as u16,
            register_type: RegisterType::AuxiliaryByte,
            generic: None,
            dwarf_id: Some(BYTE_BANK_DWARF_BASE + 2 * i as u16),
            group: Some(RegisterGroup::ByteBank),
        });
    }
    offset = bank_start + BYTE_BANK_LEN as usize;

    // Word-wide bank: two bytes per register from the bank start.
    let bank_start = offset;
    for i in 0..WORD_BANK_LEN {
        regs.push(RegisterInfo {
            register: Register::RS(i),
            name: format!("RS{i}"),
            width: RegisterWidth::W16,
            offset: bank_start + 2 * i as usize,
            regnum: regs.len() as u16,
            register_type: RegisterType::AuxiliaryWord,
            generic: None,
            dwarf_id: Some(WORD_BANK_DWARF_BASE + i as u16),
            group: Some(RegisterGroup::WordBank),
        });
    }

    trace!("built register table with {} entries", regs.len());
    regs
}
