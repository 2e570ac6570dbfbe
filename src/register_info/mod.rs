//! Register descriptions for the debug target: names, widths, storage
//! offsets within the flat register buffer, and the numbering spaces the
//! debugger cares about (regnum, DWARF id, group id).

use std::collections::HashMap;
use std::sync::LazyLock;

use strum::Display;

mod mos6502;
pub use mos6502::{BYTE_BANK_LEN, Register, WORD_BANK_LEN, registers_info};

/// Fully derived register information, including computed offsets and
/// debugger-facing numbering.
#[derive(Clone, Debug)]
pub struct RegisterInfo {
    pub register: Register,
    /// Name as advertised to the debugger, e.g. "PC" or "RC17".
    pub name: String,
    pub width: RegisterWidth,
    /// Byte offset of this register's storage in the flat register buffer.
    pub offset: usize,
    /// Logical register number; contiguous from 0 in declaration order.
    pub regnum: u16,
    pub register_type: RegisterType,
    /// Standard role tag, only carried by the program counter.
    pub generic: Option<GenericRole>,
    /// DWARF numbering-space id; not every register has one.
    pub dwarf_id: Option<u16>,
    pub group: Option<RegisterGroup>,
}

/// Broad grouping for registers, used for display and filtering.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RegisterType {
    Control,
    GeneralPurpose,
    /// 1-bit status flags, each stored in its own byte.
    Flag,
    AuxiliaryByte,
    AuxiliaryWord,
}

/// Standard role tags, rendered as the `generic` attribute in target.xml.
#[derive(Clone, Copy, Debug, Display, Hash, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum GenericRole {
    Pc,
}

/// Auxiliary register banks; `id()` is what target.xml calls `group_id`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RegisterGroup {
    ByteBank,
    WordBank,
}

impl RegisterGroup {
    pub const fn id(&self) -> u8 {
        match self {
            RegisterGroup::ByteBank => 1,
            RegisterGroup::WordBank => 2,
        }
    }
}

/// Canonical width for a register.
///
/// Note: variants are prefixed with 'W' as rust won't allow a digit as the first char.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegisterWidth {
    W16,
    W8,
    /// Single status-flag bit.
    W1,
}

impl RegisterWidth {
    /// Register width in bits.
    pub const fn bits(&self) -> usize {
        match self {
            RegisterWidth::W16 => 16,
            RegisterWidth::W8 => 8,
            RegisterWidth::W1 => 1,
        }
    }

    /// Bytes of buffer storage; sub-byte widths round up to a whole byte.
    pub const fn bytes(&self) -> usize {
        match self {
            RegisterWidth::W16 => 2,
            RegisterWidth::W8 | RegisterWidth::W1 => 1,
        }
    }
}

/// The complete register table, in emission order.
pub static REGISTERS: LazyLock<Vec<RegisterInfo>> = LazyLock::new(registers_info);

static REGISTERS_MAP: LazyLock<HashMap<Register, RegisterInfo>> = LazyLock::new(|| {
    let mut regs = HashMap::new();

    REGISTERS.iter().for_each(|r| {
        regs.insert(r.register, r.clone());
    });

    regs
});

pub fn register_info(register: Register) -> Option<&'static RegisterInfo> {
    REGISTERS_MAP.get(&register)
}

/// Total size in bytes of the flat register buffer the offsets index into.
pub fn register_buffer_size() -> usize {
    REGISTERS
        .last()
        .map(|r| r.offset + r.width.bytes())
        .unwrap_or(0)
}
