//! Register definitions for the SMU 6.0 power-management block.
//!
//! Offsets are kept as typed values rather than bare integers: a direct
//! register ([`MmReg`]) is a dword offset into the MMIO BAR, an indirect
//! register ([`IxReg`]) is an index that has to go through one of the
//! `SMC_IND_INDEX`/`SMC_IND_DATA` port pairs. The two never mix, so an
//! indirect index cannot be handed to an MMIO accessor by mistake.
//!
//! The constants themselves live in [`mm`] and [`ix`]; [`table`] holds the
//! same data as a name-indexed table and [`smc`] a typed view of the SMC
//! port block.

use core::fmt;

pub mod ix;
pub mod mm;
pub mod smc;
pub mod table;

/// Address space a register lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    /// Memory mapped, addressable without indirection.
    Direct,
    /// Reached through the SMC index/data port.
    Indirect,
}

/// A directly mapped register, stored as its dword offset.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MmReg(u32);

impl MmReg {
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    /// Dword offset, as used by the hardware documentation.
    pub const fn offset(self) -> u32 {
        self.0
    }

    /// Byte offset from the start of the MMIO BAR.
    pub const fn byte_offset(self) -> usize {
        self.0 as usize * 4
    }

    /// The register `n` dwords further on.
    pub const fn add(self, n: u32) -> Self {
        Self(self.0 + n)
    }
}

impl fmt::Display for MmReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match table::mm_name(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "mm[{:#06x}]", self.0),
        }
    }
}

/// An indirectly accessed register, stored as the index written into
/// `SMC_IND_INDEX`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IxReg(u32);

impl IxReg {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    pub const fn add(self, n: u32) -> Self {
        Self(self.0 + n)
    }
}

impl fmt::Display for IxReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match table::ix_name(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "ix[{:#010x}]", self.0),
        }
    }
}

/// Either kind of register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Mm(MmReg),
    Ix(IxReg),
}

impl Register {
    pub const fn space(self) -> Space {
        match self {
            Register::Mm(_) => Space::Direct,
            Register::Ix(_) => Space::Indirect,
        }
    }

    /// Raw offset or index, whichever the space uses.
    pub const fn value(self) -> u32 {
        match self {
            Register::Mm(r) => r.offset(),
            Register::Ix(r) => r.index(),
        }
    }
}

impl From<MmReg> for Register {
    fn from(reg: MmReg) -> Self {
        Register::Mm(reg)
    }
}

impl From<IxReg> for Register {
    fn from(reg: IxReg) -> Self {
        Register::Ix(reg)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Mm(r) => r.fmt(f),
            Register::Ix(r) => r.fmt(f),
        }
    }
}
