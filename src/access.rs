//! Register access abstraction.
//!
//! Everything that touches hardware goes through [`RegisterAccess`], so the
//! indirect-port logic can run against a real BAR mapping ([`Mmio`]) or a
//! platform's own accessor.

use core::ptr::NonNull;

use crate::registers::MmReg;
use crate::registers::smc::SmcIndRegisters;

/// 32-bit access to directly mapped registers.
pub trait RegisterAccess {
    fn read32(&mut self, reg: MmReg) -> u32;

    fn write32(&mut self, reg: MmReg, value: u32);

    /// Replaces the bits selected by `mask` with those of `value`.
    fn modify32(&mut self, reg: MmReg, mask: u32, value: u32) {
        let old = self.read32(reg);
        self.write32(reg, (old & !mask) | (value & mask));
    }
}

impl<A: RegisterAccess + ?Sized> RegisterAccess for &mut A {
    fn read32(&mut self, reg: MmReg) -> u32 {
        (**self).read32(reg)
    }

    fn write32(&mut self, reg: MmReg, value: u32) {
        (**self).write32(reg, value)
    }
}

/// Volatile accessor over a mapped register BAR.
pub struct Mmio {
    base: NonNull<u8>,
}

unsafe impl Send for Mmio {}

impl Mmio {
    /// # Safety
    ///
    /// `base` must be the mapped, 4-byte aligned base of the GPU register BAR
    /// and must stay valid for the lifetime of the returned accessor. Every
    /// register handed to [`RegisterAccess`] must lie inside the mapping.
    pub const unsafe fn new(base: NonNull<u8>) -> Self {
        Self { base }
    }

    fn ptr(&self, reg: MmReg) -> *mut u32 {
        unsafe { self.base.as_ptr().add(reg.byte_offset()).cast() }
    }

    /// Typed view of the SMC port block.
    pub fn smc_block(&self) -> SmcIndRegisters {
        unsafe { SmcIndRegisters::from_base(self.base) }
    }
}

impl RegisterAccess for Mmio {
    fn read32(&mut self, reg: MmReg) -> u32 {
        unsafe { self.ptr(reg).read_volatile() }
    }

    fn write32(&mut self, reg: MmReg, value: u32) {
        unsafe { self.ptr(reg).write_volatile(value) }
    }
}
