//! Indirect register access through the SMC index/data ports.
//!
//! An `ix*` register is reached in two steps: its index goes into
//! `SMC_IND_INDEX_n`, then `SMC_IND_DATA_n` reads or writes the value. The
//! two steps must not interleave with another user of the same port, so the
//! accessor lives behind a lock and every operation holds it across both.

use spin::Mutex;

use crate::access::RegisterAccess;
use crate::config::SmuConfig;
use crate::err::SmuError;
use crate::registers::{IxReg, MmReg, mm};

/// One of the four SMC index/data port pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndPort(u8);

impl IndPort {
    pub const PORT0: IndPort = IndPort(0);
    pub const COUNT: u8 = mm::SMC_IND_INDEX_PORTS.len() as u8;

    pub const fn new(port: u8) -> Result<Self, SmuError> {
        if port >= Self::COUNT {
            return Err(SmuError::InvalidPort(port));
        }
        Ok(Self(port))
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn index_reg(self) -> MmReg {
        mm::SMC_IND_INDEX_PORTS[self.0 as usize]
    }

    pub const fn data_reg(self) -> MmReg {
        mm::SMC_IND_DATA_PORTS[self.0 as usize]
    }
}

impl Default for IndPort {
    fn default() -> Self {
        Self::PORT0
    }
}

/// Serialised access to `ix*` registers and SMC SRAM.
pub struct SmcIndirect<A: RegisterAccess> {
    io: Mutex<A>,
    port: IndPort,
    ram_end: u32,
}

impl<A: RegisterAccess> SmcIndirect<A> {
    pub fn new(io: A, port: IndPort) -> Self {
        Self::with_limit(io, port, crate::config::SMC_RAM_END)
    }

    pub fn with_config(io: A, config: &SmuConfig) -> Self {
        debug!(
            "smu6: {} indirect access on port {}",
            config.ty.name(),
            config.ind_port.number()
        );
        Self::with_limit(io, config.ind_port, config.smc_ram_end)
    }

    fn with_limit(io: A, port: IndPort, ram_end: u32) -> Self {
        Self {
            io: Mutex::new(io),
            port,
            ram_end,
        }
    }

    pub fn port(&self) -> IndPort {
        self.port
    }

    /// SRAM limit taken from the configuration.
    pub fn ram_end(&self) -> u32 {
        self.ram_end
    }

    pub fn read(&self, reg: IxReg) -> u32 {
        let mut io = self.io.lock();
        let value = self.read_locked(&mut *io, reg.index());
        trace!("smu6: read {} = {:#010x}", reg, value);
        value
    }

    pub fn write(&self, reg: IxReg, value: u32) {
        let mut io = self.io.lock();
        trace!("smu6: write {} <- {:#010x}", reg, value);
        self.write_locked(&mut *io, reg.index(), value);
    }

    /// Replaces the bits selected by `mask`; the lock is held for the whole
    /// read-modify-write.
    pub fn modify(&self, reg: IxReg, mask: u32, value: u32) -> u32 {
        let mut io = self.io.lock();
        let old = self.read_locked(&mut *io, reg.index());
        let new = (old & !mask) | (value & mask);
        self.write_locked(&mut *io, reg.index(), new);
        trace!("smu6: modify {} {:#010x} -> {:#010x}", reg, old, new);
        new
    }

    /// Reads one dword of SMC SRAM.
    pub fn read_sram_dword(&self, addr: u32, limit: u32) -> Result<u32, SmuError> {
        check_sram_addr(addr, limit)?;
        let mut io = self.io.lock();
        Ok(self.read_locked(&mut *io, addr))
    }

    /// Writes one dword of SMC SRAM.
    pub fn write_sram_dword(&self, addr: u32, value: u32, limit: u32) -> Result<(), SmuError> {
        check_sram_addr(addr, limit)?;
        let mut io = self.io.lock();
        self.write_locked(&mut *io, addr, value);
        Ok(())
    }

    /// Runs `f` with exclusive access to the underlying accessor, e.g. to
    /// touch the message mailbox without racing an indirect access.
    pub fn with_io<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        let mut io = self.io.lock();
        f(&mut *io)
    }

    pub fn into_inner(self) -> A {
        self.io.into_inner()
    }

    fn read_locked(&self, io: &mut A, index: u32) -> u32 {
        io.write32(self.port.index_reg(), index);
        io.read32(self.port.data_reg())
    }

    fn write_locked(&self, io: &mut A, index: u32, value: u32) {
        io.write32(self.port.index_reg(), index);
        io.write32(self.port.data_reg(), value);
    }
}

fn check_sram_addr(addr: u32, limit: u32) -> Result<(), SmuError> {
    if addr & 3 != 0 {
        warn!("smu6: unaligned SMC SRAM address {:#x}", addr);
        return Err(SmuError::Misaligned(addr));
    }
    if addr.checked_add(4).is_none_or(|end| end > limit) {
        warn!("smu6: SMC SRAM address {:#x} beyond {:#x}", addr, limit);
        return Err(SmuError::OutOfRange { addr, limit });
    }
    Ok(())
}
