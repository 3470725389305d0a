use core::ptr::NonNull;
use tock_registers::register_structs;
use tock_registers::registers::{ReadOnly, ReadWrite};

use super::mm;

/// Byte offset of the SMC port block inside the MMIO BAR.
pub const SMC_BLOCK_BASE: usize = mm::SMC_IND_INDEX_0.byte_offset();

register_structs! {
    /// SMC index/data ports and mailboxes, `mmSMC_IND_INDEX_0..=mmSMC_RESP_2`.
    pub SmcIndRegs {
        (0x00 => pub ind_index_0: ReadWrite<u32>),
        (0x04 => pub ind_data_0: ReadWrite<u32>),
        (0x08 => pub ind_index_1: ReadWrite<u32>),
        (0x0C => pub ind_data_1: ReadWrite<u32>),
        (0x10 => pub ind_index_2: ReadWrite<u32>),
        (0x14 => pub ind_data_2: ReadWrite<u32>),
        (0x18 => pub ind_index_3: ReadWrite<u32>),
        (0x1C => pub ind_data_3: ReadWrite<u32>),
        (0x20 => _reserved0),
        (0x28 => pub ind_access_cntl: ReadWrite<u32>),
        (0x2C => pub message_0: ReadWrite<u32>),
        (0x30 => pub resp_0: ReadOnly<u32>),
        (0x34 => pub message_1: ReadWrite<u32>),
        (0x38 => pub resp_1: ReadOnly<u32>),
        (0x3C => pub message_2: ReadWrite<u32>),
        (0x40 => pub resp_2: ReadOnly<u32>),
        (0x44 => @END),
    }
}

pub struct SmcIndRegisters {
    base: NonNull<SmcIndRegs>,
}

impl SmcIndRegisters {
    /// Creates a view of the SMC port block from the MMIO BAR base.
    ///
    /// # Safety
    ///
    /// `bar` must be the mapped base of the GPU register BAR and the mapping
    /// must cover at least `SMC_BLOCK_BASE + size_of::<SmcIndRegs>()` bytes
    /// for as long as the view is used.
    pub const unsafe fn from_base(bar: NonNull<u8>) -> Self {
        let ptr = unsafe { bar.as_ptr().add(SMC_BLOCK_BASE) };
        Self {
            base: unsafe { NonNull::new_unchecked(ptr) }.cast(),
        }
    }

    #[inline]
    pub fn regs(&self) -> &SmcIndRegs {
        unsafe { self.base.as_ref() }
    }
}
