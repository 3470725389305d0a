//! Per-ASIC configuration for the SMU 6.0 parts.
//!
//! All SI chips share the same register map; what differs between consumers
//! is which index/data port they claim and how much SMC SRAM they expose.

use crate::indirect::IndPort;

/// End of the SMC SRAM window on SI parts (exclusive).
pub const SMC_RAM_END: u32 = 0x20000;

/// SI (Southern Islands) parts carrying an SMU 6.0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AsicType {
    Tahiti,
    Pitcairn,
    Verde,
    Oland,
    Hainan,
}

impl AsicType {
    pub const fn name(self) -> &'static str {
        match self {
            AsicType::Tahiti => "tahiti",
            AsicType::Pitcairn => "pitcairn",
            AsicType::Verde => "verde",
            AsicType::Oland => "oland",
            AsicType::Hainan => "hainan",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SmuConfig {
    pub ty: AsicType,
    /// Index/data pair used for indirect access.
    pub ind_port: IndPort,
    /// Upper bound handed to the SRAM accessors.
    pub smc_ram_end: u32,
}

impl SmuConfig {
    pub fn new(ty: AsicType) -> Self {
        match ty {
            AsicType::Tahiti
            | AsicType::Pitcairn
            | AsicType::Verde
            | AsicType::Oland
            | AsicType::Hainan => Self::new_si(ty),
        }
    }

    fn new_si(ty: AsicType) -> Self {
        Self {
            ty,
            ind_port: IndPort::PORT0,
            smc_ram_end: SMC_RAM_END,
        }
    }
}
