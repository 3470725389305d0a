#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmuError {
    #[error("SMC indirect port {0} does not exist")]
    InvalidPort(u8),
    #[error("thermal monitor {0} does not exist")]
    InvalidMonitor(u8),
    #[error("thermal diode {0} out of range")]
    InvalidDiode(u8),
    #[error("LCAC memory channel {0} does not exist")]
    InvalidLcacChannel(u8),
    #[error("SMC SRAM address {0:#x} is not dword aligned")]
    Misaligned(u32),
    #[error("SMC SRAM address {addr:#x} beyond limit {limit:#x}")]
    OutOfRange { addr: u32, limit: u32 },
    #[error("unknown register")]
    UnknownRegister,
}
