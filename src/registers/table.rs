//! Name-indexed view of every SMU 6.0 register.
//!
//! Entries carry the full hardware symbol, `mm`/`ix` prefix included, in the
//! order the register database lists them. Where two symbols share a value
//! the first entry is the canonical one.

use super::{IxReg, MmReg, Register, Space, ix, mm};

/// A symbolic register name and the register it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterEntry {
    pub name: &'static str,
    pub reg: Register,
}

impl RegisterEntry {
    pub const fn space(&self) -> Space {
        self.reg.space()
    }
}

macro_rules! direct {
    ($name:ident) => {
        RegisterEntry {
            name: concat!("mm", stringify!($name)),
            reg: Register::Mm(mm::$name),
        }
    };
}

macro_rules! indirect {
    ($name:ident) => {
        RegisterEntry {
            name: concat!("ix", stringify!($name)),
            reg: Register::Ix(ix::$name),
        }
    };
}

pub static REGISTERS: &[RegisterEntry] = &[
    indirect!(LCAC_MC0_CNTL),
    indirect!(LCAC_MC0_OVR_SEL),
    indirect!(LCAC_MC0_OVR_VAL),
    indirect!(LCAC_MC1_CNTL),
    indirect!(LCAC_MC1_OVR_SEL),
    indirect!(LCAC_MC1_OVR_VAL),
    indirect!(LCAC_MC2_CNTL),
    indirect!(LCAC_MC2_OVR_SEL),
    indirect!(LCAC_MC2_OVR_VAL),
    indirect!(LCAC_MC3_CNTL),
    indirect!(LCAC_MC3_OVR_SEL),
    indirect!(LCAC_MC3_OVR_VAL),
    indirect!(LCAC_MC4_CNTL),
    indirect!(LCAC_MC4_OVR_SEL),
    indirect!(LCAC_MC4_OVR_VAL),
    indirect!(LCAC_MC5_CNTL),
    indirect!(LCAC_MC5_OVR_SEL),
    indirect!(LCAC_MC5_OVR_VAL),
    direct!(CG_SPLL_FUNC_CNTL),
    direct!(CG_SPLL_FUNC_CNTL_2),
    direct!(CG_SPLL_FUNC_CNTL_3),
    direct!(CG_SPLL_FUNC_CNTL_4),
    direct!(CG_SPLL_STATUS),
    direct!(SPLL_CNTL_MODE),
    direct!(CG_SPLL_SPREAD_SPECTRUM),
    direct!(CG_SPLL_SPREAD_SPECTRUM_2),
    direct!(CG_SPLL_AUTOSCALE_CNTL),
    direct!(MPLL_BYPASSCLK_SEL),
    direct!(CG_CLKPIN_CNTL),
    direct!(CG_CLKPIN_CNTL_2),
    direct!(THM_CLK_CNTL),
    direct!(MISC_CLK_CNTL),
    direct!(CG_THERMAL_CTRL),
    direct!(CG_THERMAL_STATUS),
    direct!(CG_THERMAL_INT),
    direct!(CG_MULT_THERMAL_CTRL),
    direct!(CG_MULT_THERMAL_STATUS),
    direct!(CG_FDO_CTRL0),
    direct!(CG_FDO_CTRL1),
    direct!(CG_FDO_CTRL2),
    direct!(CG_TACH_CTRL),
    direct!(CG_TACH_STATUS),
    direct!(GENERAL_PWRMGT),
    direct!(CG_TPC),
    direct!(SCLK_PWRMGT_CNTL),
    direct!(TARGET_AND_CURRENT_PROFILE_INDEX),
    direct!(CG_FTV),
    direct!(CG_FFCT_0),
    direct!(CG_BSP),
    direct!(CG_AT),
    direct!(CG_GIT),
    direct!(CG_SSP),
    direct!(CG_DISPLAY_GAP_CNTL),
    direct!(CG_ULV_CONTROL),
    direct!(CG_ULV_PARAMETER),
    direct!(SMC_SCRATCH0),
    direct!(CG_CAC_CTRL),
    indirect!(SMC_PC_C),
    indirect!(THM_TMON0_DEBUG),
    indirect!(THM_TMON0_INT_DATA),
    indirect!(THM_TMON0_RDIL0_DATA),
    indirect!(THM_TMON0_RDIL10_DATA),
    indirect!(THM_TMON0_RDIL11_DATA),
    indirect!(THM_TMON0_RDIL12_DATA),
    indirect!(THM_TMON0_RDIL13_DATA),
    indirect!(THM_TMON0_RDIL14_DATA),
    indirect!(THM_TMON0_RDIL15_DATA),
    indirect!(THM_TMON0_RDIL1_DATA),
    indirect!(THM_TMON0_RDIL2_DATA),
    indirect!(THM_TMON0_RDIL3_DATA),
    indirect!(THM_TMON0_RDIL4_DATA),
    indirect!(THM_TMON0_RDIL5_DATA),
    indirect!(THM_TMON0_RDIL6_DATA),
    indirect!(THM_TMON0_RDIL7_DATA),
    indirect!(THM_TMON0_RDIL8_DATA),
    indirect!(THM_TMON0_RDIL9_DATA),
    indirect!(THM_TMON0_RDIR0_DATA),
    indirect!(THM_TMON0_RDIR10_DATA),
    indirect!(THM_TMON0_RDIR11_DATA),
    indirect!(THM_TMON0_RDIR12_DATA),
    indirect!(THM_TMON0_RDIR13_DATA),
    indirect!(THM_TMON0_RDIR14_DATA),
    indirect!(THM_TMON0_RDIR15_DATA),
    indirect!(THM_TMON0_RDIR1_DATA),
    indirect!(THM_TMON0_RDIR2_DATA),
    indirect!(THM_TMON0_RDIR3_DATA),
    indirect!(THM_TMON0_RDIR4_DATA),
    indirect!(THM_TMON0_RDIR5_DATA),
    indirect!(THM_TMON0_RDIR6_DATA),
    indirect!(THM_TMON0_RDIR7_DATA),
    indirect!(THM_TMON0_RDIR8_DATA),
    indirect!(THM_TMON0_RDIR9_DATA),
    indirect!(THM_TMON1_DEBUG),
    indirect!(THM_TMON1_INT_DATA),
    indirect!(THM_TMON1_RDIL0_DATA),
    indirect!(THM_TMON1_RDIL10_DATA),
    indirect!(THM_TMON1_RDIL11_DATA),
    indirect!(THM_TMON1_RDIL12_DATA),
    indirect!(THM_TMON1_RDIL13_DATA),
    indirect!(THM_TMON1_RDIL14_DATA),
    indirect!(THM_TMON1_RDIL15_DATA),
    indirect!(THM_TMON1_RDIL1_DATA),
    indirect!(THM_TMON1_RDIL2_DATA),
    indirect!(THM_TMON1_RDIL3_DATA),
    indirect!(THM_TMON1_RDIL4_DATA),
    indirect!(THM_TMON1_RDIL5_DATA),
    indirect!(THM_TMON1_RDIL6_DATA),
    indirect!(THM_TMON1_RDIL7_DATA),
    indirect!(THM_TMON1_RDIL8_DATA),
    indirect!(THM_TMON1_RDIL9_DATA),
    indirect!(THM_TMON1_RDIR0_DATA),
    indirect!(THM_TMON1_RDIR10_DATA),
    indirect!(THM_TMON1_RDIR11_DATA),
    indirect!(THM_TMON1_RDIR12_DATA),
    indirect!(THM_TMON1_RDIR13_DATA),
    indirect!(THM_TMON1_RDIR14_DATA),
    indirect!(THM_TMON1_RDIR15_DATA),
    indirect!(THM_TMON1_RDIR1_DATA),
    indirect!(THM_TMON1_RDIR2_DATA),
    indirect!(THM_TMON1_RDIR3_DATA),
    indirect!(THM_TMON1_RDIR4_DATA),
    indirect!(THM_TMON1_RDIR5_DATA),
    indirect!(THM_TMON1_RDIR6_DATA),
    indirect!(THM_TMON1_RDIR7_DATA),
    indirect!(THM_TMON1_RDIR8_DATA),
    indirect!(THM_TMON1_RDIR9_DATA),
    direct!(GPIOPAD_A),
    direct!(GPIOPAD_EN),
    direct!(GPIOPAD_EXTERN_TRIG_CNTL),
    direct!(GPIOPAD_INT_EN),
    direct!(GPIOPAD_INT_POLARITY),
    direct!(GPIOPAD_INT_STAT),
    direct!(GPIOPAD_INT_STAT_AK),
    direct!(GPIOPAD_INT_STAT_EN),
    direct!(GPIOPAD_INT_TYPE),
    direct!(GPIOPAD_MASK),
    direct!(GPIOPAD_PD_EN),
    direct!(GPIOPAD_PINSTRAPS),
    direct!(GPIOPAD_PU_EN),
    direct!(GPIOPAD_RCVR_SEL),
    direct!(GPIOPAD_STRENGTH),
    direct!(GPIOPAD_SW_INT_STAT),
    direct!(GPIOPAD_Y),
    direct!(SMC_IND_ACCESS_CNTL),
    direct!(SMC_IND_DATA_0),
    direct!(SMC_IND_DATA),
    direct!(SMC_IND_DATA_1),
    direct!(SMC_IND_DATA_2),
    direct!(SMC_IND_DATA_3),
    direct!(SMC_IND_INDEX_0),
    direct!(SMC_IND_INDEX),
    direct!(SMC_IND_INDEX_1),
    direct!(SMC_IND_INDEX_2),
    direct!(SMC_IND_INDEX_3),
    direct!(SMC_MESSAGE_0),
    direct!(SMC_MESSAGE_1),
    direct!(SMC_MESSAGE_2),
    direct!(SMC_RESP_0),
    direct!(SMC_RESP_1),
    direct!(SMC_RESP_2),
];

/// Looks up a register by its full symbol, e.g. `"mmSMC_IND_INDEX_0"`.
pub fn lookup(name: &str) -> Option<&'static RegisterEntry> {
    REGISTERS.iter().find(|e| e.name == name)
}

/// Like [`lookup`], restricted to direct registers.
pub fn lookup_mm(name: &str) -> Option<MmReg> {
    match lookup(name)?.reg {
        Register::Mm(reg) => Some(reg),
        Register::Ix(_) => None,
    }
}

/// Like [`lookup`], restricted to indirect registers.
pub fn lookup_ix(name: &str) -> Option<IxReg> {
    match lookup(name)?.reg {
        Register::Ix(reg) => Some(reg),
        Register::Mm(_) => None,
    }
}

/// Canonical symbol of a direct register.
pub fn mm_name(reg: MmReg) -> Option<&'static str> {
    REGISTERS
        .iter()
        .find(|e| e.reg == Register::Mm(reg))
        .map(|e| e.name)
}

/// Canonical symbol of an indirect register.
pub fn ix_name(reg: IxReg) -> Option<&'static str> {
    REGISTERS
        .iter()
        .find(|e| e.reg == Register::Ix(reg))
        .map(|e| e.name)
}

/// Iterates over the entries of one address space.
pub fn in_space(space: Space) -> impl Iterator<Item = &'static RegisterEntry> {
    REGISTERS.iter().filter(move |e| e.space() == space)
}
