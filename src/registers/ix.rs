//! Indirectly accessed SMU registers (`ix*` in the hardware headers).
//!
//! These are indices, not addresses. Write one into an `SMC_IND_INDEX_n`
//! register and the value shows up in the matching `SMC_IND_DATA_n`; see
//! [`crate::SmcIndirect`].

use super::IxReg;
use crate::err::SmuError;

// LCAC: local/average current control, one CNTL/OVR_SEL/OVR_VAL triple per
// memory channel.

pub const LCAC_MC0_CNTL: IxReg = IxReg::new(0x011C);
pub const LCAC_MC0_OVR_SEL: IxReg = IxReg::new(0x011D);
pub const LCAC_MC0_OVR_VAL: IxReg = IxReg::new(0x011E);
pub const LCAC_MC1_CNTL: IxReg = IxReg::new(0x011F);
pub const LCAC_MC1_OVR_SEL: IxReg = IxReg::new(0x0120);
pub const LCAC_MC1_OVR_VAL: IxReg = IxReg::new(0x0121);
pub const LCAC_MC2_CNTL: IxReg = IxReg::new(0x0122);
pub const LCAC_MC2_OVR_SEL: IxReg = IxReg::new(0x0123);
pub const LCAC_MC2_OVR_VAL: IxReg = IxReg::new(0x0124);
pub const LCAC_MC3_CNTL: IxReg = IxReg::new(0x0125);
pub const LCAC_MC3_OVR_SEL: IxReg = IxReg::new(0x0126);
pub const LCAC_MC3_OVR_VAL: IxReg = IxReg::new(0x0127);
pub const LCAC_MC4_CNTL: IxReg = IxReg::new(0x0128);
pub const LCAC_MC4_OVR_SEL: IxReg = IxReg::new(0x0129);
pub const LCAC_MC4_OVR_VAL: IxReg = IxReg::new(0x012A);
pub const LCAC_MC5_CNTL: IxReg = IxReg::new(0x012B);
pub const LCAC_MC5_OVR_SEL: IxReg = IxReg::new(0x012C);
pub const LCAC_MC5_OVR_VAL: IxReg = IxReg::new(0x012D);

/// Number of LCAC memory channels.
pub const LCAC_MC_COUNT: u8 = 6;

/// The three LCAC registers of one memory channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcacMc {
    pub cntl: IxReg,
    pub ovr_sel: IxReg,
    pub ovr_val: IxReg,
}

/// LCAC registers for memory channel `channel`.
pub const fn lcac_mc(channel: u8) -> Result<LcacMc, SmuError> {
    if channel >= LCAC_MC_COUNT {
        return Err(SmuError::InvalidLcacChannel(channel));
    }
    let cntl = LCAC_MC0_CNTL.add(channel as u32 * 3);
    Ok(LcacMc {
        cntl,
        ovr_sel: cntl.add(1),
        ovr_val: cntl.add(2),
    })
}

/// SMC program counter. The only index that does not fit in 16 bits.
pub const SMC_PC_C: IxReg = IxReg::new(0x8000_0370);

// THM_TMON: thermal monitors. Each instance reports 16 "left" (RDIL) and
// 16 "right" (RDIR) diode readings.

/// Number of thermal monitor instances.
pub const TMON_COUNT: u8 = 2;
/// Diode readings per side of one monitor.
pub const TMON_DIODES: usize = 16;
/// Index distance between two monitor instances.
pub const TMON_STRIDE: u32 = 0x20;

// Thermal monitor 0
pub const THM_TMON0_RDIL0_DATA: IxReg = IxReg::new(0x0300);
pub const THM_TMON0_RDIL1_DATA: IxReg = IxReg::new(0x0301);
pub const THM_TMON0_RDIL2_DATA: IxReg = IxReg::new(0x0302);
pub const THM_TMON0_RDIL3_DATA: IxReg = IxReg::new(0x0303);
pub const THM_TMON0_RDIL4_DATA: IxReg = IxReg::new(0x0304);
pub const THM_TMON0_RDIL5_DATA: IxReg = IxReg::new(0x0305);
pub const THM_TMON0_RDIL6_DATA: IxReg = IxReg::new(0x0306);
pub const THM_TMON0_RDIL7_DATA: IxReg = IxReg::new(0x0307);
pub const THM_TMON0_RDIL8_DATA: IxReg = IxReg::new(0x0308);
pub const THM_TMON0_RDIL9_DATA: IxReg = IxReg::new(0x0309);
pub const THM_TMON0_RDIL10_DATA: IxReg = IxReg::new(0x030A);
pub const THM_TMON0_RDIL11_DATA: IxReg = IxReg::new(0x030B);
pub const THM_TMON0_RDIL12_DATA: IxReg = IxReg::new(0x030C);
pub const THM_TMON0_RDIL13_DATA: IxReg = IxReg::new(0x030D);
pub const THM_TMON0_RDIL14_DATA: IxReg = IxReg::new(0x030E);
pub const THM_TMON0_RDIL15_DATA: IxReg = IxReg::new(0x030F);
pub const THM_TMON0_RDIR0_DATA: IxReg = IxReg::new(0x0310);
pub const THM_TMON0_RDIR1_DATA: IxReg = IxReg::new(0x0311);
pub const THM_TMON0_RDIR2_DATA: IxReg = IxReg::new(0x0312);
pub const THM_TMON0_RDIR3_DATA: IxReg = IxReg::new(0x0313);
pub const THM_TMON0_RDIR4_DATA: IxReg = IxReg::new(0x0314);
pub const THM_TMON0_RDIR5_DATA: IxReg = IxReg::new(0x0315);
pub const THM_TMON0_RDIR6_DATA: IxReg = IxReg::new(0x0316);
pub const THM_TMON0_RDIR7_DATA: IxReg = IxReg::new(0x0317);
pub const THM_TMON0_RDIR8_DATA: IxReg = IxReg::new(0x0318);
pub const THM_TMON0_RDIR9_DATA: IxReg = IxReg::new(0x0319);
pub const THM_TMON0_RDIR10_DATA: IxReg = IxReg::new(0x031A);
pub const THM_TMON0_RDIR11_DATA: IxReg = IxReg::new(0x031B);
pub const THM_TMON0_RDIR12_DATA: IxReg = IxReg::new(0x031C);
pub const THM_TMON0_RDIR13_DATA: IxReg = IxReg::new(0x031D);
pub const THM_TMON0_RDIR14_DATA: IxReg = IxReg::new(0x031E);
pub const THM_TMON0_RDIR15_DATA: IxReg = IxReg::new(0x031F);
pub const THM_TMON0_INT_DATA: IxReg = IxReg::new(0x0380);
pub const THM_TMON0_DEBUG: IxReg = IxReg::new(0x03F0);

pub const TMON0_RDIL: [IxReg; TMON_DIODES] = [
    THM_TMON0_RDIL0_DATA,
    THM_TMON0_RDIL1_DATA,
    THM_TMON0_RDIL2_DATA,
    THM_TMON0_RDIL3_DATA,
    THM_TMON0_RDIL4_DATA,
    THM_TMON0_RDIL5_DATA,
    THM_TMON0_RDIL6_DATA,
    THM_TMON0_RDIL7_DATA,
    THM_TMON0_RDIL8_DATA,
    THM_TMON0_RDIL9_DATA,
    THM_TMON0_RDIL10_DATA,
    THM_TMON0_RDIL11_DATA,
    THM_TMON0_RDIL12_DATA,
    THM_TMON0_RDIL13_DATA,
    THM_TMON0_RDIL14_DATA,
    THM_TMON0_RDIL15_DATA,
];

pub const TMON0_RDIR: [IxReg; TMON_DIODES] = [
    THM_TMON0_RDIR0_DATA,
    THM_TMON0_RDIR1_DATA,
    THM_TMON0_RDIR2_DATA,
    THM_TMON0_RDIR3_DATA,
    THM_TMON0_RDIR4_DATA,
    THM_TMON0_RDIR5_DATA,
    THM_TMON0_RDIR6_DATA,
    THM_TMON0_RDIR7_DATA,
    THM_TMON0_RDIR8_DATA,
    THM_TMON0_RDIR9_DATA,
    THM_TMON0_RDIR10_DATA,
    THM_TMON0_RDIR11_DATA,
    THM_TMON0_RDIR12_DATA,
    THM_TMON0_RDIR13_DATA,
    THM_TMON0_RDIR14_DATA,
    THM_TMON0_RDIR15_DATA,
];

// Thermal monitor 1
pub const THM_TMON1_RDIL0_DATA: IxReg = IxReg::new(0x0320);
pub const THM_TMON1_RDIL1_DATA: IxReg = IxReg::new(0x0321);
pub const THM_TMON1_RDIL2_DATA: IxReg = IxReg::new(0x0322);
pub const THM_TMON1_RDIL3_DATA: IxReg = IxReg::new(0x0323);
pub const THM_TMON1_RDIL4_DATA: IxReg = IxReg::new(0x0324);
pub const THM_TMON1_RDIL5_DATA: IxReg = IxReg::new(0x0325);
pub const THM_TMON1_RDIL6_DATA: IxReg = IxReg::new(0x0326);
pub const THM_TMON1_RDIL7_DATA: IxReg = IxReg::new(0x0327);
pub const THM_TMON1_RDIL8_DATA: IxReg = IxReg::new(0x0328);
pub const THM_TMON1_RDIL9_DATA: IxReg = IxReg::new(0x0329);
pub const THM_TMON1_RDIL10_DATA: IxReg = IxReg::new(0x032A);
pub const THM_TMON1_RDIL11_DATA: IxReg = IxReg::new(0x032B);
pub const THM_TMON1_RDIL12_DATA: IxReg = IxReg::new(0x032C);
pub const THM_TMON1_RDIL13_DATA: IxReg = IxReg::new(0x032D);
pub const THM_TMON1_RDIL14_DATA: IxReg = IxReg::new(0x032E);
pub const THM_TMON1_RDIL15_DATA: IxReg = IxReg::new(0x032F);
pub const THM_TMON1_RDIR0_DATA: IxReg = IxReg::new(0x0330);
pub const THM_TMON1_RDIR1_DATA: IxReg = IxReg::new(0x0331);
pub const THM_TMON1_RDIR2_DATA: IxReg = IxReg::new(0x0332);
pub const THM_TMON1_RDIR3_DATA: IxReg = IxReg::new(0x0333);
pub const THM_TMON1_RDIR4_DATA: IxReg = IxReg::new(0x0334);
pub const THM_TMON1_RDIR5_DATA: IxReg = IxReg::new(0x0335);
pub const THM_TMON1_RDIR6_DATA: IxReg = IxReg::new(0x0336);
pub const THM_TMON1_RDIR7_DATA: IxReg = IxReg::new(0x0337);
pub const THM_TMON1_RDIR8_DATA: IxReg = IxReg::new(0x0338);
pub const THM_TMON1_RDIR9_DATA: IxReg = IxReg::new(0x0339);
pub const THM_TMON1_RDIR10_DATA: IxReg = IxReg::new(0x033A);
pub const THM_TMON1_RDIR11_DATA: IxReg = IxReg::new(0x033B);
pub const THM_TMON1_RDIR12_DATA: IxReg = IxReg::new(0x033C);
pub const THM_TMON1_RDIR13_DATA: IxReg = IxReg::new(0x033D);
pub const THM_TMON1_RDIR14_DATA: IxReg = IxReg::new(0x033E);
pub const THM_TMON1_RDIR15_DATA: IxReg = IxReg::new(0x033F);
pub const THM_TMON1_INT_DATA: IxReg = IxReg::new(0x0381);
pub const THM_TMON1_DEBUG: IxReg = IxReg::new(0x03F1);

pub const TMON1_RDIL: [IxReg; TMON_DIODES] = [
    THM_TMON1_RDIL0_DATA,
    THM_TMON1_RDIL1_DATA,
    THM_TMON1_RDIL2_DATA,
    THM_TMON1_RDIL3_DATA,
    THM_TMON1_RDIL4_DATA,
    THM_TMON1_RDIL5_DATA,
    THM_TMON1_RDIL6_DATA,
    THM_TMON1_RDIL7_DATA,
    THM_TMON1_RDIL8_DATA,
    THM_TMON1_RDIL9_DATA,
    THM_TMON1_RDIL10_DATA,
    THM_TMON1_RDIL11_DATA,
    THM_TMON1_RDIL12_DATA,
    THM_TMON1_RDIL13_DATA,
    THM_TMON1_RDIL14_DATA,
    THM_TMON1_RDIL15_DATA,
];

pub const TMON1_RDIR: [IxReg; TMON_DIODES] = [
    THM_TMON1_RDIR0_DATA,
    THM_TMON1_RDIR1_DATA,
    THM_TMON1_RDIR2_DATA,
    THM_TMON1_RDIR3_DATA,
    THM_TMON1_RDIR4_DATA,
    THM_TMON1_RDIR5_DATA,
    THM_TMON1_RDIR6_DATA,
    THM_TMON1_RDIR7_DATA,
    THM_TMON1_RDIR8_DATA,
    THM_TMON1_RDIR9_DATA,
    THM_TMON1_RDIR10_DATA,
    THM_TMON1_RDIR11_DATA,
    THM_TMON1_RDIR12_DATA,
    THM_TMON1_RDIR13_DATA,
    THM_TMON1_RDIR14_DATA,
    THM_TMON1_RDIR15_DATA,
];

/// One thermal monitor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tmon {
    instance: u8,
}

impl Tmon {
    pub const fn new(instance: u8) -> Result<Self, SmuError> {
        if instance >= TMON_COUNT {
            return Err(SmuError::InvalidMonitor(instance));
        }
        Ok(Self { instance })
    }

    pub const fn instance(&self) -> u8 {
        self.instance
    }

    /// Left diode reading `diode`.
    pub const fn rdil(&self, diode: u8) -> Result<IxReg, SmuError> {
        if diode as usize >= TMON_DIODES {
            return Err(SmuError::InvalidDiode(diode));
        }
        Ok(THM_TMON0_RDIL0_DATA.add(self.instance as u32 * TMON_STRIDE + diode as u32))
    }

    /// Right diode reading `diode`.
    pub const fn rdir(&self, diode: u8) -> Result<IxReg, SmuError> {
        if diode as usize >= TMON_DIODES {
            return Err(SmuError::InvalidDiode(diode));
        }
        Ok(THM_TMON0_RDIR0_DATA.add(self.instance as u32 * TMON_STRIDE + diode as u32))
    }

    pub const fn int_data(&self) -> IxReg {
        THM_TMON0_INT_DATA.add(self.instance as u32)
    }

    pub const fn debug(&self) -> IxReg {
        THM_TMON0_DEBUG.add(self.instance as u32)
    }

    /// All left diode registers of this instance.
    pub fn rdil_all(&self) -> &'static [IxReg; TMON_DIODES] {
        match self.instance {
            0 => &TMON0_RDIL,
            _ => &TMON1_RDIL,
        }
    }

    /// All right diode registers of this instance.
    pub fn rdir_all(&self) -> &'static [IxReg; TMON_DIODES] {
        match self.instance {
            0 => &TMON0_RDIR,
            _ => &TMON1_RDIR,
        }
    }
}
