//! Directly mapped SMU registers (`mm*` in the hardware headers).
//!
//! Values are dword offsets into the MMIO BAR; see [`MmReg::byte_offset`]
//! for the byte address.

use super::MmReg;

// Clock generation: SPLL and misc clocks

pub const CG_SPLL_FUNC_CNTL: MmReg = MmReg::new(0x0180);
pub const CG_SPLL_FUNC_CNTL_2: MmReg = MmReg::new(0x0181);
pub const CG_SPLL_FUNC_CNTL_3: MmReg = MmReg::new(0x0182);
pub const CG_SPLL_FUNC_CNTL_4: MmReg = MmReg::new(0x0183);
pub const CG_SPLL_STATUS: MmReg = MmReg::new(0x0185);
pub const SPLL_CNTL_MODE: MmReg = MmReg::new(0x0186);
pub const CG_SPLL_SPREAD_SPECTRUM: MmReg = MmReg::new(0x0188);
pub const CG_SPLL_SPREAD_SPECTRUM_2: MmReg = MmReg::new(0x0189);
pub const CG_SPLL_AUTOSCALE_CNTL: MmReg = MmReg::new(0x018B);
pub const MPLL_BYPASSCLK_SEL: MmReg = MmReg::new(0x0197);
pub const CG_CLKPIN_CNTL: MmReg = MmReg::new(0x0198);
pub const CG_CLKPIN_CNTL_2: MmReg = MmReg::new(0x0199);
/// Thermal block clock control.
pub const THM_CLK_CNTL: MmReg = MmReg::new(0x019B);
pub const MISC_CLK_CNTL: MmReg = MmReg::new(0x019C);

// Thermal control and fan

pub const CG_THERMAL_CTRL: MmReg = MmReg::new(0x01C0);
pub const CG_THERMAL_STATUS: MmReg = MmReg::new(0x01C1);
pub const CG_THERMAL_INT: MmReg = MmReg::new(0x01C2);
pub const CG_MULT_THERMAL_CTRL: MmReg = MmReg::new(0x01C4);
pub const CG_MULT_THERMAL_STATUS: MmReg = MmReg::new(0x01C5);
/// Fan duty-cycle output control.
pub const CG_FDO_CTRL0: MmReg = MmReg::new(0x01D5);
pub const CG_FDO_CTRL1: MmReg = MmReg::new(0x01D6);
pub const CG_FDO_CTRL2: MmReg = MmReg::new(0x01D7);
/// Fan tachometer.
pub const CG_TACH_CTRL: MmReg = MmReg::new(0x01DC);
pub const CG_TACH_STATUS: MmReg = MmReg::new(0x01DD);

// Power management

pub const GENERAL_PWRMGT: MmReg = MmReg::new(0x01E0);
pub const CG_TPC: MmReg = MmReg::new(0x01E1);
pub const SCLK_PWRMGT_CNTL: MmReg = MmReg::new(0x01E2);
/// Target and current power-state profile index.
pub const TARGET_AND_CURRENT_PROFILE_INDEX: MmReg = MmReg::new(0x01E6);
pub const CG_FTV: MmReg = MmReg::new(0x01EF);
pub const CG_FFCT_0: MmReg = MmReg::new(0x01F0);
pub const CG_BSP: MmReg = MmReg::new(0x01FF);
pub const CG_AT: MmReg = MmReg::new(0x0200);
pub const CG_GIT: MmReg = MmReg::new(0x0201);
pub const CG_SSP: MmReg = MmReg::new(0x0203);
pub const CG_DISPLAY_GAP_CNTL: MmReg = MmReg::new(0x020A);
/// Ultra-low-voltage state control.
pub const CG_ULV_CONTROL: MmReg = MmReg::new(0x021E);
pub const CG_ULV_PARAMETER: MmReg = MmReg::new(0x021F);
pub const SMC_SCRATCH0: MmReg = MmReg::new(0x0221);
pub const CG_CAC_CTRL: MmReg = MmReg::new(0x022E);

// GPIO pads

pub const GPIOPAD_SW_INT_STAT: MmReg = MmReg::new(0x05E4);
pub const GPIOPAD_STRENGTH: MmReg = MmReg::new(0x05E5);
pub const GPIOPAD_MASK: MmReg = MmReg::new(0x05E6);
pub const GPIOPAD_A: MmReg = MmReg::new(0x05E7);
pub const GPIOPAD_EN: MmReg = MmReg::new(0x05E8);
pub const GPIOPAD_Y: MmReg = MmReg::new(0x05E9);
pub const GPIOPAD_PINSTRAPS: MmReg = MmReg::new(0x05EA);
pub const GPIOPAD_INT_STAT_EN: MmReg = MmReg::new(0x05EB);
pub const GPIOPAD_INT_STAT: MmReg = MmReg::new(0x05EC);
pub const GPIOPAD_INT_STAT_AK: MmReg = MmReg::new(0x05ED);
pub const GPIOPAD_INT_EN: MmReg = MmReg::new(0x05EE);
pub const GPIOPAD_INT_TYPE: MmReg = MmReg::new(0x05EF);
pub const GPIOPAD_INT_POLARITY: MmReg = MmReg::new(0x05F0);
pub const GPIOPAD_EXTERN_TRIG_CNTL: MmReg = MmReg::new(0x05F1);
pub const GPIOPAD_RCVR_SEL: MmReg = MmReg::new(0x05F2);
pub const GPIOPAD_PU_EN: MmReg = MmReg::new(0x05F3);
pub const GPIOPAD_PD_EN: MmReg = MmReg::new(0x05F4);

/// First register of the GPIO pad block.
pub const GPIOPAD_FIRST: MmReg = GPIOPAD_SW_INT_STAT;
/// Last register of the GPIO pad block (inclusive).
pub const GPIOPAD_LAST: MmReg = GPIOPAD_PD_EN;

/// The whole GPIO pad block in offset order.
pub const GPIOPAD: [MmReg; 17] = [
    GPIOPAD_SW_INT_STAT,
    GPIOPAD_STRENGTH,
    GPIOPAD_MASK,
    GPIOPAD_A,
    GPIOPAD_EN,
    GPIOPAD_Y,
    GPIOPAD_PINSTRAPS,
    GPIOPAD_INT_STAT_EN,
    GPIOPAD_INT_STAT,
    GPIOPAD_INT_STAT_AK,
    GPIOPAD_INT_EN,
    GPIOPAD_INT_TYPE,
    GPIOPAD_INT_POLARITY,
    GPIOPAD_EXTERN_TRIG_CNTL,
    GPIOPAD_RCVR_SEL,
    GPIOPAD_PU_EN,
    GPIOPAD_PD_EN,
];

// SMC indirect port and mailbox

pub const SMC_IND_INDEX_0: MmReg = MmReg::new(0x0080);
pub const SMC_IND_DATA_0: MmReg = MmReg::new(0x0081);
pub const SMC_IND_INDEX_1: MmReg = MmReg::new(0x0082);
pub const SMC_IND_DATA_1: MmReg = MmReg::new(0x0083);
pub const SMC_IND_INDEX_2: MmReg = MmReg::new(0x0084);
pub const SMC_IND_DATA_2: MmReg = MmReg::new(0x0085);
pub const SMC_IND_INDEX_3: MmReg = MmReg::new(0x0086);
pub const SMC_IND_DATA_3: MmReg = MmReg::new(0x0087);
/// Alias of [`SMC_IND_INDEX_0`].
pub const SMC_IND_INDEX: MmReg = MmReg::new(0x0080);
/// Alias of [`SMC_IND_DATA_0`].
pub const SMC_IND_DATA: MmReg = MmReg::new(0x0081);
pub const SMC_IND_ACCESS_CNTL: MmReg = MmReg::new(0x008A);
pub const SMC_MESSAGE_0: MmReg = MmReg::new(0x008B);
pub const SMC_RESP_0: MmReg = MmReg::new(0x008C);
pub const SMC_MESSAGE_1: MmReg = MmReg::new(0x008D);
pub const SMC_RESP_1: MmReg = MmReg::new(0x008E);
pub const SMC_MESSAGE_2: MmReg = MmReg::new(0x008F);
pub const SMC_RESP_2: MmReg = MmReg::new(0x0090);

/// Index registers of the four SMC index/data port pairs.
pub const SMC_IND_INDEX_PORTS: [MmReg; 4] = [
    SMC_IND_INDEX_0,
    SMC_IND_INDEX_1,
    SMC_IND_INDEX_2,
    SMC_IND_INDEX_3,
];

/// Data registers paired with [`SMC_IND_INDEX_PORTS`].
pub const SMC_IND_DATA_PORTS: [MmReg; 4] = [
    SMC_IND_DATA_0,
    SMC_IND_DATA_1,
    SMC_IND_DATA_2,
    SMC_IND_DATA_3,
];

pub const SMC_MESSAGES: [MmReg; 3] = [SMC_MESSAGE_0, SMC_MESSAGE_1, SMC_MESSAGE_2];
pub const SMC_RESPONSES: [MmReg; 3] = [SMC_RESP_0, SMC_RESP_1, SMC_RESP_2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_aliases_match() {
        assert_eq!(SMC_IND_DATA, SMC_IND_DATA_0);
        assert_eq!(SMC_IND_DATA.offset(), 0x0081);
        assert_eq!(SMC_IND_INDEX, SMC_IND_INDEX_0);
        assert_eq!(SMC_IND_INDEX.offset(), 0x0080);
    }

    #[test]
    fn ports_interleave_index_and_data() {
        for (index, data) in SMC_IND_INDEX_PORTS.iter().zip(SMC_IND_DATA_PORTS.iter()) {
            assert_eq!(index.add(1), *data);
        }
    }

    #[test]
    fn gpiopad_block_has_no_gaps() {
        assert_eq!(GPIOPAD_FIRST.offset(), 0x05E4);
        assert_eq!(GPIOPAD_LAST.offset(), 0x05F4);
        for (i, reg) in GPIOPAD.iter().enumerate() {
            assert_eq!(reg.offset(), GPIOPAD_FIRST.offset() + i as u32);
        }
    }

    #[test]
    fn mailboxes_pair_message_with_response() {
        for (msg, resp) in SMC_MESSAGES.iter().zip(SMC_RESPONSES.iter()) {
            assert_eq!(msg.add(1), *resp);
        }
    }
}
