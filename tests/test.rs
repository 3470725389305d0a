use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use smu6::registers::table::{self, REGISTERS};
use smu6::{
    AsicType, IndPort, IxReg, MmReg, Register, RegisterAccess, SmcIndirect, SmuConfig, SmuError,
    Space, ix, mm,
};

/// Every symbol of the hardware register database and its value.
const SOURCE: &[(&str, u32)] = &[
    ("ixLCAC_MC0_CNTL", 0x011C),
    ("ixLCAC_MC0_OVR_SEL", 0x011D),
    ("ixLCAC_MC0_OVR_VAL", 0x011E),
    ("ixLCAC_MC1_CNTL", 0x011F),
    ("ixLCAC_MC1_OVR_SEL", 0x0120),
    ("ixLCAC_MC1_OVR_VAL", 0x0121),
    ("ixLCAC_MC2_CNTL", 0x0122),
    ("ixLCAC_MC2_OVR_SEL", 0x0123),
    ("ixLCAC_MC2_OVR_VAL", 0x0124),
    ("ixLCAC_MC3_CNTL", 0x0125),
    ("ixLCAC_MC3_OVR_SEL", 0x0126),
    ("ixLCAC_MC3_OVR_VAL", 0x0127),
    ("ixLCAC_MC4_CNTL", 0x0128),
    ("ixLCAC_MC4_OVR_SEL", 0x0129),
    ("ixLCAC_MC4_OVR_VAL", 0x012A),
    ("ixLCAC_MC5_CNTL", 0x012B),
    ("ixLCAC_MC5_OVR_SEL", 0x012C),
    ("ixLCAC_MC5_OVR_VAL", 0x012D),
    ("mmCG_SPLL_FUNC_CNTL", 0x0180),
    ("mmCG_SPLL_FUNC_CNTL_2", 0x0181),
    ("mmCG_SPLL_FUNC_CNTL_3", 0x0182),
    ("mmCG_SPLL_FUNC_CNTL_4", 0x0183),
    ("mmCG_SPLL_STATUS", 0x0185),
    ("mmSPLL_CNTL_MODE", 0x0186),
    ("mmCG_SPLL_SPREAD_SPECTRUM", 0x0188),
    ("mmCG_SPLL_SPREAD_SPECTRUM_2", 0x0189),
    ("mmCG_SPLL_AUTOSCALE_CNTL", 0x018B),
    ("mmMPLL_BYPASSCLK_SEL", 0x0197),
    ("mmCG_CLKPIN_CNTL", 0x0198),
    ("mmCG_CLKPIN_CNTL_2", 0x0199),
    ("mmTHM_CLK_CNTL", 0x019B),
    ("mmMISC_CLK_CNTL", 0x019C),
    ("mmCG_THERMAL_CTRL", 0x01C0),
    ("mmCG_THERMAL_STATUS", 0x01C1),
    ("mmCG_THERMAL_INT", 0x01C2),
    ("mmCG_MULT_THERMAL_CTRL", 0x01C4),
    ("mmCG_MULT_THERMAL_STATUS", 0x01C5),
    ("mmCG_FDO_CTRL0", 0x01D5),
    ("mmCG_FDO_CTRL1", 0x01D6),
    ("mmCG_FDO_CTRL2", 0x01D7),
    ("mmCG_TACH_CTRL", 0x01DC),
    ("mmCG_TACH_STATUS", 0x01DD),
    ("mmGENERAL_PWRMGT", 0x1E0),
    ("mmCG_TPC", 0x1E1),
    ("mmSCLK_PWRMGT_CNTL", 0x1E2),
    ("mmTARGET_AND_CURRENT_PROFILE_INDEX", 0x01E6),
    ("mmCG_FTV", 0x01EF),
    ("mmCG_FFCT_0", 0x01F0),
    ("mmCG_BSP", 0x01FF),
    ("mmCG_AT", 0x0200),
    ("mmCG_GIT", 0x0201),
    ("mmCG_SSP", 0x0203),
    ("mmCG_DISPLAY_GAP_CNTL", 0x020A),
    ("mmCG_ULV_CONTROL", 0x021E),
    ("mmCG_ULV_PARAMETER", 0x021F),
    ("mmSMC_SCRATCH0", 0x0221),
    ("mmCG_CAC_CTRL", 0x022E),
    ("ixSMC_PC_C", 0x80000370),
    ("ixTHM_TMON0_DEBUG", 0x03F0),
    ("ixTHM_TMON0_INT_DATA", 0x0380),
    ("ixTHM_TMON0_RDIL0_DATA", 0x0300),
    ("ixTHM_TMON0_RDIL10_DATA", 0x030A),
    ("ixTHM_TMON0_RDIL11_DATA", 0x030B),
    ("ixTHM_TMON0_RDIL12_DATA", 0x030C),
    ("ixTHM_TMON0_RDIL13_DATA", 0x030D),
    ("ixTHM_TMON0_RDIL14_DATA", 0x030E),
    ("ixTHM_TMON0_RDIL15_DATA", 0x030F),
    ("ixTHM_TMON0_RDIL1_DATA", 0x0301),
    ("ixTHM_TMON0_RDIL2_DATA", 0x0302),
    ("ixTHM_TMON0_RDIL3_DATA", 0x0303),
    ("ixTHM_TMON0_RDIL4_DATA", 0x0304),
    ("ixTHM_TMON0_RDIL5_DATA", 0x0305),
    ("ixTHM_TMON0_RDIL6_DATA", 0x0306),
    ("ixTHM_TMON0_RDIL7_DATA", 0x0307),
    ("ixTHM_TMON0_RDIL8_DATA", 0x0308),
    ("ixTHM_TMON0_RDIL9_DATA", 0x0309),
    ("ixTHM_TMON0_RDIR0_DATA", 0x0310),
    ("ixTHM_TMON0_RDIR10_DATA", 0x031A),
    ("ixTHM_TMON0_RDIR11_DATA", 0x031B),
    ("ixTHM_TMON0_RDIR12_DATA", 0x031C),
    ("ixTHM_TMON0_RDIR13_DATA", 0x031D),
    ("ixTHM_TMON0_RDIR14_DATA", 0x031E),
    ("ixTHM_TMON0_RDIR15_DATA", 0x031F),
    ("ixTHM_TMON0_RDIR1_DATA", 0x0311),
    ("ixTHM_TMON0_RDIR2_DATA", 0x0312),
    ("ixTHM_TMON0_RDIR3_DATA", 0x0313),
    ("ixTHM_TMON0_RDIR4_DATA", 0x0314),
    ("ixTHM_TMON0_RDIR5_DATA", 0x0315),
    ("ixTHM_TMON0_RDIR6_DATA", 0x0316),
    ("ixTHM_TMON0_RDIR7_DATA", 0x0317),
    ("ixTHM_TMON0_RDIR8_DATA", 0x0318),
    ("ixTHM_TMON0_RDIR9_DATA", 0x0319),
    ("ixTHM_TMON1_DEBUG", 0x03F1),
    ("ixTHM_TMON1_INT_DATA", 0x0381),
    ("ixTHM_TMON1_RDIL0_DATA", 0x0320),
    ("ixTHM_TMON1_RDIL10_DATA", 0x032A),
    ("ixTHM_TMON1_RDIL11_DATA", 0x032B),
    ("ixTHM_TMON1_RDIL12_DATA", 0x032C),
    ("ixTHM_TMON1_RDIL13_DATA", 0x032D),
    ("ixTHM_TMON1_RDIL14_DATA", 0x032E),
    ("ixTHM_TMON1_RDIL15_DATA", 0x032F),
    ("ixTHM_TMON1_RDIL1_DATA", 0x0321),
    ("ixTHM_TMON1_RDIL2_DATA", 0x0322),
    ("ixTHM_TMON1_RDIL3_DATA", 0x0323),
    ("ixTHM_TMON1_RDIL4_DATA", 0x0324),
    ("ixTHM_TMON1_RDIL5_DATA", 0x0325),
    ("ixTHM_TMON1_RDIL6_DATA", 0x0326),
    ("ixTHM_TMON1_RDIL7_DATA", 0x0327),
    ("ixTHM_TMON1_RDIL8_DATA", 0x0328),
    ("ixTHM_TMON1_RDIL9_DATA", 0x0329),
    ("ixTHM_TMON1_RDIR0_DATA", 0x0330),
    ("ixTHM_TMON1_RDIR10_DATA", 0x033A),
    ("ixTHM_TMON1_RDIR11_DATA", 0x033B),
    ("ixTHM_TMON1_RDIR12_DATA", 0x033C),
    ("ixTHM_TMON1_RDIR13_DATA", 0x033D),
    ("ixTHM_TMON1_RDIR14_DATA", 0x033E),
    ("ixTHM_TMON1_RDIR15_DATA", 0x033F),
    ("ixTHM_TMON1_RDIR1_DATA", 0x0331),
    ("ixTHM_TMON1_RDIR2_DATA", 0x0332),
    ("ixTHM_TMON1_RDIR3_DATA", 0x0333),
    ("ixTHM_TMON1_RDIR4_DATA", 0x0334),
    ("ixTHM_TMON1_RDIR5_DATA", 0x0335),
    ("ixTHM_TMON1_RDIR6_DATA", 0x0336),
    ("ixTHM_TMON1_RDIR7_DATA", 0x0337),
    ("ixTHM_TMON1_RDIR8_DATA", 0x0338),
    ("ixTHM_TMON1_RDIR9_DATA", 0x0339),
    ("mmGPIOPAD_A", 0x05E7),
    ("mmGPIOPAD_EN", 0x05E8),
    ("mmGPIOPAD_EXTERN_TRIG_CNTL", 0x05F1),
    ("mmGPIOPAD_INT_EN", 0x05EE),
    ("mmGPIOPAD_INT_POLARITY", 0x05F0),
    ("mmGPIOPAD_INT_STAT", 0x05EC),
    ("mmGPIOPAD_INT_STAT_AK", 0x05ED),
    ("mmGPIOPAD_INT_STAT_EN", 0x05EB),
    ("mmGPIOPAD_INT_TYPE", 0x05EF),
    ("mmGPIOPAD_MASK", 0x05E6),
    ("mmGPIOPAD_PD_EN", 0x05F4),
    ("mmGPIOPAD_PINSTRAPS", 0x05EA),
    ("mmGPIOPAD_PU_EN", 0x05F3),
    ("mmGPIOPAD_RCVR_SEL", 0x05F2),
    ("mmGPIOPAD_STRENGTH", 0x05E5),
    ("mmGPIOPAD_SW_INT_STAT", 0x05E4),
    ("mmGPIOPAD_Y", 0x05E9),
    ("mmSMC_IND_ACCESS_CNTL", 0x008A),
    ("mmSMC_IND_DATA_0", 0x0081),
    ("mmSMC_IND_DATA", 0x0081),
    ("mmSMC_IND_DATA_1", 0x0083),
    ("mmSMC_IND_DATA_2", 0x0085),
    ("mmSMC_IND_DATA_3", 0x0087),
    ("mmSMC_IND_INDEX_0", 0x0080),
    ("mmSMC_IND_INDEX", 0x0080),
    ("mmSMC_IND_INDEX_1", 0x0082),
    ("mmSMC_IND_INDEX_2", 0x0084),
    ("mmSMC_IND_INDEX_3", 0x0086),
    ("mmSMC_MESSAGE_0", 0x008B),
    ("mmSMC_MESSAGE_1", 0x008D),
    ("mmSMC_MESSAGE_2", 0x008F),
    ("mmSMC_RESP_0", 0x008C),
    ("mmSMC_RESP_1", 0x008E),
    ("mmSMC_RESP_2", 0x0090),
];

/// Register file that implements the index/data ports the way the chip does.
#[derive(Default)]
struct FakeGpu {
    direct: HashMap<u32, u32>,
    indirect: HashMap<u32, u32>,
}

impl FakeGpu {
    fn port_of(reg: MmReg) -> Option<usize> {
        mm::SMC_IND_DATA_PORTS.iter().position(|&data| data == reg)
    }

    fn index_for(&self, port: usize) -> u32 {
        self.direct
            .get(&mm::SMC_IND_INDEX_PORTS[port].offset())
            .copied()
            .unwrap_or(0)
    }
}

impl RegisterAccess for FakeGpu {
    fn read32(&mut self, reg: MmReg) -> u32 {
        match Self::port_of(reg) {
            Some(port) => {
                let index = self.index_for(port);
                self.indirect.get(&index).copied().unwrap_or(0)
            }
            None => self.direct.get(&reg.offset()).copied().unwrap_or(0),
        }
    }

    fn write32(&mut self, reg: MmReg, value: u32) {
        match Self::port_of(reg) {
            Some(port) => {
                let index = self.index_for(port);
                self.indirect.insert(index, value);
            }
            None => {
                self.direct.insert(reg.offset(), value);
            }
        }
    }
}

#[test]
fn every_symbol_has_its_source_value() {
    assert_eq!(REGISTERS.len(), SOURCE.len());
    for (name, value) in SOURCE {
        let entry = table::lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(entry.reg.value(), *value, "{name}");
        let space = if name.starts_with("mm") {
            Space::Direct
        } else {
            Space::Indirect
        };
        assert_eq!(entry.space(), space, "{name}");
    }
}

#[test]
fn only_documented_aliases_share_a_value() {
    let mut seen: HashMap<Register, &str> = HashMap::new();
    let mut shared = Vec::new();
    for entry in REGISTERS {
        if let Some(first) = seen.insert(entry.reg, entry.name) {
            shared.push((first, entry.name));
        }
    }
    shared.sort();
    assert_eq!(
        shared,
        vec![
            ("mmSMC_IND_DATA_0", "mmSMC_IND_DATA"),
            ("mmSMC_IND_INDEX_0", "mmSMC_IND_INDEX"),
        ]
    );
}

#[test]
fn aliases_stay_equal() {
    assert_eq!(mm::SMC_IND_DATA_0, mm::SMC_IND_DATA);
    assert_eq!(mm::SMC_IND_DATA.offset(), 0x0081);
    assert_eq!(mm::SMC_IND_INDEX_0, mm::SMC_IND_INDEX);
    assert_eq!(mm::SMC_IND_INDEX.offset(), 0x0080);
}

#[test]
fn thermal_tables_are_complete() {
    let tmon0: Vec<u32> = ix::TMON0_RDIL
        .iter()
        .chain(ix::TMON0_RDIR.iter())
        .map(|r| r.index())
        .collect();
    assert_eq!(tmon0, (0x0300..=0x031Fu32).collect::<Vec<_>>());

    let tmon1: Vec<u32> = ix::TMON1_RDIL
        .iter()
        .chain(ix::TMON1_RDIR.iter())
        .map(|r| r.index())
        .collect();
    assert_eq!(tmon1, (0x0320..=0x033Fu32).collect::<Vec<_>>());

    for n in 0..16u32 {
        let name = format!("ixTHM_TMON1_RDIL{n}_DATA");
        assert_eq!(table::lookup_ix(&name), Some(IxReg::new(0x0320 + n)));
    }
}

#[test]
fn gpio_block_is_fully_named() {
    let mut named: Vec<u32> = table::in_space(Space::Direct)
        .filter(|e| e.name.starts_with("mmGPIOPAD_"))
        .map(|e| e.reg.value())
        .collect();
    named.sort_unstable();
    assert_eq!(named, (0x05E4..=0x05F4u32).collect::<Vec<_>>());
    assert_eq!(
        mm::GPIOPAD.iter().map(|r| r.offset()).collect::<Vec<_>>(),
        named
    );
}

#[test]
fn display_uses_symbols() {
    assert_eq!(mm::CG_FDO_CTRL0.to_string(), "mmCG_FDO_CTRL0");
    assert_eq!(mm::SMC_IND_INDEX.to_string(), "mmSMC_IND_INDEX_0");
    assert_eq!(ix::SMC_PC_C.to_string(), "ixSMC_PC_C");
    assert_eq!(MmReg::new(0x0184).to_string(), "mm[0x0184]");
    assert_eq!(IxReg::new(0x0400).to_string(), "ix[0x00000400]");
}

#[test]
fn indirect_round_trip_through_fake_gpu() {
    let smc = SmcIndirect::with_config(FakeGpu::default(), &SmuConfig::new(AsicType::Pitcairn));
    assert_eq!(smc.port(), IndPort::PORT0);

    smc.write(ix::LCAC_MC3_OVR_SEL, 0x1);
    smc.write(ix::THM_TMON1_RDIR7_DATA, 0x2a);
    assert_eq!(smc.read(ix::LCAC_MC3_OVR_SEL), 0x1);
    assert_eq!(smc.read(ix::THM_TMON1_RDIR7_DATA), 0x2a);
    assert_eq!(smc.modify(ix::THM_TMON1_RDIR7_DATA, 0x0f, 0x05), 0x25);

    smc.write_sram_dword(0x1000, 0xcafe_f00d, smc.ram_end()).unwrap();
    assert_eq!(smc.read_sram_dword(0x1000, smc.ram_end()), Ok(0xcafe_f00d));

    let gpu = smc.into_inner();
    assert_eq!(gpu.indirect[&0x0126], 0x1);
    assert_eq!(gpu.indirect[&0x0337], 0x25);
    assert_eq!(gpu.direct[&mm::SMC_IND_INDEX.offset()], 0x1000);
}

#[test]
fn sram_rejects_bad_addresses() {
    let smc = SmcIndirect::new(FakeGpu::default(), IndPort::PORT0);
    assert_eq!(smc.read_sram_dword(0x3, 0x20000), Err(SmuError::Misaligned(0x3)));
    assert_eq!(
        smc.read_sram_dword(0x20000, 0x20000),
        Err(SmuError::OutOfRange {
            addr: 0x20000,
            limit: 0x20000
        })
    );
}

#[test]
fn mailbox_via_with_io() {
    let smc = SmcIndirect::new(FakeGpu::default(), IndPort::new(1).unwrap());
    smc.with_io(|io| io.write32(mm::SMC_MESSAGE_0, 0x5a));
    smc.write(ix::THM_TMON0_INT_DATA, 9);

    let gpu = smc.into_inner();
    assert_eq!(gpu.direct[&mm::SMC_MESSAGE_0.offset()], 0x5a);
    assert_eq!(gpu.direct[&mm::SMC_IND_INDEX_1.offset()], 0x0380);
    assert_eq!(gpu.indirect[&0x0380], 9);
}

#[test]
fn concurrent_users_do_not_interleave_handshake() {
    let smc = Arc::new(SmcIndirect::new(FakeGpu::default(), IndPort::PORT0));
    let handles: Vec<_> = (0..4u8)
        .map(|t| {
            let smc = Arc::clone(&smc);
            thread::spawn(move || {
                let lcac = ix::lcac_mc(t).unwrap();
                for i in 0..500u32 {
                    smc.write(lcac.ovr_val, i);
                    assert_eq!(smc.read(lcac.ovr_val), i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..4u8 {
        let lcac = ix::lcac_mc(t).unwrap();
        assert_eq!(smc.read(lcac.ovr_val), 499);
    }
}
