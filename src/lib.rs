//! Register map for the AMD SMU 6.0, the power-management microcontroller of
//! SI-generation GPUs.
//!
//! The crate keeps the register offsets in Rust so clock, thermal and
//! power-state code can name registers instead of hard-coding numbers.
//! Direct (`mm*`) and indirect (`ix*`) registers are separate types, and
//! indirect ones are only reachable through [`SmcIndirect`], which performs
//! the index/data handshake under a lock.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`registers::mm`] | direct register offsets |
//! | [`registers::ix`] | indirect register indices, LCAC and thermal monitor helpers |
//! | [`registers::table`] | every register by its hardware symbol |
//! | [`registers::smc`] | typed view of the SMC port block |

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

mod access;
mod config;
mod err;
mod indirect;
pub mod registers;

pub use access::*;
pub use config::*;
pub use err::*;
pub use indirect::*;
pub use registers::{IxReg, MmReg, Register, Space, ix, mm};
