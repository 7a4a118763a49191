//! A user-mode functional emulator for a 64-bit little-endian RISC-V
//! derived core: RV64I plus the M, A, Zicsr, and Zifencei fragments.
//!
//! The crate is laid out bottom-up, mirroring the component table: a
//! fixed-size [`dram`] backed by a [`bus`], a [`csr`] file and
//! [`registers`] file, a pure [`decode`]r, and a [`hart`] that ties fetch,
//! decode, and execute into a single-stepping core. [`format`] renders
//! architectural state for the CLI front-end in `src/bin/rvemu.rs`.

pub mod bus;
pub mod csr;
pub mod decode;
pub mod dram;
pub mod format;
pub mod hart;
pub mod registers;
mod utils;

pub use hart::{Hart, StepOutcome, Trap};
