//! System bus: the single indirection point between the executor and the
//! memory-mapped devices behind it.
//!
//! Today DRAM is the only device on the bus, but routing every load/store
//! through [`Bus`] keeps the executor ignorant of how an address is
//! eventually backed.

use thiserror::Error;

use crate::dram::{Dram, DramError, Wordsize, DRAM_BASE};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    #[error(transparent)]
    Dram(#[from] DramError),
}

#[derive(Debug, Clone, Default)]
pub struct Bus {
    dram: Dram,
}

impl Bus {
    pub fn new() -> Self {
        Self { dram: Dram::new() }
    }

    pub fn load_image(&mut self, image: &[u8]) -> Result<(), BusError> {
        self.dram.load_image(image)?;
        Ok(())
    }

    pub fn read(&self, addr: u64, size: Wordsize) -> Result<u64, BusError> {
        Ok(self.dram.read(addr, size)?)
    }

    pub fn write(&mut self, addr: u64, value: u64, size: Wordsize) -> Result<(), BusError> {
        Ok(self.dram.write(addr, value, size)?)
    }
}

/// Address at which a freshly loaded image starts executing.
pub const ENTRY_POINT: u64 = DRAM_BASE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_forwards_to_dram() {
        let mut bus = Bus::new();
        bus.write(DRAM_BASE, 42, Wordsize::Byte).unwrap();
        assert_eq!(bus.read(DRAM_BASE, Wordsize::Byte).unwrap(), 42);
    }

    #[test]
    fn bus_propagates_dram_errors() {
        let bus = Bus::new();
        assert!(bus.read(0, Wordsize::Byte).is_err());
    }
}
