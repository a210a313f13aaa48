use crate::clock::Peripheral;
use crate::cpu::InterruptFlags;

use super::super::MEMORY_SIZE;

/// Ticks per copied byte.
pub(super) const DMA_BYTE_TICKS: u64 = 4;

const OAM_BASE: usize = 0xFE00;
const OAM_LEN: u8 = 0xA0;

/// OAM DMA engine behind 0xFF46.
///
/// A write schedules a copy of `XX00..XX9F` into OAM. The copy is drained
/// one byte per machine cycle by the bus's own catch-up, so software that
/// polls OAM sees it fill up over 640 ticks.
#[derive(Clone, Debug)]
pub(crate) struct OamDma {
    clock: u64,
    /// Last value written to 0xFF46.
    register: u8,
    source: u16,
    /// Next byte to copy, `None` when idle.
    index: Option<u8>,
}

impl Default for OamDma {
    fn default() -> Self {
        Self {
            clock: 0,
            register: 0xFF,
            source: 0,
            index: None,
        }
    }
}

impl OamDma {
    pub(crate) fn register(&self) -> u8 {
        self.register
    }

    pub(crate) fn active(&self) -> bool {
        self.index.is_some()
    }

    /// Restarts any copy in flight.
    pub(crate) fn start(&mut self, value: u8) {
        self.register = value;
        // Sources above 0xDFFF read through the echo of work RAM.
        let page = if value >= 0xE0 { value - 0x20 } else { value };
        self.source = u16::from(page) << 8;
        self.index = Some(0);
        log::debug!("GB OAM DMA from 0x{:04X}", self.source);
    }
}

/// The DMA engine together with the memory it copies through.
pub(super) struct DmaPort<'a> {
    pub(super) dma: &'a mut OamDma,
    pub(super) memory: &'a mut [u8; MEMORY_SIZE],
}

impl Peripheral for DmaPort<'_> {
    fn clock(&self) -> u64 {
        self.dma.clock
    }

    fn advance(&mut self, _if_reg: &mut InterruptFlags) {
        self.dma.clock += DMA_BYTE_TICKS;
        let Some(index) = self.dma.index else {
            return;
        };
        let src = self.dma.source as usize + index as usize;
        self.memory[OAM_BASE + index as usize] = self.memory[src];
        let next = index + 1;
        self.dma.index = (next < OAM_LEN).then_some(next);
    }
}
