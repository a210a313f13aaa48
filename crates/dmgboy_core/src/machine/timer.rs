//! Divider and programmable timer (DIV, TIMA, TMA, TAC).
//!
//! The hidden system counter advances once per machine cycle (4 ticks). DIV
//! exposes bits 13:6 of it and TIMA counts falling edges of the bit selected
//! by TAC, the same edge-detector model Mooneye GB uses. Register access
//! lives in `io.rs` and never moves time.
mod io;

use crate::clock::Peripheral;
use crate::cpu::InterruptFlags;

/// Ticks per timer advance.
pub(super) const TIMER_STEP_TICKS: u64 = 4;

#[derive(Clone, Debug, Default)]
pub(crate) struct Timer {
    clock: u64,
    /// Hidden system counter; DIV exposes its upper bits.
    counter: u16,
    tima: u8,
    tma: u8,
    /// Lower 3 bits are meaningful.
    tac: u8,
    /// TIMA overflowed on the previous cycle; the next one reloads it from
    /// TMA and requests the interrupt.
    overflow: bool,
}

impl Timer {
    pub(crate) fn new() -> Self {
        let mut timer = Self::default();
        timer.apply_post_boot_state();
        timer
    }

    /// DIV reads back as 0xAB when the cartridge starts running.
    pub(crate) fn apply_post_boot_state(&mut self) {
        self.counter = 0x2AC0;
        self.tima = 0x00;
        self.tma = 0x00;
        self.tac = 0x00;
        self.overflow = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// Divider bit watched for the TAC frequency:
    /// 00 → bit 7, 01 → bit 1, 10 → bit 3, 11 → bit 5.
    #[inline]
    fn counter_bit(&self) -> bool {
        let mask = match self.tac & 0x03 {
            0x00 => 1u16 << 7,
            0x01 => 1u16 << 1,
            0x02 => 1u16 << 3,
            _ => 1u16 << 5,
        };
        self.counter & mask != 0
    }

    #[inline]
    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            // TIMA reads 0x00 for one cycle before the reload.
            self.overflow = true;
        }
    }

    fn tick_mcycle(&mut self, if_reg: &mut InterruptFlags) {
        if self.overflow {
            self.counter = self.counter.wrapping_add(1);
            self.tima = self.tma;
            self.overflow = false;
            if_reg.insert(InterruptFlags::TIMER);
            log::trace!("GB timer overflow, TIMA reloaded with 0x{:02X}", self.tma);
        } else if self.enabled() && self.counter_bit() {
            self.counter = self.counter.wrapping_add(1);
            if !self.counter_bit() {
                self.increment_tima();
            }
        } else {
            self.counter = self.counter.wrapping_add(1);
        }
    }
}

impl Peripheral for Timer {
    fn clock(&self) -> u64 {
        self.clock
    }

    fn advance(&mut self, if_reg: &mut InterruptFlags) {
        self.tick_mcycle(if_reg);
        self.clock += TIMER_STEP_TICKS;
    }
}
