//! Serial port (SB, SC) with no link partner attached.
//!
//! A transfer started with the internal clock shifts one bit every 512
//! ticks (8192 Hz). The missing partner drives the line high, so SB fills
//! with ones. Each byte the program sends is recorded so the host can show
//! what a test ROM printed.

use crate::clock::Peripheral;
use crate::cpu::InterruptFlags;

/// Ticks per transferred bit with the internal clock.
pub(super) const SERIAL_BIT_TICKS: u64 = 512;

const SC_START: u8 = 0x80;
const SC_INTERNAL_CLOCK: u8 = 0x01;

#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    clock: u64,
    sb: u8,
    sc: u8,
    /// Bits still to shift in the current transfer.
    bits_left: u8,
    capture: bool,
    output: Vec<u8>,
}

impl Serial {
    pub(crate) fn new(capture: bool) -> Self {
        Self {
            capture,
            ..Self::default()
        }
    }

    /// Back to power-on state. Captured output is dropped as well.
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.capture);
    }

    pub(crate) fn read_sb(&self) -> u8 {
        self.sb
    }

    pub(crate) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Unused bits read as 1.
    pub(crate) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }

    pub(crate) fn write_sc(&mut self, value: u8) {
        self.sc = value & (SC_START | SC_INTERNAL_CLOCK);
        if self.sc & SC_START == 0 {
            self.bits_left = 0;
            return;
        }
        if self.sc & SC_INTERNAL_CLOCK == 0 {
            // External clock with nothing plugged in: the transfer never
            // completes.
            log::debug!("GB serial transfer armed on external clock, SB=0x{:02X}", self.sb);
            self.bits_left = 0;
            return;
        }
        if self.capture {
            self.output.push(self.sb);
        }
        log::trace!("GB serial transfer start, SB=0x{:02X}", self.sb);
        self.bits_left = 8;
    }

    pub(crate) fn transfer_active(&self) -> bool {
        self.bits_left > 0
    }

    pub(crate) fn output(&self) -> &[u8] {
        &self.output
    }

    pub(crate) fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl Peripheral for Serial {
    fn clock(&self) -> u64 {
        self.clock
    }

    fn advance(&mut self, if_reg: &mut InterruptFlags) {
        self.clock += SERIAL_BIT_TICKS;
        if self.bits_left == 0 {
            return;
        }
        self.sb = (self.sb << 1) | 0x01;
        self.bits_left -= 1;
        if self.bits_left == 0 {
            self.sc &= !SC_START;
            if_reg.insert(InterruptFlags::SERIAL);
        }
    }
}
