use super::Timer;

impl Timer {
    pub(crate) fn read_div(&self) -> u8 {
        (self.counter >> 6) as u8
    }

    /// Writing any value clears the whole system counter. If the watched
    /// bit was high this is a falling edge and TIMA counts once.
    pub(crate) fn write_div(&mut self) {
        if self.enabled() && self.counter_bit() {
            self.increment_tima();
        }
        self.counter = 0;
    }

    pub(crate) fn read_tima(&self) -> u8 {
        self.tima
    }

    /// A write in the cycle between overflow and reload cancels the reload
    /// and the interrupt.
    pub(crate) fn write_tima(&mut self, value: u8) {
        self.tima = value;
        self.overflow = false;
    }

    pub(crate) fn read_tma(&self) -> u8 {
        self.tma
    }

    pub(crate) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    pub(crate) fn read_tac(&self) -> u8 {
        self.tac | 0b1111_1000
    }

    /// Disabling the timer or switching frequency while the watched bit is
    /// high produces one extra TIMA increment.
    pub(crate) fn write_tac(&mut self, value: u8) {
        let old_bit = self.enabled() && self.counter_bit();
        self.tac = value & 0x07;
        let new_bit = self.enabled() && self.counter_bit();
        if old_bit && !new_bit {
            self.increment_tima();
        }
    }
}
