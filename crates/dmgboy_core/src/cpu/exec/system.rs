use crate::cpu::{Cpu, MemoryPort, PowerState};

impl Cpu {
    pub(super) fn exec_stop<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        // STOP is officially a 2‑byte instruction; the second byte is
        // often 0 and ignored. We always fetch and discard the padding
        // byte so that PC matches hardware.
        let _padding = self.fetch8(mem);
        self.power = PowerState::Stopped;
        4
    }

    pub(super) fn exec_halt(&mut self) -> u32 {
        self.power = PowerState::Halted;
        4
    }

    /// DI and EI take effect once the following instruction has completed.
    pub(super) fn exec_di(&mut self) -> u32 {
        self.schedule_ime(false);
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        self.schedule_ime(true);
        4
    }
}
