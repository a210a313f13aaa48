use crate::error::CpuError;

use super::interrupts::InterruptOutcome;
use super::{Cpu, MemoryPort, PowerState};

/// Cost of one idle tick while halted or stopped.
const IDLE_TICKS: u64 = 4;

impl Cpu {
    /// Advance the CPU by one step and return the ticks it took.
    ///
    /// Order within a step:
    /// 1. interrupt evaluation (STOP/HALT wake-up, at most one dispatch);
    /// 2. one instruction, or an idle 4-tick slice while halted/stopped;
    /// 3. the oldest due EI/DI change is applied;
    /// 4. PC is rolled back if HALT ended without IME.
    ///
    /// Peripherals are not touched. The machine catches them up to
    /// [`Cpu::clock`] after this returns, so anything they raise is first
    /// seen by the next step.
    pub fn step<M: MemoryPort>(&mut self, mem: &mut M) -> Result<u32, CpuError> {
        let start_clock = self.clock;
        let start_pc = self.regs.pc;

        let outcome = self.service_interrupts(mem);

        match self.power {
            PowerState::Stopped | PowerState::Halted => self.clock += IDLE_TICKS,
            PowerState::Running => {
                self.execute_one(mem)?;
            }
        }

        self.apply_due_ime_change();

        if let InterruptOutcome::HaltExitWithoutIme(source) = outcome {
            // The instruction after HALT was fetched and run without the
            // vector being taken; execution resumes from the same PC.
            log::trace!("GB CPU {source:?} ended HALT without IME, PC back to 0x{start_pc:04X}");
            self.regs.pc = start_pc;
        }

        Ok((self.clock - start_clock) as u32)
    }
}
