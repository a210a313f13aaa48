use super::super::{Cpu, MemoryPort, PowerState};
use super::{Interrupt, InterruptFlags, IE_ADDR, IF_ADDR};

/// Ticks charged for pushing PC and jumping to a vector.
const DISPATCH_TICKS: u64 = 20;

/// Result of the interrupt evaluation that opens every step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(in crate::cpu) enum InterruptOutcome {
    /// Nothing was enabled and pending (or nothing was looked at).
    Idle,
    /// Control was transferred to a vector.
    Dispatched,
    /// HALT ended with IME clear. No dispatch happens and PC must be rolled
    /// back to its start-of-step value once the step completes.
    HaltExitWithoutIme(Interrupt),
}

impl Cpu {
    /// Wake from STOP/HALT and dispatch at most one interrupt.
    ///
    /// IE/IF are only ever read and written through the memory port, so
    /// anything a peripheral latched into IF during the previous catch-up is
    /// visible here and nothing it latches later is.
    pub(in crate::cpu) fn service_interrupts<M: MemoryPort>(
        &mut self,
        mem: &mut M,
    ) -> InterruptOutcome {
        let pending = InterruptFlags::from_bits_truncate(mem.read8(IF_ADDR));

        if self.power == PowerState::Stopped {
            if !pending.contains(InterruptFlags::JOYPAD) {
                return InterruptOutcome::Idle;
            }
            log::debug!("GB CPU leaving STOP on joypad edge at clock={}", self.clock);
            self.power = PowerState::Running;
        }

        let halted = self.power == PowerState::Halted;
        if !self.ime && !halted {
            return InterruptOutcome::Idle;
        }

        let enabled = InterruptFlags::from_bits_truncate(mem.read8(IE_ADDR));
        let Some(source) = Interrupt::highest(enabled & pending) else {
            return InterruptOutcome::Idle;
        };

        if halted {
            self.power = PowerState::Running;
            if !self.ime {
                log::debug!(
                    "GB CPU leaving HALT without IME ({source:?} pending) at PC=0x{:04X}",
                    self.regs.pc
                );
                return InterruptOutcome::HaltExitWithoutIme(source);
            }
        }

        mem.write8(IF_ADDR, (pending - source.flag()).bits());
        self.ime = false;
        let pc = self.regs.pc;
        self.push_u16(mem, pc);
        self.regs.pc = source.vector();
        self.clock += DISPATCH_TICKS;

        log::debug!(
            "GB CPU interrupt: {source:?} vector=0x{vector:04X} pc=0x{pc:04X} sp=0x{sp:04X} IF=0x{iflags:02X} IE=0x{ie:02X}",
            vector = source.vector(),
            sp = self.regs.sp,
            iflags = pending.bits(),
            ie = enabled.bits(),
        );
        InterruptOutcome::Dispatched
    }
}
