mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::MemoryPort;
pub use interrupts::{Interrupt, InterruptFlags, IE_ADDR, IF_ADDR};
pub use regs::{Flag, Registers};

use crate::config::IllegalOpcodePolicy;
use interrupts::ime::ImeQueue;

/// CPU power state. HALT and STOP are mutually exclusive by construction.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PowerState {
    #[default]
    Running,
    /// Instruction fetch is suspended until an enabled interrupt becomes
    /// pending; time keeps flowing.
    Halted,
    /// Deeper low-power state that only a joypad edge can end.
    Stopped,
}

/// LR35902 CPU core.
///
/// Holds the register file, the tick clock, the power state and the
/// interrupt master enable together with its deferred-change queue. All
/// memory traffic goes through a [`MemoryPort`] handed in per call.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Ticks elapsed since reset.
    clock: u64,
    power: PowerState,
    ime: bool,
    /// EI/DI requests waiting for their effective tick.
    ime_queue: ImeQueue,
    illegal_opcodes: IllegalOpcodePolicy,
}

impl Cpu {
    #[inline]
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Overwrite the tick clock. Meant for fixtures and debuggers; normal
    /// execution only ever moves the clock forward through instructions.
    #[inline]
    pub fn set_clock(&mut self, ticks: u64) {
        self.clock = ticks;
    }

    #[inline]
    pub fn power(&self) -> PowerState {
        self.power
    }

    #[inline]
    pub fn set_power(&mut self, power: PowerState) {
        self.power = power;
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.power == PowerState::Halted
    }

    /// Enter or leave HALT. Clearing it only has an effect while halted.
    pub fn set_halted(&mut self, halted: bool) {
        if halted {
            self.power = PowerState::Halted;
        } else if self.power == PowerState::Halted {
            self.power = PowerState::Running;
        }
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.power == PowerState::Stopped
    }

    /// Enter or leave STOP. Clearing it only has an effect while stopped.
    pub fn set_stopped(&mut self, stopped: bool) {
        if stopped {
            self.power = PowerState::Stopped;
        } else if self.power == PowerState::Stopped {
            self.power = PowerState::Running;
        }
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set IME immediately, bypassing the EI/DI delay.
    #[inline]
    pub fn set_ime(&mut self, ime: bool) {
        self.ime = ime;
    }

    /// Number of EI/DI changes that have been requested but not applied yet.
    #[inline]
    pub fn pending_ime_changes(&self) -> usize {
        self.ime_queue.len()
    }

    #[inline]
    pub fn illegal_opcode_policy(&self) -> IllegalOpcodePolicy {
        self.illegal_opcodes
    }

    #[inline]
    pub fn set_illegal_opcode_policy(&mut self, policy: IllegalOpcodePolicy) {
        self.illegal_opcodes = policy;
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.set_f(0);
    }
}
