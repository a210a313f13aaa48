use crate::config::IllegalOpcodePolicy;

use super::interrupts::ime::ImeQueue;
use super::{Cpu, PowerState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            clock: 0,
            power: PowerState::Running,
            ime: false,
            ime_queue: ImeQueue::new(),
            illegal_opcodes: IllegalOpcodePolicy::default(),
        };
        cpu.apply_post_boot_state();
        cpu
    }

    pub fn with_illegal_opcode_policy(policy: IllegalOpcodePolicy) -> Self {
        let mut cpu = Self::new();
        cpu.illegal_opcodes = policy;
        cpu
    }

    /// Restore the state the boot sequence leaves behind when it hands
    /// control to the cartridge. The illegal-opcode policy is a session
    /// setting and survives a reset.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime_queue.clear();
        self.apply_post_boot_state();
    }

    fn apply_post_boot_state(&mut self) {
        self.regs.a = 0x01;
        self.regs.set_f(0xB0); // Z=1 N=0 H=1 C=1
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = crate::RESET_VECTOR;

        self.clock = 0;
        self.power = PowerState::Running;
        self.ime = true;
    }
}
