use crate::cpu::{Cpu, MemoryPort};

impl Cpu {
    pub(super) fn exec_jp_imm16<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        self.regs.pc = self.fetch16(mem);
        16
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(super) fn exec_ret<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        self.regs.pc = self.pop_u16(mem);
        16
    }

    /// RETI enables interrupts immediately, without the EI delay.
    pub(super) fn exec_reti<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        self.regs.pc = self.pop_u16(mem);
        self.ime = true;
        16
    }

    pub(super) fn exec_rst<M: MemoryPort>(&mut self, mem: &mut M, vector: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(mem, ret);
        self.regs.pc = u16::from(vector);
        16
    }
}
