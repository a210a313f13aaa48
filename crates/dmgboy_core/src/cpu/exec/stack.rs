use crate::cpu::decode::R16Stack;
use crate::cpu::{Cpu, MemoryPort};

impl Cpu {
    pub(super) fn exec_push<M: MemoryPort>(&mut self, mem: &mut M, reg: R16Stack) -> u32 {
        let value = self.read_r16_stack(reg);
        self.push_u16(mem, value);
        16
    }

    /// POP AF goes through `set_af`, so the low nibble of F stays clear.
    pub(super) fn exec_pop<M: MemoryPort>(&mut self, mem: &mut M, reg: R16Stack) -> u32 {
        let value = self.pop_u16(mem);
        self.write_r16_stack(reg, value);
        12
    }
}
