use crate::cpu::decode::{R16, R8};
use crate::cpu::{Cpu, MemoryPort};

impl Cpu {
    pub(super) fn exec_inc_r8<M: MemoryPort>(&mut self, mem: &mut M, reg: R8) -> u32 {
        let value = self.read_r8(mem, reg);
        let result = self.alu_inc8(value);
        self.write_r8(mem, reg, result);
        if reg == R8::HlInd { 12 } else { 4 }
    }

    pub(super) fn exec_dec_r8<M: MemoryPort>(&mut self, mem: &mut M, reg: R8) -> u32 {
        let value = self.read_r8(mem, reg);
        let result = self.alu_dec8(value);
        self.write_r8(mem, reg, result);
        if reg == R8::HlInd { 12 } else { 4 }
    }

    /// 16-bit INC/DEC touch no flags.
    pub(super) fn exec_inc_r16(&mut self, reg: R16) -> u32 {
        let value = self.read_r16(reg).wrapping_add(1);
        self.write_r16(reg, value);
        8
    }

    pub(super) fn exec_dec_r16(&mut self, reg: R16) -> u32 {
        let value = self.read_r16(reg).wrapping_sub(1);
        self.write_r16(reg, value);
        8
    }
}
