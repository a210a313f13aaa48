use crate::cpu::decode::{R16, R16Mem, R8};
use crate::cpu::{Cpu, MemoryPort};

/// Base of the zero-page window used by LDH.
const HIGH_PAGE: u16 = 0xFF00;

impl Cpu {
    pub(super) fn exec_ld_r16_imm<M: MemoryPort>(&mut self, mem: &mut M, reg: R16) -> u32 {
        let value = self.fetch16(mem);
        self.write_r16(reg, value);
        12
    }

    pub(super) fn exec_ld_r8_imm<M: MemoryPort>(&mut self, mem: &mut M, reg: R8) -> u32 {
        let value = self.fetch8(mem);
        self.write_r8(mem, reg, value);
        if reg == R8::HlInd { 12 } else { 8 }
    }

    pub(super) fn exec_ld_r8_r8<M: MemoryPort>(&mut self, mem: &mut M, dst: R8, src: R8) -> u32 {
        let value = self.read_r8(mem, src);
        self.write_r8(mem, dst, value);
        if dst == R8::HlInd || src == R8::HlInd { 8 } else { 4 }
    }

    pub(super) fn exec_ld_imm16_sp<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = self.fetch16(mem);
        mem.write16(addr, self.regs.sp);
        20
    }

    /// Resolve a `(rr)` pointer operand, applying the HL post-increment or
    /// post-decrement.
    fn pointer(&mut self, ptr: R16Mem) -> u16 {
        match ptr {
            R16Mem::Bc => self.regs.bc(),
            R16Mem::De => self.regs.de(),
            R16Mem::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            R16Mem::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_mem_a<M: MemoryPort>(&mut self, mem: &mut M, ptr: R16Mem) -> u32 {
        let addr = self.pointer(ptr);
        mem.write8(addr, self.regs.a);
        8
    }

    pub(super) fn exec_ld_a_mem<M: MemoryPort>(&mut self, mem: &mut M, ptr: R16Mem) -> u32 {
        let addr = self.pointer(ptr);
        self.regs.a = mem.read8(addr);
        8
    }

    pub(super) fn exec_ldh_imm_a<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = HIGH_PAGE | u16::from(self.fetch8(mem));
        mem.write8(addr, self.regs.a);
        12
    }

    pub(super) fn exec_ldh_a_imm<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = HIGH_PAGE | u16::from(self.fetch8(mem));
        self.regs.a = mem.read8(addr);
        12
    }

    pub(super) fn exec_ldh_c_a<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = HIGH_PAGE | u16::from(self.regs.c);
        mem.write8(addr, self.regs.a);
        8
    }

    pub(super) fn exec_ldh_a_c<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = HIGH_PAGE | u16::from(self.regs.c);
        self.regs.a = mem.read8(addr);
        8
    }

    pub(super) fn exec_ld_imm16_a<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = self.fetch16(mem);
        mem.write8(addr, self.regs.a);
        16
    }

    pub(super) fn exec_ld_a_imm16<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let addr = self.fetch16(mem);
        self.regs.a = mem.read8(addr);
        16
    }

    pub(super) fn exec_ld_hl_sp_imm<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let imm = self.fetch8(mem);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }
}
