use super::decode::{Cond, R16, R16Stack, R8};
use super::{Cpu, Flag, MemoryPort};

impl Cpu {
    /// Read an 8-bit operand. `(HL)` goes through the memory port.
    #[inline]
    pub(super) fn read_r8<M: MemoryPort>(&mut self, mem: &mut M, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlInd => mem.read8(self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    #[inline]
    pub(super) fn write_r8<M: MemoryPort>(&mut self, mem: &mut M, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlInd => mem.write8(self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::Bc => self.regs.bc(),
            R16::De => self.regs.de(),
            R16::Hl => self.regs.hl(),
            R16::Sp => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::Bc => self.regs.set_bc(value),
            R16::De => self.regs.set_de(value),
            R16::Hl => self.regs.set_hl(value),
            R16::Sp => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_r16_stack(&self, reg: R16Stack) -> u16 {
        match reg {
            R16Stack::Bc => self.regs.bc(),
            R16Stack::De => self.regs.de(),
            R16Stack::Hl => self.regs.hl(),
            R16Stack::Af => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_r16_stack(&mut self, reg: R16Stack, value: u16) {
        match reg {
            R16Stack::Bc => self.regs.set_bc(value),
            R16Stack::De => self.regs.set_de(value),
            R16Stack::Hl => self.regs.set_hl(value),
            R16Stack::Af => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nc => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }

    #[inline]
    pub(super) fn fetch8<M: MemoryPort>(&mut self, mem: &mut M) -> u8 {
        let value = mem.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<M: MemoryPort>(&mut self, mem: &mut M) -> u16 {
        let lo = self.fetch8(mem);
        let hi = self.fetch8(mem);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(super) fn push_u16<M: MemoryPort>(&mut self, mem: &mut M, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        mem.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        mem.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<M: MemoryPort>(&mut self, mem: &mut M) -> u16 {
        let lo = mem.read8(self.regs.sp);
        let hi = mem.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(super) fn jr<M: MemoryPort>(&mut self, mem: &mut M, cond: bool) -> u32 {
        let offset = self.fetch8(mem) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            12
        } else {
            8
        }
    }

    pub(super) fn jp_cond<M: MemoryPort>(&mut self, mem: &mut M, cond: bool) -> u32 {
        let addr = self.fetch16(mem);
        if cond {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    pub(super) fn call_cond<M: MemoryPort>(&mut self, mem: &mut M, cond: bool) -> u32 {
        let addr = self.fetch16(mem);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(mem, ret);
            self.regs.pc = addr;
            24
        } else {
            12
        }
    }

    pub(super) fn ret_cond<M: MemoryPort>(&mut self, mem: &mut M, cond: bool) -> u32 {
        if cond {
            self.regs.pc = self.pop_u16(mem);
            20
        } else {
            8
        }
    }
}
