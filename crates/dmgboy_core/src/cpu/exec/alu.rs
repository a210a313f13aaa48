use crate::cpu::decode::{AluOp, Op, R16, R8};
use crate::cpu::{Cpu, Flag, MemoryPort};

impl Cpu {
    pub(super) fn exec_alu_r8<M: MemoryPort>(&mut self, mem: &mut M, op: AluOp, src: R8) -> u32 {
        let value = self.read_r8(mem, src);
        self.alu(op, value);
        if src == R8::HlInd { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm<M: MemoryPort>(&mut self, mem: &mut M, op: AluOp) -> u32 {
        let value = self.fetch8(mem);
        self.alu(op, value);
        8
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// Unlike their CB counterparts these always clear Z, whatever the
    /// result.
    pub(super) fn exec_rotate_a(&mut self, op: Op) -> u32 {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C);

        let (result, carry_out) = match op {
            Op::Rlca => (a.rotate_left(1), a & 0x80 != 0),
            Op::Rrca => (a.rotate_right(1), a & 0x01 != 0),
            Op::Rla => ((a << 1) | u8::from(carry_in), a & 0x80 != 0),
            Op::Rra => ((a >> 1) | if carry_in { 0x80 } else { 0 }, a & 0x01 != 0),
            _ => unreachable!("not an accumulator rotate: {op:?}"),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        4
    }

    pub(super) fn exec_add_hl_r16(&mut self, reg: R16) -> u32 {
        let value = self.read_r16(reg);
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_imm<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let imm = self.fetch8(mem);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    /// CPL: N and H set, Z and C untouched.
    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }
}
