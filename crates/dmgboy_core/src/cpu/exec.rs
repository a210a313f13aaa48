mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use crate::config::IllegalOpcodePolicy;
use crate::error::{CpuError, OpcodeTable};

use super::decode::{Op, PRIMARY};
use super::{Cpu, MemoryPort};

impl Cpu {
    /// Decode and execute exactly one instruction at PC.
    ///
    /// The instruction's cycle cost is added to the clock and returned.
    /// Interrupts, HALT/STOP and the deferred IME queue are not looked at
    /// here; see [`Cpu::step`] for the full per-step sequence.
    pub fn execute_one<M: MemoryPort>(&mut self, mem: &mut M) -> Result<u32, CpuError> {
        let mut pc = self.regs.pc;
        let mut opcode = self.fetch8(mem);
        let mut cycles = 0;

        if PRIMARY[opcode as usize] == Some(Op::Redecode) {
            // 0xFD has no defined behaviour. It is modelled as a 4-tick
            // prefix that hands the following byte back to the decoder, once.
            log::debug!("GB CPU illegal opcode 0xFD at PC=0x{pc:04X}: re-decoding next byte");
            cycles += 4;
            pc = self.regs.pc;
            opcode = self.fetch8(mem);
        }

        cycles += match PRIMARY[opcode as usize] {
            Some(Op::PrefixCb) => self.step_cb(mem),
            Some(Op::Redecode) | None => self.exec_illegal(opcode, pc)?,
            Some(op) => {
                log::trace!("GB CPU PC=0x{pc:04X} 0x{opcode:02X} {op:?}");
                self.exec_op(mem, op)
            }
        };

        self.clock += u64::from(cycles);
        Ok(cycles)
    }

    /// Execute a decoded primary-table operation and return its cost.
    fn exec_op<M: MemoryPort>(&mut self, mem: &mut M, op: Op) -> u32 {
        match op {
            Op::Nop => 4,
            Op::Stop => self.exec_stop(mem),
            Op::Halt => self.exec_halt(),
            Op::Di => self.exec_di(),
            Op::Ei => self.exec_ei(),

            Op::LdR16Imm(reg) => self.exec_ld_r16_imm(mem, reg),
            Op::LdMemA(ptr) => self.exec_ld_mem_a(mem, ptr),
            Op::LdAMem(ptr) => self.exec_ld_a_mem(mem, ptr),
            Op::LdImm16Sp => self.exec_ld_imm16_sp(mem),
            Op::LdR8Imm(reg) => self.exec_ld_r8_imm(mem, reg),
            Op::LdR8R8 { dst, src } => self.exec_ld_r8_r8(mem, dst, src),
            Op::LdhImmA => self.exec_ldh_imm_a(mem),
            Op::LdhAImm => self.exec_ldh_a_imm(mem),
            Op::LdhCA => self.exec_ldh_c_a(mem),
            Op::LdhAC => self.exec_ldh_a_c(mem),
            Op::LdImm16A => self.exec_ld_imm16_a(mem),
            Op::LdAImm16 => self.exec_ld_a_imm16(mem),
            Op::LdHlSpImm => self.exec_ld_hl_sp_imm(mem),
            Op::LdSpHl => self.exec_ld_sp_hl(),

            Op::IncR16(reg) => self.exec_inc_r16(reg),
            Op::DecR16(reg) => self.exec_dec_r16(reg),
            Op::IncR8(reg) => self.exec_inc_r8(mem, reg),
            Op::DecR8(reg) => self.exec_dec_r8(mem, reg),

            Op::AddHlR16(reg) => self.exec_add_hl_r16(reg),
            Op::AddSpImm => self.exec_add_sp_imm(mem),
            Op::AluR8(alu, reg) => self.exec_alu_r8(mem, alu, reg),
            Op::AluImm(alu) => self.exec_alu_imm(mem, alu),
            Op::Rlca | Op::Rrca | Op::Rla | Op::Rra => self.exec_rotate_a(op),
            Op::Daa => self.exec_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            Op::Jr => self.jr(mem, true),
            Op::JrCond(cond) => self.jr(mem, self.condition(cond)),
            Op::Jp => self.exec_jp_imm16(mem),
            Op::JpCond(cond) => self.jp_cond(mem, self.condition(cond)),
            Op::JpHl => self.exec_jp_hl(),
            Op::Call => self.call_cond(mem, true),
            Op::CallCond(cond) => self.call_cond(mem, self.condition(cond)),
            Op::Ret => self.exec_ret(mem),
            Op::RetCond(cond) => self.ret_cond(mem, self.condition(cond)),
            Op::Reti => self.exec_reti(mem),
            Op::Rst(vector) => self.exec_rst(mem, vector),
            Op::Push(reg) => self.exec_push(mem, reg),
            Op::Pop(reg) => self.exec_pop(mem, reg),

            // Handled by `execute_one` before dispatch.
            Op::PrefixCb | Op::Redecode => unreachable!("prefix opcode reached exec_op"),
        }
    }

    /// Opcode holes: D3, DB, DD, E3, E4, EB, EC, ED, F4, FC (and a second
    /// FD in a row).
    fn exec_illegal(&mut self, opcode: u8, pc: u16) -> Result<u32, CpuError> {
        match self.illegal_opcodes {
            IllegalOpcodePolicy::Fatal => {
                // Leave PC on the offending byte so the state stays
                // consistent for whoever inspects it.
                self.regs.pc = pc;
                log::error!(
                    "GB CPU undecodable opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                Err(CpuError::UndecodableOpcode {
                    opcode,
                    table: OpcodeTable::Primary,
                    pc,
                })
            }
            IllegalOpcodePolicy::Ignore => {
                log::warn!("GB CPU ignoring illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}");
                Ok(4)
            }
        }
    }
}
