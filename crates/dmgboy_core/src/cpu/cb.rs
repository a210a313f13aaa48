use super::decode::{CbOp, R8, EXTENDED};
use super::{Cpu, MemoryPort};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The returned cost includes the prefix fetch.
    pub(super) fn step_cb<M: MemoryPort>(&mut self, mem: &mut M) -> u32 {
        let opcode = self.fetch8(mem);
        let op = EXTENDED[opcode as usize];
        log::trace!("GB CPU CB 0x{opcode:02X} {op:?}");

        match op {
            CbOp::Shift(shift, reg) => {
                let value = self.read_r8(mem, reg);
                let result = self.alu_shift(shift, value);
                self.write_r8(mem, reg, result);
                if reg == R8::HlInd { 16 } else { 8 }
            }
            CbOp::Bit(bit, reg) => {
                let value = self.read_r8(mem, reg);
                self.alu_bit(bit, value);
                if reg == R8::HlInd { 12 } else { 8 }
            }
            CbOp::Res(bit, reg) => {
                let value = self.read_r8(mem, reg) & !(1 << bit);
                self.write_r8(mem, reg, value);
                if reg == R8::HlInd { 16 } else { 8 }
            }
            CbOp::Set(bit, reg) => {
                let value = self.read_r8(mem, reg) | (1 << bit);
                self.write_r8(mem, reg, value);
                if reg == R8::HlInd { 16 } else { 8 }
            }
        }
    }
}
