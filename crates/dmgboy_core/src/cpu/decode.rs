//! Opcode decode tables.
//!
//! Both opcode spaces are decoded once, at compile time, into 256-entry
//! arrays of operation descriptors. Execution looks the fetched byte up and
//! matches on the descriptor, so there is no per-instruction bit slicing on
//! the hot path.

/// 8-bit operand selected by the 3-bit register field of an opcode.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// The byte at the address held in HL.
    HlInd,
    A,
}

impl R8 {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlInd,
            _ => R8::A,
        }
    }
}

/// Register pair operand of the 16-bit load/arithmetic group.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

impl R16 {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16::Bc,
            1 => R16::De,
            2 => R16::Hl,
            _ => R16::Sp,
        }
    }
}

/// Register pair operand of PUSH/POP (AF takes the place of SP).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum R16Stack {
    Bc,
    De,
    Hl,
    Af,
}

impl R16Stack {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Stack::Bc,
            1 => R16Stack::De,
            2 => R16Stack::Hl,
            _ => R16Stack::Af,
        }
    }
}

/// Pointer operand of the `LD (rr),A` / `LD A,(rr)` group.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum R16Mem {
    Bc,
    De,
    /// (HL), then HL += 1.
    HlInc,
    /// (HL), then HL -= 1.
    HlDec,
}

impl R16Mem {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16Mem::Bc,
            1 => R16Mem::De,
            2 => R16Mem::HlInc,
            _ => R16Mem::HlDec,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cond {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Cond::Nz,
            1 => Cond::Z,
            2 => Cond::Nc,
            _ => Cond::C,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotate/shift group of the CB table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ShiftOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl ShiftOp {
    const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => ShiftOp::Rlc,
            1 => ShiftOp::Rrc,
            2 => ShiftOp::Rl,
            3 => ShiftOp::Rr,
            4 => ShiftOp::Sla,
            5 => ShiftOp::Sra,
            6 => ShiftOp::Swap,
            _ => ShiftOp::Srl,
        }
    }
}

/// One entry of the primary opcode table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// 0xCB: the next byte indexes the extended table.
    PrefixCb,
    /// 0xFD: illegal, but decoding continues with the following byte.
    Redecode,

    LdR16Imm(R16),
    LdMemA(R16Mem),
    LdAMem(R16Mem),
    LdImm16Sp,
    LdR8Imm(R8),
    LdR8R8 { dst: R8, src: R8 },
    LdhImmA,
    LdhAImm,
    LdhCA,
    LdhAC,
    LdImm16A,
    LdAImm16,
    LdHlSpImm,
    LdSpHl,

    IncR16(R16),
    DecR16(R16),
    IncR8(R8),
    DecR8(R8),

    AddHlR16(R16),
    AddSpImm,
    AluR8(AluOp, R8),
    AluImm(AluOp),
    Rlca,
    Rrca,
    Rla,
    Rra,
    Daa,
    Cpl,
    Scf,
    Ccf,

    Jr,
    JrCond(Cond),
    Jp,
    JpCond(Cond),
    JpHl,
    Call,
    CallCond(Cond),
    Ret,
    RetCond(Cond),
    Reti,
    Rst(u8),
    Push(R16Stack),
    Pop(R16Stack),
}

/// One entry of the CB-prefixed table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum CbOp {
    Shift(ShiftOp, R8),
    Bit(u8, R8),
    Res(u8, R8),
    Set(u8, R8),
}

/// Primary table. `None` marks the opcode holes that have no defined
/// behaviour.
pub(crate) static PRIMARY: [Option<Op>; 256] = build_primary();

/// CB-prefixed table. Every byte is defined.
pub(crate) static EXTENDED: [CbOp; 256] = build_extended();

const fn build_primary() -> [Option<Op>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_primary(i as u8);
        i += 1;
    }
    table
}

const fn build_extended() -> [CbOp; 256] {
    let mut table = [CbOp::Bit(0, R8::B); 256];
    let mut i = 0;
    while i < 256 {
        table[i] = decode_extended(i as u8);
        i += 1;
    }
    table
}

const fn decode_primary(opcode: u8) -> Option<Op> {
    let y = (opcode >> 3) & 0x07;
    let z = opcode & 0x07;
    let p = (opcode >> 4) & 0x03;

    let op = match opcode {
        0x00 => Op::Nop,
        0x10 => Op::Stop,
        0x76 => Op::Halt,
        0xF3 => Op::Di,
        0xFB => Op::Ei,
        0xCB => Op::PrefixCb,
        0xFD => Op::Redecode,

        0x01 | 0x11 | 0x21 | 0x31 => Op::LdR16Imm(R16::from_bits(p)),
        0x02 | 0x12 | 0x22 | 0x32 => Op::LdMemA(R16Mem::from_bits(p)),
        0x0A | 0x1A | 0x2A | 0x3A => Op::LdAMem(R16Mem::from_bits(p)),
        0x08 => Op::LdImm16Sp,
        0x03 | 0x13 | 0x23 | 0x33 => Op::IncR16(R16::from_bits(p)),
        0x0B | 0x1B | 0x2B | 0x3B => Op::DecR16(R16::from_bits(p)),
        0x09 | 0x19 | 0x29 | 0x39 => Op::AddHlR16(R16::from_bits(p)),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => Op::IncR8(R8::from_bits(y)),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => Op::DecR8(R8::from_bits(y)),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => Op::LdR8Imm(R8::from_bits(y)),

        0x07 => Op::Rlca,
        0x0F => Op::Rrca,
        0x17 => Op::Rla,
        0x1F => Op::Rra,
        0x27 => Op::Daa,
        0x2F => Op::Cpl,
        0x37 => Op::Scf,
        0x3F => Op::Ccf,

        0x18 => Op::Jr,
        0x20 | 0x28 | 0x30 | 0x38 => Op::JrCond(Cond::from_bits(y)),

        // 0x76 (HALT) is matched above.
        0x40..=0x7F => Op::LdR8R8 {
            dst: R8::from_bits(y),
            src: R8::from_bits(z),
        },
        0x80..=0xBF => Op::AluR8(AluOp::from_bits(y), R8::from_bits(z)),

        0xC0 | 0xC8 | 0xD0 | 0xD8 => Op::RetCond(Cond::from_bits(y)),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => Op::Pop(R16Stack::from_bits(p)),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => Op::Push(R16Stack::from_bits(p)),
        0xC2 | 0xCA | 0xD2 | 0xDA => Op::JpCond(Cond::from_bits(y)),
        0xC4 | 0xCC | 0xD4 | 0xDC => Op::CallCond(Cond::from_bits(y)),
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            Op::AluImm(AluOp::from_bits(y))
        }
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => Op::Rst(opcode & 0x38),
        0xC3 => Op::Jp,
        0xC9 => Op::Ret,
        0xCD => Op::Call,
        0xD9 => Op::Reti,
        0xE9 => Op::JpHl,

        0xE0 => Op::LdhImmA,
        0xF0 => Op::LdhAImm,
        0xE2 => Op::LdhCA,
        0xF2 => Op::LdhAC,
        0xEA => Op::LdImm16A,
        0xFA => Op::LdAImm16,
        0xE8 => Op::AddSpImm,
        0xF8 => Op::LdHlSpImm,
        0xF9 => Op::LdSpHl,

        // 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC.
        _ => return None,
    };
    Some(op)
}

const fn decode_extended(opcode: u8) -> CbOp {
    let y = (opcode >> 3) & 0x07;
    let reg = R8::from_bits(opcode);
    match opcode >> 6 {
        0 => CbOp::Shift(ShiftOp::from_bits(y), reg),
        1 => CbOp::Bit(y, reg),
        2 => CbOp::Res(y, reg),
        _ => CbOp::Set(y, reg),
    }
}
