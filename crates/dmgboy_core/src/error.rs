use std::fmt;

use thiserror::Error;

/// Which decode table an opcode was looked up in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpcodeTable {
    Primary,
    /// The CB-prefixed table. It has no holes, so nothing reports this
    /// variant today.
    Extended,
}

impl fmt::Display for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpcodeTable::Primary => f.write_str("primary"),
            OpcodeTable::Extended => f.write_str("extended (CB)"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum CpuError {
    /// The byte at `pc` has no entry in `table`. Continuing would
    /// desynchronise every timing-dependent peripheral, so the engine stops.
    #[error("undecodable {table} opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    UndecodableOpcode {
        opcode: u8,
        table: OpcodeTable,
        pc: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_opcode_table_and_pc() {
        let err = CpuError::UndecodableOpcode {
            opcode: 0xD3,
            table: OpcodeTable::Primary,
            pc: 0x0150,
        };
        assert_eq!(
            err.to_string(),
            "undecodable primary opcode 0xD3 at PC=0x0150"
        );

        let err = CpuError::UndecodableOpcode {
            opcode: 0x37,
            table: OpcodeTable::Extended,
            pc: 0x4000,
        };
        assert_eq!(
            err.to_string(),
            "undecodable extended (CB) opcode 0x37 at PC=0x4000"
        );
    }
}
