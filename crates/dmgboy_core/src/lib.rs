pub mod clock;
pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use clock::{catch_up, ticks_to_seconds, Peripheral, TICKS_PER_SECOND};
pub use config::{IllegalOpcodePolicy, MachineConfig};
pub use cpu::{Cpu, Flag, InterruptFlags, MemoryPort, PowerState, Registers};
pub use error::{CpuError, OpcodeTable};
pub use machine::{Button, GameBoy};

/// Address execution begins at once the boot sequence has handed over to
/// the cartridge.
pub const RESET_VECTOR: u16 = 0x0100;
