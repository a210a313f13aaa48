//! The DMG machine around the CPU core: memory map, peripherals and the
//! stepping coordinator that keeps them in lockstep with the CPU clock.

mod bus;
mod gameboy;
mod joypad;
mod serial;
mod timer;
mod video;

pub use bus::GameBoyBus;
pub use gameboy::GameBoy;
pub use joypad::Button;

/// Total addressable memory (64 KiB).
const MEMORY_SIZE: usize = 0x10000;

/// Largest ROM image that can be mapped without a bank controller.
pub const MAX_ROM_SIZE: usize = 0x8000;
