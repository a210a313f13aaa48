use crate::config::MachineConfig;
use crate::cpu::Cpu;
use crate::error::CpuError;

use super::{Button, GameBoyBus};

/// High-level DMG machine: the CPU core plus the bus and its peripherals.
///
/// [`GameBoy::step`] is the stepping coordinator. It runs one CPU step and
/// then brings every peripheral up to the CPU's clock, so interrupts raised
/// during the catch-up are observed at the start of the next step.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: GameBoyBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl GameBoy {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::with_illegal_opcode_policy(config.illegal_opcodes),
            bus: GameBoyBus::new(&config),
        }
    }

    /// Map a ROM image. The CPU already starts at the cartridge entry point.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.bus.load_rom(rom);
    }

    /// Back to the post-boot state, keeping the loaded ROM.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
    }

    /// Ticks elapsed since reset.
    #[inline]
    pub fn clock(&self) -> u64 {
        self.cpu.clock()
    }

    /// One CPU step followed by peripheral catch-up. Returns the ticks the
    /// CPU consumed.
    ///
    /// On a fatal decode error the peripherals are left where they were and
    /// the CPU state points at the offending opcode.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let ticks = self.cpu.step(&mut self.bus)?;
        self.bus.catch_up(self.cpu.clock());
        Ok(ticks)
    }

    /// Step until at least `ticks` more ticks have elapsed. Returns the
    /// ticks actually run, which may overshoot by part of an instruction.
    pub fn run_for_ticks(&mut self, ticks: u64) -> Result<u64, CpuError> {
        let start = self.cpu.clock();
        let target = start.saturating_add(ticks);
        while self.cpu.clock() < target {
            self.step()?;
        }
        Ok(self.cpu.clock() - start)
    }

    pub fn press(&mut self, button: Button) {
        self.bus.set_button(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.bus.set_button(button, false);
    }

    /// Bytes sent over the serial port since reset.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial_output()
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.bus.take_serial_output()
    }
}
