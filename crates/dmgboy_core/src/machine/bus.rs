use crate::clock::catch_up;
use crate::config::MachineConfig;
use crate::cpu::InterruptFlags;

use super::joypad::{Button, Joypad};
use super::serial::Serial;
use super::timer::Timer;
use super::video::Video;
use super::{MAX_ROM_SIZE, MEMORY_SIZE};

mod dma;
mod init;
mod mmio;
mod traits;

use dma::{DmaPort, OamDma};

/// DMG memory map with the memory-mapped peripherals behind it.
///
/// Every peripheral keeps its own clock. [`GameBoyBus::catch_up`] drives
/// them to the CPU's clock after each CPU step, and whatever they raise is
/// latched into IF for the next one.
pub struct GameBoyBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    pub(crate) if_reg: InterruptFlags,
    pub(crate) ie_reg: u8,
    timer: Timer,
    serial: Serial,
    joypad: Joypad,
    video: Video,
    dma: OamDma,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        Self::new(&MachineConfig::default())
    }
}

impl GameBoyBus {
    pub fn new(config: &MachineConfig) -> Self {
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            if_reg: InterruptFlags::empty(),
            ie_reg: 0,
            timer: Timer::new(),
            serial: Serial::new(config.serial_capture),
            joypad: Joypad::new(),
            video: Video::new(),
            dma: OamDma::default(),
        };
        bus.apply_dmg_initial_io_state();
        bus
    }

    /// Map a ROM image at 0x0000. Only the first 32 KiB are visible since
    /// no bank controller is modelled.
    pub fn load_rom(&mut self, rom: &[u8]) {
        if rom.len() > MAX_ROM_SIZE {
            log::warn!(
                "GB ROM is {} bytes; mapping only the first {} (no MBC)",
                rom.len(),
                MAX_ROM_SIZE
            );
        }
        let len = rom.len().min(MAX_ROM_SIZE);
        self.memory[..len].copy_from_slice(&rom[..len]);
        self.memory[len..MAX_ROM_SIZE].fill(0xFF);
        log::info!("GB ROM loaded: {len} bytes");
    }

    /// Power-cycle everything except the mapped ROM.
    pub fn reset(&mut self) {
        self.memory[MAX_ROM_SIZE..].fill(0);
        self.timer.reset();
        self.serial.reset();
        self.joypad.reset();
        self.video.reset();
        self.dma = OamDma::default();
        self.apply_dmg_initial_io_state();
    }

    /// Drive every peripheral until it is no longer behind `target`.
    pub fn catch_up(&mut self, target: u64) {
        catch_up(&mut self.timer, target, &mut self.if_reg);
        catch_up(&mut self.serial, target, &mut self.if_reg);
        catch_up(&mut self.joypad, target, &mut self.if_reg);
        catch_up(&mut self.video, target, &mut self.if_reg);
        let mut dma = DmaPort {
            dma: &mut self.dma,
            memory: &mut self.memory,
        };
        catch_up(&mut dma, target, &mut self.if_reg);
    }

    pub fn interrupt_flags(&self) -> InterruptFlags {
        self.if_reg
    }

    /// Latch interrupt requests from outside the peripherals (debuggers,
    /// fixtures).
    pub fn request_interrupt(&mut self, flags: InterruptFlags) {
        self.if_reg.insert(flags);
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.joypad.set_button(button, pressed);
    }

    pub fn button_pressed(&self, button: Button) -> bool {
        self.joypad.is_pressed(button)
    }

    pub fn serial_transfer_active(&self) -> bool {
        self.serial.transfer_active()
    }

    pub fn serial_output(&self) -> &[u8] {
        self.serial.output()
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        self.serial.take_output()
    }

    pub fn dma_active(&self) -> bool {
        self.dma.active()
    }
}
