use crate::cpu::{InterruptFlags, IE_ADDR, IF_ADDR};

use super::GameBoyBus;

/// Distance between echo RAM and the work RAM it mirrors.
const ECHO_OFFSET: u16 = 0x2000;

impl GameBoyBus {
    pub(super) fn read8_mmio(&self, addr: u16) -> u8 {
        match addr {
            0xE000..=0xFDFF => self.memory[(addr - ECHO_OFFSET) as usize],
            0xFEA0..=0xFEFF => 0xFF,

            0xFF00 => self.joypad.read(),
            0xFF01 => self.serial.read_sb(),
            0xFF02 => self.serial.read_sc(),
            0xFF04 => self.timer.read_div(),
            0xFF05 => self.timer.read_tima(),
            0xFF06 => self.timer.read_tma(),
            0xFF07 => self.timer.read_tac(),
            IF_ADDR => self.if_reg.bits() | 0b1110_0000,

            0xFF40 => self.video.read_lcdc(),
            0xFF41 => self.video.read_stat(),
            0xFF44 => self.video.read_ly(),
            0xFF45 => self.video.read_lyc(),
            0xFF46 => self.dma.register(),

            IE_ADDR => self.ie_reg,
            _ => self.memory[addr as usize],
        }
    }

    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            // No bank controller: ROM writes go nowhere.
            0x0000..=0x7FFF => {
                log::trace!("GB write to ROM 0x{addr:04X} <- 0x{value:02X} ignored");
            }
            0xE000..=0xFDFF => self.memory[(addr - ECHO_OFFSET) as usize] = value,
            0xFEA0..=0xFEFF => {}

            0xFF00 => self.joypad.write(value),
            0xFF01 => self.serial.write_sb(value),
            0xFF02 => self.serial.write_sc(value),
            0xFF04 => self.timer.write_div(),
            0xFF05 => self.timer.write_tima(value),
            0xFF06 => self.timer.write_tma(value),
            0xFF07 => self.timer.write_tac(value),
            IF_ADDR => self.if_reg = InterruptFlags::from_bits_truncate(value),

            0xFF40 => self.video.write_lcdc(value),
            0xFF41 => self.video.write_stat(value),
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => self.video.write_lyc(value),
            0xFF46 => self.dma.start(value),

            IE_ADDR => self.ie_reg = value,
            _ => self.memory[addr as usize] = value,
        }
    }
}
