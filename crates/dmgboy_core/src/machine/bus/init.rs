use crate::cpu::InterruptFlags;

use super::GameBoyBus;

impl GameBoyBus {
    /// I/O registers as the DMG boot ROM leaves them at PC=0x0100.
    ///
    /// Timer, serial, joypad and video carry their own post-boot values;
    /// this covers IF/IE and the registers that only live in memory.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        self.randomize_internal_ram();

        // The boot ROM leaves a VBlank request behind.
        self.if_reg = InterruptFlags::VBLANK;
        self.ie_reg = 0x00;

        // Sound registers. No audio is produced but software can read
        // them back.
        const SOUND: [(usize, u8); 21] = [
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
        ];
        for (addr, value) in SOUND {
            self.memory[addr] = value;
        }

        self.memory[0xFF42] = 0x00; // SCY
        self.memory[0xFF43] = 0x00; // SCX
        self.memory[0xFF47] = 0xFC; // BGP
        self.memory[0xFF4A] = 0x00; // WY
        self.memory[0xFF4B] = 0x00; // WX
    }

    /// WRAM and HRAM hold garbage at power-on. A fixed-seed xorshift keeps
    /// runs reproducible without handing software all zeroes.
    fn randomize_internal_ram(&mut self) {
        let mut x: u32 = 0xC0DE_1234;
        let mut next_byte = || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        };

        for addr in 0xC000..=0xDFFF {
            self.memory[addr] = next_byte();
        }
        for addr in 0xFF80..=0xFFFE {
            self.memory[addr] = next_byte();
        }
    }
}
