//! Joypad matrix behind P1 (0xFF00).

use crate::clock::Peripheral;
use crate::cpu::InterruptFlags;

/// Ticks between two samples of the input lines.
pub(super) const JOYPAD_SAMPLE_TICKS: u64 = 4;

const SELECT_DPAD: u8 = 0x10;
const SELECT_BUTTONS: u8 = 0x20;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Line within the selected group.
    fn bit(self) -> u8 {
        match self {
            Button::Right | Button::A => 0x01,
            Button::Left | Button::B => 0x02,
            Button::Up | Button::Select => 0x04,
            Button::Down | Button::Start => 0x08,
        }
    }

    fn is_dpad(self) -> bool {
        matches!(self, Button::Right | Button::Left | Button::Up | Button::Down)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Joypad {
    clock: u64,
    /// P1 bits 5:4; a 0 selects the group.
    select: u8,
    /// 1 = pressed.
    dpad: u8,
    buttons: u8,
    /// Low nibble of P1 at the previous sample.
    lines: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            clock: 0,
            // Both groups selected, P1 reads 0xCF after boot.
            select: 0,
            dpad: 0,
            buttons: 0,
            lines: 0x0F,
        }
    }
}

impl Joypad {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Back to the power-on selection and clock. Held buttons stay held.
    pub(crate) fn reset(&mut self) {
        let (dpad, buttons) = (self.dpad, self.buttons);
        *self = Self {
            dpad,
            buttons,
            ..Self::default()
        };
        self.lines = self.current_lines();
    }

    pub(crate) fn read(&self) -> u8 {
        0xC0 | self.select | self.current_lines()
    }

    /// Only the two select bits are writable.
    pub(crate) fn write(&mut self, value: u8) {
        self.select = value & (SELECT_DPAD | SELECT_BUTTONS);
    }

    pub(crate) fn set_button(&mut self, button: Button, pressed: bool) {
        let group = if button.is_dpad() {
            &mut self.dpad
        } else {
            &mut self.buttons
        };
        if pressed {
            *group |= button.bit();
        } else {
            *group &= !button.bit();
        }
        log::debug!("GB joypad {button:?} {}", if pressed { "down" } else { "up" });
    }

    pub(crate) fn is_pressed(&self, button: Button) -> bool {
        let group = if button.is_dpad() { self.dpad } else { self.buttons };
        group & button.bit() != 0
    }

    /// Input lines as software sees them: active low, only for the
    /// selected groups.
    fn current_lines(&self) -> u8 {
        let mut low = 0x0F;
        if self.select & SELECT_DPAD == 0 {
            low &= !self.dpad;
        }
        if self.select & SELECT_BUTTONS == 0 {
            low &= !self.buttons;
        }
        low & 0x0F
    }
}

impl Peripheral for Joypad {
    fn clock(&self) -> u64 {
        self.clock
    }

    /// Any line going from high to low since the last sample requests the
    /// joypad interrupt.
    fn advance(&mut self, if_reg: &mut InterruptFlags) {
        self.clock += JOYPAD_SAMPLE_TICKS;
        let lines = self.current_lines();
        if self.lines & !lines != 0 {
            if_reg.insert(InterruptFlags::JOYPAD);
        }
        self.lines = lines;
    }
}
