pub(super) mod ime;
mod service;

use bitflags::bitflags;

pub(super) use service::InterruptOutcome;

/// Interrupt Enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt Flag (pending) register.
pub const IF_ADDR: u16 = 0xFF0F;

bitflags! {
    /// Bit layout shared by IE and IF.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Interrupt sources, declared in priority order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    pub const PRIORITY: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Fixed handler address: 0x40, 0x48, 0x50, 0x58, 0x60.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }

    #[inline]
    pub const fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << (self as u8))
    }

    /// Highest-priority source present in `pending`.
    pub fn highest(pending: InterruptFlags) -> Option<Interrupt> {
        Self::PRIORITY
            .into_iter()
            .find(|source| pending.contains(source.flag()))
    }
}
