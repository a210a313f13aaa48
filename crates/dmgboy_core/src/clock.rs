//! Shared time base between the CPU and the memory-mapped peripherals.

use crate::cpu::InterruptFlags;

/// Hardware ticks per second of emulated time.
///
/// Every tick count in the crate (CPU clock, peripheral clocks, cycle costs)
/// is expressed in these units.
pub const TICKS_PER_SECOND: u64 = 4_194_304;

/// A peripheral with its own local clock that is driven forward by the
/// stepping coordinator until it has caught up with the CPU.
///
/// Peripherals never call back into the CPU. Anything they want to signal
/// is latched into the shared IF byte passed to `advance`, which the
/// interrupt controller reads at the start of the next step.
pub trait Peripheral {
    /// Ticks this peripheral has been advanced since reset.
    fn clock(&self) -> u64;

    /// Move forward by the smallest increment meaningful to this peripheral
    /// (always at least one tick).
    fn advance(&mut self, if_reg: &mut InterruptFlags);
}

/// Advance `peripheral` until its clock is no longer behind `target`.
///
/// Returns the number of `advance` calls performed.
pub fn catch_up<P: Peripheral + ?Sized>(
    peripheral: &mut P,
    target: u64,
    if_reg: &mut InterruptFlags,
) -> u32 {
    let mut advances = 0;
    while peripheral.clock() < target {
        peripheral.advance(if_reg);
        advances += 1;
    }
    advances
}

/// Convert a tick count into seconds of emulated time.
#[inline]
pub fn ticks_to_seconds(ticks: u64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}
