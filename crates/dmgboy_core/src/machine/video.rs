//! LCD timing: LY, STAT modes and the VBlank/STAT interrupt sources.
//!
//! No pixels are produced. Only the DMG line and mode schedule is modelled,
//! which is what software polls and what drives INT $40 and INT $48.

use crate::clock::Peripheral;
use crate::cpu::InterruptFlags;

/// Ticks per video advance.
pub(super) const VIDEO_STEP_TICKS: u64 = 4;

pub(crate) const LINE_TICKS: u16 = 456;
pub(crate) const LINES_PER_FRAME: u8 = 154;
pub(crate) const VBLANK_LINE: u8 = 144;
const OAM_SCAN_TICKS: u16 = 80;
const TRANSFER_TICKS: u16 = 172;

const LCDC_ENABLE: u8 = 0x80;
const STAT_SELECT_MASK: u8 = 0x78;
const STAT_LYC_SELECT: u8 = 0x40;
const STAT_MODE2_SELECT: u8 = 0x20;
const STAT_MODE1_SELECT: u8 = 0x10;
const STAT_MODE0_SELECT: u8 = 0x08;
const STAT_COINCIDENCE: u8 = 0x04;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    Transfer = 3,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Video {
    clock: u64,
    lcdc: u8,
    /// Writable STAT bits (6:3) only.
    stat_select: u8,
    ly: u8,
    lyc: u8,
    /// Position within the current line, 0..456.
    line_ticks: u16,
    /// Logical OR of all enabled STAT sources at the last update.
    stat_line: bool,
}

impl Video {
    pub(crate) fn new() -> Self {
        let mut video = Self::default();
        video.apply_post_boot_state();
        video
    }

    /// LCD on, BG on, tile data at 0x8000; top of frame.
    pub(crate) fn apply_post_boot_state(&mut self) {
        self.lcdc = 0x91;
        self.stat_select = 0;
        self.ly = 0;
        self.lyc = 0;
        self.line_ticks = 0;
        self.stat_line = false;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.lcdc & LCDC_ENABLE != 0
    }

    pub(crate) fn mode(&self) -> Mode {
        if !self.enabled() {
            Mode::HBlank
        } else if self.ly >= VBLANK_LINE {
            Mode::VBlank
        } else if self.line_ticks < OAM_SCAN_TICKS {
            Mode::OamScan
        } else if self.line_ticks < OAM_SCAN_TICKS + TRANSFER_TICKS {
            Mode::Transfer
        } else {
            Mode::HBlank
        }
    }

    pub(crate) fn read_lcdc(&self) -> u8 {
        self.lcdc
    }

    /// Turning the LCD off parks LY at 0; turning it on restarts the frame.
    pub(crate) fn write_lcdc(&mut self, value: u8) {
        let was_enabled = self.enabled();
        self.lcdc = value;
        if was_enabled != self.enabled() {
            log::debug!(
                "GB video LCD {} at LY={}",
                if self.enabled() { "on" } else { "off" },
                self.ly
            );
            self.ly = 0;
            self.line_ticks = 0;
            self.stat_line = false;
        }
    }

    pub(crate) fn read_stat(&self) -> u8 {
        let mut stat = 0x80 | self.stat_select | self.mode() as u8;
        if self.ly == self.lyc {
            stat |= STAT_COINCIDENCE;
        }
        stat
    }

    pub(crate) fn write_stat(&mut self, value: u8) {
        self.stat_select = value & STAT_SELECT_MASK;
    }

    pub(crate) fn read_ly(&self) -> u8 {
        self.ly
    }

    pub(crate) fn read_lyc(&self) -> u8 {
        self.lyc
    }

    pub(crate) fn write_lyc(&mut self, value: u8) {
        self.lyc = value;
    }

    /// Raise INT $48 on a rising edge of the combined STAT line.
    fn update_stat_line(&mut self, if_reg: &mut InterruptFlags) {
        if !self.enabled() {
            self.stat_line = false;
            return;
        }
        let mode = self.mode();
        let line = (self.stat_select & STAT_LYC_SELECT != 0 && self.ly == self.lyc)
            || (self.stat_select & STAT_MODE2_SELECT != 0 && mode == Mode::OamScan)
            || (self.stat_select & STAT_MODE1_SELECT != 0 && mode == Mode::VBlank)
            || (self.stat_select & STAT_MODE0_SELECT != 0 && mode == Mode::HBlank);

        if line && !self.stat_line {
            if_reg.insert(InterruptFlags::LCD_STAT);
            log::trace!("GB video STAT edge LY={} mode={mode:?}", self.ly);
        }
        self.stat_line = line;
    }
}

impl Peripheral for Video {
    fn clock(&self) -> u64 {
        self.clock
    }

    fn advance(&mut self, if_reg: &mut InterruptFlags) {
        self.clock += VIDEO_STEP_TICKS;
        if !self.enabled() {
            return;
        }

        self.line_ticks += VIDEO_STEP_TICKS as u16;
        if self.line_ticks >= LINE_TICKS {
            self.line_ticks -= LINE_TICKS;
            self.ly = (self.ly + 1) % LINES_PER_FRAME;
            if self.ly == VBLANK_LINE {
                if_reg.insert(InterruptFlags::VBLANK);
                // DMG also fires the mode-2 STAT source as VBlank begins.
                if self.stat_select & STAT_MODE2_SELECT != 0 {
                    if_reg.insert(InterruptFlags::LCD_STAT);
                }
            }
        }
        self.update_stat_line(if_reg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::catch_up;

    const FRAME_TICKS: u64 = LINE_TICKS as u64 * LINES_PER_FRAME as u64;

    #[test]
    fn modes_follow_the_line_schedule() {
        let mut video = Video::new();
        let mut iflags = InterruptFlags::empty();
        assert_eq!(video.mode(), Mode::OamScan);

        catch_up(&mut video, 80, &mut iflags);
        assert_eq!(video.mode(), Mode::Transfer);
        catch_up(&mut video, 252, &mut iflags);
        assert_eq!(video.mode(), Mode::HBlank);
        catch_up(&mut video, 456, &mut iflags);
        assert_eq!(video.read_ly(), 1);
        assert_eq!(video.mode(), Mode::OamScan);
    }

    #[test]
    fn vblank_once_per_frame() {
        let mut video = Video::new();
        let mut iflags = InterruptFlags::empty();

        catch_up(&mut video, 144 * LINE_TICKS as u64 - 4, &mut iflags);
        assert!(iflags.is_empty());
        catch_up(&mut video, 144 * LINE_TICKS as u64, &mut iflags);
        assert_eq!(iflags, InterruptFlags::VBLANK);
        assert_eq!(video.read_stat() & 0x03, 1);

        iflags = InterruptFlags::empty();
        catch_up(&mut video, FRAME_TICKS, &mut iflags);
        assert_eq!(video.read_ly(), 0);
        assert!(iflags.is_empty());
    }

    #[test]
    fn lyc_match_raises_stat_on_rising_edge() {
        let mut video = Video::new();
        let mut iflags = InterruptFlags::empty();
        video.write_lyc(2);
        video.write_stat(0x40);

        catch_up(&mut video, 2 * LINE_TICKS as u64, &mut iflags);
        assert_eq!(iflags, InterruptFlags::LCD_STAT);
        assert_ne!(video.read_stat() & STAT_COINCIDENCE, 0);

        // Line stays high for the rest of LY=2.
        iflags = InterruptFlags::empty();
        catch_up(&mut video, 3 * LINE_TICKS as u64 - 4, &mut iflags);
        assert!(iflags.is_empty());
    }

    #[test]
    fn lcd_off_parks_ly_at_zero() {
        let mut video = Video::new();
        let mut iflags = InterruptFlags::empty();
        catch_up(&mut video, 10 * LINE_TICKS as u64, &mut iflags);
        assert_eq!(video.read_ly(), 10);

        video.write_lcdc(0x11);
        catch_up(&mut video, FRAME_TICKS, &mut iflags);
        assert_eq!(video.read_ly(), 0);
        assert_eq!(video.read_stat() & 0x03, 0);
        assert!(!iflags.contains(InterruptFlags::VBLANK));
    }
}
