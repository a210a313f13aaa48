//! Headless runner: loads a ROM into a [`GameBoy`] and steps it until the
//! program reports a verdict over the serial port or a step budget runs out.

use std::fmt;

use anyhow::{Context, Result};
use dmgboy_core::clock::ticks_to_seconds;
use dmgboy_core::{GameBoy, IllegalOpcodePolicy, MachineConfig};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_STEPS: u64 = 100_000_000;

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunOptions {
    #[builder(default = DEFAULT_MAX_STEPS)]
    pub max_steps: u64,
    /// Skip undecodable opcodes instead of stopping.
    #[builder(default)]
    pub lenient: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Passed,
    Failed,
    /// The step budget ran out before the program reported anything.
    StepLimit,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("passed"),
            Verdict::Failed => f.write_str("failed"),
            Verdict::StepLimit => f.write_str("step limit reached"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub verdict: Verdict,
    pub steps: u64,
    pub ticks: u64,
    pub serial: Vec<u8>,
}

impl RunReport {
    /// Emulated wall time.
    pub fn seconds(&self) -> f64 {
        ticks_to_seconds(self.ticks)
    }

    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.serial).into_owned()
    }
}

/// Look for the words blargg-style test ROMs print when they finish.
pub fn scan_verdict(serial: &[u8]) -> Option<Verdict> {
    if contains(serial, b"Passed") {
        Some(Verdict::Passed)
    } else if contains(serial, b"Failed") {
        Some(Verdict::Failed)
    } else {
        None
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

pub fn run(rom: &[u8], options: &RunOptions) -> Result<RunReport> {
    let illegal_opcodes = if options.lenient {
        IllegalOpcodePolicy::Ignore
    } else {
        IllegalOpcodePolicy::Fatal
    };
    let config = MachineConfig::builder()
        .illegal_opcodes(illegal_opcodes)
        .build();
    let mut gb = GameBoy::new(config);
    gb.load_rom(rom);

    let mut steps = 0u64;
    let mut scanned = 0usize;
    let verdict = loop {
        if steps >= options.max_steps {
            log::warn!("Step limit of {} reached", options.max_steps);
            break Verdict::StepLimit;
        }
        gb.step().with_context(|| {
            format!(
                "execution stopped after {steps} steps (clock={}, SP=0x{:04X})",
                gb.clock(),
                gb.cpu.regs.sp
            )
        })?;
        steps += 1;

        let serial = gb.serial_output();
        if serial.len() != scanned {
            scanned = serial.len();
            if let Some(verdict) = scan_verdict(serial) {
                break verdict;
            }
        }
    };

    let report = RunReport {
        verdict,
        steps,
        ticks: gb.clock(),
        serial: gb.take_serial_output(),
    };
    log::info!(
        "Run finished: {} after {} steps ({} ticks)",
        report.verdict,
        report.steps,
        report.ticks
    );
    Ok(report)
}
