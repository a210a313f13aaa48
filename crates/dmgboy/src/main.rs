use anyhow::{bail, Context, Result};
use dmgboy::{RunOptions, Verdict, DEFAULT_MAX_STEPS};

const USAGE: &str = "usage: dmgboy <rom> [max_steps] [--lenient]";

fn main() -> Result<()> {
    env_logger::init();

    let mut rom_path: Option<String> = None;
    let mut max_steps: Option<u64> = None;
    let mut lenient = false;
    for arg in std::env::args().skip(1) {
        if arg == "--lenient" {
            lenient = true;
        } else if rom_path.is_none() {
            rom_path = Some(arg);
        } else if max_steps.is_none() {
            let steps = arg
                .parse()
                .with_context(|| format!("invalid step count '{arg}'"))?;
            max_steps = Some(steps);
        } else {
            bail!("unexpected argument '{arg}'\n{USAGE}");
        }
    }

    let Some(rom_path) = rom_path else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    log::info!("Running ROM '{rom_path}'");
    let rom = std::fs::read(&rom_path).with_context(|| format!("failed to read ROM '{rom_path}'"))?;

    let options = RunOptions::builder()
        .max_steps(max_steps.unwrap_or(DEFAULT_MAX_STEPS))
        .lenient(lenient)
        .build();
    let report = dmgboy::run(&rom, &options)?;

    print!("{}", report.transcript());
    println!();
    println!(
        "{}: {} steps, {} ticks, {:.3} s emulated",
        report.verdict,
        report.steps,
        report.ticks,
        report.seconds()
    );

    if report.verdict != Verdict::Passed {
        std::process::exit(1);
    }
    Ok(())
}
