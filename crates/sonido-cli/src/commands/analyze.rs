//! RT60 analysis from a captured impulse response.

use clap::Args;
use sonido_analysis::measure_rt60;
use sonido_io::read_wav;
use std::path::PathBuf;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Impulse response WAV file (mono)
    #[arg(value_name = "IR")]
    input: PathBuf,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    println!("Analyzing impulse response {}...", args.input.display());

    let (samples, spec) = read_wav(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    match measure_rt60(&samples, sample_rate) {
        Some(rt60) => println!("\nRT60: {:.3}s", rt60),
        None => println!("\nCould not measure RT60 (no measurable energy in the signal)"),
    }

    Ok(())
}
