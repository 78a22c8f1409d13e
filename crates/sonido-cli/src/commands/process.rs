//! File-based reverb processing command.

use super::common::{apply_parameters, load_preset, parse_key_val};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sonido_io::{WavSpec, read_wav_stereo, write_wav, write_wav_stereo};
use sonido_reverb::Engine;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset name or path (supports factory presets, user presets, and file
    /// paths)
    #[arg(short, long, default_value = "studio")]
    preset: String,

    /// Parameter overrides applied after the preset (e.g. "decay_time_s=3.0")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, String)>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Number of FDN delay lines
    #[arg(long, default_value = "8")]
    lines: u32,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,

    /// Force mono output (mix stereo to mono)
    #[arg(long)]
    mono: bool,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = spec.sample_rate as f32;
    let is_stereo_input = spec.channels == 2;

    println!(
        "  {} samples, {} Hz, {} channel(s), {:.2}s",
        samples.len(),
        spec.sample_rate,
        spec.channels,
        samples.len() as f32 / sample_rate
    );

    let preset = load_preset(&args.preset)?;
    println!("Loading preset: {}", preset.name);

    let mut engine = Engine::create(sample_rate, args.block_size as u32, args.lines)
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    apply_parameters(&engine, &preset.parameters);

    for (key, value) in &args.param {
        let parsed: f32 = value
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value for --param {}={}", key, value))?;
        engine.set_parameter(key, parsed);
    }

    let output_stereo = is_stereo_input && !args.mono;
    println!(
        "Processing ({} output, block size {})...",
        if output_stereo { "stereo" } else { "mono" },
        args.block_size
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let in_l = samples.left;
    let in_r = samples.right;
    let mut out_l = vec![0.0_f32; in_l.len()];
    let mut out_r = vec![0.0_f32; in_r.len()];

    let block_size = args.block_size.max(1);
    let mut pos = 0;
    while pos < in_l.len() {
        let n = block_size.min(in_l.len() - pos);
        engine
            .process_stereo(
                &in_l[pos..pos + n],
                &in_r[pos..pos + n],
                &mut out_l[pos..pos + n],
                &mut out_r[pos..pos + n],
                n,
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        pos += n;
        pb.set_position(pos as u64);
    }
    pb.finish_with_message("done");

    let input_mono: Vec<f32> = in_l.iter().zip(&in_r).map(|(l, r)| 0.5 * (l + r)).collect();
    let output_mono: Vec<f32> = out_l
        .iter()
        .zip(&out_r)
        .map(|(l, r)| 0.5 * (l + r))
        .collect();

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&input_mono)),
        linear_to_db(peak(&input_mono))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&output_mono)),
        linear_to_db(peak(&output_mono))
    );

    println!("\nWriting {}...", args.output.display());

    if output_stereo {
        let out_spec = WavSpec {
            channels: 2,
            sample_rate: spec.sample_rate,
            bits_per_sample: args.bit_depth,
        };
        let stereo_out = sonido_io::StereoSamples::new(out_l, out_r);
        write_wav_stereo(&args.output, &stereo_out, out_spec)?;
    } else {
        let out_spec = WavSpec {
            channels: 1,
            sample_rate: spec.sample_rate,
            bits_per_sample: args.bit_depth,
        };
        write_wav(&args.output, &output_mono, out_spec)?;
    }

    println!("Done!");

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
