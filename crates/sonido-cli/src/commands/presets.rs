//! Preset management commands.
//!
//! Lists, shows, saves, and deletes reverb parameter presets.

use clap::{Args, Subcommand};
use sonido_config::{
    Preset, PresetParameters, factory_presets, get_factory_preset,
    paths::{self, user_presets_dir},
};

use super::common::load_preset;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save the current parameters as a new user preset
    Save {
        /// Name for the new preset
        name: String,

        /// Base this preset on an existing factory preset
        #[arg(long, default_value = "studio")]
        base: String,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Delete a user preset
    Delete {
        /// Preset name to delete
        name: String,

        /// Don't ask for confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            base,
            description,
            force,
        } => save_preset(&name, &base, description.as_deref(), force),
        PresetsCommand::Delete { name, force } => delete_preset(&name, force),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name, desc);
        }
        println!();
    }

    if show_user {
        println!("User Presets:");
        println!("=============");
        let user_presets = paths::list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!(
                "  Create a preset with: sonido-reverb-cli presets save <name> --base studio\n"
            );
        } else {
            for path in user_presets {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown");

                match Preset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:20} - {}", name, desc);
                    }
                    Err(_) => {
                        println!("  {:20} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    print_parameters(&preset.parameters);

    Ok(())
}

fn print_parameters(p: &PresetParameters) {
    println!("Parameters:");
    println!("  wet_dry_mix_pct   = {:.1}", p.wet_dry_mix_pct);
    println!("  decay_time_s      = {:.3}", p.decay_time_s);
    println!("  pre_delay_s       = {:.3}", p.pre_delay_s);
    println!("  room_size         = {:.2}", p.room_size);
    println!("  density           = {:.2}", p.density);
    println!("  hf_damping        = {:.2}", p.hf_damping);
    println!("  lf_damping        = {:.2}", p.lf_damping);
    println!("  cross_feed_amount = {:.2}", p.cross_feed_amount);
    println!("  cross_delay_ms    = {:.1}", p.cross_delay_ms);
    println!("  stereo_width      = {:.2}", p.stereo_width);
    println!("  stereo_spread     = {:.2}", p.stereo_spread);
    println!("  hi_cut_hz         = {:.0}", p.hi_cut_hz);
    println!("  lo_cut_hz         = {:.0}", p.lo_cut_hz);
    println!("  bypass            = {}", p.bypass);
}

fn save_preset(
    name: &str,
    base: &str,
    description: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    paths::ensure_user_presets_dir()?;

    let preset_path = user_presets_dir().join(format!("{}.toml", name));

    if preset_path.exists() && !force {
        anyhow::bail!(
            "Preset '{}' already exists. Use --force to overwrite.",
            name
        );
    }

    let base_preset = get_factory_preset(base)
        .ok_or_else(|| anyhow::anyhow!("Unknown factory preset '{}'", base))?;

    let mut preset = Preset::new(name, base_preset.parameters);
    if let Some(desc) = description {
        preset = preset.with_description(desc);
    }

    preset.save(&preset_path)?;

    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn delete_preset(name: &str, force: bool) -> anyhow::Result<()> {
    if get_factory_preset(name).is_some() {
        anyhow::bail!(
            "Cannot delete factory preset '{}'. Factory presets are built-in.",
            name
        );
    }

    let preset_path = user_presets_dir().join(format!("{}.toml", name));

    if !preset_path.exists() {
        anyhow::bail!("User preset '{}' not found.", name);
    }

    if !force {
        anyhow::bail!("Use --force to confirm deletion of preset '{}'.", name);
    }

    std::fs::remove_file(&preset_path)?;
    println!("Deleted preset '{}'.", name);

    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets:   {}", user_presets_dir().display());
    println!("System presets: {}", paths::system_presets_dir().display());
    println!("Config dir:     {}", paths::user_config_dir().display());

    Ok(())
}
