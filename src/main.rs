use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use serde::Deserialize;
use sketchpad::draw::{CairoCanvas, ImageFormat};
use sketchpad::export::{self, FileSaveConfig};
use sketchpad::input::RawPointerEvent;
use sketchpad::{Config, Point, Sketch};
use std::fs;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version = VERSION, about = "Replay pointer input onto a sketch and export the result")]
struct Cli {
    /// JSON script of option changes and pointer events to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Write the exported image here instead of the configured save directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Export format: png or jpeg (jpg is accepted)
    #[arg(long, short = 'f', value_name = "FORMAT")]
    format: Option<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the committed actions as JSON after replaying
    #[arg(long, action = ArgAction::SetTrue)]
    print_actions: bool,

    /// Print the export as a data URL instead of writing a file
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "output")]
    data_url: bool,
}

/// A replay script: surface geometry plus an ordered list of steps.
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    /// Page position of the surface; pointer coordinates are page coordinates
    #[serde(default)]
    offset: Point,
    steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptStep {
    Option { option: String, value: String },
    Command { command: ScriptCommand },
    Pointer(RawPointerEvent),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScriptCommand {
    Undo,
    Redo,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn load_script(path: &Path) -> Result<Script> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))?;
    let script: Script = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script from {}", path.display()))?;
    if script.width == 0 || script.height == 0 {
        bail!("Script surface must be at least 1x1 (got {}x{})", script.width, script.height);
    }
    Ok(script)
}

fn replay(sketch: &mut Sketch<CairoCanvas>, steps: &[ScriptStep]) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        let result = match step {
            ScriptStep::Option { option, value } => sketch.set_option(option, value),
            ScriptStep::Command {
                command: ScriptCommand::Undo,
            } => sketch.undo(),
            ScriptStep::Command {
                command: ScriptCommand::Redo,
            } => sketch.redo(),
            ScriptStep::Pointer(event) => sketch.handle_raw_event(event),
        };
        result.with_context(|| format!("Script step {} failed", index + 1))?;
    }

    for change in sketch.take_notifications() {
        log::debug!("{} -> {}", change.event_name(), change.value);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format: ImageFormat = match &cli.format {
        Some(format) => format.parse()?,
        None => config.export.default_format.to_image_format(),
    };

    let script = load_script(&cli.script)?;
    log::info!(
        "Replaying {} step(s) on a {}x{} surface",
        script.steps.len(),
        script.width,
        script.height
    );

    let canvas = CairoCanvas::new(script.width, script.height)?
        .with_jpeg_quality(config.export.jpeg_quality);
    let mut sketch = Sketch::new(canvas, &config)?;
    sketch.set_surface_offset(script.offset);
    sketch.redraw()?;
    replay(&mut sketch, &script.steps)?;

    if cli.print_actions {
        println!("{}", serde_json::to_string_pretty(sketch.committed())?);
    }

    if cli.data_url {
        let extension = format.extension();
        println!("{}", sketch.download(extension)?);
        return Ok(());
    }

    let bytes = sketch.export(format)?;
    let path = match &cli.output {
        Some(path) => {
            export::write_export(&bytes, path)?;
            path.clone()
        }
        None => {
            let save = FileSaveConfig::from_config(&config.export).with_format(format);
            export::save_export(&bytes, &save)?
        }
    };
    log::info!("Wrote {}", path.display());

    Ok(())
}
