use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

mod config;
mod draw;
mod export;
mod input;

use config::Config;
use export::SvgSurface;
use input::{InputEvent, InputState};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Command-based freehand sketchpad with undo/redo and scalable export")]
struct Cli {
    /// Replay a recorded input script (JSON array of events)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Where to write the exported SVG
    #[arg(long, short = 'o', value_name = "FILE", default_value = "sketchpad.svg")]
    output: PathBuf,

    /// Export scale factor (defaults to the configured export_scale)
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f64>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if let Some(script_path) = &cli.script {
        let config = Config::load()?;
        let scale = cli.scale.unwrap_or(config.canvas.export_scale);
        if scale <= 0.0 {
            return Err(anyhow::anyhow!("scale factor must be positive, got {scale}"));
        }

        let script_str = std::fs::read_to_string(script_path)
            .with_context(|| format!("Failed to read script from {}", script_path.display()))?;
        let events: Vec<InputEvent> = serde_json::from_str(&script_str)
            .with_context(|| format!("Failed to parse script from {}", script_path.display()))?;
        log::info!("Replaying {} events from {}", events.len(), script_path.display());

        let mut session = InputState::with_defaults(
            config.drawing.default_color,
            config.drawing.thin_width,
            config.drawing.thick_width,
        );
        for event in &events {
            session.handle_event(event);
        }
        log::info!(
            "Session replayed: {} committed commands",
            session.history.committed().len()
        );

        let export_width = (config.canvas.width as f64 * scale).round() as u32;
        let export_height = (config.canvas.height as f64 * scale).round() as u32;
        let mut surface = SvgSurface::new(export_width, export_height);
        session.render_all(&mut surface, scale, scale);

        std::fs::write(&cli.output, surface.finish())
            .with_context(|| format!("Failed to write export to {}", cli.output.display()))?;
        log::info!(
            "Exported {export_width}x{export_height} drawing to {}",
            cli.output.display()
        );
        println!("Exported {} commands to {}", events.len(), cli.output.display());
    } else {
        // No flags: show usage
        let config = Config::load().unwrap_or_default();
        println!("sketchpad: command-based freehand drawing surface");
        println!();
        println!("Usage:");
        println!("  sketchpad --script <FILE>     Replay an input script and export the drawing");
        println!("  sketchpad --output <FILE>     Export destination (default: sketchpad.svg)");
        println!("  sketchpad --scale <FACTOR>    Override the configured export scale");
        println!("  sketchpad --init-config       Write a documented default config file");
        println!("  sketchpad --help              Show help");
        println!();
        println!("Scripts are JSON arrays of input events, for example:");
        println!(r#"  [{{"event": "pointer-down", "x": 10, "y": 10}},"#);
        println!(r#"   {{"event": "pointer-move", "x": 50, "y": 50}},"#);
        println!(r#"   {{"event": "pointer-up",   "x": 50, "y": 50}}]"#);
        println!();
        println!("Default stamp glyphs: {}", config.stamp.glyphs.join(" "));
    }

    Ok(())
}
