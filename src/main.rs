use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pagescribe::config::Config;
use pagescribe::draw::Viewport;
use pagescribe::export;
use pagescribe::script::{self, Script};
use pagescribe::toolbar::ToolbarState;
use pagescribe::{DrawingSurface, PageElements};
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAGESCRIBE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pagescribe")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand drawing overlay with pen, marker, eraser and undo"
)]
struct Cli {
    /// Replay a recorded host-event script (JSON) and save the drawing as PNG
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Where to write the PNG (defaults to a timestamped file in output.directory)
    #[arg(long, short = 'o', value_name = "PATH", requires = "replay")]
    output: Option<PathBuf>,

    /// Viewport width, overriding the script and config
    #[arg(
        long,
        value_name = "PX",
        requires = "replay",
        value_parser = clap::value_parser!(i32).range(1..=16384)
    )]
    width: Option<i32>,

    /// Viewport height, overriding the script and config
    #[arg(
        long,
        value_name = "PX",
        requires = "replay",
        value_parser = clap::value_parser!(i32).range(1..=16384)
    )]
    height: Option<i32>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "replay")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
    } else if let Some(script_path) = cli.replay.as_deref() {
        let config = match cli.config.as_deref() {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let script = Script::load(script_path)?;

        // Command line beats the recording, the recording beats the config
        let fallback = script
            .viewport
            .unwrap_or(Viewport::new(config.viewport.width, config.viewport.height));
        let viewport = Viewport::new(
            cli.width.unwrap_or(fallback.width),
            cli.height.unwrap_or(fallback.height),
        );

        let page = PageElements::complete(viewport, ToolbarState::default());
        let mut surface = DrawingSurface::attach(page, &config).with_context(|| {
            format!(
                "Failed to attach drawing surface at {}x{}",
                viewport.width, viewport.height
            )
        })?;

        let report = script::replay(&mut surface, &script.events);

        let output = match cli.output {
            Some(path) => path,
            None => export::default_output_path(&config.output)
                .context("Failed to prepare output directory")?,
        };
        export::write_png(surface.raster(), &output)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        println!("{report}");
        println!("Saved drawing to {}", output.display());
    } else {
        // No flags: show usage
        println!("pagescribe: Freehand drawing overlay with pen, marker, eraser and undo");
        println!();
        println!("Usage:");
        println!("  pagescribe --replay <SCRIPT>     Replay a host-event script and save a PNG");
        println!("  pagescribe --replay <SCRIPT> -o out.png");
        println!("  pagescribe --init-config         Write the default config file");
        println!("  pagescribe --help                Show help");
        println!();
        println!("Config is read from ~/.config/pagescribe/config.toml");
    }

    Ok(())
}
