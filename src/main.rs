mod app;
mod config;
mod controller;
mod error;
mod event;
mod fire;
mod help;
mod palette;
mod settings;
mod terminal;

use clap::Parser;
use config::{glyph_from, parse_duration, FireConfig};
use palette::Palette;
use settings::Settings;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "termfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Doom-style fire in the terminal", long_about = None)]
struct Cli {
    /// Character used to draw the fire
    #[arg(long = "char")]
    draw_char: Option<String>,

    /// Tick speed, e.g. 30ms, 100ms [default: 50ms]
    #[arg(long, value_parser = parse_duration)]
    speed: Option<Duration>,

    /// Colour palette: red, green, blue, gray or a custom one from config.toml [default: red]
    #[arg(long)]
    palette: Option<String>,

    /// Heat decay intensity, higher means shorter flames [default: 6.0]
    #[arg(long)]
    decay: Option<f64>,

    /// Disable flicker
    #[arg(long)]
    no_flicker: bool,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the available palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

/// Merge CLI flags over the settings file over built-in defaults
fn resolve(cli: &Cli, settings: &Settings) -> FireConfig {
    let defaults = FireConfig::default();
    let file = &settings.defaults;

    FireConfig {
        draw_char: cli
            .draw_char
            .as_deref()
            .or(file.glyph.as_deref())
            .map(glyph_from)
            .unwrap_or(defaults.draw_char),
        palette: cli
            .palette
            .clone()
            .or_else(|| file.palette.clone())
            .unwrap_or(defaults.palette),
        tick: cli.speed.or_else(|| settings.speed()).unwrap_or(defaults.tick),
        decay: cli.decay.or(file.decay).unwrap_or(defaults.decay),
        flicker: if cli.no_flicker {
            false
        } else {
            file.flicker.unwrap_or(defaults.flicker)
        },
        seed: cli.seed,
    }
    .clamped()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::load();

    if cli.list_palettes {
        for name in Palette::names(&settings.palettes) {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    let config = resolve(&cli, &settings);
    let result = Palette::build(&config.palette, config.draw_char, &settings.palettes)
        .and_then(|palette| app::run(&config, palette));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
