use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scaleview_components::slider::{ScaleSlider, ScaleSliderArgs, TickMark};
use scaleview_ui::{CallbackWith, PointerState, Px};
use tracing::info;

mod config;
mod script;

use script::Step;

/// Drives a scale slider with a scripted gesture and prints what a host
/// would draw.
#[derive(Parser)]
#[command(name = "scaleview-example")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with slider arguments
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Container width in physical pixels
    #[arg(short, long, default_value_t = 330.0)]
    width: f32,
    /// Override the density (physical pixels per dp)
    #[arg(long)]
    scale_factor: Option<f64>,
    /// Override the upper end of the value range
    #[arg(long)]
    progress_max: Option<i32>,
    /// Pointer script, e.g. "d:40 m:120 u:300 l:220"
    #[arg(short, long, default_value = "d:20 m:100 m:170 u:170")]
    script: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut args = match &cli.config {
        Some(path) => config::load_args(path)?,
        None => ScaleSliderArgs::default(),
    };
    if let Some(scale_factor) = cli.scale_factor {
        args = args.scale_factor(scale_factor);
    }
    if let Some(progress_max) = cli.progress_max {
        args = args.progress_max(progress_max);
    }

    let steps = script::parse(&cli.script).context("invalid pointer script")?;
    let label = run(args, Px(cli.width), &steps)?;
    println!("label: {label}");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,scaleview_components=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Replays `steps` and returns the final label text.
fn run(args: ScaleSliderArgs, width: Px, steps: &[Step]) -> Result<String> {
    let label_width = Px(24.0);
    let on_progress: CallbackWith<Option<i32>> = CallbackWith::new(|progress| match progress {
        Some(value) => info!("progress -> {value}"),
        None => info!("progress unset"),
    });
    let mut slider = ScaleSlider::new(args)
        .context("invalid slider arguments")?
        .on_cursor_position_changed(|x| info!("cursor -> {x}"))
        .on_progress_changed_shared(on_progress);

    print_ticks(&slider.tick_marks());
    slider.on_layout_changed(slider.evenly_spaced_geometry(width));

    let mut pointer = PointerState::default();
    for step in steps {
        if let Step::Layout(container_width) = step {
            slider.handle_pointer_events(&mut pointer);
            slider.on_layout_changed(slider.evenly_spaced_geometry(*container_width));
        } else {
            step.queue(&mut pointer);
        }
    }
    let consumed = slider.handle_pointer_events(&mut pointer);
    info!("{consumed} trailing pointer events consumed");

    println!(
        "cursor: {} (bounds {}..={}), label at {}",
        slider.cursor_x(),
        slider.min_x(),
        slider.max_x(),
        slider.label_x(label_width)
    );
    Ok(label_text(slider.progress()))
}

/// Text for the cursor label. Before a value is known the label shows its
/// initial `0.0`.
fn label_text(progress: Option<i32>) -> String {
    progress.map_or_else(|| "0.0".to_string(), |value| value.to_string())
}

fn print_ticks(ticks: &[TickMark]) {
    let row: String = ticks
        .iter()
        .map(|tick| if tick.major { '|' } else { '\'' })
        .collect();
    let labels: Vec<String> = ticks
        .iter()
        .filter_map(|tick| tick.label.map(|value| format!("{}@{}", value, tick.index)))
        .collect();
    println!("ticks: {row}  labels: {}", labels.join(" "));
}
