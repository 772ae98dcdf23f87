mod app;
mod color;
mod data;
mod export;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use app::SpikeScopeApp;
use clap::Parser;
use eframe::egui;
use state::{AppState, PlotConfig};

/// Spike raster and firing-rate viewer.
#[derive(Parser)]
#[command(name = "spike-scope", about = "View spike recordings as a raster plot and firing-rate histogram")]
struct Cli {
    /// Spike file to open (whitespace-delimited: time, neuron id).
    /// Defaults to ./spikes.gdf when present.
    input: Option<PathBuf>,

    /// Keep only spikes from neurons with id strictly below this value
    #[arg(short, long, default_value_t = 30.0)]
    threshold: f64,

    /// Number of time bins in the firing-rate histogram
    #[arg(short, long, default_value_t = 100)]
    bins: usize,

    /// Export resolution in dots per inch
    #[arg(long, default_value_t = 200)]
    dpi: u32,

    /// Write the figure to this PNG before opening the viewer
    #[arg(short, long)]
    save: Option<PathBuf>,
}

const DEFAULT_INPUT: &str = "spikes.gdf";

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PlotConfig {
        threshold: cli.threshold,
        bin_count: cli.bins,
        dpi: cli.dpi,
        ..PlotConfig::default()
    };
    let mut state = AppState::with_config(config);

    // An explicitly named input must load; the implicit default is optional.
    let explicit = cli.input.is_some();
    let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    if explicit || input.exists() {
        let dataset = data::loader::load_file(&input)?;
        log::info!("Loaded {} spikes from {}", dataset.len(), input.display());
        state.set_dataset(dataset, input);
    } else {
        log::warn!("{DEFAULT_INPUT} not found, starting with no recording");
    }

    if let Some(out) = &cli.save {
        let Some(dataset) = &state.dataset else {
            bail!("--save requires an input recording");
        };
        export::save_png(dataset, &state.visible_indices, &state.config, out)
            .with_context(|| format!("exporting {}", out.display()))?;
        log::info!("Exported figure to {}", out.display());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spike Scope – Raster Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(SpikeScopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}
