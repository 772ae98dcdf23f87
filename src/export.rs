use std::path::Path;

use anyhow::{Result, anyhow};
use plotters::prelude::*;

use crate::color::NeuronGradient;
use crate::data::histogram::RateHistogram;
use crate::data::model::SpikeDataset;
use crate::state::PlotConfig;

// ---------------------------------------------------------------------------
// Offscreen PNG export
// ---------------------------------------------------------------------------

/// Canvas size in inches; pixel dimensions are this times the configured DPI.
const FIG_WIDTH_IN: f64 = 6.4;
const FIG_HEIGHT_IN: f64 = 4.8;

/// Single-colour marker used when per-neuron colouring is off.
const MARKER_RGB: RGBColor = RGBColor(31, 119, 180);

/// Render the two-panel figure (raster on top, firing-rate histogram below)
/// to a PNG at `config.dpi`. An existing file at `path` is overwritten.
pub fn save_png(
    dataset: &SpikeDataset,
    indices: &[usize],
    config: &PlotConfig,
    path: &Path,
) -> Result<()> {
    render(dataset, indices, config, path)
        .map_err(|e| anyhow!("rendering {}: {e}", path.display()))
}

fn render(
    dataset: &SpikeDataset,
    indices: &[usize],
    config: &PlotConfig,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let width = (FIG_WIDTH_IN * config.dpi as f64).round() as u32;
    let height = (FIG_HEIGHT_IN * config.dpi as f64).round() as u32;
    let scale = config.dpi as f64 / 96.0;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (top, bottom) = root.split_vertically(height / 2);

    let label_font = ("sans-serif", (12.0 * scale) as i32).into_font();
    let axis_font = ("sans-serif", (14.0 * scale) as i32).into_font();

    // ---- Shared ranges ----
    let times_ms: Vec<f64> = indices
        .iter()
        .map(|&i| dataset.records[i].time_ms())
        .collect();
    let (t_min, t_max) = padded_bounds(&times_ms);
    let id_max = indices
        .iter()
        .map(|&i| dataset.records[i].neuron_id)
        .fold(0.0f64, f64::max)
        .max(1.0);

    // ---- Raster panel ----
    let mut raster = ChartBuilder::on(&top)
        .margin((10.0 * scale) as i32)
        .x_label_area_size((35.0 * scale) as i32)
        .y_label_area_size((50.0 * scale) as i32)
        .build_cartesian_2d(t_min..t_max, -0.5..id_max * 1.05)?;

    raster
        .configure_mesh()
        .x_desc("t [ms]")
        .y_desc("Neuron ID")
        .axis_desc_style(axis_font.clone())
        .label_style(label_font.clone())
        .draw()?;

    let radius = ((config.marker_radius as f64 / 72.0) * config.dpi as f64)
        .round()
        .max(1.0) as i32;
    let alpha = config.alpha as f64;
    let gradient = NeuronGradient::new(dataset.max_neuron_id().unwrap_or(1.0));

    raster.draw_series(indices.iter().map(|&i| {
        let r = &dataset.records[i];
        let rgb = if config.color_by_neuron {
            let (red, green, blue) = gradient.rgb_for(r.neuron_id);
            RGBColor(red, green, blue)
        } else {
            MARKER_RGB
        };
        Circle::new((r.time_ms(), r.neuron_id), radius, rgb.mix(alpha).filled())
    }))?;

    // ---- Firing-rate panel ----
    let histogram = RateHistogram::from_selection(dataset, indices, config.bin_count);
    let count_max = histogram
        .counts
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    let mut rate = ChartBuilder::on(&bottom)
        .margin((10.0 * scale) as i32)
        .x_label_area_size((35.0 * scale) as i32)
        .y_label_area_size((50.0 * scale) as i32)
        .build_cartesian_2d(t_min..t_max, 0.0..count_max * 1.05)?;

    rate.configure_mesh()
        .x_desc("t [ms]")
        .y_desc("rate [Hz]")
        .axis_desc_style(axis_font)
        .label_style(label_font)
        .draw()?;

    rate.draw_series(histogram.counts.iter().enumerate().map(|(i, &count)| {
        let x0 = histogram.start_ms + i as f64 * histogram.bin_width_ms;
        let x1 = x0 + histogram.bin_width_ms;
        Rectangle::new([(x0, 0.0), (x1, count as f64)], MARKER_RGB.mix(alpha).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Time range with a small margin, widened to a unit span when the
/// selection is empty or has a single distinct timestamp.
fn padded_bounds(times_ms: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &t in times_ms {
        min = min.min(t);
        max = max.max(t);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max - min < f64::EPSILON {
        return (min - 0.5, min + 0.5);
    }
    let pad = (max - min) * 0.02;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SpikeDataset, SpikeRecord};

    fn dataset() -> SpikeDataset {
        SpikeDataset::from_records(vec![
            SpikeRecord { time_raw: 10.0, neuron_id: 5.0 },
            SpikeRecord { time_raw: 20.0, neuron_id: 35.0 },
            SpikeRecord { time_raw: 30.0, neuron_id: 10.0 },
        ])
    }

    #[test]
    fn writes_png_for_filtered_selection() {
        let path = std::env::temp_dir().join("spike_scope_export_filtered.png");
        let ds = dataset();
        save_png(&ds, &[0, 2], &PlotConfig::default(), &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_selection_still_renders() {
        let path = std::env::temp_dir().join("spike_scope_export_empty.png");
        let ds = dataset();
        save_png(&ds, &[], &PlotConfig::default(), &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn padded_bounds_handles_degenerate_input() {
        assert_eq!(padded_bounds(&[]), (0.0, 1.0));
        assert_eq!(padded_bounds(&[2.0, 2.0]), (1.5, 2.5));
    }
}
