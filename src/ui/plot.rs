use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, MarkerShape, Plot, PlotPoints, Points};

use crate::color::NeuronGradient;
use crate::data::histogram::RateHistogram;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: raster + firing-rate histogram
// ---------------------------------------------------------------------------

/// Render the two stacked plots in the central panel.
pub fn raster_and_rate(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a spike file to view the raster  (File → Open…)");
            });
            return;
        }
    };

    let half = (ui.available_height() / 2.0 - 4.0).max(80.0);

    // ---- Raster: spike time vs neuron id ----
    Plot::new("raster_plot")
        .height(half)
        .x_axis_label("t [ms]")
        .y_axis_label("Neuron ID")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let alpha = state.config.alpha;
            let radius = state.config.marker_radius;

            if state.config.color_by_neuron {
                let gradient =
                    NeuronGradient::new(dataset.max_neuron_id().unwrap_or(1.0));

                // One series per neuron so each gets its gradient colour.
                let mut per_neuron: BTreeMap<i64, Vec<[f64; 2]>> = BTreeMap::new();
                for &idx in &state.visible_indices {
                    let r = &dataset.records[idx];
                    per_neuron
                        .entry(r.neuron_id as i64)
                        .or_default()
                        .push([r.time_ms(), r.neuron_id]);
                }

                for (neuron, coords) in per_neuron {
                    let color = gradient.color_for(neuron as f64).gamma_multiply(alpha);
                    plot_ui.points(marker(coords.into(), color, radius));
                }
            } else {
                let coords: PlotPoints = state
                    .visible_indices
                    .iter()
                    .map(|&idx| {
                        let r = &dataset.records[idx];
                        [r.time_ms(), r.neuron_id]
                    })
                    .collect();
                let color = Color32::LIGHT_BLUE.gamma_multiply(alpha);
                plot_ui.points(marker(coords, color, radius).name("spikes"));
            }
        });

    ui.separator();

    // ---- Histogram: spike counts per time bin ----
    let histogram = RateHistogram::from_selection(
        dataset,
        &state.visible_indices,
        state.config.bin_count,
    );

    Plot::new("rate_plot")
        .height(half)
        .x_axis_label("t [ms]")
        .y_axis_label("rate [Hz]")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = histogram
                .counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    Bar::new(histogram.bin_center(i), count as f64)
                        .width(histogram.bin_width_ms)
                })
                .collect();

            let chart = BarChart::new(bars)
                .color(Color32::LIGHT_BLUE.gamma_multiply(state.config.alpha))
                .name("rate [Hz]");
            plot_ui.bar_chart(chart);
        });
}

/// Filled circular marker with no edge stroke.
fn marker(coords: PlotPoints, color: Color32, radius: f32) -> Points {
    Points::new(coords)
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(radius)
        .color(color)
}
