use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – display settings
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No recording loaded.");
        return;
    };

    let max_id = dataset.max_neuron_id().unwrap_or(0.0).max(1.0);
    let mut threshold = state.config.threshold;

    ui.strong("Neuron ID cutoff");
    let changed = ui
        .add(
            Slider::new(&mut threshold, 0.0..=max_id + 1.0)
                .text("id <")
                .fixed_decimals(0),
        )
        .changed();
    if changed {
        state.set_threshold(threshold);
    }
    ui.separator();

    ui.strong("Firing-rate bins");
    ui.add(Slider::new(&mut state.config.bin_count, 10..=500).text("bins"));
    ui.separator();

    ui.strong("Markers");
    ui.add(
        Slider::new(&mut state.config.marker_radius, 0.5..=6.0)
            .text("radius")
            .fixed_decimals(1),
    );
    ui.add(
        Slider::new(&mut state.config.alpha, 0.05..=1.0)
            .text("alpha")
            .fixed_decimals(2),
    );
    ui.checkbox(&mut state.config.color_by_neuron, "Color by neuron");
    ui.separator();

    ui.strong("Export");
    ui.add(Slider::new(&mut state.config.dpi, 72..=600).text("DPI"));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.dataset.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export PNG…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state
                .source_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "recording".to_string());
            ui.label(format!(
                "{source}: {} spikes loaded, {} shown",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open spike recording")
        .add_filter("Spike files", &["gdf", "dat", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} spikes from {}", dataset.len(), path.display());
                state.set_dataset(dataset, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(dataset) = state.dataset.clone() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export figure")
        .set_file_name("spikes.png")
        .add_filter("PNG image", &["png"])
        .save_file();

    if let Some(path) = file {
        match export::save_png(&dataset, &state.visible_indices, &state.config, &path) {
            Ok(()) => {
                log::info!("Exported figure to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export figure: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
