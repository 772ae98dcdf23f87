use std::path::PathBuf;

use crate::data::filter::filtered_indices;
use crate::data::model::SpikeDataset;

// ---------------------------------------------------------------------------
// Rendering parameters
// ---------------------------------------------------------------------------

/// Constant rendering parameters, not derived from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Keep spikes from neurons with id strictly below this value.
    pub threshold: f64,
    /// Number of time bins in the firing-rate histogram.
    pub bin_count: usize,
    /// Raster marker radius in points.
    pub marker_radius: f32,
    /// Marker opacity, 0–1.
    pub alpha: f32,
    /// Export resolution in dots per inch.
    pub dpi: u32,
    /// Colour raster markers by neuron id instead of a single colour.
    pub color_by_neuron: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            threshold: 30.0,
            bin_count: 100,
            marker_radius: 1.5,
            alpha: 0.8,
            dpi: 200,
            color_by_neuron: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded recording (None until a file is opened).
    pub dataset: Option<SpikeDataset>,

    /// Where the recording came from, for the title bar and logs.
    pub source_path: Option<PathBuf>,

    /// Current rendering parameters.
    pub config: PlotConfig,

    /// Indices of records passing the threshold filter (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(PlotConfig::default())
    }
}

impl AppState {
    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            dataset: None,
            source_path: None,
            config,
            visible_indices: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded recording and refresh the filter cache.
    pub fn set_dataset(&mut self, dataset: SpikeDataset, path: PathBuf) {
        self.visible_indices = filtered_indices(&dataset, self.config.threshold);
        self.dataset = Some(dataset);
        self.source_path = Some(path);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a threshold change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, self.config.threshold);
        }
    }

    /// Set the neuron-id threshold and refresh the cache.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.config.threshold = threshold;
        self.refilter();
    }
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
    fn set_dataset_applies_configured_threshold() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), PathBuf::from("spikes.gdf"));
        assert_eq!(state.visible_indices, vec![0, 2]);
    }

    #[test]
    fn threshold_change_refreshes_cache() {
        let mut state = AppState::default();
        state.set_dataset(dataset(), PathBuf::from("spikes.gdf"));
        state.set_threshold(400.0);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        state.set_threshold(0.0);
        assert!(state.visible_indices.is_empty());
    }
}
