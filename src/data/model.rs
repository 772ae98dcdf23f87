// ---------------------------------------------------------------------------
// Core spike-recording types
// ---------------------------------------------------------------------------

/// Raw `.gdf` timestamps are simulation steps of 0.1 ms, so
/// display time = 0.1 × raw time. This is the only transformation
/// applied to the data.
pub const TIME_SCALE_MS: f64 = 0.1;

/// A single logged firing event (one line of the input file).
///
/// Columns beyond the first two are ignored at parse time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpikeRecord {
    /// Timestamp in raw simulation steps (unscaled).
    pub time_raw: f64,
    /// Identifier of the neuron that fired.
    pub neuron_id: f64,
}

impl SpikeRecord {
    /// Spike time in milliseconds.
    pub fn time_ms(&self) -> f64 {
        self.time_raw * TIME_SCALE_MS
    }
}

/// A full spike recording, in file order. Loaded once, immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct SpikeDataset {
    pub records: Vec<SpikeRecord>,
}

impl SpikeDataset {
    pub fn from_records(records: Vec<SpikeRecord>) -> Self {
        SpikeDataset { records }
    }

    /// Number of spike events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the recording holds no events.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest neuron id in the recording, if any. Used to size the
    /// threshold slider and the raster's y axis.
    pub fn max_neuron_id(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.neuron_id)
            .fold(None, |acc, id| Some(acc.map_or(id, |m: f64| m.max(id))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scaling_is_exact() {
        let r = SpikeRecord {
            time_raw: 10.0,
            neuron_id: 5.0,
        };
        assert_eq!(r.time_ms(), 1.0);
        let r = SpikeRecord {
            time_raw: 30.0,
            neuron_id: 10.0,
        };
        assert_eq!(r.time_ms(), 3.0);
    }

    #[test]
    fn max_neuron_id_empty() {
        assert_eq!(SpikeDataset::default().max_neuron_id(), None);
    }

    #[test]
    fn max_neuron_id_tracks_largest() {
        let ds = SpikeDataset::from_records(vec![
            SpikeRecord { time_raw: 1.0, neuron_id: 7.0 },
            SpikeRecord { time_raw: 2.0, neuron_id: 42.0 },
            SpikeRecord { time_raw: 3.0, neuron_id: 3.0 },
        ]);
        assert_eq!(ds.max_neuron_id(), Some(42.0));
    }
}
