use super::model::SpikeDataset;

// ---------------------------------------------------------------------------
// Firing-rate histogram
// ---------------------------------------------------------------------------

/// Spike counts over equal-width time bins, the usual proxy for
/// population firing rate.
///
/// The bin layout always has exactly the configured number of bins, no
/// matter how many (or few) spikes fall into them.
#[derive(Debug, Clone, PartialEq)]
pub struct RateHistogram {
    /// Left edge of the first bin, in milliseconds.
    pub start_ms: f64,
    /// Width of every bin, in milliseconds.
    pub bin_width_ms: f64,
    /// Spike count per bin; `counts.len()` equals the configured bin count.
    pub counts: Vec<u64>,
}

impl RateHistogram {
    /// Bin the scaled (ms) times of the selected records into `bin_count`
    /// equal bins spanning the selection's time range.
    ///
    /// A spike at exactly the upper edge lands in the last bin. An empty
    /// selection yields all-zero counts over a unit range, and a selection
    /// with a single distinct time collapses to a unit-width range around
    /// it, so rendering never has to special-case either.
    pub fn from_selection(dataset: &SpikeDataset, indices: &[usize], bin_count: usize) -> Self {
        let bin_count = bin_count.max(1);
        let times_ms: Vec<f64> = indices
            .iter()
            .map(|&i| dataset.records[i].time_ms())
            .collect();

        let (min, max) = match time_bounds(&times_ms) {
            Some(bounds) => bounds,
            None => {
                return RateHistogram {
                    start_ms: 0.0,
                    bin_width_ms: 1.0 / bin_count as f64,
                    counts: vec![0; bin_count],
                };
            }
        };

        // Degenerate range: all spikes share one timestamp.
        let (start, span) = if max > min {
            (min, max - min)
        } else {
            (min - 0.5, 1.0)
        };

        let bin_width = span / bin_count as f64;
        let mut counts = vec![0u64; bin_count];
        for &t in &times_ms {
            let bin = ((t - start) / bin_width) as usize;
            counts[bin.min(bin_count - 1)] += 1;
        }

        RateHistogram {
            start_ms: start,
            bin_width_ms: bin_width,
            counts,
        }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the histogram holds any spikes at all.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Midpoint of bin `i`, in milliseconds.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start_ms + (i as f64 + 0.5) * self.bin_width_ms
    }
}

fn time_bounds(times_ms: &[f64]) -> Option<(f64, f64)> {
    let mut iter = times_ms.iter().copied();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for t in iter {
        min = min.min(t);
        max = max.max(t);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SpikeDataset, SpikeRecord};

    fn dataset(times_raw: &[f64]) -> SpikeDataset {
        SpikeDataset::from_records(
            times_raw
                .iter()
                .map(|&time_raw| SpikeRecord { time_raw, neuron_id: 0.0 })
                .collect(),
        )
    }

    #[test]
    fn bin_count_matches_configuration() {
        let ds = dataset(&[10.0, 20.0, 30.0]);
        let indices: Vec<usize> = (0..ds.len()).collect();
        for &bins in &[100, 500] {
            let h = RateHistogram::from_selection(&ds, &indices, bins);
            assert_eq!(h.len(), bins);
            assert_eq!(h.counts.iter().sum::<u64>(), 3);
        }
    }

    #[test]
    fn empty_selection_renders_zero_bins() {
        let ds = dataset(&[10.0, 20.0]);
        let h = RateHistogram::from_selection(&ds, &[], 100);
        assert_eq!(h.len(), 100);
        assert!(h.is_empty());
    }

    #[test]
    fn spikes_land_in_expected_bins() {
        // Scaled times 1..=5 ms over 4 bins of width 1 ms.
        let ds = dataset(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let indices: Vec<usize> = (0..ds.len()).collect();
        let h = RateHistogram::from_selection(&ds, &indices, 4);
        assert_eq!(h.start_ms, 1.0);
        assert_eq!(h.bin_width_ms, 1.0);
        // Upper-edge spike (5 ms) is clamped into the last bin.
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn single_timestamp_collapses_to_unit_range() {
        let ds = dataset(&[10.0, 10.0, 10.0]);
        let indices: Vec<usize> = (0..ds.len()).collect();
        let h = RateHistogram::from_selection(&ds, &indices, 10);
        assert_eq!(h.len(), 10);
        assert_eq!(h.counts.iter().sum::<u64>(), 3);
        assert!(h.bin_width_ms > 0.0);
    }
}
