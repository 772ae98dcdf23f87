use super::model::SpikeDataset;

// ---------------------------------------------------------------------------
// Neuron-id threshold filter
// ---------------------------------------------------------------------------

/// Return indices of records with `neuron_id` strictly below `threshold`,
/// in original file order.
///
/// The comparison is strict: a record at exactly the threshold is dropped.
/// The recordings this tool targets were always plotted that way, so the
/// boundary behavior is kept as-is.
pub fn filtered_indices(dataset: &SpikeDataset, threshold: f64) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.neuron_id < threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SpikeDataset, SpikeRecord};

    fn dataset(rows: &[(f64, f64)]) -> SpikeDataset {
        SpikeDataset::from_records(
            rows.iter()
                .map(|&(time_raw, neuron_id)| SpikeRecord { time_raw, neuron_id })
                .collect(),
        )
    }

    #[test]
    fn keeps_only_ids_below_threshold_in_order() {
        let ds = dataset(&[(10.0, 5.0), (20.0, 35.0), (30.0, 10.0)]);
        assert_eq!(filtered_indices(&ds, 30.0), vec![0, 2]);

        let times_ms: Vec<f64> = filtered_indices(&ds, 30.0)
            .iter()
            .map(|&i| ds.records[i].time_ms())
            .collect();
        assert_eq!(times_ms, vec![1.0, 3.0]);
    }

    #[test]
    fn boundary_id_is_excluded() {
        let ds = dataset(&[(1.0, 29.0), (2.0, 30.0), (3.0, 31.0)]);
        assert_eq!(filtered_indices(&ds, 30.0), vec![0]);
    }

    #[test]
    fn threshold_below_all_ids_selects_nothing() {
        let ds = dataset(&[(1.0, 5.0), (2.0, 6.0)]);
        assert!(filtered_indices(&ds, 0.0).is_empty());
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        assert!(filtered_indices(&SpikeDataset::default(), 400.0).is_empty());
    }
}
