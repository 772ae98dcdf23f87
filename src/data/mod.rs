/// Data layer: core types, loading, filtering, and binning.
///
/// Architecture:
/// ```text
///   spikes.gdf
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse whitespace table → SpikeDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SpikeDataset │  Vec<SpikeRecord>, file order
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  filter   │ ──▶ │ histogram  │  neuron_id < T → time-binned counts
///   └──────────┘      └───────────┘
/// ```
pub mod filter;
pub mod histogram;
pub mod loader;
pub mod model;
