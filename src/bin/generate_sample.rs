use std::fs::File;
use std::io::{BufWriter, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Duration of the synthetic recording in milliseconds.
const DURATION_MS: f64 = 1000.0;
/// Raw timestamps are simulation steps of 0.1 ms.
const STEPS_PER_MS: f64 = 10.0;
const NUM_NEURONS: usize = 400;

/// Write a synthetic `spikes.gdf`: independent Poisson spike trains, one
/// line per event, raw time and neuron id separated by a tab. The firing
/// rate ramps across the population so thresholded views look different.
fn main() -> std::io::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let mut events: Vec<(f64, usize)> = Vec::new();
    for neuron in 0..NUM_NEURONS {
        // 5 Hz at the bottom of the population up to ~35 Hz at the top.
        let rate_hz = 5.0 + 30.0 * neuron as f64 / NUM_NEURONS as f64;
        let mean_interval_ms = 1000.0 / rate_hz;

        let mut t_ms = 0.0;
        loop {
            let u: f64 = rng.gen::<f64>().max(1e-12);
            t_ms += -u.ln() * mean_interval_ms;
            if t_ms >= DURATION_MS {
                break;
            }
            events.push((t_ms * STEPS_PER_MS, neuron));
        }
    }

    events.sort_by(|a, b| a.0.total_cmp(&b.0));

    let output_path = "spikes.gdf";
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    for (time_raw, neuron) in &events {
        writeln!(writer, "{time_raw:.1}\t{neuron}")?;
    }
    writer.flush()?;

    println!(
        "Wrote {} spikes from {NUM_NEURONS} neurons to {output_path}",
        events.len()
    );
    Ok(())
}
