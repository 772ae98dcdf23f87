use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Neuron-id colour gradient
// ---------------------------------------------------------------------------

/// Maps neuron ids onto a hue gradient for the optional per-neuron
/// colouring of the raster. Ids are spread over roughly two thirds of the
/// hue circle (blue → red) so the extremes stay distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct NeuronGradient {
    max_id: f64,
}

const HUE_START: f32 = 230.0;
const HUE_SPAN: f32 = -230.0;

impl NeuronGradient {
    /// Build a gradient covering ids `0..=max_id`.
    pub fn new(max_id: f64) -> Self {
        NeuronGradient {
            max_id: max_id.max(1.0),
        }
    }

    /// Colour for a neuron id as an sRGB triple.
    pub fn rgb_for(&self, neuron_id: f64) -> (u8, u8, u8) {
        let t = (neuron_id / self.max_id).clamp(0.0, 1.0) as f32;
        let hsl = Hsl::new(HUE_START + t * HUE_SPAN, 0.75, 0.55);
        let rgb: Srgb = hsl.into_color();
        (
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }

    /// Colour for a neuron id as an egui colour.
    pub fn color_for(&self, neuron_id: f64) -> Color32 {
        let (r, g, b) = self.rgb_for(neuron_id);
        Color32::from_rgb(r, g, b)
    }
}
