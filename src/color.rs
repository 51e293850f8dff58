use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Sequential colour scale for heatmap cells
// ---------------------------------------------------------------------------

/// Anchor colours of the "rocket" map, dark to light.
const ROCKET: [(u8, u8, u8); 6] = [
    (3, 5, 26),
    (76, 29, 75),
    (161, 26, 91),
    (228, 71, 69),
    (246, 165, 122),
    (250, 235, 221),
];

/// Maps values in `[min, max]` to colours along a fixed gradient.
#[derive(Debug, Clone)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    stops: Vec<LinSrgb>,
}

impl ColorScale {
    /// Reversed rocket: low values are light, high values are dark.
    pub fn rocket_r(min: f64, max: f64) -> Self {
        let stops: Vec<LinSrgb> = ROCKET
            .iter()
            .rev()
            .map(|&(r, g, b)| {
                let srgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
                srgb.into_linear()
            })
            .collect();
        ColorScale { min, max, stops }
    }

    /// Position of `value` on the scale, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.max - self.min;
        if range.abs() < f64::EPSILON {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, value: f64) -> Color32 {
        to_color32(self.linear_at(self.normalize(value)))
    }

    /// Black on light cells, white on dark ones.
    pub fn text_color_for(&self, value: f64) -> Color32 {
        let c = self.linear_at(self.normalize(value));
        let luminance = 0.2126 * c.red + 0.7152 * c.green + 0.0722 * c.blue;
        if luminance > 0.5 {
            Color32::BLACK
        } else {
            Color32::WHITE
        }
    }

    /// `n` evenly spaced stops from `min` to `max` for the colour bar.
    pub fn legend_entries(&self, n: usize) -> Vec<(f64, Color32)> {
        match n {
            0 => Vec::new(),
            1 => vec![(self.min, self.color_for(self.min))],
            _ => (0..n)
                .map(|i| {
                    let v = self.min + (self.max - self.min) * i as f64 / (n - 1) as f64;
                    (v, self.color_for(v))
                })
                .collect(),
        }
    }

    fn linear_at(&self, t: f32) -> LinSrgb {
        let segments = self.stops.len() - 1;
        let pos = t * segments as f32;
        let i = (pos.floor() as usize).min(segments - 1);
        self.stops[i].mix(self.stops[i + 1], pos - i as f32)
    }
}

fn to_color32(c: LinSrgb) -> Color32 {
    let srgb: Srgb<f32> = Srgb::from_linear(c);
    let rgb: Srgb<u8> = srgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brightness(c: Color32) -> u32 {
        c.r() as u32 + c.g() as u32 + c.b() as u32
    }

    #[test]
    fn test_endpoints_match_anchors() {
        let scale = ColorScale::rocket_r(0.0, 100.0);
        assert_eq!(scale.color_for(0.0), Color32::from_rgb(250, 235, 221));
        assert_eq!(scale.color_for(100.0), Color32::from_rgb(3, 5, 26));
    }

    #[test]
    fn test_higher_values_are_darker() {
        let scale = ColorScale::rocket_r(0.0, 105.6);
        let samples: Vec<u32> = [0.0, 20.0, 50.0, 80.0, 105.6]
            .iter()
            .map(|&v| brightness(scale.color_for(v)))
            .collect();
        assert!(samples.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let scale = ColorScale::rocket_r(10.0, 20.0);
        assert_eq!(scale.color_for(-5.0), scale.color_for(10.0));
        assert_eq!(scale.color_for(99.0), scale.color_for(20.0));
        assert_eq!(scale.normalize(15.0), 0.5);
    }

    #[test]
    fn test_degenerate_range() {
        let scale = ColorScale::rocket_r(3.0, 3.0);
        assert_eq!(scale.normalize(3.0), 0.0);
        assert_eq!(scale.color_for(3.0), Color32::from_rgb(250, 235, 221));
    }

    #[test]
    fn test_text_contrast() {
        let scale = ColorScale::rocket_r(0.0, 1.0);
        assert_eq!(scale.text_color_for(0.0), Color32::BLACK);
        assert_eq!(scale.text_color_for(1.0), Color32::WHITE);
    }

    #[test]
    fn test_legend_entries() {
        let scale = ColorScale::rocket_r(0.0, 10.0);
        let entries = scale.legend_entries(5);
        let values: Vec<f64> = entries.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(scale.legend_entries(0).is_empty());
        assert_eq!(scale.legend_entries(1).len(), 1);
    }
}
