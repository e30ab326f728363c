use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            to_color32(Hsl::new(hue, 0.75, 0.55).into_color())
        })
        .collect()
}

/// Colour of the `i`-th series in a chart with `n` series.
pub fn series_color(i: usize, n: usize) -> Color32 {
    generate_palette(n).get(i).copied().unwrap_or(Color32::GRAY)
}

// ---------------------------------------------------------------------------
// Diverging scale for heatmap cells
// ---------------------------------------------------------------------------

/// Map `value` within `[min, max]` onto a blue → red hue scale.
pub fn heat_color(value: f64, min: f64, max: f64) -> Color32 {
    if !value.is_finite() {
        return Color32::DARK_GRAY;
    }
    let range = max - min;
    let t = if range.abs() < f64::EPSILON {
        0.5
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    };
    let hue = 240.0 * (1.0 - t as f32);
    to_color32(Hsl::new(hue, 0.70, 0.50).into_color())
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
