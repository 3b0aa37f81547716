use std::fmt;

// ---------------------------------------------------------------------------
// Hsla
// ---------------------------------------------------------------------------

/// A color in the HSL color space plus an alpha channel.
///
/// - `h`: hue in degrees, 0.0..360.0
/// - `s`: saturation as a percentage, 0.0..100.0
/// - `l`: lightness as a percentage, 0.0..100.0
/// - `a`: opacity, 0.0..1.0
///
/// This is what render surfaces receive for every fill and stroke. No range
/// checks happen here; the values come either from `ColorState` (already
/// normalized) or from the strip sampler, which only walks legal ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Opaque color.
    pub fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    pub fn to_rgba(self) -> Rgba {
        hsl_to_rgb(self.h, self.s, self.l, self.a)
    }

    /// CSS-style `hsl(h, s%, l%, a)` string with the numbers as stored.
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGB color with a fractional alpha.
///
/// Always derived from HSL, never stored as the source of truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`; alpha is not encoded.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Composite this color over an opaque `base` using this color's alpha.
    /// The result is opaque.
    pub fn blend_over(self, base: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f64 * a + bottom as f64 * (1.0 - a)).round() as u8
        };
        Rgba::new(
            mix(self.r, base.r),
            mix(self.g, base.g),
            mix(self.b, base.b),
            1.0,
        )
    }

    /// Convert to a `ratatui::style::Color`, dropping alpha.
    pub fn to_ratatui_color(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            truncate_decimals(self.a, 2)
        )
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Convert HSL (degrees, percent, percent) plus alpha to RGB.
///
/// Channels are scaled by 255 and rounded with `f64::round`. Every value
/// being rounded is non-negative, so this is round-half-up: a lightness of
/// 50% at zero saturation gives 127.5, which becomes 128.
///
/// Alpha is clamped to 0..1; a NaN alpha is treated as fully opaque.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Rgba {
    let (r, g, b) = hsl_to_unit_rgb(hue, saturation, lightness);

    let alpha = if alpha.is_nan() {
        1.0
    } else {
        alpha.clamp(0.0, 1.0)
    };

    Rgba::new(to_channel(r), to_channel(g), to_channel(b), alpha)
}

/// Red, green and blue in 0..1, before scaling to bytes.
fn hsl_to_unit_rgb(hue: f64, saturation: f64, lightness: f64) -> (f64, f64, f64) {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn to_channel(v: f64) -> u8 {
    // `as` saturates, so tiny float overshoot cannot wrap.
    (v * 255.0).round() as u8
}

/// Piecewise hue-to-channel helper for `hsl_to_rgb`.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Format channels as `#rrggbb` (lowercase, two digits each).
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// Cut `value` down to at most `digits` fractional digits without rounding.
///
/// Works on the shortest decimal text of the number, so `40.567` becomes
/// `40.56` at two digits, `40.001` becomes `40.00`, and integral values keep
/// all their integer digits with no decimal point (`360`, `100`, `40`).
pub fn truncate_decimals(value: f64, digits: usize) -> String {
    let text = value.to_string();
    let out = match text.split_once('.') {
        Some((int, _)) if digits == 0 => int.to_string(),
        Some((int, frac)) => {
            let keep = frac.len().min(digits);
            format!("{}.{}", int, &frac[..keep])
        }
        None => text,
    };
    if out == "-0" {
        "0".to_string()
    } else {
        out
    }
}

/// `hsl(h, s%, l%, a)` with every number truncated to two decimals.
pub fn format_hsl(h: f64, s: f64, l: f64, a: f64) -> String {
    format!(
        "hsl({}, {}%, {}%, {})",
        truncate_decimals(h, 2),
        truncate_decimals(s, 2),
        truncate_decimals(l, 2),
        truncate_decimals(a, 2)
    )
}

/// `rgb(r, g, b, a)`.
pub fn format_rgb(rgba: Rgba) -> String {
    rgba.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
