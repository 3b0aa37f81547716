use crate::color::Hsla;
use crate::state::{Channel, ColorState};

/// Indicator outline is dark above this lightness and light at or below it.
pub const INDICATOR_LIGHTNESS_THRESHOLD: f64 = 50.0;

/// Readout text turns light below this lightness. Deliberately not the same
/// value as the indicator threshold.
pub const TEXT_LIGHTNESS_THRESHOLD: f64 = 45.0;

/// Opacity of the indicator outline.
pub const INDICATOR_ALPHA: f64 = 0.75;

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A drawable target for one gradient strip.
///
/// Coordinates are in the surface's own pixels with the origin at the top
/// left. Rectangles may extend past the edges; implementations clip.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Hsla);
}

/// One surface per channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Strips<S> {
    pub hue: S,
    pub saturation: S,
    pub lightness: S,
}

impl<S> Strips<S> {
    pub fn new(hue: S, saturation: S, lightness: S) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn get(&self, channel: Channel) -> &S {
        match channel {
            Channel::Hue => &self.hue,
            Channel::Saturation => &self.saturation,
            Channel::Lightness => &self.lightness,
        }
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut S {
        match channel {
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Lightness => &mut self.lightness,
        }
    }
}

// ---------------------------------------------------------------------------
// Contrast
// ---------------------------------------------------------------------------

/// Outline color for the position indicator.
///
/// Depends on the committed lightness only, whichever strip is being drawn.
pub fn indicator_color(lightness: f64) -> Hsla {
    if lightness > INDICATOR_LIGHTNESS_THRESHOLD {
        Hsla::new(0.0, 0.0, 0.0, INDICATOR_ALPHA)
    } else {
        Hsla::new(0.0, 0.0, 100.0, INDICATOR_ALPHA)
    }
}

/// Foreground tone for text drawn on top of the current swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    pub fn hex(self) -> &'static str {
        match self {
            TextTone::Light => "#eee",
            TextTone::Dark => "#111",
        }
    }

    pub fn to_ratatui_color(self) -> ratatui::style::Color {
        match self {
            TextTone::Light => ratatui::style::Color::Rgb(0xee, 0xee, 0xee),
            TextTone::Dark => ratatui::style::Color::Rgb(0x11, 0x11, 0x11),
        }
    }
}

pub fn text_tone(lightness: f64) -> TextTone {
    if lightness < TEXT_LIGHTNESS_THRESHOLD {
        TextTone::Light
    } else {
        TextTone::Dark
    }
}

// ---------------------------------------------------------------------------
// GradientRenderer
// ---------------------------------------------------------------------------

/// Draws the three channel strips.
///
/// Each strip sweeps its own channel across the full width while the other
/// two channels stay at their committed values, then gets an outline at the
/// committed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientRenderer {
    /// Samples per channel unit: 10 gives 3600 slices for hue and 1000 for
    /// saturation and lightness.
    pub samples_per_unit: u32,
    /// Indicator outline width in surface pixels.
    pub indicator_width: f64,
}

impl Default for GradientRenderer {
    fn default() -> Self {
        Self {
            samples_per_unit: 10,
            indicator_width: 6.0,
        }
    }
}

impl GradientRenderer {
    pub fn new(samples_per_unit: u32, indicator_width: f64) -> Self {
        Self {
            samples_per_unit: samples_per_unit.max(1),
            indicator_width: if indicator_width.is_finite() {
                indicator_width.max(0.0)
            } else {
                0.0
            },
        }
    }

    /// Number of slices drawn for `channel`.
    pub fn sample_count(&self, channel: Channel) -> usize {
        channel.range_max() as usize * self.samples_per_unit.max(1) as usize
    }

    /// Redraw one strip. Returns `false` without touching the surface when
    /// its size is zero, negative or not a number.
    pub fn render_strip<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        channel: Channel,
        state: &ColorState,
    ) -> bool {
        let width = surface.width();
        let height = surface.height();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::debug!("skipping {} strip with size {}x{}", channel, width, height);
            return false;
        }

        let per_unit = self.samples_per_unit.max(1) as f64;
        let range = channel.range_max();
        let count = self.sample_count(channel);
        let slice = width / count as f64;

        for i in 0..count {
            let value = i as f64 / per_unit;
            let x = i as f64 * width / (per_unit * range);
            surface.fill_rect(x, 0.0, slice, height, state.hsla_with(channel, value));
        }

        let offset = state.get(channel) / range * width;
        surface.stroke_rect(
            offset - self.indicator_width / 2.0,
            0.0,
            self.indicator_width,
            height,
            indicator_color(state.lightness()),
        );
        true
    }

    /// Redraw all three strips. Returns how many were actually drawn.
    pub fn render_all<S: Surface>(&self, state: &ColorState, strips: &mut Strips<S>) -> usize {
        Channel::ALL
            .iter()
            .filter(|&&channel| self.render_strip(strips.get_mut(channel), channel, state))
            .count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
