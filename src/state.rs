use std::fmt;
use std::str::FromStr;

use crate::color::{Hsla, Rgba};
use crate::error::Error;

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// One of the three editable HSL components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];

    /// Upper end of the channel's range (hue is exclusive, the others inclusive).
    pub fn range_max(self) -> f64 {
        match self {
            Channel::Hue => 360.0,
            Channel::Saturation | Channel::Lightness => 100.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Hue",
            Channel::Saturation => "Saturation",
            Channel::Lightness => "Lightness",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Lightness => "L",
        }
    }

    /// Unit printed after a value readout.
    pub fn suffix(self) -> &'static str {
        match self {
            Channel::Hue => "\u{00b0}",
            Channel::Saturation | Channel::Lightness => "%",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Channel::Hue => 0,
            Channel::Saturation => 1,
            Channel::Lightness => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Channel::Hue => Channel::Saturation,
            Channel::Saturation => Channel::Lightness,
            Channel::Lightness => Channel::Hue,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Channel::Hue => Channel::Lightness,
            Channel::Saturation => Channel::Hue,
            Channel::Lightness => Channel::Saturation,
        }
    }

    /// Bring `value` into this channel's legal range by clamping.
    ///
    /// Hue is clamped into `[0, 360)`: anything at or above 360 lands on
    /// [`hue_ceiling`], so the far right of the hue strip stays a red just
    /// short of a full turn. Saturation and lightness clamp to `[0, 100]`.
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Channel::Hue => value.clamp(0.0, hue_ceiling()),
            Channel::Saturation | Channel::Lightness => value.clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hue" | "h" => Ok(Channel::Hue),
            "saturation" | "sat" | "s" => Ok(Channel::Saturation),
            "light" | "lightness" | "l" => Ok(Channel::Lightness),
            _ => Err(Error::InvalidChannel(s.to_string())),
        }
    }
}

/// Largest representable hue below 360.
pub fn hue_ceiling() -> f64 {
    f64::from_bits(360f64.to_bits() - 1)
}

// ---------------------------------------------------------------------------
// ColorState
// ---------------------------------------------------------------------------

/// The single source of truth for the picked color.
///
/// Values are always inside their ranges: every write goes through
/// [`Channel::normalize`]. Writes that change a value raise the dirty flag,
/// which the strip cache consumes with [`ColorState::take_dirty`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    hue: f64,
    saturation: f64,
    lightness: f64,
    dirty: bool,
}

impl ColorState {
    pub const DEFAULT_HUE: f64 = 40.0;
    pub const DEFAULT_SATURATION: f64 = 50.0;
    pub const DEFAULT_LIGHTNESS: f64 = 60.0;

    /// Create a state from raw values, normalizing each one. Non-finite
    /// values fall back to the defaults. A fresh state starts dirty so the
    /// first frame renders.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        let pick = |v: f64, default: f64| if v.is_finite() { v } else { default };
        Self {
            hue: Channel::Hue.normalize(pick(hue, Self::DEFAULT_HUE)),
            saturation: Channel::Saturation.normalize(pick(saturation, Self::DEFAULT_SATURATION)),
            lightness: Channel::Lightness.normalize(pick(lightness, Self::DEFAULT_LIGHTNESS)),
            dirty: true,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    /// Store `value` for `channel` after normalizing it.
    ///
    /// Returns whether the stored value changed. NaN and infinities cannot be
    /// placed in any range, so they leave the state untouched.
    pub fn set(&mut self, channel: Channel, value: f64) -> bool {
        if !value.is_finite() {
            log::debug!("ignoring non-finite {} value {}", channel, value);
            return false;
        }
        let value = channel.normalize(value);
        let slot = match channel {
            Channel::Hue => &mut self.hue,
            Channel::Saturation => &mut self.saturation,
            Channel::Lightness => &mut self.lightness,
        };
        if *slot == value {
            return false;
        }
        log::trace!("{} {} -> {}", channel, *slot, value);
        *slot = value;
        self.dirty = true;
        true
    }

    /// Add `delta` to a channel, clamping at the ends of its range.
    pub fn nudge(&mut self, channel: Channel, delta: f64) -> bool {
        let current = self.get(channel);
        self.set(channel, current + delta)
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// The committed color as an opaque `Hsla`.
    pub fn hsla(&self) -> Hsla {
        Hsla::opaque(self.hue, self.saturation, self.lightness)
    }

    /// The committed color with `channel` replaced by `value`.
    pub fn hsla_with(&self, channel: Channel, value: f64) -> Hsla {
        let mut c = self.hsla();
        match channel {
            Channel::Hue => c.h = value,
            Channel::Saturation => c.s = value,
            Channel::Lightness => c.l = value,
        }
        c
    }

    /// Recomputed on every call; never cached.
    pub fn rgba(&self) -> Rgba {
        self.hsla().to_rgba()
    }

    pub fn hex(&self) -> String {
        self.rgba().to_hex()
    }

    /// Whether a committed value changed since the flag was last taken.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return the dirty flag and clear it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_HUE,
            Self::DEFAULT_SATURATION,
            Self::DEFAULT_LIGHTNESS,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
