use crate::color::{format_hsl, format_rgb, hsl_to_rgb, truncate_decimals};
use crate::error::{Error, Result};
use crate::gradient::{text_tone, TextTone};
use crate::state::{Channel, ColorState};

/// Fractional digits shown in every numeric readout.
pub const READOUT_DIGITS: usize = 2;

/// Text for one channel's numeric readout.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueReadout {
    pub channel: Channel,
    pub text: String,
    /// The text shows a hovered value rather than the committed one.
    pub previewing: bool,
    pub tone: TextTone,
}

/// Everything the text side of the picker displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    /// Swatch background as a CSS-style color string.
    pub swatch_css: String,
    /// Tone for text drawn on the swatch.
    pub tone: TextTone,
    pub values: [ValueReadout; 3],
}

impl Readouts {
    /// Build readouts from the committed state and the hover previews.
    ///
    /// The hex/rgb/hsl strings and the swatch describe committed state only.
    /// Value readouts show a preview when one is active. The lightness
    /// readout's tone follows the value it displays, the hue and saturation
    /// readouts follow committed lightness.
    pub fn compute(state: &ColorState, preview: &[Option<f64>; 3]) -> Self {
        let hsla = state.hsla();
        let rgba = state.rgba();
        let committed_tone = text_tone(state.lightness());

        let values = Channel::ALL.map(|channel| {
            let shown = preview[channel.index()];
            let value = shown.unwrap_or_else(|| state.get(channel));
            let tone = match channel {
                Channel::Lightness => text_tone(value),
                Channel::Hue | Channel::Saturation => committed_tone,
            };
            ValueReadout {
                channel,
                text: truncate_decimals(value, READOUT_DIGITS),
                previewing: shown.is_some(),
                tone,
            }
        });

        Self {
            hex: rgba.to_hex(),
            rgb: format_rgb(rgba),
            hsl: format_hsl(hsla.h, hsla.s, hsla.l, hsla.a),
            swatch_css: hsla.to_css(),
            tone: committed_tone,
            values,
        }
    }

    pub fn value(&self, channel: Channel) -> &ValueReadout {
        &self.values[channel.index()]
    }
}

/// One-shot conversion: `[hex, rgb, hsl]` display strings for a color.
///
/// Channels are clamped the same way the picker clamps input, so
/// `convert(400.0, 120.0, 50.0, 1.0)` describes the reddest hue just short
/// of 360 at full saturation.
pub fn convert(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<[String; 3]> {
    for (field, value) in [
        ("hue", hue),
        ("saturation", saturation),
        ("lightness", lightness),
        ("alpha", alpha),
    ] {
        if !value.is_finite() {
            return Err(Error::InvalidValue {
                field,
                value: value.to_string(),
            });
        }
    }

    let state = ColorState::new(hue, saturation, lightness);
    let (h, s, l) = (state.hue(), state.saturation(), state.lightness());
    let rgba = hsl_to_rgb(h, s, l, alpha);
    Ok([rgba.to_hex(), format_rgb(rgba), format_hsl(h, s, l, rgba.a)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_readouts() {
        let r = Readouts::compute(&ColorState::default(), &[None; 3]);
        assert_eq!(r.hex, "#ccaa66");
        assert_eq!(r.rgb, "rgb(204, 170, 102, 1)");
        assert_eq!(r.hsl, "hsl(40, 50%, 60%, 1)");
        assert_eq!(r.swatch_css, "hsl(40, 50%, 60%, 1)");
        assert_eq!(r.tone, TextTone::Dark);
        assert_eq!(r.value(Channel::Hue).text, "40");
        assert!(!r.value(Channel::Hue).previewing);
    }

    #[test]
    fn values_are_truncated() {
        let state = ColorState::new(123.456789, 33.999, 12.345);
        let r = Readouts::compute(&state, &[None; 3]);
        assert_eq!(r.value(Channel::Hue).text, "123.45");
        assert_eq!(r.value(Channel::Saturation).text, "33.99");
        assert_eq!(r.value(Channel::Lightness).text, "12.34");
        assert_eq!(r.hsl, "hsl(123.45, 33.99%, 12.34%, 1)");
        // The swatch string is not truncated.
        assert_eq!(r.swatch_css, "hsl(123.456789, 33.999%, 12.345%, 1)");
    }

    #[test]
    fn preview_changes_value_text_only() {
        let state = ColorState::default();
        let preview = [Some(271.5), None, None];
        let r = Readouts::compute(&state, &preview);
        assert_eq!(r.value(Channel::Hue).text, "271.5");
        assert!(r.value(Channel::Hue).previewing);
        assert_eq!(r.hex, "#ccaa66");
        assert_eq!(r.hsl, "hsl(40, 50%, 60%, 1)");
    }

    #[test]
    fn lightness_preview_retones_its_own_readout() {
        let state = ColorState::default();
        let r = Readouts::compute(&state, &[None, None, Some(20.0)]);
        assert_eq!(r.value(Channel::Lightness).tone, TextTone::Light);
        assert_eq!(r.value(Channel::Hue).tone, TextTone::Dark);
        assert_eq!(r.value(Channel::Saturation).tone, TextTone::Dark);
        assert_eq!(r.tone, TextTone::Dark);
    }

    #[test]
    fn convert_known_colors() {
        assert_eq!(
            convert(0.0, 100.0, 50.0, 1.0).unwrap(),
            [
                "#ff0000".to_string(),
                "rgb(255, 0, 0, 1)".to_string(),
                "hsl(0, 100%, 50%, 1)".to_string()
            ]
        );
        let [hex, rgb, hsl] = convert(400.0, 150.0, 50.0, 3.0).unwrap();
        assert_eq!(hex, "#ff0000");
        assert_eq!(rgb, "rgb(255, 0, 0, 1)");
        assert_eq!(hsl, "hsl(359.99, 100%, 50%, 1)");

        let [hex, _, hsl] = convert(-30.0, 100.0, 50.0, 1.0).unwrap();
        assert_eq!(hex, "#ff0000");
        assert_eq!(hsl, "hsl(0, 100%, 50%, 1)");
    }

    #[test]
    fn convert_rejects_non_finite() {
        assert!(matches!(
            convert(f64::NAN, 0.0, 0.0, 1.0),
            Err(Error::InvalidValue { field: "hue", .. })
        ));
        assert!(convert(0.0, 0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn committed_dark_color_uses_light_text() {
        let state = ColorState::new(220.0, 40.0, 30.0);
        let r = Readouts::compute(&state, &[None; 3]);
        assert_eq!(r.tone, TextTone::Light);
        for v in &r.values {
            assert_eq!(v.tone, TextTone::Light);
        }
    }
}
