use crate::state::Channel;

/// What the pointer did over a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Hovering: preview only.
    Move,
    /// Commit the value under the pointer.
    Click,
    /// The pointer left the strip.
    Leave,
}

/// A pointer event already routed to a strip.
///
/// `offset` is the pointer position along the strip and `extent` the strip's
/// length, both in the strip's own pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub channel: Channel,
    pub kind: PointerKind,
    pub offset: f64,
    pub extent: f64,
}

impl PointerEvent {
    pub fn new(channel: Channel, kind: PointerKind, offset: f64, extent: f64) -> Self {
        Self {
            channel,
            kind,
            offset,
            extent,
        }
    }

    /// Channel value under the pointer, or `None` for a degenerate strip.
    pub fn value(&self) -> Option<f64> {
        normalize_offset(self.offset, self.extent, self.channel.range_max())
    }
}

/// Map a pixel offset to a channel value: `offset / extent * range_max`.
///
/// A zero, negative or non-finite extent yields `None` so that nothing
/// downstream ever sees a NaN.
pub fn normalize_offset(offset: f64, extent: f64, range_max: f64) -> Option<f64> {
    if !(extent.is_finite() && extent > 0.0 && offset.is_finite()) {
        return None;
    }
    Some(offset / extent * range_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_scale_to_channel_range() {
        assert_eq!(normalize_offset(50.0, 200.0, 360.0), Some(90.0));
        assert_eq!(normalize_offset(0.0, 200.0, 100.0), Some(0.0));
        assert_eq!(normalize_offset(200.0, 200.0, 100.0), Some(100.0));
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(normalize_offset(5.0, 0.0, 360.0), None);
        assert_eq!(normalize_offset(5.0, -1.0, 360.0), None);
        assert_eq!(normalize_offset(5.0, f64::NAN, 360.0), None);
        assert_eq!(normalize_offset(f64::INFINITY, 10.0, 360.0), None);
    }

    #[test]
    fn event_value_uses_its_channel() {
        let hue = PointerEvent::new(Channel::Hue, PointerKind::Click, 30.0, 60.0);
        assert_eq!(hue.value(), Some(180.0));
        let light = PointerEvent::new(Channel::Lightness, PointerKind::Move, 30.0, 60.0);
        assert_eq!(light.value(), Some(50.0));
    }
}
