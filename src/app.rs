use crate::gradient::{GradientRenderer, Strips};
use crate::input::{PointerEvent, PointerKind};
use crate::raster::Raster;
use crate::readout::Readouts;
use crate::state::{Channel, ColorState};

/// Keyboard nudge sizes.
pub const STEP: f64 = 1.0;
pub const BIG_STEP: f64 = 10.0;

/// Picker controller: committed state, hover previews and the strip cache.
///
/// Hovering only touches `preview`. Committing (click or keyboard) goes
/// through `ColorState::set`, and the strips are redrawn in full on the next
/// `sync_strips`.
pub struct App {
    pub state: ColorState,
    initial: ColorState,
    /// Hovered value per channel, indexed by `Channel::index`.
    pub preview: [Option<f64>; 3],
    pub renderer: GradientRenderer,
    pub strips: Strips<Raster>,
    /// Strip currently under the pointer.
    pub hovered: Option<Channel>,
    /// Channel adjusted by the keyboard.
    pub focus: Channel,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Number of full three-strip render passes so far.
    pub render_passes: u64,
}

impl App {
    pub fn new(state: ColorState, renderer: GradientRenderer) -> Self {
        Self {
            initial: state.clone(),
            state,
            preview: [None; 3],
            renderer,
            strips: Strips::default(),
            hovered: None,
            focus: Channel::Hue,
            show_help: false,
            status_message: None,
            should_quit: false,
            render_passes: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Pointer
    // -----------------------------------------------------------------------

    /// Apply one pointer event. Returns `true` when committed state changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let idx = event.channel.index();
        match event.kind {
            PointerKind::Leave => {
                self.preview[idx] = None;
                if self.hovered == Some(event.channel) {
                    self.hovered = None;
                }
                false
            }
            PointerKind::Move => {
                if let Some(value) = event.value() {
                    self.preview[idx] = Some(event.channel.normalize(value));
                    self.hovered = Some(event.channel);
                }
                false
            }
            PointerKind::Click => {
                let Some(value) = event.value() else {
                    log::debug!("ignoring click on degenerate {} strip", event.channel);
                    return false;
                };
                self.preview[idx] = None;
                self.hovered = Some(event.channel);
                self.focus = event.channel;
                let changed = self.state.set(event.channel, value);
                if changed {
                    log::info!("committed {} = {}", event.channel, self.state.get(event.channel));
                }
                changed
            }
        }
    }

    /// Route a pointer sample that may or may not be over a strip.
    ///
    /// Moving off a strip (onto another one or onto nothing) first sends a
    /// `Leave` for the strip that was hovered.
    ///
    /// While the help popup is open it covers the strips, so pointer events
    /// are dropped instead of previewing or committing hidden values.
    pub fn route_pointer(&mut self, event: Option<PointerEvent>) -> bool {
        if self.show_help {
            return false;
        }
        let target = event.map(|e| e.channel);
        if let Some(prev) = self.hovered {
            if target != Some(prev) {
                self.handle_pointer(PointerEvent::new(prev, PointerKind::Leave, 0.0, 0.0));
            }
        }
        match event {
            Some(e) => self.handle_pointer(e),
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Adjust the focused channel by `delta` and commit.
    pub fn nudge_focused(&mut self, delta: f64) -> bool {
        let channel = self.focus;
        self.preview[channel.index()] = None;
        self.state.nudge(channel, delta)
    }

    /// Return to the color the picker was started with.
    pub fn reset(&mut self) {
        for channel in Channel::ALL {
            self.state.set(channel, self.initial.get(channel));
        }
        self.preview = [None; 3];
        self.status_message = Some(format!("Reset to {}", self.state.hex()));
    }

    /// Open or close the help popup. Opening it drops any hover preview.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.preview = [None; 3];
            self.hovered = None;
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Bring the strip rasters up to date with state and the given sizes.
    ///
    /// Redraws all three strips when committed state changed or any strip was
    /// resized; otherwise does nothing. Returns whether a pass ran.
    pub fn sync_strips(&mut self, sizes: &Strips<(u16, u16)>) -> bool {
        let mut resized = false;
        for channel in Channel::ALL {
            let (w, h) = *sizes.get(channel);
            resized |= self.strips.get_mut(channel).resize(w, h);
        }
        if !(self.state.is_dirty() || resized) {
            return false;
        }
        self.state.take_dirty();
        let drawn = self.renderer.render_all(&self.state, &mut self.strips);
        self.render_passes += 1;
        log::trace!("render pass {} drew {} strips", self.render_passes, drawn);
        true
    }

    pub fn readouts(&self) -> Readouts {
        Readouts::compute(&self.state, &self.preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(ColorState::default(), GradientRenderer::new(1, 2.0))
    }

    fn sizes(w: u16) -> Strips<(u16, u16)> {
        Strips::new((w, 3), (w, 3), (w, 3))
    }

    #[test]
    fn hover_never_mutates_state() {
        let mut app = app();
        let before = app.state.clone();
        assert!(!app.handle_pointer(PointerEvent::new(
            Channel::Hue,
            PointerKind::Move,
            25.0,
            100.0
        )));
        assert_eq!(app.state, before);
        assert_eq!(app.preview[0], Some(90.0));
        assert_eq!(app.readouts().value(Channel::Hue).text, "90");
        assert_eq!(app.readouts().hex, "#ccaa66");
    }

    #[test]
    fn leave_restores_committed_text() {
        let mut app = app();
        app.handle_pointer(PointerEvent::new(Channel::Saturation, PointerKind::Move, 1.0, 4.0));
        assert_eq!(app.readouts().value(Channel::Saturation).text, "25");
        app.handle_pointer(PointerEvent::new(Channel::Saturation, PointerKind::Leave, 0.0, 0.0));
        assert_eq!(app.readouts().value(Channel::Saturation).text, "50");
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn click_commits_and_clears_preview() {
        let mut app = app();
        app.handle_pointer(PointerEvent::new(Channel::Lightness, PointerKind::Move, 1.0, 10.0));
        assert!(app.handle_pointer(PointerEvent::new(
            Channel::Lightness,
            PointerKind::Click,
            3.0,
            10.0
        )));
        assert_eq!(app.state.lightness(), 30.0);
        assert_eq!(app.preview[2], None);
        assert_eq!(app.focus, Channel::Lightness);
    }

    #[test]
    fn degenerate_strip_is_ignored() {
        let mut app = app();
        let before = app.state.clone();
        assert!(!app.handle_pointer(PointerEvent::new(Channel::Hue, PointerKind::Click, 3.0, 0.0)));
        app.handle_pointer(PointerEvent::new(Channel::Hue, PointerKind::Move, 3.0, 0.0));
        assert_eq!(app.state, before);
        assert_eq!(app.preview, [None; 3]);
    }

    #[test]
    fn hover_does_not_trigger_render_pass() {
        let mut app = app();
        assert!(app.state.is_dirty());
        assert!(app.sync_strips(&sizes(40)));
        assert_eq!(app.render_passes, 1);
        assert!(!app.state.is_dirty());

        for x in 0..40 {
            app.route_pointer(Some(PointerEvent::new(
                Channel::Hue,
                PointerKind::Move,
                x as f64,
                40.0,
            )));
            assert!(!app.sync_strips(&sizes(40)));
        }
        assert_eq!(app.render_passes, 1);

        app.route_pointer(Some(PointerEvent::new(Channel::Hue, PointerKind::Click, 20.0, 40.0)));
        assert!(app.state.is_dirty());
        assert!(app.sync_strips(&sizes(40)));
        assert_eq!(app.render_passes, 2);
        assert!(!app.state.is_dirty());
    }

    #[test]
    fn commit_redraws_every_strip() {
        let mut app = app();
        app.sync_strips(&sizes(20));
        let before = app.strips.clone();
        // Changing hue recolours the saturation and lightness strips too.
        app.handle_pointer(PointerEvent::new(Channel::Hue, PointerKind::Click, 12.0, 20.0));
        app.sync_strips(&sizes(20));
        assert_ne!(app.strips.hue, before.hue);
        assert_ne!(app.strips.saturation, before.saturation);
        assert_ne!(app.strips.lightness, before.lightness);
    }

    #[test]
    fn help_popup_blocks_pointer() {
        let mut app = app();
        app.route_pointer(Some(PointerEvent::new(Channel::Lightness, PointerKind::Move, 2.0, 10.0)));
        assert_eq!(app.preview[2], Some(20.0));

        app.toggle_help();
        assert_eq!(app.preview, [None; 3]);
        assert_eq!(app.hovered, None);

        let before = app.state.clone();
        assert!(!app.route_pointer(Some(PointerEvent::new(
            Channel::Lightness,
            PointerKind::Click,
            2.0,
            10.0
        ))));
        app.route_pointer(Some(PointerEvent::new(Channel::Hue, PointerKind::Move, 5.0, 10.0)));
        assert_eq!(app.state, before);
        assert_eq!(app.preview, [None; 3]);

        app.toggle_help();
        assert!(app.route_pointer(Some(PointerEvent::new(
            Channel::Lightness,
            PointerKind::Click,
            2.0,
            10.0
        ))));
        assert_eq!(app.state.lightness(), 20.0);
    }

    #[test]
    fn resize_triggers_render_pass() {
        let mut app = app();
        app.sync_strips(&sizes(20));
        assert!(app.sync_strips(&sizes(30)));
        assert_eq!(app.strips.hue.size(), (30, 3));
        assert!(!app.sync_strips(&sizes(30)));
    }

    #[test]
    fn moving_between_strips_sends_leave() {
        let mut app = app();
        app.route_pointer(Some(PointerEvent::new(Channel::Hue, PointerKind::Move, 5.0, 10.0)));
        assert_eq!(app.hovered, Some(Channel::Hue));
        app.route_pointer(Some(PointerEvent::new(Channel::Saturation, PointerKind::Move, 5.0, 10.0)));
        assert_eq!(app.preview[0], None);
        assert_eq!(app.preview[1], Some(50.0));
        app.route_pointer(None);
        assert_eq!(app.preview, [None; 3]);
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn keyboard_nudges_focused_channel() {
        let mut app = app();
        app.focus_next();
        assert_eq!(app.focus, Channel::Saturation);
        assert!(app.nudge_focused(BIG_STEP));
        assert_eq!(app.state.saturation(), 60.0);
        app.focus_prev();
        app.nudge_focused(-STEP);
        assert_eq!(app.state.hue(), 39.0);
    }

    #[test]
    fn reset_restores_initial_color() {
        let mut app = App::new(ColorState::new(10.0, 20.0, 30.0), GradientRenderer::default());
        app.state.set(Channel::Hue, 300.0);
        app.reset();
        assert_eq!(app.state.hue(), 10.0);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn text_and_indicator_thresholds_through_app() {
        // Lightness 47: dark text, light indicator.
        let mut app = App::new(ColorState::new(0.0, 50.0, 47.0), GradientRenderer::new(1, 2.0));
        app.sync_strips(&sizes(20));
        assert_eq!(app.readouts().tone, crate::gradient::TextTone::Dark);
        let cell = app.strips.lightness.cell(9, 0).unwrap();
        let (_, stroke) = cell.glyph.unwrap();
        // A near-white stroke blended at 75% is brighter than the strip.
        assert!(stroke.r > 190 && stroke.g > 190 && stroke.b > 190);
    }
}
