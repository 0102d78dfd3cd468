//! Draggable bottom sheet with three rest positions.
//!
//! The sheet is a plain state machine: input events (show, drag, release,
//! backdrop tap, back press) produce [`Transition`]s, and the renderer reports
//! completion through [`BottomSheet::finish_animation`]. Offsets are measured
//! downward from the top of the screen, so `0` is fully open and
//! `sheet_height` is off-screen.

mod dialog;

use std::time::Duration;

pub use dialog::ConfirmationDialog;

/// Drags shorter than this are treated as taps.
pub const MOVE_THRESHOLD: f64 = 5.0;
/// Release velocity (units per ms) that counts as a fling.
pub const FLING_VELOCITY: f64 = 0.6;
pub const DEFAULT_OPEN_HEIGHT: f64 = 0.5;
pub const SPRING_FRICTION: f64 = 8.0;
pub const HIDE_DURATION: Duration = Duration::from_millis(250);
const SPRING_SETTLE: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPoint {
    FullyOpen,
    HalfOpen,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPoints {
    pub full: f64,
    pub half: f64,
    pub closed: f64,
}

impl SnapPoints {
    pub fn new(sheet_height: f64, open_height: f64) -> Self {
        let open_height = open_height.clamp(0.0, 1.0);
        Self {
            full: 0.0,
            half: sheet_height * (1.0 - open_height),
            closed: sheet_height,
        }
    }

    pub const fn offset(&self, point: SnapPoint) -> f64 {
        match point {
            SnapPoint::FullyOpen => self.full,
            SnapPoint::HalfOpen => self.half,
            SnapPoint::Closed => self.closed,
        }
    }

    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(self.full, self.closed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    pub screen_height: f64,
    /// Fraction of the screen the half-open sheet covers.
    pub open_height: f64,
    /// No drag handle and no gesture tracking.
    pub disabled: bool,
}

impl SheetConfig {
    pub const fn new(screen_height: f64) -> Self {
        Self {
            screen_height,
            open_height: DEFAULT_OPEN_HEIGHT,
            disabled: false,
        }
    }

    #[must_use]
    pub const fn open_height(mut self, open_height: f64) -> Self {
        self.open_height = open_height;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Closed,
    /// Finger down and tracking; no snapping happens here.
    Dragging,
    AnimatingTo(SnapPoint),
    Resting(SnapPoint),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Spring { friction: f64 },
    Timing { duration: Duration },
}

impl Curve {
    pub const fn duration(self) -> Duration {
        match self {
            Self::Spring { .. } => SPRING_SETTLE,
            Self::Timing { duration } => duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub target: SnapPoint,
    pub curve: Curve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    /// Closing animation finished; the owner's close callback runs now.
    Dismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BottomSheet {
    config: SheetConfig,
    snap: SnapPoints,
    offset: f64,
    resting: SnapPoint,
    state: SheetState,
    transition: Option<Transition>,
    dismiss_pending: bool,
}

impl BottomSheet {
    pub fn new(config: SheetConfig) -> Self {
        let snap = SnapPoints::new(config.screen_height, config.open_height);
        Self {
            config,
            snap,
            offset: snap.closed,
            resting: SnapPoint::Closed,
            state: SheetState::Closed,
            transition: None,
            dismiss_pending: false,
        }
    }

    pub const fn config(&self) -> SheetConfig {
        self.config
    }

    pub const fn snap_points(&self) -> SnapPoints {
        self.snap
    }

    pub const fn offset(&self) -> f64 {
        self.offset
    }

    pub const fn state(&self) -> SheetState {
        self.state
    }

    pub const fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub const fn has_handle(&self) -> bool {
        !self.config.disabled
    }

    pub fn is_closed(&self) -> bool {
        self.state == SheetState::Closed
    }

    /// Open to the half position.
    pub fn show(&mut self) -> Option<Transition> {
        if self.dismiss_pending {
            return None;
        }
        Some(self.spring_to(SnapPoint::HalfOpen))
    }

    /// Animate closed; the sheet reports [`SheetEvent::Dismissed`] when done.
    ///
    /// Repeated calls during the closing animation are ignored so the close
    /// callback fires once.
    pub fn hide(&mut self) -> Option<Transition> {
        if self.dismiss_pending {
            return None;
        }
        self.dismiss_pending = true;
        Some(self.start(
            SnapPoint::Closed,
            Curve::Timing {
                duration: HIDE_DURATION,
            },
        ))
    }

    pub fn backdrop_tap(&mut self) -> Option<Transition> {
        if self.is_closed() {
            return None;
        }
        self.hide()
    }

    /// Returns whether the back action was consumed.
    pub fn back_pressed(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.hide();
        true
    }

    /// Track a drag `dy` units from where the gesture started.
    ///
    /// Returns whether the sheet is following the finger.
    pub fn drag_move(&mut self, dy: f64) -> bool {
        if self.config.disabled || self.dismiss_pending || self.is_closed() {
            return false;
        }
        if self.state != SheetState::Dragging {
            if dy.abs() <= MOVE_THRESHOLD {
                return false;
            }
            // A drag that interrupts an animation is anchored at its destination.
            if let Some(transition) = self.transition {
                self.resting = transition.target;
            }
        }

        self.state = SheetState::Dragging;
        self.transition = None;
        self.offset = self.snap.clamp(self.snap.offset(self.resting) + dy);
        true
    }

    /// Finish a drag with total displacement `dy` and velocity `vy`.
    pub fn drag_end(&mut self, dy: f64, vy: f64) -> Option<Transition> {
        if self.state != SheetState::Dragging {
            return None;
        }

        let threshold = self.config.screen_height / 6.0;
        let drag_down = dy > threshold || vy > FLING_VELOCITY;
        let drag_up = dy < -threshold || vy < -FLING_VELOCITY;

        if drag_down {
            if self.resting == SnapPoint::FullyOpen {
                Some(self.spring_to(SnapPoint::HalfOpen))
            } else {
                self.hide()
            }
        } else if drag_up {
            Some(self.spring_to(SnapPoint::FullyOpen))
        } else if self.resting == SnapPoint::Closed {
            self.hide()
        } else {
            Some(self.spring_to(self.resting))
        }
    }

    /// Complete the running transition immediately.
    pub fn finish_animation(&mut self) -> Option<SheetEvent> {
        let transition = self.transition.take()?;
        self.offset = transition.to;
        self.resting = transition.target;

        if transition.target == SnapPoint::Closed {
            self.state = SheetState::Closed;
            if self.dismiss_pending {
                self.dismiss_pending = false;
                return Some(SheetEvent::Dismissed);
            }
            None
        } else {
            self.state = SheetState::Resting(transition.target);
            None
        }
    }

    fn spring_to(&mut self, target: SnapPoint) -> Transition {
        self.start(
            target,
            Curve::Spring {
                friction: SPRING_FRICTION,
            },
        )
    }

    fn start(&mut self, target: SnapPoint, curve: Curve) -> Transition {
        let transition = Transition {
            from: self.offset,
            to: self.snap.offset(target),
            target,
            curve,
        };
        self.state = SheetState::AnimatingTo(target);
        self.transition = Some(transition);
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 800.0;

    fn open_sheet() -> BottomSheet {
        let mut sheet = BottomSheet::new(SheetConfig::new(H));
        sheet.show();
        assert_eq!(sheet.finish_animation(), None);
        sheet
    }

    #[test]
    fn snap_points_follow_open_height() {
        let half = SnapPoints::new(H, 0.5);
        assert!((half.half - H * 0.5).abs() < f64::EPSILON);

        let dialog = SnapPoints::new(H, 0.35);
        assert!((dialog.half - H * 0.65).abs() < 1e-9);
        assert!((dialog.full).abs() < f64::EPSILON);
        assert!((dialog.closed - H).abs() < f64::EPSILON);
    }

    #[test]
    fn starts_closed_and_shows_half_open() {
        let mut sheet = BottomSheet::new(SheetConfig::new(H));
        assert_eq!(sheet.state(), SheetState::Closed);
        assert!((sheet.offset() - H).abs() < f64::EPSILON);

        let transition = sheet.show().unwrap();
        assert_eq!(transition.target, SnapPoint::HalfOpen);
        assert_eq!(sheet.state(), SheetState::AnimatingTo(SnapPoint::HalfOpen));

        sheet.finish_animation();
        assert_eq!(sheet.state(), SheetState::Resting(SnapPoint::HalfOpen));
        assert!((sheet.offset() - H / 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn small_moves_do_not_start_a_drag() {
        let mut sheet = open_sheet();
        assert!(!sheet.drag_move(4.0));
        assert!(!sheet.drag_move(-5.0));
        assert_eq!(sheet.state(), SheetState::Resting(SnapPoint::HalfOpen));
    }

    #[test]
    fn drag_tracks_finger_and_clamps() {
        let mut sheet = open_sheet();
        assert!(sheet.drag_move(50.0));
        assert!((sheet.offset() - 450.0).abs() < f64::EPSILON);

        sheet.drag_move(-10_000.0);
        assert!((sheet.offset()).abs() < f64::EPSILON);

        sheet.drag_move(10_000.0);
        assert!((sheet.offset() - H).abs() < f64::EPSILON);
        assert_eq!(sheet.state(), SheetState::Dragging);
    }

    #[test]
    fn drag_up_opens_fully() {
        let mut sheet = open_sheet();
        sheet.drag_move(-200.0);
        let transition = sheet.drag_end(-200.0, 0.0).unwrap();
        assert_eq!(transition.target, SnapPoint::FullyOpen);
        sheet.finish_animation();
        assert_eq!(sheet.state(), SheetState::Resting(SnapPoint::FullyOpen));
    }

    #[test]
    fn drag_down_from_full_goes_half() {
        let mut sheet = open_sheet();
        sheet.drag_move(-200.0);
        sheet.drag_end(-200.0, 0.0);
        sheet.finish_animation();

        sheet.drag_move(20.0);
        let transition = sheet.drag_end(20.0, 0.9).unwrap();
        assert_eq!(transition.target, SnapPoint::HalfOpen);
        assert_eq!(sheet.finish_animation(), None);
    }

    #[test]
    fn drag_down_from_half_dismisses_once() {
        let mut sheet = open_sheet();
        sheet.drag_move(H / 6.0 + 1.0);
        let transition = sheet.drag_end(H / 6.0 + 1.0, 0.0).unwrap();
        assert_eq!(transition.target, SnapPoint::Closed);
        assert_eq!(
            transition.curve,
            Curve::Timing {
                duration: HIDE_DURATION
            }
        );

        assert!(sheet.backdrop_tap().is_none());
        assert!(sheet.hide().is_none());
        assert_eq!(sheet.finish_animation(), Some(SheetEvent::Dismissed));
        assert_eq!(sheet.finish_animation(), None);
        assert!(sheet.is_closed());
    }

    #[test]
    fn short_slow_release_snaps_back() {
        let mut sheet = open_sheet();
        sheet.drag_move(60.0);
        let transition = sheet.drag_end(60.0, 0.1).unwrap();
        assert_eq!(transition.target, SnapPoint::HalfOpen);
        assert!((transition.from - 460.0).abs() < f64::EPSILON);
        sheet.finish_animation();
        assert!((sheet.offset() - H / 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn release_during_opening_settles_open() {
        let mut sheet = BottomSheet::new(SheetConfig::new(H));
        sheet.show();
        assert!(sheet.drag_move(20.0));
        let transition = sheet.drag_end(20.0, 0.1).unwrap();
        assert_eq!(transition.target, SnapPoint::HalfOpen);
        assert_eq!(sheet.finish_animation(), None);
        assert_eq!(sheet.state(), SheetState::Resting(SnapPoint::HalfOpen));

        assert!(sheet.back_pressed());
        assert_eq!(sheet.finish_animation(), Some(SheetEvent::Dismissed));
    }

    #[test]
    fn fling_during_opening_dismisses_once() {
        let mut sheet = BottomSheet::new(SheetConfig::new(H));
        sheet.show();
        sheet.drag_move(30.0);
        let transition = sheet.drag_end(30.0, 1.2).unwrap();
        assert_eq!(transition.target, SnapPoint::Closed);
        assert_eq!(sheet.finish_animation(), Some(SheetEvent::Dismissed));
        assert!(sheet.is_closed());
    }

    #[test]
    fn back_press_only_intercepted_while_open() {
        let mut closed = BottomSheet::new(SheetConfig::new(H));
        assert!(!closed.back_pressed());

        let mut sheet = open_sheet();
        assert!(sheet.back_pressed());
        assert_eq!(sheet.finish_animation(), Some(SheetEvent::Dismissed));
        assert!(!sheet.back_pressed());
    }

    #[test]
    fn backdrop_tap_dismisses() {
        let mut sheet = open_sheet();
        assert!(sheet.backdrop_tap().is_some());
        assert_eq!(sheet.finish_animation(), Some(SheetEvent::Dismissed));
    }

    #[test]
    fn disabled_sheet_ignores_drags() {
        let mut sheet = BottomSheet::new(SheetConfig::new(H).disabled(true).open_height(0.35));
        sheet.show();
        sheet.finish_animation();

        assert!(!sheet.has_handle());
        assert!(!sheet.drag_move(300.0));
        assert!(sheet.drag_end(300.0, 2.0).is_none());
        assert_eq!(sheet.state(), SheetState::Resting(SnapPoint::HalfOpen));
        assert!(sheet.back_pressed());
    }

    #[test]
    fn any_release_sequence_settles_on_a_snap_point() {
        let mut seed: u64 = 0x5eed;
        let mut next = move || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (seed >> 33) as f64 / f64::from(1u32 << 31)
        };

        for _ in 0..200 {
            let mut sheet = open_sheet();
            for _ in 0..12 {
                if sheet.is_closed() {
                    sheet.show();
                    sheet.finish_animation();
                }
                let dy = (next() - 0.5) * H;
                let vy = (next() - 0.5) * 2.0;
                sheet.drag_move(dy);
                sheet.drag_end(dy, vy);
                sheet.finish_animation();

                let snap = sheet.snap_points();
                let offset = sheet.offset();
                assert!(
                    [snap.full, snap.half, snap.closed]
                        .iter()
                        .any(|point| (point - offset).abs() < f64::EPSILON),
                    "offset {offset} is not a snap point"
                );
            }
        }
    }
}
