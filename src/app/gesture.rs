//! Press-and-hold recording gesture: hold to record, swipe up past the
//! threshold to lock, tap to stop once locked. Pure state; the UI layer
//! feeds it pointer events and renders `visuals()`.

/// Which input source initiated the press. Motion from the other source
/// is ignored for the rest of that press, so a stray mouse move cannot
/// corrupt a touch drag (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Recording while physically held. `drag_offset` is the upward drag
    /// distance, clamped to >= 0.
    Holding {
        source: PointerSource,
        origin_y: f64,
        drag_offset: f64,
    },
    /// Recording continues without a held pointer. Only `stop()` exits.
    Locked,
}

/// Visual-feedback snapshot for one frame of the record control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureVisuals {
    /// Opacity of the "Release to lock" affordance, 0..=1.
    pub lock_hint_opacity: f64,
    /// Upward translation of the control, in input units.
    pub lift: f64,
    /// Control scale factor.
    pub scale: f64,
    /// Whether the pulsing recording indicator is shown.
    pub pulsing: bool,
}

const HELD_SCALE: f64 = 1.1;

pub struct RecordGesture {
    phase: Phase,
    lock_threshold: f64,
}

impl RecordGesture {
    pub fn new(lock_threshold: f64) -> Self {
        Self {
            phase: Phase::Idle,
            lock_threshold,
        }
    }

    /// Press-start on the record control. Starts recording and anchors the
    /// drag origin. Ignored unless idle.
    pub fn press(&mut self, source: PointerSource, y: f64) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Holding {
                source,
                origin_y: y,
                drag_offset: 0.0,
            };
        }
    }

    /// Pointer move while held. Tracks the upward drag and locks once the
    /// drag exceeds the threshold (strictly: a drag of exactly the
    /// threshold does not lock). Returns true when this motion locked.
    pub fn motion(&mut self, source: PointerSource, y: f64) -> bool {
        let Phase::Holding {
            source: press_source,
            origin_y,
            ..
        } = self.phase
        else {
            return false;
        };
        if source != press_source {
            return false;
        }

        let delta = origin_y - y;
        if delta > self.lock_threshold {
            self.phase = Phase::Locked;
            return true;
        }
        self.phase = Phase::Holding {
            source: press_source,
            origin_y,
            drag_offset: delta.max(0.0),
        };
        false
    }

    /// Pointer release. An unlocked hold is discarded; a locked recording
    /// keeps going.
    pub fn release(&mut self) {
        if matches!(self.phase, Phase::Holding { .. }) {
            self.phase = Phase::Idle;
        }
    }

    /// Explicit stop (tap while locked). Returns true if it ended a locked
    /// recording.
    pub fn stop(&mut self) -> bool {
        if self.phase == Phase::Locked {
            self.phase = Phase::Idle;
            return true;
        }
        false
    }

    /// Force the gesture back to idle, whatever its phase. Used when the
    /// Home view is switched away mid-recording.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_recording(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    pub fn drag_offset(&self) -> f64 {
        match self.phase {
            Phase::Holding { drag_offset, .. } => drag_offset,
            _ => 0.0,
        }
    }

    pub fn visuals(&self) -> GestureVisuals {
        match self.phase {
            Phase::Idle => GestureVisuals {
                lock_hint_opacity: 0.0,
                lift: 0.0,
                scale: 1.0,
                pulsing: false,
            },
            Phase::Holding { drag_offset, .. } => GestureVisuals {
                lock_hint_opacity: (drag_offset / self.lock_threshold).min(1.0),
                lift: drag_offset,
                scale: HELD_SCALE,
                pulsing: true,
            },
            Phase::Locked => GestureVisuals {
                lock_hint_opacity: 0.0,
                lift: 0.0,
                scale: 1.0,
                pulsing: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held_gesture() -> RecordGesture {
        let mut gesture = RecordGesture::new(100.0);
        gesture.press(PointerSource::Touch, 500.0);
        gesture
    }

    #[test]
    fn press_starts_recording_unlocked() {
        let gesture = held_gesture();
        assert!(gesture.is_recording());
        assert!(!gesture.is_locked());
        assert_eq!(gesture.drag_offset(), 0.0);
    }

    #[test]
    fn press_while_recording_is_ignored() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 450.0);
        gesture.press(PointerSource::Touch, 300.0);
        assert_eq!(gesture.drag_offset(), 50.0);
    }

    #[test]
    fn drag_of_exactly_the_threshold_does_not_lock() {
        let mut gesture = held_gesture();
        assert!(!gesture.motion(PointerSource::Touch, 400.0));
        assert!(!gesture.is_locked());
        assert_eq!(gesture.drag_offset(), 100.0);
    }

    #[test]
    fn drag_past_the_threshold_locks() {
        let mut gesture = held_gesture();
        assert!(gesture.motion(PointerSource::Touch, 399.0));
        assert!(gesture.is_locked());
        assert!(gesture.is_recording());
    }

    #[test]
    fn downward_drag_clamps_offset_to_zero() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 620.0);
        assert_eq!(gesture.drag_offset(), 0.0);
    }

    #[test]
    fn release_before_lock_discards_the_recording() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 460.0);
        gesture.release();
        assert!(!gesture.is_recording());
        assert_eq!(gesture.drag_offset(), 0.0);
    }

    #[test]
    fn release_after_lock_keeps_recording() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 380.0);
        gesture.release();
        assert!(gesture.is_locked());
    }

    #[test]
    fn only_stop_exits_the_locked_state() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 380.0);
        gesture.release();
        assert!(gesture.stop());
        assert!(!gesture.is_recording());
    }

    #[test]
    fn stop_does_nothing_unless_locked() {
        let mut gesture = held_gesture();
        assert!(!gesture.stop());
        assert!(gesture.is_recording());
    }

    #[test]
    fn motion_from_the_other_source_is_ignored() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Mouse, 200.0);
        assert!(!gesture.is_locked());
        assert_eq!(gesture.drag_offset(), 0.0);
    }

    #[test]
    fn lock_hint_opacity_scales_with_drag() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 450.0);
        let visuals = gesture.visuals();
        assert_eq!(visuals.lock_hint_opacity, 0.5);
        assert_eq!(visuals.lift, 50.0);
        assert_eq!(visuals.scale, HELD_SCALE);
        assert!(visuals.pulsing);
    }

    #[test]
    fn lock_hint_opacity_caps_at_one() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 401.0);
        assert_eq!(gesture.visuals().lock_hint_opacity, 0.99);
        gesture.motion(PointerSource::Touch, 400.0);
        assert_eq!(gesture.visuals().lock_hint_opacity, 1.0);
    }

    #[test]
    fn locked_visuals_drop_the_drag_affordances() {
        let mut gesture = held_gesture();
        gesture.motion(PointerSource::Touch, 350.0);
        let visuals = gesture.visuals();
        assert_eq!(visuals.lock_hint_opacity, 0.0);
        assert_eq!(visuals.lift, 0.0);
        assert!(visuals.pulsing);
    }

    #[test]
    fn cancel_resets_any_phase() {
        let mut held = held_gesture();
        held.cancel();
        assert!(!held.is_recording());

        let mut locked = held_gesture();
        locked.motion(PointerSource::Touch, 350.0);
        locked.cancel();
        assert!(!locked.is_recording());
    }
}
