//! Frame-driven angle animation.
//!
//! The driver never owns a timer. It asks a [`FrameScheduler`] for "the next
//! frame" and is ticked from outside when that frame arrives, so the whole
//! state machine can be stepped by hand in tests.

/// Angle at which the accumulator resets to zero.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Something that can deliver one callback on the next display refresh.
pub trait FrameScheduler {
    /// Register for exactly one upcoming frame.
    fn request_frame(&mut self);
    /// Drop the pending registration, if any.
    fn cancel_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub running: bool,
    /// Degrees; independent of the angle the user last set by hand.
    pub angle: f64,
    /// Degrees added per tick.
    pub speed: f64,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self { running: false, angle: 0.0, speed: 1.0 }
    }
}

impl AnimationState {
    /// Advance by one tick. Any angle at or past a full turn resets to
    /// exactly zero, so a speed above 360 still wraps only once.
    pub fn advance(&mut self) -> f64 {
        self.angle += self.speed;
        if self.angle >= FULL_TURN_DEGREES {
            self.angle = 0.0;
        }
        self.angle
    }
}

/// Two-state (stopped/running) animation machine on top of a scheduler.
pub struct AnimationDriver<S: FrameScheduler> {
    state: AnimationState,
    scheduler: S,
}

impl<S: FrameScheduler> AnimationDriver<S> {
    pub fn new(scheduler: S, speed: f64) -> Self {
        Self {
            state: AnimationState { speed, ..AnimationState::default() },
            scheduler,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = speed;
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[cfg(test)]
    pub fn set_angle(&mut self, angle: f64) {
        self.state.angle = angle;
    }

    /// Flip between stopped and running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.state.running {
            self.stop();
        } else {
            self.start();
        }
        self.state.running
    }

    /// Start ticking. Coming from stopped, the first tick runs right away and
    /// its angle is returned. Restarting while running replaces the pending
    /// frame rather than adding a second tick stream, and returns `None`.
    pub fn start(&mut self) -> Option<f64> {
        let first = if self.state.running {
            self.scheduler.cancel_frame();
            None
        } else {
            self.state.running = true;
            Some(self.state.advance())
        };
        self.scheduler.request_frame();
        first
    }

    /// Stop ticking. The accumulator keeps its value.
    pub fn stop(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        self.scheduler.cancel_frame();
    }

    /// Called when a requested frame arrives. Returns the new angle, or
    /// `None` for a stale frame delivered after [`stop`](Self::stop).
    pub fn tick(&mut self) -> Option<f64> {
        if !self.state.running {
            return None;
        }
        let angle = self.state.advance();
        self.scheduler.request_frame();
        Some(angle)
    }
}

/// Scheduler stepped by hand. `fire` consumes one pending frame.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: usize,
    /// Highest number of simultaneously pending frames ever observed.
    pub peak_pending: usize,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn fire(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

#[cfg(test)]
impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.peak_pending = self.peak_pending.max(self.pending);
    }

    fn cancel_frame(&mut self) {
        self.pending = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> AnimationDriver<ManualScheduler> {
        AnimationDriver::new(ManualScheduler::default(), 1.0)
    }

    /// Deliver one frame if one is pending.
    fn step(driver: &mut AnimationDriver<ManualScheduler>) -> Option<f64> {
        if driver.scheduler_mut().fire() { driver.tick() } else { None }
    }

    #[test]
    fn initial_state() {
        let d = driver();
        assert_eq!(d.state(), AnimationState { running: false, angle: 0.0, speed: 1.0 });
    }

    #[test]
    fn ticks_advance_by_speed() {
        let mut d = driver();
        d.set_speed(2.5);
        assert!(d.toggle());
        assert_eq!(d.state().angle, 2.5);
        assert_eq!(step(&mut d), Some(5.0));
        assert_eq!(step(&mut d), Some(7.5));
        assert_eq!(d.scheduler_mut().pending(), 1);
    }

    #[test]
    fn wraps_to_zero_not_modulo() {
        let mut d = driver();
        d.set_angle(359.0);
        d.set_speed(2.0);
        assert_eq!(d.start(), Some(0.0));
        assert_eq!(step(&mut d), Some(2.0));

        let mut fast = driver();
        fast.set_speed(725.0);
        assert_eq!(fast.start(), Some(0.0));
        assert_eq!(step(&mut fast), Some(0.0));
    }

    #[test]
    fn exactly_full_turn_wraps() {
        let mut state = AnimationState { running: true, angle: 359.0, speed: 1.0 };
        assert_eq!(state.advance(), 0.0);
        assert_eq!(state.advance(), 1.0);
    }

    #[test]
    fn negative_speed_is_accepted() {
        let mut d = driver();
        d.set_speed(-1.5);
        assert_eq!(d.start(), Some(-1.5));
        assert_eq!(step(&mut d), Some(-3.0));
    }

    #[test]
    fn stop_keeps_accumulator_and_silences_ticks() {
        let mut d = driver();
        d.start();
        step(&mut d);
        step(&mut d);
        assert!(!d.toggle());
        assert_eq!(d.state().angle, 3.0);
        assert_eq!(d.scheduler_mut().pending(), 0);
        // A frame that was already in flight when stop ran is ignored.
        assert_eq!(d.tick(), None);
        assert_eq!(d.state().angle, 3.0);
        assert_eq!(d.scheduler_mut().pending(), 0);
    }

    #[test]
    fn rapid_toggling_leaves_nothing_pending() {
        let mut d = driver();
        d.toggle();
        d.toggle();
        d.toggle();
        d.toggle();
        assert!(!d.is_running());
        // Each start ticks once immediately.
        assert_eq!(d.state().angle, 2.0);
        assert_eq!(d.scheduler_mut().pending(), 0);
        assert_eq!(step(&mut d), None);
    }

    #[test]
    fn double_stop_is_noop() {
        let mut d = driver();
        d.start();
        d.stop();
        d.stop();
        assert!(!d.is_running());
        assert_eq!(d.scheduler_mut().pending(), 0);
    }

    #[test]
    fn restart_does_not_double_schedule() {
        let mut d = driver();
        assert_eq!(d.start(), Some(1.0));
        assert_eq!(d.start(), None);
        assert_eq!(d.state().angle, 1.0);
        step(&mut d);
        d.start();
        assert_eq!(d.scheduler_mut().pending(), 1);
        assert_eq!(d.scheduler_mut().peak_pending, 1);
    }

    #[test]
    fn resume_continues_from_accumulator() {
        let mut d = driver();
        d.set_speed(10.0);
        d.start();
        step(&mut d);
        d.stop();
        assert_eq!(d.start(), Some(30.0));
        assert_eq!(step(&mut d), Some(40.0));
    }
}
