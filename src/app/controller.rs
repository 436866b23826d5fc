//! The single owner of rotation and animation state.
//!
//! UI events and animation frames both land here; every change is pushed to
//! a [`RotationDisplay`] so the state itself never touches the DOM or GL.

use super::animation::{AnimationDriver, FrameScheduler};
use super::model::{RotationFrame, RotationModel};
use super::preset::Preset;
use super::rotation::AxisVector;

/// Receiver of state changes. Implemented by the browser front end and by a
/// recording stub in tests.
pub trait RotationDisplay {
    /// Called after every recomputation with the new orientation.
    fn show_rotation(&mut self, frame: &RotationFrame);
    /// Rewrite the axis input fields (normalize and presets only).
    fn show_axis(&mut self, axis: AxisVector);
    /// Rewrite the angle control.
    fn show_angle(&mut self, degrees: f64);
    fn show_animation(&mut self, running: bool);
    fn show_speed(&mut self, speed: f64);
}

pub struct Visualizer<D: RotationDisplay, S: FrameScheduler> {
    model: RotationModel,
    animation: AnimationDriver<S>,
    display: D,
}

impl<D: RotationDisplay, S: FrameScheduler> Visualizer<D, S> {
    pub fn new(display: D, scheduler: S, speed: f64) -> Self {
        Self {
            model: RotationModel::default(),
            animation: AnimationDriver::new(scheduler, speed),
            display,
        }
    }

    pub fn model(&self) -> &RotationModel {
        &self.model
    }

    pub fn animation(&self) -> &AnimationDriver<S> {
        &self.animation
    }

    #[cfg(test)]
    pub fn animation_mut(&mut self) -> &mut AnimationDriver<S> {
        &mut self.animation
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Push the whole current state to the display.
    pub fn refresh(&mut self) {
        self.display.show_axis(self.model.axis());
        self.display.show_angle(self.model.angle_degrees());
        self.display.show_animation(self.animation.is_running());
        self.display.show_speed(self.animation.speed());
        self.present();
    }

    pub fn set_axis(&mut self, x: f64, y: f64, z: f64) {
        self.model.set_axis(x, y, z);
        log::debug!("axis set to ({}, {}, {})", x, y, z);
        self.present();
    }

    pub fn normalize_axis(&mut self) {
        if !self.model.normalize_axis() {
            log::debug!("normalize ignored for zero-length axis");
            return;
        }
        self.display.show_axis(self.model.axis());
        self.present();
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.model.set_angle(degrees);
        self.display.show_angle(degrees);
        self.present();
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        let params = preset.params();
        self.model.set_params(params);
        log::info!("applied preset {}", preset);
        self.display.show_axis(params.axis);
        self.display.show_angle(params.angle_degrees);
        self.present();
    }

    /// Starting ticks once immediately, so the angle moves by one step even
    /// if the animation is stopped again before the next frame.
    pub fn toggle_animation(&mut self) {
        let running = self.animation.toggle();
        log::info!("animation {}", if running { "started" } else { "stopped" });
        self.display.show_animation(running);
        if running {
            let angle = self.animation.state().angle;
            self.apply_tick(angle);
        }
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.animation.set_speed(speed);
        self.display.show_speed(speed);
    }

    /// Entry point for the frame scheduler's callback.
    pub fn on_frame(&mut self) {
        if let Some(angle) = self.animation.tick() {
            self.apply_tick(angle);
        }
    }

    fn apply_tick(&mut self, angle: f64) {
        self.model.set_angle(angle);
        self.display.show_angle(angle);
        self.present();
    }

    /// Keyboard shortcuts. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == " " {
            self.toggle_animation();
            return true;
        }
        match Preset::from_key(key) {
            Some(preset) => {
                self.apply_preset(preset);
                true
            }
            None => false,
        }
    }

    fn present(&mut self) {
        self.display.show_rotation(&self.model.frame());
    }
}
