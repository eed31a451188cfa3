//! Virtual joystick sampling.
//!
//! Pointer callbacks write the last-known stick state; the frame loop reads it
//! once per frame through `sample()`. Nothing here depends on a windowing toolkit.

use glam::DVec2;

use corridor_core::types::{ControlSurface, InputVector};

/// Turns raw pointer events over the joystick into a per-frame `InputVector`.
#[derive(Debug, Clone)]
pub struct InputSampler {
    surface: ControlSurface,
    active: bool,
    input: InputVector,
    knob: DVec2,
}

impl InputSampler {
    pub fn new(surface: ControlSurface) -> Self {
        Self {
            surface,
            active: false,
            input: InputVector::ZERO,
            knob: DVec2::ZERO,
        }
    }

    /// Replace the joystick rectangle (after a resize).
    pub fn set_surface(&mut self, surface: ControlSurface) {
        self.surface = surface;
    }

    pub fn surface(&self) -> ControlSurface {
        self.surface
    }

    /// Pointer or touch pressed on the knob.
    pub fn pointer_down(&mut self) {
        self.active = true;
    }

    /// Pointer or touch moved. Ignored unless the stick is held.
    ///
    /// Events without usable coordinates leave the previous sample untouched.
    pub fn pointer_move(&mut self, client_x: Option<f64>, client_y: Option<f64>) {
        if !self.active {
            return;
        }
        let (Some(client_x), Some(client_y)) = (client_x, client_y) else {
            return;
        };
        if !(client_x.is_finite() && client_y.is_finite()) {
            return;
        }

        let radius = self.surface.radius();
        if !(radius.is_finite() && radius > 0.0) {
            // A collapsed control cannot be normalized against.
            self.input = InputVector::ZERO;
            self.knob = DVec2::ZERO;
            return;
        }

        let (center_x, center_y) = self.surface.center();
        let offset = DVec2::new(client_x - center_x, client_y - center_y).clamp_length_max(radius);

        self.knob = offset;
        // Screen y grows downward; pushing the stick up walks forward.
        self.input = InputVector::new(offset.x / radius, -offset.y / radius);
    }

    /// Pointer or touch released: the stick recenters.
    pub fn pointer_up(&mut self) {
        self.active = false;
        self.input = InputVector::ZERO;
        self.knob = DVec2::ZERO;
    }

    /// Stick deflection for this frame. Zero while the stick is not held.
    pub fn sample(&self) -> InputVector {
        if self.active {
            self.input
        } else {
            InputVector::ZERO
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Knob offset from the control's center in pixels, for drawing.
    pub fn knob_offset(&self) -> (f64, f64) {
        (self.knob.x, self.knob.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampler() -> InputSampler {
        // Center at (100, 100), radius 50.
        InputSampler::new(ControlSurface::new(50.0, 50.0, 100.0, 100.0))
    }

    #[test]
    fn test_inactive_sampler_reports_zero() {
        let mut s = sampler();
        s.pointer_move(Some(150.0), Some(100.0));
        assert_eq!(s.sample(), InputVector::ZERO);
        assert!(!s.is_active());
    }

    #[test]
    fn test_push_up_is_forward_thrust() {
        let mut s = sampler();
        s.pointer_down();
        s.pointer_move(Some(100.0), Some(75.0));
        let input = s.sample();
        assert_eq!(input.turn, 0.0);
        assert!((input.thrust - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_push_right_is_positive_turn() {
        let mut s = sampler();
        s.pointer_down();
        s.pointer_move(Some(125.0), Some(100.0));
        let input = s.sample();
        assert!((input.turn - 0.5).abs() < 1e-12);
        assert!(input.thrust.abs() < 1e-12);
    }

    #[test]
    fn test_offset_clamped_to_radius_preserving_direction() {
        let mut s = sampler();
        s.pointer_down();
        // 300 px right and 400 px down: direction (0.6, 0.8), far outside the radius.
        s.pointer_move(Some(400.0), Some(500.0));
        let input = s.sample();
        assert!((input.turn - 0.6).abs() < 1e-9);
        assert!((input.thrust + 0.8).abs() < 1e-9);
        let (kx, ky) = s.knob_offset();
        assert!((kx - 30.0).abs() < 1e-9);
        assert!((ky - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_resets_input_and_knob() {
        let mut s = sampler();
        s.pointer_down();
        s.pointer_move(Some(100.0), Some(50.0));
        assert!(!s.sample().is_zero());
        s.pointer_up();
        assert_eq!(s.sample(), InputVector::ZERO);
        assert_eq!(s.knob_offset(), (0.0, 0.0));

        // Moves after release are ignored.
        s.pointer_move(Some(100.0), Some(50.0));
        assert_eq!(s.sample(), InputVector::ZERO);
    }

    #[test]
    fn test_missing_coordinates_keep_previous_sample() {
        let mut s = sampler();
        s.pointer_down();
        s.pointer_move(Some(100.0), Some(50.0));
        let before = s.sample();
        s.pointer_move(None, Some(10.0));
        s.pointer_move(Some(f64::NAN), Some(10.0));
        assert_eq!(s.sample(), before);
    }

    #[test]
    fn test_zero_radius_surface_yields_zero_input() {
        let mut s = InputSampler::new(ControlSurface::new(10.0, 10.0, 0.0, 0.0));
        s.pointer_down();
        s.pointer_move(Some(30.0), Some(5.0));
        let input = s.sample();
        assert_eq!(input, InputVector::ZERO);
        assert!(input.turn.is_finite() && input.thrust.is_finite());
    }

    #[test]
    fn test_resize_recenters_normalization() {
        let mut s = sampler();
        s.set_surface(ControlSurface::new(0.0, 0.0, 200.0, 200.0));
        s.pointer_down();
        s.pointer_move(Some(100.0), Some(0.0));
        assert!((s.sample().thrust - 1.0).abs() < 1e-12);
    }
}
