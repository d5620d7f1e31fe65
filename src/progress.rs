use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

/// Share of `total` already used up, clamped to `[0, 1]`.
pub fn progress_fraction(elapsed: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 {
        return 1.0;
    }
    if !elapsed.is_finite() {
        return if elapsed > 0.0 { 1.0 } else { 0.0 };
    }
    (elapsed / total).clamp(0.0, 1.0)
}

/// Arc from 12 o'clock, clockwise, covering `fraction` of a full turn.
///
/// Canvas coordinates are expected to be centred on the origin.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    pub radius: f64,
    pub fraction: f64,
    pub color: Color,
}

impl Shape for ProgressRing {
    fn draw(&self, painter: &mut Painter) {
        let fraction = self.fraction.clamp(0.0, 1.0);
        if fraction <= 0.0 {
            return;
        }
        let steps = (fraction * 720.0).ceil() as usize;
        for i in 0..=steps {
            let angle = FRAC_PI_2 - fraction * TAU * (i as f64 / steps as f64);
            let x = self.radius * angle.cos();
            let y = self.radius * angle.sin();
            if let Some((px, py)) = painter.get_point(x, y) {
                painter.paint(px, py, self.color);
            }
        }
    }
}
