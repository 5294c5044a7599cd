use crate::rng::Rng;
use crate::surface::{Rgba, Surface};
use std::f64::consts::PI;

pub const STAR_COUNT: usize = 140;
/// Stars only occupy the upper part of the sky.
const SKY_FRACTION: f64 = 0.6;
const TWINKLE_AMPLITUDE: f64 = 0.4;
const STAR_COLOR: Rgba = Rgba::new(255, 236, 180, 1.0);

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub base_alpha: f64,
    pub speed: f64,
    pub offset: f64,
}

impl Star {
    pub fn alpha_at(&self, t: f64) -> f64 {
        (self.base_alpha + TWINKLE_AMPLITUDE * (t * self.speed + self.offset).sin()).clamp(0.0, 1.0)
    }
}

pub struct StarField {
    pub stars: Vec<Star>,
}

impl StarField {
    pub fn new(width: f64, height: f64, rng: &mut Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height * SKY_FRACTION,
                radius: rng.range(0.5, 2.0),
                base_alpha: rng.range(0.2, 0.7),
                speed: rng.range(0.01, 0.03),
                offset: rng.next_f64() * PI * 2.0,
            })
            .collect();
        Self { stars }
    }

    /// `timestamp_ms` is the frame callback timestamp.
    pub fn draw(&self, surface: &mut impl Surface, timestamp_ms: f64) {
        let t = timestamp_ms / 16.0;
        surface.clear();
        for s in &self.stars {
            surface.fill_circle(s.x, s.y, s.radius, STAR_COLOR.with_alpha(s.alpha_at(t)));
        }
    }
}
