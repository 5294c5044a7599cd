use crate::rng::Rng;
use crate::surface::{Rgba, Surface};

pub const SNOW_COUNT: usize = 180;
const RESPAWN_Y: f64 = -5.0;
const SNOW_COLOR: Rgba = Rgba::new(255, 255, 255, 1.0);

#[derive(Clone, Debug)]
pub struct Snowflake {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Pixels fallen per frame.
    pub fall: f64,
    /// Sideways pixels per frame.
    pub drift: f64,
}

pub struct SnowField {
    pub flakes: Vec<Snowflake>,
    width: f64,
    height: f64,
    rng: Rng,
}

impl SnowField {
    pub fn new(width: f64, height: f64, mut rng: Rng) -> Self {
        let flakes = (0..SNOW_COUNT)
            .map(|_| Snowflake {
                x: rng.next_f64() * width,
                y: rng.next_f64() * height,
                radius: rng.range(1.2, 4.0),
                fall: rng.range(0.6, 1.4),
                drift: rng.range(-0.3, 0.3),
            })
            .collect();
        Self {
            flakes,
            width,
            height,
            rng,
        }
    }

    pub fn step(&mut self) {
        for f in &mut self.flakes {
            f.y += f.fall;
            f.x += f.drift;
            if f.y > self.height {
                f.y = RESPAWN_Y;
                f.x = self.rng.next_f64() * self.width;
            }
            if f.x < 0.0 {
                f.x = self.width;
            }
            if f.x > self.width {
                f.x = 0.0;
            }
        }
    }

    /// Paint the current positions, then advance one frame.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        surface.clear();
        for f in &self.flakes {
            surface.fill_circle(f.x, f.y, f.radius, SNOW_COLOR);
        }
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::RecordingSurface;

    fn single(x: f64, y: f64, fall: f64, drift: f64) -> SnowField {
        let mut field = SnowField::new(100.0, 50.0, Rng::new(1));
        field.flakes = vec![Snowflake {
            x,
            y,
            radius: 2.0,
            fall,
            drift,
        }];
        field
    }

    #[test]
    fn population_is_fixed() {
        let mut field = SnowField::new(640.0, 480.0, Rng::new(9));
        for _ in 0..1000 {
            field.step();
        }
        assert_eq!(field.flakes.len(), SNOW_COUNT);
        assert!(field.flakes.iter().all(|f| f.y <= 480.0 + 1.4 && f.y >= RESPAWN_Y));
    }

    #[test]
    fn flake_falls_and_drifts() {
        let mut field = single(10.0, 10.0, 1.0, 0.25);
        field.step();
        assert_eq!(field.flakes[0].y, 11.0);
        assert_eq!(field.flakes[0].x, 10.25);
    }

    #[test]
    fn flake_below_bottom_respawns_above_top() {
        let mut field = single(10.0, 49.5, 1.0, 0.0);
        field.step();
        let f = &field.flakes[0];
        assert_eq!(f.y, RESPAWN_Y);
        assert!((0.0..100.0).contains(&f.x));
    }

    #[test]
    fn flake_wraps_horizontally() {
        let mut left = single(0.1, 0.0, 1.0, -0.3);
        left.step();
        assert_eq!(left.flakes[0].x, 100.0);

        let mut right = single(99.9, 0.0, 1.0, 0.3);
        right.step();
        assert_eq!(right.flakes[0].x, 0.0);
    }

    #[test]
    fn draw_paints_every_flake() {
        let mut field = SnowField::new(200.0, 200.0, Rng::new(4));
        let mut surface = RecordingSurface::new(200.0, 200.0);
        field.draw(&mut surface);
        assert_eq!(surface.drawn(), SNOW_COUNT);
        assert_eq!(surface.clears, 1);
    }
}
