use crate::rng::Rng;
use crate::surface::{Rgba, Surface};
use std::f64::consts::PI;

pub const BURST_SIZE: usize = 90;
const GRAVITY: f64 = 0.15;
const BASE_LIFE: f64 = 60.0;
const LIFE_JITTER: f64 = 20.0;

const COLORS: [Rgba; 4] = [
    Rgba::new(244, 180, 160, 0.95),
    Rgba::new(230, 140, 130, 0.95),
    Rgba::new(255, 230, 180, 0.95),
    Rgba::new(246, 205, 150, 0.95),
];

#[derive(Clone, Debug)]
pub struct ConfettiShard {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub size: f64,
    pub color: Rgba,
    pub life: f64,
    pub rotation: f64,
    pub spin: f64,
}

impl ConfettiShard {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.dy += GRAVITY;
        self.rotation += self.spin;
        self.life -= 1.0;
    }
}

#[derive(Clone, Debug)]
pub struct ConfettiBurst {
    pub shards: Vec<ConfettiShard>,
}

impl ConfettiBurst {
    pub fn new(x: f64, y: f64, rng: &mut Rng) -> Self {
        let shards = (0..BURST_SIZE)
            .map(|_| {
                let angle = rng.next_f64() * PI * 2.0;
                let speed = rng.range(2.0, 6.0);
                ConfettiShard {
                    x,
                    y,
                    dx: angle.cos() * speed,
                    dy: angle.sin() * speed - 2.0,
                    size: rng.range(3.0, 7.0),
                    color: COLORS[rng.next_int(COLORS.len() as u32) as usize],
                    life: BASE_LIFE + rng.next_f64() * LIFE_JITTER,
                    rotation: rng.next_f64() * PI * 2.0,
                    spin: (rng.next_f64() - 0.5) * 0.3,
                }
            })
            .collect();
        Self { shards }
    }

    pub fn alive(&self) -> usize {
        self.shards.iter().filter(|s| s.is_alive()).count()
    }

    /// Advance and draw live shards. Returns how many were alive at the start of the frame.
    fn step_and_draw(&mut self, surface: &mut impl Surface) -> usize {
        let mut alive = 0;
        for s in self.shards.iter_mut().filter(|s| s.is_alive()) {
            alive += 1;
            s.step();
            surface.fill_diamond(
                s.x,
                s.y,
                s.size,
                s.rotation,
                s.color.with_alpha(s.life / BASE_LIFE),
            );
        }
        alive
    }
}

/// All bursts sharing the confetti canvas.
#[derive(Debug, Default)]
pub struct ConfettiField {
    bursts: Vec<ConfettiBurst>,
}

impl ConfettiField {
    pub fn spawn(&mut self, x: f64, y: f64, rng: &mut Rng) {
        self.bursts.push(ConfettiBurst::new(x, y, rng));
    }

    pub fn burst_count(&self) -> usize {
        self.bursts.len()
    }

    /// Draw one frame. Returns `false` once every burst is dead; the surface is
    /// left cleared and no further frames are needed.
    pub fn frame(&mut self, surface: &mut impl Surface) -> bool {
        surface.clear();
        let mut alive = 0;
        for burst in &mut self.bursts {
            alive += burst.step_and_draw(surface);
        }
        self.bursts.retain(|b| b.alive() > 0);
        if alive == 0 {
            surface.clear();
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Call, RecordingSurface};

    /// Upper bound on frames a burst can stay alive.
    const MAX_LIFE_FRAMES: usize = (BASE_LIFE + LIFE_JITTER) as usize;

    #[test]
    fn burst_radiates_from_origin() {
        let mut rng = Rng::new(21);
        let burst = ConfettiBurst::new(100.0, 200.0, &mut rng);
        assert_eq!(burst.shards.len(), BURST_SIZE);
        for s in &burst.shards {
            assert_eq!((s.x, s.y), (100.0, 200.0));
            assert!((60.0..80.0).contains(&s.life));
            assert!((3.0..7.0).contains(&s.size));
            assert!((-0.15..0.15).contains(&s.spin));
        }
    }

    #[test]
    fn gravity_pulls_shards_down() {
        let mut rng = Rng::new(3);
        let mut burst = ConfettiBurst::new(0.0, 0.0, &mut rng);
        let before: Vec<f64> = burst.shards.iter().map(|s| s.dy).collect();
        let mut surface = RecordingSurface::new(10.0, 10.0);
        burst.step_and_draw(&mut surface);
        for (s, dy) in burst.shards.iter().zip(before) {
            assert!((s.dy - (dy + GRAVITY)).abs() < 1e-12);
        }
    }

    #[test]
    fn burst_terminates_within_max_life_and_clears() {
        let mut rng = Rng::new(5);
        let mut field = ConfettiField::default();
        field.spawn(50.0, 50.0, &mut rng);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut frames = 0;
        while field.frame(&mut surface) {
            frames += 1;
            assert!(frames <= MAX_LIFE_FRAMES, "burst outlived its life budget");
        }
        assert_eq!(field.burst_count(), 0);
        assert_eq!(surface.calls, vec![Call::Clear]);
    }

    #[test]
    fn dead_bursts_are_discarded_while_others_live() {
        let mut rng = Rng::new(8);
        let mut field = ConfettiField::default();
        field.spawn(0.0, 0.0, &mut rng);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        for _ in 0..40 {
            field.frame(&mut surface);
        }
        field.spawn(10.0, 10.0, &mut rng);
        assert_eq!(field.burst_count(), 2);
        for _ in 0..45 {
            field.frame(&mut surface);
        }
        assert_eq!(field.burst_count(), 1);
    }

    #[test]
    fn fading_alpha_never_exceeds_one() {
        let mut rng = Rng::new(13);
        let mut field = ConfettiField::default();
        field.spawn(0.0, 0.0, &mut rng);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        field.frame(&mut surface);
        for call in &surface.calls {
            if let Call::Diamond { color, .. } = call {
                assert!((0.0..=1.0).contains(&color.a));
            }
        }
    }
}
