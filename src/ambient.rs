//! Decorative actors that run on their own timers: reindeer herds crossing the
//! ground and Santa flying over the sky.

use crate::layout::Viewport;
use crate::rng::Rng;
use std::rc::Rc;
use yew::Reducible;

/// How long a herd stays on screen (its CSS crossing animation).
pub const HERD_LIFETIME_MS: u32 = 36_000;
const HERD_DELAY_MOBILE_MS: f64 = 10_000.0;
const HERD_DELAY_DESKTOP_MS: f64 = 8_000.0;
const HERD_DELAY_JITTER_MS: f64 = 6_000.0;

pub const SANTA_FLIGHT_MS: u32 = 18_000;
const SANTA_DORMANT_MIN_MS: f64 = 15_000.0;
const SANTA_DORMANT_JITTER_MS: f64 = 12_000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Reindeer {
    /// CSS `bottom` offset in px.
    pub bottom: f64,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Herd {
    pub id: u32,
    pub deer: Vec<Reindeer>,
}

/// Builds herds and decides when the next one comes.
#[derive(Debug)]
pub struct HerdSpawner {
    rng: Rng,
    next_id: u32,
}

impl HerdSpawner {
    pub fn new(rng: Rng) -> Self {
        Self { rng, next_id: 0 }
    }

    pub fn spawn(&mut self, viewport: Viewport) -> Herd {
        let mobile = viewport.is_mobile();
        let count = 2 + self.rng.next_int(5);
        let deer = (0..count)
            .map(|_| {
                let bottom = if mobile {
                    -5.0 + self.rng.next_f64() * 15.0
                } else {
                    -10.0 + self.rng.next_f64() * 30.0
                };
                let scale = if mobile { 0.8 } else { 0.9 } + self.rng.next_f64() * 0.4;
                Reindeer { bottom, scale }
            })
            .collect();
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        Herd { id, deer }
    }

    pub fn next_delay_ms(&mut self, viewport: Viewport) -> u32 {
        let base = if viewport.is_mobile() {
            HERD_DELAY_MOBILE_MS
        } else {
            HERD_DELAY_DESKTOP_MS
        };
        (base + self.rng.next_f64() * HERD_DELAY_JITTER_MS) as u32
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HerdList {
    pub herds: Vec<Herd>,
}

#[derive(Clone, Debug)]
pub enum HerdAction {
    Add(Herd),
    Remove(u32),
}

impl Reducible for HerdList {
    type Action = HerdAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            HerdAction::Add(herd) => new.herds.push(herd),
            HerdAction::Remove(id) => {
                if !new.herds.iter().any(|h| h.id == id) {
                    return self;
                }
                new.herds.retain(|h| h.id != id);
            }
        }
        Rc::new(new)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SantaPhase {
    Dormant,
    Flying,
}

/// Alternates a random dormant wait with a fixed-length flight.
#[derive(Debug)]
pub struct SantaScheduler {
    rng: Rng,
    phase: SantaPhase,
}

impl SantaScheduler {
    pub fn new(rng: Rng) -> Self {
        Self {
            rng,
            phase: SantaPhase::Dormant,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> SantaPhase {
        self.phase
    }

    /// Delay before the first flight.
    pub fn initial_delay_ms(&mut self) -> u32 {
        self.dormant_ms()
    }

    /// Switch to the other phase; returns the new phase and how long it lasts.
    pub fn advance(&mut self) -> (SantaPhase, u32) {
        match self.phase {
            SantaPhase::Dormant => {
                self.phase = SantaPhase::Flying;
                (SantaPhase::Flying, SANTA_FLIGHT_MS)
            }
            SantaPhase::Flying => {
                self.phase = SantaPhase::Dormant;
                (SantaPhase::Dormant, self.dormant_ms())
            }
        }
    }

    fn dormant_ms(&mut self) -> u32 {
        (SANTA_DORMANT_MIN_MS + self.rng.next_f64() * SANTA_DORMANT_JITTER_MS) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };
    const PHONE: Viewport = Viewport {
        width: 600.0,
        height: 900.0,
    };

    #[test]
    fn herd_sizes_stay_between_two_and_six() {
        let mut spawner = HerdSpawner::new(Rng::new(17));
        let mut seen = [false; 7];
        for _ in 0..500 {
            let n = spawner.spawn(DESKTOP).deer.len();
            assert!((2..=6).contains(&n));
            seen[n] = true;
        }
        assert!(seen[2..=6].iter().all(|s| *s));
    }

    #[test]
    fn deer_ranges_depend_on_viewport() {
        let mut spawner = HerdSpawner::new(Rng::new(3));
        for _ in 0..200 {
            for d in spawner.spawn(DESKTOP).deer {
                assert!((-10.0..20.0).contains(&d.bottom));
                assert!((0.9..1.3).contains(&d.scale));
            }
            for d in spawner.spawn(PHONE).deer {
                assert!((-5.0..10.0).contains(&d.bottom));
                assert!((0.8..1.2).contains(&d.scale));
            }
        }
    }

    #[test]
    fn herd_ids_are_unique() {
        let mut spawner = HerdSpawner::new(Rng::new(1));
        let a = spawner.spawn(DESKTOP);
        let b = spawner.spawn(DESKTOP);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn next_herd_delay_has_base_plus_jitter() {
        let mut spawner = HerdSpawner::new(Rng::new(29));
        for _ in 0..200 {
            assert!((8_000..14_000).contains(&spawner.next_delay_ms(DESKTOP)));
            assert!((10_000..16_000).contains(&spawner.next_delay_ms(PHONE)));
        }
    }

    #[test]
    fn herd_list_adds_and_removes() {
        let mut spawner = HerdSpawner::new(Rng::new(6));
        let list = Rc::new(HerdList::default())
            .reduce(HerdAction::Add(spawner.spawn(DESKTOP)))
            .reduce(HerdAction::Add(spawner.spawn(DESKTOP)));
        assert_eq!(list.herds.len(), 2);
        let first = list.herds[0].id;
        let list = list.reduce(HerdAction::Remove(first));
        assert_eq!(list.herds.len(), 1);
        let unchanged = list.clone().reduce(HerdAction::Remove(first));
        assert!(Rc::ptr_eq(&list, &unchanged));
    }

    #[test]
    fn santa_alternates_dormant_and_flight() {
        let mut santa = SantaScheduler::new(Rng::new(4));
        assert_eq!(santa.phase(), SantaPhase::Dormant);
        let first = santa.initial_delay_ms();
        assert!((15_000..27_000).contains(&first));
        for _ in 0..50 {
            assert_eq!(santa.advance(), (SantaPhase::Flying, SANTA_FLIGHT_MS));
            let (phase, wait) = santa.advance();
            assert_eq!(phase, SantaPhase::Dormant);
            assert!((15_000..27_000).contains(&wait));
        }
    }
}
