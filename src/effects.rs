//! Particle and pointer-follow math for the showcase section. Rendering is
//! done by `components::showcase`; everything here is canvas-agnostic and
//! takes its randomness from the caller.

use std::f64::consts::PI;

pub const MAX_EMBERS: usize = 80;
pub const SPOTLIGHT_EASING: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

pub const EMBER_COLORS: [Rgb; 5] = [
    Rgb { r: 233, g: 59, b: 38 },
    Rgb { r: 233, g: 141, b: 58 },
    Rgb { r: 237, g: 184, b: 64 },
    Rgb { r: 255, g: 140, b: 0 },
    Rgb { r: 255, g: 69, b: 0 },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Ember {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
    pub fade_rate: f64,
    pub wobble: f64,
    pub wobble_speed: f64,
    pub color: Rgb,
    pub glow_size: f64,
}

impl Ember {
    /// New ember just below the bottom edge.
    pub fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let size = rng() * 3.0 + 1.0;
        let color_index = ((rng() * EMBER_COLORS.len() as f64) as usize).min(EMBER_COLORS.len() - 1);
        Self {
            x: rng() * width,
            y: height + 10.0,
            size,
            speed_y: rng() * 1.5 + 0.5,
            speed_x: (rng() - 0.5) * 0.8,
            opacity: rng() * 0.6 + 0.4,
            fade_rate: rng() * 0.008 + 0.003,
            wobble: rng() * PI * 2.0,
            wobble_speed: rng() * 0.02 + 0.01,
            color: EMBER_COLORS[color_index],
            glow_size: size * (rng() * 2.0 + 2.0),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0 && self.y >= -20.0
    }

    pub fn update(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        self.wobble += self.wobble_speed;
        self.x += self.speed_x + self.wobble.sin() * 0.3;
        self.y -= self.speed_y;
        self.opacity -= self.fade_rate;
        self.size *= 0.998;

        if !self.is_alive() {
            *self = Ember::spawn(width, height, rng);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmberField {
    pub width: f64,
    pub height: f64,
    pub embers: Vec<Ember>,
}

impl EmberField {
    pub fn particle_count(width: f64) -> usize {
        ((width / 15.0).floor().max(0.0) as usize).min(MAX_EMBERS)
    }

    /// Field sized to the canvas, embers spread over its full height.
    pub fn seeded(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let embers = (0..Self::particle_count(width))
            .map(|_| {
                let mut ember = Ember::spawn(width, height, rng);
                ember.y = rng() * height;
                ember
            })
            .collect();
        Self {
            width,
            height,
            embers,
        }
    }

    pub fn step(&mut self, rng: &mut impl FnMut() -> f64) {
        let (width, height) = (self.width, self.height);
        for ember in &mut self.embers {
            ember.update(width, height, rng);
        }
    }
}

/// Spotlight position that trails the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spotlight {
    pub target: (f64, f64),
    pub current: (f64, f64),
}

impl Spotlight {
    pub fn aim(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    pub fn follow(&mut self) -> (f64, f64) {
        self.current.0 += (self.target.0 - self.current.0) * SPOTLIGHT_EASING;
        self.current.1 += (self.target.1 - self.current.1) * SPOTLIGHT_EASING;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn particle_count_scales_and_caps() {
        assert_eq!(EmberField::particle_count(0.0), 0);
        assert_eq!(EmberField::particle_count(300.0), 20);
        assert_eq!(EmberField::particle_count(3000.0), MAX_EMBERS);
    }

    #[test]
    fn seeded_embers_stay_in_bounds() {
        let mut rng = lcg(7);
        let field = EmberField::seeded(600.0, 400.0, &mut rng);
        assert_eq!(field.embers.len(), 40);
        for ember in &field.embers {
            assert!((0.0..=600.0).contains(&ember.x));
            assert!((0.0..=400.0).contains(&ember.y));
            assert!((0.4..=1.0).contains(&ember.opacity));
            assert!(EMBER_COLORS.contains(&ember.color));
        }
    }

    #[test]
    fn faded_ember_respawns_at_bottom() {
        let mut rng = lcg(3);
        let mut ember = Ember::spawn(200.0, 100.0, &mut rng);
        ember.opacity = 0.001;
        ember.fade_rate = 0.01;
        ember.update(200.0, 100.0, &mut rng);
        assert_eq!(ember.y, 110.0);
        assert!(ember.opacity >= 0.4);
    }

    #[test]
    fn ember_rises() {
        let mut rng = lcg(11);
        let mut ember = Ember::spawn(200.0, 100.0, &mut rng);
        ember.opacity = 1.0;
        ember.fade_rate = 0.0;
        let y = ember.y;
        ember.update(200.0, 100.0, &mut rng);
        assert!(ember.y < y);
    }

    #[test]
    fn spotlight_converges_on_pointer() {
        let mut spot = Spotlight::default();
        spot.aim(100.0, 50.0);
        let first = spot.follow();
        assert!((first.0 - 8.0).abs() < 1e-9);
        for _ in 0..200 {
            spot.follow();
        }
        assert!((spot.current.0 - 100.0).abs() < 0.01);
        assert!((spot.current.1 - 50.0).abs() < 0.01);
    }
}
