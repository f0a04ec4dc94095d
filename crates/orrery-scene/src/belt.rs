//! Asteroid belt scatter.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// An annular belt of asteroids in the ecliptic plane. Each scatter draws a
/// fresh set of positions from an injected generator; nothing about one draw
/// constrains the next, and callers must not rely on positional continuity.
#[derive(Clone, Copy, Debug)]
pub struct AsteroidBelt {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub count: usize,
}

impl AsteroidBelt {
    pub fn new(inner_radius: f32, outer_radius: f32, count: usize) -> Self {
        debug_assert!(inner_radius <= outer_radius);
        Self {
            inner_radius,
            outer_radius,
            count,
        }
    }

    /// Draw `count` positions, each at a uniform angle in [0, 2pi) and a
    /// uniform radius in [inner, outer), all at y = 0.
    pub fn scatter<R: Rng>(&self, rng: &mut R) -> Vec<Vec3> {
        (0..self.count)
            .map(|_| {
                let angle = rng.random_range(0.0..TAU);
                let radius = rng.random_range(self.inner_radius..self.outer_radius);
                Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_scatter_count_and_radial_bounds() {
        let belt = AsteroidBelt::new(9.0, 11.0, 500);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let positions = belt.scatter(&mut rng);
        assert_eq!(positions.len(), 500);
        for p in &positions {
            let r = p.length();
            assert!(r >= 9.0 - 1e-4, "asteroid inside belt: r={r}");
            assert!(r <= 11.0 + 1e-4, "asteroid outside belt: r={r}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_scatter_covers_all_quadrants() {
        let belt = AsteroidBelt::new(9.0, 11.0, 500);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let positions = belt.scatter(&mut rng);
        let mut quadrants = [0usize; 4];
        for p in &positions {
            let q = match (p.x >= 0.0, p.z >= 0.0) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            quadrants[q] += 1;
        }
        // Uniform angles put roughly 125 in each quadrant; allow wide slack.
        for (q, &n) in quadrants.iter().enumerate() {
            assert!(n > 60, "quadrant {q} underpopulated: {n}");
        }
    }

    #[test]
    fn test_same_seed_reproduces_scatter() {
        let belt = AsteroidBelt::new(9.0, 11.0, 64);
        let a = belt.scatter(&mut ChaCha8Rng::seed_from_u64(9));
        let b = belt.scatter(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let belt = AsteroidBelt::new(9.0, 11.0, 64);
        let a = belt.scatter(&mut ChaCha8Rng::seed_from_u64(3));
        let b = belt.scatter(&mut ChaCha8Rng::seed_from_u64(4));
        assert_ne!(a, b);
    }
}
