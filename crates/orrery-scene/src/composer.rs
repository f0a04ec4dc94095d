//! Per-frame scene composition.
//!
//! `SceneComposer::compose` turns elapsed simulation time into world
//! transforms for every drawable node. Body positions are closed-form
//! functions of time, so a frame can be recomputed for any instant; the
//! asteroid belt alone is stochastic, redrawn from the composer's seeded
//! generator each frame.

use glam::{Mat4, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::belt::AsteroidBelt;
use crate::body::{BodyDef, MoonDef, PLANETS, RingDef};
use crate::transform::{AXIS_CORRECTION_DEG, TransformStack};

/// Position on a circular orbit of `radius` in the y=0 plane, at angle
/// `speed * elapsed` radians from the +X axis, sweeping toward +Z.
pub fn orbit_position(radius: f32, speed: f32, elapsed: f32) -> Vec3 {
    let angle = speed * elapsed;
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// One planet, fully posed for this frame.
#[derive(Debug)]
pub struct PlanetNode {
    pub body: &'static BodyDef,
    /// World transform for the planet sphere, axis correction and
    /// self-rotation included.
    pub transform: Mat4,
    /// Ring transform, present only for ringed bodies. The ring shares the
    /// planet's full transform, so it spins with the planet.
    pub ring: Option<(&'static RingDef, Mat4)>,
    pub moon: Option<MoonNode>,
}

/// A satellite posed relative to its (already self-rotating) parent.
#[derive(Debug)]
pub struct MoonNode {
    pub def: &'static MoonDef,
    pub transform: Mat4,
}

/// Everything the render layer needs to draw one frame.
#[derive(Debug)]
pub struct FrameComposition {
    /// The sun's transform: identity position, axis correction only.
    pub sun: Mat4,
    pub planets: Vec<PlanetNode>,
    /// World-space asteroid centers, freshly scattered for this frame.
    pub asteroids: Vec<Vec3>,
}

/// Owns the belt and its generator, and composes a [`FrameComposition`]
/// per frame. The belt is rescattered on every call; no asteroid keeps an
/// identity across frames, but the seeded generator makes the whole
/// sequence of scatters reproducible run to run.
pub struct SceneComposer {
    belt: AsteroidBelt,
    rng: ChaCha8Rng,
}

impl SceneComposer {
    pub fn new(belt: AsteroidBelt, seed: u64) -> Self {
        Self {
            belt,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn asteroid_count(&self) -> usize {
        self.belt.count
    }

    /// Pose every node for the given elapsed simulation time, in seconds.
    pub fn compose(&mut self, elapsed: f32) -> FrameComposition {
        let mut stack = TransformStack::new();

        let sun = {
            let mut scope = stack.push_scoped();
            scope.rotate_x_deg(AXIS_CORRECTION_DEG);
            scope.current()
        };

        let planets = PLANETS
            .iter()
            .map(|body| Self::pose_planet(&mut stack, body, elapsed))
            .collect();

        FrameComposition {
            sun,
            planets,
            asteroids: self.belt.scatter(&mut self.rng),
        }
    }

    fn pose_planet(stack: &mut TransformStack, body: &'static BodyDef, elapsed: f32) -> PlanetNode {
        let mut scope = stack.push_scoped();
        scope.translate(orbit_position(
            body.orbital_radius,
            body.orbital_speed,
            elapsed,
        ));
        scope.rotate_x_deg(AXIS_CORRECTION_DEG);
        scope.rotate_y_deg(body.rotation_speed_deg * elapsed);
        let transform = scope.current();

        // The ring lives in the planet's rotated frame.
        let ring = body.ring.as_ref().map(|ring| (ring, transform));

        // The moon orbit is nested inside the parent's full transform,
        // self-rotation included, so it circles in the parent's equatorial
        // plane rather than the ecliptic.
        let moon = body.moon.as_ref().map(|def| {
            let mut moon_scope = scope.push_scoped();
            moon_scope.translate(orbit_position(
                def.orbital_radius,
                def.orbital_speed,
                elapsed,
            ));
            moon_scope.rotate_x_deg(AXIS_CORRECTION_DEG);
            MoonNode {
                def,
                transform: moon_scope.current(),
            }
        });

        PlanetNode {
            body,
            transform,
            ring,
            moon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    fn composer() -> SceneComposer {
        SceneComposer::new(AsteroidBelt::new(9.0, 11.0, 50), 42)
    }

    fn translation_of(m: Mat4) -> Vec3 {
        m.transform_point3(Vec3::ZERO)
    }

    #[test]
    fn test_orbit_starts_on_positive_x() {
        let p = orbit_position(2.0, 0.1, 0.0);
        assert!((p - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_orbit_quarter_turn_reaches_positive_z() {
        // Mercury: speed 0.1 rad/s, quarter turn after pi/0.2 seconds.
        let p = orbit_position(2.0, 0.1, PI / 0.2);
        assert!(p.x.abs() < 1e-4);
        assert!((p.z - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_is_periodic() {
        let period = TAU / 0.06;
        let a = orbit_position(6.0, 0.06, 1.5);
        let b = orbit_position(6.0, 0.06, 1.5 + period);
        assert!((a - b).length() < 1e-3);
    }

    #[test]
    fn test_orbit_stays_in_ecliptic_plane() {
        for t in 0..100 {
            let p = orbit_position(8.0, 0.05, t as f32 * 0.37);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_planet_transform_places_body_on_orbit() {
        let comp = composer().compose(0.0);
        for node in &comp.planets {
            let pos = translation_of(node.transform);
            let expected = orbit_position(node.body.orbital_radius, node.body.orbital_speed, 0.0);
            assert!(
                (pos - expected).length() < 1e-5,
                "{} at {pos:?}, expected {expected:?}",
                node.body.name
            );
        }
    }

    #[test]
    fn test_self_rotation_does_not_move_center() {
        let late = composer().compose(123.456);
        for node in &late.planets {
            let pos = translation_of(node.transform);
            assert!(
                (pos.length() - node.body.orbital_radius).abs() < 1e-3,
                "{} drifted off its orbit radius",
                node.body.name
            );
        }
    }

    #[test]
    fn test_sun_sits_at_origin() {
        let comp = composer().compose(77.0);
        assert!(translation_of(comp.sun).length() < 1e-6);
    }

    #[test]
    fn test_ring_shares_saturn_transform() {
        let comp = composer().compose(31.0);
        let saturn = comp
            .planets
            .iter()
            .find(|n| n.body.name == "saturn")
            .unwrap();
        let (_, ring_transform) = saturn.ring.expect("saturn has a ring");
        assert_eq!(ring_transform, saturn.transform);
    }

    #[test]
    fn test_moon_stays_near_earth() {
        for t in [0.0_f32, 5.0, 19.3, 240.0] {
            let comp = composer().compose(t);
            let earth = comp
                .planets
                .iter()
                .find(|n| n.body.name == "earth")
                .unwrap();
            let moon = earth.moon.as_ref().expect("earth has a moon");
            let dist = (translation_of(moon.transform) - translation_of(earth.transform)).length();
            assert!(
                (dist - moon.def.orbital_radius).abs() < 1e-3,
                "moon at distance {dist} from earth at t={t}"
            );
        }
    }

    #[test]
    fn test_moon_orbit_tilts_with_parent_rotation() {
        // Nested inside earth's self-rotating frame, the moon's world
        // position is not a plain ecliptic-plane circle around earth.
        let comp = composer().compose(10.0);
        let earth = comp
            .planets
            .iter()
            .find(|n| n.body.name == "earth")
            .unwrap();
        let moon = earth.moon.as_ref().unwrap();
        let offset = translation_of(moon.transform) - translation_of(earth.transform);
        // Earth's axis correction stands the orbital plane up, so the local
        // XZ circle maps into a vertical plane in world space.
        assert!(offset.y.abs() > 1e-3, "moon offset stayed flat: {offset:?}");
        assert!((offset.length() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_every_frame_scatters_within_the_belt() {
        let mut comp = composer();
        for t in [0.0_f32, 1.0, 500.0] {
            let frame = comp.compose(t);
            assert_eq!(frame.asteroids.len(), 50);
            for p in &frame.asteroids {
                let r = p.length();
                assert!((9.0 - 1e-4..=11.0 + 1e-4).contains(&r), "r={r} at t={t}");
            }
        }
    }

    #[test]
    fn test_same_seed_replays_the_same_scatter_sequence() {
        let belt = AsteroidBelt::new(9.0, 11.0, 100);
        let mut a = SceneComposer::new(belt, 7);
        let mut b = SceneComposer::new(belt, 7);
        for t in [0.0_f32, 2.5, 9.0] {
            assert_eq!(a.compose(t).asteroids, b.compose(t).asteroids);
        }
    }
}
