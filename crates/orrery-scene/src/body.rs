//! Celestial body descriptors: the data-driven table of planets with their
//! orbital parameters, textures, and optional satellites.

/// Names the texture bound to a body or role. The asset layer maps each key
/// to an image file; the render layer maps it to a GPU texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    SaturnRing,
    Uranus,
    Neptune,
    Asteroid,
    Backdrop,
}

impl TextureKey {
    /// All keys, in load order. Every one must resolve to an image at startup.
    pub const ALL: [TextureKey; 12] = [
        TextureKey::Sun,
        TextureKey::Mercury,
        TextureKey::Venus,
        TextureKey::Earth,
        TextureKey::Mars,
        TextureKey::Jupiter,
        TextureKey::Saturn,
        TextureKey::SaturnRing,
        TextureKey::Uranus,
        TextureKey::Neptune,
        TextureKey::Asteroid,
        TextureKey::Backdrop,
    ];
}

/// Base color, shininess, and emissive term for a body's surface.
///
/// The render layer derives the full material registers from this: ambient is
/// 0.2× the base color, diffuse is the base color, specular is white.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceColor {
    pub rgb: [f32; 3],
    pub shininess: f32,
    pub emissive: [f32; 3],
}

impl SurfaceColor {
    /// A non-emissive surface color.
    pub const fn surface(r: f32, g: f32, b: f32, shininess: f32) -> Self {
        Self {
            rgb: [r, g, b],
            shininess,
            emissive: [0.0, 0.0, 0.0],
        }
    }
}

/// Saturn-style flat ring, drawn in the parent body's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDef {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segments: u32,
    pub texture: TextureKey,
}

/// A moon orbiting its parent body, untextured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonDef {
    pub orbital_radius: f32,
    /// Angular speed in radians per second.
    pub orbital_speed: f32,
    pub body_radius: f32,
    pub color: SurfaceColor,
}

/// One orbiting, self-rotating body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDef {
    pub name: &'static str,
    pub orbital_radius: f32,
    /// Angular speed of the orbit in radians per second.
    pub orbital_speed: f32,
    /// Self-rotation speed in degrees per second.
    pub rotation_speed_deg: f32,
    pub body_radius: f32,
    pub texture: TextureKey,
    pub color: SurfaceColor,
    pub ring: Option<RingDef>,
    pub moon: Option<MoonDef>,
}

/// The sun: emissive, drawn at the origin.
pub const SUN: BodyDef = BodyDef {
    name: "sun",
    orbital_radius: 0.0,
    orbital_speed: 0.0,
    rotation_speed_deg: 0.0,
    body_radius: 1.0,
    texture: TextureKey::Sun,
    color: SurfaceColor {
        rgb: [1.0, 1.0, 0.0],
        shininess: 100.0,
        emissive: [0.5, 0.5, 0.0],
    },
    ring: None,
    moon: None,
};

/// Neutral surface that lets the bound texture carry the color.
const PLANET_COLOR: SurfaceColor = SurfaceColor::surface(1.0, 1.0, 1.0, 10.0);

const EARTH_MOON: MoonDef = MoonDef {
    orbital_radius: 1.0,
    orbital_speed: 0.2,
    body_radius: 0.25,
    color: SurfaceColor::surface(0.8, 0.8, 0.8, 10.0),
};

const SATURN_RING: RingDef = RingDef {
    inner_radius: 1.3,
    outer_radius: 2.1,
    segments: 64,
    texture: TextureKey::SaturnRing,
};

macro_rules! planet {
    ($name:literal, $radius:expr, $speed:expr, $spin:expr, $size:expr, $tex:expr) => {
        planet!($name, $radius, $speed, $spin, $size, $tex, None, None)
    };
    ($name:literal, $radius:expr, $speed:expr, $spin:expr, $size:expr, $tex:expr,
     $ring:expr, $moon:expr) => {
        BodyDef {
            name: $name,
            orbital_radius: $radius,
            orbital_speed: $speed,
            rotation_speed_deg: $spin,
            body_radius: $size,
            texture: $tex,
            color: PLANET_COLOR,
            ring: $ring,
            moon: $moon,
        }
    };
}

/// The eight planets, Mercury through Neptune. Body radius grows with orbital
/// distance (0.5 + 0.1 per slot) — a visual simplification, not physics.
pub const PLANETS: [BodyDef; 8] = [
    planet!("mercury", 2.0, 0.1, 1.0, 0.5, TextureKey::Mercury),
    planet!("venus", 4.0, 0.08, 0.8, 0.6, TextureKey::Venus),
    planet!(
        "earth",
        6.0,
        0.06,
        1.0,
        0.7,
        TextureKey::Earth,
        None,
        Some(EARTH_MOON)
    ),
    planet!("mars", 8.0, 0.05, 1.5, 0.8, TextureKey::Mars),
    planet!("jupiter", 12.0, 0.04, 0.5, 0.9, TextureKey::Jupiter),
    planet!(
        "saturn",
        16.0,
        0.03,
        0.4,
        1.0,
        TextureKey::Saturn,
        Some(SATURN_RING),
        None
    ),
    planet!("uranus", 20.0, 0.02, 0.3, 1.1, TextureKey::Uranus),
    planet!("neptune", 24.0, 0.01, 0.2, 1.2, TextureKey::Neptune),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_planets_in_distance_order() {
        assert_eq!(PLANETS.len(), 8);
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbital_radius < pair[1].orbital_radius);
        }
    }

    #[test]
    fn test_body_radius_grows_with_slot() {
        for (i, body) in PLANETS.iter().enumerate() {
            let expected = 0.5 + 0.1 * i as f32;
            assert!(
                (body.body_radius - expected).abs() < 1e-6,
                "{} radius {} != {expected}",
                body.name,
                body.body_radius
            );
        }
    }

    #[test]
    fn test_only_saturn_has_ring() {
        let ringed: Vec<_> = PLANETS.iter().filter(|b| b.ring.is_some()).collect();
        assert_eq!(ringed.len(), 1);
        assert_eq!(ringed[0].name, "saturn");
        let ring = ringed[0].ring.unwrap();
        assert!((ring.inner_radius - 1.3).abs() < 1e-6);
        assert!((ring.outer_radius - 2.1).abs() < 1e-6);
        assert_eq!(ring.segments, 64);
    }

    #[test]
    fn test_only_earth_has_moon() {
        let mooned: Vec<_> = PLANETS.iter().filter(|b| b.moon.is_some()).collect();
        assert_eq!(mooned.len(), 1);
        assert_eq!(mooned[0].name, "earth");
        let moon = mooned[0].moon.unwrap();
        assert!((moon.orbital_radius - 1.0).abs() < 1e-6);
        assert!((moon.orbital_speed - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_sun_is_the_only_emissive_body() {
        assert_ne!(SUN.color.emissive, [0.0, 0.0, 0.0]);
        for body in &PLANETS {
            assert_eq!(body.color.emissive, [0.0, 0.0, 0.0]);
            if let Some(moon) = &body.moon {
                assert_eq!(moon.color.emissive, [0.0, 0.0, 0.0]);
            }
        }
    }

    #[test]
    fn test_texture_key_list_covers_twelve_roles() {
        assert_eq!(TextureKey::ALL.len(), 12);
    }
}
