//! Scene model for the solar system: celestial body descriptors, the
//! simulation clock, transform-scope composition, and the asteroid belt.
//!
//! Everything here is pure CPU state — positions and transforms are
//! recomputed each frame as closed-form functions of elapsed time, with no
//! hidden velocity or acceleration state.

pub mod belt;
pub mod body;
pub mod clock;
pub mod composer;
pub mod transform;

pub use belt::AsteroidBelt;
pub use body::{BodyDef, MoonDef, RingDef, SurfaceColor, TextureKey, PLANETS, SUN};
pub use clock::SimClock;
pub use composer::{FrameComposition, MoonNode, PlanetNode, SceneComposer, orbit_position};
pub use transform::{TransformScope, TransformStack, AXIS_CORRECTION_DEG};
