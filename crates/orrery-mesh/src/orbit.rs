//! Orbit path generation: closed circle polylines in the orbital plane.

/// Number of samples around an orbit circle, one per degree.
pub const ORBIT_SEGMENTS: u32 = 360;

/// Generate a circle of the given radius in the y=0 orbital plane, sampled at
/// 1-degree increments. Returns exactly 360 points; the renderer closes the
/// loop by indexing back to the first point.
pub fn generate_orbit_circle(radius: f32) -> Vec<[f32; 3]> {
    (0..ORBIT_SEGMENTS)
        .map(|i| {
            let theta = (i as f32).to_radians();
            [radius * theta.cos(), 0.0, radius * theta.sin()]
        })
        .collect()
}

/// Index list drawing the orbit as a closed line strip: 0, 1, …, 359, 0.
pub fn orbit_loop_indices() -> Vec<u32> {
    let mut indices: Vec<u32> = (0..ORBIT_SEGMENTS).collect();
    indices.push(0);
    indices
}
