//! Transform-scope composition: an explicit matrix stack with RAII guards.
//!
//! Replaces fixed-function push/pop matrix calls with an owned stack whose
//! scopes restore the prior transform on drop, so every scope enter has
//! exactly one matching exit even on early return.

use glam::{Mat4, Vec3};
use std::ops::{Deref, DerefMut};

/// Fixed axis-correction rotation, in degrees about X: sphere geometry is
/// generated with its pole on +Z and must be stood up to the scene's +Y.
pub const AXIS_CORRECTION_DEG: f32 = 90.0;

/// A matrix stack seeded with the identity transform.
#[derive(Debug)]
pub struct TransformStack {
    stack: Vec<Mat4>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }

    /// The currently composed transform.
    pub fn current(&self) -> Mat4 {
        *self.stack.last().expect("stack never empty")
    }

    /// Current nesting depth (1 = just the identity root).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Enter a nested scope. The returned guard restores the prior transform
    /// when it goes out of scope.
    pub fn push_scoped(&mut self) -> TransformScope<'_> {
        let top = self.current();
        self.stack.push(top);
        TransformScope { stack: self }
    }

    /// Post-multiply a translation onto the current transform.
    pub fn translate(&mut self, offset: Vec3) {
        self.apply(Mat4::from_translation(offset));
    }

    /// Post-multiply a rotation about X, in degrees.
    pub fn rotate_x_deg(&mut self, degrees: f32) {
        self.apply(Mat4::from_rotation_x(degrees.to_radians()));
    }

    /// Post-multiply a rotation about Y, in degrees.
    pub fn rotate_y_deg(&mut self, degrees: f32) {
        self.apply(Mat4::from_rotation_y(degrees.to_radians()));
    }

    fn apply(&mut self, m: Mat4) {
        let top = self.stack.last_mut().expect("stack never empty");
        *top = *top * m;
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for one transform scope. Derefs to the stack so nested scopes
/// and transform operations compose naturally.
#[derive(Debug)]
pub struct TransformScope<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for TransformScope<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &TransformStack {
        self.stack
    }
}

impl DerefMut for TransformScope<'_> {
    fn deref_mut(&mut self) -> &mut TransformStack {
        self.stack
    }
}

impl Drop for TransformScope<'_> {
    fn drop(&mut self) {
        self.stack.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_eq(a: Mat4, b: Mat4) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn test_starts_at_identity() {
        let stack = TransformStack::new();
        assert!(mat_eq(stack.current(), Mat4::IDENTITY));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_scope_restores_prior_transform() {
        let mut stack = TransformStack::new();
        stack.translate(Vec3::new(1.0, 2.0, 3.0));
        let before = stack.current();
        {
            let mut scope = stack.push_scoped();
            scope.rotate_y_deg(45.0);
            scope.translate(Vec3::X);
            assert!(!mat_eq(scope.current(), before));
        }
        assert!(mat_eq(stack.current(), before));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_nested_scopes_compose_and_unwind() {
        let mut stack = TransformStack::new();
        {
            let mut outer = stack.push_scoped();
            outer.translate(Vec3::new(5.0, 0.0, 0.0));
            assert_eq!(outer.depth(), 2);
            {
                let mut inner = outer.push_scoped();
                inner.translate(Vec3::new(0.0, 0.0, 2.0));
                assert_eq!(inner.depth(), 3);
                let p = inner.current().transform_point3(Vec3::ZERO);
                assert!((p - Vec3::new(5.0, 0.0, 2.0)).length() < 1e-6);
            }
            assert_eq!(outer.depth(), 2);
        }
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_early_return_still_pops() {
        fn composes_then_bails(stack: &mut TransformStack) -> Option<()> {
            let mut scope = stack.push_scoped();
            scope.translate(Vec3::Y);
            None?;
            Some(())
        }
        let mut stack = TransformStack::new();
        assert!(composes_then_bails(&mut stack).is_none());
        assert_eq!(stack.depth(), 1);
        assert!(mat_eq(stack.current(), Mat4::IDENTITY));
    }

    #[test]
    fn test_axis_correction_stands_pole_up() {
        // The +Z pole of generated sphere geometry must land on +Y.
        let mut stack = TransformStack::new();
        let mut scope = stack.push_scoped();
        scope.rotate_x_deg(AXIS_CORRECTION_DEG);
        let pole = scope.current().transform_point3(Vec3::Z);
        assert!(pole.y.abs() > 0.999, "pole not vertical: {pole:?}");
        assert!(pole.x.abs() < 1e-6 && pole.z.abs() < 1e-6);
    }

    #[test]
    fn test_operations_post_multiply_in_order() {
        // translate-then-rotate differs from rotate-then-translate.
        let mut a = TransformStack::new();
        a.translate(Vec3::X);
        a.rotate_y_deg(90.0);

        let mut b = TransformStack::new();
        b.rotate_y_deg(90.0);
        b.translate(Vec3::X);

        let pa = a.current().transform_point3(Vec3::ZERO);
        let pb = b.current().transform_point3(Vec3::ZERO);
        assert!((pa - Vec3::X).length() < 1e-6);
        assert!((pb - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }
}
