//! View frustum culling.
//!
//! A [`Frustum`] holds six inward-facing planes extracted from a combined
//! view-projection matrix (Gribb-Hartmann). Tests are conservative: a volume
//! is reported [`Containment::Outside`] only if it lies entirely behind one
//! plane, so anything touching the frustum is kept.
//!
//! # Usage
//!
//! ```rust
//! use zeus_math::{Frustum, Mat4, Sphere, Vec3};
//!
//! let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(1.0, 1.0, 0.1, 100.0);
//!
//! let mut frustum = Frustum::new();
//! frustum.update_planes(&view, &proj);
//!
//! assert!(frustum.sphere_frustum_test(&Sphere::new(Vec3::ZERO, 1.0)));
//! assert!(!frustum.point_frustum_test(Vec3::new(0.0, 0.0, 20.0)));
//! ```

use rayon::prelude::*;
use tracing::trace;

use crate::{AABox, Mat4, Plane, Sphere, Vec3};

/// Result of classifying a volume against a frustum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Containment {
    /// Entirely behind at least one plane.
    Outside,
    /// Crosses at least one plane; may or may not be visible.
    Intersecting,
    /// Entirely in front of every plane.
    Inside,
}

impl Containment {
    /// Returns true unless [`Containment::Outside`].
    #[inline]
    pub fn is_visible(self) -> bool {
        self != Self::Outside
    }
}

/// Index of each plane in [`Frustum::planes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum FrustumPlane {
    /// Left clip plane.
    Left = 0,
    /// Right clip plane.
    Right,
    /// Bottom clip plane.
    Bottom,
    /// Top clip plane.
    Top,
    /// Near clip plane.
    Near,
    /// Far clip plane.
    Far,
}

/// Six clip planes plus a validity flag.
///
/// A frustum that has never been updated rejects everything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    planes: [Plane; 6],
    valid: bool,
}

impl Frustum {
    /// Creates an invalid frustum.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frustum from a view-projection matrix.
    pub fn from_matrix(view_projection: &Mat4) -> Self {
        let mut f = Self::new();
        f.update_planes_from_matrix(view_projection);
        f
    }

    /// Recomputes the planes from a view transform and a projection.
    #[inline]
    pub fn update_planes(&mut self, view: &Mat4, projection: &Mat4) {
        self.update_planes_from_matrix(&(*projection * *view));
    }

    /// Recomputes the planes from a combined view-projection matrix in
    /// OpenGL clip convention (`-w <= z <= w`).
    pub fn update_planes_from_matrix(&mut self, view_projection: &Mat4) {
        let row = |i: usize| view_projection.row(i);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let plane = |a: [f32; 4], b: [f32; 4], sign: f32| {
            Plane::from_coefficients(
                a[0] + sign * b[0],
                a[1] + sign * b[1],
                a[2] + sign * b[2],
                a[3] + sign * b[3],
            )
        };

        self.planes = [
            plane(r3, r0, 1.0),
            plane(r3, r0, -1.0),
            plane(r3, r1, 1.0),
            plane(r3, r1, -1.0),
            plane(r3, r2, 1.0),
            plane(r3, r2, -1.0),
        ];
        self.valid = true;
        trace!(planes = ?self.planes, "Frustum planes updated");
    }

    /// Marks the frustum invalid so every test fails.
    #[inline]
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Returns true once planes have been computed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All six planes, indexed by [`FrustumPlane`].
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// A single plane.
    #[inline]
    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// Classifies an axis-aligned box.
    pub fn classify_aabb(&self, aabb: &AABox) -> Containment {
        if !self.valid {
            return Containment::Outside;
        }

        let mut result = Containment::Inside;
        for plane in &self.planes {
            if plane.signed_distance(aabb.positive_vertex(plane.normal)) < 0.0 {
                return Containment::Outside;
            }
            if plane.signed_distance(aabb.negative_vertex(plane.normal)) < 0.0 {
                result = Containment::Intersecting;
            }
        }
        result
    }

    /// Classifies a sphere.
    pub fn classify_sphere(&self, sphere: &Sphere) -> Containment {
        if !self.valid {
            return Containment::Outside;
        }

        let mut result = Containment::Inside;
        for plane in &self.planes {
            let d = plane.signed_distance(sphere.center);
            if d < -sphere.radius {
                return Containment::Outside;
            }
            if d < sphere.radius {
                result = Containment::Intersecting;
            }
        }
        result
    }

    /// Returns true if the box is at least partly inside.
    #[inline]
    pub fn aabb_frustum_test(&self, aabb: &AABox) -> bool {
        self.classify_aabb(aabb).is_visible()
    }

    /// Returns true if the sphere is at least partly inside.
    #[inline]
    pub fn sphere_frustum_test(&self, sphere: &Sphere) -> bool {
        self.classify_sphere(sphere).is_visible()
    }

    /// Returns true if the point is inside or on the boundary.
    pub fn point_frustum_test(&self, point: Vec3) -> bool {
        self.valid && self.planes.iter().all(|p| p.is_in_front(point))
    }

    /// Indices of the boxes that are not outside, in input order.
    ///
    /// Classification runs in parallel on the rayon pool.
    pub fn cull_aabbs(&self, boxes: &[AABox]) -> Vec<usize> {
        boxes
            .par_iter()
            .enumerate()
            .filter(|(_, b)| self.aabb_frustum_test(b))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the spheres that are not outside, in input order.
    pub fn cull_spheres(&self, spheres: &[Sphere]) -> Vec<usize> {
        spheres
            .par_iter()
            .enumerate()
            .filter(|(_, s)| self.sphere_frustum_test(s))
            .map(|(i, _)| i)
            .collect()
    }
}
