//! Benchmarks for zeus-rs.
//!
//! The benchmarks live in `benches/`; run them with `cargo bench -p zeus-bench`.
//! This library only holds the shared input generators.

use zeus_math::{AABox, Mat4, Quat, Vec3};

/// `n` quaternions spread over several axes and angles, normalized.
pub fn sample_quats(n: usize) -> Vec<Quat> {
    (0..n)
        .map(|i| {
            let t = i as f32 * 0.618;
            let axis = Vec3::new(t.sin(), t.cos(), (t * 0.5).sin()).normalize();
            Quat::from_axis_angle(axis, t)
        })
        .collect()
}

/// `n` deterministic 4x4 matrices.
pub fn sample_matrices(n: usize) -> Vec<Mat4> {
    (0..n)
        .map(|i| {
            let mut cols = [[0.0; 4]; 4];
            for (c, col) in cols.iter_mut().enumerate() {
                for (r, v) in col.iter_mut().enumerate() {
                    *v = ((i * 16 + c * 4 + r) as f32 * 0.37).sin();
                }
            }
            Mat4::from_cols(cols)
        })
        .collect()
}

/// `n` unit boxes on a grid around the origin.
pub fn sample_boxes(n: usize) -> Vec<AABox> {
    let side = (n as f32).cbrt().ceil().max(1.0) as usize;
    (0..n)
        .map(|i| {
            let (x, y, z) = (i % side, (i / side) % side, i / (side * side));
            let center = Vec3::new(x as f32, y as f32, z as f32) * 4.0 - Vec3::splat(side as f32 * 2.0);
            AABox::from_center(center, Vec3::splat(0.5))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators() {
        assert_eq!(sample_quats(10).len(), 10);
        assert!(sample_quats(10).iter().all(|q| (q.magnitude() - 1.0).abs() < 1e-5));
        assert_eq!(sample_matrices(3).len(), 3);
        assert_eq!(sample_boxes(27).len(), 27);
    }
}
