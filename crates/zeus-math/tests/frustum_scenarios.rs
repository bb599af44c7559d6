//! Frustum culling against a real camera.

use zeus_math::{AABox, Containment, Frustum, FrustumPlane, Mat4, Sphere, Vec3};

const NEAR: f32 = 0.5;
const FAR: f32 = 100.0;

/// Camera at (0, 0, 10) looking at the origin, 90 degree square FOV.
fn camera() -> Frustum {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(std::f32::consts::FRAC_PI_2, 1.0, NEAR, FAR);
    let mut frustum = Frustum::new();
    frustum.update_planes(&view, &proj);
    frustum
}

#[test]
fn planes_face_inward() {
    let f = camera();
    let center = Vec3::new(0.0, 0.0, -10.0);
    for plane in f.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        assert!(plane.signed_distance(center) > 0.0);
    }
}

#[test]
fn near_and_far_distances() {
    let f = camera();
    let near = f.plane(FrustumPlane::Near);
    let far = f.plane(FrustumPlane::Far);
    // Camera sits at z = 10 looking down -z
    assert!(near.signed_distance(Vec3::new(0.0, 0.0, 10.0 - NEAR)).abs() < 1e-3);
    assert!(far.signed_distance(Vec3::new(0.0, 0.0, 10.0 - FAR)).abs() < 1e-2);
}

#[test]
fn points_in_front_and_behind() {
    let f = camera();
    assert!(f.point_frustum_test(Vec3::ZERO));
    assert!(f.point_frustum_test(Vec3::new(3.0, -3.0, -20.0)));
    // Behind the camera
    assert!(!f.point_frustum_test(Vec3::new(0.0, 0.0, 12.0)));
    // Between camera and near plane
    assert!(!f.point_frustum_test(Vec3::new(0.0, 0.0, 9.8)));
    // Beyond far plane
    assert!(!f.point_frustum_test(Vec3::new(0.0, 0.0, -95.0)));
    // Outside the 45 degree half-angle at distance 10
    assert!(!f.point_frustum_test(Vec3::new(11.0, 0.0, 0.0)));
    assert!(f.point_frustum_test(Vec3::new(9.0, 0.0, 0.0)));
}

#[test]
fn spheres() {
    let f = camera();
    assert_eq!(f.classify_sphere(&Sphere::new(Vec3::ZERO, 1.0)), Containment::Inside);
    assert_eq!(
        f.classify_sphere(&Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0)),
        Containment::Intersecting
    );
    assert_eq!(
        f.classify_sphere(&Sphere::new(Vec3::new(0.0, 0.0, 20.0), 1.0)),
        Containment::Outside
    );
    assert_eq!(
        f.classify_sphere(&Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0)),
        Containment::Intersecting
    );
}

#[test]
fn straddling_boxes_never_outside() {
    let f = camera();
    let straddlers = [
        // Across the right plane at distance 10
        AABox::from_center(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(1.0)),
        // Across the near plane
        AABox::from_center(Vec3::new(0.0, 0.0, 9.5), Vec3::splat(0.5)),
        // Across the far plane
        AABox::from_center(Vec3::new(0.0, 0.0, -90.0), Vec3::splat(2.0)),
        // Enclosing the whole frustum
        AABox::from_center(Vec3::ZERO, Vec3::splat(500.0)),
    ];
    for b in &straddlers {
        assert_eq!(f.classify_aabb(b), Containment::Intersecting, "{b:?}");
        assert!(f.aabb_frustum_test(b));
    }
}

#[test]
fn boxes_inside_and_outside() {
    let f = camera();
    assert_eq!(
        f.classify_aabb(&AABox::from_center(Vec3::ZERO, Vec3::splat(1.0))),
        Containment::Inside
    );
    assert_eq!(
        f.classify_aabb(&AABox::from_center(Vec3::new(0.0, 0.0, 30.0), Vec3::splat(1.0))),
        Containment::Outside
    );
    assert_eq!(
        f.classify_aabb(&AABox::from_center(Vec3::new(0.0, 40.0, 0.0), Vec3::splat(1.0))),
        Containment::Outside
    );
}

#[test]
fn batch_culling_matches_single_tests() {
    let f = camera();
    let mut boxes = Vec::new();
    let mut spheres = Vec::new();
    for x in -10..10 {
        for z in -10..10 {
            let center = Vec3::new(x as f32 * 3.0, 0.0, z as f32 * 6.0);
            boxes.push(AABox::from_center(center, Vec3::splat(0.75)));
            spheres.push(Sphere::new(center, 0.75));
        }
    }

    let visible = f.cull_aabbs(&boxes);
    let expected: Vec<usize> = (0..boxes.len()).filter(|&i| f.aabb_frustum_test(&boxes[i])).collect();
    assert_eq!(visible, expected);
    assert!(!visible.is_empty() && visible.len() < boxes.len());

    let visible = f.cull_spheres(&spheres);
    let expected: Vec<usize> = (0..spheres.len()).filter(|&i| f.sphere_frustum_test(&spheres[i])).collect();
    assert_eq!(visible, expected);
}

#[test]
fn matrix_and_pair_updates_agree() {
    let view = Mat4::look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    let proj = Mat4::perspective(0.8, 1.6, 0.1, 50.0);

    let mut from_pair = Frustum::new();
    from_pair.update_planes(&view, &proj);
    let from_matrix = Frustum::from_matrix(&(proj * view));
    assert_eq!(from_pair, from_matrix);
}

#[test]
fn stale_frustum_after_invalidate() {
    let mut f = camera();
    assert!(f.point_frustum_test(Vec3::ZERO));
    f.invalidate();
    assert!(!f.is_valid());
    assert!(!f.point_frustum_test(Vec3::ZERO));
    assert!(!f.aabb_frustum_test(&AABox::from_center(Vec3::ZERO, Vec3::ONE)));
    assert!(f.cull_spheres(&[Sphere::new(Vec3::ZERO, 1.0)]).is_empty());
}
