use riposte3d::body::Collider;
use riposte3d::math::{Real, Vector};
use riposte3d::na::Isometry3;
use riposte3d::pool::SupportPointPool;
use riposte3d::query::gjk_epa;
use riposte3d::shape::Cuboid;

fn unit_cube_at(x: Real) -> Collider<Cuboid> {
    Collider::new(
        Cuboid::new(Vector::new(0.5, 0.5, 0.5)),
        Isometry3::translation(x, 0.0, 0.0),
    )
}

#[test]
fn disjoint_cubes_produce_no_contact() {
    let a = unit_cube_at(0.0);
    let b = unit_cube_at(2.5);

    let mut pool = SupportPointPool::new();
    assert!(gjk_epa(&a, &b, &mut pool).is_none());
    assert_eq!(pool.live(), 0);
}

#[test]
fn face_face_cube_overlap() {
    let a = unit_cube_at(0.0);
    let b = unit_cube_at(0.9);

    let mut pool = SupportPointPool::new();
    let contact = gjk_epa(&a, &b, &mut pool).expect("the cubes overlap");

    assert_eq!(pool.live(), 0);

    // The overlap slab is exactly 0.1 deep and the separating axis is x.
    assert!((contact.penetration_depth - 0.1).abs() < 1.0e-3);
    assert!((contact.normal.x.abs() - 1.0).abs() < 1.0e-3);
    assert!(contact.normal.y.abs() < 1.0e-3);
    assert!(contact.normal.z.abs() < 1.0e-3);

    // The contact point sits in the middle of the overlap slab.
    assert!((contact.point.x - 0.45).abs() < 1.0e-3);
}

#[test]
fn deep_cube_overlap_reports_minimum_translation() {
    let a = unit_cube_at(0.0);
    let b = unit_cube_at(0.25);

    let mut pool = SupportPointPool::new();
    let contact = gjk_epa(&a, &b, &mut pool).expect("the cubes overlap");

    assert_eq!(pool.live(), 0);

    // The shallowest exit is along x: one full extent minus the offset.
    assert!((contact.penetration_depth - 0.75).abs() < 1.0e-2);
    assert!((contact.normal.x.abs() - 1.0).abs() < 1.0e-2);
}
