use riposte3d::body::{Body, Collider};
use riposte3d::math::Real;
use riposte3d::na::Isometry3;
use riposte3d::pool::SupportPointPool;
use riposte3d::query::epa::Polyhedron;
use riposte3d::query::gjk::{self, find_support, GJKStatus, Simplex};
use riposte3d::shape::Ball;

fn overlapping_pair() -> (Collider<Ball>, Collider<Ball>) {
    (
        Collider::new(Ball::new(1.0), Isometry3::identity()),
        Collider::new(Ball::new(1.0), Isometry3::translation(1.5, 0.0, 0.0)),
    )
}

fn enclosing_simplex<'a, G1, G2>(
    g1: &'a G1,
    g2: &'a G2,
    pool: &mut SupportPointPool,
) -> Simplex<'a, G1, G2>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    let mut simplex = Simplex::new(g1, g2);
    loop {
        match simplex.step(pool) {
            GJKStatus::Continue(_) => {}
            GJKStatus::Separated => panic!("expected an overlap"),
            GJKStatus::Enclosed => return simplex,
        }
    }
}

#[test]
fn initial_polytope_topology_is_sound() {
    let (a, b) = overlapping_pair();
    let mut pool = SupportPointPool::new();

    let simplex = enclosing_simplex(&a, &b, &mut pool);
    assert_eq!(simplex.len(), 4);

    let poly = Polyhedron::from_simplex(simplex.into_points(), &pool);
    poly.check_topology(&pool);
    assert_eq!(poly.active_face_count(), 4);

    poly.free(&mut pool);
    assert_eq!(pool.live(), 0);
}

#[test]
fn expansion_preserves_topology_and_descends_monotonically() {
    let (a, b) = overlapping_pair();
    let mut pool = SupportPointPool::new();

    let simplex = enclosing_simplex(&a, &b, &mut pool);
    let mut poly = Polyhedron::from_simplex(simplex.into_points(), &pool);

    let mut previous_distance: Real = 0.0;

    for _ in 0..10 {
        assert!(poly.update_closest_face(&pool));
        poly.check_topology(&pool);

        // The squared distance to the closest face never decreases as the
        // polytope grows (up to numerical noise).
        let distance = poly.closest_face_distance();
        assert!(distance >= previous_distance - 1.0e-4);
        previous_distance = distance;

        let dir = if distance < gjk::eps_tol() {
            poly.closest_face_normal().into_inner()
        } else {
            poly.closest_point().coords
        };

        let support = find_support(&a, &b, &dir, &mut pool);
        assert!(poly.add_vertex(support, &pool));
        poly.check_topology(&pool);
    }

    // Ten expansions of two overlapping unit balls bring the closest face
    // close to the true penetration depth of 0.5.
    assert!(poly.update_closest_face(&pool));
    let depth = poly.closest_face_distance().sqrt();
    assert!((depth - 0.5).abs() < 0.05, "depth was {}", depth);

    poly.free(&mut pool);
    assert_eq!(pool.live(), 0);
    assert_eq!(pool.acquired(), pool.released());
}

#[test]
fn separated_simplex_releases_all_points() {
    let a = Collider::new(Ball::new(1.0), Isometry3::identity());
    let b = Collider::new(Ball::new(1.0), Isometry3::translation(5.0, 0.0, 0.0));
    let mut pool = SupportPointPool::new();

    let mut simplex = Simplex::new(&a, &b);
    loop {
        match simplex.step(&mut pool) {
            GJKStatus::Continue(_) => {}
            GJKStatus::Separated => break,
            GJKStatus::Enclosed => panic!("disjoint bodies cannot enclose the origin"),
        }
    }

    simplex.free(&mut pool);
    assert_eq!(pool.live(), 0);
    assert_eq!(pool.acquired(), pool.released());
}
