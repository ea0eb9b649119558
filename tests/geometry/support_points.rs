use riposte3d::body::Collider;
use riposte3d::math::{Point, Real, Vector};
use riposte3d::na::Isometry3;
use riposte3d::pool::SupportPointPool;
use riposte3d::query::gjk::{find_support, SupportPoint};
use riposte3d::shape::{Ball, Cuboid, SupportMap};

/// A small fan of probe directions covering all octants and the axes.
fn probe_directions() -> Vec<Vector<Real>> {
    let mut dirs = Vec::new();
    for &x in &[-1.0, 0.0, 1.0] {
        for &y in &[-1.0, 0.0, 1.0] {
            for &z in &[-1.0, 0.0, 1.0] {
                let dir = Vector::new(x, y, z);
                if dir.norm_squared() > 0.0 {
                    dirs.push(dir);
                }
            }
        }
    }
    dirs
}

#[test]
fn cuboid_support_dominates_every_vertex() {
    let cuboid = Cuboid::new(Vector::new(0.5, 1.0, 2.0));

    let mut vertices = Vec::new();
    for &sx in &[-1.0 as Real, 1.0] {
        for &sy in &[-1.0 as Real, 1.0] {
            for &sz in &[-1.0 as Real, 1.0] {
                vertices.push(Point::new(0.5 * sx, 1.0 * sy, 2.0 * sz));
            }
        }
    }

    for dir in probe_directions() {
        let support = cuboid.local_support_point(&dir);
        for vertex in &vertices {
            assert!(
                support.coords.dot(&dir) >= vertex.coords.dot(&dir) - 1.0e-5,
                "support is not extremal in direction {:?}",
                dir
            );
        }
    }
}

#[test]
fn ball_support_lies_on_the_sphere() {
    let ball = Ball::new(1.5);

    for dir in probe_directions() {
        let support = ball.local_support_point(&dir);
        assert_relative_eq!(support.coords.norm(), 1.5, epsilon = 1.0e-5);
        // The support is aligned with the probe direction.
        assert!(support.coords.dot(&dir) > 0.0);
    }
}

#[test]
fn support_points_satisfy_the_minkowski_identity() {
    let a = Collider::new(Ball::new(1.0), Isometry3::translation(0.3, -0.2, 0.5));
    let b = Collider::new(
        Cuboid::new(Vector::new(0.5, 0.5, 0.5)),
        Isometry3::translation(-0.4, 0.8, 0.0),
    );

    let mut pool = SupportPointPool::new();

    for dir in probe_directions() {
        let id = find_support(&a, &b, &dir, &mut pool);
        let support = *pool.get(id);

        assert_relative_eq!(
            support.point,
            Point::from(support.witness1 - support.witness2),
            epsilon = 1.0e-6
        );

        pool.release(id);
    }

    assert_eq!(pool.live(), 0);
    assert_eq!(pool.acquired(), pool.released());
}

#[test]
fn pooled_support_points_reuse_slots() {
    let mut pool = SupportPointPool::new();

    let first = pool.acquire(SupportPoint::origin());
    pool.release(first);

    // A warmed-up pool satisfies new acquisitions from its free list.
    let second = pool.acquire(SupportPoint::new(
        Point::new(1.0, 0.0, 0.0),
        Point::origin(),
    ));
    assert!(pool.contains(second));
    assert_eq!(pool.live(), 1);

    pool.release(second);
    assert_eq!(pool.live(), 0);
}
