use na::Unit;

use crate::body::Body;
use crate::math::{Point, Real, Vector};
use crate::pool::SupportPointPool;
use crate::query::contact::ContactDetails;
use crate::query::epa::Polyhedron;
use crate::query::gjk::{self, find_support, GJKStatus, Simplex};
use crate::utils;

/// Maximum number of polytope expansions before the current closest face is
/// accepted as the answer.
const MAX_ITERATIONS: usize = 20;

/// Squared-length threshold on the gap between a new support point and the
/// current closest point, below which the expansion has converged.
const GAP_TOLERANCE: Real = 1.0e-3;

/// Computes the deepest contact between two convex bodies, or `None` when
/// they do not overlap.
///
/// The overlap decision is made by evolving a GJK simplex in the Minkowski
/// difference of the two bodies. On overlap, the final tetrahedron seeds an
/// expanding polytope whose closest face to the origin converges to the
/// penetration depth and contact normal; the contact point is recovered
/// from the witness points of that face.
///
/// Every support point acquired from `pool` during the query is released
/// before this function returns, whatever the outcome.
pub fn gjk_epa<G1, G2>(
    g1: &G1,
    g2: &G2,
    pool: &mut SupportPointPool,
) -> Option<ContactDetails>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    let mut simplex = Simplex::new(g1, g2);

    loop {
        match simplex.step(pool) {
            GJKStatus::Continue(_) => {}
            GJKStatus::Separated => {
                simplex.free(pool);
                return None;
            }
            GJKStatus::Enclosed => break,
        }
    }

    if simplex.len() < 4 {
        // The search direction collapsed before a tetrahedron was built:
        // the origin lies on the simplex itself and the bodies are exactly
        // touching.
        let contact = touching_contact(&simplex, g1, g2, pool);
        simplex.free(pool);
        return contact;
    }

    let mut poly = Polyhedron::from_simplex(simplex.into_points(), pool);

    for i in 1..=MAX_ITERATIONS {
        if !poly.update_closest_face(pool) {
            log::debug!("Hit unexpected state in EPA: no face admits an origin projection.");
            poly.free(pool);
            return None;
        }

        let dir = if poly.closest_face_distance() < gjk::eps_tol() {
            poly.closest_face_normal().into_inner()
        } else {
            poly.closest_point().coords
        };

        let support = find_support(g1, g2, &dir, pool);
        let gap = (pool.get(support).point - poly.closest_point()).norm_squared();

        if i == MAX_ITERATIONS
            || (gap < GAP_TOLERANCE && poly.closest_face_distance() > gjk::eps_tol())
        {
            pool.release(support);
            let contact = build_contact(&poly, g1, g2, pool);
            poly.free(pool);
            return contact;
        }

        if !poly.add_vertex(support, pool) {
            poly.free(pool);
            return None;
        }
    }

    poly.free(pool);
    None
}

/// Builds the contact output from the polytope's closest face.
fn build_contact<G1, G2>(
    poly: &Polyhedron,
    g1: &G1,
    g2: &G2,
    pool: &SupportPointPool,
) -> Option<ContactDetails>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    let p = poly.closest_point();
    let normal = match Unit::try_new(p.coords, gjk::eps_tol()) {
        Some(normal) => normal,
        // The origin sits on the closest face; fall back to the direction
        // joining the body positions.
        None => fallback_normal(g1, g2),
    };

    let (s0, s1, s2) = poly.closest_face_points(pool);
    let [u, v, w] = utils::barycentric_coordinates(&p, &s0.point, &s1.point, &s2.point);

    if !u.is_finite() || !v.is_finite() || !w.is_finite() {
        log::debug!("Hit unexpected state in EPA: degenerate contact face.");
        return None;
    }

    let world1 = Point::from(s0.witness1.coords * u + s1.witness1.coords * v + s2.witness1.coords * w);
    let world2 = Point::from(s0.witness2.coords * u + s1.witness2.coords * v + s2.witness2.coords * w);

    Some(ContactDetails {
        normal,
        point: na::center(&world1, &world2),
        local_point1: g1.point_to_local(&world1),
        local_point2: g2.point_to_local(&world2),
        penetration_depth: p.coords.norm(),
        restitution: (g1.restitution() + g2.restitution()) / 2.0,
        friction: (g1.friction() + g2.friction()) / 2.0,
    })
}

/// Builds a zero-depth contact for bodies whose surfaces touch without
/// overlapping, from the newest support point of the degenerate simplex.
fn touching_contact<G1, G2>(
    simplex: &Simplex<'_, G1, G2>,
    g1: &G1,
    g2: &G2,
    pool: &SupportPointPool,
) -> Option<ContactDetails>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    let newest = pool.get(*simplex.points().last()?);
    let world1 = newest.witness1;
    let world2 = newest.witness2;

    Some(ContactDetails {
        normal: fallback_normal(g1, g2),
        point: na::center(&world1, &world2),
        local_point1: g1.point_to_local(&world1),
        local_point2: g2.point_to_local(&world2),
        penetration_depth: 0.0,
        restitution: (g1.restitution() + g2.restitution()) / 2.0,
        friction: (g1.friction() + g2.friction()) / 2.0,
    })
}

fn fallback_normal<G1, G2>(g1: &G1, g2: &G2) -> Unit<Vector<Real>>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    Unit::try_new(g2.position() - g1.position(), gjk::eps_tol()).unwrap_or_else(Vector::y_axis)
}
