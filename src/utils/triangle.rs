use crate::math::{Point, Real};

/// Projects the origin onto the triangle `(a, b, c)`.
///
/// The projection is exact: the origin is first projected onto the
/// triangle's plane, then clamped to the nearest edge or vertex when the
/// plane projection falls outside the triangle. The region tests follow the
/// usual Voronoi-region decomposition of a triangle.
pub fn project_origin_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Point<Real> {
    let ab = b - a;
    let ac = c - a;
    let ao = -a.coords;

    let d1 = ab.dot(&ao);
    let d2 = ac.dot(&ao);
    if d1 <= 0.0 && d2 <= 0.0 {
        return *a;
    }

    let bo = -b.coords;
    let d3 = ab.dot(&bo);
    let d4 = ac.dot(&bo);
    if d3 >= 0.0 && d4 <= d3 {
        return *b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    let co = -c.coords;
    let d5 = ab.dot(&co);
    let d6 = ac.dot(&co);
    if d6 >= 0.0 && d5 <= d6 {
        return *c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Computes the barycentric coordinates of `p` with respect to the triangle
/// `(a, b, c)`.
///
/// The coordinates are returned as `[u, v, w]` with `p = u·a + v·b + w·c`.
/// For a degenerate triangle the result is non-finite; callers are expected
/// to check.
pub fn barycentric_coordinates(
    p: &Point<Real>,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> [Real; 3] {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;

    [1.0 - v - w, v, w]
}
