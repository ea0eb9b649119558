use smallvec::SmallVec;

use na::Unit;

use crate::body::Body;
use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::pool::{SupportPointId, SupportPointPool};
use crate::query::gjk::{self, find_support};

/// Maximum number of support points probed before the bodies are declared
/// separated.
const MAX_ITERATIONS: usize = 20;

/// The outcome of one step of the GJK simplex evolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GJKStatus {
    /// A new support point was added to the simplex; the caller should keep
    /// stepping.
    Continue(SupportPointId),
    /// The Minkowski difference provably excludes the origin: the bodies do
    /// not overlap.
    Separated,
    /// The simplex contains the origin. When the simplex is a full
    /// tetrahedron this seeds the EPA refinement; with fewer points the
    /// origin lies on the simplex itself and the bodies are exactly
    /// touching.
    Enclosed,
}

/// The simplex evolved by the GJK overlap test.
///
/// The simplex holds between one and four support points of the Minkowski
/// difference of the two bodies. Each [`step`](Simplex::step) probes the
/// difference in the current search direction, then shrinks the simplex to
/// the smallest feature whose Voronoi region contains the origin and picks
/// the next direction. The newest point is always last in `points`.
pub struct Simplex<'a, G1: ?Sized, G2: ?Sized> {
    body1: &'a G1,
    body2: &'a G2,
    points: SmallVec<[SupportPointId; 4]>,
    next_direction: Vector<Real>,
    iterations: usize,
}

enum TriangleRegion {
    EdgeAb,
    EdgeAc,
    VertexA,
    FrontFace,
    BackFace,
}

impl<'a, G1, G2> Simplex<'a, G1, G2>
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    /// Creates an empty simplex for the given pair of bodies.
    ///
    /// The first search direction joins the two body positions; when the
    /// positions coincide, any axis works.
    pub fn new(body1: &'a G1, body2: &'a G2) -> Self {
        let next_direction = Unit::try_new(body2.position() - body1.position(), DEFAULT_EPSILON)
            .map(|dir| dir.into_inner())
            .unwrap_or_else(Vector::x);

        Simplex {
            body1,
            body2,
            points: SmallVec::new(),
            next_direction,
            iterations: 0,
        }
    }

    /// The number of support points currently on the simplex.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the simplex holds no support point yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The support points currently on the simplex, oldest first.
    pub fn points(&self) -> &[SupportPointId] {
        &self.points
    }

    /// Consumes the simplex, transferring ownership of its support points
    /// to the caller.
    pub fn into_points(self) -> SmallVec<[SupportPointId; 4]> {
        self.points
    }

    /// Releases every support point still owned by the simplex.
    pub fn free(mut self, pool: &mut SupportPointPool) {
        for id in self.points.drain(..) {
            pool.release(id);
        }
    }

    /// Grows the simplex by one support point and updates the search
    /// direction.
    pub fn step(&mut self, pool: &mut SupportPointPool) -> GJKStatus {
        if self.iterations >= MAX_ITERATIONS {
            return GJKStatus::Separated;
        }
        self.iterations += 1;

        let id = find_support(self.body1, self.body2, &self.next_direction, pool);
        let point = pool.get(id).point;
        self.points.push(id);

        // The farthest reachable point failed to cross the origin: there is
        // a separating plane orthogonal to the search direction.
        if point.coords.dot(&self.next_direction) < 0.0 {
            return GJKStatus::Separated;
        }

        if self.update_direction(pool) {
            return GJKStatus::Enclosed;
        }

        // A vanishing search direction means the origin lies on the simplex
        // feature found above; treat it as an enclosure so the caller can
        // emit a touching contact.
        if self.next_direction.norm_squared() <= gjk::eps_tol() * gjk::eps_tol() {
            return GJKStatus::Enclosed;
        }

        GJKStatus::Continue(id)
    }

    /// Shrinks the simplex to the feature nearest the origin and picks the
    /// next search direction. Returns `true` when the simplex is a
    /// tetrahedron containing the origin.
    fn update_direction(&mut self, pool: &mut SupportPointPool) -> bool {
        match self.points.len() {
            1 => {
                self.next_direction = -pool.get(self.points[0]).point.coords;
                false
            }
            2 => {
                self.find_from_line(pool);
                false
            }
            3 => {
                self.find_from_triangle(pool);
                false
            }
            _ => self.find_from_tetrahedron(pool),
        }
    }

    fn find_from_line(&mut self, pool: &mut SupportPointPool) {
        let a = pool.get(self.points[1]).point;
        let b = pool.get(self.points[0]).point;

        let ab = b - a;
        let ao = -a.coords;

        if ab.dot(&ao) < 0.0 {
            // The origin is in the Voronoi region of the newest vertex.
            let dropped = self.points.remove(0);
            pool.release(dropped);
            self.next_direction = ao;
        } else {
            let dir = ab.cross(&ao).cross(&ab);

            if dir.norm_squared() > DEFAULT_EPSILON {
                self.next_direction = dir;
            } else {
                // `ao` is parallel to the segment; any direction orthogonal
                // to it works.
                Vector::orthonormal_subspace_basis(&[ab], |dir| {
                    self.next_direction = *dir;
                    false
                });
            }
        }
    }

    fn find_from_triangle(&mut self, pool: &mut SupportPointPool) {
        let a = pool.get(self.points[2]).point;
        let b = pool.get(self.points[1]).point;
        let c = pool.get(self.points[0]).point;

        let ao = -a.coords;
        let ab = b - a;
        let ac = c - a;
        let n = ab.cross(&ac);
        let e_ab = ab.cross(&n);
        let e_ac = n.cross(&ac);

        let dot_e_ab = e_ab.dot(&ao);
        let dot_e_ac = e_ac.dot(&ao);
        let dot_ab = ab.dot(&ao);
        let dot_ac = ac.dot(&ao);

        let region = if dot_e_ac >= 0.0 {
            if dot_ac >= 0.0 {
                TriangleRegion::EdgeAc
            } else if dot_ab >= 0.0 {
                TriangleRegion::EdgeAb
            } else {
                TriangleRegion::VertexA
            }
        } else if dot_e_ab >= 0.0 {
            if dot_ab >= 0.0 {
                TriangleRegion::EdgeAb
            } else {
                TriangleRegion::VertexA
            }
        } else if n.dot(&ao) >= 0.0 {
            TriangleRegion::FrontFace
        } else {
            TriangleRegion::BackFace
        };

        match region {
            TriangleRegion::EdgeAc => {
                let dropped = self.points.remove(1);
                pool.release(dropped);
                self.next_direction = ac.cross(&ao).cross(&ac);
            }
            TriangleRegion::EdgeAb => {
                let dropped = self.points.remove(0);
                pool.release(dropped);
                self.next_direction = ab.cross(&ao).cross(&ab);
            }
            TriangleRegion::VertexA => {
                let dropped = self.points.remove(0);
                pool.release(dropped);
                let dropped = self.points.remove(0);
                pool.release(dropped);
                self.next_direction = ao;
            }
            TriangleRegion::FrontFace => {
                self.points.reverse();
                self.next_direction = n;
            }
            TriangleRegion::BackFace => {
                // The winding is deliberately kept as-is so the tetrahedron
                // case sees a consistent orientation.
                self.points.reverse();
                self.next_direction = -n;
            }
        }
    }

    fn find_from_tetrahedron(&mut self, pool: &mut SupportPointPool) -> bool {
        // Candidate faces, each listed with the slot of the vertex it
        // leaves out. Slot 3 holds the newest point.
        const FACES: [([usize; 3], usize); 4] = [
            ([2, 1, 0], 3),
            ([3, 1, 2], 0),
            ([1, 3, 0], 2),
            ([0, 3, 2], 1),
        ];

        let mut best: Option<(Real, [usize; 3], usize, Vector<Real>)> = None;

        for (slots, excluded) in FACES {
            let p0 = pool.get(self.points[slots[0]]).point;
            let p1 = pool.get(self.points[slots[1]]).point;
            let p2 = pool.get(self.points[slots[2]]).point;

            let normal = match Unit::try_new((p1 - p0).cross(&(p2 - p0)), DEFAULT_EPSILON) {
                Some(normal) => normal,
                None => continue,
            };
            let toward_origin =
                match Unit::try_new(-(p0.coords + p1.coords + p2.coords), DEFAULT_EPSILON) {
                    Some(dir) => dir,
                    None => continue,
                };

            let score = normal.dot(&toward_origin);
            if score > gjk::eps_tol() && best.is_none_or(|(prev, ..)| score > prev) {
                best = Some((score, slots, excluded, normal.into_inner()));
            }
        }

        match best {
            // The origin is behind every face of the tetrahedron.
            None => true,
            Some((_, slots, excluded, normal)) => {
                let kept = [
                    self.points[slots[0]],
                    self.points[slots[1]],
                    self.points[slots[2]],
                ];
                pool.release(self.points[excluded]);

                self.points.clear();
                self.points.extend_from_slice(&kept);
                self.next_direction = normal;
                false
            }
        }
    }
}
