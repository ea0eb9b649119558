use num::Bounded;
use smallvec::SmallVec;

use na::Unit;

use crate::math::{Point, Real, UnitVector};
use crate::pool::{SupportPointId, SupportPointPool};
use crate::query::gjk::{self, SupportPoint};
use crate::utils;

/// An oriented triangular face of the expanding polytope.
///
/// A face references its three vertices by index into the polytope's vertex
/// slab. Each edge cross-references the face sharing it: `adj[0]` shares
/// the edge `(a, b)`, `adj[1]` shares `(b, c)` and `adj[2]` shares
/// `(c, a)`.
#[derive(Clone, Debug)]
pub struct Face {
    pts: [usize; 3],
    adj: [usize; 3],
    normal: UnitVector<Real>,
    deleted: bool,
}

impl Face {
    fn new(
        vertices: &[SupportPointId],
        pool: &SupportPointPool,
        pts: [usize; 3],
        adj: [usize; 3],
    ) -> Self {
        let p0 = pool.get(vertices[pts[0]]).point;
        let p1 = pool.get(vertices[pts[1]]).point;
        let p2 = pool.get(vertices[pts[2]]).point;

        // Degenerate faces get a zero normal: they never appear visible and
        // are skipped by the silhouette traversal.
        let normal = utils::ccw_face_normal([&p0, &p1, &p2])
            .unwrap_or_else(|| Unit::new_unchecked(na::zero()));

        Face {
            pts,
            adj,
            normal,
            deleted: false,
        }
    }

    /// The unit outward normal of this face (zero for degenerate faces).
    pub fn normal(&self) -> UnitVector<Real> {
        self.normal
    }

    /// Whether this face has been carved out of the polytope.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// The signed distance from this face's plane to `point`, positive on
    /// the outside.
    fn classify(
        &self,
        vertices: &[SupportPointId],
        pool: &SupportPointPool,
        point: &Point<Real>,
    ) -> Real {
        let a = pool.get(vertices[self.pts[0]]).point;
        self.normal.dot(&(point - a))
    }
}

/// One edge of the horizon produced by a silhouette traversal.
///
/// The edge runs `start -> end` in the winding of `face`, the face left
/// active on the horizon; `slot` is the adjacency slot of `face` that held
/// the carved face.
#[derive(Copy, Clone, Debug)]
struct HorizonEdge {
    face: usize,
    slot: usize,
    start: usize,
    end: usize,
}

/// The expanding polytope refined by EPA.
///
/// The polytope interns every support point it is given into a vertex slab
/// and keeps all faces ever created; carved faces are only marked deleted
/// so indices stay stable. The set of non-deleted faces is always a closed,
/// outward-oriented triangulation enclosing the origin.
pub struct Polyhedron {
    vertices: Vec<SupportPointId>,
    faces: Vec<Face>,
    silhouette: Vec<HorizonEdge>,
    closest_face: usize,
    closest_distance: Real,
    closest_point: Point<Real>,
}

impl Polyhedron {
    /// Builds the initial tetrahedral polytope from the four support points
    /// of a GJK simplex that encloses the origin.
    pub fn from_simplex(
        points: SmallVec<[SupportPointId; 4]>,
        pool: &SupportPointPool,
    ) -> Polyhedron {
        debug_assert_eq!(points.len(), 4);
        let mut vertices: Vec<SupportPointId> = points.into_vec();

        let p0 = pool.get(vertices[0]).point;
        let p1 = pool.get(vertices[1]).point;
        let p2 = pool.get(vertices[2]).point;
        let p3 = pool.get(vertices[3]).point;

        // Canonicalize the tetrahedron orientation so the fixed face table
        // below is outward-oriented.
        if (p1 - p0).cross(&(p2 - p0)).dot(&(p3 - p0)) > 0.0 {
            vertices.swap(1, 2);
        }

        const PTS: [[usize; 3]; 4] = [[0, 1, 2], [1, 3, 2], [0, 2, 3], [0, 3, 1]];
        const ADJ: [[usize; 3]; 4] = [[3, 1, 2], [3, 2, 0], [0, 1, 3], [2, 1, 0]];

        let faces = PTS
            .iter()
            .zip(ADJ.iter())
            .map(|(pts, adj)| Face::new(&vertices, pool, *pts, *adj))
            .collect();

        Polyhedron {
            vertices,
            faces,
            silhouette: Vec::new(),
            closest_face: 0,
            closest_distance: Real::max_value(),
            closest_point: Point::origin(),
        }
    }

    /// The squared distance from the origin to the closest face, as
    /// computed by the last call to
    /// [`update_closest_face`](Polyhedron::update_closest_face).
    pub fn closest_face_distance(&self) -> Real {
        self.closest_distance
    }

    /// The point of the closest face nearest the origin.
    pub fn closest_point(&self) -> Point<Real> {
        self.closest_point
    }

    /// The outward normal of the closest face.
    pub fn closest_face_normal(&self) -> UnitVector<Real> {
        self.faces[self.closest_face].normal
    }

    /// The three support points of the closest face.
    pub fn closest_face_points<'a>(
        &self,
        pool: &'a SupportPointPool,
    ) -> (&'a SupportPoint, &'a SupportPoint, &'a SupportPoint) {
        let face = &self.faces[self.closest_face];
        (
            pool.get(self.vertices[face.pts[0]]),
            pool.get(self.vertices[face.pts[1]]),
            pool.get(self.vertices[face.pts[2]]),
        )
    }

    /// The number of faces not yet carved out of the polytope.
    pub fn active_face_count(&self) -> usize {
        self.faces.iter().filter(|face| !face.deleted).count()
    }

    /// Scans the active faces for the one closest to the origin, projecting
    /// the origin on each face's triangle.
    ///
    /// Returns `false` when no active face admits a finite projection.
    pub fn update_closest_face(&mut self, pool: &SupportPointPool) -> bool {
        self.closest_distance = Real::max_value();
        let mut found = false;

        for (i, face) in self.faces.iter().enumerate() {
            if face.deleted {
                continue;
            }

            let a = pool.get(self.vertices[face.pts[0]]).point;
            let b = pool.get(self.vertices[face.pts[1]]).point;
            let c = pool.get(self.vertices[face.pts[2]]).point;

            let proj = utils::project_origin_on_triangle(&a, &b, &c);
            let dist = proj.coords.norm_squared();

            if dist < self.closest_distance {
                self.closest_face = i;
                self.closest_distance = dist;
                self.closest_point = proj;
                found = true;
            }
        }

        found
    }

    /// Expands the polytope with the support point `id`.
    ///
    /// The faces visible from the new point are carved out, and the horizon
    /// left behind is stitched to the new point with a fan of fresh faces.
    /// Ownership of `id` transfers to the polytope in all cases. Returns
    /// `false` when the horizon does not form a single closed loop, which
    /// means the expansion failed and the whole query must be rejected.
    pub fn add_vertex(&mut self, id: SupportPointId, pool: &SupportPointPool) -> bool {
        let point = pool.get(id).point;
        let vid = self.vertices.len();
        self.vertices.push(id);

        let start = self.closest_face;
        if self.faces[start].deleted
            || self.faces[start].classify(&self.vertices, pool, &point) <= 0.0
        {
            // The new point does not see the closest face: the polytope
            // cannot expand in this direction.
            return true;
        }

        self.silhouette.clear();
        self.carve_silhouette(start, &point, None, pool);

        if self.silhouette.is_empty() {
            log::debug!("Hit unexpected state in EPA: the silhouette is empty.");
            return false;
        }

        if !self.sort_silhouette() {
            log::debug!("Hit unexpected state in EPA: the horizon is not a single closed loop.");
            return false;
        }

        let count = self.silhouette.len();
        let first_new = self.faces.len();

        for k in 0..count {
            let edge = self.silhouette[k];
            let new_id = first_new + k;
            let prev = first_new + (k + count - 1) % count;
            let next = first_new + (k + 1) % count;

            // The horizon winding makes (start, vid, end) outward.
            let face = Face::new(
                &self.vertices,
                pool,
                [edge.start, vid, edge.end],
                [prev, next, edge.face],
            );

            self.faces[edge.face].adj[edge.slot] = new_id;
            self.faces.push(face);
        }

        true
    }

    /// Recursively carves every face visible from `point`, collecting the
    /// horizon edges left on the boundary of the carved region.
    fn carve_silhouette(
        &mut self,
        id: usize,
        point: &Point<Real>,
        source: Option<usize>,
        pool: &SupportPointPool,
    ) {
        if self.faces[id].deleted {
            return;
        }

        if self.faces[id].classify(&self.vertices, pool, point) > 0.0 {
            self.faces[id].deleted = true;

            let adj = self.faces[id].adj;
            for neighbor in adj {
                self.carve_silhouette(neighbor, point, Some(id), pool);
            }
        } else if let Some(source) = source {
            // This face is on the horizon: record the edge it shares with
            // the carved face.
            let face = &self.faces[id];
            if let Some(slot) = face.adj.iter().position(|&adj| adj == source) {
                let start = face.pts[slot];
                let end = face.pts[(slot + 1) % 3];
                self.silhouette.push(HorizonEdge {
                    face: id,
                    slot,
                    start,
                    end,
                });
            }
        }
    }

    /// Rotates the silhouette edges into a single cycle where each edge
    /// starts where the previous one ended. Returns `false` when the edges
    /// do not chain into one closed loop.
    fn sort_silhouette(&mut self) -> bool {
        let count = self.silhouette.len();

        for i in 1..count {
            let wanted = self.silhouette[i - 1].end;

            if self.silhouette[i].start != wanted {
                let found = (i + 1..count).find(|&j| self.silhouette[j].start == wanted);
                match found {
                    Some(j) => self.silhouette.swap(i, j),
                    None => return false,
                }
            }
        }

        self.silhouette[0].start == self.silhouette[count - 1].end
    }

    /// Releases every support point interned by the polytope.
    ///
    /// Vertices shared by several faces are stored once in the slab, so
    /// each is released exactly once.
    pub fn free(mut self, pool: &mut SupportPointPool) {
        for id in self.vertices.drain(..) {
            pool.release(id);
        }
    }

    /// Checks the structural invariants of the polytope.
    ///
    /// Every active face must have three distinct vertices, active
    /// neighbors reciprocating its adjacency through the shared edge, and
    /// an outward normal. This is a debugging and testing aid; it panics on
    /// the first violation.
    pub fn check_topology(&self, pool: &SupportPointPool) {
        for i in 0..self.faces.len() {
            let face = &self.faces[i];
            if face.deleted {
                continue;
            }

            assert!(face.pts[0] != face.pts[1]);
            assert!(face.pts[0] != face.pts[2]);
            assert!(face.pts[1] != face.pts[2]);

            for slot in 0..3 {
                let start = face.pts[slot];
                let end = face.pts[(slot + 1) % 3];

                let neighbor = &self.faces[face.adj[slot]];
                assert!(!neighbor.deleted);

                // The neighbor holds the same edge, reversed.
                let twin = (0..3).find(|&s| {
                    neighbor.pts[s] == end && neighbor.pts[(s + 1) % 3] == start
                });
                let twin = twin.expect("adjacent faces do not share the expected edge");
                assert_eq!(neighbor.adj[twin], i);
            }

            if face.normal.norm_squared() > 0.0 {
                let a = pool.get(self.vertices[face.pts[0]]).point;
                assert!(
                    face.normal.dot(&a.coords) >= -gjk::eps_tol(),
                    "face normal points inward"
                );
            }
        }
    }
}
