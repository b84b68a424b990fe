//! Canonical geometry and force sinks used by the integration tests.

use crate::objects::material::{DeformableProperties, ElasticityParameters, Material};
use crate::scatter::GeneralizedForces;

/*
 * Setup code
 */

pub const SOLID_MATERIAL: Material = Material {
    id: 0,
    properties: DeformableProperties {
        elasticity: ElasticityParameters {
            // Young's modulus 1000, Poisson's ratio 0.3.
            lambda: 576.9230769230769,
            mu: 384.61538461538464,
        },
        damping: 0.0,
    },
};

/// Unit right-angle tetrahedron with right-handed vertex ordering.
pub fn make_one_tet() -> (Vec<[f64; 3]>, Vec<[usize; 4]>) {
    let verts = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    (verts, vec![[0, 1, 2, 3]])
}

/// Regular tetrahedron with unit edge length, centered at the origin.
pub fn make_regular_tet() -> (Vec<[f64; 3]>, Vec<[usize; 4]>) {
    let s = 1.0 / (2.0 * 2.0f64.sqrt());
    let verts = vec![
        [s, s, s],
        [-s, s, -s],
        [s, -s, -s],
        [-s, -s, s],
    ];
    (verts, vec![[0, 1, 2, 3]])
}

/// Two tetrahedra sharing the (0, 1, 2) face.
pub fn make_two_tets() -> (Vec<[f64; 3]>, Vec<[usize; 4]>) {
    let verts = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    (verts, vec![[0, 1, 2, 3], [1, 0, 2, 4]])
}

/// Unit right triangle in the xy plane.
pub fn make_one_triangle() -> (Vec<[f64; 3]>, Vec<[usize; 3]>) {
    let verts = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    (verts, vec![[0, 1, 2]])
}

/// A force accumulator recording everything a flex body scatters into it.
///
/// With the default body layout (one free particle per vertex) the
/// generalized forces are just per-vertex world forces, retrievable with
/// [`ForceRecorder::vertex_force`].
pub struct ForceRecorder {
    pub qfrc: Vec<f64>,
    pub applied: Vec<(usize, [f64; 3], [f64; 3])>,
}

impl ForceRecorder {
    pub fn new(num_dofs: usize) -> Self {
        ForceRecorder {
            qfrc: vec![0.0; num_dofs],
            applied: Vec::new(),
        }
    }

    /// World force on a vertex under the default one-particle-per-vertex
    /// layout.
    pub fn vertex_force(&self, v: usize) -> [f64; 3] {
        [
            self.qfrc[3 * v],
            self.qfrc[3 * v + 1],
            self.qfrc[3 * v + 2],
        ]
    }
}

impl GeneralizedForces for ForceRecorder {
    fn qfrc(&mut self) -> &mut [f64] {
        &mut self.qfrc
    }

    fn apply_force_at(&mut self, body: usize, force: [f64; 3], pos: [f64; 3]) {
        self.applied.push((body, force, pos));
    }
}
