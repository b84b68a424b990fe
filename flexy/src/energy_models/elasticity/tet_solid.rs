//! Edge-metric elasticity for tetrahedral flex bodies.

use na::{Matrix3, Vector3};

use super::{add_element_gradient, element_energy};
use crate::energy::*;
use crate::objects::solid::TetSolid;
use crate::stencil::Stencil3D;

/// Signed rest volume of a tetrahedron, positive for right-handed vertex
/// ordering.
pub fn ref_volume(x: &[[f64; 3]], verts: &[usize; 4]) -> f64 {
    let p0 = Vector3::from(x[verts[0]]);
    let e1 = Vector3::from(x[verts[1]]) - p0;
    let e2 = Vector3::from(x[verts[2]]) - p0;
    let e3 = Vector3::from(x[verts[3]]) - p0;
    e1.cross(&e2).dot(&e3) / 6.0
}

fn face_normal(x: &[[f64; 3]], verts: &[usize; 4], face: [usize; 3]) -> Vector3<f64> {
    let p0 = Vector3::from(x[verts[face[0]]]);
    let e1 = Vector3::from(x[verts[face[1]]]) - p0;
    let e2 = Vector3::from(x[verts[face[2]]]) - p0;
    e1.cross(&e2)
}

/// Strain basis tensors for the six edges of a tetrahedron.
///
/// The basis for an edge is the symmetrized tensor product of the area
/// normals of the two faces not adjacent to it. This is the 3D version of the
/// construction in Weischedel, "A discrete geometric view on shear-deformable
/// shell models" (remark at the end of section 4.1), and is equivalent to
/// linear finite elements in a coordinate-free formulation.
pub(crate) fn edge_basis(x: &[[f64; 3]], verts: &[usize; 4], volume: f64) -> [Matrix3<f64>; 6] {
    let scale = 1.0 / (36.0 * 2.0 * volume * volume);
    let mut basis = [Matrix3::zeros(); 6];
    for (e, &[fl, fr]) in Stencil3D::EDGE_TO_FACES.iter().enumerate() {
        let nl = face_normal(x, verts, Stencil3D::FACE[fl]);
        let nr = face_normal(x, verts, Stencil3D::FACE[fr]);
        basis[e] = (nl * nr.transpose() + nr * nl.transpose()) * scale;
    }
    basis
}

/// Edge-metric elastic energy summed over all tetrahedra of a solid.
pub struct TetSolidElasticity<'a>(pub &'a TetSolid);

impl Energy for TetSolidElasticity<'_> {
    fn energy(&self, elongation: &[f64]) -> f64 {
        self.0
            .elements()
            .iter()
            .map(|el| element_energy::<6>(&el.edges, &el.metric, elongation))
            .sum()
    }
}

impl EnergyGradient for TetSolidElasticity<'_> {
    fn add_energy_gradient(&self, x: &[[f64; 3]], elongation: &[f64], grad: &mut [[f64; 3]]) {
        debug_assert_eq!(grad.len(), x.len());
        for el in self.0.elements() {
            add_element_gradient::<4, 6>(
                &Stencil3D::EDGE,
                &el.verts,
                &el.edges,
                &el.metric,
                x,
                elongation,
                grad,
            );
        }
    }
}
