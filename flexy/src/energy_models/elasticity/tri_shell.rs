//! Edge-metric elasticity for triangle membrane flex bodies.

use na::{Matrix3, Vector3};

use super::{add_element_gradient, element_energy};
use crate::energy::*;
use crate::objects::shell::TriShell;
use crate::stencil::Stencil2D;

/// Rest area of a triangle.
pub fn ref_area(x: &[[f64; 3]], verts: &[usize; 3]) -> f64 {
    let p0 = Vector3::from(x[verts[0]]);
    let e1 = Vector3::from(x[verts[1]]) - p0;
    let e2 = Vector3::from(x[verts[2]]) - p0;
    e1.cross(&e2).norm() / 2.0
}

/// Strain basis tensors for the three edges of a triangle.
///
/// The in-plane analog of the tetrahedral face-normal construction: the basis
/// for an edge is the symmetrized tensor product of the two opposite-edge
/// vectors rotated a quarter turn about the triangle normal, one for each of
/// the edge's endpoint vertices. Out-of-plane displacements do not change
/// edge lengths to first order, so the tensors live in the triangle plane.
pub(crate) fn edge_basis(x: &[[f64; 3]], verts: &[usize; 3], area: f64) -> [Matrix3<f64>; 3] {
    let p0 = Vector3::from(x[verts[0]]);
    let normal = (Vector3::from(x[verts[1]]) - p0)
        .cross(&(Vector3::from(x[verts[2]]) - p0))
        .normalize();

    // In-plane normal of the edge opposite each vertex.
    let mut rotated = [Vector3::zeros(); 3];
    for (k, &[a, b]) in Stencil2D::EDGE.iter().enumerate() {
        let edge = Vector3::from(x[verts[b]]) - Vector3::from(x[verts[a]]);
        rotated[k] = normal.cross(&edge);
    }

    let scale = 1.0 / (4.0 * 2.0 * area * area);
    let mut basis = [Matrix3::zeros(); 3];
    for (e, &[a, b]) in Stencil2D::EDGE.iter().enumerate() {
        let (ta, tb) = (rotated[a], rotated[b]);
        basis[e] = (ta * tb.transpose() + tb * ta.transpose()) * scale;
    }
    basis
}

/// Edge-metric elastic energy summed over all triangles of a shell.
pub struct TriShellElasticity<'a>(pub &'a TriShell);

impl Energy for TriShellElasticity<'_> {
    fn energy(&self, elongation: &[f64]) -> f64 {
        self.0
            .elements()
            .iter()
            .map(|el| element_energy::<3>(&el.edges, &el.metric, elongation))
            .sum()
    }
}

impl EnergyGradient for TriShellElasticity<'_> {
    fn add_energy_gradient(&self, x: &[[f64; 3]], elongation: &[f64], grad: &mut [[f64; 3]]) {
        debug_assert_eq!(grad.len(), x.len());
        for el in self.0.elements() {
            add_element_gradient::<3, 3>(
                &Stencil2D::EDGE,
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_triangle_area() {
        let x = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert_relative_eq!(ref_area(&x, &[0, 1, 2]), 0.5);
    }

    /// The basis tensors have no out-of-plane components for a flat triangle.
    #[test]
    fn basis_is_in_plane() {
        let x = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let verts = [0, 1, 2];
        let area = ref_area(&x, &verts);
        for b in edge_basis(&x, &verts, area).iter() {
            for i in 0..3 {
                assert_relative_eq!(b[(i, 2)], 0.0);
                assert_relative_eq!(b[(2, i)], 0.0);
            }
        }
    }
}
