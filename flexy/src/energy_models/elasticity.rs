//! Edge-metric elasticity models.
//!
//! Each element carries a precomputed symmetric metric tensor over its edges.
//! The elastic energy is the quadratic form `¼ εᵀ M ε` in the per-edge
//! elongations `ε`, so the per-step force is a bilinear contraction of the
//! metric with the elongations and the squared-length gradients. Notice that
//! if the metric were `diag(1/reference)` this would reduce to a mass-spring
//! model; the metric built from the strain basis instead reproduces linear
//! finite elements.

use na::{Matrix3, Vector3};

pub mod tet_solid;
pub mod tri_shell;

pub use tet_solid::{ref_volume, TetSolidElasticity};
pub use tri_shell::{ref_area, TriShellElasticity};

/// This trait defines an accessor for an elastic energy model. Elastic bodies
/// implement this trait to have a unified method for getting their model.
pub trait Elasticity<'a, E> {
    fn elasticity(&'a self) -> E;
}

/// Index of entry `(i, j)` with `i ≤ j` in the packed upper-triangular
/// row-major representation of a symmetric `E×E` matrix:
/// `idx(i, j) = i(2E − i + 1)/2 + (j − i)`.
#[inline]
pub fn packed_index<const E: usize>(i: usize, j: usize) -> usize {
    debug_assert!(i <= j && j < E);
    i * (2 * E - i + 1) / 2 + (j - i)
}

#[inline]
pub(crate) fn metric_entry<const E: usize>(metric: &[f64], i: usize, j: usize) -> f64 {
    let (i, j) = if i <= j { (i, j) } else { (j, i) };
    metric[packed_index::<E>(i, j)]
}

/// Assemble the packed metric tensor from per-edge strain basis tensors and
/// the Lamé parameters pre-scaled by the element's rest volume (or area).
///
/// Entry `(i, j)` is `μ·tr(Bᵢ Bⱼᵀ) + λ·tr(Bᵢ)·tr(Bⱼ)`, which is symmetric in
/// the edge pair, so only the upper triangle is produced.
pub(crate) fn metric_tensor<const E: usize, const P: usize>(
    basis: &[Matrix3<f64>; E],
    mu: f64,
    lambda: f64,
) -> [f64; P] {
    let mut tr = [0.0; E];
    for (e, b) in basis.iter().enumerate() {
        tr[e] = b.trace();
    }

    let mut metric = [0.0; P];
    let mut id = 0;
    for i in 0..E {
        for j in i..E {
            let tr_ee = (basis[i] * basis[j].transpose()).trace();
            metric[id] = mu * tr_ee + lambda * tr[i] * tr[j];
            id += 1;
        }
    }
    assert_eq!(id, P, "incorrect stiffness matrix size");

    metric
}

/// Per-edge elongation signal: squared-length strain plus a backward
/// difference against the previous step, scaled by the damping rate.
pub(crate) fn update_elongations(
    elongation: &mut [f64],
    deformed: &[f64],
    reference: &[f64],
    prev: &[f64],
    k_d: f64,
) {
    for (((out, &d), &r), &p) in elongation
        .iter_mut()
        .zip(deformed.iter())
        .zip(reference.iter())
        .zip(prev.iter())
    {
        *out = d * d - r * r + (d * d - p * p) * k_d;
    }
}

/// Energy contribution of a single element, `¼ εᵀ M ε` over its own edges.
pub(crate) fn element_energy<const E: usize>(
    edges: &[usize; E],
    metric: &[f64],
    elongation: &[f64],
) -> f64 {
    let mut sum = 0.0;
    for i in 0..E {
        for j in 0..E {
            sum += elongation[edges[i]] * metric_entry::<E>(metric, i, j) * elongation[edges[j]];
        }
    }
    0.25 * sum
}

/// Accumulate one element's energy gradient into the per-vertex buffer.
///
/// The gradient of a squared edge length with respect to its endpoints is the
/// position difference with opposite signs, so each edge pair `(i, j)`
/// contributes `ε[i]·M[i,j]` times the gradient of edge `j` to both of that
/// edge's endpoints.
pub(crate) fn add_element_gradient<const V: usize, const E: usize>(
    edge_table: &[[usize; 2]; E],
    verts: &[usize; V],
    edges: &[usize; E],
    metric: &[f64],
    x: &[[f64; 3]],
    elongation: &[f64],
    grad: &mut [[f64; 3]],
) {
    let mut dlen = [[Vector3::zeros(); 2]; E];
    for (e, &[a, b]) in edge_table.iter().enumerate() {
        let d = Vector3::from(x[verts[a]]) - Vector3::from(x[verts[b]]);
        dlen[e] = [d, -d];
    }

    let mut local = [Vector3::zeros(); V];
    for i in 0..E {
        let eps = elongation[edges[i]];
        for j in 0..E {
            let w = eps * metric_entry::<E>(metric, i, j);
            local[edge_table[j][0]] += dlen[j][0] * w;
            local[edge_table[j][1]] += dlen[j][1] * w;
        }
    }

    for (l, &v) in local.iter().zip(verts.iter()) {
        grad[v][0] += l[0];
        grad[v][1] += l[1];
        grad[v][2] += l[2];
    }
}
