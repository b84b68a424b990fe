use rayon::prelude::*;

use crate::energy::EnergyGradient;
use crate::energy_models::elasticity::tet_solid::{edge_basis, ref_volume, TetSolidElasticity};
use crate::energy_models::elasticity::{metric_tensor, update_elongations, Elasticity};
use crate::objects::{StepInput, MIN_REF_MEASURE};
use crate::scatter::{resolve_bodies, scatter_vertex_forces, Dofs, GeneralizedForces};
use crate::stencil::{build_edge_topology, Stencil3D};
use crate::{Error, Material};

/// One tetrahedron of a flex solid with its precomputed metric tensor.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TetElement {
    pub verts: [usize; 4],
    /// Global edge indices ordered by the stencil edge table.
    pub edges: [usize; 6],
    /// Upper-triangular packing of the symmetric 6×6 edge metric.
    pub metric: [f64; 21],
}

/// A deformable solid discretized as a tetrahedral mesh. It owns the
/// per-element metric tensors, built once from the rest configuration and the
/// material, and the scratch buffers reused every step. Host arrays are
/// borrowed per step and never kept.
pub struct TetSolid {
    pub material: Material,
    num_verts: usize,
    edges: Vec<[usize; 2]>,
    elements: Vec<TetElement>,
    vertex_body: Vec<usize>,
    body_dofs: Vec<Dofs>,
    /// Edge lengths at the previous step; empty until the first step runs,
    /// updated only while damping is active.
    prev: Vec<f64>,
    elongation: Vec<f64>,
    grad: Vec<[f64; 3]>,
}

impl TetSolid {
    pub fn num_vertices(&self) -> usize {
        self.num_verts
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Global edges as vertex pairs, in the order expected by the per-step
    /// edge-length inputs.
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    pub(crate) fn elements(&self) -> &[TetElement] {
        &self.elements
    }

    /// Compute this body's passive force contribution for one step and add
    /// it into `sink`.
    pub fn step(&mut self, input: StepInput, sink: &mut impl GeneralizedForces) {
        let StepInput {
            xpos,
            deformed,
            reference,
            dt,
        } = input;
        debug_assert_eq!(xpos.len(), self.num_verts);
        debug_assert_eq!(deformed.len(), self.edges.len());
        debug_assert_eq!(reference.len(), self.edges.len());

        let k_d = if dt != 0.0 {
            self.material.damping() / dt
        } else {
            0.0
        };

        // Reference lengths are not necessarily populated before the first
        // step, so the damping history starts here rather than at build time.
        if self.prev.is_empty() {
            self.prev.extend_from_slice(reference);
        }

        update_elongations(&mut self.elongation, deformed, reference, &self.prev, k_d);

        let mut grad = std::mem::take(&mut self.grad);
        grad.iter_mut().for_each(|g| *g = [0.0; 3]);
        self.elasticity()
            .add_energy_gradient(xpos, &self.elongation, &mut grad);
        scatter_vertex_forces(&grad, xpos, &self.vertex_body, &self.body_dofs, sink);
        self.grad = grad;

        if k_d > 0.0 {
            self.prev.copy_from_slice(deformed);
        }
    }
}

impl<'a> Elasticity<'a, TetSolidElasticity<'a>> for TetSolid {
    fn elasticity(&'a self) -> TetSolidElasticity<'a> {
        TetSolidElasticity(self)
    }
}

/// Fallible factory for [`TetSolid`]. Material parameters, connectivity and
/// rest geometry are all validated before any element data is built; on error
/// no instance is created.
pub struct TetSolidBuilder {
    material: Material,
    rest_positions: Vec<[f64; 3]>,
    elements: Vec<[usize; 4]>,
    vertex_body: Vec<usize>,
    body_dofs: Vec<Dofs>,
}

impl TetSolidBuilder {
    pub fn new(material: Material) -> Self {
        TetSolidBuilder {
            material,
            rest_positions: Vec::new(),
            elements: Vec::new(),
            vertex_body: Vec::new(),
            body_dofs: Vec::new(),
        }
    }

    /// Rest-configuration vertex positions.
    pub fn rest_positions(mut self, rest_positions: Vec<[f64; 3]>) -> Self {
        self.rest_positions = rest_positions;
        self
    }

    /// Tetrahedra as global vertex quadruples, right-handed ordering.
    pub fn elements(mut self, elements: Vec<[usize; 4]>) -> Self {
        self.elements = elements;
        self
    }

    /// Owning rigid body per vertex and the dof classification per body.
    /// When omitted, every vertex is treated as a free particle with three
    /// world-aligned dofs at `3 * vertex`.
    pub fn bodies(mut self, vertex_body: Vec<usize>, body_dofs: Vec<Dofs>) -> Self {
        self.vertex_body = vertex_body;
        self.body_dofs = body_dofs;
        self
    }

    pub fn build(self) -> Result<TetSolid, Error> {
        let TetSolidBuilder {
            material,
            rest_positions,
            elements,
            vertex_body,
            body_dofs,
        } = self;

        material.validate()?;
        let num_verts = rest_positions.len();
        let (element_edges, edges) =
            build_edge_topology(&Stencil3D::EDGE, &elements, num_verts)?;
        let (vertex_body, body_dofs) = resolve_bodies(vertex_body, body_dofs, num_verts)?;

        let volumes: Vec<f64> = elements
            .iter()
            .map(|verts| ref_volume(&rest_positions, verts))
            .collect();
        let inverted: Vec<_> = volumes
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| if v <= 0.0 { Some(i) } else { None })
            .collect();
        if !inverted.is_empty() {
            return Err(Error::InvertedReferenceElement { inverted });
        }
        let degens: Vec<_> = volumes
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| if v < MIN_REF_MEASURE { Some(i) } else { None })
            .collect();
        if !degens.is_empty() {
            return Err(Error::DegenerateReferenceElement { degens });
        }

        let elasticity = material.elasticity();
        let elements: Vec<TetElement> = elements
            .par_iter()
            .zip(volumes.par_iter())
            .zip(element_edges.par_iter())
            .map(|((&verts, &volume), &edges)| {
                let basis = edge_basis(&rest_positions, &verts, volume);
                let metric = metric_tensor::<6, 21>(
                    &basis,
                    elasticity.mu * volume,
                    elasticity.lambda * volume,
                );
                TetElement {
                    verts,
                    edges,
                    metric,
                }
            })
            .collect();

        log::debug!(
            "flex solid {}: {} vertices, {} edges, {} tets",
            material.id,
            num_verts,
            edges.len(),
            elements.len()
        );

        let num_edges = edges.len();
        Ok(TetSolid {
            material,
            num_verts,
            edges,
            elements,
            vertex_body,
            body_dofs,
            prev: Vec::new(),
            elongation: vec![0.0; num_edges],
            grad: vec![[0.0; 3]; num_verts],
        })
    }
}
