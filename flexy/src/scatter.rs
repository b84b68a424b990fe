//! Mapping of per-vertex flex forces into the host's generalized forces.
//!
//! Every flex vertex is owned by one of the host's rigid bodies. Bodies whose
//! degrees of freedom are plain world-axis translations take a fast path that
//! writes force components straight into their dof slots; everything else is
//! routed through the host so it can apply the full point-force/torque
//! mapping for its dof layout.

use crate::Error;

/// Degree-of-freedom classification of a rigid body owning flex vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dofs {
    /// Up to three translational dofs aligned with the world axes, in x, y, z
    /// order, stored contiguously starting at `dof_adr`.
    ///
    /// This ordering is a hard precondition: the scatter writes force
    /// component `k` into slot `dof_adr + k`. Bodies with any other dof
    /// layout must be classified [`Dofs::General`].
    Simple { dof_adr: usize, dof_num: usize },
    /// Arbitrary dofs; forces are applied through
    /// [`GeneralizedForces::apply_force_at`].
    General,
}

/// Destination for the generalized forces produced by a flex body. The host's
/// passive-force accumulator implements this; contributions are additive.
pub trait GeneralizedForces {
    /// The generalized force vector, one slot per degree of freedom.
    fn qfrc(&mut self) -> &mut [f64];

    /// Apply a world-space `force` acting at world position `pos` to `body`,
    /// including the torque it induces about the body's frame.
    fn apply_force_at(&mut self, body: usize, force: [f64; 3], pos: [f64; 3]);
}

/// Fill in the default body layout (one free particle per vertex) or validate
/// a host-provided one.
pub(crate) fn resolve_bodies(
    vertex_body: Vec<usize>,
    body_dofs: Vec<Dofs>,
    num_verts: usize,
) -> Result<(Vec<usize>, Vec<Dofs>), Error> {
    if vertex_body.is_empty() && body_dofs.is_empty() {
        let dofs = (0..num_verts)
            .map(|i| Dofs::Simple {
                dof_adr: 3 * i,
                dof_num: 3,
            })
            .collect();
        return Ok(((0..num_verts).collect(), dofs));
    }

    if vertex_body.len() != num_verts {
        return Err(Error::SizeMismatch);
    }
    for (v, &b) in vertex_body.iter().enumerate() {
        if b >= body_dofs.len() {
            return Err(Error::ForeignVertexBody { vertex: v });
        }
    }
    for dofs in body_dofs.iter() {
        if let Dofs::Simple { dof_num, .. } = *dofs {
            if dof_num > 3 {
                return Err(Error::InvalidParameter {
                    name: "dof_num".to_string(),
                });
            }
        }
    }
    Ok((vertex_body, body_dofs))
}

/// Scatter the accumulated energy gradient as passive forces.
///
/// The passive force on a vertex is the negated gradient.
pub(crate) fn scatter_vertex_forces(
    grad: &[[f64; 3]],
    xpos: &[[f64; 3]],
    vertex_body: &[usize],
    body_dofs: &[Dofs],
    sink: &mut impl GeneralizedForces,
) {
    for (v, g) in grad.iter().enumerate() {
        let force = [-g[0], -g[1], -g[2]];
        let body = vertex_body[v];
        match body_dofs[body] {
            Dofs::Simple { dof_adr, dof_num } => {
                let qfrc = sink.qfrc();
                debug_assert!(dof_adr + dof_num <= qfrc.len());
                for x in 0..dof_num {
                    qfrc[dof_adr + x] += force[x];
                }
            }
            Dofs::General => sink.apply_force_at(body, force, xpos[v]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSink {
        qfrc: Vec<f64>,
        applied: Vec<(usize, [f64; 3], [f64; 3])>,
    }

    impl GeneralizedForces for RecordingSink {
        fn qfrc(&mut self) -> &mut [f64] {
            &mut self.qfrc
        }
        fn apply_force_at(&mut self, body: usize, force: [f64; 3], pos: [f64; 3]) {
            self.applied.push((body, force, pos));
        }
    }

    #[test]
    fn simple_bodies_write_dof_slots() {
        let grad = [[1.0, 2.0, 3.0], [-1.0, 0.0, 0.5]];
        let xpos = [[0.0; 3]; 2];
        let vertex_body = [0, 1];
        // Second body has a single (x-axis) dof.
        let body_dofs = [
            Dofs::Simple {
                dof_adr: 0,
                dof_num: 3,
            },
            Dofs::Simple {
                dof_adr: 3,
                dof_num: 1,
            },
        ];
        let mut sink = RecordingSink {
            qfrc: vec![0.0; 4],
            applied: Vec::new(),
        };
        scatter_vertex_forces(&grad, &xpos, &vertex_body, &body_dofs, &mut sink);
        assert_eq!(sink.qfrc, vec![-1.0, -2.0, -3.0, 1.0]);
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn general_bodies_receive_point_forces() {
        let grad = [[0.0, -2.0, 0.0]];
        let xpos = [[1.0, 0.0, 0.0]];
        let vertex_body = [0];
        let body_dofs = [Dofs::General];
        let mut sink = RecordingSink {
            qfrc: Vec::new(),
            applied: Vec::new(),
        };
        scatter_vertex_forces(&grad, &xpos, &vertex_body, &body_dofs, &mut sink);
        assert_eq!(sink.applied, vec![(0, [0.0, 2.0, 0.0], [1.0, 0.0, 0.0])]);
    }

    #[test]
    fn foreign_vertex_body_is_rejected() {
        let res = resolve_bodies(vec![0, 2], vec![Dofs::General, Dofs::General], 2);
        assert!(matches!(res, Err(Error::ForeignVertexBody { vertex: 1 })));
    }

    #[test]
    fn oversized_simple_dofs_are_rejected() {
        let res = resolve_bodies(
            vec![0],
            vec![Dofs::Simple {
                dof_adr: 0,
                dof_num: 6,
            }],
            1,
        );
        assert!(matches!(res, Err(Error::InvalidParameter { .. })));
    }
}
