//! Connectivity stencils for the two supported simplex types.
//!
//! A stencil is the fixed local numbering shared by every element of a given
//! type: which pairs of local vertices form edges and, for tetrahedra, how
//! edges relate to faces. The tables are compile-time constants mirroring the
//! local numbering used by the force and metric computations.

use ahash::AHashMap;

use crate::Error;

/// Local numbering for a triangle element. Edge `k` is opposite vertex `k`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stencil2D;

impl Stencil2D {
    pub const NUM_VERTS: usize = 3;
    pub const NUM_EDGES: usize = 3;
    pub const EDGE: [[usize; 2]; 3] = [[1, 2], [2, 0], [0, 1]];
}

/// Local numbering for a tetrahedron element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stencil3D;

impl Stencil3D {
    pub const NUM_VERTS: usize = 4;
    pub const NUM_EDGES: usize = 6;
    pub const EDGE: [[usize; 2]; 6] = [[0, 1], [1, 2], [2, 0], [2, 3], [0, 3], [1, 3]];
    /// Faces as local vertex triples.
    pub const FACE: [[usize; 3]; 4] = [[2, 1, 0], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
    /// For each edge, the two faces that do not contain it. The area normals
    /// of these faces span the strain basis associated with the edge.
    pub const EDGE_TO_FACES: [[usize; 2]; 6] = [[2, 3], [1, 3], [2, 1], [1, 0], [0, 2], [0, 3]];
}

/// Enumerates the unique undirected edges of a simplex mesh and assigns each
/// element the tuple of global edge indices ordered by the stencil edge table.
///
/// Edges are numbered in first-encounter order over elements, so the result is
/// deterministic for a given element list. Every vertex index is validated
/// against `num_verts`.
pub fn build_edge_topology<const V: usize, const E: usize>(
    edge_table: &[[usize; 2]; E],
    elements: &[[usize; V]],
    num_verts: usize,
) -> Result<(Vec<[usize; E]>, Vec<[usize; 2]>), Error> {
    let mut edge_index: AHashMap<(usize, usize), usize> = AHashMap::new();
    let mut edges: Vec<[usize; 2]> = Vec::new();
    let mut element_edges = Vec::with_capacity(elements.len());

    for (ei, verts) in elements.iter().enumerate() {
        for &v in verts.iter() {
            if v >= num_verts {
                return Err(Error::ElementVertexOutOfBounds {
                    element: ei,
                    vertex: v,
                });
            }
        }

        let mut local = [0; E];
        for (e, &[a, b]) in edge_table.iter().enumerate() {
            let (va, vb) = (verts[a], verts[b]);
            let key = (va.min(vb), va.max(vb));
            local[e] = *edge_index.entry(key).or_insert_with(|| {
                edges.push([key.0, key.1]);
                edges.len() - 1
            });
        }
        element_edges.push(local);
    }

    Ok((element_edges, edges))
}

/// Current lengths of the given edges.
pub fn edge_lengths(x: &[[f64; 3]], edges: &[[usize; 2]]) -> Vec<f64> {
    edges
        .iter()
        .map(|&[a, b]| {
            let d = [x[a][0] - x[b][0], x[a][1] - x[b][1], x[a][2] - x[b][2]];
            (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
        })
        .collect()
}
