mod energy;
pub mod energy_models;
pub mod objects;
pub mod scatter;
pub mod stencil;

// TODO: This should be feature gated. Unfortunately this makes it tedious to
// run tests without passing the feature explicitly via the `--features` flag.
pub mod test_utils;

pub use self::energy::*;
pub use self::objects::*;
pub use self::scatter::*;
pub use self::stencil::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Size mismatch error")]
    SizeMismatch,
    #[error("Invalid parameter: {name:?}")]
    InvalidParameter { name: String },
    #[error("Degenerate reference element detected: {:?}", .degens[0])]
    DegenerateReferenceElement { degens: Vec<usize> },
    #[error("Inverted reference element detected")]
    InvertedReferenceElement { inverted: Vec<usize> },
    #[error("Element {element} references vertex {vertex} which is out of bounds")]
    ElementVertexOutOfBounds { element: usize, vertex: usize },
    #[error("Vertex {vertex} is owned by a body outside this flex instance")]
    ForeignVertexBody { vertex: usize },
}
