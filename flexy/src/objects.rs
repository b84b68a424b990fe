pub use material::*;
pub use shell::*;
pub use solid::*;

pub mod material;
pub mod shell;
pub mod solid;

/// Borrowed views of the host arrays needed for one simulation step.
///
/// None of these references are retained past the step call. The reference
/// lengths are read fresh every step because some hosts only populate them
/// after the first step has run.
#[derive(Copy, Clone, Debug)]
pub struct StepInput<'a> {
    /// Current world-space vertex positions.
    pub xpos: &'a [[f64; 3]],
    /// Current deformed edge lengths, indexed by global edge.
    pub deformed: &'a [f64],
    /// Reference (rest) edge lengths, indexed by global edge.
    pub reference: &'a [f64],
    /// Step duration, used to scale the damping coefficient into a rate.
    pub dt: f64,
}

/// Smallest admissible rest volume (or area). Anything below this is
/// rejected as degenerate since the strain basis divides by it squared.
pub(crate) const MIN_REF_MEASURE: f64 = 1e-12;
