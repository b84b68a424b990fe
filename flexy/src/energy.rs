/*!
 * Interfaces for elastic energies defined over per-edge elongations. An
 * implementer provides the energy of a configuration and its gradient with
 * respect to vertex positions; the gradient is what gets accumulated into the
 * passive force. These functions run once per simulation step, so
 * implementers are expected to work in-place on caller-provided buffers.
 */

/// Energy of the current configuration.
pub trait Energy {
    /// Compute the total elastic energy given per-edge elongations.
    ///
    /// `elongation` is indexed by global edge, as produced by the owning
    /// body's per-step update.
    fn energy(&self, elongation: &[f64]) -> f64;
}

/// First derivative of the energy with respect to vertex positions.
pub trait EnergyGradient {
    /// Add the energy gradient to `grad`, one 3-vector per vertex.
    ///
    /// `x` holds current world-space vertex positions. The passive force
    /// contribution is the negative of the accumulated gradient.
    fn add_energy_gradient(&self, x: &[[f64; 3]], elongation: &[f64], grad: &mut [[f64; 3]]);
}
