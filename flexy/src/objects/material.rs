use serde::{Deserialize, Serialize};

use crate::Error;

/// Material of a flex body.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material unique identifier.
    /// It is the user's responsibility to ensure that this value is used correctly:
    ///
    /// `material1 == material2` if and only if `material1.id == material2.id`.
    pub id: usize,
    /// Properties determining the passive behaviour of the body.
    pub properties: DeformableProperties,
}

/// Common material properties shared by all deformable flex bodies.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeformableProperties {
    /// Parameters determining the elastic behaviour of the body.
    pub elasticity: ElasticityParameters,
    /// Coefficient measuring the amount of artificial viscosity as dictated
    /// by the Rayleigh damping model. It is divided by the step duration at
    /// every step to obtain the damping rate.
    pub damping: f64,
}

impl Default for DeformableProperties {
    fn default() -> Self {
        DeformableProperties {
            elasticity: ElasticityParameters {
                lambda: 0.0,
                mu: 0.0,
            },
            damping: 0.0,
        }
    }
}

impl Material {
    pub fn new(id: usize) -> Material {
        Material {
            id,
            properties: Default::default(),
        }
    }

    pub fn with_elasticity(mut self, elasticity: ElasticityParameters) -> Material {
        self.properties.elasticity = elasticity;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Material {
        self.properties.damping = damping;
        self
    }

    pub fn elasticity(&self) -> ElasticityParameters {
        self.properties.elasticity
    }

    pub fn damping(&self) -> f64 {
        self.properties.damping
    }

    /// Check the properties for use in a flex body.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !(self.properties.elasticity.mu > 0.0) {
            return Err(Error::InvalidParameter {
                name: "mu".to_string(),
            });
        }
        if !(self.properties.damping >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "damping".to_string(),
            });
        }
        Ok(())
    }
}

/// Lamé parameters per unit volume (per unit area for membranes).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElasticityParameters {
    /// First Lame parameter. Measured in Pa = N/m² = kg/(ms²).
    pub lambda: f64,
    /// Second Lame parameter, i.e. the shear modulus. Measured in Pa.
    pub mu: f64,
}

impl ElasticityParameters {
    /// Bulk modulus measures the material's resistance to expansion and
    /// compression, shear modulus its resistance to shear deformation.
    pub fn from_bulk_shear(bulk: f64, shear: f64) -> Self {
        ElasticityParameters {
            lambda: bulk - 2.0 * shear / 3.0,
            mu: shear,
        }
    }

    /// Convert from Young's modulus and Poisson's ratio.
    ///
    /// Young's modulus must be positive and the Poisson ratio must lie in
    /// (−1, 0.5), exclusive of the incompressible limit.
    pub fn from_young_poisson(young: f64, poisson: f64) -> Result<Self, Error> {
        if !(young > 0.0) {
            return Err(Error::InvalidParameter {
                name: "young".to_string(),
            });
        }
        if !(poisson > -1.0 && poisson < 0.5) {
            return Err(Error::InvalidParameter {
                name: "poisson".to_string(),
            });
        }
        Ok(ElasticityParameters {
            lambda: young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson)),
            mu: young / (2.0 * (1.0 + poisson)),
        })
    }
}
