use crate::{
    ColebrookConfig, FlowRegime, FrictionError, FrictionFactor, RelativeRoughness,
    ReynoldsNumber, colebrook, laminar,
};

/// The correlation used to compute a friction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correlation {
    /// `f = 64/Re`, independent of roughness.
    Laminar,
    /// The implicit Colebrook equation.
    Colebrook,
}

/// Friction factor(s) for a point, tagged by flow regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegimeFactor {
    Laminar(FrictionFactor),
    /// Both correlations, since neither holds on its own in the transition.
    Transitional {
        laminar: FrictionFactor,
        turbulent: FrictionFactor,
    },
    Turbulent(FrictionFactor),
}

impl RegimeFactor {
    /// Returns the flow regime.
    #[must_use]
    pub fn regime(&self) -> FlowRegime {
        match self {
            Self::Laminar(_) => FlowRegime::Laminar,
            Self::Transitional { .. } => FlowRegime::Transitional,
            Self::Turbulent(_) => FlowRegime::Turbulent,
        }
    }

    /// Returns the representative friction factor.
    ///
    /// For transitional flow this is the midpoint of the two correlations.
    #[must_use]
    pub fn mean(&self) -> FrictionFactor {
        match *self {
            Self::Laminar(f) | Self::Turbulent(f) => f,
            Self::Transitional { laminar, turbulent } => laminar.midpoint(turbulent),
        }
    }
}

/// Computes friction factors from the laminar and Colebrook correlations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrictionModel {
    colebrook: ColebrookConfig,
}

impl FrictionModel {
    #[must_use]
    pub fn new(colebrook: ColebrookConfig) -> Self {
        Self { colebrook }
    }

    /// Returns the Colebrook solve settings.
    #[must_use]
    pub fn colebrook_config(&self) -> &ColebrookConfig {
        &self.colebrook
    }

    /// Returns `64/Re`.
    #[must_use]
    pub fn laminar(&self, re: ReynoldsNumber) -> FrictionFactor {
        laminar::friction_factor(re)
    }

    /// Returns the Colebrook friction factor.
    ///
    /// # Errors
    ///
    /// Returns an error if the root solve fails or does not converge.
    pub fn turbulent(
        &self,
        re: ReynoldsNumber,
        roughness: RelativeRoughness,
    ) -> Result<FrictionFactor, FrictionError> {
        colebrook::friction_factor(re, roughness, &self.colebrook)
    }

    /// Computes a friction factor with an explicitly chosen correlation.
    ///
    /// The regime is not consulted: the caller decides which formula applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the Colebrook solve fails or does not converge.
    pub fn friction_factor(
        &self,
        re: ReynoldsNumber,
        roughness: RelativeRoughness,
        correlation: Correlation,
    ) -> Result<FrictionFactor, FrictionError> {
        match correlation {
            Correlation::Laminar => Ok(self.laminar(re)),
            Correlation::Colebrook => self.turbulent(re, roughness),
        }
    }

    /// Classifies the point and evaluates the correlation(s) for its regime.
    ///
    /// # Errors
    ///
    /// Returns an error if a required Colebrook solve fails.
    pub fn regime_factor(
        &self,
        re: ReynoldsNumber,
        roughness: RelativeRoughness,
    ) -> Result<RegimeFactor, FrictionError> {
        Ok(match re.regime() {
            FlowRegime::Laminar => RegimeFactor::Laminar(self.laminar(re)),
            FlowRegime::Transitional => RegimeFactor::Transitional {
                laminar: self.laminar(re),
                turbulent: self.turbulent(re, roughness)?,
            },
            FlowRegime::Turbulent => RegimeFactor::Turbulent(self.turbulent(re, roughness)?),
        })
    }
}
