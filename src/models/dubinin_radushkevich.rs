use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};
use uom::si::{f64::MolarEnergy, molar_energy::joule_per_mole};

use super::{GAS_CONSTANT, absolute_temperature};

const QMAX: usize = 0;
const K1: usize = 1;

/// Dubinin–Radushkevich isotherm for pore filling in microporous solids.
///
/// ```text
/// ε  = R·T·ln(1 + 1/Ce)
/// Qe = Qmax·exp(−K1·ε²)
/// ```
///
/// `ε` is the Polanyi potential in J/mol, so `K1` has units of mol²/J².
/// The temperature must be a positive absolute temperature, even at `Ce = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DubininRadushkevich {
    parameters: ParameterSet<2>,
}

impl DubininRadushkevich {
    /// Creates a Dubinin–Radushkevich isotherm.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`] or [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn new(qmax: f64, k1: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([qmax, k1]))
    }

    /// Micropore capacity.
    #[must_use]
    pub fn qmax(&self) -> f64 {
        self.parameters.at::<QMAX>()
    }

    /// Activity coefficient related to the mean free energy of adsorption.
    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadQmaxLEZero`].
    #[track_caller]
    pub fn set_qmax(&mut self, qmax: f64) -> Result<(), IsothermError> {
        self.set_parameter(QMAX, qmax)
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn set_k1(&mut self, k1: f64) -> Result<(), IsothermError> {
        self.set_parameter(K1, k1)
    }

    /// Mean free energy of adsorption, `1 / sqrt(2·K1)`.
    ///
    /// Values below about 8 kJ/mol usually indicate physisorption.
    #[must_use]
    pub fn mean_free_energy(&self) -> MolarEnergy {
        MolarEnergy::new::<joule_per_mole>((2.0 * self.k1()).sqrt().recip())
    }
}

impl IsothermModel for DubininRadushkevich {
    type Parameters = ParameterSet<2>;

    const IDENTITY: Identity =
        Identity::new("Dubinin-Radushkevich", IsothermKind::DubininRadushkevich);

    const SCHEMA: &'static [ParameterDescriptor] = &[
        ParameterDescriptor::new(
            "Qmax",
            "Micropore adsorption capacity",
            Bound::Positive,
            ErrorKind::BadQmaxLEZero,
        ),
        ParameterDescriptor::new(
            "K1",
            "Activity coefficient (mol^2/J^2)",
            Bound::Positive,
            ErrorKind::BadK1LEZero,
        ),
    ];

    fn parameters(&self) -> &Self::Parameters {
        &self.parameters
    }

    fn from_validated(parameters: Validated<Self::Parameters>) -> Self {
        Self {
            parameters: parameters.into_inner(),
        }
    }

    #[track_caller]
    fn equilibrium(
        &self,
        ce: Constrained<f64, NonNegative>,
        temperature: f64,
    ) -> Result<f64, IsothermError> {
        let temperature = absolute_temperature(Self::IDENTITY, temperature)?;
        let ce = ce.get();
        if ce == 0.0 {
            return Ok(0.0);
        }

        let potential = GAS_CONSTANT * temperature * ce.recip().ln_1p();
        Ok(self.qmax() * (-self.k1() * potential * potential).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_the_polanyi_potential() {
        let model = DubininRadushkevich::new(4.0, 2e-8).unwrap();
        let temperature = 298.15;
        let ce = 0.5;

        let potential = GAS_CONSTANT * temperature * 3.0_f64.ln();
        let expected = 4.0 * (-2e-8 * potential * potential).exp();

        assert_relative_eq!(model.qe(ce, temperature).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn needs_an_absolute_temperature() {
        let model = DubininRadushkevich::new(4.0, 2e-8).unwrap();

        for temperature in [0.0, -1.0, f64::NAN] {
            let err = model.qe(1.0, temperature).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadTemperatureLEZero);
        }
        assert_eq!(model.qe_at(0.0).unwrap_err().kind(), ErrorKind::BadTemperatureLEZero);
    }

    #[test]
    fn mean_free_energy() {
        use uom::si::molar_energy::kilojoule_per_mole;

        let model = DubininRadushkevich::new(4.0, 5e-9).unwrap();
        assert_relative_eq!(
            model.mean_free_energy().get::<kilojoule_per_mole>(),
            10.0,
            max_relative = 1e-12
        );
    }
}
