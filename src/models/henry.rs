use crate::{
    isotherm::{
        Bound, ErrorKind, Identity, Isotherm, IsothermError, IsothermKind, IsothermModel,
        ParameterDescriptor, ParameterSet, Validated,
    },
    support::constraint::{Constrained, NonNegative},
};

const K1: usize = 0;

/// Henry's law: `Qe = K1·Ce`.
#[derive(Debug, Clone, PartialEq)]
pub struct Henry {
    parameters: ParameterSet<1>,
}

impl Henry {
    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn new(k1: f64) -> Result<Self, IsothermError> {
        Self::try_from_parameters(ParameterSet::new([k1]))
    }

    #[must_use]
    pub fn k1(&self) -> f64 {
        self.parameters.at::<K1>()
    }

    /// # Errors
    ///
    /// Fails with [`ErrorKind::BadK1LEZero`].
    #[track_caller]
    pub fn set_k1(&mut self, k1: f64) -> Result<(), IsothermError> {
        self.set_parameter(K1, k1)
    }
}

impl IsothermModel for Henry {
    type Parameters = ParameterSet<1>;

    const IDENTITY: Identity = Identity::new("Henry", IsothermKind::Henry);

    const SCHEMA: &'static [ParameterDescriptor] = &[ParameterDescriptor::new(
        "K1",
        "Henry's law constant",
        Bound::Positive,
        ErrorKind::BadK1LEZero,
    )];

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
        _temperature: f64,
    ) -> Result<f64, IsothermError> {
        Ok(self.k1() * ce.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linear_in_concentration() {
        let model = Henry::new(0.8).unwrap();

        assert_relative_eq!(model.qe_at(2.5).unwrap(), 2.0);
        assert_relative_eq!(model.qe(5.0, 350.0).unwrap(), 4.0);
    }

    #[test]
    fn single_parameter() {
        let mut model = Henry::new(0.8).unwrap();
        assert_eq!(model.parameter_count(), 1);

        model.set_k1(1.6).unwrap();
        assert_eq!(model.k1(), 1.6);
        assert_eq!(Henry::new(0.0).unwrap_err().kind(), ErrorKind::BadK1LEZero);
    }
}
