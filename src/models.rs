//! The isotherm model catalog.
//!
//! Every model is a small struct around a [`ParameterSet`](crate::isotherm::ParameterSet)
//! that implements [`IsothermModel`](crate::isotherm::IsothermModel), so all
//! of them share validation, transactional setters, metadata and the
//! object-safe [`Isotherm`](crate::isotherm::Isotherm) interface.
//!
//! # Conventions
//!
//! - `Ce` is the equilibrium concentration and must be non-negative.
//! - `Qe` is the quantity adsorbed, in the units of `Qmax` (or of `K1` for
//!   models without a capacity).
//! - Temperatures are absolute, in kelvin. Models that do not depend on
//!   temperature ignore it, so `qe_at` (temperature zero) is fine for them.
//!
//! # Implicit models
//!
//! [`Elovich`], [`Kiselev`] and [`FowlerGuggenheim`] define the surface
//! coverage `θ = Qe / Qmax` only implicitly. Each solves its own residual with
//! [`support::newton`](crate::support::newton).

mod bi_langmuir;
mod dubinin_radushkevich;
mod elovich;
mod fowler_guggenheim;
mod freundlich;
mod fritz_schlunder;
mod henry;
mod jovanovic;
mod khan;
mod kiselev;
mod langmuir;
mod redlich_peterson;
mod sips;
mod toth;

pub use bi_langmuir::BiLangmuir;
pub use dubinin_radushkevich::DubininRadushkevich;
pub use elovich::Elovich;
pub use fowler_guggenheim::FowlerGuggenheim;
pub use freundlich::Freundlich;
pub use fritz_schlunder::FritzSchlunder;
pub use henry::Henry;
pub use jovanovic::Jovanovic;
pub use khan::Khan;
pub use kiselev::Kiselev;
pub use langmuir::Langmuir;
pub use redlich_peterson::RedlichPeterson;
pub use sips::Sips;
pub use toth::Toth;

use crate::{
    isotherm::{ErrorKind, Identity, IsothermError},
    support::{constraint::StrictlyPositive, newton},
};

/// Molar gas constant, J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Checks that `temperature` is a usable absolute temperature.
#[track_caller]
pub(crate) fn absolute_temperature(
    identity: Identity,
    temperature: f64,
) -> Result<f64, IsothermError> {
    match StrictlyPositive::new(temperature) {
        Ok(temperature) => Ok(temperature.into_inner()),
        Err(reason) => Err(IsothermError::new(
            ErrorKind::BadTemperatureLEZero,
            identity,
            format!("T = {temperature} K ({reason})"),
        )),
    }
}

/// Solver settings shared by the implicit models.
pub(crate) fn coverage_solver() -> newton::Config {
    newton::Config::new(1e-12, 100)
}

/// Langmuir saturation term `x / (1 + x)`, equal to one for infinite `x`.
pub(crate) fn saturation(x: f64) -> f64 {
    if x.is_infinite() {
        1.0
    } else {
        x / (1.0 + x)
    }
}

/// Logistic function, `1 / (1 + e^-u)`, evaluated without overflow.
pub(crate) fn logistic(u: f64) -> f64 {
    if u >= 0.0 {
        1.0 / (1.0 + (-u).exp())
    } else {
        let e = u.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::isotherm::{Bound, Isotherm};

    fn catalog() -> Vec<Box<dyn Isotherm>> {
        vec![
            Box::new(Henry::new(0.8).unwrap()),
            Box::new(Langmuir::new(2.5, 0.4).unwrap()),
            Box::new(Freundlich::new(1.2, 2.5).unwrap()),
            Box::new(Jovanovic::new(3.0, 0.2).unwrap()),
            Box::new(DubininRadushkevich::new(4.0, 2e-8).unwrap()),
            Box::new(Elovich::new(2.0, 0.7).unwrap()),
            Box::new(Sips::new(3.0, 0.2, 0.8).unwrap()),
            Box::new(Toth::new(2.0, 0.5, 0.6).unwrap()),
            Box::new(RedlichPeterson::new(1.5, 0.3, 0.9).unwrap()),
            Box::new(Khan::new(2.0, 0.4, 0.7).unwrap()),
            Box::new(Kiselev::new(2.0, 0.5, 0.3).unwrap()),
            Box::new(FowlerGuggenheim::new(2.0, 0.8, 1500.0).unwrap()),
            Box::new(BiLangmuir::new(2.0, 0.6, 1.0, 0.05).unwrap()),
            Box::new(FritzSchlunder::new(3.0, 0.9, 0.4, 0.8, 0.7).unwrap()),
        ]
    }

    #[test]
    fn every_model_rejects_negative_concentration() {
        for model in catalog() {
            for ce in [-1e-12, -1.0, f64::NAN] {
                let err = model.qe(ce, 298.15).unwrap_err();
                assert_eq!(err.kind(), ErrorKind::BadCeLTZero, "{}", model.identity());
                assert_eq!(err.identity(), model.identity());
            }
        }
    }

    #[test]
    fn every_model_adsorbs_nothing_at_zero_concentration() {
        for model in catalog() {
            assert_eq!(model.qe(0.0, 298.15).unwrap(), 0.0, "{}", model.identity());
        }
    }

    #[test]
    fn every_model_is_increasing() {
        for model in catalog() {
            let mut previous = 0.0;
            for ce in [0.01, 0.1, 1.0, 10.0, 100.0] {
                let qe = model.qe(ce, 298.15).unwrap();
                assert!(qe.is_finite() && qe > previous, "{} at Ce = {ce}", model.identity());
                previous = qe;
            }
        }
    }

    #[test]
    fn huge_concentrations_never_yield_a_non_finite_loading() {
        for model in catalog() {
            for ce in [1e308, f64::INFINITY] {
                match model.qe(ce, 298.15) {
                    Ok(qe) => {
                        assert!(qe.is_finite(), "{} at Ce = {ce}: {qe}", model.identity());
                    }
                    Err(err) => assert_eq!(err.identity(), model.identity()),
                }
            }
        }
    }

    #[test]
    fn saturating_models_approach_capacity() {
        let cases: Vec<(Box<dyn Isotherm>, f64)> = vec![
            (Box::new(Langmuir::new(2.0, 10.0).unwrap()), 2.0),
            (Box::new(Sips::new(2.0, 10.0, 0.8).unwrap()), 2.0),
            (Box::new(Toth::new(2.0, 0.5, 3.0).unwrap()), 2.0),
            (Box::new(Khan::new(2.0, 0.4, 1.0).unwrap()), 2.0),
            (Box::new(BiLangmuir::new(2.0, 0.6, 1.0, 0.05).unwrap()), 3.0),
        ];

        for (model, capacity) in cases {
            for ce in [1e308, f64::INFINITY] {
                let qe = model.qe_at(ce).unwrap();
                assert_relative_eq!(qe, capacity, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn unbounded_loading_is_reported() {
        let henry = Henry::new(0.8).unwrap();
        let err = henry.qe_at(f64::INFINITY).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NonFiniteResidual);
        assert_eq!(err.identity(), henry.identity());
    }

    #[test]
    fn schemas_cover_every_parameter() {
        for model in catalog() {
            let schema = model.schema();
            assert_eq!(schema.len(), model.parameter_count(), "{}", model.identity());
            assert_eq!(schema.identity(), model.identity());
            assert!(schema.iter().all(|(name, description)| {
                !name.is_empty() && !description.is_empty()
            }));
        }
    }

    #[test]
    fn every_bound_is_enforced_with_its_documented_kind() {
        for model in catalog() {
            for (index, descriptor) in model.schema().descriptors().iter().enumerate() {
                let mut copy = model.clone();
                let before: Vec<f64> = (0..copy.parameter_count())
                    .map(|i| copy.parameter(i).unwrap())
                    .collect();

                let limit = match descriptor.bound {
                    Bound::Positive => 0.0,
                    Bound::NonNegative => -1e-9,
                    Bound::GreaterThanOne => 1.0,
                };

                let err = copy.set_parameter(index, limit).unwrap_err();
                assert_eq!(err.kind(), descriptor.violation, "{} {}", model.identity(), descriptor.name);

                let after: Vec<f64> = (0..copy.parameter_count())
                    .map(|i| copy.parameter(i).unwrap())
                    .collect();
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn infinite_parameters_are_rejected() {
        for model in catalog() {
            for (index, descriptor) in model.schema().descriptors().iter().enumerate() {
                let mut copy = model.clone();
                let err = copy.set_parameter(index, f64::INFINITY).unwrap_err();
                assert_eq!(
                    err.kind(),
                    descriptor.violation,
                    "{} {}",
                    model.identity(),
                    descriptor.name
                );
            }
        }
        assert!(Langmuir::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn clones_are_independent() {
        for original in catalog() {
            let mut copy = original.clone();
            let value = copy.parameter(0).unwrap() * 2.0;
            copy.set_parameter(0, value).unwrap();

            assert_eq!(copy.parameter(0).unwrap(), value);
            assert_eq!(original.parameter(0).unwrap(), value / 2.0);
        }
    }

    #[test]
    fn temperature_is_checked_where_it_matters() {
        let dr = DubininRadushkevich::new(4.0, 2e-8).unwrap();
        assert_eq!(dr.qe_at(1.0).unwrap_err().kind(), ErrorKind::BadTemperatureLEZero);

        let fg = FowlerGuggenheim::new(2.0, 0.8, 1500.0).unwrap();
        assert_eq!(fg.qe(1.0, -5.0).unwrap_err().kind(), ErrorKind::BadTemperatureLEZero);

        let langmuir = Langmuir::new(2.5, 0.4).unwrap();
        assert!(langmuir.qe_at(1.0).is_ok());
    }

    #[test]
    fn logistic_is_stable_at_the_extremes() {
        assert_eq!(logistic(0.0), 0.5);
        assert_eq!(logistic(1000.0), 1.0);
        assert_eq!(logistic(-1000.0), 0.0);
        assert!((logistic(2.0) + logistic(-2.0) - 1.0).abs() < 1e-15);
    }
}
