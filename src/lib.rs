//! # Isotherm Models
//!
//! Adsorption isotherm models and the numerical tools they are built on.
//!
//! ## Crate layout
//!
//! - [`isotherm`]: The shared model framework: parameter storage and
//!   validation, the [`isotherm::IsothermModel`] and [`isotherm::Isotherm`]
//!   traits, errors, the metadata registry, and inversion helpers.
//! - [`models`]: The isotherm catalog (Langmuir, Freundlich, Sips, ...).
//! - [`support`]: Supporting utilities, including a standalone Newton-Raphson
//!   root finder and type-level numeric constraints.
//!
//! ## Quick start
//!
//! ```
//! use isotherm_models::isotherm::{Isotherm, inverse};
//! use isotherm_models::models::{Freundlich, Langmuir};
//!
//! let catalog: Vec<Box<dyn Isotherm>> = vec![
//!     Box::new(Langmuir::new(2.5, 0.4).unwrap()),
//!     Box::new(Freundlich::new(1.2, 2.0).unwrap()),
//! ];
//!
//! for model in &catalog {
//!     let qe = model.qe_at(3.0).unwrap();
//!     let ce = inverse::concentration(model.as_ref(), qe, 0.0, &Default::default()).unwrap();
//!     assert!((ce - 3.0).abs() < 1e-6, "{}", model.identity());
//! }
//! ```
//!
//! ## Logging
//!
//! Solver iterations and registry updates are reported through [`tracing`]
//! at `trace` and `debug` level. The crate never installs a subscriber.

pub mod isotherm;
pub mod models;
pub mod support;
