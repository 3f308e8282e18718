use std::slice;

use super::{Bound, ErrorKind, Identity, IsothermError, parameters::out_of_range};

/// Name, description and domain rule of one parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Rule checked at construction and on every mutation.
    pub bound: Bound,
    /// Error reported when `bound` is violated.
    pub violation: ErrorKind,
}

impl ParameterDescriptor {
    #[must_use]
    pub const fn new(
        name: &'static str,
        description: &'static str,
        bound: Bound,
        violation: ErrorKind,
    ) -> Self {
        Self {
            name,
            description,
            bound,
            violation,
        }
    }
}

/// Type-level parameter metadata for one model.
///
/// A schema never reflects instance values. It is `Copy`, so iterating it
/// again always starts from the first parameter.
///
/// ```
/// use isotherm_models::isotherm::registry;
/// use isotherm_models::models::Sips;
///
/// let schema = registry::schema::<Sips>();
/// let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
///
/// assert_eq!(names, ["Qmax", "K1", "K2"]);
/// assert_eq!(schema.iter().count(), schema.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    identity: Identity,
    parameters: &'static [ParameterDescriptor],
}

impl Schema {
    #[must_use]
    pub const fn new(identity: Identity, parameters: &'static [ParameterDescriptor]) -> Self {
        Self {
            identity,
            parameters,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the descriptor at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::OutOfRange`] if `index >= len()`.
    #[track_caller]
    pub fn describe(&self, index: usize) -> Result<&'static ParameterDescriptor, IsothermError> {
        let parameters: &'static [ParameterDescriptor] = self.parameters;
        match parameters.get(index) {
            Some(descriptor) => Ok(descriptor),
            None => Err(out_of_range(self.identity, index, parameters.len())),
        }
    }

    /// Iterates over `(name, description)` pairs in parameter order.
    #[must_use]
    pub fn iter(&self) -> Descriptors {
        Descriptors {
            inner: self.parameters.iter(),
        }
    }

    /// Returns the full descriptors, including domain rules.
    #[must_use]
    pub fn descriptors(&self) -> &'static [ParameterDescriptor] {
        self.parameters
    }
}

impl IntoIterator for Schema {
    type Item = (&'static str, &'static str);
    type IntoIter = Descriptors;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(name, description)` pairs of a [`Schema`].
#[derive(Debug, Clone)]
pub struct Descriptors {
    inner: slice::Iter<'static, ParameterDescriptor>,
}

impl Iterator for Descriptors {
    type Item = (&'static str, &'static str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|d| (d.name, d.description))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Descriptors {}

impl DoubleEndedIterator for Descriptors {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|d| (d.name, d.description))
    }
}
