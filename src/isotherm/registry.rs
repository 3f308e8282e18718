//! Process-wide parameter metadata, keyed by model type.
//!
//! Each model's [`Schema`] is registered the first time it is requested and
//! never changes afterwards. Concurrent first requests for the same type are
//! serialized by a write lock; every later lookup only takes the read lock.

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock},
};

use tracing::debug;

use super::{IsothermModel, Schema};

static REGISTRY: LazyLock<MetadataRegistry> = LazyLock::new(MetadataRegistry::default);

#[derive(Debug, Default)]
struct MetadataRegistry {
    schemas: RwLock<HashMap<TypeId, Schema>>,
}

impl MetadataRegistry {
    fn lookup(&self, id: TypeId) -> Option<Schema> {
        // Entries are immutable once written, so a poisoned lock still holds
        // consistent data.
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .copied()
    }

    fn register<T: IsothermModel>(&self) -> Schema {
        let mut schemas = self
            .schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        *schemas.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(model = T::IDENTITY.name, parameters = T::SCHEMA.len(), "registering schema");
            Schema::new(T::IDENTITY, T::SCHEMA)
        })
    }
}

/// Returns the schema for model type `T`, registering it on first use.
#[must_use]
pub fn schema<T: IsothermModel>() -> Schema {
    REGISTRY
        .lookup(TypeId::of::<T>())
        .unwrap_or_else(|| REGISTRY.register::<T>())
}

/// Returns every schema registered so far, sorted by model name.
#[must_use]
pub fn registered() -> Vec<Schema> {
    let mut schemas: Vec<Schema> = REGISTRY
        .schemas
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .values()
        .copied()
        .collect();
    schemas.sort_by_key(|schema| schema.identity().name);
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use crate::models::{FritzSchlunder, Henry, Langmuir};

    #[test]
    fn lookups_are_stable() {
        let first = schema::<Langmuir>();
        let second = schema::<Langmuir>();

        assert_eq!(first, second);
        assert_eq!(first.identity().name, "Langmuir");
        assert!(std::ptr::eq(first.descriptors(), second.descriptors()));
    }

    #[test]
    fn registered_lists_requested_types() {
        let _ = schema::<Henry>();
        let _ = schema::<FritzSchlunder>();

        let names: Vec<_> = registered().iter().map(|s| s.identity().name).collect();
        assert!(names.contains(&"Henry"));
        assert!(names.contains(&"Fritz-Schlunder"));
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn concurrent_first_use_agrees() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(schema::<FritzSchlunder>))
            .collect();

        let schemas: Vec<Schema> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(schemas.iter().all(|s| *s == schemas[0]));
        assert_eq!(schemas[0].len(), 5);
    }
}
