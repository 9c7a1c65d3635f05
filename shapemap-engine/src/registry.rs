//! Warm-up registration surface.
//!
//! Startup collaborators feed each discovered (model, entity) pair into a
//! [`MapperRegistry`]; registering a pair compiles and stores both
//! conversion directions. Once every registration is in, [`finish`]
//! freezes the registry into the shared read-only [`MapperCache`].
//!
//! [`finish`]: MapperRegistry::finish

use crate::builder::{self, OverrideFn};
use crate::cache::{ErasedMapping, MapperCache, TypePair};
use crate::error::ConfigError;
use crate::matcher;
use shapemap_model::{MapDefinition, Shaped};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// The mutable, warm-up-phase side of the type-pair cache.
///
/// Registrations for distinct pairs may run concurrently; the interior
/// mutex keeps the map consistent and the last write for a key wins. In
/// practice every key is written exactly once, since each discovered pair
/// is registered once.
#[derive(Default)]
pub struct MapperRegistry {
    mappings: Mutex<HashMap<TypePair, ErasedMapping>>,
}

impl MapperRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structural-only pair: both directions are compiled from
    /// the field correspondence alone.
    pub fn register<M: Shaped, E: Shaped>(&self) -> Result<(), ConfigError> {
        self.install::<M, E>(None, None)
    }

    /// Registers a pair with an override routine. The definition's
    /// direction-specific method runs after the structural copy of each
    /// conversion.
    pub fn register_with<M: Shaped, E: Shaped>(
        &self,
        definition: Arc<dyn MapDefinition<M, E>>,
    ) -> Result<(), ConfigError> {
        let forward = {
            let definition = Arc::clone(&definition);
            Arc::new(move |source: &M, destination: &mut E| {
                definition.model_to_entity(source, destination)
            }) as OverrideFn<M, E>
        };
        let reverse = Arc::new(move |source: &E, destination: &mut M| {
            definition.entity_to_model(source, destination)
        }) as OverrideFn<E, M>;
        self.install::<M, E>(Some(forward), Some(reverse))
    }

    fn install<M: Shaped, E: Shaped>(
        &self,
        forward_override: Option<OverrideFn<M, E>>,
        reverse_override: Option<OverrideFn<E, M>>,
    ) -> Result<(), ConfigError> {
        let forward = builder::compile::<M, E>(
            matcher::correspondence(M::schema(), E::schema()),
            forward_override,
        )?;
        let reverse = builder::compile::<E, M>(
            matcher::correspondence(E::schema(), M::schema()),
            reverse_override,
        )?;

        let mut mappings = self
            .mappings
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        mappings.insert(TypePair::of::<M, E>(), Arc::new(forward));
        mappings.insert(TypePair::of::<E, M>(), Arc::new(reverse));
        drop(mappings);

        info!(
            model = %M::schema().name,
            entity = %E::schema().name,
            "mapping pair registered"
        );
        Ok(())
    }

    /// Ends the warm-up phase: freezes every registration into a shared
    /// read-only cache. No further registration is possible afterwards.
    #[must_use]
    pub fn finish(self) -> Arc<MapperCache> {
        let mappings = self
            .mappings
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        info!(directions = mappings.len(), "type-pair cache frozen");
        Arc::new(MapperCache::new(mappings))
    }
}
