//! Type-pair cache.
//!
//! A read-only registry from ordered (source, destination) type pair to the
//! compiled conversion function for that direction. Produced by freezing a
//! [`MapperRegistry`](crate::MapperRegistry) at the end of warm-up; after
//! that point there is no writer, so lookups are plain hash reads that never
//! block, no matter how many callers share the cache.

use crate::builder::CompiledMapping;
use crate::error::MapError;
use shapemap_model::Shaped;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered cache key: `(A, B)` and `(B, A)` are distinct entries, one per
/// conversion direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    source: TypeId,
    destination: TypeId,
}

impl TypePair {
    /// The key for the `S -> D` direction.
    #[must_use]
    pub fn of<S: 'static, D: 'static>() -> Self {
        Self {
            source: TypeId::of::<S>(),
            destination: TypeId::of::<D>(),
        }
    }
}

pub(crate) type ErasedMapping = Arc<dyn Any + Send + Sync>;

/// The frozen type-pair cache. Every registered pair holds exactly one
/// compiled mapping per direction; entries are never removed or replaced.
pub struct MapperCache {
    mappings: HashMap<TypePair, ErasedMapping>,
}

impl MapperCache {
    pub(crate) fn new(mappings: HashMap<TypePair, ErasedMapping>) -> Self {
        Self { mappings }
    }

    /// Looks up the compiled `S -> D` conversion function.
    ///
    /// An unregistered pair is a distinct [`MapError::NotFound`], never a
    /// usable-looking function that silently copies nothing.
    pub fn get<S: Shaped, D: Shaped>(&self) -> Result<CompiledMapping<S, D>, MapError> {
        let erased = self
            .mappings
            .get(&TypePair::of::<S, D>())
            .ok_or(MapError::NotFound {
                source: S::schema().name,
                destination: D::schema().name,
            })?;
        let mapping = erased
            .downcast_ref::<CompiledMapping<S, D>>()
            .expect("type-pair cache entry stored under a mismatched key");
        Ok(mapping.clone())
    }

    /// Whether the `S -> D` direction is registered.
    #[must_use]
    pub fn contains<S: Shaped, D: Shaped>(&self) -> bool {
        self.mappings.contains_key(&TypePair::of::<S, D>())
    }

    /// Number of registered directions (two per mapping pair).
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
