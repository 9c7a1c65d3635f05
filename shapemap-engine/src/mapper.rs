//! Mapper façade.
//!
//! The public per-pair API: resolves the compiled conversion function from
//! the type-pair cache and applies it to one or many input values. Single
//! items map directly; async collection variants fan each element out onto
//! the runtime and join the results back in input order.

use crate::builder::CompiledMapping;
use crate::cache::MapperCache;
use crate::error::{MapError, MapResult};
use futures::future::try_join_all;
use shapemap_model::Shaped;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The conversion façade for one (model, entity) pair.
///
/// Holds a handle to the shared frozen cache; resolving and cloning it is
/// cheap, so callers typically construct one per use site.
pub struct Mapper<M, E> {
    cache: Arc<MapperCache>,
    _pair: PhantomData<fn() -> (M, E)>,
}

impl<M, E> Clone for Mapper<M, E> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            _pair: PhantomData,
        }
    }
}

impl<M: Shaped, E: Shaped> Mapper<M, E> {
    #[must_use]
    pub fn new(cache: Arc<MapperCache>) -> Self {
        Self {
            cache,
            _pair: PhantomData,
        }
    }

    // ── Single values ────────────────────────────────────────────

    /// Converts one entity into a model.
    pub fn to_model(&self, source: &E) -> MapResult<M> {
        self.cache.get::<E, M>()?.apply(source)
    }

    /// Converts one model into an entity.
    pub fn to_entity(&self, source: &M) -> MapResult<E> {
        self.cache.get::<M, E>()?.apply(source)
    }

    // ── Collections ──────────────────────────────────────────────

    /// Converts a slice of entities, resolving the conversion function
    /// once. Output length and element order match the input exactly.
    pub fn to_models(&self, sources: &[E]) -> MapResult<Vec<M>> {
        let mapping = self.cache.get::<E, M>()?;
        sources.iter().map(|source| mapping.apply(source)).collect()
    }

    /// Converts a slice of models, resolving the conversion function once.
    pub fn to_entities(&self, sources: &[M]) -> MapResult<Vec<E>> {
        let mapping = self.cache.get::<M, E>()?;
        sources.iter().map(|source| mapping.apply(source)).collect()
    }

    // ── Async variants ───────────────────────────────────────────

    /// Async single-item conversion. The work is trivial synchronous
    /// copying, so it runs directly rather than bouncing through a
    /// spawned task.
    pub async fn to_model_async(&self, source: &E) -> MapResult<M> {
        self.to_model(source)
    }

    /// Async single-item conversion, model to entity.
    pub async fn to_entity_async(&self, source: &M) -> MapResult<E> {
        self.to_entity(source)
    }

    /// Fans each entity out as its own task and joins the models back in
    /// input order.
    ///
    /// `cancel` is checked before each element is dispatched; observing it
    /// returns [`MapError::Cancelled`] without scheduling further work, but
    /// elements already dispatched run to completion and their results are
    /// discarded. Cancellation is advisory, not mid-element preemption.
    pub async fn to_models_async(
        &self,
        sources: Vec<E>,
        cancel: &CancellationToken,
    ) -> MapResult<Vec<M>> {
        fan_out(self.cache.get::<E, M>()?, sources, cancel).await
    }

    /// Fans each model out as its own task and joins the entities back in
    /// input order. Same cancellation contract as
    /// [`to_models_async`](Self::to_models_async).
    pub async fn to_entities_async(
        &self,
        sources: Vec<M>,
        cancel: &CancellationToken,
    ) -> MapResult<Vec<E>> {
        fan_out(self.cache.get::<M, E>()?, sources, cancel).await
    }
}

impl MapperCache {
    /// Resolves the façade for a pair from a shared cache handle.
    #[must_use]
    pub fn mapper<M: Shaped, E: Shaped>(self: &Arc<Self>) -> Mapper<M, E> {
        Mapper::new(Arc::clone(self))
    }
}

/// Spawns one task per element, then awaits all handles. `try_join_all`
/// keeps the output in input order and fails fast on the first error.
async fn fan_out<S: Shaped, D: Shaped>(
    mapping: CompiledMapping<S, D>,
    sources: Vec<S>,
    cancel: &CancellationToken,
) -> MapResult<Vec<D>> {
    let mut handles = Vec::with_capacity(sources.len());
    for source in sources {
        if cancel.is_cancelled() {
            return Err(MapError::Cancelled);
        }
        let mapping = mapping.clone();
        handles.push(tokio::spawn(async move { mapping.apply(&source) }));
    }

    try_join_all(handles.into_iter().map(|handle| async move {
        match handle.await {
            Ok(result) => result,
            Err(err) => Err(MapError::Join(err.to_string())),
        }
    }))
    .await
}
