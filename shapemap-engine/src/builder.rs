//! Mapping-function builder.
//!
//! Compiles a [`FieldCorrespondence`] plus an optional override routine into
//! a single [`CompiledMapping`]: one closure per direction, built once at
//! registration and invoked many times afterwards without recompilation.

use crate::error::{ConfigError, MapError, MapResult};
use crate::matcher::FieldCorrespondence;
use shapemap_model::{Shaped, ValueBag};
use std::sync::Arc;

/// An override routine for one direction, already bound to its
/// `MapDefinition` method by the registry.
pub(crate) type OverrideFn<S, D> = Arc<dyn Fn(&S, &mut D) -> anyhow::Result<()> + Send + Sync>;

/// A compiled `source -> destination` conversion function.
///
/// Immutable and cheaply clonable; every clone shares the same underlying
/// closure. The closure captures only the binding lists and the override
/// handle, so it is safe to invoke concurrently with distinct arguments.
pub struct CompiledMapping<S, D> {
    apply: Arc<dyn Fn(&S) -> MapResult<D> + Send + Sync>,
}

impl<S, D> Clone for CompiledMapping<S, D> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<S, D> std::fmt::Debug for CompiledMapping<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledMapping").finish_non_exhaustive()
    }
}

impl<S: Shaped, D: Shaped> CompiledMapping<S, D> {
    /// Converts one source instance into a destination instance.
    pub fn apply(&self, source: &S) -> MapResult<D> {
        (self.apply)(source)
    }
}

/// Compiles `correspondence` into a conversion function.
///
/// Fails when the destination requires constructor arguments and the
/// correspondence cannot supply all of them; this is a warm-up-time
/// configuration error, never a request-time condition.
pub(crate) fn compile<S: Shaped, D: Shaped>(
    correspondence: FieldCorrespondence,
    override_fn: Option<OverrideFn<S, D>>,
) -> Result<CompiledMapping<S, D>, ConfigError> {
    for &param in D::schema().ctor_params {
        if !correspondence.ctor.iter().any(|b| b.param == param) {
            return Err(ConfigError::UnresolvedConstructor {
                source: S::schema().name,
                destination: D::schema().name,
                param,
            });
        }
    }

    let apply = move |source: &S| -> MapResult<D> {
        // Collect constructor arguments and direct bindings into one bag so
        // the destination is initialized in a single step; a half-bound
        // instance is never observable.
        let mut init = ValueBag::new();
        for binding in &correspondence.ctor {
            if let Some(value) = source.read(binding.source) {
                init.insert(binding.param, value);
            }
        }
        for binding in &correspondence.direct {
            if let Some(value) = source.read(binding.source) {
                init.insert(binding.destination, value);
            }
        }

        let mut destination = D::build(&init);

        if let Some(run_override) = &override_fn {
            run_override(source, &mut destination).map_err(MapError::Override)?;
        }

        Ok(destination)
    };

    Ok(CompiledMapping {
        apply: Arc::new(apply),
    })
}
