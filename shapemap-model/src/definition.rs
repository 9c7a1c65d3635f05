use crate::Shaped;

/// Optional override capability for a (model, entity) mapping pair.
///
/// The engine runs the matching method after structural binding has fully
/// initialized the destination, so an override sees the finished structural
/// copy and may overwrite any field. Override writes always win over
/// structurally bound values.
///
/// Most pairs do NOT need an override; the structural copy covers every
/// field the two shapes share by name. Implement this only for fields the
/// shapes disagree on (renames beyond the fixed constructor alias, derived
/// values, composite payloads).
///
/// Errors returned here propagate unmodified to the caller of the mapping
/// entry point.
pub trait MapDefinition<M: Shaped, E: Shaped>: Send + Sync {
    /// Customize `destination` after the structural model-to-entity copy.
    fn model_to_entity(&self, source: &M, destination: &mut E) -> anyhow::Result<()>;

    /// Customize `destination` after the structural entity-to-model copy.
    fn entity_to_model(&self, source: &E, destination: &mut M) -> anyhow::Result<()>;
}
