//! Structural matcher.
//!
//! Computes which source fields feed which destination fields or
//! constructor parameters, purely from the two [`TypeSchema`]s. Partial
//! overlap is the normal case: unmatched destination slots stay at their
//! defaults and unmatched source fields are ignored, without signaling.

use shapemap_model::TypeSchema;
use tracing::debug;

/// The one fixed constructor-parameter rename. A parameter spelled as
/// either half of the pair falls back to a source field spelled as the
/// other half. This is a documented alias, not a fuzzy-matching scheme.
pub const CTOR_PARAM_ALIAS: (&str, &str) = ("full_name", "name");

/// A source field copied into a writable destination field of the same
/// name and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectBinding {
    pub source: &'static str,
    pub destination: &'static str,
}

/// A source field supplying a destination constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtorBinding {
    pub param: &'static str,
    pub source: &'static str,
}

/// The correspondence between a source schema and a destination schema.
///
/// Transient: consumed by the builder while compiling a mapping and not
/// retained afterwards.
#[derive(Debug, Clone, Default)]
pub struct FieldCorrespondence {
    pub direct: Vec<DirectBinding>,
    pub ctor: Vec<CtorBinding>,
}

impl FieldCorrespondence {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.ctor.is_empty()
    }
}

/// Computes the field correspondence from `source` to `destination`.
///
/// Direct bindings require an identical name, a writable destination field,
/// and the same scalar kind on both sides; composite fields never bind.
/// Constructor parameters match a source field by name, with the single
/// [`CTOR_PARAM_ALIAS`] fallback.
#[must_use]
pub fn correspondence(
    source: &'static TypeSchema,
    destination: &'static TypeSchema,
) -> FieldCorrespondence {
    let mut result = FieldCorrespondence::default();

    for field in source.fields {
        if !field.kind.is_scalar() {
            continue;
        }
        let Some(target) = destination.field(field.name) else {
            continue;
        };
        if target.writable && target.kind == field.kind {
            result.direct.push(DirectBinding {
                source: field.name,
                destination: target.name,
            });
        }
    }

    for &param in destination.ctor_params {
        let matched = source
            .field(param)
            .or_else(|| alias_of(param).and_then(|alias| source.field(alias)))
            .filter(|f| f.kind.is_scalar());
        if let Some(field) = matched {
            result.ctor.push(CtorBinding {
                param,
                source: field.name,
            });
        }
    }

    debug!(
        source = %source.name,
        destination = %destination.name,
        direct = result.direct.len(),
        ctor = result.ctor.len(),
        "computed field correspondence"
    );

    result
}

fn alias_of(param: &str) -> Option<&'static str> {
    let (a, b) = CTOR_PARAM_ALIAS;
    if param == a {
        Some(b)
    } else if param == b {
        Some(a)
    } else {
        None
    }
}
