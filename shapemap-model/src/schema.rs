use crate::FieldKind;

/// A single declared field of a mappable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Whether the field can be set during construction. Read-only fields
    /// are still readable as a mapping source.
    pub writable: bool,
}

impl SchemaField {
    /// A writable field.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            writable: true,
        }
    }

    /// A field that can be read from but never bound to.
    #[must_use]
    pub const fn read_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            writable: false,
        }
    }
}

/// Describes a mappable type: its fields and its constructor parameters.
///
/// Each [`Shaped`](crate::Shaped) type exposes exactly one of these as a
/// `&'static` constant. An empty `ctor_params` slice means the type
/// constructs without arguments; a non-empty slice lists the parameter
/// names, each of which must resolve to a source field when the type is a
/// mapping destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSchema {
    pub name: &'static str,
    pub fields: &'static [SchemaField],
    pub ctor_params: &'static [&'static str],
}

impl TypeSchema {
    /// Looks up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether construction requires arguments.
    #[must_use]
    pub const fn has_ctor_params(&self) -> bool {
        !self.ctor_params.is_empty()
    }
}
