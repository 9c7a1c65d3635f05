use crate::{ScalarValue, TypeSchema, ValueBag};

/// Capability trait a type implements to participate in structural mapping.
///
/// The engine never touches a type's fields directly. It reads scalar values
/// by name through [`read`](Shaped::read) and constructs instances in a
/// single step through [`build`](Shaped::build), passing every bound value
/// (constructor arguments and direct bindings together) in one [`ValueBag`].
/// A partially constructed instance is therefore never observable.
///
/// Implementations are plain hand-written glue:
///
/// ```
/// use shapemap_model::{FieldKind, ScalarValue, SchemaField, Shaped, TypeSchema, ValueBag};
///
/// struct Note {
///     id: i64,
///     title: String,
/// }
///
/// static NOTE_SCHEMA: TypeSchema = TypeSchema {
///     name: "Note",
///     fields: &[
///         SchemaField::new("id", FieldKind::Int),
///         SchemaField::new("title", FieldKind::Text),
///     ],
///     ctor_params: &[],
/// };
///
/// impl Shaped for Note {
///     fn schema() -> &'static TypeSchema {
///         &NOTE_SCHEMA
///     }
///
///     fn read(&self, field: &str) -> Option<ScalarValue> {
///         match field {
///             "id" => Some(ScalarValue::Int(self.id)),
///             "title" => Some(ScalarValue::Text(self.title.clone())),
///             _ => None,
///         }
///     }
///
///     fn build(init: &ValueBag) -> Self {
///         Self {
///             id: init.int("id").unwrap_or_default(),
///             title: init.text("title").unwrap_or_default().to_string(),
///         }
///     }
/// }
/// ```
pub trait Shaped: Sized + Send + Sync + 'static {
    /// The static description of this type's fields and constructor.
    fn schema() -> &'static TypeSchema;

    /// Reads one declared scalar field by name. Returns `None` for unknown
    /// names and for composite fields.
    fn read(&self, field: &str) -> Option<ScalarValue>;

    /// Constructs an instance from bound values. Any slot absent from the
    /// bag takes the field's default; that is the normal partial-overlap
    /// case, not an error.
    fn build(init: &ValueBag) -> Self;
}
