//! Core shape model for shapemap.
//!
//! Defines the universal types the mapping engine depends on:
//! - [`ScalarValue`] / [`FieldKind`] — the value-like payloads eligible for
//!   structural copying, and the kind tags declared in schemas
//! - [`TypeSchema`] / [`SchemaField`] — a type's declared fields and
//!   constructor parameters
//! - [`ValueBag`] — the transient bag of bound values a destination is
//!   constructed from
//! - [`Shaped`] — the capability trait a type implements to participate in
//!   structural mapping
//! - [`MapDefinition`] — the optional override capability trait for
//!   customizing specific fields after structural binding
//!
//! These types are consumed by `shapemap-engine`, which matches two schemas,
//! compiles a conversion function per direction, and caches it per type pair.

mod definition;
mod schema;
mod shaped;
mod value;

pub use definition::MapDefinition;
pub use schema::{SchemaField, TypeSchema};
pub use shaped::Shaped;
pub use value::{FieldKind, ScalarValue, ValueBag};
