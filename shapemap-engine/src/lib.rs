//! Mapping-function synthesis engine for shapemap.
//!
//! Synthesizes, caches, and invokes bidirectional conversion functions
//! between pairs of structurally similar types (a "model" shape and an
//! "entity" shape), so callers never hand-write per-field copy code.
//!
//! # Components
//!
//! - **Matcher**: computes which source fields feed which destination
//!   fields or constructor parameters, purely from the two schemas
//! - **Builder**: compiles a correspondence plus an optional override
//!   routine into one conversion closure per direction
//! - **Cache**: the frozen registry from ordered type pair to compiled
//!   function, shared read-only across all callers
//! - **Mapper**: the per-pair façade with sync and async entry points
//!
//! # Lifecycle
//!
//! 1. **Warm-up**: startup code registers every discovered (model, entity)
//!    pair into a [`MapperRegistry`]; each registration compiles and stores
//!    both directions. Configuration problems (an unconstructible
//!    destination) fail here, never at request time.
//! 2. **Freeze**: [`MapperRegistry::finish`] turns the registry into a
//!    shared read-only [`MapperCache`].
//! 3. **Steady state**: request code resolves a [`Mapper`] per pair and
//!    converts single values or collections, synchronously or with
//!    per-element fan-out.
//!
//! # Example
//!
//! ```
//! use shapemap_engine::MapperRegistry;
//! use shapemap_model::{FieldKind, ScalarValue, SchemaField, Shaped, TypeSchema, ValueBag};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     id: i64,
//!     name: String,
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct PersonRecord {
//!     id: i64,
//!     full_name: String,
//! }
//!
//! static PERSON: TypeSchema = TypeSchema {
//!     name: "Person",
//!     fields: &[
//!         SchemaField::new("id", FieldKind::Int),
//!         SchemaField::new("name", FieldKind::Text),
//!     ],
//!     ctor_params: &["name"],
//! };
//!
//! static PERSON_RECORD: TypeSchema = TypeSchema {
//!     name: "PersonRecord",
//!     fields: &[
//!         SchemaField::new("id", FieldKind::Int),
//!         SchemaField::read_only("full_name", FieldKind::Text),
//!     ],
//!     ctor_params: &["full_name"],
//! };
//!
//! impl Shaped for Person {
//!     fn schema() -> &'static TypeSchema {
//!         &PERSON
//!     }
//!     fn read(&self, field: &str) -> Option<ScalarValue> {
//!         match field {
//!             "id" => Some(ScalarValue::Int(self.id)),
//!             "name" => Some(ScalarValue::Text(self.name.clone())),
//!             _ => None,
//!         }
//!     }
//!     fn build(init: &ValueBag) -> Self {
//!         Self {
//!             id: init.int("id").unwrap_or_default(),
//!             name: init.text("name").unwrap_or_default().to_string(),
//!         }
//!     }
//! }
//!
//! impl Shaped for PersonRecord {
//!     fn schema() -> &'static TypeSchema {
//!         &PERSON_RECORD
//!     }
//!     fn read(&self, field: &str) -> Option<ScalarValue> {
//!         match field {
//!             "id" => Some(ScalarValue::Int(self.id)),
//!             "full_name" => Some(ScalarValue::Text(self.full_name.clone())),
//!             _ => None,
//!         }
//!     }
//!     fn build(init: &ValueBag) -> Self {
//!         Self {
//!             id: init.int("id").unwrap_or_default(),
//!             full_name: init.text("full_name").unwrap_or_default().to_string(),
//!         }
//!     }
//! }
//!
//! let registry = MapperRegistry::new();
//! registry.register::<Person, PersonRecord>().unwrap();
//! let cache = registry.finish();
//!
//! let mapper = cache.mapper::<Person, PersonRecord>();
//! let record = mapper
//!     .to_entity(&Person { id: 1, name: "Ann".into() })
//!     .unwrap();
//! assert_eq!(record, PersonRecord { id: 1, full_name: "Ann".into() });
//!
//! let person = mapper.to_model(&record).unwrap();
//! assert_eq!(person, Person { id: 1, name: "Ann".into() });
//! ```

mod builder;
mod cache;
mod error;
mod mapper;
mod matcher;
mod registry;

pub use builder::CompiledMapping;
pub use cache::{MapperCache, TypePair};
pub use error::{ConfigError, MapError, MapResult};
pub use mapper::Mapper;
pub use matcher::{correspondence, CtorBinding, DirectBinding, FieldCorrespondence, CTOR_PARAM_ALIAS};
pub use registry::MapperRegistry;
