//! Shared fixture types for engine tests.

#![allow(dead_code)]

use shapemap_model::{
    FieldKind, MapDefinition, ScalarValue, SchemaField, Shaped, TypeSchema, ValueBag,
};

// ── Person / PersonRecord: constructor-alias pair ────────────────

/// Model side of the alias pair. Constructed from its `name` parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

/// Entity side of the alias pair. `full_name` is only settable through the
/// constructor, supplied by the aliased `name` source field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonRecord {
    pub id: i64,
    pub full_name: String,
}

static PERSON: TypeSchema = TypeSchema {
    name: "Person",
    fields: &[
        SchemaField::new("id", FieldKind::Int),
        SchemaField::new("name", FieldKind::Text),
    ],
    ctor_params: &["name"],
};

static PERSON_RECORD: TypeSchema = TypeSchema {
    name: "PersonRecord",
    fields: &[
        SchemaField::new("id", FieldKind::Int),
        SchemaField::read_only("full_name", FieldKind::Text),
    ],
    ctor_params: &["full_name"],
};

impl Shaped for Person {
    fn schema() -> &'static TypeSchema {
        &PERSON
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "id" => Some(ScalarValue::Int(self.id)),
            "name" => Some(ScalarValue::Text(self.name.clone())),
            _ => None,
        }
    }

    fn build(init: &ValueBag) -> Self {
        Self {
            id: init.int("id").unwrap_or_default(),
            name: init.text("name").unwrap_or_default().to_string(),
        }
    }
}

impl Shaped for PersonRecord {
    fn schema() -> &'static TypeSchema {
        &PERSON_RECORD
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "id" => Some(ScalarValue::Int(self.id)),
            "full_name" => Some(ScalarValue::Text(self.full_name.clone())),
            _ => None,
        }
    }

    fn build(init: &ValueBag) -> Self {
        Self {
            id: init.int("id").unwrap_or_default(),
            full_name: init.text("full_name").unwrap_or_default().to_string(),
        }
    }
}

// ── Task / TaskRow: every scalar kind, parameterless construction ─

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub priority: u64,
    pub score: f64,
    pub due_at: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub priority: u64,
    pub score: f64,
    pub due_at: i64,
}

static TASK_FIELDS: [SchemaField; 6] = [
    SchemaField::new("id", FieldKind::Int),
    SchemaField::new("title", FieldKind::Text),
    SchemaField::new("done", FieldKind::Bool),
    SchemaField::new("priority", FieldKind::UInt),
    SchemaField::new("score", FieldKind::Float),
    SchemaField::new("due_at", FieldKind::Timestamp),
];

static TASK: TypeSchema = TypeSchema {
    name: "Task",
    fields: &TASK_FIELDS,
    ctor_params: &[],
};

static TASK_ROW: TypeSchema = TypeSchema {
    name: "TaskRow",
    fields: &TASK_FIELDS,
    ctor_params: &[],
};

fn read_task_field(
    field: &str,
    id: i64,
    title: &str,
    done: bool,
    priority: u64,
    score: f64,
    due_at: i64,
) -> Option<ScalarValue> {
    match field {
        "id" => Some(ScalarValue::Int(id)),
        "title" => Some(ScalarValue::Text(title.to_string())),
        "done" => Some(ScalarValue::Bool(done)),
        "priority" => Some(ScalarValue::UInt(priority)),
        "score" => Some(ScalarValue::Float(score)),
        "due_at" => Some(ScalarValue::Timestamp(due_at)),
        _ => None,
    }
}

fn build_task_parts(init: &ValueBag) -> (i64, String, bool, u64, f64, i64) {
    (
        init.int("id").unwrap_or_default(),
        init.text("title").unwrap_or_default().to_string(),
        init.flag("done").unwrap_or_default(),
        init.uint("priority").unwrap_or_default(),
        init.float("score").unwrap_or_default(),
        init.timestamp("due_at").unwrap_or_default(),
    )
}

impl Shaped for Task {
    fn schema() -> &'static TypeSchema {
        &TASK
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        read_task_field(
            field,
            self.id,
            &self.title,
            self.done,
            self.priority,
            self.score,
            self.due_at,
        )
    }

    fn build(init: &ValueBag) -> Self {
        let (id, title, done, priority, score, due_at) = build_task_parts(init);
        Self {
            id,
            title,
            done,
            priority,
            score,
            due_at,
        }
    }
}

impl Shaped for TaskRow {
    fn schema() -> &'static TypeSchema {
        &TASK_ROW
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        read_task_field(
            field,
            self.id,
            &self.title,
            self.done,
            self.priority,
            self.score,
            self.due_at,
        )
    }

    fn build(init: &ValueBag) -> Self {
        let (id, title, done, priority, score, due_at) = build_task_parts(init);
        Self {
            id,
            title,
            done,
            priority,
            score,
            due_at,
        }
    }
}

// ── Profile pair: composite field plus a kind mismatch ───────────

/// `address` is composite and must never bind directly; `code` is text here
/// but an integer on the row side, so it must not bind either.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Profile {
    pub bio: String,
    pub code: String,
    pub address: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileRow {
    pub bio: String,
    pub code: i64,
    pub address: Vec<String>,
}

static PROFILE: TypeSchema = TypeSchema {
    name: "Profile",
    fields: &[
        SchemaField::new("bio", FieldKind::Text),
        SchemaField::new("code", FieldKind::Text),
        SchemaField::new("address", FieldKind::Composite),
    ],
    ctor_params: &[],
};

static PROFILE_ROW: TypeSchema = TypeSchema {
    name: "ProfileRow",
    fields: &[
        SchemaField::new("bio", FieldKind::Text),
        SchemaField::new("code", FieldKind::Int),
        SchemaField::new("address", FieldKind::Composite),
    ],
    ctor_params: &[],
};

impl Shaped for Profile {
    fn schema() -> &'static TypeSchema {
        &PROFILE
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "bio" => Some(ScalarValue::Text(self.bio.clone())),
            "code" => Some(ScalarValue::Text(self.code.clone())),
            _ => None,
        }
    }

    fn build(init: &ValueBag) -> Self {
        Self {
            bio: init.text("bio").unwrap_or_default().to_string(),
            code: init.text("code").unwrap_or_default().to_string(),
            address: Vec::new(),
        }
    }
}

impl Shaped for ProfileRow {
    fn schema() -> &'static TypeSchema {
        &PROFILE_ROW
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "bio" => Some(ScalarValue::Text(self.bio.clone())),
            "code" => Some(ScalarValue::Int(self.code)),
            _ => None,
        }
    }

    fn build(init: &ValueBag) -> Self {
        Self {
            bio: init.text("bio").unwrap_or_default().to_string(),
            code: init.int("code").unwrap_or_default(),
            address: Vec::new(),
        }
    }
}

// ── OrphanRecord: unconstructible from Person ────────────────────

/// Requires an `owner` constructor argument no fixture source supplies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrphanRecord {
    pub owner: String,
}

static ORPHAN_RECORD: TypeSchema = TypeSchema {
    name: "OrphanRecord",
    fields: &[SchemaField::read_only("owner", FieldKind::Text)],
    ctor_params: &["owner"],
};

impl Shaped for OrphanRecord {
    fn schema() -> &'static TypeSchema {
        &ORPHAN_RECORD
    }

    fn read(&self, field: &str) -> Option<ScalarValue> {
        match field {
            "owner" => Some(ScalarValue::Text(self.owner.clone())),
            _ => None,
        }
    }

    fn build(init: &ValueBag) -> Self {
        Self {
            owner: init.text("owner").unwrap_or_default().to_string(),
        }
    }
}

// ── Override definitions ─────────────────────────────────────────

/// Doubles `id` on the way to the row and halves it on the way back,
/// overwriting the structurally copied value in both directions.
pub struct DoubleIdDefinition;

impl MapDefinition<Task, TaskRow> for DoubleIdDefinition {
    fn model_to_entity(&self, source: &Task, destination: &mut TaskRow) -> anyhow::Result<()> {
        destination.id = source.id * 2;
        Ok(())
    }

    fn entity_to_model(&self, source: &TaskRow, destination: &mut Task) -> anyhow::Result<()> {
        destination.id = source.id / 2;
        Ok(())
    }
}

/// Always fails, for error-propagation tests.
pub struct FailingDefinition;

impl MapDefinition<Task, TaskRow> for FailingDefinition {
    fn model_to_entity(&self, _source: &Task, _destination: &mut TaskRow) -> anyhow::Result<()> {
        anyhow::bail!("model_to_entity rejected")
    }

    fn entity_to_model(&self, _source: &TaskRow, _destination: &mut Task) -> anyhow::Result<()> {
        anyhow::bail!("entity_to_model rejected")
    }
}
