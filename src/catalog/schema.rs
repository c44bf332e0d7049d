//! Static schema table: one descriptor per entity kind, driving validation,
//! SQL construction, and serialization.

use super::EntityKind;

/// Storage/JSON type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Boolean,
}

/// Extra format constraint checked during validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
}

/// One column of an entity table. `sensitive` columns are accepted on insert
/// but stripped from every serialized response.
#[derive(Debug)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub sensitive: bool,
    pub format: Option<FieldFormat>,
}

const fn text(name: &'static str) -> ColumnSpec {
    ColumnSpec {
        name,
        ty: FieldType::Text,
        required: true,
        sensitive: false,
        format: None,
    }
}

/// Schema descriptor for one entity kind. The generated `id` column is
/// implicit and never part of a create payload.
#[derive(Debug)]
pub struct EntitySchema {
    pub table: &'static str,
    /// Column surfaced as `name` in summary listings.
    pub summary_column: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl EntitySchema {
    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns that appear in serialized output.
    pub fn select_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|c| !c.sensitive)
    }
}

static USERS: EntitySchema = EntitySchema {
    table: "users",
    // Users have no `name` column; email is the required unique handle.
    summary_column: "email",
    columns: &[
        ColumnSpec {
            name: "email",
            ty: FieldType::Text,
            required: true,
            sensitive: false,
            format: Some(FieldFormat::Email),
        },
        ColumnSpec {
            name: "password",
            ty: FieldType::Text,
            required: true,
            sensitive: true,
            format: None,
        },
        // Defaults to true at the storage layer when omitted.
        ColumnSpec {
            name: "is_active",
            ty: FieldType::Boolean,
            required: false,
            sensitive: false,
            format: None,
        },
        ColumnSpec {
            name: "username",
            ty: FieldType::Text,
            required: false,
            sensitive: false,
            format: None,
        },
    ],
};

static PLANETS: EntitySchema = EntitySchema {
    table: "planets",
    summary_column: "name",
    columns: &[
        text("name"),
        text("climate"),
        text("terrain"),
        text("gravity"),
        text("population"),
    ],
};

static CHARACTERS: EntitySchema = EntitySchema {
    table: "characters",
    summary_column: "name",
    columns: &[text("name"), text("skin_color"), text("mass"), text("height")],
};

static STARSHIPS: EntitySchema = EntitySchema {
    table: "starships",
    summary_column: "name",
    columns: &[
        text("name"),
        text("model"),
        text("crew"),
        text("length"),
        text("starship_class"),
    ],
};

impl EntityKind {
    pub fn schema(&self) -> &'static EntitySchema {
        match self {
            EntityKind::Users => &USERS,
            EntityKind::Planets => &PLANETS,
            EntityKind::Characters => &CHARACTERS,
            EntityKind::Starships => &STARSHIPS,
        }
    }
}
