use super::{AssignType, FieldType};
use crate::stmt::TypeHandle;

/// Static description of a bean type, as declared by its author.
///
/// This is what `#[derive(Bean)]` generates. It carries the declarations
/// verbatim (optional overrides, key strategies, exclusions); resolving it into
/// a [`TableDescriptor`](super::TableDescriptor) applies naming rules and
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Handle for the bean type itself
    pub ty: TypeHandle,

    /// Explicit table name, if any
    pub table: Option<String>,

    /// Declared fields, in declaration order
    pub fields: Vec<Field>,
}

/// A declared bean field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name as written in the type
    pub name: String,

    /// Semantic type tag
    pub ty: FieldType,

    /// Explicit column name, if any
    pub column: Option<String>,

    /// Primary key strategy when the field is part of the key
    pub primary_key: Option<AssignType>,

    /// False when the field is excluded from persistence
    pub persistent: bool,
}

impl Model {
    pub fn new<T: 'static>() -> Model {
        Model {
            ty: TypeHandle::of::<T>(),
            table: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, name: impl Into<String>) -> Model {
        self.table = Some(name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Field {
        Field {
            name: name.into(),
            ty,
            column: None,
            primary_key: None,
            persistent: true,
        }
    }

    /// A field that is never read from or written to the database.
    ///
    /// Excluded fields carry the opaque `Binary` tag.
    pub fn excluded(name: impl Into<String>) -> Field {
        Field {
            persistent: false,
            ..Field::new(name, FieldType::Binary)
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Field {
        self.column = Some(name.into());
        self
    }

    pub fn primary_key(mut self, assign: AssignType) -> Field {
        self.primary_key = Some(assign);
        self
    }
}
