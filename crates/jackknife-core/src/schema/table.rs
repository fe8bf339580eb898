use super::{column_name, table_name, AssignType, FieldType, Model};
use crate::{Error, Result};

/// Resolved persistence metadata for one bean type.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescriptor {
    /// Table name, including any configured prefix
    pub name: String,

    /// Fully qualified Rust type name of the bean
    pub type_name: &'static str,

    /// One descriptor per declared field, in declaration order
    pub columns: Vec<ColumnDescriptor>,

    /// Primary key, if the bean declares one
    pub primary_key: Option<PrimaryKey>,
}

/// Resolved metadata for one declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// Declared field name
    pub field: String,

    /// Resolved column name
    pub name: String,

    /// Semantic type tag
    pub ty: FieldType,

    /// Key strategy when this column is part of the primary key
    pub primary_key: Option<AssignType>,

    /// False when the field is excluded from persistence
    pub persistent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    /// Indices into `TableDescriptor::columns`
    pub columns: Vec<usize>,

    /// Assignment strategy shared by all key columns
    pub assign: AssignType,
}

impl TableDescriptor {
    /// Resolves a declared model into a table descriptor.
    ///
    /// `prefix` is prepended to the table name, whether explicit or derived.
    pub fn from_model(model: &Model, prefix: &str) -> Result<TableDescriptor> {
        let base = match &model.table {
            Some(name) => name.clone(),
            None => table_name(model.ty.name()),
        };
        let name = format!("{prefix}{base}");

        let columns: Vec<_> = model
            .fields
            .iter()
            .map(|field| ColumnDescriptor {
                field: field.name.clone(),
                name: field
                    .column
                    .clone()
                    .unwrap_or_else(|| column_name(&field.name)),
                ty: field.ty,
                primary_key: field.primary_key.filter(|_| field.persistent),
                persistent: field.persistent,
            })
            .collect();

        for (i, column) in columns.iter().enumerate() {
            if !column.persistent {
                continue;
            }

            let duplicate = columns[..i]
                .iter()
                .find(|other| other.persistent && other.name == column.name);

            if let Some(other) = duplicate {
                return Err(Error::invalid_schema(format!(
                    "fields `{}` and `{}` of `{}` both map to column `{}`",
                    other.field, column.field, model.ty.name(), column.name
                )));
            }
        }

        let primary_key = Self::resolve_primary_key(&columns, model)?;

        Ok(TableDescriptor {
            name,
            type_name: model.ty.name(),
            columns,
            primary_key,
        })
    }

    fn resolve_primary_key(
        columns: &[ColumnDescriptor],
        model: &Model,
    ) -> Result<Option<PrimaryKey>> {
        let key_columns: Vec<_> = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.primary_key.is_some())
            .map(|(index, _)| index)
            .collect();

        if key_columns.is_empty() {
            return Ok(None);
        }

        let auto: Vec<_> = key_columns
            .iter()
            .map(|&index| &columns[index])
            .filter(|column| column.is_auto_increment())
            .collect();

        match &auto[..] {
            [] => Ok(Some(PrimaryKey {
                columns: key_columns,
                assign: AssignType::ByMyself,
            })),
            [column] => {
                if key_columns.len() > 1 {
                    return Err(Error::invalid_schema(format!(
                        "auto-increment key `{}` of `{}` cannot be combined with other key fields",
                        column.field,
                        model.ty.name()
                    )));
                }

                if !column.ty.is_integer() {
                    return Err(Error::invalid_schema(format!(
                        "auto-increment key `{}` of `{}` must be an integer field",
                        column.field,
                        model.ty.name()
                    )));
                }

                Ok(Some(PrimaryKey {
                    columns: key_columns,
                    assign: AssignType::AutoIncrement,
                }))
            }
            _ => Err(Error::invalid_schema(format!(
                "`{}` declares {} auto-increment primary keys; at most one is allowed",
                model.ty.name(),
                auto.len()
            ))),
        }
    }

    /// Finds a persistent column by its resolved name.
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.persistent().find(|column| column.name == name)
    }

    /// Columns that exist in the table.
    pub fn persistent(&self) -> impl Iterator<Item = &ColumnDescriptor> + '_ {
        self.columns.iter().filter(|column| column.persistent)
    }

    /// Columns written by insert and update statements.
    pub fn persistable(&self) -> impl Iterator<Item = &ColumnDescriptor> + '_ {
        self.columns.iter().filter(|column| column.is_persistable())
    }

    /// Comma separated declared field names of the persistable columns.
    ///
    /// These are field names, not resolved column names. Statements never use
    /// this list; they are built from resolved column names.
    pub fn persistable_columns(&self) -> String {
        self.persistable()
            .map(|column| &column.field[..])
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The auto-increment key column, if the table has one.
    pub fn auto_increment(&self) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.is_auto_increment())
    }

    /// Resolved names of the primary key columns.
    pub fn primary_key_names(&self) -> Vec<&str> {
        self.primary_key
            .iter()
            .flat_map(|pk| pk.columns.iter())
            .map(|&index| &self.columns[index].name[..])
            .collect()
    }
}

impl ColumnDescriptor {
    pub fn is_auto_increment(&self) -> bool {
        self.primary_key == Some(AssignType::AutoIncrement)
    }

    /// True when the column is written by insert and update statements.
    pub fn is_persistable(&self) -> bool {
        self.persistent && !self.is_auto_increment()
    }
}
