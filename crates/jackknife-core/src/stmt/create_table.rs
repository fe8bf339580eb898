use crate::schema::{FieldType, TableDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub name: String,

    pub columns: Vec<ColumnDef>,

    /// Caller-assigned primary key columns. Empty when the table has no key
    /// or an auto-increment key, which is declared inline on its column.
    pub primary_key: Vec<String>,

    pub if_not_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: FieldType,
    pub auto_increment: bool,
}

impl CreateTable {
    pub fn from_table(table: &TableDescriptor) -> CreateTable {
        let columns = table
            .persistent()
            .map(|column| ColumnDef {
                name: column.name.clone(),
                ty: column.ty,
                auto_increment: column.is_auto_increment(),
            })
            .collect();

        let primary_key = if table.auto_increment().is_some() {
            vec![]
        } else {
            table
                .primary_key_names()
                .into_iter()
                .map(String::from)
                .collect()
        };

        CreateTable {
            name: table.name.clone(),
            columns,
            primary_key,
            if_not_exists: true,
        }
    }
}
