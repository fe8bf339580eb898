use super::{Formatter, Params, ToSql};

use jackknife_core::schema::FieldType;

impl ToSql for FieldType {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            match self {
                FieldType::Boolean | FieldType::Integer => "INTEGER",
                FieldType::Float => "REAL",
                FieldType::Text | FieldType::TypeRef => "TEXT",
                FieldType::Binary => "BLOB",
            }
        );
    }
}
