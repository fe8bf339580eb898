//! Conversion between beans and rows.
//!
//! Encoding reads every persistable field of a bean and converts it by its
//! semantic tag; decoding builds a fresh bean and writes back every column the
//! row carries. Both directions are lenient: a field that cannot be converted
//! is reported as a [`Diagnostic`] and the remaining fields are still
//! processed.

use crate::{Bean, Error, Result};

use jackknife_core::{
    schema::{ColumnDescriptor, FieldType, Registry, TableDescriptor},
    stmt::{Row, SqlValue, Value},
};

/// A field that could not be converted.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Declared field name
    pub field: String,

    pub error: Error,
}

/// The result of encoding a bean.
#[derive(Debug)]
pub struct Encoded {
    /// Column values, keyed by resolved column name
    pub row: Row,

    pub diagnostics: Vec<Diagnostic>,
}

/// The result of decoding a row.
#[derive(Debug)]
pub struct Decoded<T> {
    pub bean: T,

    pub diagnostics: Vec<Diagnostic>,
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl Encoded {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl<T> Decoded<T> {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Encodes the persistable fields of `bean`.
///
/// Non-persistent fields and an auto-increment key are never part of the
/// row.
pub fn encode<T: Bean>(table: &TableDescriptor, bean: &T) -> Encoded {
    let mut row = Row::new();
    let mut diagnostics = vec![];

    for column in table.persistable() {
        match bean
            .get(&column.field)
            .and_then(|value| encode_value(column, value))
        {
            Ok(value) => row.insert(column.name.clone(), value),
            Err(error) => diagnostics.push(Diagnostic {
                field: column.field.clone(),
                error,
            }),
        }
    }

    Encoded { row, diagnostics }
}

fn encode_value(column: &ColumnDescriptor, value: Value) -> Result<SqlValue> {
    let mismatch = |value: &Value| {
        Error::field_access(
            &column.field,
            format!("{} value does not fit a {:?} column", value.kind(), column.ty),
        )
    };

    Ok(match (column.ty, value) {
        (_, Value::Null) => SqlValue::Null,
        (FieldType::Text, Value::String(v)) => SqlValue::Text(v),
        (FieldType::Boolean, Value::Bool(v)) => SqlValue::Integer(i64::from(v)),
        (FieldType::Integer, value) => match value.to_i64() {
            Some(v) => SqlValue::Integer(v),
            None => return Err(mismatch(&value)),
        },
        (FieldType::Float, value) => match value.to_f64() {
            Some(v) => SqlValue::Real(v),
            None => return Err(mismatch(&value)),
        },
        (FieldType::TypeRef, Value::Type(handle)) => SqlValue::Text(handle.name().to_string()),
        (FieldType::Binary, Value::Bytes(v)) => SqlValue::Blob(v),
        (_, value) => return Err(mismatch(&value)),
    })
}

/// Decodes `row` into a new bean.
///
/// Columns that do not belong to a persistent field are ignored. Fields
/// without a column in the row keep their default value.
pub fn decode<T: Bean>(table: &TableDescriptor, registry: &Registry, row: &Row) -> Decoded<T> {
    let mut bean = T::default();
    let mut diagnostics = vec![];

    for (name, stored) in row.iter() {
        let Some(column) = table.column(name) else {
            continue;
        };

        let res = match decode_value(column, registry, stored) {
            Ok(Some(value)) => bean.set(&column.field, value),
            Ok(None) => continue,
            Err(error) => Err(error),
        };

        if let Err(error) = res {
            diagnostics.push(Diagnostic {
                field: column.field.clone(),
                error,
            });
        }
    }

    Decoded { bean, diagnostics }
}

/// Decodes each row, in order.
pub fn decode_all<T: Bean>(
    table: &TableDescriptor,
    registry: &Registry,
    rows: &[Row],
) -> Vec<Decoded<T>> {
    rows.iter().map(|row| decode(table, registry, row)).collect()
}

/// Converts a stored value back to a field value.
///
/// Returns `None` when the field must be left untouched.
fn decode_value(
    column: &ColumnDescriptor,
    registry: &Registry,
    stored: &SqlValue,
) -> Result<Option<Value>> {
    let parse_error = |text: &str| {
        Error::field_access(
            &column.field,
            format!("`{text}` is not a valid {:?} value", column.ty),
        )
    };

    let value = match (column.ty, stored) {
        (_, SqlValue::Null) => Value::Null,
        (FieldType::Boolean, SqlValue::Integer(_) | SqlValue::Real(_) | SqlValue::Text(_)) => {
            match stored_int(stored) {
                Some(0) => Value::Bool(false),
                Some(1) => Value::Bool(true),
                Some(other) => {
                    tracing::debug!(
                        field = %column.field,
                        value = other,
                        "boolean column holds neither 0 nor 1; field left unset"
                    );
                    return Ok(None);
                }
                None => {
                    let text = stored.as_text().unwrap_or_default();
                    return Err(parse_error(text));
                }
            }
        }
        (FieldType::Integer, SqlValue::Integer(v)) => Value::I64(*v),
        (FieldType::Integer, SqlValue::Real(v)) => Value::I64(*v as i64),
        (FieldType::Integer, SqlValue::Text(v)) => {
            Value::I64(v.trim().parse().map_err(|_| parse_error(v.as_str()))?)
        }
        (FieldType::Float, SqlValue::Real(v)) => Value::F64(*v),
        (FieldType::Float, SqlValue::Integer(v)) => Value::F64(*v as f64),
        (FieldType::Float, SqlValue::Text(v)) => {
            Value::F64(v.trim().parse().map_err(|_| parse_error(v.as_str()))?)
        }
        (FieldType::Text, SqlValue::Text(v)) => Value::String(v.clone()),
        (FieldType::Text, SqlValue::Integer(v)) => Value::String(v.to_string()),
        (FieldType::Text, SqlValue::Real(v)) => Value::String(v.to_string()),
        (FieldType::TypeRef, SqlValue::Text(name)) => Value::Type(registry.resolve_type(name)?),
        (FieldType::Binary, SqlValue::Blob(v)) => Value::Bytes(v.clone()),
        (FieldType::Binary, SqlValue::Text(v)) => Value::Bytes(v.clone().into_bytes()),
        (ty, stored) => {
            return Err(Error::field_access(
                &column.field,
                format!("cannot read {} into a {ty:?} field", stored.kind()),
            ))
        }
    };

    Ok(Some(value))
}

/// Reads a stored number the way an integer column getter would: reals are
/// truncated and text is parsed.
fn stored_int(stored: &SqlValue) -> Option<i64> {
    match stored {
        SqlValue::Integer(v) => Some(*v),
        SqlValue::Real(v) => Some(*v as i64),
        SqlValue::Text(v) => {
            let v = v.trim();
            v.parse()
                .ok()
                .or_else(|| v.parse::<f64>().ok().map(|v| v as i64))
        }
        _ => None,
    }
}
