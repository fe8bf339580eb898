use crate::Result;

use jackknife_core::{schema::Model, stmt::Value};

/// A record type that maps to one table.
///
/// Usually implemented with `#[derive(Bean)]`. A hand-written implementation
/// describes its fields with the [`Model`] builder and exposes them by name
/// through `get` and `set`:
///
/// ```
/// use jackknife::{schema::{AssignType, Field, FieldType, Model}, stmt::Value, Bean, Error, Primitive, Result};
///
/// #[derive(Default)]
/// struct Tag {
///     id: i64,
///     label: String,
/// }
///
/// impl Bean for Tag {
///     fn schema() -> Model {
///         Model::new::<Tag>()
///             .field(Field::new("id", FieldType::Integer).primary_key(AssignType::AutoIncrement))
///             .field(Field::new("label", FieldType::Text))
///     }
///
///     fn get(&self, field: &str) -> Result<Value> {
///         match field {
///             "id" => Ok(self.id.to_value()),
///             "label" => Ok(self.label.to_value()),
///             _ => Err(Error::field_access(field, "no such persistent field")),
///         }
///     }
///
///     fn set(&mut self, field: &str, value: Value) -> Result<()> {
///         match field {
///             "id" => self.id = i64::load(value)?,
///             "label" => self.label = String::load(value)?,
///             _ => return Err(Error::field_access(field, "no such persistent field")),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Bean: Default + Send + 'static {
    /// Declared fields, keys and naming overrides.
    fn schema() -> Model;

    /// Reads a persistent field by its declared name.
    fn get(&self, field: &str) -> Result<Value>;

    /// Writes a persistent field by its declared name.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}
