/// Semantic type tag of a persisted field.
///
/// The tag decides how a field value is stored: which SQL storage class the
/// column gets and how values are converted on encode and decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Stored as `0` / `1`.
    Boolean,

    /// Signed and unsigned integers up to 64 bits.
    Integer,

    /// `f32` and `f64`.
    Float,

    /// Strings and characters.
    Text,

    /// Raw bytes. Also the tag for anything without a more specific mapping.
    Binary,

    /// A reference to a Rust type, stored as its type name.
    TypeRef,
}

impl FieldType {
    pub fn is_integer(self) -> bool {
        matches!(self, FieldType::Integer)
    }
}

/// How a primary key value is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignType {
    /// The store assigns the key; the column is never written by Jackknife.
    AutoIncrement,

    /// The caller supplies the key with every insert.
    ByMyself,
}
