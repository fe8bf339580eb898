use crate::{bail, err, Result};

use jackknife_core::{
    schema::FieldType,
    stmt::{TypeHandle, Value},
};

/// A Rust type that can be stored in a single column.
pub trait Primitive: Sized {
    /// Semantic tag that decides how the value is stored
    const TY: FieldType;

    fn to_value(&self) -> Value;

    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    const TY: FieldType = FieldType::Boolean;

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => bail!("expected a boolean, got {}", value.kind()),
        }
    }
}

macro_rules! impl_primitive_int {
    ( $( $t:ty => $variant:ident ),+ ) => {
        $(
            impl Primitive for $t {
                const TY: FieldType = FieldType::Integer;

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn load(value: Value) -> Result<Self> {
                    let Some(v) = value.to_i64() else {
                        bail!("expected an integer, got {}", value.kind());
                    };

                    <$t>::try_from(v)
                        .map_err(|_| err!("{v} is out of range for {}", stringify!($t)))
                }
            }
        )+
    };
}

impl_primitive_int!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32
);

impl Primitive for f32 {
    const TY: FieldType = FieldType::Float;

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value.to_f64() {
            Some(v) => Ok(v as f32),
            None => bail!("expected a float, got {}", value.kind()),
        }
    }
}

impl Primitive for f64 {
    const TY: FieldType = FieldType::Float;

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value.to_f64() {
            Some(v) => Ok(v),
            None => bail!("expected a float, got {}", value.kind()),
        }
    }
}

impl Primitive for String {
    const TY: FieldType = FieldType::Text;

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => bail!("expected a string, got {}", value.kind()),
        }
    }
}

impl Primitive for char {
    const TY: FieldType = FieldType::Text;

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    fn load(value: Value) -> Result<Self> {
        let Value::String(v) = value else {
            bail!("expected a string, got {}", value.kind());
        };

        let mut chars = v.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => bail!("expected a single character, got {v:?}"),
        }
    }
}

impl Primitive for Vec<u8> {
    const TY: FieldType = FieldType::Binary;

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => bail!("expected bytes, got {}", value.kind()),
        }
    }
}

impl Primitive for TypeHandle {
    const TY: FieldType = FieldType::TypeRef;

    fn to_value(&self) -> Value {
        Value::Type(*self)
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Type(v) => Ok(v),
            _ => bail!("expected a type reference, got {}", value.kind()),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TY: FieldType = T::TY;

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
