use super::SqlValue;

/// A scalar filter operand.
///
/// Only strings and numbers can be filter operands; conversions exist for
/// exactly those types, so other values are rejected when the condition is
/// written rather than dropped when it is bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl Arg {
    /// The argument in its bound string form.
    pub fn to_arg_string(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Arg {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Arg::Text(v) => f.write_str(v),
            Arg::Integer(v) => write!(f, "{v}"),
            Arg::Real(v) => write!(f, "{v}"),
        }
    }
}

impl From<Arg> for SqlValue {
    fn from(arg: Arg) -> SqlValue {
        SqlValue::Text(arg.to_string())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Arg {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Arg {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Arg {
        Arg::Text(value.clone())
    }
}

macro_rules! impl_from_int {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Arg {
                    Arg::Integer(value.into())
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(value: f32) -> Arg {
        Arg::Real(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Arg {
        Arg::Real(value)
    }
}
