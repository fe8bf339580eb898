use super::{Formatter, ToSql};

use jackknife_core::stmt::SqlValue;

pub trait Params {
    fn push(&mut self, param: &SqlValue) -> Placeholder;
}

/// Position of a bound parameter, starting at 1.
pub struct Placeholder(pub usize);

impl Params for Vec<SqlValue> {
    fn push(&mut self, value: &SqlValue) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        // Positional; SQLite numbers bare `?` in order of appearance.
        f.dst.push('?');
    }
}
