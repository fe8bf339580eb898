use super::{Comma, Formatter, Params, ToSql};

use jackknife_core::stmt::{Arg, Condition, Filter, Op, SqlValue};

/// A filter operand, bound as a positional parameter.
struct Bind<'a>(&'a Arg);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(&SqlValue::from(self.0.clone()));
        fmt!(f, placeholder);
    }
}

impl ToSql for &Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for condition in &self.conditions {
            fmt!(f, s condition);
            s = " AND ";
        }
    }
}

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = &self.column[..];

        match &self.op {
            Op::Equal(arg) => fmt!(f, column " = " Bind(arg)),
            Op::NotEqual(arg) => fmt!(f, column " <> " Bind(arg)),
            Op::Contains(arg) => fmt!(f, column " LIKE '%' || " Bind(arg) " || '%'"),
            Op::StartsWith(arg) => fmt!(f, column " LIKE " Bind(arg) " || '%'"),
            Op::EndsWith(arg) => fmt!(f, column " LIKE '%' || " Bind(arg)),
            Op::GreaterThan(arg) => fmt!(f, column " > " Bind(arg)),
            Op::LessThan(arg) => fmt!(f, column " < " Bind(arg)),
            Op::GreaterOrEqual(arg) => fmt!(f, column " >= " Bind(arg)),
            Op::LessOrEqual(arg) => fmt!(f, column " <= " Bind(arg)),
            // An empty list matches nothing (IN) or everything (NOT IN)
            Op::In(args) if args.is_empty() => fmt!(f, "0 = 1"),
            Op::NotIn(args) if args.is_empty() => fmt!(f, "1 = 1"),
            Op::In(args) => fmt!(f, column " IN (" Comma(args.iter().map(Bind)) ")"),
            Op::NotIn(args) => fmt!(f, column " NOT IN (" Comma(args.iter().map(Bind)) ")"),
            Op::Between(low, high) => fmt!(f, column " BETWEEN " Bind(low) " AND " Bind(high)),
            Op::IsNull => fmt!(f, column " IS NULL"),
            Op::IsNotNull => fmt!(f, column " IS NOT NULL"),
        }
    }
}
