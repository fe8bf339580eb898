use super::{Comma, Formatter, Ident, Params, ToSql};

use jackknife_core::stmt::{self, SqlValue, Statement};

/// A bound value in a VALUES list or SET clause.
struct Value<'a>(&'a SqlValue);

impl ToSql for Value<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        fmt!(f, placeholder);
    }
}

/// `"column" = ?`
struct Assignment<'a>(&'a str, &'a SqlValue);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " Value(self.1));
    }
}

/// ` WHERE <filter>`, or nothing for an empty filter.
struct Where<'a>(&'a stmt::Filter);

impl ToSql for Where<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " self.0);
        }
    }
}

/// A raw clause introduced by `keyword`, skipped when absent or blank.
struct Clause<'a>(&'static str, Option<&'a str>);

impl ToSql for Clause<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(body) = self.1.filter(|body| !body.trim().is_empty()) {
            fmt!(f, self.0 body);
        }
    }
}

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.values.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.values.columns().map(Ident));
        let values = Comma(self.values.values().map(Value));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        fmt!(f, "UPDATE " table " SET " assignments Where(&self.filter));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);

        fmt!(f, "DELETE FROM " table Where(&self.filter));
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let query = &self.query;

        match query.columns.as_deref() {
            Some(columns) if !columns.is_empty() => {
                let columns = Comma(columns.iter().map(|column| &column[..]));
                fmt!(f, "SELECT " columns " FROM " table);
            }
            _ => fmt!(f, "SELECT * FROM " table),
        }

        fmt!(
            f,
            Where(&query.filter)
            Clause(" GROUP BY ", query.group_by.as_deref())
            Clause(" HAVING ", query.having.as_deref())
            Clause(" ORDER BY ", query.order_by.as_deref())
        );
    }
}

impl ToSql for &stmt::Count {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let select = &self.select;

        fmt!(f, "SELECT COUNT(*) AS " Ident("count") " FROM (" select ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        if self.if_exists {
            fmt!(f, "DROP TABLE IF EXISTS " name);
        } else {
            fmt!(f, "DROP TABLE " name);
        }
    }
}
