use super::{Comma, Formatter, Ident, Params, ToSql};

use jackknife_core::stmt;

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let columns = Comma(&self.columns);

        if self.if_not_exists {
            fmt!(f, "CREATE TABLE IF NOT EXISTS " name " (" columns);
        } else {
            fmt!(f, "CREATE TABLE " name " (" columns);
        }

        if !self.primary_key.is_empty() {
            let pk = Comma(self.primary_key.iter().map(Ident));
            fmt!(f, ", PRIMARY KEY (" pk ")");
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        fmt!(f, name " " self.ty);

        if self.auto_increment {
            fmt!(f, " PRIMARY KEY AUTOINCREMENT");
        }
    }
}
