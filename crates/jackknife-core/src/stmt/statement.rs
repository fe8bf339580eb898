use super::{Count, CreateTable, Delete, DropTable, Insert, Select, Update};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Count(Count),
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// True when executing the statement yields rows rather than a count.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Count(_) | Statement::Select(_))
    }
}

macro_rules! impl_from_stmt {
    ( $($variant:ident),+ ) => {
        $(
            impl From<$variant> for Statement {
                fn from(value: $variant) -> Statement {
                    Statement::$variant(value)
                }
            }
        )+
    };
}

impl_from_stmt!(Count, CreateTable, Delete, DropTable, Insert, Select, Update);
