mod arg;
pub use arg::Arg;

mod create_table;
pub use create_table::{ColumnDef, CreateTable};

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod filter;
pub use filter::{Condition, Filter, Op};

mod insert;
pub use insert::Insert;

mod query;
pub use query::{Count, Limit, Query, Select};

mod row;
pub use row::Row;

mod sql_value;
pub use sql_value::SqlValue;

mod statement;
pub use statement::Statement;

mod type_handle;
pub use type_handle::TypeHandle;

mod update;
pub use update::Update;

mod value;
pub use value::Value;
