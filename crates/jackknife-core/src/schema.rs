mod model;
pub use model::{Field, Model};

mod name;
pub use name::{column_name, table_name};

mod registry;
pub use registry::Registry;

mod table;
pub use table::{ColumnDescriptor, PrimaryKey, TableDescriptor};

mod ty;
pub use ty::{AssignType, FieldType};
