mod primitive;
pub use primitive::Primitive;

mod query_builder;
pub use query_builder::QueryBuilder;

mod where_builder;
pub use where_builder::{Where, WhereBuilder};

pub use jackknife_core::stmt::{Arg, Limit, Query, TypeHandle, Value};
