extern crate self as jackknife;

mod bean;
pub use bean::Bean;

pub mod codec;

mod dao;
pub use dao::Dao;

pub mod db;
pub use db::Db;

pub mod stmt;
pub use stmt::{Primitive, QueryBuilder, Where, WhereBuilder};

pub use jackknife_core::{bail, driver, err, schema, Error, Result};

pub use jackknife_macros::Bean;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Bean, Error, Primitive, Result};
    pub use jackknife_core::{schema, stmt::Value};
}
