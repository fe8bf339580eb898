use super::{Connect, Db};
use crate::{Bean, Result};

use jackknife_core::{
    driver::Driver,
    schema::{Model, Registry},
    stmt::{CreateTable, TypeHandle},
};

use std::any::TypeId;

#[derive(Debug, Default)]
pub struct Builder {
    /// Bean definitions, resolved when the database is built
    models: Vec<(TypeId, fn() -> Model)>,

    /// Extra types that class-reference fields may point to
    types: Vec<TypeHandle>,

    table_name_prefix: String,

    create_tables: bool,
}

impl Builder {
    pub fn register<T: Bean>(&mut self) -> &mut Self {
        self.models.push((TypeId::of::<T>(), T::schema));
        self
    }

    /// Makes `T` resolvable from class-reference columns.
    pub fn register_type<T: 'static>(&mut self) -> &mut Self {
        self.types.push(TypeHandle::of::<T>());
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = prefix.to_string();
        self
    }

    /// Create the tables of all registered beans after connecting.
    pub fn create_tables(&mut self, enabled: bool) -> &mut Self {
        self.create_tables = enabled;
        self
    }

    pub fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let registry = Registry::with_table_name_prefix(&self.table_name_prefix);

        for handle in &self.types {
            registry.register_handle(*handle);
        }

        // Resolve every bean before connecting so schema errors surface first.
        let tables = self
            .models
            .iter()
            .map(|(id, model)| registry.table(*id, *model))
            .collect::<Result<Vec<_>>>()?;

        let connection = driver.connect()?;

        tracing::debug!(
            url = %driver.url(),
            beans = tables.len(),
            "database connected"
        );

        let db = Db::new(driver.url().into_owned(), connection, registry);

        if self.create_tables {
            for table in &tables {
                db.exec(CreateTable::from_table(table))?;
            }
        }

        Ok(db)
    }
}
