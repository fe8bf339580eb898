use super::{Model, TableDescriptor};
use crate::{stmt::TypeHandle, Error, Result};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Caches resolved table descriptors per bean type and resolves stored type
/// names back to [`TypeHandle`]s.
///
/// Descriptors are computed once per type and then shared. Resolution runs
/// outside the lock; when two threads race to resolve the same type, the first
/// insert wins and both receive the same descriptor.
#[derive(Debug, Default)]
pub struct Registry {
    /// Prepended to every table name
    table_name_prefix: String,

    tables: RwLock<HashMap<TypeId, Arc<TableDescriptor>>>,

    /// Types that class-reference columns may resolve to, keyed by type name
    types: RwLock<HashMap<&'static str, TypeHandle>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn with_table_name_prefix(prefix: impl Into<String>) -> Registry {
        Registry {
            table_name_prefix: prefix.into(),
            ..Registry::default()
        }
    }

    pub fn table_name_prefix(&self) -> &str {
        &self.table_name_prefix
    }

    /// Returns the descriptor for the type identified by `id`, resolving
    /// `model` on first use.
    pub fn table(&self, id: TypeId, model: impl FnOnce() -> Model) -> Result<Arc<TableDescriptor>> {
        if let Some(table) = self.cached(id) {
            return Ok(table);
        }

        let model = model();
        let table = TableDescriptor::from_model(&model, &self.table_name_prefix).map_err(|err| {
            err.context(Error::from_args(format_args!(
                "failed to resolve table for `{}`",
                model.ty.name()
            )))
        })?;

        self.register_handle(model.ty);

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.entry(id).or_insert_with(|| Arc::new(table)).clone())
    }

    /// Returns the descriptor for `id` if it has already been resolved.
    pub fn cached(&self, id: TypeId) -> Option<Arc<TableDescriptor>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// All resolved descriptors, in no particular order.
    pub fn tables(&self) -> Vec<Arc<TableDescriptor>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    /// Makes `T` resolvable from class-reference columns.
    pub fn register_type<T: 'static>(&self) -> TypeHandle {
        let handle = TypeHandle::of::<T>();
        self.register_handle(handle);
        handle
    }

    pub fn register_handle(&self, handle: TypeHandle) {
        self.types
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(handle.name(), handle);
    }

    /// Resolves a stored type name to a registered type.
    pub fn resolve_type(&self, name: &str) -> Result<TypeHandle> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .copied()
            .ok_or_else(|| Error::type_resolution(name))
    }
}
