use std::any::TypeId;

/// A handle to a Rust type, stored in the database by name.
///
/// This is what class-reference fields hold. The stored form is the fully
/// qualified type name; decoding looks the name up in the
/// [`Registry`](crate::Registry).
#[derive(Clone, Copy)]
pub struct TypeHandle {
    name: &'static str,
    id: TypeId,
}

impl TypeHandle {
    pub fn of<T: ?Sized + 'static>() -> TypeHandle {
        TypeHandle {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// The fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl Default for TypeHandle {
    fn default() -> TypeHandle {
        TypeHandle::of::<()>()
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &TypeHandle) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHandle {}

impl std::hash::Hash for TypeHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "TypeHandle({})", self.name)
    }
}
