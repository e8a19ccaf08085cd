//! Declarative [`TypeIntrospect`] implementation

use std::any::TypeId;
use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexSet;

use super::{TypeInfo, TypeIntrospect};

#[derive(Debug, Clone, Default)]
struct Entry {
    base: Option<TypeInfo>,
    interfaces: IndexSet<TypeInfo>,
}

/// Host-declared type relations.
///
/// A registered type without an `extends` edge has [`TypeInfo::root`] as its
/// base, and so does an unregistered type. The root has no base.
///
/// `implements` edges on an interface declare its super-interfaces, so
/// `register::<dyn Pet>().implements::<dyn Animal>()` makes every `Pet`
/// implementor an `Animal` implementor as well.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl TypeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` (idempotent) and returns a handle for declaring its
    /// relations.
    pub fn register<T: ?Sized + 'static>(&mut self) -> Registration<'_> {
        let ty = self.ensure(TypeInfo::of::<T>());
        Registration { registry: self, ty }
    }

    /// Number of registered types, including ones only named as a base or
    /// interface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `ty` has been registered.
    #[must_use]
    pub fn contains(&self, ty: TypeInfo) -> bool {
        self.entries.contains_key(&ty.id())
    }

    fn ensure(&mut self, info: TypeInfo) -> TypeInfo {
        self.entries.entry(info.id()).or_insert_with(|| {
            tracing::trace!(target: "precond", ty = info.full_name(), "registered type");
            Entry::default()
        });
        info
    }

    fn entry_mut(&mut self, ty: TypeInfo) -> &mut Entry {
        self.entries.entry(ty.id()).or_default()
    }
}

impl TypeIntrospect for TypeRegistry {
    fn base_type_of(&self, ty: TypeInfo) -> Option<TypeInfo> {
        if ty.is_root() {
            return None;
        }
        let base = self.entries.get(&ty.id()).and_then(|entry| entry.base);
        Some(base.unwrap_or_else(TypeInfo::root))
    }

    fn interfaces_of(&self, ty: TypeInfo) -> IndexSet<TypeInfo> {
        let mut found = IndexSet::new();
        let mut seen = HashSet::new();
        let mut pending = VecDeque::from([ty]);

        while let Some(current) = pending.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            let Some(entry) = self.entries.get(&current.id()) else {
                continue;
            };
            for &interface in &entry.interfaces {
                found.insert(interface);
                pending.push_back(interface);
            }
            if let Some(base) = entry.base {
                pending.push_back(base);
            }
        }

        found
    }
}

/// Builder returned by [`TypeRegistry::register`].
#[derive(Debug)]
pub struct Registration<'r> {
    registry: &'r mut TypeRegistry,
    ty: TypeInfo,
}

impl Registration<'_> {
    /// Declares `B` as the direct base of the registered type, replacing any
    /// earlier base.
    pub fn extends<B: ?Sized + 'static>(self) -> Self {
        let base = self.registry.ensure(TypeInfo::of::<B>());
        tracing::trace!(
            target: "precond",
            ty = self.ty.full_name(),
            base = base.full_name(),
            "declared base type"
        );
        self.registry.entry_mut(self.ty).base = Some(base);
        self
    }

    /// Declares that the registered type implements `I` directly.
    pub fn implements<I: ?Sized + 'static>(self) -> Self {
        let interface = self.registry.ensure(TypeInfo::of::<I>());
        tracing::trace!(
            target: "precond",
            ty = self.ty.full_name(),
            interface = interface.full_name(),
            "declared interface"
        );
        self.registry.entry_mut(self.ty).interfaces.insert(interface);
        self
    }

    /// The type being registered.
    pub const fn ty(&self) -> TypeInfo {
        self.ty
    }
}
