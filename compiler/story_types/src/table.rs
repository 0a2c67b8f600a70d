//! Type table: names and ids to type descriptors.

use rustc_hash::FxHashMap;
use story_ir::TypeId;

use crate::TypeError;

/// How a type was introduced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// Runtime primitive with a fixed id.
    Builtin,
    /// Named alias of another type (`CHARACTERGUID` → `GUIDSTRING`).
    Alias { base: TypeId },
}

/// A declared type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    pub id: TypeId,
    pub name: String,
    pub kind: TypeKind,
}

/// Builtin types registered by [`TypeTable::with_builtins`].
const BUILTINS: &[(TypeId, &str)] = &[
    (TypeId::INTEGER, "INTEGER"),
    (TypeId::INTEGER64, "INTEGER64"),
    (TypeId::REAL, "REAL"),
    (TypeId::STRING, "STRING"),
    (TypeId::GUIDSTRING, "GUIDSTRING"),
];

/// Table of all types known to a compilation session.
///
/// Read-only while goals are lowered; populate it before lowering starts.
#[derive(Clone, Debug)]
pub struct TypeTable {
    /// Descriptors in registration order.
    types: Vec<TypeDescriptor>,
    /// Id → position in `types`.
    by_id: FxHashMap<TypeId, usize>,
    /// Name → id.
    by_name: FxHashMap<String, TypeId>,
    /// Next id handed out to an alias.
    next_alias: u32,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create an empty table (no builtins).
    pub fn new() -> Self {
        TypeTable {
            types: Vec::new(),
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            next_alias: TypeId::FIRST_ALIAS,
        }
    }

    /// Create a table with the builtin types at their fixed ids.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for &(id, name) in BUILTINS {
            table.insert(TypeDescriptor {
                id,
                name: name.to_owned(),
                kind: TypeKind::Builtin,
            });
        }
        table
    }

    /// Register a builtin type at a fixed id.
    pub fn register_builtin(&mut self, id: TypeId, name: &str) -> Result<TypeId, TypeError> {
        if !id.is_builtin() || id == TypeId::UNKNOWN {
            return Err(TypeError::NotBuiltin { id });
        }
        if self.by_name.contains_key(name) || self.by_id.contains_key(&id) {
            return Err(TypeError::Duplicate {
                name: name.to_owned(),
            });
        }
        self.insert(TypeDescriptor {
            id,
            name: name.to_owned(),
            kind: TypeKind::Builtin,
        });
        Ok(id)
    }

    /// Register a named alias of an existing type.
    pub fn register_alias(&mut self, name: &str, base: TypeId) -> Result<TypeId, TypeError> {
        if self.by_name.contains_key(name) {
            return Err(TypeError::Duplicate {
                name: name.to_owned(),
            });
        }
        if !self.by_id.contains_key(&base) {
            return Err(TypeError::UnknownBase {
                name: name.to_owned(),
                base,
            });
        }

        let id = TypeId::from_raw(self.next_alias);
        self.next_alias = self.next_alias.checked_add(1).ok_or(TypeError::Overflow)?;
        self.insert(TypeDescriptor {
            id,
            name: name.to_owned(),
            kind: TypeKind::Alias { base },
        });
        tracing::debug!(alias = name, ?base, ?id, "registered type alias");
        Ok(id)
    }

    /// Look up a type by name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Descriptor for any registered id.
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.by_id.get(&id).map(|&pos| &self.types[pos])
    }

    /// Descriptor for a builtin id. `None` for aliases or unregistered ids.
    pub fn builtin(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.get(id).filter(|d| d.kind == TypeKind::Builtin)
    }

    /// Follow alias links down to the underlying builtin type.
    pub fn base_of(&self, id: TypeId) -> Option<TypeId> {
        let mut current = self.get(id)?;
        // Aliases are registered after their base, so chains are acyclic
        // and strictly shorter than the table.
        for _ in 0..=self.types.len() {
            match current.kind {
                TypeKind::Builtin => return Some(current.id),
                TypeKind::Alias { base } => current = self.get(base)?,
            }
        }
        None
    }

    /// Name of a registered type.
    pub fn name(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    fn insert(&mut self, descriptor: TypeDescriptor) {
        let pos = self.types.len();
        self.by_id.insert(descriptor.id, pos);
        self.by_name.insert(descriptor.name.clone(), descriptor.id);
        self.types.push(descriptor);
    }
}
