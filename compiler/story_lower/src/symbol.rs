//! Symbol resolution.

use story_ir::SymbolRef;

/// Resolve a predicate reference to its `name/arity` symbol.
///
/// Pure and total. There is no catalog check, so references to predicates
/// declared in other goals (or not at all) resolve the same way. Arity is part
/// of the identity: `Foo/2` and `Foo/3` are different symbols.
pub fn resolve_symbol(name: &str, arg_count: usize) -> SymbolRef {
    let arity = u32::try_from(arg_count).unwrap_or(u32::MAX);
    SymbolRef::new(name, arity)
}

#[cfg(test)]
mod tests;
