use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_same_name_and_arity_resolve_equal() {
    assert_eq!(resolve_symbol("Foo", 2), resolve_symbol("Foo", 2));
}

#[test]
fn test_arity_is_part_of_identity() {
    assert_ne!(resolve_symbol("Foo", 2), resolve_symbol("Foo", 3));
    assert_ne!(resolve_symbol("Foo", 2), resolve_symbol("Bar", 2));
}

#[test]
fn test_zero_arity() {
    let symbol = resolve_symbol("Tick", 0);
    assert_eq!(symbol.name, "Tick");
    assert_eq!(symbol.arity, 0);
    assert_eq!(symbol.to_string(), "Tick/0");
}

#[test]
fn test_unknown_names_resolve() {
    let symbol = resolve_symbol("DeclaredNowhere", 4);
    assert_eq!(symbol, SymbolRef::new("DeclaredNowhere", 4));
}
