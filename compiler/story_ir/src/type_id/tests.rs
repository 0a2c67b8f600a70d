use super::*;

#[test]
fn test_builtin_ids_are_stable() {
    assert_eq!(TypeId::INTEGER.raw(), 1);
    assert_eq!(TypeId::INTEGER64.raw(), 2);
    assert_eq!(TypeId::REAL.raw(), 3);
    assert_eq!(TypeId::STRING.raw(), 4);
    assert_eq!(TypeId::GUIDSTRING.raw(), 5);
}

#[test]
fn test_builtin_range() {
    assert!(TypeId::GUIDSTRING.is_builtin());
    assert!(!TypeId::from_raw(TypeId::FIRST_ALIAS).is_builtin());
}

#[test]
fn test_debug_names() {
    assert_eq!(format!("{:?}", TypeId::REAL), "TypeId(REAL)");
    assert_eq!(format!("{:?}", TypeId::from_raw(42)), "TypeId(42)");
}
