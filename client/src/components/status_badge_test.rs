use super::*;

#[test]
fn badge_class_uses_kebab_case_modifier() {
    assert_eq!(badge_class("in_transit"), "badge badge--in-transit");
    assert_eq!(badge_class("awarded"), "badge badge--awarded");
}
