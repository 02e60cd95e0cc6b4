use super::*;

#[test]
fn test_display_name_known_and_unknown() {
    assert_eq!(display_name("KP03"), "Usefulness");
    assert_eq!(display_name("CA02"), "Customization & Adaptability");
    assert_eq!(display_name("ZZ99"), "ZZ99");
}

#[test]
fn test_builtin_codes_are_unique() {
    let dims = builtin_dimensions();
    assert_eq!(dims.len(), 18);
    for (i, a) in dims.iter().enumerate() {
        for b in &dims[i + 1..] {
            assert_ne!(a.code, b.code);
        }
    }
}

#[test]
fn test_item_columns() {
    let d = Dimension::new("KP01");
    assert_eq!(d.name, "Perspicuity");
    assert_eq!(
        d.performance_columns(),
        vec!["KP01_01", "KP01_02", "KP01_03", "KP01_04"]
    );
    assert_eq!(d.importance_column(), "KP01_05");
    assert_eq!(d.all_columns().len(), ITEMS_PER_DIMENSION);
}

#[test]
fn test_kp_set_expected_columns() {
    let set = DimensionSet::kp();
    assert_eq!(set.len(), 6);
    let cols = set.expected_columns();
    assert_eq!(cols.len(), 30);
    assert_eq!(cols[0], "KP01_01");
    assert_eq!(cols[29], "KP06_05");
}

#[test]
fn test_discover_uses_importance_columns_sorted() {
    let columns = vec![
        "id".to_string(),
        "UA01_01".to_string(),
        "UA01_05".to_string(),
        "KP02_05".to_string(),
        "KP01_01".to_string(),
        "XX_05".to_string(),
    ];
    let set = DimensionSet::discover(&columns);
    let codes = set
        .dimensions
        .iter()
        .map(|d| d.code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(codes, vec!["KP02", "UA01", "XX"]);
    assert_eq!(set.dimensions[2].name, "XX");
}

#[test]
fn test_from_codes_drops_duplicates() {
    let set = DimensionSet::from_codes(&["KP01", "KP02", "KP01"]);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_selection_parse() {
    assert_eq!(DimensionSelection::parse("kp").unwrap(), DimensionSelection::Kp);
    assert_eq!(
        DimensionSelection::parse("discover").unwrap(),
        DimensionSelection::Discover
    );
    assert_eq!(
        DimensionSelection::parse("KP01, UA14").unwrap(),
        DimensionSelection::Codes(vec!["KP01".to_string(), "UA14".to_string()])
    );
    assert!(DimensionSelection::parse(" , ").is_err());
}
