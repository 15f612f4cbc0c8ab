use forkcast_units::{Unit, aggregate_lines, parse_ingredient};

/// Shopping list for three recipes sharing flour, milk and eggs.
#[test]
fn test_shopping_list_aggregation() {
    // Setup: overlapping ingredient lines with mixed spellings
    let lines = [
        "2 cups all-purpose flour",
        "1½ cups all-purpose flour",
        "100g all-purpose flour",
        "1 cup milk",
        "240 ml milk",
        "250 milliliters milk",
        "3 eggs",
        "2 eggs",
        "2 cloves garlic, minced",
        "1 tsp garlic",
        "Salt to taste",
    ];

    // Action
    let list = aggregate_lines(&lines);

    // Assert: sorted by name
    let names = list.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["all-purpose flour", "eggs", "garlic", "milk", "salt to taste"]
    );

    // 3.5 cups + 100 g / (0.53 g/ml * 240 ml)
    let flour = &list[0];
    assert_eq!(flour.quantity.unit, Unit::Cup);
    assert!((flour.quantity.amount - (3.5 + 100.0 / 127.2)).abs() < 0.001);
    assert!(!flour.approximate);

    let eggs = &list[1];
    assert_eq!(eggs.quantity.unit, Unit::Piece);
    assert_eq!(eggs.quantity.amount, 5.0);

    let garlic = &list[2];
    assert_eq!(garlic.quantity.unit, Unit::Clove);
    assert!(garlic.approximate);

    // ml occurs twice, cup once
    let milk = &list[3];
    assert_eq!(milk.quantity.unit, Unit::Ml);
    assert!((milk.quantity.amount - 730.0).abs() < 0.001);

    let salt = &list[4];
    assert_eq!(salt.quantity.amount, 1.0);
    assert_eq!(salt.quantity.unit, Unit::Piece);
}

#[test]
fn test_malformed_text_never_fails() {
    for line in ["", "   ", "???", "1/", "½", "to taste (optional)"] {
        let parsed = parse_ingredient(line);
        assert!(parsed.quantity.amount > 0.0, "{line:?}");
    }
}
