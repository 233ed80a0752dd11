use restaurant_menu::model::{Dessert, Dish, Drink, MenuEntry, MenuItem};
use restaurant_menu::restaurant::Restaurant;

fn sample_restaurant() -> Restaurant {
    let mut restaurant = Restaurant::new("praça", "Gourmet");
    restaurant.add_to_menu(Drink::new("Suco de Melancia", 5.0, "grande"));
    restaurant.add_to_menu(Dish::new("Paozinho", 2.0, "O melhor pão da cidade"));
    restaurant.add_to_menu(Dessert::new(
        "Pet Gatou",
        29.90,
        "Doce",
        "pequena",
        "Chocolate belga Amarelo",
    ));
    restaurant
}

#[test]
fn menu_preserves_insertion_order() {
    let restaurant = sample_restaurant();
    assert_eq!(restaurant.location(), "praça");
    assert_eq!(restaurant.category(), "Gourmet");
    assert_eq!(restaurant.menu().len(), 3);
    assert_eq!(restaurant.menu()[0].name(), "Suco de Melancia");
    assert_eq!(restaurant.menu()[1].name(), "Paozinho");
    assert_eq!(restaurant.menu()[2].name(), "Pet Gatou");
}

#[test]
fn duplicates_are_allowed() {
    let mut restaurant = Restaurant::new("matriz", "Caseira");
    let coffee = Drink::new("Café", 3.0, "curto");
    restaurant.add_to_menu(coffee.clone());
    restaurant.add_to_menu(coffee);
    assert_eq!(restaurant.menu().len(), 2);
    assert_eq!(restaurant.menu()[0], restaurant.menu()[1]);
}

#[test]
fn write_menu_lists_header_then_items_in_order() {
    let restaurant = sample_restaurant();
    let mut out = Vec::new();
    restaurant.write_menu(&mut out).unwrap();
    let rendered = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "praça (Gourmet)");
    assert_eq!(lines[1], "Name: Suco de Melancia | Price: 5.00 | Size: grande");
    assert_eq!(
        lines[2],
        "Name: Paozinho | Price: 2.00 | Description: O melhor pão da cidade"
    );
    assert_eq!(
        lines[3],
        "Type: Doce | Size: pequena | Description: Chocolate belga Amarelo"
    );
}

#[test]
fn empty_menu_renders_header_only() {
    let restaurant = Restaurant::new("praça", "Gourmet");
    let mut out = Vec::new();
    restaurant.write_menu(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "praça (Gourmet)\n");
}

/// Mirrors the demo binary: discount first, then hand the item over to the menu.
#[test]
fn discounted_items_keep_their_price_inside_the_menu() {
    let mut juice = Drink::new("Suco de Melancia", 5.0, "grande");
    juice.apply_discount();

    let mut restaurant = Restaurant::new("praça", "Gourmet");
    restaurant.add_to_menu(juice);

    assert!((restaurant.menu()[0].price() - 4.5).abs() < 1e-9);
}

#[test]
fn menu_items_serialize_tagged_by_variant() {
    let item = MenuItem::from(Drink::new("Suco de Melancia", 5.0, "grande"));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["Drink"]["name"], "Suco de Melancia");
    assert_eq!(json["Drink"]["size"], "grande");

    // The dessert category label serializes under its wire name
    let dessert = MenuItem::from(Dessert::new("Pudim", 12.0, "Doce", "média", "Clássico"));
    let json = serde_json::to_value(&dessert).unwrap();
    assert_eq!(json["Dessert"]["type"], "Doce");
}
