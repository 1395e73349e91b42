//! The menu compiled into the binary.

use quickbite_domain::id::MenuItemId;
use quickbite_domain::menu_item::MenuItem;

const BUILTIN: &[(&str, f64, &str, &str, &str)] = &[
    (
        "Buttermilk Pancakes",
        15.99,
        "breakfast",
        "./images/item-1.jpeg",
        "Fluffy pancakes stacked high with whipped butter and maple syrup.",
    ),
    (
        "Diner Double",
        13.99,
        "lunch",
        "./images/item-2.jpeg",
        "Two smashed beef patties, cheddar, pickles and house sauce.",
    ),
    (
        "Godzilla Milkshake",
        6.99,
        "shakes",
        "./images/item-3.jpeg",
        "Vanilla shake piled with cream, sprinkles and a cookie tower.",
    ),
    (
        "Country Delight",
        20.99,
        "breakfast",
        "./images/item-4.jpeg",
        "Eggs any style, hash browns, sausage and a buttered biscuit.",
    ),
    (
        "Egg Attack",
        22.99,
        "lunch",
        "./images/item-5.jpeg",
        "Burger topped with a fried egg, bacon and crispy onions.",
    ),
    (
        "Oreo Dream",
        18.99,
        "shakes",
        "./images/item-6.jpeg",
        "Cookies-and-cream shake blended thick with real Oreos.",
    ),
    (
        "Bacon Overflow",
        8.99,
        "breakfast",
        "./images/item-7.jpeg",
        "Thick-cut bacon over toasted sourdough with a soft egg.",
    ),
    (
        "American Classic",
        12.99,
        "lunch",
        "./images/item-8.jpeg",
        "Grilled cheese and tomato soup, the way it ought to be.",
    ),
    (
        "Quarantine Buddy",
        16.99,
        "shakes",
        "./images/item-9.jpeg",
        "Peanut butter and chocolate shake with a brownie bite.",
    ),
];

/// The built-in menu with ids `1..=n` in listing order.
#[must_use]
pub fn builtin_menu() -> Vec<MenuItem> {
    BUILTIN
        .iter()
        .zip(1..)
        .map(|(&(title, price, category, img, desc), id)| MenuItem {
            id: MenuItemId::new(id),
            title: title.to_string(),
            price,
            category: category.to_string(),
            img: img.to_string(),
            desc: desc.to_string(),
        })
        .collect()
}
