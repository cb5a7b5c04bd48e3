//! Seeded demo dataset
//!
//! The fixed restaurant data the simulated backend starts with: six
//! tables with unguessable slugs, a small Italian menu, and the two
//! staff accounts. Also used throughout the test suites.

use shared::models::{MenuCategory, MenuItem, Role, Table, User};

pub fn tables() -> Vec<Table> {
    (1..=6)
        .map(|number| Table {
            id: format!("table_{number}"),
            number,
            qr_slug: format!("table-{number}-secret"),
        })
        .collect()
}

pub fn categories() -> Vec<MenuCategory> {
    [
        ("cat_1", "Appetizers", 1),
        ("cat_2", "Main Courses", 2),
        ("cat_3", "Desserts", 3),
        ("cat_4", "Beverages", 4),
    ]
    .into_iter()
    .map(|(id, name, display_order)| MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        display_order,
    })
    .collect()
}

struct SeedItem {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    category_id: &'static str,
    image_id: u32,
    availability: bool,
    tags: &'static [&'static str],
}

const MENU: &[SeedItem] = &[
    SeedItem {
        id: "item_1",
        name: "Bruschetta",
        description: "Grilled bread topped with tomatoes, garlic, basil, and olive oil.",
        price: 8.99,
        category_id: "cat_1",
        image_id: 20,
        availability: true,
        tags: &["vegetarian", "starter"],
    },
    SeedItem {
        id: "item_2",
        name: "Calamari Fritti",
        description: "Lightly battered and fried squid served with marinara sauce.",
        price: 12.50,
        category_id: "cat_1",
        image_id: 30,
        availability: true,
        tags: &["seafood", "fried"],
    },
    SeedItem {
        id: "item_3",
        name: "Margherita Pizza",
        description: "Classic pizza with fresh mozzarella, San Marzano tomatoes, and basil.",
        price: 15.00,
        category_id: "cat_2",
        image_id: 40,
        availability: true,
        tags: &["pizza", "vegetarian", "classic"],
    },
    SeedItem {
        id: "item_4",
        name: "Spaghetti Carbonara",
        description: "Pasta with pancetta, eggs, Pecorino Romano cheese, and black pepper.",
        price: 18.00,
        category_id: "cat_2",
        image_id: 50,
        availability: true,
        tags: &["pasta", "classic"],
    },
    SeedItem {
        id: "item_5",
        name: "Grilled Salmon",
        description: "Salmon fillet grilled to perfection, served with asparagus and lemon.",
        price: 24.50,
        category_id: "cat_2",
        image_id: 60,
        availability: false,
        tags: &["seafood", "healthy"],
    },
    SeedItem {
        id: "item_6",
        name: "Tiramisu",
        description: "Coffee-soaked ladyfingers layered with mascarpone cream.",
        price: 9.00,
        category_id: "cat_3",
        image_id: 70,
        availability: true,
        tags: &["dessert", "coffee"],
    },
    SeedItem {
        id: "item_7",
        name: "Panna Cotta",
        description: "Silky smooth cooked cream dessert with a berry coulis.",
        price: 8.50,
        category_id: "cat_3",
        image_id: 80,
        availability: true,
        tags: &["dessert", "creamy"],
    },
    SeedItem {
        id: "item_8",
        name: "Espresso",
        description: "A strong shot of Italian coffee.",
        price: 3.50,
        category_id: "cat_4",
        image_id: 90,
        availability: true,
        tags: &["drink", "coffee"],
    },
    SeedItem {
        id: "item_9",
        name: "San Pellegrino",
        description: "Sparkling natural mineral water.",
        price: 4.00,
        category_id: "cat_4",
        image_id: 100,
        availability: true,
        tags: &["drink", "water"],
    },
];

pub fn menu_items() -> Vec<MenuItem> {
    MENU.iter()
        .map(|seed| MenuItem {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            price: seed.price,
            category_id: seed.category_id.to_string(),
            image_url: format!("https://picsum.photos/id/{}/400/300", seed.image_id),
            availability: seed.availability,
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

/// Place a few orders in various pipeline stages (demo startup data)
pub fn seed_orders(store: &crate::OrderStore) -> shared::ServiceResult<()> {
    use shared::order::{OrderItemInput, OrderStatus};

    let line = |menu_item_id: &str, quantity: i32, note: &str| OrderItemInput {
        menu_item_id: menu_item_id.to_string(),
        quantity,
        note: note.to_string(),
    };

    store.create(
        "table_1",
        vec![line("item_3", 1, "Extra basil"), line("item_9", 2, "")],
    )?;

    let preparing = store.create("table_3", vec![line("item_4", 1, "No pepper")])?;
    store.update_status(&preparing.id, OrderStatus::Preparing)?;

    let ready = store.create("table_2", vec![line("item_6", 2, "")])?;
    store.update_status(&ready.id, OrderStatus::Preparing)?;
    store.update_status(&ready.id, OrderStatus::Ready)?;

    Ok(())
}

/// Seeded accounts with their plaintext demo password
pub fn users() -> Vec<(User, &'static str)> {
    vec![
        (
            User {
                id: "user_1".into(),
                name: "Admin Ali".into(),
                email: "admin@example.com".into(),
                role: Role::Admin,
            },
            "password",
        ),
        (
            User {
                id: "user_2".into(),
                name: "Staff Sam".into(),
                email: "staff@example.com".into(),
                role: Role::Staff,
            },
            "password",
        ),
    ]
}
