//! Catalog fixtures shared by unit and behaviour tests across the workspace.

use crate::{Catalog, Product};

/// Build a product with a title and category only.
#[must_use]
pub fn product(id: &str, title: &str, category: &str) -> Product {
    Product::new(id, title).with_category(category)
}

/// The two-product catalog used to illustrate strong-preference demotion:
/// a men's wallet followed by a women's scarf.
#[must_use]
pub fn wallet_and_scarf() -> Catalog {
    Catalog::new(vec![
        product("wallet", "Men's Leather Wallet", "accessories"),
        product("scarf", "Women's Pink Scarf", "accessories"),
    ])
}

/// A small, varied catalog in the shape of the Fake Store API.
#[must_use]
pub fn gift_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new("1", "Backpack for Laptops")
            .with_description("Everyday carry for hiking and commuting")
            .with_category("men's clothing")
            .with_price(109.95),
        Product::new("2", "Gold Petite Micropave Ring")
            .with_description("Classic jewelry with a princess cut")
            .with_category("jewelery")
            .with_price(168.0),
        Product::new("3", "Portable External SSD Drive")
            .with_description("Fast digital storage for gaming rigs")
            .with_category("electronics")
            .with_price(114.0),
        Product::new("4", "Rain Jacket Women Windbreaker")
            .with_description("Lightweight hooded jacket for ladies")
            .with_category("women's clothing")
            .with_price(39.99),
        Product::new("5", "Unisex Cotton Tote")
            .with_description("Generic reusable shopping bag")
            .with_category("accessories")
            .with_price(12.5),
        Product::new("6", "Ceramic Tea Mug")
            .with_description("Holds 350ml of tea")
            .with_category("kitchen")
            .with_price(9.0),
    ])
}
