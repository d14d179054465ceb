//! Fixed product catalogs and deterministic record derivation.
//!
//! Every seeded document is derived purely from its index via modulo lookups
//! into three fixed tables, so record `i` has identical field values on every
//! run. Re-seeding therefore overwrites documents in place rather than
//! accumulating duplicates.

use crate::models::{Category, Product};

/// Display names, cycled with period 30. The price is derived from the same
/// index, so every product name maps to a single price.
pub const PRODUCT_NAMES: [&str; 30] = [
    "Apple",
    "Banana",
    "Cherry",
    "Date",
    "Elderberry",
    "Fig",
    "Grape",
    "Honeydew",
    "Iced Tea",
    "Juice",
    "Kiwi",
    "Lemon",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Quince",
    "Raspberry",
    "Strawberry",
    "Tangerine",
    "Ugli Fruit",
    "Vodka",
    "Watermelon",
    "Xigua",
    "Yam",
    "Zucchini",
    "Artichoke",
    "Broccoli",
    "Carrot",
    "Daikon",
];

/// Main categories, cycled with period 20.
pub const MAIN_CATEGORIES: [&str; 20] = [
    "Fruit",
    "Beverage",
    "Vegetable",
    "Dairy",
    "Meat",
    "Poultry",
    "Seafood",
    "Grain",
    "Bakery",
    "Confectionery",
    "Snack",
    "Frozen",
    "Canned",
    "Dried",
    "Spice",
    "Condiment",
    "Oil",
    "Sauce",
    "Alcohol",
    "Non-Alcoholic",
];

/// Sub-categories, cycled with period 10.
pub const SUB_CATEGORIES: [&str; 10] = [
    "Fresh", "Canned", "Frozen", "Dried", "Baked", "Fried", "Grilled", "Steamed", "Raw", "Pickled",
];

/// Derive the product record for index `i`.
pub fn product_record(i: usize) -> Product {
    let id = format!("product{}", i);
    Product {
        product_id: id.clone(),
        id,
        name: PRODUCT_NAMES[i % PRODUCT_NAMES.len()].to_string(),
        price: (i % PRODUCT_NAMES.len()) as i64 * 10,
        category: Category {
            main: MAIN_CATEGORIES[i % MAIN_CATEGORIES.len()].to_string(),
            sub: SUB_CATEGORIES[i % SUB_CATEGORIES.len()].to_string(),
        },
    }
}

/// Derive the first `count` product records, in index order.
pub fn build_products(count: usize) -> Vec<Product> {
    (0..count).map(product_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_zero() {
        let p = product_record(0);
        assert_eq!(p.id, "product0");
        assert_eq!(p.product_id, "product0");
        assert_eq!(p.name, "Apple");
        assert_eq!(p.price, 0);
        assert_eq!(p.category.main, "Fruit");
        assert_eq!(p.category.sub, "Fresh");
    }

    #[test]
    fn test_modulo_wraparound() {
        // Index 31 wraps all three catalogs: 31 % 30 = 1, 31 % 20 = 11, 31 % 10 = 1.
        let p = product_record(31);
        assert_eq!(p.name, "Banana");
        assert_eq!(p.price, 10);
        assert_eq!(p.category.main, "Frozen");
        assert_eq!(p.category.sub, "Canned");
    }

    #[test]
    fn test_deterministic() {
        for i in 0..100 {
            assert_eq!(product_record(i), product_record(i));
        }
    }

    #[test]
    fn test_ids_unique_and_stable() {
        let products = build_products(100);
        let ids: HashSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(products[42].id, "product42");
    }

    #[test]
    fn test_price_tracks_name_index() {
        for p in build_products(100) {
            let name_index = PRODUCT_NAMES.iter().position(|n| *n == p.name).unwrap();
            assert_eq!(p.price, name_index as i64 * 10);
        }
    }

    #[test]
    fn test_distinct_category_pairs() {
        // The (main, sub) pair cycles with period lcm(20, 10) = 20.
        let pairs: HashSet<(String, String)> = build_products(100)
            .into_iter()
            .map(|p| (p.category.main, p.category.sub))
            .collect();
        assert_eq!(pairs.len(), 20);
    }
}
