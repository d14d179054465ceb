//! Fixed read and aggregation queries.
//!
//! Runs the sample queries against the container and prints one formatted
//! line per result row. All rows are materialized in memory before printing;
//! no paging control is exposed.

use anyhow::Result;

use crate::client::CosmosClient;
use crate::config::Config;
use crate::models::{CategoryCount, Product};

/// Filter query: fresh fruit only. Both category fields must match exactly.
pub const PRODUCT_FILTER_QUERY: &str =
    "SELECT * FROM c WHERE c.category.main = 'Fruit' AND c.category.sub = 'Fresh'";

/// Aggregation query: product count per distinct (main, sub) category pair.
/// Cross-partition group-by; the fan-out is the service's concern.
pub const CATEGORY_COUNT_QUERY: &str = "SELECT c.category.main AS main, c.category.sub AS sub, \
     COUNT(1) AS count FROM c GROUP BY c.category.main, c.category.sub";

/// Run the fixed product filter query and print one line per product.
pub async fn run_products(config: &Config) -> Result<()> {
    let client = CosmosClient::from_env(config)?;
    let products: Vec<Product> = client.query_documents(PRODUCT_FILTER_QUERY).await?;

    for product in &products {
        println!("{}", format_product_row(product));
    }

    Ok(())
}

/// Run the category group-by count query and print one line per group.
pub async fn run_categories(config: &Config) -> Result<()> {
    let client = CosmosClient::from_env(config)?;
    let rows: Vec<CategoryCount> = client.query_documents(CATEGORY_COUNT_QUERY).await?;

    for row in &rows {
        println!("{}", format_category_row(row));
    }

    Ok(())
}

/// Run an arbitrary SQL query and print each result row as pretty JSON.
pub async fn run_sql(config: &Config, sql: &str) -> Result<()> {
    let client = CosmosClient::from_env(config)?;
    let rows: Vec<serde_json::Value> = client.query_documents(sql).await?;

    for row in &rows {
        println!("{}", serde_json::to_string_pretty(row)?);
    }
    println!("({} rows)", rows.len());

    Ok(())
}

fn format_product_row(product: &Product) -> String {
    format!("Product Name: {}, Price: {}", product.name, product.price)
}

fn format_category_row(row: &CategoryCount) -> String {
    format!(
        "Main Category: {}, Sub Category: {}, Count: {}",
        row.main, row.sub, row.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_product_row_format() {
        let product = Product {
            id: "product0".to_string(),
            product_id: "product0".to_string(),
            name: "Apple".to_string(),
            price: 0,
            category: Category {
                main: "Fruit".to_string(),
                sub: "Fresh".to_string(),
            },
        };
        assert_eq!(format_product_row(&product), "Product Name: Apple, Price: 0");
    }

    #[test]
    fn test_category_row_format() {
        let row = CategoryCount {
            main: "Fruit".to_string(),
            sub: "Fresh".to_string(),
            count: 5,
        };
        assert_eq!(
            format_category_row(&row),
            "Main Category: Fruit, Sub Category: Fresh, Count: 5"
        );
    }

    #[test]
    fn test_filter_query_matches_both_category_fields() {
        assert!(PRODUCT_FILTER_QUERY.contains("c.category.main = 'Fruit'"));
        assert!(PRODUCT_FILTER_QUERY.contains("c.category.sub = 'Fresh'"));
        assert!(PRODUCT_FILTER_QUERY.contains(" AND "));
    }

    #[test]
    fn test_count_query_groups_by_both_dimensions() {
        assert!(CATEGORY_COUNT_QUERY.contains("GROUP BY c.category.main, c.category.sub"));
        assert!(CATEGORY_COUNT_QUERY.contains("COUNT(1) AS count"));
    }
}
