//! Core data models used throughout cosmos-sampler.
//!
//! These types mirror the JSON documents stored in the container and the
//! envelope shapes the Cosmos DB REST API returns for queries.

use serde::{Deserialize, Serialize};

/// A synthetic product document as stored in the container.
///
/// `id` doubles as the partition key value. `ProductId` carries the same
/// value under its legacy field name; both are kept so seeded documents
/// match what other consumers of the demo container expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "ProductId")]
    pub product_id: String,
    pub name: String,
    pub price: i64,
    pub category: Category,
}

/// Nested category object on a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub main: String,
    pub sub: String,
}

/// One row of the category group-by count query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    pub main: String,
    pub sub: String,
    pub count: i64,
}

/// Response envelope for a document query.
///
/// The service wraps result rows in a `Documents` array alongside metadata
/// fields (`_rid`, `_count`) that this tool ignores.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    #[serde(rename = "Documents", default = "Vec::new")]
    pub documents: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: "product7".to_string(),
            product_id: "product7".to_string(),
            name: "Honeydew".to_string(),
            price: 70,
            category: Category {
                main: "Grain".to_string(),
                sub: "Grilled".to_string(),
            },
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "product7");
        assert_eq!(value["ProductId"], "product7");
        assert_eq!(value["name"], "Honeydew");
        assert_eq!(value["price"], 70);
        assert_eq!(value["category"]["main"], "Grain");
        assert_eq!(value["category"]["sub"], "Grilled");
    }

    #[test]
    fn test_query_response_ignores_metadata() {
        let body = r#"{
            "_rid": "abc==",
            "Documents": [
                {"id": "product0", "ProductId": "product0", "name": "Apple", "price": 0,
                 "category": {"main": "Fruit", "sub": "Fresh"}, "_rid": "abc==AAA=", "_etag": "\"x\""}
            ],
            "_count": 1
        }"#;

        let resp: QueryResponse<Product> = serde_json::from_str(body).unwrap();
        assert_eq!(resp.documents.len(), 1);
        assert_eq!(resp.documents[0].name, "Apple");
        assert_eq!(resp.documents[0].category.main, "Fruit");
    }

    #[test]
    fn test_query_response_missing_documents() {
        let resp: QueryResponse<Product> = serde_json::from_str(r#"{"_rid": "abc=="}"#).unwrap();
        assert!(resp.documents.is_empty());
    }
}
