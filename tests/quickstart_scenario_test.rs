//! End-to-end tests for the quickstart scenario against an in-process store

mod common;

use common::TestStore;
use cosmos_quickstart::adapters::database::{collect_items, DocumentStore};
use cosmos_quickstart::config::SampleConfig;
use cosmos_quickstart::core::quickstart::{QuickstartScenario, CATEGORY_PARAMETER, CATEGORY_QUERY};
use cosmos_quickstart::domain::product::SAMPLE_CATEGORY_ID;
use cosmos_quickstart::domain::{
    Item, PartitionKeyPath, PartitionScope, Product, QuerySpec, QuickstartError,
};
use serde_json::json;

fn item(value: serde_json::Value) -> Item {
    Item::from_value(value).unwrap()
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let store = TestStore::default();

    let report = QuickstartScenario::from_config(&SampleConfig::default())
        .run(&store)
        .await
        .unwrap();

    let expected = item(json!({
        "id": "Product1",
        "categoryId": SAMPLE_CATEGORY_ID,
        "categoryName": "electronics",
        "name": "Surface Laptop",
        "quantity": 12,
        "sale": true
    }));
    assert_eq!(report.point_read, expected);
    assert_eq!(report.results, vec![expected]);

    let rendered = report.render().unwrap();
    let (first, rest) = rendered.split_once('\n').unwrap();
    assert!(first.starts_with("Point read\t{"));
    assert!(rest.starts_with("Result list\t["));

    let listed: serde_json::Value =
        serde_json::from_str(rest.trim_start_matches("Result list\t")).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_rerun_does_not_duplicate() {
    let store = TestStore::default();
    let scenario = QuickstartScenario::default();

    scenario.run(&store).await.unwrap();
    let report = scenario.run(&store).await.unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_query_only_returns_matching_category() {
    let store = TestStore::default();
    store
        .upsert_item(&item(json!({"id": "Chair1", "categoryName": "furniture"})))
        .await
        .unwrap();

    let report = QuickstartScenario::default().run(&store).await.unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].id(), Some("Product1"));
}

#[tokio::test]
async fn test_scenario_sends_category_query() {
    let store = TestStore::default().with_predicate(|query, item| {
        query.text == CATEGORY_QUERY
            && query.parameter(CATEGORY_PARAMETER) == item.get("categoryName")
    });

    let report = QuickstartScenario::default().run(&store).await.unwrap();
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_from_config_overrides() {
    let config = SampleConfig {
        item_id: "Product7".to_string(),
        category_name: "gear".to_string(),
        cross_partition: false,
    };
    let scenario = QuickstartScenario::from_config(&config);
    assert_eq!(scenario.product().id, "Product7");
    assert_eq!(scenario.product().name, "Surface Laptop");

    let store = TestStore::default();
    let report = scenario.run(&store).await.unwrap();
    assert_eq!(report.point_read.get("categoryName"), Some(&json!("gear")));
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn test_partition_key_follows_container_path() {
    let store = TestStore::new(PartitionKeyPath::new("/categoryName").unwrap());
    let report = QuickstartScenario::default()
        .with_cross_partition(false)
        .run(&store)
        .await
        .unwrap();

    assert_eq!(report.results.len(), 1);
    assert!(store.read_item("Product1", "electronics").await.is_ok());
    assert!(store.read_item("Product1", "Product1").await.is_err());
}

#[tokio::test]
async fn test_missing_partition_field_fails_before_write() {
    let store = TestStore::new(PartitionKeyPath::new("/tenant").unwrap());
    let err = QuickstartScenario::default().run(&store).await.unwrap_err();

    assert!(matches!(err, QuickstartError::Validation(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_point_read_returns_upserted_document() {
    let store = TestStore::default();
    let product = Product::sample().to_item().unwrap();

    store.upsert_item(&product).await.unwrap();
    let read = store.read_item("Product1", "Product1").await.unwrap();
    assert_eq!(read, product);

    let typed: Product = serde_json::from_value(read.into_value()).unwrap();
    assert_eq!(typed, Product::sample());
}

#[tokio::test]
async fn test_upsert_replaces_whole_document() {
    let store = TestStore::default();
    store
        .upsert_item(&item(json!({"id": "Product1", "quantity": 12, "sale": true})))
        .await
        .unwrap();
    store
        .upsert_item(&item(json!({"id": "Product1", "quantity": 3})))
        .await
        .unwrap();

    let all = collect_items(
        store
            .query_items(&QuerySpec::new("SELECT * FROM c"), PartitionScope::CrossPartition)
            .await
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].get("sale"), None);
    assert_eq!(all[0].get("quantity"), Some(&json!(3)));
}

#[tokio::test]
async fn test_query_with_no_matches_is_empty() {
    let store = TestStore::default();
    store
        .upsert_item(&Product::sample().to_item().unwrap())
        .await
        .unwrap();

    let query = QuerySpec::new(CATEGORY_QUERY).with_parameter(CATEGORY_PARAMETER, "furniture");
    let items = collect_items(
        store
            .query_items(&query, PartitionScope::CrossPartition)
            .await
            .unwrap(),
    )
    .await
    .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_query_with_unbound_parameter_is_rejected() {
    let store = TestStore::default();
    let result = store
        .query_items(&QuerySpec::new(CATEGORY_QUERY), PartitionScope::CrossPartition)
        .await;
    assert!(matches!(result, Err(QuickstartError::QuerySyntax(_))));
}

#[tokio::test]
async fn test_read_missing_document() {
    let store = TestStore::default();
    let err = store.read_item("Product404", "Product404").await.unwrap_err();

    assert!(matches!(err, QuickstartError::NotFound(_)));
    assert_eq!(err.exit_code(), 5);
}

#[tokio::test]
async fn test_cross_partition_query_sees_every_partition() {
    let store = TestStore::default();
    for id in ["Product1", "Product2", "Product3"] {
        let product = Product {
            id: id.to_string(),
            ..Product::sample()
        };
        store.upsert_item(&product.to_item().unwrap()).await.unwrap();
    }

    let sample = SampleConfig::default();
    let report = QuickstartScenario::from_config(&sample)
        .run(&store)
        .await
        .unwrap();
    assert_eq!(report.results.len(), 3);

    let pinned = QuickstartScenario::from_config(&sample)
        .with_cross_partition(false)
        .run(&store)
        .await
        .unwrap();
    assert_eq!(pinned.results.len(), 1);
}
