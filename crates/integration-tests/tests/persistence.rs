//! State survives a restart over the same storage.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use tea_house_core::{CART_KEY, MemoryStorage, ORDERS_KEY, Storage};
use tea_house_integration_tests::TestContext;

#[tokio::test]
async fn test_cart_restored_after_restart() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "shupuer")]).await;
    ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;
    ctx.post_fragment("/cart/add", &[("slug", "shupuer")]).await;

    let restarted = ctx.restart();
    let count = restarted.get_fragment("/cart/count").await;
    assert_eq!(count.body.trim(), "(3)");

    let panel = restarted.get_fragment("/cart").await.body;
    assert!(panel.contains("Разом: 2470 грн"));
    assert_eq!(
        restarted.storage.get(CART_KEY).unwrap().as_deref(),
        Some(r#"{"shupuer":2,"longjing":1}"#)
    );
}

#[tokio::test]
async fn test_malformed_cart_starts_empty() {
    let storage = MemoryStorage::with_entries([(CART_KEY, "{not json")]);
    let ctx = TestContext::with_storage(storage);

    assert_eq!(ctx.get_fragment("/cart/count").await.body.trim(), "(0)");
}

#[tokio::test]
async fn test_stale_entries_ignored_in_totals() {
    let storage = MemoryStorage::with_entries([(CART_KEY, r#"{"retired-tea":4,"baimudan":1}"#)]);
    let ctx = TestContext::with_storage(storage);

    let panel = ctx.get_fragment("/cart").await.body;
    assert!(panel.contains("Бай Му Дань"));
    assert!(!panel.contains("retired-tea"));
    assert!(panel.contains("Разом: 620 грн"));
}

#[tokio::test]
async fn test_orders_appended_across_restarts() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;
    ctx.post_fragment("/checkout", &[("customerName", "Олена")]).await;

    let restarted = ctx.restart();
    restarted.post_fragment("/cart/add", &[("slug", "dahongpao")]).await;
    restarted
        .post_fragment("/checkout", &[("customerName", "Марко")])
        .await;

    let raw = restarted.storage.get(ORDERS_KEY).unwrap().unwrap();
    let orders: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let names: Vec<&serde_json::Value> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| &o["customerName"])
        .collect();
    assert_eq!(names, [&json!("Олена"), &json!("Марко")]);
}

#[tokio::test]
async fn test_unreadable_history_is_never_overwritten() {
    let legacy = r#"[{"id":1,"createdAt":"2024-05-01T10:00:00.000Z","customerName":"A","phone":"1","city":"C","address":"D","payment":"cash","items":{"baimudan":2},"total":1240}]"#;
    let storage = MemoryStorage::with_entries([(ORDERS_KEY, legacy)]);
    let ctx = TestContext::with_storage(storage);
    ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;

    let resp = ctx
        .post_fragment("/checkout", &[("customerName", "Олена")])
        .await;

    assert_eq!(resp.status, 500);
    assert_eq!(ctx.storage.get(ORDERS_KEY).unwrap().as_deref(), Some(legacy));
    assert_eq!(ctx.get_fragment("/cart/count").await.body.trim(), "(1)");
}
