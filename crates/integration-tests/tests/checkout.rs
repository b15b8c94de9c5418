//! Checkout submission.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use serde_json::json;
use tea_house_core::{CART_KEY, ORDERS_KEY};
use tea_house_integration_tests::TestContext;

const EMPTY_CART_MESSAGE: &str = "Додайте товари в кошик перед оформленням.";

fn customer_form(payment: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("customerName", "Іван Петренко"),
        ("phone", "+380501112233"),
        ("city", "Київ"),
        ("address", "Хрещатик, 1"),
        ("payment", payment),
        ("comment", ""),
    ]
}

async fn fill_cart(ctx: &TestContext) {
    ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;
    ctx.post_fragment("/cart/add", &[("slug", "tieguanyin")]).await;
    ctx.post_fragment("/cart/add", &[("slug", "tieguanyin")]).await;
}

#[tokio::test]
async fn test_empty_cart_is_rejected() {
    let ctx = TestContext::new();

    let resp = ctx
        .post_fragment("/checkout", &customer_form("cash_on_delivery"))
        .await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains(EMPTY_CART_MESSAGE));
    assert!(resp.trigger().is_none());

    assert!(ctx.stored(ORDERS_KEY).is_none());
    assert_eq!(ctx.get_fragment("/cart/count").await.body.trim(), "(0)");
}

#[tokio::test]
async fn test_order_placed() {
    let ctx = TestContext::new();
    fill_cart(&ctx).await;

    let resp = ctx
        .post_fragment("/checkout", &customer_form("card_online"))
        .await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.trigger(), Some("order-placed, cart-updated"));

    let orders = ctx.stored(ORDERS_KEY).unwrap();
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order["total"], json!(2170));
    assert_eq!(order["items"], json!({"longjing": 1, "tieguanyin": 2}));
    assert_eq!(order["customerName"], json!("Іван Петренко"));
    assert_eq!(order["payment"], json!("card_online"));
    assert!(order.get("comment").is_none());
    assert!(order["createdAt"].is_string());

    let id = order["id"].as_i64().unwrap();
    assert!(resp.body.contains(&format!("Замовлення #{id} прийнято. Сума: 2170 грн.")));

    assert_eq!(ctx.stored(CART_KEY), Some(json!({})));
    assert!(ctx.get_fragment("/cart").await.body.contains("Кошик порожній."));
}

#[tokio::test]
async fn test_order_ids_increase() {
    let ctx = TestContext::new();
    for _ in 0..3 {
        ctx.post_fragment("/cart/add", &[("slug", "baimudan")]).await;
        ctx.post_fragment("/checkout", &customer_form("cash_on_delivery"))
            .await;
    }

    let orders = ctx.stored(ORDERS_KEY).unwrap();
    let ids: Vec<i64> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}

#[tokio::test]
async fn test_comment_recorded_verbatim() {
    let ctx = TestContext::new();
    fill_cart(&ctx).await;

    let mut form = customer_form("card_on_delivery");
    form[5] = ("comment", "Дзвонити після 18:00");
    ctx.post_fragment("/checkout", &form).await;

    let orders = ctx.stored(ORDERS_KEY).unwrap();
    assert_eq!(orders[0]["comment"], json!("Дзвонити після 18:00"));
}

#[tokio::test]
async fn test_unknown_payment_method_rejected() {
    let ctx = TestContext::new();
    fill_cart(&ctx).await;

    let resp = ctx.post_fragment("/checkout", &customer_form("bitcoin")).await;
    assert_eq!(resp.status, 422);
    assert!(ctx.stored(ORDERS_KEY).is_none());
    assert_eq!(ctx.get_fragment("/cart/count").await.body.trim(), "(3)");
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    let ctx = TestContext::new();
    fill_cart(&ctx).await;

    let resp = ctx.post_fragment("/checkout", &[]).await;
    assert_eq!(resp.status, 200);

    let orders = ctx.stored(ORDERS_KEY).unwrap();
    assert_eq!(orders[0]["customerName"], json!(""));
    assert_eq!(orders[0]["payment"], json!("cash_on_delivery"));
}

#[tokio::test]
async fn test_checkout_without_script_renders_page() {
    let ctx = TestContext::new();
    fill_cart(&ctx).await;

    let resp = ctx.post_page("/checkout", &customer_form("cash_on_delivery")).await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains("<html"));
    assert!(resp.body.contains("прийнято. Сума: 2170 грн."));
    assert!(resp.body.contains("Кошик порожній."));
    assert!(!resp.body.contains("Іван Петренко"));
}

#[tokio::test]
async fn test_rejected_checkout_without_script_keeps_form_values() {
    let ctx = TestContext::new();

    let resp = ctx.post_page("/checkout", &customer_form("card_online")).await;
    assert_eq!(resp.status, 200);
    assert!(resp.body.contains(EMPTY_CART_MESSAGE));
    assert!(resp.body.contains("value=\"Іван Петренко\""));
    assert!(resp.body.contains("<option value=\"card_online\" selected>"));
}
