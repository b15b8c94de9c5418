//! Cart fragments and mutations.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use tea_house_core::CART_KEY;
use tea_house_integration_tests::TestContext;

#[tokio::test]
async fn test_empty_cart_fragments() {
    let ctx = TestContext::new();

    let panel = ctx.get_fragment("/cart").await;
    assert_eq!(panel.status, 200);
    assert!(panel.body.contains("Кошик порожній."));

    let count = ctx.get_fragment("/cart/count").await;
    assert_eq!(count.body.trim(), "(0)");
}

#[tokio::test]
async fn test_add_renders_panel_and_persists() {
    let ctx = TestContext::new();

    let resp = ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.trigger(), Some("cart-updated"));
    assert!(resp.body.contains("Лунцзин Преміум"));
    assert!(resp.body.contains("Разом: 790 грн"));

    assert_eq!(ctx.stored(CART_KEY), Some(json!({"longjing": 1})));
}

#[tokio::test]
async fn test_totals_after_several_adds() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "longjing")]).await;
    ctx.post_fragment("/cart/add", &[("slug", "tieguanyin")]).await;
    let resp = ctx.post_fragment("/cart/add", &[("slug", "tieguanyin")]).await;

    assert!(resp.body.contains("1380 грн"));
    assert!(resp.body.contains("Разом: 2170 грн"));

    let count = ctx.get_fragment("/cart/count").await;
    assert_eq!(count.body.trim(), "(3)");
}

#[tokio::test]
async fn test_change_to_zero_removes_entry() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "baimudan")]).await;

    let resp = ctx
        .post_fragment("/cart/change", &[("slug", "baimudan"), ("delta", "-1")])
        .await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.trigger(), Some("cart-updated"));
    assert!(resp.body.contains("Кошик порожній."));
    assert_eq!(ctx.stored(CART_KEY), Some(json!({})));
}

#[tokio::test]
async fn test_change_absent_slug_creates_nothing() {
    let ctx = TestContext::new();

    ctx.post_fragment("/cart/change", &[("slug", "longjing"), ("delta", "-1")])
        .await;
    let count = ctx.get_fragment("/cart/count").await;
    assert_eq!(count.body.trim(), "(0)");
}

#[tokio::test]
async fn test_change_increments() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "dahongpao")]).await;
    ctx.post_fragment("/cart/change", &[("slug", "dahongpao"), ("delta", "1")])
        .await;

    assert_eq!(ctx.stored(CART_KEY), Some(json!({"dahongpao": 2})));
}

#[tokio::test]
async fn test_cart_keeps_insertion_order() {
    let ctx = TestContext::new();
    ctx.post_fragment("/cart/add", &[("slug", "shupuer")]).await;
    let body = ctx
        .post_fragment("/cart/add", &[("slug", "longjing")])
        .await
        .body;

    let shupuer = body.find("Шу Пуер 2018").unwrap();
    let longjing = body.find("Лунцзин Преміум").unwrap();
    assert!(shupuer < longjing);
}

#[tokio::test]
async fn test_add_without_script_redirects() {
    let ctx = TestContext::new();

    let resp = ctx.post_page("/cart/add", &[("slug", "longjing")]).await;
    assert_eq!(resp.status, 303);
    assert_eq!(resp.location(), Some("/#cart"));
    assert!(resp.trigger().is_none());

    let page = ctx.get_page("/").await;
    assert!(page.body.contains("(1)"));
    assert!(page.body.contains("Разом: 790 грн"));
}

#[tokio::test]
async fn test_change_rejects_non_numeric_delta() {
    let ctx = TestContext::new();

    let resp = ctx
        .post_fragment("/cart/change", &[("slug", "longjing"), ("delta", "lots")])
        .await;
    assert!(resp.status.is_client_error());
    assert!(ctx.stored(CART_KEY).is_none());
}
