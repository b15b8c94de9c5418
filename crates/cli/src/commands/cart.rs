//! Cart inspection and reset.

use std::io::Write;

use tea_house_core::{Cart, CartStore, Catalog, Storage};

use super::CommandError;

/// Print each cart line with its subtotal, then the totals.
///
/// Entries whose product is gone from the catalog are listed separately and
/// left out of the totals' price, the same way the storefront prices them.
pub fn show(cart: &Cart, catalog: &Catalog, out: &mut impl Write) -> Result<(), CommandError> {
    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    for (product, quantity) in cart.lines(catalog) {
        writeln!(
            out,
            "{:<14} x{:<3} {:>10}  {}",
            product.slug.as_str(),
            quantity,
            product.price.times(quantity).to_string(),
            product.name
        )?;
    }
    for slug in cart.stale_slugs(catalog) {
        let quantity = cart.quantity(slug.as_str());
        writeln!(out, "{:<14} x{quantity:<3} (not in catalog)", slug.as_str())?;
    }

    writeln!(
        out,
        "{} items, total {}",
        cart.total_items(),
        cart.total_price(catalog)
    )?;
    Ok(())
}

/// Note printed after a clear: a running storefront holds the cart in memory.
pub const RUNNING_STOREFRONT_NOTE: &str = "If the storefront is running, restart it now; \
     otherwise its next cart change writes the old cart back.";

/// Empty the cart and persist the empty state.
///
/// The storefront reads the cart once at startup, so a clear made while it
/// runs only sticks once the storefront is restarted.
pub fn clear<S: Storage>(store: &mut CartStore<S>, out: &mut impl Write) -> Result<(), CommandError> {
    let removed = store.total_items();
    store.clear()?;
    tracing::info!(removed, "Cart cleared");
    writeln!(out, "Cart cleared ({removed} items removed)")?;
    writeln!(out, "{RUNNING_STOREFRONT_NOTE}")?;
    Ok(())
}
