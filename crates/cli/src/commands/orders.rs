//! Order history browsing.

use std::io::Write;

use tea_house_core::{Catalog, Order, OrderHistory, OrderId, Storage};

use super::CommandError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Print one summary line per order, oldest first.
pub fn list<S: Storage>(history: &OrderHistory<S>, out: &mut impl Write) -> Result<(), CommandError> {
    let orders = history.load();
    if orders.is_empty() {
        writeln!(out, "No orders yet")?;
        return Ok(());
    }

    for order in &orders {
        writeln!(
            out,
            "#{}  {}  {:>10}  {} items  {}",
            order.id,
            order.created_at.format(TIMESTAMP_FORMAT),
            order.total.to_string(),
            order.items.total_items(),
            order.customer.customer_name
        )?;
    }
    writeln!(out, "{} orders", orders.len())?;
    Ok(())
}

/// Print every recorded field of one order.
///
/// # Errors
///
/// Returns `CommandError::OrderNotFound` if no order has `id`.
pub fn show<S: Storage>(
    history: &OrderHistory<S>,
    catalog: &Catalog,
    id: OrderId,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let order = history.find(id).ok_or(CommandError::OrderNotFound(id))?;
    write_order(&order, catalog, out)
}

fn write_order(order: &Order, catalog: &Catalog, out: &mut impl Write) -> Result<(), CommandError> {
    let customer = &order.customer;
    writeln!(out, "Order #{}", order.id)?;
    writeln!(out, "Placed:   {}", order.created_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "Customer: {}", customer.customer_name)?;
    writeln!(out, "Phone:    {}", customer.phone)?;
    writeln!(out, "Address:  {}, {}", customer.city, customer.address)?;
    writeln!(out, "Payment:  {}", customer.payment.label())?;
    if let Some(comment) = &customer.comment {
        writeln!(out, "Comment:  {comment}")?;
    }

    writeln!(out, "Items:")?;
    for (slug, quantity) in order.items.iter() {
        // Products may have left the catalog since the order was placed.
        let name = catalog.find(slug.as_str()).map_or("?", |p| p.name.as_str());
        writeln!(out, "  {:<14} x{quantity:<3} {name}", slug.as_str())?;
    }
    writeln!(out, "Total:    {}", order.total)?;
    Ok(())
}
