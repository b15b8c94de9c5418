//! Catalog listing.

use std::io::Write;

use tea_house_core::Catalog;

use super::CommandError;

/// Print one line per product: slug, category, price, weight and name.
pub fn list(catalog: &Catalog, out: &mut impl Write) -> Result<(), CommandError> {
    for product in catalog.products() {
        writeln!(
            out,
            "{:<14} {:<10} {:>9}  {:<7} {}",
            product.slug.as_str(),
            product.category,
            product.price.to_string(),
            product.weight,
            product.name
        )?;
    }
    writeln!(out, "{} products", catalog.len())?;
    Ok(())
}
