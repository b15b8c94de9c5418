//! The fixed product catalog and its search filters.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductSlug};

/// Label of the synthetic "any category" option.
pub const ALL_CATEGORIES: &str = "Усі";

/// A purchasable product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub slug: ProductSlug,
    pub name: String,
    pub category: String,
    pub price: Price,
    /// Display string, e.g. `100 г`.
    pub weight: String,
    pub description: String,
    /// Image URI.
    pub image: String,
}

/// Category criterion for a catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Any category.
    #[default]
    All,
    /// Exactly this category label.
    Only(String),
}

impl CategoryFilter {
    /// Interpret a form / query value.
    ///
    /// An absent or empty value, or the [`ALL_CATEGORIES`] label, means any
    /// category.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("" | ALL_CATEGORIES) => Self::All,
            Some(category) => Self::Only(category.to_owned()),
        }
    }

    /// The form value that selects this filter.
    #[must_use]
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// Search criteria: a free-text term plus a category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Trimmed, lowercased search term. Empty matches everything.
    term: String,
    category: CategoryFilter,
}

impl ProductQuery {
    /// Build a query from raw user input.
    #[must_use]
    pub fn new(term: &str, category: CategoryFilter) -> Self {
        Self {
            term: term.trim().to_lowercase(),
            category,
        }
    }

    /// The normalized search term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The category filter.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Case-insensitive substring match on name or description, and the
    /// category filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let by_term = self.term.is_empty()
            || product.name.to_lowercase().contains(&self.term)
            || product.description.to_lowercase().contains(&self.term);
        by_term && self.category.matches(&product.category)
    }
}

/// An ordered, immutable list of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, keeping their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's built-in tea selection.
    #[must_use]
    pub fn tea_house() -> Self {
        const IMAGE_PARAMS: &str = "?auto=format&fit=crop&w=900&q=80";

        let tea = |slug: &str, name: &str, category: &str, price, description: &str, photo: &str| {
            Product {
                slug: ProductSlug::from(slug),
                name: name.to_owned(),
                category: category.to_owned(),
                price: Price::new(price),
                weight: "100 г".to_owned(),
                description: description.to_owned(),
                image: format!("https://images.unsplash.com/{photo}{IMAGE_PARAMS}"),
            }
        };

        Self::new(vec![
            tea(
                "longjing",
                "Лунцзин Преміум",
                "Зелений",
                790,
                "Свіжий і горіховий профіль.",
                "photo-1597484661976-4f8ce34f32f6",
            ),
            tea(
                "tieguanyin",
                "Те Гуань Інь",
                "Улун",
                690,
                "Квітковий аромат орхідеї.",
                "photo-1515823064-d6e0c04616a7",
            ),
            tea(
                "dahongpao",
                "Да Хун Пао",
                "Улун",
                970,
                "Скельний улун з карамельними нотами.",
                "photo-1495474472287-4d71bcdd2085",
            ),
            tea(
                "shupuer",
                "Шу Пуер 2018",
                "Пуер",
                840,
                "Ноти какао і сухофруктів.",
                "photo-1558160074-4d7d8bdf4256",
            ),
            tea(
                "baimudan",
                "Бай Му Дань",
                "Білий",
                620,
                "Квітково-медовий аромат.",
                "photo-1544785349-c4a5301826fd",
            ),
        ])
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug.as_str() == slug)
    }

    /// Distinct categories, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products matching `query`, in catalog order.
    #[must_use]
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        self.products.iter().filter(|p| query.matches(p)).collect()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::tea_house()
    }
}
