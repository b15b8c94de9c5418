//! Product grid and category selector projections.

use askama::Template;
use askama_web::WebTemplate;
use tea_house_core::{ALL_CATEGORIES, Catalog, CategoryFilter, Product, ProductQuery};

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub weight: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.name.clone(),
            category: product.category.clone(),
            weight: product.weight.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// One `<option>` of the category selector.
#[derive(Clone)]
pub struct CategoryOptionView {
    pub value: String,
    pub selected: bool,
}

/// Product grid fragment (`#products-grid`).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Project the products matching `query` into the grid fragment.
#[must_use]
pub fn product_grid(catalog: &Catalog, query: &ProductQuery) -> ProductGridTemplate {
    ProductGridTemplate {
        products: catalog
            .search(query)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    }
}

/// Selector options: the synthetic "all" entry followed by `categories`.
#[must_use]
pub fn category_options(categories: &[String], selected: &CategoryFilter) -> Vec<CategoryOptionView> {
    std::iter::once(ALL_CATEGORIES)
        .chain(categories.iter().map(String::as_str))
        .map(|value| CategoryOptionView {
            value: value.to_owned(),
            selected: value == selected.as_param(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_renders_all_products() {
        let catalog = Catalog::tea_house();
        let html = product_grid(&catalog, &ProductQuery::default()).render().unwrap();
        assert_eq!(html.matches("<article class=\"card\"").count(), 5);
        assert!(html.contains("Лунцзин Преміум"));
        assert!(html.contains("790 грн"));
        assert!(html.contains("value=\"longjing\""));
    }

    #[test]
    fn test_grid_filtered_by_category() {
        let catalog = Catalog::tea_house();
        let query = ProductQuery::new("", CategoryFilter::Only("Улун".to_owned()));
        let html = product_grid(&catalog, &query).render().unwrap();
        assert_eq!(html.matches("<article class=\"card\"").count(), 2);
        assert!(html.contains("Да Хун Пао"));
        assert!(!html.contains("Бай Му Дань"));
    }

    #[test]
    fn test_grid_empty_result() {
        let catalog = Catalog::tea_house();
        let query = ProductQuery::new("кава", CategoryFilter::All);
        let html = product_grid(&catalog, &query).render().unwrap();
        assert!(!html.contains("<article"));
        assert!(html.contains("Нічого не знайдено."));
    }

    #[test]
    fn test_grid_escapes_markup() {
        let mut product = Catalog::tea_house().products().first().cloned().unwrap();
        product.name = "<script>alert(1)</script>".to_owned();
        let catalog = Catalog::new(vec![product]);
        let html = product_grid(&catalog, &ProductQuery::default()).render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("alert(1)"));
    }

    #[test]
    fn test_category_options() {
        let categories = vec!["Зелений".to_owned(), "Улун".to_owned()];
        let options = category_options(&categories, &CategoryFilter::Only("Улун".to_owned()));
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec![ALL_CATEGORIES, "Зелений", "Улун"]);
        let selected: Vec<bool> = options.iter().map(|o| o.selected).collect();
        assert_eq!(selected, vec![false, false, true]);

        let options = category_options(&categories, &CategoryFilter::All);
        assert!(options.first().unwrap().selected);
    }
}
