//! Plain-text rendering of the catalog and detail pages.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use storefront_core::{CatalogItem, Review};

use crate::page::PageState;

const MAX_REVIEWS_SHOWN: usize = 3;
const NO_VALUE: &str = "—";

/// Renders the catalog listing page.
pub fn render_list_page(state: &PageState<Vec<CatalogItem>>) -> String {
    match state {
        PageState::Loading => "Loading...".to_owned(),
        PageState::Error(message) => message.clone(),
        PageState::Loaded(items) if items.is_empty() => "No products found.".to_owned(),
        PageState::Loaded(items) => {
            let mut out = String::from("Product Catalog\n");
            for item in items {
                out.push('\n');
                out.push_str(&render_card(item));
            }
            out
        }
    }
}

/// Renders a product detail page.
pub fn render_detail_page(state: &PageState<CatalogItem>) -> String {
    match state {
        PageState::Loading => "Loading...".to_owned(),
        PageState::Error(message) => message.clone(),
        PageState::Loaded(item) => render_detail(item),
    }
}

fn render_card(item: &CatalogItem) -> String {
    format!(
        "[{id}] {name}\n    ${price:.2} | {category}\n    {image}\n",
        id = item.id,
        name = item.name,
        price = display_price(item.price),
        category = item.category.as_deref().unwrap_or(NO_VALUE),
        image = item.image.as_deref().unwrap_or("(no image)"),
    )
}

fn render_detail(item: &CatalogItem) -> String {
    DetailView(item).to_string()
}

/// Rounds half away from zero to cents, as the storefront shows prices.
fn display_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

struct DetailView<'a>(&'a CatalogItem);

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;

        writeln!(f, "{}", item.name)?;
        if !item.description.is_empty() {
            writeln!(f, "{}", item.description)?;
        }
        writeln!(f)?;

        writeln!(f, "Price:    ${:.2}", display_price(item.price))?;
        if let Some(discount) = item.discount_percentage.filter(|_| item.has_discount()) {
            writeln!(f, "Discount: {discount}%")?;
        }
        writeln!(f, "Brand:    {}", item.brand.as_deref().unwrap_or(NO_VALUE))?;
        writeln!(
            f,
            "Category: {}",
            item.category.as_deref().unwrap_or(NO_VALUE)
        )?;
        writeln!(f, "Status:   {}", stock_status(item))?;
        writeln!(
            f,
            "Image:    {}",
            item.image.as_deref().unwrap_or("(no image)")
        )?;

        if let Some(dims) = item.dimensions {
            writeln!(
                f,
                "Size:     {} x {} x {}",
                dims.width, dims.height, dims.depth
            )?;
        }
        if let Some(shipping) = &item.shipping_information {
            writeln!(f, "Shipping: {shipping}")?;
        }
        if let Some(warranty) = &item.warranty_information {
            writeln!(f, "Warranty: {warranty}")?;
        }
        if let Some(returns) = &item.return_policy {
            writeln!(f, "Returns:  {returns}")?;
        }

        if let Some(reviews) = item.reviews.as_ref().filter(|r| !r.is_empty()) {
            write!(f, "\nReviews ({})\n", reviews.len())?;
            for review in reviews.iter().take(MAX_REVIEWS_SHOWN) {
                f.write_str(&render_review(review))?;
            }
        }

        Ok(())
    }
}

fn render_review(review: &Review) -> String {
    format!(
        "  {name}  {stars}\n    {comment}\n",
        name = review.reviewer_name,
        stars = star_bar(review.rating),
        comment = review.comment,
    )
}

fn stock_status(item: &CatalogItem) -> String {
    if item.in_stock() {
        format!("{} in stock", item.stock)
    } else {
        "Out of stock".to_owned()
    }
}

/// Five-star bar with `floor(rating)` filled stars, clamped to `0..=5`.
fn star_bar(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.floor().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
