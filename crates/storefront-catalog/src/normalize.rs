//! Projection from remote catalog types to [`storefront_core::CatalogItem`].
//!
//! Field-for-field rename and copy. The only conditional is image selection,
//! see [`select_image`].

use storefront_core::{CatalogItem, Dimensions, Review};

use crate::types::{RemoteDimensions, RemoteEnvelope, RemoteItem, RemoteReview};

/// Normalizes a [`RemoteItem`] into a [`CatalogItem`].
///
/// Total over any decoded item: absent optional fields stay absent and a
/// missing description becomes an empty string.
#[must_use]
pub fn normalize_item(item: RemoteItem) -> CatalogItem {
    let image = select_image(item.thumbnail, item.images);

    CatalogItem {
        id: item.id,
        name: item.title,
        description: item.description.unwrap_or_default(),
        price: item.price,
        stock: item.stock,
        image,
        category: item.category,
        brand: item.brand,
        discount_percentage: item.discount_percentage,
        rating: item.rating,
        tags: item.tags,
        warranty_information: item.warranty_information,
        shipping_information: item.shipping_information,
        return_policy: item.return_policy,
        minimum_order_quantity: item.minimum_order_quantity,
        reviews: item
            .reviews
            .map(|reviews| reviews.into_iter().map(normalize_review).collect()),
        dimensions: item.dimensions.map(normalize_dimensions),
    }
}

/// Normalizes every item of a listing envelope, preserving upstream order.
#[must_use]
pub fn normalize_envelope(envelope: RemoteEnvelope) -> Vec<CatalogItem> {
    envelope.products.into_iter().map(normalize_item).collect()
}

/// Picks the primary image: a non-empty thumbnail, else the first gallery
/// image if it is non-empty, else nothing.
#[must_use]
pub fn select_image(thumbnail: Option<String>, images: Option<Vec<String>>) -> Option<String> {
    thumbnail.filter(|t| !t.is_empty()).or_else(|| {
        images
            .and_then(|images| images.into_iter().next())
            .filter(|first| !first.is_empty())
    })
}

fn normalize_review(review: RemoteReview) -> Review {
    Review {
        rating: review.rating,
        comment: review.comment,
        date: review.date,
        reviewer_name: review.reviewer_name,
        reviewer_email: review.reviewer_email,
    }
}

fn normalize_dimensions(dimensions: RemoteDimensions) -> Dimensions {
    Dimensions {
        width: dimensions.width,
        height: dimensions.height,
        depth: dimensions.depth,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
