use rust_decimal::Decimal;
use serde_json::json;

use super::*;

fn remote(value: serde_json::Value) -> RemoteItem {
    serde_json::from_value(value).expect("fixture should decode")
}

fn make_remote_item(id: u64, thumbnail: Option<&str>, images: Option<Vec<&str>>) -> RemoteItem {
    RemoteItem {
        id,
        title: format!("Item {id}"),
        description: Some("A thing".to_owned()),
        price: Decimal::new(999, 2),
        discount_percentage: None,
        rating: None,
        stock: 5,
        brand: None,
        category: None,
        thumbnail: thumbnail.map(str::to_owned),
        images: images.map(|v| v.into_iter().map(str::to_owned).collect()),
        tags: None,
        warranty_information: None,
        shipping_information: None,
        return_policy: None,
        minimum_order_quantity: None,
        reviews: None,
        dimensions: None,
    }
}

// -----------------------------------------------------------------------
// select_image
// -----------------------------------------------------------------------

#[test]
fn image_prefers_non_empty_thumbnail() {
    let item = make_remote_item(1, Some("thumb.webp"), Some(vec!["a.jpg", "b.jpg"]));
    assert_eq!(normalize_item(item).image.as_deref(), Some("thumb.webp"));
}

#[test]
fn image_falls_back_to_first_gallery_image_when_thumbnail_empty() {
    let item = make_remote_item(1, Some(""), Some(vec!["a.jpg", "b.jpg"]));
    assert_eq!(normalize_item(item).image.as_deref(), Some("a.jpg"));
}

#[test]
fn image_falls_back_to_first_gallery_image_when_thumbnail_absent() {
    let item = make_remote_item(1, None, Some(vec!["a.jpg"]));
    assert_eq!(normalize_item(item).image.as_deref(), Some("a.jpg"));
}

#[test]
fn image_absent_when_thumbnail_and_gallery_empty() {
    let item = make_remote_item(1, Some(""), Some(vec![]));
    assert!(normalize_item(item).image.is_none());

    let item = make_remote_item(2, None, None);
    assert!(normalize_item(item).image.is_none());
}

#[test]
fn image_absent_when_first_gallery_image_is_empty() {
    assert_eq!(
        select_image(Some(String::new()), Some(vec![String::new(), "b.jpg".to_owned()])),
        None
    );
}

// -----------------------------------------------------------------------
// normalize_item
// -----------------------------------------------------------------------

#[test]
fn normalizes_phone_scenario() {
    let item = remote(json!({
        "id": 1,
        "title": "Phone",
        "price": 299.99,
        "stock": 0,
        "thumbnail": "",
        "images": ["a.jpg"]
    }));
    let normalized = normalize_item(item);

    assert_eq!(normalized.id, 1);
    assert_eq!(normalized.name, "Phone");
    assert_eq!(normalized.price, Decimal::new(29_999, 2));
    assert_eq!(normalized.stock, 0);
    assert_eq!(normalized.image.as_deref(), Some("a.jpg"));
    assert_eq!(normalized.description, "");
    assert!(normalized.category.is_none());
    assert!(normalized.reviews.is_none());

    let public = serde_json::to_value(&normalized).unwrap();
    assert_eq!(public["nombre"], "Phone");
    assert_eq!(public["precio"], 299.99);
    assert_eq!(public["imagen"], "a.jpg");
}

#[test]
fn copies_every_optional_field_verbatim() {
    let item = remote(json!({
        "id": 6,
        "title": "Calvin Klein CK One",
        "description": "A classic unisex fragrance.",
        "price": 49.99,
        "discountPercentage": 0.32,
        "rating": 4.85,
        "stock": 17,
        "brand": "Calvin Klein",
        "category": "fragrances",
        "thumbnail": "https://cdn.dummyjson.com/6/thumbnail.webp",
        "images": ["https://cdn.dummyjson.com/6/1.webp"],
        "tags": ["fragrances", "perfumes"],
        "warrantyInformation": "5 year warranty",
        "shippingInformation": "Ships overnight",
        "availabilityStatus": "In Stock",
        "returnPolicy": "No return policy",
        "minimumOrderQuantity": 10,
        "reviews": [{
            "rating": 5,
            "comment": "Great value!",
            "date": "2024-05-23T08:56:21.619Z",
            "reviewerName": "Nolan Gonzalez",
            "reviewerEmail": "nolan.gonzalez@x.dummyjson.com"
        }],
        "dimensions": { "width": 29.36, "height": 27.76, "depth": 20.72 },
        "meta": { "barcode": "2210136215089", "qrCode": "https://cdn.dummyjson.com/qr.png" }
    }));
    let n = normalize_item(item);

    assert_eq!(n.name, "Calvin Klein CK One");
    assert_eq!(n.description, "A classic unisex fragrance.");
    assert_eq!(n.discount_percentage, Some(0.32));
    assert_eq!(n.rating, Some(4.85));
    assert_eq!(n.brand.as_deref(), Some("Calvin Klein"));
    assert_eq!(n.category.as_deref(), Some("fragrances"));
    assert_eq!(
        n.image.as_deref(),
        Some("https://cdn.dummyjson.com/6/thumbnail.webp")
    );
    assert_eq!(
        n.tags,
        Some(vec!["fragrances".to_owned(), "perfumes".to_owned()])
    );
    assert_eq!(n.warranty_information.as_deref(), Some("5 year warranty"));
    assert_eq!(n.shipping_information.as_deref(), Some("Ships overnight"));
    assert_eq!(n.return_policy.as_deref(), Some("No return policy"));
    assert_eq!(n.minimum_order_quantity, Some(10));

    let reviews = n.reviews.expect("reviews should be copied");
    assert_eq!(reviews.len(), 1);
    assert!((reviews[0].rating - 5.0).abs() < f64::EPSILON);
    assert_eq!(reviews[0].reviewer_name, "Nolan Gonzalez");
    assert_eq!(reviews[0].reviewer_email, "nolan.gonzalez@x.dummyjson.com");

    let dims = n.dimensions.expect("dimensions should be copied");
    assert!((dims.width - 29.36).abs() < f64::EPSILON);
    assert!((dims.depth - 20.72).abs() < f64::EPSILON);
}

#[test]
fn review_order_is_preserved() {
    let mut item = make_remote_item(1, None, None);
    item.reviews = Some(
        ["first", "second", "third"]
            .iter()
            .map(|c| RemoteReview {
                rating: 3.0,
                comment: (*c).to_owned(),
                date: "2024-01-01".to_owned(),
                reviewer_name: "R".to_owned(),
                reviewer_email: "r@example.com".to_owned(),
            })
            .collect(),
    );
    let comments: Vec<String> = normalize_item(item)
        .reviews
        .unwrap()
        .into_iter()
        .map(|r| r.comment)
        .collect();
    assert_eq!(comments, ["first", "second", "third"]);
}

#[test]
fn distinct_identifiers_stay_distinct() {
    let ids: Vec<u64> = (1..=50)
        .map(|id| normalize_item(make_remote_item(id, None, None)).id)
        .collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped);
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
}

// -----------------------------------------------------------------------
// normalize_envelope
// -----------------------------------------------------------------------

#[test]
fn envelope_preserves_count_and_order() {
    let envelope = RemoteEnvelope {
        products: vec![
            make_remote_item(30, None, None),
            make_remote_item(4, None, None),
            make_remote_item(17, None, None),
        ],
        total: 194,
        skip: 0,
        limit: 3,
    };
    let ids: Vec<u64> = normalize_envelope(envelope).iter().map(|i| i.id).collect();
    assert_eq!(ids, [30, 4, 17]);
}

#[test]
fn empty_envelope_normalizes_to_empty_vec() {
    let envelope: RemoteEnvelope = serde_json::from_value(json!({
        "products": [], "total": 0, "skip": 0, "limit": 30
    }))
    .unwrap();
    assert!(normalize_envelope(envelope).is_empty());
}
