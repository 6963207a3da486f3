use itemsearch_domain::{Dimension, Locale, StoredDocument, project};

fn stored_document_json() -> serde_json::Value {
	serde_json::json!({
		"source": "acme",
		"timestamp": 1_588_000_000u64,
		"image_urls": ["https://img.example/1.jpg"],
		"dimensions": { "height": 40.0, "weight": 2.5 },
		"name": { "en": "Red Box", "fr": "Boîte rouge" },
		"description": { "en": "A red box.", "fr": "Une boîte rouge." },
		"urls": { "en": ["https://example.com/red-box"], "fr": ["https://example.fr/boite-rouge"] },
		"categories": { "en": ["boxes"], "fr": ["boîtes"] },
		"price": {
			"en": { "amount": 10.0, "currency": "USD" },
			"fr": { "amount": 9.0, "currency": "EUR" }
		}
	})
}

#[test]
fn decodes_engine_document_shape() {
	let document: StoredDocument =
		serde_json::from_value(stored_document_json()).expect("decode failed");

	assert_eq!(document.source, "acme");
	assert_eq!(document.dimensions.get(&Dimension::Height), Some(&40.0));
	assert_eq!(document.dimensions.get(&Dimension::Weight), Some(&2.5));
	assert_eq!(document.dimensions.len(), 2);
	assert_eq!(document.name.get(Locale::Fr), Some(&"Boîte rouge".to_string()));
}

#[test]
fn french_projection_round_trips_french_variants() {
	let document: StoredDocument =
		serde_json::from_value(stored_document_json()).expect("decode failed");
	let item =
		project(document, "doc-1".to_string(), 3.1, Locale::Fr).expect("projection failed");

	assert_eq!(item.name, "Boîte rouge");
	assert_eq!(item.description, "Une boîte rouge.");
	assert_eq!(item.urls, vec!["https://example.fr/boite-rouge".to_string()]);
	assert_eq!(item.categories, vec!["boîtes".to_string()]);
	assert_eq!(item.price.amount, 9.0);
	assert_eq!(item.price.currency, "EUR");
}

#[test]
fn projection_is_pure() {
	let document: StoredDocument =
		serde_json::from_value(stored_document_json()).expect("decode failed");
	let first = project(document.clone(), "doc-1".to_string(), 3.1, Locale::En)
		.expect("projection failed");
	let second =
		project(document, "doc-1".to_string(), 3.1, Locale::En).expect("projection failed");

	assert_eq!(serde_json::to_value(&first).unwrap(), serde_json::to_value(&second).unwrap());
}

#[test]
fn projected_item_serializes_flat() {
	let document: StoredDocument =
		serde_json::from_value(stored_document_json()).expect("decode failed");
	let item =
		project(document, "doc-1".to_string(), 3.1, Locale::En).expect("projection failed");
	let json = serde_json::to_value(&item).expect("serialize failed");

	assert_eq!(json["id"], "doc-1");
	assert_eq!(json["name"], "Red Box");
	assert_eq!(json["dimensions"]["height"], 40.0);
	assert_eq!(json["price"]["currency"], "USD");
	// No locale nesting survives projection.
	assert!(json["name"].is_string());
}

#[test]
fn tolerates_documents_without_optional_fields() {
	let document: StoredDocument = serde_json::from_value(serde_json::json!({
		"source": "acme",
		"timestamp": 1u64,
		"name": { "en": "Bare" },
		"description": { "en": "" },
		"urls": { "en": [] },
		"categories": { "en": [] },
		"price": { "en": { "amount": 0.0, "currency": "USD" } }
	}))
	.expect("decode failed");

	assert!(document.image_urls.is_empty());
	assert!(document.dimensions.is_empty());

	let item = project(document, "doc-2".to_string(), 0.5, Locale::En).expect("projection failed");
	assert!(item.dimensions.is_empty());
}
