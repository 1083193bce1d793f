use pricechart_rs::models::{MonthKey, ReferencePoint, SeriesBundle};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn parse_sample_payload() {
    let sample = r#"
    {
      "project_data": [
        {"name": "Riverside", "date": "2024-03", "price": 415.2, "region": "East City"},
        {"name": "Harbor View", "date": "2024-04", "price": 398.0, "region": "West City"}
      ],
      "reference_price_data": [
        {"date": "2024-03", "East City": 455.0, "West City": 0},
        {"date": "2024-04", "East City": 460.5}
      ],
      "regions": ["East City", "West City"]
    }
    "#;

    let bundle: SeriesBundle = serde_json::from_str(sample).unwrap();
    assert_eq!(bundle.project_data.len(), 2);
    assert_eq!(bundle.project_data[0].name, "Riverside");
    assert_eq!(bundle.project_data[0].region, "East City");
    assert_eq!(bundle.project_data[0].date.to_string(), "2024-03");
    assert_eq!(bundle.project_data[0].price, 415.2);

    // the sparse reference rows keep their per-region entries
    let first = &bundle.reference_price_data[0];
    assert_eq!(first.date.to_string(), "2024-03");
    assert_eq!(first.price_for("East City"), Some(455.0));
    // an encoded zero is carried on the wire but reads as "no price"
    assert_eq!(first.prices.get("West City"), Some(&0.0));
    assert_eq!(first.price_for("West City"), None);

    let second = &bundle.reference_price_data[1];
    assert_eq!(second.price_for("West City"), None);
    assert_eq!(second.price_for("East City"), Some(460.5));

    assert_eq!(bundle.regions, ["East City", "West City"]);
    assert!(!bundle.is_empty());
}

#[test]
fn missing_sections_default_to_empty() {
    let bundle: SeriesBundle = serde_json::from_str("{}").unwrap();
    assert!(bundle.is_empty());
    assert!(bundle.regions.is_empty());
}

#[test]
fn rejects_malformed_month_keys() {
    let sample = r#"{"project_data":[{"name":"A","date":"2024-3","price":1.0,"region":"R"}]}"#;
    assert!(serde_json::from_str::<SeriesBundle>(sample).is_err());
}

#[test]
fn reference_rows_serialize_flat() {
    let row = ReferencePoint {
        date: MonthKey::new(2024, 3).unwrap(),
        prices: BTreeMap::from([("East City".to_string(), 455.0)]),
    };
    let v = serde_json::to_value(&row).unwrap();
    assert_eq!(v, json!({"date": "2024-03", "East City": 455.0}));
}
