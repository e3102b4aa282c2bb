//! Decoding caller requests and validating them before scoring.

use nutrigrow_core::{
    CropDetailsQuery, CropQuery, CropRecord, CropStore, CropTable, FoodDetailsQuery, FoodQuery,
    QueryError,
};
use rstest::rstest;

#[rstest]
fn crop_request_decodes_flat_fields() {
    let json = r#"{
        "temperature": 30.5, "humidity": 55, "moisture": 40,
        "soil_type": "Black", "nitrogen": 10, "phosphorous": 20,
        "potassium": 30, "limit": 5
    }"#;
    let query: CropQuery = serde_json::from_str(json).expect("valid request");
    assert_eq!(query.limit, 5);
    assert_eq!(query.conditions.soil_type, "Black");
    assert!((query.conditions.temperature - 30.5).abs() < f64::EPSILON);
    assert!(query.validate().is_ok());
}

#[rstest]
fn crop_details_request_requires_name() {
    let json = r#"{
        "temperature": 25, "humidity": 60, "moisture": 45,
        "soil_type": "loamy", "nitrogen": 50, "phosphorous": 40,
        "potassium": 45
    }"#;
    let result: Result<CropDetailsQuery, _> = serde_json::from_str(json);
    assert!(result.is_err(), "crop_name is required");
}

#[rstest]
fn food_request_defaults_limit_and_rejects_zero() {
    let json = r#"{ "age": 30, "bmi": 21.5, "condition": "none", "diet": "vegetarian" }"#;
    let query: FoodQuery = serde_json::from_str(json).expect("valid request");
    assert_eq!(query.limit, 4);
    assert_eq!(query.with_limit(0).validate(), Err(QueryError::ZeroLimit));
}

#[rstest]
fn food_details_request_rejects_blank_name() {
    let json = r#"{
        "food_name": "   ", "age": 45, "bmi": 27.0,
        "condition": "hypertension", "diet": "non-vegetarian"
    }"#;
    let query: FoodDetailsQuery = serde_json::from_str(json).expect("well-formed request");
    assert_eq!(
        query.validate(),
        Err(QueryError::Blank { field: "food_name" })
    );
}

#[rstest]
fn negative_age_fails_to_decode() {
    let json = r#"{ "age": -1, "bmi": 21.5, "condition": "none", "diet": "vegetarian" }"#;
    let result: Result<FoodQuery, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn table_collects_from_iterator() {
    let table: CropTable = ["Wheat", "Paddy"]
        .into_iter()
        .map(|name| CropRecord {
            temperature: 25.0,
            humidity: 50.0,
            moisture: 40.0,
            soil_type: "Loamy".into(),
            nitrogen: 10.0,
            phosphorous: 10.0,
            potassium: 10.0,
            crop_type: name.into(),
        })
        .collect();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.crops().last().map(|row| row.crop_type.as_str()),
        Some("Paddy")
    );
}
