//! Integration tests for parking, lookups and clearing slots.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_park_allocates_nearest_slot() {
    let app = helpers::TestApp::with_slots(3).await;

    let response = app
        .request(
            "POST",
            "/parking/park",
            Some(json!({ "car_reg_no": "KA-01-HH-1234", "car_color": "red" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body, json!({ "allocated_slot_number": 1 }));

    assert_eq!(app.park("KA-01-HH-9999", "blue").await, 2);
}

#[tokio::test]
async fn test_freed_slot_is_reused_before_higher_slots() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01", "red").await;
    app.park("KA-02", "red").await;
    app.park("KA-03", "red").await;
    app.request(
        "PATCH",
        "/parking/parking_lot",
        Some(json!({ "increment_slot": 1 })),
    )
    .await;

    let cleared = app
        .request("POST", "/parking/clear", Some(json!({ "slot_number": 1 })))
        .await;
    assert_eq!(cleared.body, json!({ "freed_slot_number": 1 }));

    assert_eq!(app.park("KA-04", "red").await, 1);
    assert_eq!(app.park("KA-05", "red").await, 4);
}

#[tokio::test]
async fn test_park_same_car_twice() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;

    let response = app
        .request(
            "POST",
            "/parking/park",
            Some(json!({ "car_reg_no": "KA-01-HH-1234", "car_color": "red" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Car already parked");

    let summary = app.request("GET", "/parking/summary", None).await;
    assert_eq!(summary.body["occupied"], 1);
}

#[tokio::test]
async fn test_park_into_full_lot() {
    let app = helpers::TestApp::with_slots(2).await;
    app.park("KA-01", "red").await;
    app.park("KA-02", "blue").await;

    let response = app
        .request(
            "POST",
            "/parking/park",
            Some(json!({ "car_reg_no": "JKL012", "car_color": "Yellow" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Parking lot is full");
    assert_eq!(response.error_code(), "LOT_FULL");
}

#[tokio::test]
async fn test_park_requires_registration_and_color() {
    let app = helpers::TestApp::with_slots(3).await;

    for body in [
        json!({ "car_reg_no": "", "car_color": "red" }),
        json!({ "car_reg_no": "KA-01-HH-1234", "car_color": "" }),
        json!({ "car_color": "red" }),
        json!({}),
    ] {
        let response = app.request("POST", "/parking/park", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.message(),
            "Car registration number and color are required"
        );
    }
}

#[tokio::test]
async fn test_registration_numbers_by_color() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "Red").await;
    app.park("KA-01-HH-7777", "blue").await;
    app.park("KA-01-HH-9999", "red").await;

    let response = app
        .request("GET", "/parking/registration_numbers/red", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["KA-01-HH-1234", "KA-01-HH-9999"]));

    let response = app
        .request("GET", "/parking/registration_numbers/Blue", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["KA-01-HH-7777"]));
}

#[tokio::test]
async fn test_slot_numbers_by_color() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;
    app.park("KA-01-HH-9999", "RED").await;

    let response = app.request("GET", "/parking/slot_numbers/red", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!(["1", "2"]));
}

#[tokio::test]
async fn test_color_queries_with_no_match() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;

    let response = app
        .request("GET", "/parking/registration_numbers/Blue", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No cars found with color Blue");

    let response = app.request("GET", "/parking/slot_numbers/Blue", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No slots found with cars of color Blue");
}

#[tokio::test]
async fn test_slot_by_registration() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;

    let response = app
        .request("GET", "/parking/slots/KA-01-HH-1234", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "slot_number": 1 }));

    let response = app
        .request("GET", "/parking/slots/KA-01-HH-9999", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.message(),
        "Car with registration number KA-01-HH-9999 not found"
    );
}

#[tokio::test]
async fn test_clear_by_slot_number() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;

    let response = app
        .request("POST", "/parking/clear", Some(json!({ "slot_number": 1 })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "freed_slot_number": 1 }));

    let response = app
        .request("POST", "/parking/clear", Some(json!({ "slot_number": 1 })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Slot number 1 is already empty");
}

#[tokio::test]
async fn test_clear_by_registration_number() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01-HH-1234", "red").await;

    let response = app
        .request(
            "POST",
            "/parking/clear",
            Some(json!({ "car_registration_no": "KA-01-HH-1234" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "freed_slot_number": 1 }));

    let response = app
        .request(
            "POST",
            "/parking/clear",
            Some(json!({ "car_registration_no": "KA-01-HH-1234" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.message(),
        "Car with registration number KA-01-HH-1234 not found"
    );
}

#[tokio::test]
async fn test_clear_prefers_slot_number() {
    let app = helpers::TestApp::with_slots(3).await;
    app.park("KA-01", "red").await;
    app.park("KA-02", "red").await;

    let response = app
        .request(
            "POST",
            "/parking/clear",
            Some(json!({ "slot_number": 2, "car_registration_no": "KA-01" })),
        )
        .await;
    assert_eq!(response.body, json!({ "freed_slot_number": 2 }));

    let lookup = app.request("GET", "/parking/slots/KA-01", None).await;
    assert_eq!(lookup.body, json!({ "slot_number": 1 }));
}

#[tokio::test]
async fn test_clear_unknown_slot() {
    let app = helpers::TestApp::with_slots(3).await;

    let response = app
        .request("POST", "/parking/clear", Some(json!({ "slot_number": 999 })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Slot number 999 not found");
}

#[tokio::test]
async fn test_clear_without_identifier() {
    let app = helpers::TestApp::with_slots(3).await;

    for body in [json!({}), json!({ "car_registration_no": "" })] {
        let response = app.request("POST", "/parking/clear", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.message(),
            "Either slot number or car registration number is required"
        );
    }
}

#[tokio::test]
async fn test_status() {
    let app = helpers::TestApp::with_slots(3).await;

    let response = app.request("GET", "/parking/status", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "No cars are currently parked");

    app.park("KA-01-HH-1234", "red").await;
    let response = app.request("GET", "/parking/status", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{ "slot_no": 1, "registration_no": "KA-01-HH-1234", "color": "red" }])
    );
}

#[tokio::test]
async fn test_full_scenario() {
    let app = helpers::TestApp::with_slots(3).await;

    assert_eq!(app.park("KA-01", "red").await, 1);
    assert_eq!(app.park("KA-02", "blue").await, 2);
    assert_eq!(app.park("KA-03", "red").await, 3);

    let full = app
        .request(
            "POST",
            "/parking/park",
            Some(json!({ "car_reg_no": "KA-04", "car_color": "green" })),
        )
        .await;
    assert_eq!(full.status, StatusCode::BAD_REQUEST);
    assert_eq!(full.message(), "Parking lot is full");

    let reds = app
        .request("GET", "/parking/registration_numbers/red", None)
        .await;
    assert_eq!(reds.body, json!(["KA-01", "KA-03"]));

    let cleared = app
        .request("POST", "/parking/clear", Some(json!({ "slot_number": 2 })))
        .await;
    assert_eq!(cleared.body, json!({ "freed_slot_number": 2 }));

    let status = app.request("GET", "/parking/status", None).await;
    assert_eq!(
        status.body,
        json!([
            { "slot_no": 1, "registration_no": "KA-01", "color": "red" },
            { "slot_no": 3, "registration_no": "KA-03", "color": "red" },
        ])
    );
}
