mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::Value;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register_merchant(app: &TestApp, email: &str) -> i64 {
    let res = app
        .post_form(
            "/merchants/register",
            &[
                ("fullName", "Listing Merchant"),
                ("email", email),
                ("phone", "0700111222"),
                ("idNumber", "11223344"),
                ("password", "secret"),
                ("companyName", "Listing Events Ltd"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["data"]["id"].as_i64().unwrap()
}

async fn create_event_on(app: &TestApp, organizer_id: i64, title: &str, event_date: &str) -> i64 {
    let organizer = organizer_id.to_string();
    let res = app
        .post_form(
            "/events",
            &[
                ("organizerId", organizer.as_str()),
                ("venueName", "City Hall"),
                ("title", title),
                ("description", "x"),
                ("category", "music"),
                ("eventDate", event_date),
                ("standardPrice", "5000"),
                ("vipPrice", "15000"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["data"]["eventId"].as_i64().unwrap()
}

async fn set_status(app: &TestApp, event_id: i64, event_date: &str, status: &str) {
    let event = event_id.to_string();
    let res = app
        .post_form(
            "/events/update",
            &[
                ("eventId", event.as_str()),
                ("title", "Retitled"),
                ("description", "x"),
                ("category", "music"),
                ("eventDate", event_date),
                ("standardPrice", "5000"),
                ("vipPrice", "15000"),
                ("status", status),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
}

fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).format("%Y-%m-%d %H:%M:%S").to_string()
}

#[tokio::test]
async fn test_public_listing_filters_past_and_unpublished() {
    let app = TestApp::new().await;
    let merchant_id = register_merchant(&app, "list1@events.co.ke").await;

    create_event_on(&app, merchant_id, "Upcoming Show", &days_from_now(10)).await;
    create_event_on(&app, merchant_id, "Bygone Show", &days_from_now(-10)).await;
    let draft_id = create_event_on(&app, merchant_id, "Hidden Show", &days_from_now(10)).await;
    set_status(&app, draft_id, &days_from_now(10), "draft").await;

    let res = app.get("/events").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    // Listings carry no message.
    assert!(body.get("message").is_none());

    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "Upcoming Show");
}

#[tokio::test]
async fn test_public_listing_shape_and_order() {
    let app = TestApp::new().await;
    let merchant_id = register_merchant(&app, "list2@events.co.ke").await;

    create_event_on(&app, merchant_id, "Far Show", &days_from_now(30)).await;
    create_event_on(&app, merchant_id, "Near Show", &days_from_now(5)).await;

    let res = app.get("/events").await;
    let body = parse_body(res).await;
    let events = body["data"].as_array().unwrap();

    // Soonest first.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "Near Show");
    assert_eq!(events[1]["title"], "Far Show");

    let event = &events[0];
    assert_eq!(event["venue_name"], "City Hall");
    assert_eq!(event["city"], "Nairobi");
    assert_eq!(event["standard_price"], 5000.0);
    assert_eq!(event["standard_price_formatted"], "KSh 5,000");
    assert_eq!(event["vip_price_formatted"], "KSh 15,000");
    assert_eq!(event["available_tickets"], 2);

    let expected_date = (Utc::now() + Duration::days(5)).format("%b %d, %Y").to_string();
    assert_eq!(event["event_date_formatted"], expected_date);
}

#[tokio::test]
async fn test_public_listing_counts_sold_out_types() {
    let app = TestApp::new().await;
    let merchant_id = register_merchant(&app, "list3@events.co.ke").await;
    let event_id = create_event_on(&app, merchant_id, "Hot Show", &days_from_now(5)).await;

    // Buy out every vip seat.
    let event = event_id.to_string();
    let res = app
        .post_form(
            "/bookings",
            &[
                ("eventId", event.as_str()),
                ("fullName", "Whale Buyer"),
                ("email", "whale@mail.com"),
                ("phone", "0744000000"),
                ("idNumber", "10101010"),
                ("vipQty", "100"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get("/events").await;
    let body = parse_body(res).await;
    let events = body["data"].as_array().unwrap();
    assert_eq!(events[0]["available_tickets"], 1);
}

#[tokio::test]
async fn test_merchant_listing_includes_sales_stats() {
    let app = TestApp::new().await;
    let merchant_id = register_merchant(&app, "dash@events.co.ke").await;
    let other_id = register_merchant(&app, "other@events.co.ke").await;

    let first_id = create_event_on(&app, merchant_id, "First Created", &days_from_now(10)).await;
    let draft_id = create_event_on(&app, merchant_id, "Draft Event", &days_from_now(20)).await;
    set_status(&app, draft_id, &days_from_now(20), "draft").await;
    create_event_on(&app, other_id, "Someone Elses", &days_from_now(10)).await;

    let event = first_id.to_string();
    let res = app
        .post_form(
            "/bookings",
            &[
                ("eventId", event.as_str()),
                ("fullName", "Repeat Buyer"),
                ("email", "repeat@mail.com"),
                ("phone", "0755000000"),
                ("idNumber", "20202020"),
                ("standardQty", "2"),
                ("vipQty", "1"),
            ],
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get(&format!("/merchant-events?merchantId={merchant_id}")).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert!(body.get("message").is_none());

    let events = body["data"].as_array().unwrap();
    // Drafts included, other merchants excluded, newest created first.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["title"], "Retitled");
    assert_eq!(events[1]["title"], "First Created");

    let sold = &events[1];
    assert_eq!(sold["tickets_sold"], 3);
    assert_eq!(sold["revenue"], 15000.0);
    assert_eq!(sold["views"], 0);
    assert_eq!(sold["venue_name"], "City Hall");

    let unsold = &events[0];
    assert_eq!(unsold["tickets_sold"], 0);
    assert_eq!(unsold["revenue"], 0.0);
}

#[tokio::test]
async fn test_merchant_listing_missing_param() {
    let app = TestApp::new().await;

    let res = app.get("/merchant-events").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["message"], "Missing merchantId parameter");

    let res = app.get("/merchant-events?merchantId=").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(res).await["message"], "Missing merchantId parameter");
}

#[tokio::test]
async fn test_merchant_listing_unknown_merchant_is_empty() {
    let app = TestApp::new().await;

    let res = app.get("/merchant-events?merchantId=4242").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
