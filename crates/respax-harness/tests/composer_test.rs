//! End-to-end composer tests against a mock Axum server

use axum::extract::Json;
use axum::routing::post;
use axum::Router;
use chrono::NaiveDate;
use respax_client::RespaxClient;
use respax_core::pax::PassengerCounts;
use respax_core::types::{Ticket, Transfers};
use respax_harness::{FormState, ReservationComposer};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;

async fn start_test_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    addr
}

fn booking_routes() -> Router {
    Router::new()
        .route(
            "/read-price-range.json",
            post(|| async {
                Json(json!({
                    "prices": [{
                        "tour_code": "CNRCITY",
                        "tour_date": "2026-08-24",
                        "basis_id": 144,
                        "subbasis_id": 206,
                        "time_id": 149,
                        "adult_tour_sell": 100.0,
                        "child_tour_sell": 50.0,
                        "infant_tour_sell": 0.0,
                        "foc_tour_sell": 0.0,
                        "non_per_pax_sell": 10.0,
                        "payment_option": "comm-agent/bal-pob",
                        "currency_code": "AUD",
                        "currency_symbol": "$"
                    }]
                }))
            }),
        )
        .route(
            "/read-extras-SALES-CNRCITY-144-206-149.json",
            post(|| async {
                Json(json!({
                    "extras": [{
                        "group": 1,
                        "name": "Lunch",
                        "extra_id": 42,
                        "basis_id": 144,
                        "time_id": 149,
                        "code": "LNCH",
                        "offset": 0.0,
                        "conditions": "",
                        "subbasis_id": 206,
                        "allow_udef1": true,
                        "allow_foc": false,
                        "allow_adult": true,
                        "allow_infant": false,
                        "allow_child": true
                    }]
                }))
            }),
        )
}

fn sample_ticket() -> Ticket {
    Ticket {
        tour_code: "CNRCITY".to_string(),
        basis_id: "144".to_string(),
        subbasis_id: "206".to_string(),
        tour_time_id: "149".to_string(),
        tour_date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
        promo_code: None,
        passengers: vec![],
        transfers: Transfers::default(),
    }
}

fn composer() -> ReservationComposer {
    ReservationComposer::new("SALES", sample_ticket(), "comm-agent/bal-pob")
}

#[tokio::test]
async fn refresh_loads_price_and_extras_and_prices_the_booking() {
    let addr = start_test_server(booking_routes()).await;
    let client = RespaxClient::new(format!("http://{}", addr), "u", "p");

    let mut composer = composer();
    composer.refresh(&client).await;

    assert_eq!(composer.extras().len(), 1);
    assert_eq!(composer.extras()[0].name, "Lunch");

    composer.set_counts(PassengerCounts::new(2, 1, 1));
    assert_eq!(composer.total_price(), 260.0);

    let breakdown = composer.price_breakdown().unwrap();
    assert_eq!(breakdown.total, 260.0);
    assert_eq!(breakdown.currency_symbol, "$");
}

#[tokio::test]
async fn refresh_failure_is_swallowed_and_keeps_previous_data() {
    let addr = start_test_server(booking_routes()).await;
    let client = RespaxClient::new(format!("http://{}", addr), "u", "p");

    let mut composer = composer();
    composer.refresh(&client).await;
    assert!(composer.price().is_some());

    // A server with no booking routes fails both fetches with 404
    let empty_addr = start_test_server(Router::new()).await;
    let failing_client = RespaxClient::new(format!("http://{}", empty_addr), "u", "p");
    composer.refresh(&failing_client).await;

    assert!(composer.price().is_some());
    assert_eq!(composer.extras().len(), 1);
    assert_eq!(*composer.state(), FormState::Idle);
}

#[tokio::test]
async fn submit_success_builds_wire_passengers() {
    let app = booking_routes().route(
        "/write-reservation-SALES.json",
        post(|Json(body): Json<Value>| async move {
            let passengers = body["tickets"][0]["passengers"].as_array().unwrap();
            assert_eq!(passengers.len(), 3);
            assert_eq!(passengers[0]["type"], 1);
            assert_eq!(passengers[1]["type"], 1);
            assert_eq!(passengers[2]["type"], 3);
            Json(json!({"ticket_ids": [7001, 7002, 7003], "root_id": 9001}))
        }),
    );
    let addr = start_test_server(app).await;
    let client = RespaxClient::new(format!("http://{}", addr), "u", "p");

    let mut composer = composer();
    composer.set_counts(PassengerCounts::new(2, 1, 0));
    for (i, name) in ["Jane", "John", "Timmy"].iter().enumerate() {
        let detail = composer.detail_mut(i).unwrap();
        detail.first_name = name.to_string();
        detail.last_name = "Doe".to_string();
    }

    composer.submit(&client).await;

    let response = composer.state().success().unwrap();
    assert_eq!(response.ticket_ids, vec![7001, 7002, 7003]);
    assert_eq!(response.root_id, 9001);
}

#[tokio::test]
async fn submit_failure_keeps_entered_data_for_resubmission() {
    let app = Router::new().route(
        "/write-reservation-SALES.json",
        post(|| async { Json(json!({"error": true, "error_message": "Sold out"})) }),
    );
    let addr = start_test_server(app).await;
    let client = RespaxClient::new(format!("http://{}", addr), "u", "p");

    let mut composer = composer();
    composer.set_counts(PassengerCounts::new(2, 0, 0));
    composer.detail_mut(0).unwrap().first_name = "Jane".to_string();
    composer.detail_mut(1).unwrap().first_name = "John".to_string();

    composer.submit(&client).await;

    assert_eq!(composer.state().error_message(), Some("Sold out"));
    assert_eq!(composer.details().len(), 2);
    assert_eq!(composer.details()[0].first_name, "Jane");
    assert_eq!(composer.details()[1].first_name, "John");
    assert_eq!(composer.counts(), PassengerCounts::new(2, 0, 0));
}
