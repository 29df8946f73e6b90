//! End-to-end tests for deep link handling.
//!
//! These tests follow a link through the paths the app takes: a QR payload is
//! generated, scanned back, classified, and routed to a screen.

use eventshare_links::{
    build_event_url, build_join_url, parse_deep_link, parse_web_path, route_for, DeepLinkIntent,
    EventCode, LinkConfig, Platform, QrPayload, Route,
};
use serde_json::json;

const EVENT_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

#[test]
fn scanned_web_join_link() {
    let intent = parse_deep_link("https://eventshare.app/join/AB12CD").unwrap();
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"type": "event_join", "eventCode": "AB12CD"})
    );
}

#[test]
fn scanned_app_event_link() {
    let intent = parse_deep_link(&format!("eventshare://event/{EVENT_ID}")).unwrap();
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"type": "event_view", "eventId": EVENT_ID})
    );
}

#[test]
fn typed_code_is_normalized() {
    let intent = parse_deep_link("ab12cd").unwrap();
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"type": "event_join", "eventCode": "AB12CD"})
    );
}

#[test]
fn garbage_is_not_a_link() {
    assert_eq!(parse_deep_link("not a real link"), None);
    assert_eq!(parse_deep_link(""), None);
    assert_eq!(parse_deep_link(&String::from_utf8_lossy(&[0xff, 0xfe, 0x00, 0x9f])), None);
}

#[test]
fn generated_code_survives_qr_round_trip() {
    let code = EventCode::generate();

    for platform in [Platform::Web, Platform::App] {
        let payload = build_join_url(code.as_str(), platform).unwrap();
        let intent = parse_deep_link(&payload).unwrap();
        assert_eq!(
            route_for(&intent),
            Some(Route::JoinEvent {
                event_code: code.clone()
            })
        );
    }
}

#[test]
fn event_qr_code_routes_to_join_screen() {
    let code = EventCode::generate();
    let qr = QrPayload::new(&LinkConfig::default(), EVENT_ID, code.as_str(), "Graduation", "Selin").unwrap();

    let scanned: QrPayload = serde_json::from_str(&serde_json::to_string(&qr).unwrap()).unwrap();
    assert_eq!(scanned, qr);

    for link in [&scanned.web_url, &scanned.deep_link] {
        let intent = parse_deep_link(link).unwrap();
        assert_eq!(
            route_for(&intent),
            Some(Route::JoinEvent {
                event_code: code.clone()
            })
        );
    }
}

#[test]
fn link_with_trailing_parameters_still_joins() {
    let intent = parse_deep_link("https://eventshare.app/join/AB12CD&utm_source=poster").unwrap();
    assert_eq!(
        serde_json::to_value(&intent).unwrap(),
        json!({"type": "event_join", "eventCode": "AB12CD"})
    );
}

#[test]
fn shared_event_link_routes_to_detail() {
    let payload = build_event_url(EVENT_ID, Platform::Web).unwrap();
    let intent = parse_deep_link(&payload).unwrap();
    assert_eq!(
        route_for(&intent),
        Some(Route::EventDetail {
            event_id: EVENT_ID.to_string()
        })
    );
}

#[test]
fn web_location_and_full_url_agree() {
    let from_path = parse_web_path("/join/ab12cd").unwrap();
    let from_url = parse_deep_link("https://eventshare.app/join/ab12cd").unwrap();
    assert_eq!(from_path, from_url);

    let from_path = parse_web_path(&format!("/event/{EVENT_ID}")).unwrap();
    assert_eq!(from_path, DeepLinkIntent::view(EVENT_ID));
}

#[tokio::test]
async fn parsing_is_safe_across_tasks() {
    let inputs = [
        "https://eventshare.app/join/AB12CD",
        "eventshare://event/abc-123",
        "ab12cd",
        "nonsense",
    ];

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let input = inputs[i % inputs.len()];
            tokio::spawn(async move { (input, parse_deep_link(input)) })
        })
        .collect();

    for handle in handles {
        let (input, intent) = handle.await.unwrap();
        assert_eq!(intent, parse_deep_link(input));
    }
}
