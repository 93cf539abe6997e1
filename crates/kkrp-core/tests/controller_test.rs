#![allow(clippy::unwrap_used)]
// Integration tests for `ClimateController` against a mocked unit.

use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use kkrp_api::DeviceClient;
use kkrp_core::{ClimateController, DeviceConfig, FanMode, HvacMode, SwingMode};

// ── Helpers ─────────────────────────────────────────────────────────

fn status_body(fields: &[&str]) -> String {
    let mut body = fields.join(".\r\n");
    body.push_str(".\r\n");
    body
}

fn feed_on() -> String {
    status_body(&[
        "OK", "ON", "COOL", "24", "F2", "UD", "21,5", "OFF", "RC", "NONE",
        "0", "Living room", "COOL.0.22.0.F3", "0", "28,0", "40", "0", "0", "0",
    ])
}

fn feed_off() -> String {
    status_body(&[
        "OK", "OFF", "NONE", "NONE", "NONE", "OFF", "19,0", "OFF", "RC", "NONE",
        "0", "Living room", "HEAT.0.23.0.F4", "0", "12,5", "55", "0", "0", "0",
    ])
}

// Same shape as `feed_off` but with an unparsable prior-values bundle.
fn feed_with_garbage_prior_values() -> String {
    status_body(&[
        "OK", "OFF", "NONE", "NONE", "NONE", "OFF", "19,0", "OFF", "RC", "NONE",
        "0", "Living room", "garbage", "0", "12,5", "55", "0", "0", "0",
    ])
}

fn controller_for(server: &MockServer) -> ClimateController {
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = DeviceClient::with_client(reqwest::Client::new(), base_url);
    ClimateController::with_client(client, DeviceConfig::default())
}

async fn serve_feed(server: &MockServer, feed: String) {
    Mock::given(method("GET"))
        .and(path("/param.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .mount(server)
        .await;
}

// One-shot variant; the next mounted feed takes over afterwards.
async fn serve_feed_once(server: &MockServer, feed: String) {
    Mock::given(method("GET"))
        .and(path("/param.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

async fn setup(feed: String) -> (MockServer, ClimateController) {
    let server = MockServer::start().await;
    serve_feed(&server, feed).await;
    let controller = controller_for(&server);
    (server, controller)
}

fn post_to_root() -> MockBuilder {
    Mock::given(method("POST")).and(path("/"))
}

// ── Hydration ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_poll_hydrates_once() {
    let (server, mut controller) = setup(feed_on()).await;
    assert!(!controller.is_hydrated());

    let state = controller.poll().await.unwrap();
    assert!(controller.is_hydrated());
    assert_eq!(state.hvac_mode, HvacMode::Cool);
    assert_eq!(state.target_temperature, 24);
    assert_eq!(state.fan_mode, FanMode::Level2);
    assert_eq!(state.swing_mode, SwingMode::On);
    assert!((state.current_temperature - 21.5).abs() < f64::EPSILON);

    // Send a command, then poll again: the remembered options must win
    // over whatever the feed still reports.
    post_to_root()
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    controller.set_temperature(27.0).await.unwrap();

    let state = controller.poll().await.unwrap();
    assert_eq!(state.target_temperature, 27);
}

#[tokio::test]
async fn test_hydration_waits_for_parsable_feed() {
    let server = MockServer::start().await;
    serve_feed_once(&server, feed_with_garbage_prior_values()).await;
    serve_feed(&server, feed_off()).await;
    let mut controller = controller_for(&server);

    // The first poll cannot seed the option set, so it must fail whole
    // rather than bake unreplaced NONE tokens into the remembered state.
    assert!(controller.poll().await.is_err());
    assert!(!controller.is_hydrated());

    // Once the feed recovers, hydration proceeds and the remembered fan
    // token comes from the prior-values bundle as usual.
    controller.poll().await.unwrap();
    assert!(controller.is_hydrated());

    post_to_root()
        .and(body_string_contains("wiON=On"))
        .and(body_string_contains("wiMODE=Heat"))
        .and(body_string_contains("wiFUN=Fun4"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let state = controller.set_hvac_mode(HvacMode::Heat).await.unwrap();
    assert_eq!(state.hvac_mode, HvacMode::Heat);
    assert_eq!(state.fan_mode, FanMode::Level4);
}

#[tokio::test]
async fn test_poll_after_hydration_tolerates_bad_fields() {
    let server = MockServer::start().await;
    serve_feed_once(&server, feed_off()).await;
    serve_feed(&server, feed_with_garbage_prior_values()).await;
    let mut controller = controller_for(&server);

    controller.poll().await.unwrap();

    // A later poll with an unreadable prior-values bundle keeps the last
    // known fallback instead of failing.
    let state = controller.poll().await.unwrap();
    assert_eq!(state.target_temperature, 23);
    assert_eq!(state.fan_mode, FanMode::Level4);
}

#[tokio::test]
async fn test_powered_off_reports_prior_values() {
    let (_server, mut controller) = setup(feed_off()).await;

    let state = controller.poll().await.unwrap();
    assert_eq!(state.hvac_mode, HvacMode::Off);
    assert_eq!(state.target_temperature, 23);
    assert_eq!(state.fan_mode, FanMode::Level4);
    assert_eq!(state.swing_mode, SwingMode::Off);
}

// ── Power gating ────────────────────────────────────────────────────

#[tokio::test]
async fn test_setters_noop_while_off() {
    let (server, mut controller) = setup(feed_off()).await;
    controller.poll().await.unwrap();

    // Zero POSTs expected for the whole test.
    post_to_root()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = controller.set_temperature(25.0).await.unwrap();
    assert_eq!(state.target_temperature, 23);
    let state = controller.set_fan_mode(FanMode::Level1).await.unwrap();
    assert_eq!(state.fan_mode, FanMode::Level4);
    let state = controller.set_swing_mode(SwingMode::On).await.unwrap();
    assert_eq!(state.swing_mode, SwingMode::Off);
}

#[tokio::test]
async fn test_set_hvac_mode_works_while_off() {
    let (server, mut controller) = setup(feed_off()).await;
    controller.poll().await.unwrap();

    post_to_root()
        .and(body_string_contains("wiON=On"))
        .and(body_string_contains("wiMODE=Heat"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let state = controller.set_hvac_mode(HvacMode::Heat).await.unwrap();
    assert_eq!(state.hvac_mode, HvacMode::Heat);
}

// ── Wire vocabulary ─────────────────────────────────────────────────

#[tokio::test]
async fn test_set_hvac_mode_off_sends_power_off() {
    let (server, mut controller) = setup(feed_on()).await;
    controller.poll().await.unwrap();

    post_to_root()
        .and(body_string_contains("wiON=Off"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let state = controller.set_hvac_mode(HvacMode::Off).await.unwrap();
    assert_eq!(state.hvac_mode, HvacMode::Off);
}

#[tokio::test]
async fn test_fan_command_uses_fun_vocabulary() {
    let (server, mut controller) = setup(feed_on()).await;
    controller.poll().await.unwrap();

    post_to_root()
        .and(body_string_contains("wiFUN=Fun3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let state = controller.set_fan_mode(FanMode::Level3).await.unwrap();
    assert_eq!(state.fan_mode, FanMode::Level3);
}

// ── Bounds & errors ─────────────────────────────────────────────────

#[tokio::test]
async fn test_temperature_is_truncated_to_whole_degrees() {
    let (server, mut controller) = setup(feed_on()).await;
    controller.poll().await.unwrap();

    post_to_root()
        .and(body_string_contains("wiTEMP=26"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let state = controller.set_temperature(26.7).await.unwrap();
    assert_eq!(state.target_temperature, 26);
}

#[tokio::test]
async fn test_temperature_bounds() {
    let (server, mut controller) = setup(feed_on()).await;
    controller.poll().await.unwrap();

    post_to_root()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(controller.set_temperature(17.0).await.is_err());
    assert!(controller.set_temperature(31.0).await.is_err());
}

#[tokio::test]
async fn test_failed_send_leaves_optimistic_state() {
    let (server, mut controller) = setup(feed_on()).await;
    controller.poll().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(controller.set_temperature(28.0).await.is_err());

    // The merge happened before the failed send; the remembered state
    // stays diverged until the owner intervenes.
    let state = controller.state().unwrap();
    assert_eq!(state.target_temperature, 28);
}

#[tokio::test]
async fn test_setters_before_poll_fail() {
    let (_server, mut controller) = setup(feed_on()).await;
    assert!(controller.set_temperature(20.0).await.is_err());
    assert!(controller.state().is_err());
}
