//! Screen scenarios from fetch to render instructions.

use std::sync::Arc;
use std::time::Duration;

use client_frontend_core::{
    DisplayConfig, ScreenController, SortMode, UiState, WeightCategory,
};
use player_data::{
    FetchResult, InventoryItem, JsonBinConfig, JsonBinSource, Metadata, MockPlayerDataSource,
    PlayerRecord, Position,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn player(name: &str, inventory: Vec<InventoryItem>, created_at: &str) -> FetchResult {
    FetchResult::Success {
        record: PlayerRecord {
            name: name.to_string(),
            level: 5,
            health: 75.0,
            position: Position::new(10.0, 0.0, -4.5),
            inventory,
        },
        metadata: Metadata {
            id: "6686a992e41b4d34e40d06fa".to_string(),
            is_private: false,
            created_at: created_at.to_string(),
            name: "player".to_string(),
        },
    }
}

fn sword_and_potion() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("Sword", 1, 7.5),
        InventoryItem::new("Potion", 3, 0.5),
    ]
}

async fn loaded_controller(result: FetchResult) -> ScreenController {
    let source = MockPlayerDataSource::with_result(result);
    let mut controller = ScreenController::new(Arc::new(source));
    controller.start();
    controller.apply_next_completion().await.unwrap();
    controller
}

/// Serve one canned HTTP response on a local port and return the bin URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/v3/b/test-bin")
}

fn http_controller(url: String) -> ScreenController {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let source = JsonBinSource::with_client(JsonBinConfig::new(url), client);
    ScreenController::new(Arc::new(source))
}

#[tokio::test]
async fn unsorted_rows_carry_weight_categories() {
    let controller = loaded_controller(player(
        "Aria",
        sword_and_potion(),
        "2024-07-04T14:30:00.000Z",
    ))
    .await;
    let screen = controller.instructions();

    assert_eq!(controller.ui_state(), &UiState::Loaded);
    assert_eq!(screen.item_names(), ["Sword", "Potion"]);
    assert_eq!(
        screen.categories(),
        [WeightCategory::Heavy, WeightCategory::Light]
    );
    let labels: Vec<String> = screen
        .categories()
        .iter()
        .map(|category| category.to_string())
        .collect();
    assert_eq!(labels, ["heavy", "light"]);
}

#[tokio::test]
async fn quantity_sort_puts_potion_first() {
    let mut controller = loaded_controller(player(
        "Aria",
        sword_and_potion(),
        "2024-07-04T14:30:00.000Z",
    ))
    .await;

    let screen = controller.on_sort_changed(SortMode::ByQuantityDesc).unwrap();

    assert_eq!(screen.item_names(), ["Potion", "Sword"]);
    assert_eq!(screen.inventory_rows[0].quantity_label, "Qty: 3");
    assert_eq!(controller.current_inventory(), sword_and_potion().as_slice());
}

#[tokio::test]
async fn http_404_shows_error() {
    let url = serve_once("404 Not Found", r#"{"message":"Bin not found"}"#).await;
    let mut controller = http_controller(url);

    let loading = controller.start();
    assert!(loading.loading_visible);

    let screen = controller.apply_next_completion().await.unwrap();

    assert!(matches!(controller.ui_state(), UiState::Error(message) if message.contains("404")));
    assert!(screen.error_visible);
    assert!(!screen.loading_visible);
    assert!(screen.error_message.contains("404"));
}

#[tokio::test]
async fn null_record_shows_empty_result_error() {
    let body = r#"{"record":null,"metadata":{"id":"x","private":false,"createdAt":"2024-07-04T14:30:00Z","name":"player"}}"#;
    let url = serve_once("200 OK", body).await;
    let mut controller = http_controller(url);

    controller.start();
    let screen = controller.apply_next_completion().await.unwrap();

    assert_eq!(
        controller.ui_state(),
        &UiState::Error("parse returned empty result".to_string())
    );
    assert!(screen.error_visible);
    assert!(!screen.loading_visible);
    assert!(screen.inventory_rows.is_empty());
}

#[tokio::test]
async fn bad_timestamp_only_affects_created_label() {
    let controller = loaded_controller(player("Aria", sword_and_potion(), "not-a-date")).await;
    let screen = controller.instructions();

    assert_eq!(controller.ui_state(), &UiState::Loaded);
    assert!(!screen.error_visible);
    assert_eq!(screen.player_name, "Aria");
    assert_eq!(screen.level, 5);
    assert_eq!(screen.health_label, "Health: 75%");
    assert_eq!(screen.health_percent, 0.75);
    assert_eq!(screen.position_label, "Position: (10, 0, -4.5)");
    assert_eq!(screen.inventory_rows.len(), 2);
    assert_eq!(screen.created_at_label, "Created: unknown");
}

#[tokio::test]
async fn placeholder_is_configurable() {
    let source = MockPlayerDataSource::with_result(player("Aria", vec![], "garbage"));
    let display = DisplayConfig {
        timestamp_placeholder: "--".to_string(),
        ..DisplayConfig::default()
    };
    let mut controller = ScreenController::new(Arc::new(source)).with_display(display);

    controller.start();
    let screen = controller.apply_next_completion().await.unwrap();

    assert_eq!(screen.created_at_label, "Created: --");
}

#[tokio::test]
async fn successful_refresh_resets_sort_mode() {
    let source = MockPlayerDataSource::new();
    source.push(player("Aria", sword_and_potion(), "2024-07-04T14:30:00Z"));
    source.push(player("Aria", sword_and_potion(), "2024-07-04T14:30:00Z"));
    let mut controller = ScreenController::new(Arc::new(source));

    controller.start();
    controller.apply_next_completion().await.unwrap();
    controller.on_sort_changed(SortMode::ByWeightDesc).unwrap();

    controller.refresh();
    let screen = controller.apply_next_completion().await.unwrap();

    assert_eq!(controller.sort_mode(), SortMode::Unsorted);
    assert_eq!(screen.sort_mode, SortMode::Unsorted);
    assert_eq!(screen.item_names(), ["Sword", "Potion"]);
}

#[tokio::test]
async fn failed_refresh_keeps_sorted_view() {
    let source = MockPlayerDataSource::new();
    source.push(player("Aria", sword_and_potion(), "2024-07-04T14:30:00Z"));
    source.push(FetchResult::failure("HTTP request failed: timed out"));
    let mut controller = ScreenController::new(Arc::new(source));

    controller.start();
    controller.apply_next_completion().await.unwrap();
    controller.on_sort_changed(SortMode::ByName).unwrap();

    controller.refresh();
    let screen = controller.apply_next_completion().await.unwrap();

    assert!(screen.error_visible);
    assert_eq!(screen.sort_mode, SortMode::ByName);
    assert_eq!(screen.item_names(), ["Potion", "Sword"]);
}

#[tokio::test(start_paused = true)]
async fn last_completion_wins() {
    let source = MockPlayerDataSource::new();
    // First request is slow, second is fast: the stale one lands last.
    source.push_delayed(
        player("Stale", vec![], "2024-07-04T14:30:00Z"),
        Duration::from_secs(5),
    );
    source.push_delayed(
        player("Fresh", vec![], "2024-07-04T14:30:00Z"),
        Duration::from_secs(1),
    );
    let mut controller = ScreenController::new(Arc::new(source.clone()));

    controller.start();
    controller.refresh();

    let first = controller.apply_next_completion().await.unwrap();
    assert_eq!(first.player_name, "Fresh");

    let second = controller.apply_next_completion().await.unwrap();
    assert_eq!(second.player_name, "Stale");
    assert_eq!(controller.instructions().player_name, "Stale");
    assert_eq!(source.calls(), 2);
}
