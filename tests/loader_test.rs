//! Loader integration tests
//!
//! Exercise the two-phase load (collection page + detail fan-out) against a
//! mock HTTP server: field mapping, order preservation, the all-or-nothing
//! failure barrier, and cancellation.

use dexgrid::{filter_cards, DexGridError, LoadConfig, PokedexLoader, PokemonCard};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loader_for(server: &MockServer, limit: usize) -> PokedexLoader {
    PokedexLoader::new().with_config(LoadConfig {
        limit,
        base_url: server.uri(),
    })
}

async fn mount_listing(server: &MockServer, entries: &[(&str, u32)]) {
    let results: Vec<_> = entries
        .iter()
        .map(|(name, id)| {
            json!({
                "name": name,
                "url": format!("{}/pokemon/{}/", server.uri(), id)
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, id: u32, name: &str, sprite: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{}/", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "name": name,
            "sprites": { "front_default": sprite }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_assembles_cards_in_collection_order() {
    let server = MockServer::start().await;
    // Collection order is authoritative, not id order
    mount_listing(&server, &[("pikachu", 25), ("bulbasaur", 1), ("mew", 151)]).await;
    mount_detail(&server, 25, "pikachu", Some("pikachu.png")).await;
    mount_detail(&server, 1, "bulbasaur", Some("bulbasaur.png")).await;
    mount_detail(&server, 151, "mew", None).await;

    let cards = loader_for(&server, 20).load().await.unwrap();

    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![25, 1, 151]
    );
    assert_eq!(cards[0].image_url.as_deref(), Some("pikachu.png"));
    assert!(cards[2].image_url.is_none());
}

#[tokio::test]
async fn bulbasaur_scenario() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("bulbasaur", 1)]).await;
    mount_detail(&server, 1, "bulbasaur", Some("img.png")).await;

    let cards = loader_for(&server, 20).load().await.unwrap();

    assert_eq!(
        cards,
        vec![PokemonCard {
            id: 1,
            name: "bulbasaur".to_string(),
            image_url: Some("img.png".to_string()),
        }]
    );

    // Visible list derivations over the canonical list
    assert_eq!(filter_cards(&cards, "bulba"), cards);
    assert!(filter_cards(&cards, "char").is_empty());
    assert_eq!(filter_cards(&cards, ""), cards);
}

#[tokio::test]
async fn limit_is_forwarded_to_the_collection_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let cards = loader_for(&server, 5).load().await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn collection_failure_fails_the_load() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = loader_for(&server, 20).load().await.unwrap_err();
    assert!(matches!(err, DexGridError::BadStatus { .. }));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn one_failed_detail_fails_the_whole_load() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("bulbasaur", 1), ("ivysaur", 2), ("venusaur", 3)]).await;
    mount_detail(&server, 1, "bulbasaur", Some("1.png")).await;
    mount_detail(&server, 3, "venusaur", Some("3.png")).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/2/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // All-or-nothing: no partial two-card result
    let err = loader_for(&server, 20).load().await.unwrap_err();
    assert!(matches!(err, DexGridError::BadStatus { .. }));
}

#[tokio::test]
async fn malformed_detail_payload_fails_the_load() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("bulbasaur", 1)]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = loader_for(&server, 20).load().await.unwrap_err();
    assert!(matches!(err, DexGridError::MalformedPayload { .. }));
}

#[tokio::test]
async fn cancelled_load_never_publishes() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("bulbasaur", 1)]).await;
    mount_detail(&server, 1, "bulbasaur", Some("img.png")).await;

    let loader = loader_for(&server, 20);
    loader.cancel();

    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, DexGridError::Cancelled));
}

#[test]
fn load_blocking_runs_without_an_ambient_runtime() {
    // Build the server on a scratch runtime, then drive the load from
    // plain blocking code the way the CLI and the TUI thread do.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();

    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        mount_listing(&server, &[("bulbasaur", 1)]).await;
        mount_detail(&server, 1, "bulbasaur", Some("img.png")).await;
        server
    });

    let cards = loader_for(&server, 20).load_blocking().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "bulbasaur");

    drop(server);
    drop(runtime);
}
