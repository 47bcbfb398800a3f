//! Client against a live router backed by mock data.

use std::sync::Arc;

use catalog::{NewVlog, Vlog};
use chrono::{TimeZone, Utc};
use reqwest::Client;
use server::{config::Config, mock::MockStore, router, state::State};
use tokio::net::TcpListener;
use vlogsphere::{
    api::CatalogClient,
    interactions::InteractionStore,
    page::Page,
    reaction::{Action, ReactionState},
    storage::MemoryStorage,
    sync::SyncClient,
};

async fn spawn_server(vlogs: Vec<Vlog>) -> String {
    let config = Config {
        port: 0,
        redis_url: String::new(),
        mock_data: None,
    };
    let app = router(State::with_store(config, Arc::new(MockStore::new(vlogs))));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{address}/api")
}

fn seeded() -> Vec<Vlog> {
    vec![Vlog {
        id: "lake".to_string(),
        title: "Lake swim at dawn".to_string(),
        description: "Cold water, warm coffee".to_string(),
        video_url: "https://www.youtube.com/embed/lake".to_string(),
        category: "Travel".to_string(),
        creator_name: "Ines".to_string(),
        likes: 3,
        dislikes: 1,
        created_at: Utc.with_ymd_and_hms(2024, 8, 1, 6, 0, 0).unwrap(),
    }]
}

#[tokio::test]
async fn test_press_reaches_server_counters() {
    let api_url = spawn_server(seeded()).await;
    let http = Client::new();
    let catalog = CatalogClient::new(http.clone(), &api_url);

    let mut page = Page::new(
        InteractionStore::load(MemoryStorage::default()),
        SyncClient::new(http, &api_url),
    );
    page.load(catalog.fetch_vlogs().await.unwrap());

    let outcome = page.press("lake", Action::PressLike).await.unwrap();
    assert!(outcome.synced);
    assert_eq!((outcome.vlog.likes, outcome.vlog.dislikes), (4, 1));

    let outcome = page.press("lake", Action::PressDislike).await.unwrap();
    assert!(outcome.synced);
    assert_eq!(page.reaction("lake"), ReactionState::Disliked);

    let server_side = &catalog.fetch_vlogs().await.unwrap()[0];
    assert_eq!((server_side.likes, server_side.dislikes), (3, 2));
}

#[tokio::test]
async fn test_id_with_url_characters_reaches_server() {
    let mut vlogs = seeded();
    vlogs[0].id = "trip#1/day?2".to_string();

    let api_url = spawn_server(vlogs).await;
    let http = Client::new();
    let catalog = CatalogClient::new(http.clone(), &api_url);

    let mut page = Page::new(
        InteractionStore::load(MemoryStorage::default()),
        SyncClient::new(http, &api_url),
    );
    page.load(catalog.fetch_vlogs().await.unwrap());

    let outcome = page.press("trip#1/day?2", Action::PressLike).await.unwrap();
    assert!(outcome.synced);

    let server_side = &catalog.fetch_vlogs().await.unwrap()[0];
    assert_eq!(server_side.likes, 4);
}

#[tokio::test]
async fn test_deleted_vlog_is_local_only() {
    let api_url = spawn_server(Vec::new()).await;
    let http = Client::new();

    let mut page = Page::new(
        InteractionStore::load(MemoryStorage::default()),
        SyncClient::new(http, &api_url),
    );
    page.load(seeded());

    let outcome = page.press("lake", Action::PressLike).await.unwrap();

    assert!(!outcome.synced);
    assert_eq!(outcome.vlog.likes, 4);
    assert_eq!(page.reaction("lake"), ReactionState::Liked);
}

#[tokio::test]
async fn test_created_vlog_is_listed() {
    let api_url = spawn_server(seeded()).await;
    let catalog = CatalogClient::new(Client::new(), &api_url);

    let created = catalog
        .create_vlog(NewVlog {
            creator_name: "Ines".to_string(),
            title: "Second swim, colder".to_string(),
            description: "The lake froze at the edges".to_string(),
            video_url: "https://www.youtube.com/embed/lake-2".to_string(),
            category: "Travel".to_string(),
            upload_date: None,
        })
        .await
        .unwrap();

    assert_eq!((created.likes, created.dislikes), (0, 0));

    let listed = catalog.fetch_vlogs().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, created.id);
}
