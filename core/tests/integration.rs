//! Full CRUD lifecycle against the live mock server.
//!
//! Starts the mock server on a random port and drives every `HeroClient`
//! operation over real HTTP through `ReqwestTransport`, checking both the
//! returned values and the message log.

use std::sync::Arc;

use hero_client::{Ack, Hero, HeroClient, MessageService, NewHero, ReqwestTransport};

async fn spawn_backend(heroes: Vec<mock_server::Hero>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with(listener, heroes));
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> (HeroClient<ReqwestTransport, Arc<MessageService>>, Arc<MessageService>) {
    let messages = Arc::new(MessageService::new());
    let client = HeroClient::new(ReqwestTransport::new(base_url), Arc::clone(&messages));
    (client, messages)
}

#[tokio::test]
async fn crud_lifecycle() {
    let base_url = spawn_backend(Vec::new()).await;
    let (client, messages) = client_for(&base_url);

    // Step 1: list, should be empty.
    assert!(client.list_heroes().await.is_empty());

    // Step 2: add a hero; the server assigns the id.
    let created = client.add_hero(&NewHero::new("Windstorm")).await.unwrap();
    assert_eq!(created.name, "Windstorm");
    let id = created.id;
    assert_eq!(id, mock_server::FIRST_ID);

    // Step 3: get the created hero.
    assert_eq!(client.get_hero(id).await, Some(created.clone()));

    // Step 4: rename it.
    let renamed = Hero {
        id,
        name: "Gale".to_string(),
    };
    assert_eq!(client.update_hero(&renamed).await, Some(Ack));
    assert_eq!(client.get_hero(id).await, Some(renamed.clone()));

    // Step 5: search by partial name.
    assert_eq!(client.search_heroes("gal").await, vec![renamed.clone()]);
    assert!(client.search_heroes("   ").await.is_empty());

    // Step 6: delete by record.
    assert_eq!(client.delete_hero(&renamed).await, Some(Ack));

    // Step 7: get after delete falls back to None.
    assert_eq!(client.get_hero(id).await, None);

    // Step 8: delete by id again falls back to None.
    assert_eq!(client.delete_hero(id).await, None);

    // Step 9: list, empty again.
    assert!(client.list_heroes().await.is_empty());

    assert_eq!(
        messages.messages(),
        vec![
            "Hero Service: fetched heroes".to_string(),
            format!("Hero Service: added hero Windstorm with id = {id}"),
            format!("Hero Service: fetched hero id = {id}"),
            format!("Hero Service: updated hero id = {id}"),
            format!("Hero Service: fetched hero id = {id}"),
            "Hero Service: Found heroes matching: gal".to_string(),
            format!("Hero Service: hero deleted id = {id}"),
            format!("Hero Service: getHero id = {id} failed: resource not found"),
            "Hero Service: deleteHero failed: resource not found".to_string(),
            "Hero Service: fetched heroes".to_string(),
        ]
    );
}

#[tokio::test]
async fn search_against_seeded_backend() {
    let base_url = spawn_backend(mock_server::seed_heroes()).await;
    let (client, _messages) = client_for(&base_url);

    let names: Vec<String> = client
        .search_heroes("ma")
        .await
        .into_iter()
        .map(|hero| hero.name)
        .collect();
    assert_eq!(names, vec!["Magneta", "RubberMan", "Dynama", "Magma"]);
}

#[tokio::test]
async fn concurrent_operations_share_one_client() {
    let base_url = spawn_backend(mock_server::seed_heroes()).await;
    let (client, messages) = client_for(&base_url);

    let (all, one, found) = tokio::join!(
        client.list_heroes(),
        client.get_hero(12),
        client.search_heroes("dr"),
    );

    assert_eq!(all.len(), mock_server::seed_heroes().len());
    assert_eq!(one.map(|hero| hero.name), Some("Bombasto".to_string()));
    assert_eq!(found.len(), 2);
    assert_eq!(messages.len(), 3);
}
