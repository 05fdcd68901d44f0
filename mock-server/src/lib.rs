use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// First id handed out when the collection is empty.
pub const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateHero {
    pub id: Option<u32>,
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// The roster the binary starts with.
pub fn seed_heroes() -> Vec<Hero> {
    [
        (11, "Dr. Nice"),
        (12, "Bombasto"),
        (13, "Celeritas"),
        (14, "Magneta"),
        (15, "RubberMan"),
        (16, "Dynama"),
        (17, "Dr. IQ"),
        (18, "Magma"),
        (19, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(create_hero).put(update_hero),
        )
        .route("/api/heroes/", get(list_heroes))
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, heroes: Vec<Hero>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(heroes)).await
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let found: Vec<Hero> = match params.name.as_deref() {
        Some(term) => {
            let needle = term.to_lowercase();
            heroes
                .values()
                .filter(|hero| hero.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => heroes.values().cloned().collect(),
    };
    tracing::debug!(count = found.len(), filter = ?params.name, "listed heroes");
    Json(found)
}

/// 409 when an explicit id is taken, 500 once the id space is exhausted.
async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<CreateHero>,
) -> Result<(StatusCode, Json<Hero>), StatusCode> {
    let mut heroes = db.write().await;
    let id = match input.id {
        Some(id) if heroes.contains_key(&id) => return Err(StatusCode::CONFLICT),
        Some(id) => id,
        None => next_id(&heroes).ok_or_else(|| {
            tracing::warn!("hero ids exhausted");
            StatusCode::INTERNAL_SERVER_ERROR
        })?,
    };
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(hero.id, hero.clone());
    tracing::info!(id = hero.id, name = %hero.name, "created hero");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(State(db): State<Db>, Json(input): Json<Hero>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.get_mut(&input.id) {
        Some(hero) => {
            hero.name = input.name;
            tracing::info!(id = input.id, "updated hero");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => {
            tracing::info!(id, "deleted hero");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

fn next_id(heroes: &BTreeMap<u32, Hero>) -> Option<u32> {
    match heroes.keys().next_back() {
        Some(max) => max.checked_add(1),
        None => Some(FIRST_ID),
    }
}
