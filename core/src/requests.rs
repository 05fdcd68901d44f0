//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Nothing here performs I/O; `HeroClient` puts a `Transport` between the
//! two halves.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Ack, Hero, NewHero};

/// Resource path every request is built against.
pub const HEROES_URL: &str = "api/heroes";

#[derive(Debug, Clone, Copy, Default)]
pub struct HeroRequests;

impl HeroRequests {
    pub fn new() -> Self {
        Self
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        get(HEROES_URL.to_string())
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        get(format!("{HEROES_URL}/{id}"))
    }

    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, HEROES_URL.to_string(), hero)
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, HEROES_URL.to_string(), hero)
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{HEROES_URL}/{id}"),
            headers: json_headers(),
            body: None,
        }
    }

    /// The term is interpolated as given, without percent-encoding.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        get(format!("{HEROES_URL}/?name={term}"))
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        parse_json(response)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<Ack, ApiError> {
        parse_ack(response)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        parse_json(response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn with_json<B: Serialize>(method: HttpMethod, path: String, body: &B) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: json_headers(),
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// An empty body acks; anything else must at least be valid JSON.
fn parse_ack(response: HttpResponse) -> Result<Ack, ApiError> {
    check_status(&response)?;
    if response.body.trim().is_empty() {
        return Ok(Ack);
    }
    serde_json::from_str::<serde_json::Value>(&response.body)
        .map(|_| Ack)
        .map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
