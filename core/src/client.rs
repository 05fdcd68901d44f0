//! Data-access client for the heroes API.
//!
//! # Design
//! `HeroClient` pairs the stateless `HeroRequests` builder with an injected
//! `Transport` and `MessageLog`. Every operation is an `async fn`, so no
//! request goes out until the returned future is polled, and calling the
//! operation again issues a fresh request.
//!
//! Operations never fail. Any error is traced at `error` level, reported to
//! the message log as `"<operation> failed: <message>"`, and replaced by the
//! operation's fallback (an empty list or `None`). Callers therefore cannot
//! tell an empty result from a failed request.

use std::fmt::Display;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::messages::MessageLog;
use crate::requests::HeroRequests;
use crate::transport::Transport;
use crate::types::{Ack, Hero, HeroRef, NewHero};

const LOG_PREFIX: &str = "Hero Service";

#[derive(Debug, Clone)]
pub struct HeroClient<T, L> {
    requests: HeroRequests,
    transport: T,
    messages: L,
}

impl<T: Transport, L: MessageLog> HeroClient<T, L> {
    pub fn new(transport: T, messages: L) -> Self {
        Self {
            requests: HeroRequests::new(),
            transport,
            messages,
        }
    }

    pub async fn list_heroes(&self) -> Vec<Hero> {
        let request = self.requests.build_list_heroes();
        match self.round_trip(Ok(request), HeroRequests::parse_list_heroes).await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.handle_error("listHeroes", err, Vec::new()),
        }
    }

    pub async fn get_hero(&self, id: u32) -> Option<Hero> {
        let request = self.requests.build_get_hero(id);
        match self.round_trip(Ok(request), HeroRequests::parse_get_hero).await {
            Ok(hero) => {
                self.log(format!("fetched hero id = {id}"));
                Some(hero)
            }
            Err(err) => self.handle_error(&format!("getHero id = {id}"), err, None),
        }
    }

    pub async fn update_hero(&self, hero: &Hero) -> Option<Ack> {
        let request = self.requests.build_update_hero(hero);
        match self.round_trip(request, HeroRequests::parse_update_hero).await {
            Ok(ack) => {
                self.log(format!("updated hero id = {}", hero.id));
                Some(ack)
            }
            Err(err) => self.handle_error(&format!("updateHero id = {}", hero.id), err, None),
        }
    }

    /// The returned hero is the server's response as-is, carrying the
    /// assigned id.
    pub async fn add_hero(&self, hero: &NewHero) -> Option<Hero> {
        let request = self.requests.build_add_hero(hero);
        match self.round_trip(request, HeroRequests::parse_add_hero).await {
            Ok(created) => {
                self.log(format!("added hero {} with id = {}", created.name, created.id));
                Some(created)
            }
            Err(err) => self.handle_error("addHero", err, None),
        }
    }

    /// Accepts a bare id, a `Hero`, or a `&Hero`.
    pub async fn delete_hero(&self, hero: impl Into<HeroRef>) -> Option<Ack> {
        let id = hero.into().id();
        let request = self.requests.build_delete_hero(id);
        match self.round_trip(Ok(request), HeroRequests::parse_delete_hero).await {
            Ok(ack) => {
                self.log(format!("hero deleted id = {id}"));
                Some(ack)
            }
            Err(err) => self.handle_error("deleteHero", err, None),
        }
    }

    /// A blank term returns an empty list without a request or a log line.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.requests.build_search_heroes(term);
        match self.round_trip(Ok(request), HeroRequests::parse_search_heroes).await {
            Ok(heroes) => {
                self.log(format!("Found heroes matching: {term}"));
                heroes
            }
            Err(err) => self.handle_error(&format!("searchHeroes term = {term}"), err, Vec::new()),
        }
    }

    async fn round_trip<R>(
        &self,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&HeroRequests, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let request = request?;
        tracing::debug!(method = %request.method, path = %request.path, "sending hero request");
        let response = self.transport.send(request).await?;
        parse(&self.requests, response)
    }

    fn log(&self, message: impl Display) {
        self.messages.add(format!("{LOG_PREFIX}: {message}"));
    }

    fn handle_error<R>(&self, operation: &str, error: ApiError, fallback: R) -> R {
        tracing::error!(operation, error = ?error, "hero request failed");
        self.log(format!("{operation} failed: {error}"));
        fallback
    }
}
