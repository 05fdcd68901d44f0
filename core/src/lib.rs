//! Async data-access client for the heroes API.
//!
//! # Overview
//! `HeroClient` turns six operations (list, get, update, add, delete,
//! search) into HTTP calls against `api/heroes` and never surfaces an error:
//! failures are logged and replaced by an empty list or `None`.
//!
//! # Design
//! - `HeroRequests` builds `HttpRequest` values and parses `HttpResponse`
//!   values without I/O (host-does-IO), so it can be tested as plain data.
//! - `Transport` executes the round-trip; `ReqwestTransport` is the stock
//!   implementation.
//! - `MessageLog` receives the user-facing log lines; `MessageService` keeps
//!   them in memory. Raw failures go to `tracing`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod messages;
pub mod requests;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use messages::{MessageLog, MessageService};
pub use requests::{HeroRequests, HEROES_URL};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Ack, Hero, HeroRef, NewHero};
