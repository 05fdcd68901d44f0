//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A hero as stored by the backend. The `id` is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Request payload for creating a hero. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Acknowledgement for update and delete. The body, if any, is only
/// checked to be JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ack;

/// The id a delete targets, taken from a bare id or from a hero record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroRef(pub u32);

impl HeroRef {
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for HeroRef {
    fn from(id: u32) -> Self {
        HeroRef(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef(hero.id)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef(hero.id)
    }
}
