//! Display data for the landing page. Embedded at build time, never mutated.

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../../content/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Production {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub genre: String,
    pub duration: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub quote: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Achievement {
    pub number: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Academy,
    Auditions,
    Events,
    Careers,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub link: String,
    pub icon: ServiceIcon,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub productions: Vec<Production>,
    pub testimonials: Vec<Testimonial>,
    pub achievements: Vec<Achievement>,
    pub services: Vec<Service>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }
}
