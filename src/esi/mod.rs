//! Thin client for the external ESI-compatible game data service.
//!
//! Each endpoint group gets a small accessor struct wrapping one HTTP call and
//! one response shape. The engine only consumes the handful of unauthenticated
//! entity and market endpoints it needs; nothing here retries or caches. The
//! directory and price services own those policies.

pub mod alliance;
pub mod character;
pub mod corporation;
pub mod market;
pub mod universe;

use serde::de::DeserializeOwned;

use crate::error::esi::EsiError;

/// HTTP client for the game data service.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Starts building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Character endpoints.
    pub fn character(&self) -> character::CharacterApi<'_> {
        character::CharacterApi { client: self }
    }

    /// Corporation endpoints.
    pub fn corporation(&self) -> corporation::CorporationApi<'_> {
        corporation::CorporationApi { client: self }
    }

    /// Alliance endpoints.
    pub fn alliance(&self) -> alliance::AllianceApi<'_> {
        alliance::AllianceApi { client: self }
    }

    /// Universe endpoints (types, systems, constellations, regions).
    pub fn universe(&self) -> universe::UniverseApi<'_> {
        universe::UniverseApi { client: self }
    }

    /// Market endpoints.
    pub fn market(&self) -> market::MarketApi<'_> {
        market::MarketApi { client: self }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, EsiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(EsiError::Status {
                status: response.status(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

/// Builder for [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Base URL of the service, without a trailing slash.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    /// User agent sent with every request.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client, EsiError> {
        let mut builder = reqwest::Client::builder();

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Client {
            http: builder.build()?,
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://esi.evetech.net/latest".to_string()),
        })
    }
}
