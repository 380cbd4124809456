//! reqwest implementation of [`SuperheroApi`]

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{SuperheroApi, operation};
use crate::types::{NewSuperhero, Superhero};

/// Superhero API over JSON/HTTP
pub struct RestSuperheroApi {
    client: Client,
    endpoint: Url,
    max_retries: u32,
}

impl RestSuperheroApi {
    /// Build a client from `config`, validating the endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                field: "http_client".to_string(),
                detail: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            max_retries: config.max_retries,
        })
    }

    /// The collection endpoint requests go to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SuperheroApi for RestSuperheroApi {
    async fn list_superheroes(&self) -> Result<Vec<Superhero>> {
        let request = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json");

        let text = HttpUtils::execute_request_with_retry(
            request,
            operation::LIST,
            "GET",
            self.endpoint.as_str(),
            self.max_retries,
        )
        .await?;

        let heroes: Vec<Superhero> = HttpUtils::parse_json(&text, operation::LIST)?;
        log::info!("[{}] Fetched {} superheroes", operation::LIST, heroes.len());
        Ok(heroes)
    }

    async fn create_superhero(&self, hero: &NewSuperhero) -> Result<()> {
        let body = serde_json::to_vec(hero).map_err(|e| ClientError::SerializationError {
            operation: operation::CREATE.to_string(),
            detail: e.to_string(),
        })?;

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        HttpUtils::execute_request_with_retry(
            request,
            operation::CREATE,
            "POST",
            self.endpoint.as_str(),
            self.max_retries,
        )
        .await?;

        log::info!("[{}] Created superhero '{}'", operation::CREATE, hero.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_endpoint() {
        let config = ClientConfig::with_endpoint("mailto:hero@example.com");
        assert!(matches!(
            RestSuperheroApi::new(&config),
            Err(ClientError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn keeps_endpoint_path() {
        let config = ClientConfig::with_endpoint("http://localhost:5000/api/superheroes");
        let api = RestSuperheroApi::new(&config);
        assert_eq!(
            api.ok().map(|a| a.endpoint().path().to_string()).as_deref(),
            Some("/api/superheroes")
        );
    }
}
