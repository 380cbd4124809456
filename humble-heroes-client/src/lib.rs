//! # humble-heroes-client
//!
//! Client for the Humble Superheroes REST API: one collection endpoint that
//! lists superheroes on `GET` and creates one on `POST`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use humble_heroes_client::{ClientConfig, NewSuperhero, RestSuperheroApi, SuperheroApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::with_endpoint("http://localhost:5000/api/superheroes");
//!     let api = RestSuperheroApi::new(&config)?;
//!
//!     api.create_superhero(&NewSuperhero::new("Modesto", "invisibility", 7))
//!         .await?;
//!
//!     for hero in api.list_superheroes().await? {
//!         println!("{} / {} / {}", hero.name, hero.superpower, hero.humility_score);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError). Any non-2xx
//! answer is [`ClientError::HttpStatus`]; a body that is not the expected JSON is
//! [`ClientError::ParseError`]. Requests are sent once unless
//! [`ClientConfig::max_retries`] is set.

mod config;
mod error;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

pub use config::{
    ClientConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use error::{ClientError, Result};
pub use http_client::HttpUtils;
pub use rest::RestSuperheroApi;
pub use traits::{SuperheroApi, operation};
pub use types::{MAX_HUMILITY_SCORE, MIN_HUMILITY_SCORE, NewSuperhero, Superhero};
pub use utils::log_sanitizer;
