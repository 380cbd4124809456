use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewSuperhero, Superhero};

/// Operation names used in logs and [`ClientError`](crate::ClientError) values.
pub mod operation {
    pub const LIST: &str = "list";
    pub const CREATE: &str = "create";
}

/// Superhero collection API
///
/// Implementations:
/// - [`RestSuperheroApi`](crate::RestSuperheroApi): JSON over HTTP via reqwest
/// - test mocks in `humble-heroes-core`
#[async_trait]
pub trait SuperheroApi: Send + Sync {
    /// Fetch the whole collection, in server order.
    async fn list_superheroes(&self) -> Result<Vec<Superhero>>;

    /// Create one superhero. The response body is not interpreted.
    ///
    /// # Arguments
    /// * `hero` - fields of the new record; the server assigns the id
    async fn create_superhero(&self, hero: &NewSuperhero) -> Result<()>;
}
