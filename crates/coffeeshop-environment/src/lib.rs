//! Coffee Shop frontend environment
//!
//! Build-time settings for one deployment of the Coffee Shop frontend: the
//! Flask API server it calls and the Auth0 tenant it logs in against.
//! Values are edited in [`constants`] before building and stay fixed for
//! the life of the process.
//!
//! ```
//! let env = coffeeshop_environment::environment();
//! assert_eq!(env.api_server_url, "http://127.0.0.1:5000");
//! assert_eq!(env.auth0.client_id, "wn0YTywP7nzyoW4RDJ8koCc71on9Dfhg");
//! ```

pub mod auth0;
pub mod constants;
pub mod endpoints;
pub mod environment;
pub mod error;

pub use endpoints::{ApiRequest, Permission, UnknownPermission};
pub use environment::{Auth0Settings, Environment};
pub use error::{EnvironmentError, Result};

use once_cell::sync::Lazy;
use tracing::debug;

static ENVIRONMENT: Lazy<Environment> = Lazy::new(|| {
    let env = Environment::compiled();
    debug!(
        production = env.production,
        api_server_url = %env.api_server_url,
        auth0_domain = %env.auth0.domain(),
        "Loaded environment"
    );
    env
});

/// The process-wide environment, initialized on first access
pub fn environment() -> &'static Environment {
    &ENVIRONMENT
}
