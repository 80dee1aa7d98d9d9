//! The environment configuration record
//!
//! [`Environment`] mirrors the settings object the frontend bundle reads:
//! the API server it talks to and the Auth0 parameters used to log in.
//! Values come from [`crate::constants`] and never change while the process
//! runs.

use crate::constants;
use crate::endpoints::ApiRequest;
use crate::error::{EnvironmentError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;
use url::Url;

/// Environment configuration for one deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    /// Deployment mode flag
    pub production: bool,

    /// Base URL of the backend API server
    pub api_server_url: Cow<'static, str>,

    /// Identity provider settings
    pub auth0: Auth0Settings,
}

/// Auth0 settings for the frontend application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Auth0Settings {
    /// Auth0 domain prefix
    pub url: Cow<'static, str>,

    /// Audience set for the Auth0 API
    pub audience: Cow<'static, str>,

    /// Client ID generated for the Auth0 application
    #[serde(rename = "clientId")]
    pub client_id: Cow<'static, str>,

    /// Redirect target after login
    #[serde(rename = "callbackURL")]
    pub callback_url: Cow<'static, str>,
}

impl Environment {
    /// Build the record from the compiled-in constants
    pub const fn compiled() -> Self {
        Self {
            production: constants::PRODUCTION,
            api_server_url: Cow::Borrowed(constants::API_SERVER_URL),
            auth0: Auth0Settings {
                url: Cow::Borrowed(constants::AUTH0_URL),
                audience: Cow::Borrowed(constants::AUTH0_AUDIENCE),
                client_id: Cow::Borrowed(constants::AUTH0_CLIENT_ID),
                callback_url: Cow::Borrowed(constants::AUTH0_CALLBACK_URL),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Full URL for a backend request.
    ///
    /// Trailing slashes on the server URL are dropped; a path prefix such as
    /// `https://host/api` is kept.
    pub fn api_url(&self, request: &ApiRequest) -> Result<Url> {
        let base = self.api_server_url.trim_end_matches('/');
        let raw = format!("{}{}", base, request.path());
        let url = Url::parse(&raw)
            .map_err(|e| EnvironmentError::invalid_url("apiServerUrl", raw.clone(), e))?;

        debug!(method = %request.method(), url = %url, "Built API request URL");
        Ok(url)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::compiled()
    }
}
