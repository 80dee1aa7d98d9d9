//! Environment values compiled into the binary
//!
//! Edit these before building so they match your deployment. The
//! `production` cargo feature flips [`PRODUCTION`]; every other value is
//! taken as written.

/// Whether this build targets a production deployment
pub const PRODUCTION: bool = cfg!(feature = "production");

/// Base URL of the running Flask API server
pub const API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant prefix, expanded to `{prefix}.auth0.com`
pub const AUTH0_URL: &str = "jchenapp";

/// Audience configured for the Auth0 API
pub const AUTH0_AUDIENCE: &str = "http://127.0.0.1:5000";

/// Client ID generated for the Auth0 application
pub const AUTH0_CLIENT_ID: &str = "wn0YTywP7nzyoW4RDJ8koCc71on9Dfhg";

/// Base URL of the running Ionic application, used as the login redirect
pub const AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

/// Host suffix appended to [`AUTH0_URL`]
pub const AUTH0_HOST_SUFFIX: &str = "auth0.com";
