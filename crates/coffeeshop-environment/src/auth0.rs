//! Auth0 URLs derived from [`Auth0Settings`]
//!
//! The frontend logs in with the implicit flow: it sends the browser to the
//! tenant's `/authorize` endpoint and reads the access token back out of the
//! redirect URL fragment.

use crate::constants::AUTH0_HOST_SUFFIX;
use crate::environment::Auth0Settings;
use crate::error::{EnvironmentError, Result};
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

impl Auth0Settings {
    /// Tenant host, e.g. `jchenapp.auth0.com`
    pub fn domain(&self) -> String {
        format!("{}.{}", self.url, AUTH0_HOST_SUFFIX)
    }

    /// Expected `iss` claim of tokens issued for this tenant
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain())
    }

    pub fn authorize_url(&self) -> Result<Url> {
        self.tenant_url("authorize")
    }

    /// Location of the tenant's signing keys
    pub fn jwks_url(&self) -> Result<Url> {
        self.tenant_url(".well-known/jwks.json")
    }

    /// Build the link that starts an implicit-flow login.
    ///
    /// `callback_path` is appended verbatim to the configured callback URL to
    /// form the `redirect_uri`.
    pub fn login_link(&self, callback_path: &str) -> Result<Url> {
        let authorize = self.authorize_url()?;
        let redirect_uri = format!("{}{}", self.callback_url, callback_path);

        let mut link = authorize;
        link.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &redirect_uri);

        debug!(domain = %self.domain(), redirect_uri = %redirect_uri, "Built Auth0 login link");
        Ok(link)
    }

    /// Extract the access token from the URL Auth0 redirected back to.
    ///
    /// Returns `None` when the URL cannot be parsed, has no fragment, or the
    /// fragment carries no non-empty `access_token`.
    pub fn access_token_from_redirect(&self, redirect_url: &str) -> Option<String> {
        let url = match Url::parse(redirect_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Failed to parse Auth0 redirect URL");
                return None;
            }
        };

        let fragment = url.fragment()?;
        form_urlencoded::parse(fragment.as_bytes())
            .find(|(key, _)| key == "access_token")
            .map(|(_, value)| value.into_owned())
            .filter(|token| !token.is_empty())
    }

    fn tenant_url(&self, path: &str) -> Result<Url> {
        let raw = format!("https://{}/{}", self.domain(), path);
        Url::parse(&raw).map_err(|e| EnvironmentError::invalid_url("auth0.url", raw.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use crate::environment::Environment;
    use std::borrow::Cow;

    fn settings() -> super::Auth0Settings {
        Environment::compiled().auth0
    }

    #[test]
    fn test_tenant_urls() {
        let auth0 = settings();
        assert_eq!(auth0.domain(), "jchenapp.auth0.com");
        assert_eq!(auth0.issuer(), "https://jchenapp.auth0.com/");
        assert_eq!(
            auth0.authorize_url().unwrap().as_str(),
            "https://jchenapp.auth0.com/authorize"
        );
        assert_eq!(
            auth0.jwks_url().unwrap().as_str(),
            "https://jchenapp.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_login_link_parameters() {
        let link = settings().login_link("/tabs/user-page").unwrap();
        assert_eq!(link.host_str(), Some("jchenapp.auth0.com"));
        assert_eq!(link.path(), "/authorize");

        let pairs: Vec<(String, String)> = link.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("audience".to_string(), "http://127.0.0.1:5000".to_string()),
                ("response_type".to_string(), "token".to_string()),
                (
                    "client_id".to_string(),
                    "wn0YTywP7nzyoW4RDJ8koCc71on9Dfhg".to_string()
                ),
                (
                    "redirect_uri".to_string(),
                    "http://localhost:8100/tabs/user-page".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_login_link_encodes_redirect() {
        let link = settings().login_link("").unwrap();
        let query = link.query().unwrap();
        assert!(query.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8100"));
    }

    #[test]
    fn test_invalid_tenant_prefix() {
        let mut auth0 = settings();
        auth0.url = Cow::Borrowed("bad host");
        assert!(auth0.authorize_url().is_err());
        assert!(auth0.login_link("").is_err());
    }

    #[test]
    fn test_access_token_from_redirect() {
        let auth0 = settings();

        let token = auth0.access_token_from_redirect(
            "http://localhost:8100/tabs/user-page#access_token=abc.def.ghi&expires_in=7200&token_type=Bearer",
        );
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));

        // No fragment
        assert_eq!(auth0.access_token_from_redirect("http://localhost:8100/"), None);

        // Fragment without a token
        assert_eq!(
            auth0.access_token_from_redirect("http://localhost:8100/#error=access_denied"),
            None
        );

        // Empty token
        assert_eq!(
            auth0.access_token_from_redirect("http://localhost:8100/#access_token="),
            None
        );

        // Unparseable URL
        assert_eq!(auth0.access_token_from_redirect("::not a url::"), None);
    }
}
