//! Authentication provider settings

use coffeeshop_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Path the front end lands on after a successful login
pub const DEFAULT_CALLBACK_PATH: &str = "/tabs/user-page";

/// Auth0 registration of the front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSettings {
    /// Auth0 tenant prefix, expanded to `https://{domain_prefix}.auth0.com/`
    #[serde(deserialize_with = "crate::de::trimmed_string")]
    pub domain_prefix: String,

    /// Audience set for the Auth0 API
    #[serde(deserialize_with = "crate::de::trimmed_string")]
    pub audience: String,

    /// Client ID generated for the Auth0 application
    #[serde(deserialize_with = "crate::de::trimmed_string")]
    pub client_id: String,

    /// Base URL of the running front end, registered with Auth0 as a callback
    #[serde(deserialize_with = "crate::de::trimmed_string")]
    pub callback_url: String,
}

impl AuthSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.issuer()?;

        required("auth.audience", &self.audience)?;
        required("auth.client_id", &self.client_id)?;
        parse_absolute_url("auth.callback_url", &self.callback_url)?;

        Ok(())
    }

    /// Token issuer of the tenant
    ///
    /// The prefix may only hold hostname characters, so it can never move the
    /// issuer off `*.auth0.com` through a query, fragment or userinfo part.
    pub fn issuer(&self) -> Result<Url, ConfigurationError> {
        let prefix = required("auth.domain_prefix", &self.domain_prefix)?;
        let hostname_only = prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !hostname_only || prefix.starts_with('.') || prefix.ends_with('.') {
            return Err(ConfigurationError::invalid(
                "auth.domain_prefix",
                prefix,
                "expected a bare tenant prefix such as 'mytenant.us' (letters, digits, '.' and '-')",
            ));
        }

        let expected_host = format!("{prefix}.auth0.com").to_ascii_lowercase();
        let issuer = Url::parse(&format!("https://{expected_host}/"))
            .map_err(|e| ConfigurationError::invalid("auth.domain_prefix", prefix, e.to_string()))?;
        if issuer.host_str() != Some(expected_host.as_str())
            || issuer.query().is_some()
            || issuer.fragment().is_some()
        {
            return Err(ConfigurationError::invalid(
                "auth.domain_prefix",
                prefix,
                format!("issuer does not resolve to {expected_host}"),
            ));
        }
        Ok(issuer)
    }

    /// Where the backend fetches the tenant's token signing keys
    pub fn jwks_url(&self) -> Result<Url, ConfigurationError> {
        join(&self.issuer()?, ".well-known/jwks.json", "auth.domain_prefix")
    }

    /// Implicit-flow authorize URL that sends the user back to `callback_path`
    /// on the front end
    pub fn login_url(&self, callback_path: &str) -> Result<Url, ConfigurationError> {
        let callback = parse_absolute_url("auth.callback_url", &self.callback_url)?;
        let redirect = join(&callback, callback_path.trim_start_matches('/'), "auth.callback_url")?;

        let mut url = join(&self.issuer()?, "authorize", "auth.domain_prefix")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect.as_str());
        Ok(url)
    }
}

/// Returns the value, or `MissingField` when it is blank
///
/// Surrounding whitespace is rejected rather than trimmed so consumers read
/// exactly what was validated.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ConfigurationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigurationError::missing(field));
    }
    if trimmed.len() != value.len() {
        return Err(ConfigurationError::invalid(
            field,
            value,
            "surrounding whitespace is not allowed",
        ));
    }
    Ok(value)
}

/// Parses an absolute URL that names a host
pub(crate) fn parse_absolute_url(field: &str, value: &str) -> Result<Url, ConfigurationError> {
    let value = required(field, value)?;
    let url = Url::parse(value).map_err(|e| ConfigurationError::invalid(field, value, e.to_string()))?;
    if !url.has_host() {
        return Err(ConfigurationError::invalid(field, value, "URL must include a host"));
    }
    Ok(url)
}

/// Appends `path` below `base`, treating `base` as a directory
pub(crate) fn join(base: &Url, path: &str, field: &str) -> Result<Url, ConfigurationError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path.trim_start_matches('/'))
        .map_err(|e| ConfigurationError::invalid(field, path, e.to_string()))
}
