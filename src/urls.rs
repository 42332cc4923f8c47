//! Reverse URL lookup by endpoint name.
//!
//! The serializers only know endpoint names such as `api.get_user`; the
//! HTTP layer decides where those live. [`RouteTable`] is a plain
//! name-to-template map that covers the common case.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;

use crate::error::{IdentityError, Result};

/// Endpoint used for a user's self link.
pub const USER_ENDPOINT: &str = "api.get_user";
/// Endpoint used for a group's self link.
pub const GROUP_ENDPOINT: &str = "api.get_group";
/// Endpoint serving the paginated user collection.
pub const USERS_ENDPOINT: &str = "api.get_users";

/// Characters escaped inside a path segment, per the WHATWG URL standard's
/// path-segment set.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Builds the URL of a named endpoint.
///
/// Parameters are consumed by path placeholders first; whatever is left
/// becomes the query string, in the order given.
pub trait UrlFor: Send + Sync {
    fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String>;
}

/// Endpoint names mapped to path templates with `{name}` placeholders.
///
/// ```
/// use flicket_identity::{RouteTable, UrlFor};
///
/// let routes = RouteTable::new()
///     .route("api.get_user", "/api/users/{id}")
///     .route("api.get_users", "/api/users");
///
/// assert_eq!(
///     routes.url_for("api.get_user", &[("id", "7".to_string())]).unwrap(),
///     "/api/users/7"
/// );
/// assert_eq!(
///     routes
///         .url_for("api.get_users", &[("page", "2".to_string()), ("per_page", "10".to_string())])
///         .unwrap(),
///     "/api/users?page=2&per_page=10"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    base_url: String,
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix prepended to every generated path, e.g. `https://tickets.example.com`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn route(mut self, endpoint: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(endpoint.into(), template.into());
        self
    }
}

impl UrlFor for RouteTable {
    fn url_for(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String> {
        let template = self
            .routes
            .get(endpoint)
            .ok_or_else(|| IdentityError::UnknownEndpoint(endpoint.to_string()))?;

        let mut path = String::with_capacity(self.base_url.len() + template.len());
        path.push_str(&self.base_url);
        let mut used = vec![false; params.len()];

        let mut rest = template.as_str();
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            path.push_str(&rest[..open]);
            let name = &rest[open + 1..close];
            let index = params
                .iter()
                .position(|(key, _)| *key == name)
                .ok_or_else(|| IdentityError::MissingRouteParam {
                    endpoint: endpoint.to_string(),
                    param: name.to_string(),
                })?;
            used[index] = true;
            path.extend(utf8_percent_encode(&params[index].1, PATH_SEGMENT));
            rest = &rest[close + 1..];
        }
        path.push_str(rest);

        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        for ((key, value), used) in params.iter().zip(used) {
            if !used {
                query.append_pair(key, value);
                has_query = true;
            }
        }
        if has_query {
            path.push('?');
            path.push_str(&query.finish());
        }

        Ok(path)
    }
}
