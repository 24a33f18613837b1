//! Flat API-token authentication.
//!
//! The credential set is built once at startup from the server configuration
//! and shared with handlers as immutable app data. A request authenticates by
//! presenting a known token in the `API_TOKEN` header.

use std::collections::HashMap;
use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error, web};

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "API_TOKEN";

/// Username associated with the configured service token.
pub const API_USER: &str = "appuser";

/// Immutable token -> username lookup.
#[derive(Clone, Debug, Default)]
pub struct ApiTokens {
    tokens: HashMap<String, String>,
}

impl ApiTokens {
    /// Builds a credential set holding a single service token.
    pub fn single(token: impl Into<String>, username: impl Into<String>) -> Self {
        let mut tokens = HashMap::new();
        tokens.insert(token.into(), username.into());
        Self { tokens }
    }

    /// Resolves a presented token to its username, if known.
    pub fn verify(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }
}

/// Extractor resolving the `API_TOKEN` header against [`ApiTokens`].
///
/// Handlers taking this parameter reject unauthenticated requests with 401
/// before the handler body runs.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req.app_data::<web::Data<ApiTokens>>();
        let presented = req
            .headers()
            .get(API_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        let username = match (tokens, presented) {
            (Some(tokens), Some(token)) => tokens.verify(token),
            _ => None,
        };

        ready(match username {
            Some(username) => Ok(AuthenticatedUser {
                username: username.to_string(),
            }),
            None => Err(error::ErrorUnauthorized("Unauthorized")),
        })
    }
}
