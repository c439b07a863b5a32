use std::sync::Arc;

use barbuzz_application::prelude as flows;
use barbuzz_core::gateways::{busyness::BusynessGateway, places::PlacesGateway};
use rocket::request::{FromRequest, Outcome, Request};

use super::sqlite;
use crate::core::prelude::*;

type Result<T> = std::result::Result<T, AppError>;

// `Token` is the scheme used by the legacy web client
const AUTH_SCHEMES: [&str; 2] = ["Bearer", "Token"];

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let (scheme, token) = auth_header_val.trim().split_once(' ')?;
    let token = token.trim();
    (AUTH_SCHEMES.contains(&scheme) && !token.is_empty() && !token.contains(' '))
        .then_some(token)
}

/// Access tokens of the request.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    /// The user of the first valid token.
    pub fn user(&self, connections: &sqlite::Connections) -> Result<User> {
        for token in &self.bearer_tokens {
            match flows::authenticate_user(connections, token) {
                Ok(user) => return Ok(user),
                Err(AppError::Business(BError::Parameter(_))) => continue,
                Err(err) => return Err(err),
            }
        }
        Err(barbuzz_core::usecases::Error::Unauthorized.into())
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Self { bearer_tokens })
    }
}

pub struct Version(pub &'static str);

pub struct Places(pub Option<Arc<dyn PlacesGateway + Send + Sync>>);

pub struct Busyness(pub Option<Arc<dyn BusynessGateway + Send + Sync>>);
