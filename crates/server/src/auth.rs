//! Bearer-token authentication and the admin gate.
//!
//! [`authenticate`] runs on every request and attaches an [`AuthUser`] when the
//! `Authorization` header carries a valid token; anonymous requests continue.
//! Handlers that mutate data take an [`AdminUser`] argument, which rejects the
//! request before the handler body runs.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Token lifetime.
const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Username
    pub sub: String,
    pub is_admin: bool,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Creates and verifies HS256 tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
        }
    }

    /// Sign a token for `username`, valid for 24 hours.
    pub fn create_token(&self, username: &str, is_admin: bool) -> Result<String> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            is_admin,
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify signature, issuer and expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

/// The caller, as established by a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

/// Attach an [`AuthUser`] to the request extensions if the token verifies.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    match extract_auth_user(request.headers(), &state.jwt) {
        Some(user) => {
            debug!(username = %user.username, is_admin = user.is_admin, "Authenticated");
            request.extensions_mut().insert(user);
        }
        None => debug!("No valid authentication token"),
    }

    next.run(request).await
}

fn extract_auth_user(headers: &axum::http::HeaderMap, jwt: &JwtService) -> Option<AuthUser> {
    let auth_str = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;

    // Accept both "Bearer <token>" and a raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();

    let claims = jwt.verify_token(token).ok()?;
    Some(AuthUser {
        username: claims.sub,
        is_admin: claims.is_admin,
    })
}

/// Extractor that only succeeds for admins.
///
/// No authenticated caller is `Unauthorized`; a non-admin caller is `Forbidden`.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized)?;

        if !user.is_admin {
            return Err(ApiError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
