use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CustomerClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

/// Bearer-token guard for the customization endpoints.
///
/// A missing header (or one with no token after the scheme) is
/// "Authorization required"; anything that reaches verification and fails
/// is "Unauthorized". Clients have always displayed these two messages,
/// so the split is part of the contract. Rejections happen before any
/// handler runs, so the store is never touched.
pub async fn require_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization required".to_string()))?;

    // The token is whatever follows the scheme; a wrong scheme still gets
    // its token verified (and rejected), it is not treated as absent.
    let token = auth_header
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| AppError::AuthenticationError("Authorization required".to_string()))?;

    let token_data = decode::<CustomerClaims>(
        token,
        &DecodingKey::from_secret(state.auth.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::AuthenticationError("Unauthorized".to_string()))?;

    req.extensions_mut().insert(token_data.claims);

    Ok(next.run(req).await)
}
