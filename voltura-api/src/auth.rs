use axum::{extract::State, routing::post, Json, Router};
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Deserialize;
use serde_json::json;
use sha2::Sha256;
use uuid::Uuid;
use voltura_store::UserRecord;

use crate::{error::AppError, middleware::auth::CustomerClaims, pii::Masked, state::AppState};

#[derive(Debug, Deserialize)]
struct SignupRequest {
    email: Option<String>,
    password: Option<Masked<String>>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<Masked<String>>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// POST /signup
/// Create an account. All three fields are required; a duplicate email is a
/// validation error, not a conflict the client has to special-case.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (email, password, name) = match (req.email, req.password, req.name) {
        (Some(e), Some(p), Some(n)) if !e.is_empty() && !p.0.is_empty() && !n.is_empty() => {
            (e, p, n)
        }
        _ => {
            return Err(AppError::ValidationError(
                "Email, password, and name are required".to_string(),
            ))
        }
    };

    let user = UserRecord {
        id: Uuid::new_v4(),
        email,
        name,
        password_digest: password_digest(&state.auth.secret, &password.0),
        created_at: Utc::now(),
    };

    let created = state.redis.create_user(&user).await.map_err(|e| {
        tracing::error!("Signup error: {}", e);
        AppError::InternalServerError("Internal server error during signup".to_string())
    })?;

    if !created {
        return Err(AppError::ValidationError(
            "A user with this email address has already been registered".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "User created successfully",
        "user": { "id": user.id, "email": user.email, "name": user.name }
    })))
}

/// POST /login
/// Verify credentials and issue a bearer token for the customization
/// endpoints. Unknown email and wrong password get the same message.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (email, password) = match (req.email, req.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.0.is_empty() => (e, p),
        _ => {
            return Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            ))
        }
    };

    let user = state
        .redis
        .get_user(&email)
        .await
        .map_err(|e| {
            tracing::error!("Login error: {}", e);
            AppError::InternalServerError("Internal server error during login".to_string())
        })?
        .ok_or_else(|| AppError::AuthenticationError("Invalid login credentials".to_string()))?;

    if password_digest(&state.auth.secret, &password.0) != user.password_digest {
        return Err(AppError::AuthenticationError(
            "Invalid login credentials".to_string(),
        ));
    }

    let claims = CustomerClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        exp: (Utc::now() + Duration::seconds(state.auth.expiration as i64)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.auth.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Token encoding failed: {}", e)))?;

    Ok(Json(json!({
        "access_token": token,
        "user": { "id": user.id, "email": user.email, "name": user.name }
    })))
}

/// HMAC-SHA256 of the password keyed with the server secret, hex-encoded.
fn password_digest(secret: &str, password: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(password.as_bytes());
    mac.finalize()
        .into_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn digest_is_deterministic_and_keyed() {
        let a = password_digest("secret", "hunter2");
        let b = password_digest("secret", "hunter2");
        let c = password_digest("other-secret", "hunter2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn issued_token_round_trips() {
        let secret = "test-secret";
        let claims = CustomerClaims {
            sub: "user-1".to_string(),
            email: "a@b.example".to_string(),
            name: "A".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        let decoded = decode::<CustomerClaims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.sub, "user-1");
        assert_eq!(decoded.claims.email, "a@b.example");
    }
}
