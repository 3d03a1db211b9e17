//! Access token minting and password hashing utilities.

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::config::Config;
use crate::errors::RepoError;
use crate::models::Claims;

/// Issues and verifies HS256 access tokens for user ids.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl AuthService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.jwt_expiration_hours)
    }

    /// Mint a signed access token whose subject is `user_id`.
    pub fn create_access_token(&self, user_id: &ObjectId) -> Result<String, RepoError> {
        let now = Utc::now().timestamp();
        let exp = now.saturating_add(self.expiration_hours.max(0).saturating_mul(3600));

        let claims = Claims {
            sub: user_id.to_hex(),
            exp: exp as usize,
            iat: now as usize,
        };

        debug!("Generated access token for user {}", claims.sub);

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Check signature and expiry, returning the token's claims.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, RepoError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

/// Hash a password using bcrypt with the given work factor.
pub fn hash_password(password: &str, cost: u32) -> Result<String, RepoError> {
    Ok(hash(password, cost)?)
}

/// Verify a password against a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, RepoError> {
    Ok(verify(password, hash)?)
}
