use serde::{Deserialize, Serialize};
use sigil_core::domain::{Claims, IssuedToken};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenRequest {
    /// Principal the token is bound to, e.g. "user-42"
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTokenResponse {
    pub token: String,
    pub token_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
    pub expires_in: i64, // seconds from issued_at
}

impl From<IssuedToken> for IssueTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        let expires_in = issued.expires_in();
        Self {
            token: issued.token,
            token_id: issued.claims.jti,
            issued_at: issued.claims.iat,
            expires_at: issued.claims.exp,
            expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub subject: String,
    pub token_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<Claims> for VerifyTokenResponse {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            token_id: claims.jti,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Either names a token by id and expiry, or presents the token itself
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RevokeTokenRequest {
    ById { token_id: String, expires_at: i64 },
    ByToken { token: String },
}
