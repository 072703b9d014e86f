//! Compact token encoding
//!
//! Tokens are `base64url(header).base64url(claims).base64url(signature)`
//! with an RS256 signature over the first two segments, as written. Parsing
//! is purely structural; the claims segment is not decoded until
//! [`ParsedToken::verify_signature`] succeeds.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{crypto, encode, Algorithm, DecodingKey, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// The only algorithm this service signs or accepts
pub const ALGORITHM: Algorithm = Algorithm::RS256;

/// Upper bound on an encoded token; anything longer is not ours
pub const MAX_TOKEN_LENGTH: usize = 8 * 1024;

/// Signs `claims` into a compact token
pub fn encode_token(claims: &Claims, key: &EncodingKey) -> Result<String, TokenError> {
    encode(&Header::new(ALGORITHM), claims, key).map_err(|_| TokenError::SigningFailure)
}

/// A structurally valid token whose signature has not been checked yet
#[derive(Debug)]
pub struct ParsedToken<'a> {
    /// `header.claims` exactly as presented, the signed message
    signing_input: &'a str,
    /// Claims segment, still base64url
    claims: &'a str,
    /// Signature segment, still base64url
    signature: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Splits a presented token and decodes its header
    ///
    /// Fails with `MalformedToken` unless the token has exactly three
    /// non-empty segments and a base64url RS256 JSON header.
    pub fn parse(token: &'a str) -> Result<Self, TokenError> {
        if token.is_empty() || token.len() > MAX_TOKEN_LENGTH {
            return Err(TokenError::MalformedToken);
        }

        let (signing_input, signature) =
            token.rsplit_once('.').ok_or(TokenError::MalformedToken)?;
        let (header_segment, claims_segment) =
            signing_input.split_once('.').ok_or(TokenError::MalformedToken)?;

        if [header_segment, claims_segment, signature]
            .iter()
            .any(|segment| segment.is_empty() || segment.contains('.'))
        {
            return Err(TokenError::MalformedToken);
        }

        let header: Header = serde_json::from_slice(&decode_segment(header_segment)?)
            .map_err(|_| TokenError::MalformedToken)?;
        if header.alg != ALGORITHM {
            return Err(TokenError::MalformedToken);
        }

        Ok(Self {
            signing_input,
            claims: claims_segment,
            signature,
        })
    }

    /// Checks the RS256 signature and decodes the claims on success
    ///
    /// A signature that fails to decode or to match is `InvalidSignature`.
    /// Claims are only decoded once signed, and a signed segment that is not
    /// claims of the expected shape is `MalformedToken`.
    pub fn verify_signature(self, key: &DecodingKey) -> Result<Claims, TokenError> {
        match crypto::verify(self.signature, self.signing_input.as_bytes(), key, ALGORITHM) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(TokenError::InvalidSignature),
        }

        serde_json::from_slice(&decode_segment(self.claims)?)
            .map_err(|_| TokenError::MalformedToken)
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::MalformedToken)
}
