//! Signed, expiring bearer tokens for the admin API.
//!
//! A token is `base64url(payload).base64url(hmac_sha256(secret, payload))`
//! where the payload is the JSON-serialized claims. Verification recomputes
//! the MAC over the encoded payload before anything is parsed, so a forged
//! or truncated token is rejected without ever deserializing it.
//!
//! Tokens are self-contained: nothing is stored server-side, and there is
//! no revocation list. Deactivating an account stops new logins but an
//! already-issued token stays valid until it expires.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::models::CurrentAdmin;

use super::error::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Claims embedded in a token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    principal: CurrentAdmin,
    /// Unix seconds.
    issued_at: i64,
    /// Unix seconds.
    expires_at: i64,
}

/// Issues and verifies admin bearer tokens.
#[derive(Clone)]
pub struct TokenSigner {
    key: SecretString,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer from the configured secret and lifetime.
    #[must_use]
    pub fn new(secret: SecretString, ttl_hours: i64) -> Self {
        Self {
            key: secret,
            ttl: Duration::hours(ttl_hours),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any length")
    }

    /// Issue a token for the given principal, valid from now for the
    /// configured lifetime.
    #[must_use]
    pub fn issue(&self, principal: &CurrentAdmin) -> String {
        self.issue_at(principal, Utc::now())
    }

    /// Verify a token and return the embedded principal.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the token is malformed, carries a bad
    /// signature, or has expired.
    pub fn verify(&self, token: &str) -> Result<CurrentAdmin, TokenError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, principal: &CurrentAdmin, now: DateTime<Utc>) -> String {
        let claims = Claims {
            principal: principal.clone(),
            issued_at: now.timestamp(),
            expires_at: (now + self.ttl).timestamp(),
        };

        // Claims contain only JSON-safe fields, serialization cannot fail
        let payload = serde_json::to_vec(&claims).unwrap_or_default();
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        let sig_b64 = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{payload_b64}.{sig_b64}")
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<CurrentAdmin, TokenError> {
        let (payload_b64, sig_b64) = token.split_once('.').ok_or(TokenError::Malformed)?;

        let sig = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| TokenError::Malformed)?;

        // Constant-time comparison via hmac's verify
        let mut mac = self.mac();
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&sig).map_err(|_| TokenError::BadSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.expires_at <= now.timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims.principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironvale_core::{AdminRole, AdminUserId};

    fn signer() -> TokenSigner {
        TokenSigner::new(SecretString::from("k7#mQ9$vL2@xR5!wN8&pT4^zB6*eH3%u"), 24)
    }

    fn principal() -> CurrentAdmin {
        CurrentAdmin {
            id: AdminUserId::new(1),
            username: "admin".to_string(),
            role: AdminRole::Admin,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let signer = signer();
        let token = signer.issue(&principal());
        let decoded = signer.verify(&token).expect("valid token");
        assert_eq!(decoded, principal());
    }

    #[test]
    fn test_missing_separator_rejected() {
        assert_eq!(
            signer().verify("nodotsinhere").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_garbage_rejected() {
        let signer = signer();
        assert!(signer.verify("").is_err());
        assert!(signer.verify("a.b.c").is_err());
        assert!(signer.verify("!!!.???").is_err());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let signer = signer();
        let token = signer.issue(&principal());
        let (_, sig) = token.split_once('.').expect("separator");

        // Re-encode a payload claiming a different user, keep the old signature
        let forged_payload = URL_SAFE_NO_PAD.encode(
            serde_json::json!({
                "id": 999,
                "username": "intruder",
                "role": "admin",
                "issued_at": 0,
                "expires_at": i64::MAX,
            })
            .to_string(),
        );
        let forged = format!("{forged_payload}.{sig}");

        assert_eq!(
            signer.verify(&forged).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_wrong_key_rejected() {
        let token = signer().issue(&principal());
        let other = TokenSigner::new(SecretString::from("Z1!aY4$cW7@eU0#gS3&iQ6^kO9*mM2%o"), 24);
        assert_eq!(other.verify(&token).unwrap_err(), TokenError::BadSignature);
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = signer();
        let issued = Utc::now() - Duration::hours(48);
        let token = signer.issue_at(&principal(), issued);
        assert_eq!(signer.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_not_yet_expired_token_accepted() {
        let signer = signer();
        let issued = Utc::now() - Duration::hours(23);
        let token = signer.issue_at(&principal(), issued);
        assert!(signer.verify(&token).is_ok());
    }
}
