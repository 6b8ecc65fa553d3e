//! Stateless session management.
//!
//! The session manager is the sole authority for "who is the caller" on every
//! authenticated route. It mints a signed, time-limited token carrying the
//! caller's identity claims, hands it to the browser as an HTTP-only cookie,
//! and recovers the claims from the cookie on subsequent requests.
//!
//! Sessions are stateless: validity is purely a function of signature and
//! embedded expiry, nothing is persisted server-side. The consequence is that
//! logout is best-effort — `clear_session` only deletes the browser's copy,
//! and a replayed unexpired token remains cryptographically valid. That is a
//! deliberate tradeoff of the scheme, not an oversight; a server-side
//! revocation list would be a behavior change and must not be added silently.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;

/// Cookie key the browser presents on every request.
pub const COOKIE_NAME: &str = "auth-token";

/// Fixed validity window for issued tokens.
const SESSION_TTL_DAYS: i64 = 7;

/// Identity facts embedded in a session token, created at login/registration
/// from the backend's canonical user record.
///
/// This is an immutable value object: a claims change (e.g. attaching a
/// company) constructs a new `Identity` and re-mints the whole token, never
/// patches fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
}

impl Identity {
    /// Returns a new identity with the company attached. The next
    /// `create_session` call supersedes the old token entirely.
    pub fn with_company(self, company_id: Uuid) -> Identity {
        Identity {
            company_id: Some(company_id),
            ..self
        }
    }
}

/// Full token payload: identity plus the standard temporal claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Identity,
    pub iat: i64,
    pub exp: i64,
}

/// Mints, verifies, and clears the signed session cookie.
#[derive(Clone)]
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    secure_cookies: bool,
}

impl SessionManager {
    pub fn new(secret: &str, secure_cookies: bool) -> Self {
        SessionManager {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            secure_cookies,
        }
    }

    /// Signs `identity` into a fresh token valid for 7 days and sets it as
    /// the session cookie. Returns the updated jar along with the raw token
    /// for callers that need it outside the cookie channel.
    pub fn create_session(
        &self,
        jar: CookieJar,
        identity: Identity,
    ) -> Result<(CookieJar, String), AppError> {
        let token = self.issue_token_at(identity, Utc::now())?;

        let cookie = Cookie::build((COOKIE_NAME, token.clone()))
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookies)
            .path("/")
            .max_age(time::Duration::days(SESSION_TTL_DAYS))
            .build();

        Ok((jar.add(cookie), token))
    }

    /// Recovers the caller's identity from the session cookie.
    ///
    /// Absent cookie is a normal state, not an error. Any verification
    /// failure (bad signature, expired, malformed) is logged with its cause
    /// and collapses to `None` — the caller only ever sees "unauthenticated."
    pub fn get_session(&self, jar: &CookieJar) -> Option<Identity> {
        let cookie = jar.get(COOKIE_NAME)?;
        self.verify_token(cookie.value())
            .map(|claims| claims.identity)
    }

    /// Deletes the session cookie. Best-effort logout: see the module docs
    /// for why a still-unexpired token remains valid if replayed.
    pub fn clear_session(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(COOKIE_NAME).path("/"))
    }

    pub(crate) fn verify_token(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        debug!("session token expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        warn!("session token signature invalid")
                    }
                    _ => debug!("session token rejected: {e}"),
                }
                None
            }
        }
    }

    fn issue_token_at(
        &self,
        identity: Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            identity,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(SESSION_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to sign session token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        SessionManager::new("test-secret", false)
    }

    fn identity() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "hr@example.com".to_string(),
            full_name: "Jordan Reyes".to_string(),
            role: "hr".to_string(),
            company_id: None,
        }
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let mgr = manager();
        let id = identity();

        let (jar, _token) = mgr.create_session(CookieJar::new(), id.clone()).unwrap();
        assert_eq!(mgr.get_session(&jar), Some(id));
    }

    #[test]
    fn test_temporal_claims_span_seven_days() {
        let mgr = manager();
        let (_, token) = mgr.create_session(CookieJar::new(), identity()).unwrap();

        let claims = mgr.verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_missing_cookie_is_none() {
        assert_eq!(manager().get_session(&CookieJar::new()), None);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let mgr = manager();
        let (_, token) = mgr.create_session(CookieJar::new(), identity()).unwrap();

        // Flip each character in turn; no single-character change may verify.
        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();
            if tampered == token {
                continue;
            }
            assert!(mgr.verify_token(&tampered).is_none(), "index {i} verified");
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mgr = manager();
        // Issued 8 days ago: signature valid, expiry passed.
        let token = mgr
            .issue_token_at(identity(), Utc::now() - Duration::days(8))
            .unwrap();
        assert!(mgr.verify_token(&token).is_none());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let (_, token) = manager().create_session(CookieJar::new(), identity()).unwrap();

        let other = SessionManager::new("another-secret", false);
        assert!(other.verify_token(&token).is_none());
    }

    #[test]
    fn test_clear_session_removes_cookie() {
        let mgr = manager();
        let (jar, _) = mgr.create_session(CookieJar::new(), identity()).unwrap();
        assert!(mgr.get_session(&jar).is_some());

        let jar = mgr.clear_session(jar);
        assert_eq!(mgr.get_session(&jar), None);
    }

    #[test]
    fn test_company_attachment_supersedes_token() {
        let mgr = manager();
        let id = identity();
        let company = Uuid::new_v4();

        let (jar, _) = mgr.create_session(CookieJar::new(), id.clone()).unwrap();
        let updated = mgr.get_session(&jar).unwrap().with_company(company);
        let (jar, _) = mgr.create_session(jar, updated).unwrap();

        let session = mgr.get_session(&jar).unwrap();
        assert_eq!(session.company_id, Some(company));
        assert_eq!(session.user_id, id.user_id);
    }

    #[test]
    fn test_cookie_attributes() {
        let mgr = SessionManager::new("test-secret", true);
        let (jar, _) = mgr.create_session(CookieJar::new(), identity()).unwrap();

        let cookie = jar.get(COOKIE_NAME).unwrap();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));
    }
}
