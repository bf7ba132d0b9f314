use anyhow::Result;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// JWT Claims structure, shared with the external auth provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Username
    pub uid: i32,     // Profile ID
    pub role: String, // One of: student, coordinator, admin
    pub exp: usize,   // Expiration timestamp
}

/// Verify and decode a JWT token.
///
/// Tokens are issued by the external auth provider; this service only ever
/// verifies them.
pub fn verify(secret: &[u8], token: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &[u8] = b"test_secret";

    /// Stand-in for the auth provider's token issuance.
    fn sign(secret: &[u8], profile_id: i32, username: &str, role: &str) -> String {
        let claims = Claims {
            sub: username.to_owned(),
            uid: profile_id,
            role: role.to_owned(),
            exp: (Utc::now() + Duration::days(7)).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn verify_roundtrips_provider_claims() {
        let token = sign(SECRET, 42, "priya", "admin");
        let claims = verify(SECRET, &token).unwrap();
        assert_eq!(claims.uid, 42);
        assert_eq!(claims.sub, "priya");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = sign(SECRET, 1, "user", "student");
        assert!(verify(b"other_secret", &token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let claims = Claims {
            sub: "user".to_owned(),
            uid: 1,
            role: "student".to_owned(),
            exp: (Utc::now() - Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(verify(SECRET, &token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(verify(SECRET, "not.a.token").is_err());
        assert!(verify(SECRET, "").is_err());
    }
}
