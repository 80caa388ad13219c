use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::error::ApiError;
use crate::models::{Claims, UserData};

/// Resolves a bearer credential to a user identity.
///
/// The production implementation is [`JwtVerifier`]; tests substitute a
/// fixed token table so no token-issuance service is needed.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, credential: &str) -> Result<UserData, ApiError>;
}

pub struct JwtVerifier {
    decoding_key: DecodingKey,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, credential: &str) -> Result<UserData, ApiError> {
        decode::<Claims>(credential, &self.decoding_key, &Validation::default())
            .map(|data| data.claims.user)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    const SECRET: &str = "test-secret";

    fn token_for(id: Uuid, expires_in: Duration, secret: &str) -> String {
        let claims = Claims {
            user: UserData { id },
            exp: (Utc::now() + expires_in).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_valid_token() {
        let id = Uuid::new_v4();
        let verifier = JwtVerifier::new(SECRET);
        let token = token_for(id, Duration::minutes(15), SECRET);

        let user = verifier.verify(&token).unwrap();
        assert_eq!(user.id, id);
    }

    #[test]
    fn rejects_expired_token() {
        let verifier = JwtVerifier::new(SECRET);
        let token = token_for(Uuid::new_v4(), Duration::hours(-2), SECRET);

        assert!(matches!(
            verifier.verify(&token),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let verifier = JwtVerifier::new(SECRET);
        let token = token_for(Uuid::new_v4(), Duration::minutes(15), "other-secret");

        assert!(matches!(
            verifier.verify(&token),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        let verifier = JwtVerifier::new(SECRET);
        assert!(verifier.verify("not-a-jwt").is_err());
    }
}
