//! Integration tests for the token scheme used by the `x-auth-token` header.

use secrecy::SecretString;

use pagewright_core::{UserId, UserRole};
use pagewright_server::services::auth::{AuthError, TokenService, hash_password};

fn service(ttl_hours: i64) -> TokenService {
    TokenService::new(
        SecretString::from("fJ2#kP8$mR4%nT6&qV0*sX1@uZ3^wB5!"),
        ttl_hours,
    )
}

#[test]
fn test_issue_and_verify_roundtrip() {
    let tokens = service(24);

    let token = tokens
        .issue(UserId::new(42), UserRole::Standard)
        .expect("issue");
    let claims = tokens.verify(&token).expect("verify");

    assert_eq!(claims.sub, 42);
    assert_eq!(claims.role, UserRole::Standard);
}

#[test]
fn test_admin_role_is_carried_in_claims() {
    let tokens = service(24);

    let token = tokens.issue(UserId::new(1), UserRole::Admin).expect("issue");
    let claims = tokens.verify(&token).expect("verify");

    assert_eq!(claims.role, UserRole::Admin);
}

#[test]
fn test_garbage_token_is_invalid() {
    let tokens = service(24);

    assert!(matches!(
        tokens.verify("not-a-token"),
        Err(AuthError::InvalidToken)
    ));
    assert!(matches!(tokens.verify(""), Err(AuthError::InvalidToken)));
}

#[test]
fn test_token_from_other_secret_is_rejected() {
    let token = service(24)
        .issue(UserId::new(1), UserRole::Standard)
        .expect("issue");

    let other = TokenService::new(
        SecretString::from("zY9!xW7#vU5$tS3%rQ1&pN0*mL8@kJ6^"),
        24,
    );
    assert!(matches!(other.verify(&token), Err(AuthError::InvalidToken)));
}

#[test]
fn test_expired_token_is_rejected_distinctly() {
    let tokens = service(-2);
    let token = tokens
        .issue(UserId::new(1), UserRole::Standard)
        .expect("issue");

    assert!(matches!(
        service(24).verify(&token),
        Err(AuthError::ExpiredToken)
    ));
}

#[test]
fn test_password_hashing_is_compatible_with_cli_seeding() {
    // The CLI seeds admin users through the same hashing path the server
    // verifies against.
    let hash = hash_password("a strong enough password").expect("hash");
    assert!(hash.starts_with("$argon2"));
}
