//! Unit tests for the token service

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{
    MockRefreshTokenRepository, MockUserRepository, RefreshTokenRepository,
};
use crate::services::token::service::hash_token;
use crate::services::token::{
    TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig,
};

const TEST_SECRET: &str = "unit-test-secret-0123456789-0123456789-0123456789";

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        issuer: "hermod-test".to_string(),
        audience: "hermod-test-api".to_string(),
        access_token_expiry_minutes: 15,
        refresh_token_expiry_days: 30,
    }
}

fn test_user() -> User {
    let mut user = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "$2b$04$notarealhash".to_string(),
        Role::User,
    );
    user.confirm_email();
    user
}

struct Fixture {
    service: Arc<TokenService<MockRefreshTokenRepository, MockUserRepository>>,
    tokens: Arc<MockRefreshTokenRepository>,
    users: Arc<MockUserRepository>,
    user: User,
}

async fn create_fixture() -> Fixture {
    let tokens = Arc::new(MockRefreshTokenRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let user = test_user();
    users.insert(user.clone()).await;

    let service = Arc::new(
        TokenService::new(tokens.clone(), users.clone(), test_config())
            .expect("failed to create token service"),
    );

    Fixture {
        service,
        tokens,
        users,
        user,
    }
}

fn assert_invalid_refresh(result: Result<crate::TokenPair, DomainError>) {
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn test_generated_claims_match_user() {
    let fx = create_fixture().await;

    let pair = fx.service.generate_tokens(&fx.user).await.unwrap();
    let claims = fx.service.verify_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.sub, fx.user.id.to_string());
    assert_eq!(claims.name, "alice");
    assert_eq!(claims.email, "alice@example.com");
    assert_eq!(claims.role, "user");
    assert_eq!(claims.iss, "hermod-test");
    assert_eq!(claims.aud, "hermod-test-api");
    assert_eq!(claims.exp - claims.iat, 15 * 60);
    assert_eq!(pair.expires_in, 15 * 60);
}

#[tokio::test]
async fn test_signature_rejected_under_different_key() {
    let fx = create_fixture().await;
    let pair = fx.service.generate_tokens(&fx.user).await.unwrap();

    let mut other_config = test_config();
    other_config.jwt_secret = "a-completely-different-secret-0123456789".to_string();
    let other_service = TokenService::new(
        Arc::new(MockRefreshTokenRepository::new()),
        Arc::new(MockUserRepository::new()),
        other_config,
    )
    .unwrap();

    // Same key validates, different key fails closed
    assert!(fx.service.verify_access_token(&pair.access_token).is_ok());
    let result = other_service.verify_access_token(&pair.access_token);
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidAccessToken)
    ));
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let fx = create_fixture().await;
    let pair = fx.service.generate_tokens(&fx.user).await.unwrap();

    let mut tampered = pair.access_token.clone();
    tampered.pop();
    tampered.push('A');

    assert!(fx.service.verify_access_token(&tampered).is_err());
}

#[tokio::test]
async fn test_rotation_issues_new_pair_and_burns_old_value() {
    let fx = create_fixture().await;

    let first = fx.service.generate_tokens(&fx.user).await.unwrap();
    let second = fx
        .service
        .verify_and_rotate(&first.refresh_token)
        .await
        .unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert_ne!(first.refresh_token, second.refresh_token);

    // Replaying the original value must fail: it was deleted on redemption
    assert_invalid_refresh(fx.service.verify_and_rotate(&first.refresh_token).await);

    // The rotated value still works
    assert!(fx
        .service
        .verify_and_rotate(&second.refresh_token)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_unknown_refresh_value_rejected_without_store_mutation() {
    let fx = create_fixture().await;
    fx.service.generate_tokens(&fx.user).await.unwrap();
    assert_eq!(fx.tokens.len().await, 1);

    let probe = "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz";
    assert_invalid_refresh(fx.service.verify_and_rotate(probe).await);

    // The failed probe must not have touched the store
    assert_eq!(fx.tokens.len().await, 1);
}

#[tokio::test]
async fn test_expired_record_rejected_and_pruned() {
    let fx = create_fixture().await;

    let stale_value = "stale-refresh-value-0123456789012345";
    let mut record = RefreshToken::new(
        fx.user.id,
        hash_token(stale_value),
        "stale-jti".to_string(),
    );
    record.expires_at = Utc::now() - Duration::days(1);
    fx.tokens.save_refresh_token(record).await.unwrap();

    assert_invalid_refresh(fx.service.verify_and_rotate(stale_value).await);

    // The lookup itself removed the expired record
    let remaining = fx
        .tokens
        .find_refresh_token(&hash_token(stale_value))
        .await
        .unwrap();
    assert!(remaining.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_redemption_has_single_winner() {
    let fx = create_fixture().await;
    let pair = fx.service.generate_tokens(&fx.user).await.unwrap();

    let service_a = fx.service.clone();
    let service_b = fx.service.clone();
    let value_a = pair.refresh_token.clone();
    let value_b = pair.refresh_token.clone();

    let (first, second) = tokio::join!(
        tokio::spawn(async move { service_a.verify_and_rotate(&value_a).await }),
        tokio::spawn(async move { service_b.verify_and_rotate(&value_b).await }),
    );

    let results = [first.unwrap(), second.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one concurrent redemption may win");

    for result in results {
        if let Err(e) = result {
            assert!(matches!(
                e,
                DomainError::Token(TokenError::InvalidRefreshToken)
            ));
        }
    }
}

#[tokio::test]
async fn test_rotation_fails_closed_when_owner_is_gone() {
    let fx = create_fixture().await;
    let pair = fx.service.generate_tokens(&fx.user).await.unwrap();

    fx.users.remove(fx.user.id).await;

    assert_invalid_refresh(fx.service.verify_and_rotate(&pair.refresh_token).await);

    // The record was consumed before the owner lookup; a retry with the
    // same value stays rejected
    assert_invalid_refresh(fx.service.verify_and_rotate(&pair.refresh_token).await);
}

#[tokio::test]
async fn test_multiple_sessions_coexist() {
    let fx = create_fixture().await;

    let first = fx.service.generate_tokens(&fx.user).await.unwrap();
    let second = fx.service.generate_tokens(&fx.user).await.unwrap();

    let outstanding = fx.tokens.find_by_user_id(fx.user.id).await.unwrap();
    assert_eq!(outstanding.len(), 2);

    // Redeeming one session leaves the other intact
    fx.service
        .verify_and_rotate(&first.refresh_token)
        .await
        .unwrap();
    assert!(fx
        .service
        .verify_and_rotate(&second.refresh_token)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_weak_secret_rejected_at_construction() {
    let mut config = test_config();
    config.jwt_secret = "short".to_string();

    let result = TokenService::new(
        Arc::new(MockRefreshTokenRepository::new()),
        Arc::new(MockUserRepository::new()),
        config,
    );

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Configuration { .. }
    ));
}

#[tokio::test]
async fn test_cleanup_removes_only_expired_records() {
    let fx = create_fixture().await;

    fx.service.generate_tokens(&fx.user).await.unwrap();

    let mut expired = RefreshToken::new(
        fx.user.id,
        "expired-hash".to_string(),
        "expired-jti".to_string(),
    );
    expired.expires_at = Utc::now() - Duration::hours(1);
    fx.tokens.save_refresh_token(expired).await.unwrap();

    let cleanup = TokenCleanupService::new(fx.tokens.clone(), TokenCleanupConfig::default());
    let deleted = cleanup.run_cleanup().await.unwrap();

    assert_eq!(deleted, 1);
    assert_eq!(fx.tokens.len().await, 1);
}
