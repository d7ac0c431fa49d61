//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! Refresh token records are write-once rows keyed by the SHA-256 digest
//! of the opaque token value. Redemption removes the row atomically so a
//! given value can be spent at most once, even under concurrent requests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hermod_core::domain::entities::token::RefreshToken;
use hermod_core::errors::DomainError;
use hermod_core::repositories::RefreshTokenRepository;

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid token UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            token_hash: row.try_get("token_hash").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token_hash: {}", e),
            })?,
            jti: row.try_get("jti").map_err(|e| DomainError::Internal {
                message: format!("Failed to get jti: {}", e),
            })?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get issued_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, jti, issued_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(&token.jti)
            .bind(token.issued_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(token),
            // The unique index on token_hash enforces at-most-one record
            // per token value.
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Validation {
                    message: "Token already exists".to_string(),
                })
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to save refresh token: {}", e),
            }),
        }
    }

    async fn take_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to begin transaction: {}", e),
        })?;

        // FOR UPDATE serializes concurrent redemptions of the same value:
        // the second caller blocks here until the first commits its DELETE,
        // then observes no row.
        let select_query = r#"
            SELECT id, user_id, token_hash, jti, issued_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
            FOR UPDATE
        "#;

        let row = sqlx::query(select_query)
            .bind(token_hash)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        let Some(row) = row else {
            tx.rollback().await.map_err(|e| DomainError::Internal {
                message: format!("Failed to roll back transaction: {}", e),
            })?;
            return Ok(None);
        };

        let token = Self::row_to_token(&row)?;

        sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete refresh token: {}", e),
            })?;

        tx.commit().await.map_err(|e| DomainError::Internal {
            message: format!("Failed to commit transaction: {}", e),
        })?;

        Ok(Some(token))
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, jti, issued_at, expires_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, jti, issued_at, expires_at
            FROM refresh_tokens
            WHERE user_id = ?
                AND expires_at > ?
            ORDER BY issued_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(Utc::now())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user tokens: {}", e),
            })?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at <= ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
