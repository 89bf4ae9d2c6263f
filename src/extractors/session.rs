//! Per-request database session.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};
use std::ops::{Deref, DerefMut};

/// A pooled connection held for the lifetime of one request. It goes back to the pool
/// when the handler returns, errors, or is cancelled.
pub struct DbSession(pub PoolConnection<Postgres>);

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    PgPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = PgPool::from_ref(state);
        let conn = pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

impl Deref for DbSession {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut PgConnection {
        &mut self.0
    }
}
