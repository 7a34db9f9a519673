//! Where the validator looks for an existing record.
//!
//! The lookup is chosen when the validator is built: either a session
//! provider that hands out a connection per check, or an entity-level query
//! bound to a connection.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    Condition, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Select,
};

/// Something that lends out a connection for a lookup.
///
/// Implemented for owned connections and transactions, and for `Arc`s of any
/// connection so a provider can share one that is not `Clone`.
pub trait SessionHandle: Send + Sync {
    type Conn: ConnectionTrait + Send + Sync;

    fn connection(&self) -> &Self::Conn;
}

impl SessionHandle for DatabaseConnection {
    type Conn = Self;

    fn connection(&self) -> &Self {
        self
    }
}

impl SessionHandle for DatabaseTransaction {
    type Conn = Self;

    fn connection(&self) -> &Self {
        self
    }
}

impl<C> SessionHandle for Arc<C>
where
    C: ConnectionTrait + Send + Sync,
{
    type Conn = C;

    fn connection(&self) -> &C {
        self
    }
}

/// Fetch the first record of `E` matching a condition.
#[async_trait]
pub trait FirstMatch<E: EntityTrait>: Send + Sync {
    async fn first_match(&self, condition: Condition) -> Result<Option<E::Model>, DbErr>;
}

/// Looks records up through a connection obtained from `get_session` on every check.
pub struct SessionLookup<F> {
    get_session: F,
}

impl<F> SessionLookup<F> {
    pub fn new(get_session: F) -> Self {
        Self { get_session }
    }
}

#[async_trait]
impl<E, F, C> FirstMatch<E> for SessionLookup<F>
where
    E: EntityTrait,
    F: Fn() -> C + Send + Sync,
    C: SessionHandle + 'static,
{
    async fn first_match(&self, condition: Condition) -> Result<Option<E::Model>, DbErr> {
        let session = (self.get_session)();
        E::find().filter(condition).one(session.connection()).await
    }
}

/// Entity-level query bound to a connection.
///
/// The base query defaults to `E::find()`; a custom base can narrow the
/// searched records (for example to exclude soft-deleted rows).
pub struct EntityLookup<E: EntityTrait, C> {
    base: fn() -> Select<E>,
    conn: C,
}

impl<E: EntityTrait, C> EntityLookup<E, C> {
    pub fn new(conn: C) -> Self {
        Self {
            base: E::find,
            conn,
        }
    }

    pub fn with_base(base: fn() -> Select<E>, conn: C) -> Self {
        Self { base, conn }
    }
}

#[async_trait]
impl<E, C> FirstMatch<E> for EntityLookup<E, C>
where
    E: EntityTrait,
    C: SessionHandle,
{
    async fn first_match(&self, condition: Condition) -> Result<Option<E::Model>, DbErr> {
        (self.base)().filter(condition).one(self.conn.connection()).await
    }
}
