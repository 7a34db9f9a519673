use std::sync::Arc;

use sea_orm::prelude::Uuid;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use test_support::db::{connect, create_table};
use test_support::{unique_email, unique_slug, unique_str};

use super::entities::{pages, tokens, users, Pages, Tokens, Users};

/// One connection shared by the test body and the validator's session provider.
pub type SharedDb = Arc<DatabaseConnection>;

/// Fresh test database with the `users`, `pages` and `tokens` tables.
pub async fn setup_db() -> Result<SharedDb, DbErr> {
    let conn = connect().await?;
    create_table(&conn, Users).await?;
    create_table(&conn, Pages).await?;
    create_table(&conn, Tokens).await?;
    Ok(Arc::new(conn))
}

pub async fn insert_user(
    conn: &DatabaseConnection,
    id: i64,
    email: &str,
    username: Option<&str>,
    active: bool,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        id: Set(id),
        email: Set(email.to_string()),
        username: Set(username.map(str::to_string)),
        active: Set(active),
    }
    .insert(conn)
    .await
}

/// Active user with a generated email and username.
pub async fn insert_member(conn: &DatabaseConnection, id: i64) -> Result<users::Model, DbErr> {
    let email = unique_email("member");
    let username = unique_str("member");
    insert_user(conn, id, &email, Some(&username), true).await
}

pub async fn insert_page(
    conn: &DatabaseConnection,
    tenant_id: i32,
    page_id: i32,
    slug: &str,
) -> Result<pages::Model, DbErr> {
    pages::ActiveModel {
        tenant_id: Set(tenant_id),
        page_id: Set(page_id),
        slug: Set(slug.to_string()),
        title: Set(format!("Page {page_id}")),
    }
    .insert(conn)
    .await
}

/// Page with a generated slug.
pub async fn insert_fresh_page(
    conn: &DatabaseConnection,
    tenant_id: i32,
    page_id: i32,
) -> Result<pages::Model, DbErr> {
    insert_page(conn, tenant_id, page_id, &unique_slug("page")).await
}

pub async fn insert_token(
    conn: &DatabaseConnection,
    id: i64,
    external_id: Uuid,
) -> Result<tokens::Model, DbErr> {
    tokens::ActiveModel {
        id: Set(id),
        external_id: Set(external_id),
        label: Set(unique_str("token")),
    }
    .insert(conn)
    .await
}
