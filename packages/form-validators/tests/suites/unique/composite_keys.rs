use form_validators::{ColumnSpec, Submission, UniqueError, UniqueValidator};

use crate::support::db::{insert_fresh_page, insert_page, setup_db, SharedDb};
use crate::support::entities::pages;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Slugs are unique per tenant.
fn slug_validator(db: &SharedDb) -> Result<UniqueValidator<pages::Entity>, UniqueError> {
    let db = db.clone();
    UniqueValidator::<pages::Entity>::builder(ColumnSpec::columns([
        pages::Column::TenantId,
        pages::Column::Slug,
    ]))
    .get_session(move || db.clone())
    .build()
}

#[tokio::test]
async fn same_slug_in_another_tenant_passes() -> TestResult {
    let db = setup_db().await?;
    let page = insert_fresh_page(&db, 1, 1).await?;
    let validator = slug_validator(&db)?;

    let form = Submission::new()
        .field("tenant_id", 2)
        .field("page_id", 10)
        .field("slug", page.slug.as_str());
    validator.validate(&form, "slug").await?;
    Ok(())
}

#[tokio::test]
async fn new_page_taking_slug_in_same_tenant_is_rejected() -> TestResult {
    let db = setup_db().await?;
    insert_page(&db, 1, 1, "home").await?;
    let validator = slug_validator(&db)?;

    let form = Submission::new()
        .field("tenant_id", 1)
        .field("page_id", 2)
        .field("slug", "home");
    let err = validator.validate(&form, "slug").await.unwrap_err();

    assert!(err.is_validation());
    Ok(())
}

#[tokio::test]
async fn full_composite_key_marks_an_update() -> TestResult {
    let db = setup_db().await?;
    insert_page(&db, 1, 1, "home").await?;
    let validator = slug_validator(&db)?;

    let form = Submission::new()
        .field("tenant_id", "1")
        .field("page_id", "1")
        .field("slug", "home");
    validator.validate(&form, "slug").await?;
    Ok(())
}

#[tokio::test]
async fn matching_only_trailing_key_column_is_not_an_update() -> TestResult {
    let db = setup_db().await?;
    insert_page(&db, 1, 7, "about").await?;
    let conn = db.clone();
    let validator =
        UniqueValidator::<pages::Entity>::builder(ColumnSpec::column(pages::Column::Slug))
            .get_session(move || conn.clone())
            .build()?;

    // page_id matches the stored record, tenant_id does not.
    let form = Submission::new()
        .field("tenant_id", 2)
        .field("page_id", 7)
        .field("slug", "about");
    let err = validator.validate(&form, "slug").await.unwrap_err();

    assert!(err.is_validation());
    Ok(())
}

#[tokio::test]
async fn keyed_spec_reads_renamed_form_fields() -> TestResult {
    let db = setup_db().await?;
    let page = insert_page(&db, 3, 1, "contact").await?;
    let conn = db.clone();
    let validator = UniqueValidator::<pages::Entity>::builder(ColumnSpec::keyed([
        ("tenant", ColumnSpec::column(pages::Column::TenantId)),
        ("page_slug", ColumnSpec::named("slug")),
    ]))
    .get_session(move || conn.clone())
    .build()?;

    let creating = Submission::new()
        .field("tenant", 3)
        .field("page_slug", "contact");
    assert!(validator.validate(&creating, "page_slug").await.is_err());

    let editing = Submission::new()
        .field("tenant", 3)
        .field("page_slug", "contact")
        .editing(page);
    validator.validate(&editing, "page_slug").await?;
    Ok(())
}
