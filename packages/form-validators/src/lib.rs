//! Form validators backed by SeaORM.
//!
//! The main entry point is [`UniqueValidator`], which rejects a submitted
//! value when another stored record already holds it:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use form_validators::{ColumnSpec, Submission, UniqueValidator};
//!
//! let db = Arc::new(db);
//! let validator = UniqueValidator::<users::Entity>::builder(ColumnSpec::column(users::Column::Email))
//!     .get_session(move || Arc::clone(&db))
//!     .build()?;
//!
//! let form = Submission::new().field("email", "a@x.com");
//! validator.validate(&form, "email").await?;
//! ```

pub mod columns;
pub mod error;
pub mod form;
pub mod keys;
pub mod source;
pub mod validator;


pub use columns::{ColumnSpec, ResolvedColumns};
pub use error::{UniqueError, DEFAULT_MESSAGE};
pub use form::{BackRef, Form, Submission};
pub use source::{EntityLookup, FirstMatch, SessionHandle, SessionLookup};
pub use validator::{UniqueValidator, UniqueValidatorBuilder};
