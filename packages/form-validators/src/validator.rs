//! The uniqueness validator.

use sea_orm::{ColumnTrait, Condition, EntityTrait, IdenStatic, Select};
use tracing::{debug, warn};

use crate::columns::{ColumnSpec, ResolvedColumns};
use crate::error::{UniqueError, DEFAULT_MESSAGE};
use crate::form::{BackRef, Form};
use crate::keys;
use crate::source::{EntityLookup, FirstMatch, SessionHandle, SessionLookup};

/// Checks that the submitted value(s) of a form are not already stored on
/// another record of `E`.
///
/// A match is accepted when the form submits the matched record's full
/// primary key (an update) or when the form edits that very record.
pub struct UniqueValidator<E: EntityTrait> {
    column: ColumnSpec<E>,
    source: Box<dyn FirstMatch<E>>,
    message: Option<String>,
}

impl<E: EntityTrait> UniqueValidator<E> {
    /// Flags a form renderer can attach to the validated field.
    pub const FIELD_FLAGS: &'static [&'static str] = &["unique"];

    pub fn builder(column: ColumnSpec<E>) -> UniqueValidatorBuilder<E> {
        UniqueValidatorBuilder {
            column,
            source: None,
            message: None,
        }
    }

    pub fn column(&self) -> &ColumnSpec<E> {
        &self.column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Validate `form`, reporting failures against `field`.
    pub async fn validate<F>(&self, form: &F, field: &str) -> Result<(), UniqueError>
    where
        F: Form<E::Model> + Sync + ?Sized,
    {
        let columns = self.column.resolve()?;
        let condition = filter_condition(&columns, form)?;

        let entity = E::default();
        debug!(
            field,
            table = entity.table_name(),
            columns = columns.len(),
            "Checking uniqueness"
        );

        let Some(found) = self.source.first_match(condition).await? else {
            return Ok(());
        };

        let original = match form.back_ref() {
            BackRef::Unsupported => {
                warn!(
                    field,
                    table = entity.table_name(),
                    "Form does not expose the record being edited"
                );
                return Err(UniqueError::integration(
                    "form does not expose the record being edited; \
                     implement Form::back_ref to return Creating or Editing",
                ));
            }
            BackRef::Creating => None,
            BackRef::Editing(original) => Some(original),
        };

        if keys::submits_primary_key_of::<E, F>(form, &found) {
            debug!(field, "Match is the record being updated");
            return Ok(());
        }

        if original.is_some_and(|original| keys::same_identity::<E>(original, &found)) {
            debug!(field, "Match is the form's own record");
            return Ok(());
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None => form.gettext(DEFAULT_MESSAGE),
        };
        debug!(field, table = entity.table_name(), "Duplicate value rejected");
        Err(UniqueError::validation(field, message))
    }
}

fn filter_condition<E, F>(columns: &ResolvedColumns<E>, form: &F) -> Result<Condition, UniqueError>
where
    E: EntityTrait,
    F: Form<E::Model> + ?Sized,
{
    let mut condition = Condition::all();
    for (field_name, column) in columns.iter() {
        let value = form.data(field_name).ok_or_else(|| {
            warn!(field = field_name, "Form is missing a field the validator filters on");
            UniqueError::integration(format!("form has no field `{field_name}`"))
        })?;

        if keys::is_null(&value) {
            condition = condition.add(column.is_null());
            continue;
        }

        let def = column.def();
        let Some(value) = keys::column_value(&value, def.get_column_type()) else {
            warn!(
                field = field_name,
                column = column.as_str(),
                "Submitted value does not fit the column type"
            );
            return Err(UniqueError::integration(format!(
                "value of field `{field_name}` cannot be stored in column `{}`",
                column.as_str()
            )));
        };
        condition = condition.add(column.eq(value));
    }
    Ok(condition)
}

/// Builder for [`UniqueValidator`]; a lookup source must be selected.
pub struct UniqueValidatorBuilder<E: EntityTrait> {
    column: ColumnSpec<E>,
    source: Option<Box<dyn FirstMatch<E>>>,
    message: Option<String>,
}

impl<E: EntityTrait> UniqueValidatorBuilder<E> {
    /// Obtain a fresh connection from `get_session` on every check.
    pub fn get_session<F, C>(mut self, get_session: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: SessionHandle + 'static,
    {
        self.source = Some(Box::new(SessionLookup::new(get_session)));
        self
    }

    /// Query `E::find()` on `conn`.
    pub fn entity_query<C>(mut self, conn: C) -> Self
    where
        C: SessionHandle + 'static,
    {
        self.source = Some(Box::new(EntityLookup::<E, C>::new(conn)));
        self
    }

    /// Query a custom base select of `E` on `conn`.
    pub fn entity_query_with<C>(mut self, base: fn() -> Select<E>, conn: C) -> Self
    where
        C: SessionHandle + 'static,
    {
        self.source = Some(Box::new(EntityLookup::with_base(base, conn)));
        self
    }

    pub fn source(mut self, source: impl FirstMatch<E> + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> Result<UniqueValidator<E>, UniqueError> {
        let Some(source) = self.source else {
            return Err(UniqueError::configuration(
                "no way to obtain a data-store session",
            ));
        };

        Ok(UniqueValidator {
            column: self.column,
            source,
            message: self.message,
        })
    }
}
