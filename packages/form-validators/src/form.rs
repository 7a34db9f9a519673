//! What the validator needs from a form.

use std::collections::BTreeMap;

use sea_orm::Value;

/// The form's reference to the record it edits.
#[derive(Debug)]
pub enum BackRef<'a, M> {
    /// The form type does not track an edited record at all.
    Unsupported,
    /// The form creates a new record.
    Creating,
    /// The form edits this record.
    Editing(&'a M),
}

/// A submitted form for records of model type `M`.
pub trait Form<M> {
    /// Submitted value of `field`, or `None` if the form has no such field.
    fn data(&self, field: &str) -> Option<Value>;

    fn back_ref(&self) -> BackRef<'_, M>;

    /// Translation hook for user-facing messages.
    fn gettext(&self, message: &str) -> String {
        message.to_owned()
    }
}

/// Plain form submission: field values plus an optional edited record.
#[derive(Clone, Debug)]
pub struct Submission<M> {
    values: BTreeMap<String, Value>,
    original: Option<M>,
    tracks_original: bool,
}

impl<M> Submission<M> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            original: None,
            tracks_original: true,
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Mark the submission as an edit of `original`.
    pub fn editing(mut self, original: M) -> Self {
        self.original = Some(original);
        self.tracks_original = true;
        self
    }

    /// Behave like a form that has no notion of an edited record.
    pub fn without_back_ref(mut self) -> Self {
        self.original = None;
        self.tracks_original = false;
        self
    }

    pub fn original(&self) -> Option<&M> {
        self.original.as_ref()
    }
}

impl<M> Default for Submission<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Form<M> for Submission<M> {
    fn data(&self, field: &str) -> Option<Value> {
        self.values.get(field).cloned()
    }

    fn back_ref(&self) -> BackRef<'_, M> {
        match (&self.original, self.tracks_original) {
            (_, false) => BackRef::Unsupported,
            (None, true) => BackRef::Creating,
            (Some(original), true) => BackRef::Editing(original),
        }
    }
}
