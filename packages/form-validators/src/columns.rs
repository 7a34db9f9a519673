//! Column specifications and their canonical resolved form.
//!
//! A validator can be pointed at its columns in several shapes: a field name,
//! a single column, a composite of columns, or a mapping from form field
//! names to columns. [`ColumnSpec::resolve`] reduces all of them to one ordered
//! list of `(field_name, column)` pairs.

use sea_orm::{EntityTrait, IdenStatic, Iterable};

use crate::error::UniqueError;

/// Which persisted column(s) must be unique.
#[derive(Clone, Debug)]
pub enum ColumnSpec<E: EntityTrait> {
    /// A column looked up by name on the entity; the name doubles as the form field name.
    Named(String),
    /// A single column; its column name is used as the form field name.
    Column(E::Column),
    /// Several columns that must be unique together.
    Composite(Vec<ColumnSpec<E>>),
    /// Form field name to column, for forms whose field names differ from column names.
    Keyed(Vec<(String, ColumnSpec<E>)>),
}

impl<E: EntityTrait> ColumnSpec<E> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn column(column: E::Column) -> Self {
        Self::Column(column)
    }

    pub fn composite<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = ColumnSpec<E>>,
    {
        Self::Composite(specs.into_iter().collect())
    }

    /// Shorthand for a composite made of plain columns.
    pub fn columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = E::Column>,
    {
        Self::Composite(columns.into_iter().map(Self::Column).collect())
    }

    pub fn keyed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ColumnSpec<E>)>,
        K: Into<String>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(field, spec)| (field.into(), spec))
                .collect(),
        )
    }

    /// Normalize into the canonical, non-empty set of `(field_name, column)` pairs.
    pub fn resolve(&self) -> Result<ResolvedColumns<E>, UniqueError> {
        let mut pairs = Vec::new();
        self.collect_into(&mut pairs)?;

        if pairs.is_empty() {
            return Err(UniqueError::invalid_spec(
                "column specification resolved to no columns",
            ));
        }

        Ok(ResolvedColumns { pairs })
    }

    fn collect_into(&self, out: &mut Vec<(String, E::Column)>) -> Result<(), UniqueError> {
        match self {
            Self::Named(name) => {
                let column = lookup_column::<E>(name)?;
                out.push((name.clone(), column));
            }
            Self::Column(column) => out.push((column.as_str().to_owned(), *column)),
            Self::Composite(specs) => {
                for spec in specs {
                    spec.collect_into(out)?;
                }
            }
            Self::Keyed(entries) => {
                for (field, spec) in entries {
                    let mut inner = Vec::new();
                    spec.collect_into(&mut inner)?;
                    match inner.as_slice() {
                        [(_, column)] => out.push((field.clone(), *column)),
                        _ => {
                            return Err(UniqueError::invalid_spec(format!(
                                "mapping entry `{field}` must name exactly one column, got {}",
                                inner.len()
                            )))
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl<E: EntityTrait> From<&str> for ColumnSpec<E> {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl<E: EntityTrait> From<String> for ColumnSpec<E> {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

fn lookup_column<E: EntityTrait>(name: &str) -> Result<E::Column, UniqueError> {
    E::Column::iter()
        .find(|column| column.as_str() == name)
        .ok_or_else(|| {
            let entity = E::default();
            UniqueError::invalid_spec(format!(
                "entity `{}` has no column named `{name}`",
                entity.table_name()
            ))
        })
}

/// Ordered `(field_name, column)` pairs; never empty.
#[derive(Clone, Debug)]
pub struct ResolvedColumns<E: EntityTrait> {
    pairs: Vec<(String, E::Column)>,
}

impl<E: EntityTrait> ResolvedColumns<E> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, E::Column)> + '_ {
        self.pairs
            .iter()
            .map(|(field, column)| (field.as_str(), *column))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `(field_name, column_name)` pairs, handy for comparing resolutions.
    pub fn signature(&self) -> Vec<(&str, &str)> {
        self.pairs
            .iter()
            .map(|(field, column)| (field.as_str(), column.as_str()))
            .collect()
    }
}
