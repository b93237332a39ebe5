//! # Dispatcher
//!
//! Interprets one inbound catalog action per call and decides the response:
//! a redirect back to the list after a successful write or a delete, or the
//! re-rendered list with an error message when a create is rejected.

mod form;

pub use form::{CatalogForm, DELETE_ACTION};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogResult, IdentifierSequence, Record, Store};
use crate::render;

/// What the HTTP layer should send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// See-other redirect to the given location
    Redirect(String),
    /// Rendered catalog fragment, with an error to show above it
    Page {
        fragment: String,
        error: Option<String>,
    },
}

impl Outcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect(_))
    }

    /// Error carried by a page outcome
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Page { error, .. } => error.as_deref(),
            Outcome::Redirect(_) => None,
        }
    }
}

/// Routes catalog actions to the store
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Arc<Store>,
    sequence: Arc<IdentifierSequence>,
    base_path: String,
}

impl Dispatcher {
    pub fn new(
        store: Arc<Store>,
        sequence: Arc<IdentifierSequence>,
        base_path: impl Into<String>,
    ) -> Self {
        Self {
            store,
            sequence,
            base_path: base_path.into(),
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Render the current catalog
    pub fn list(&self) -> Outcome {
        self.page(None)
    }

    /// Handle a POST: delete when `action=delete`, otherwise create
    pub fn submit(&self, form: &CatalogForm) -> Outcome {
        if form.is_delete() {
            self.delete(form.id.as_deref())
        } else {
            self.create(form)
        }
    }

    /// Remove a record by its textual id, then redirect to the list.
    ///
    /// A missing or malformed id is logged and otherwise ignored.
    pub fn delete(&self, id: Option<&str>) -> Outcome {
        match id {
            None | Some("") => {
                warn!("delete skipped: no record id supplied");
            }
            Some(raw) => match parse_id(raw) {
                Ok(id) => {
                    let removed = self.store.remove_by_id(id);
                    info!(id, removed, "delete handled");
                }
                Err(e) => {
                    warn!(error = %e, "delete skipped");
                }
            },
        }

        self.redirect()
    }

    /// Validate and store a new record.
    ///
    /// Title and author are upper-cased here and nowhere else.
    pub fn create(&self, form: &CatalogForm) -> Outcome {
        match self.try_create(form) {
            Ok(record) => {
                info!(id = record.id(), code = record.code(), "record created");
                self.store.append(record);
                self.redirect()
            }
            Err(e) => {
                debug!(error = %e, kind = ?e.kind(), "create rejected");
                self.page(Some(e.to_string()))
            }
        }
    }

    fn try_create(&self, form: &CatalogForm) -> CatalogResult<Record> {
        let (title, author, year) = match (
            required(&form.title),
            required(&form.author),
            required(&form.year),
        ) {
            (Some(t), Some(a), Some(y)) => (t, a, y),
            _ => return Err(CatalogError::MissingFields),
        };

        // Blank-checked above, but parsed as sent: padding is not a number
        let year: i32 = year.parse().map_err(|_| CatalogError::YearNotNumber)?;

        let record = Record::create(
            &self.sequence,
            title.to_uppercase(),
            author.to_uppercase(),
            year,
        );
        record.validate()?;

        Ok(record)
    }

    fn page(&self, error: Option<String>) -> Outcome {
        let snapshot = self.store.snapshot();
        Outcome::Page {
            fragment: render::render(&snapshot, &self.base_path),
            error,
        }
    }

    fn redirect(&self) -> Outcome {
        Outcome::Redirect(self.base_path.clone())
    }
}

/// A field counts as present only if it has non-whitespace content
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn parse_id(raw: &str) -> CatalogResult<u64> {
    raw.parse()
        .map_err(|_| CatalogError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(
            Arc::new(Store::new()),
            Arc::new(IdentifierSequence::new()),
            "/livros",
        )
    }

    #[test]
    fn test_list_empty() {
        let d = dispatcher();
        assert_eq!(
            d.list(),
            Outcome::Page {
                fragment: String::new(),
                error: None
            }
        );
    }

    #[test]
    fn test_create_uppercases_and_redirects() {
        let d = dispatcher();
        let outcome = d.submit(&CatalogForm::create("Dune", "Frank Herbert", "1965"));
        assert_eq!(outcome, Outcome::Redirect("/livros".to_string()));

        let snap = d.store().snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title(), "DUNE");
        assert_eq!(snap[0].author(), "FRANK HERBERT");
        assert_eq!(snap[0].year(), 1965);
        assert_eq!(snap[0].id(), 1);
    }

    #[test]
    fn test_create_missing_fields() {
        let d = dispatcher();
        for form in [
            CatalogForm::create("", "X", "2000"),
            CatalogForm::create("X", "  ", "2000"),
            CatalogForm::create("X", "Y", ""),
            CatalogForm::default(),
        ] {
            let outcome = d.submit(&form);
            assert_eq!(outcome.error(), Some("all fields are required"));
        }
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_create_year_not_a_number() {
        let d = dispatcher();
        let outcome = d.submit(&CatalogForm::create("X", "Y", "abc"));
        assert_eq!(outcome.error(), Some("year must be a number"));
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_create_padded_year_is_not_a_number() {
        let d = dispatcher();
        for year in [" 1965 ", "1965 ", "\t1965"] {
            let outcome = d.submit(&CatalogForm::create("X", "Y", year));
            assert_eq!(outcome.error(), Some("year must be a number"));
        }
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_create_non_positive_year() {
        let d = dispatcher();
        let outcome = d.submit(&CatalogForm::create("X", "Y", "-5"));
        assert_eq!(outcome.error(), Some("year is invalid"));
        let outcome = d.submit(&CatalogForm::create("X", "Y", "0"));
        assert_eq!(outcome.error(), Some("year is invalid"));
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_error_page_shows_existing_records() {
        let d = dispatcher();
        d.submit(&CatalogForm::create("Dune", "Frank Herbert", "1965"));

        match d.submit(&CatalogForm::create("X", "Y", "abc")) {
            Outcome::Page { fragment, error } => {
                assert!(fragment.contains("DUNE"));
                assert!(!fragment.contains("<strong>Title:</strong> X<"));
                assert_eq!(error.as_deref(), Some("year must be a number"));
            }
            other => panic!("expected page, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_existing() {
        let d = dispatcher();
        d.submit(&CatalogForm::create("A", "B", "1"));
        let outcome = d.submit(&CatalogForm::delete("1"));
        assert!(outcome.is_redirect());
        assert!(d.store().is_empty());
    }

    #[test]
    fn test_delete_bad_ids_are_silent() {
        let d = dispatcher();
        d.submit(&CatalogForm::create("A", "B", "1"));

        for raw in ["", "abc", "99", " 1", "-1"] {
            let outcome = d.submit(&CatalogForm::delete(raw));
            assert_eq!(outcome, Outcome::Redirect("/livros".to_string()));
        }

        let missing_id = CatalogForm {
            action: Some(DELETE_ACTION.to_string()),
            ..Default::default()
        };
        assert!(d.submit(&missing_id).is_redirect());

        assert_eq!(d.store().len(), 1);
    }

    #[test]
    fn test_other_action_is_create() {
        let d = dispatcher();
        let mut form = CatalogForm::create("A", "B", "2");
        form.action = Some("add".to_string());
        assert!(d.submit(&form).is_redirect());
        assert_eq!(d.store().len(), 1);
    }
}
