//! # Book Record

use rand::Rng;
use serde::Serialize;

use super::errors::{CatalogError, CatalogResult};
use super::sequence::IdentifierSequence;

/// Fixed prefix of every generated code
pub const CODE_PREFIX: &str = "123";

/// Number of random digits appended after [`CODE_PREFIX`]
pub const CODE_RANDOM_DIGITS: usize = 9;

/// A single catalog entry
///
/// `id` and `code` are fixed at construction. The bibliographic fields may be
/// changed freely until the record is validated and handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: u64,
    title: String,
    author: String,
    year: i32,
    code: String,
}

impl Record {
    /// Build a record with a fresh id and code. Performs no validation.
    pub fn create(
        sequence: &IdentifierSequence,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: sequence.next(),
            title: title.into(),
            author: author.into(),
            year,
            code: generate_code(&mut rand::thread_rng()),
        }
    }

    /// Check the business rules, stopping at the first failure.
    ///
    /// Order: title, author, year.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::TitleRequired);
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::AuthorRequired);
        }
        if self.year <= 0 {
            return Err(CatalogError::InvalidYear);
        }
        Ok(())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }
}

/// Generate an ISBN-looking code: the prefix followed by random digits.
///
/// Not checksum-valid.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(CODE_PREFIX.len() + CODE_RANDOM_DIGITS);
    code.push_str(CODE_PREFIX);
    for _ in 0..CODE_RANDOM_DIGITS {
        let digit: u8 = rng.gen_range(0..10);
        code.push(char::from(b'0' + digit));
    }
    code
}
