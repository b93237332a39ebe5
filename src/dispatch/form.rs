//! Inbound catalog form

/// Value of the `action` field that selects deletion
pub const DELETE_ACTION: &str = "delete";

/// Fields a catalog POST may carry. Anything absent is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogForm {
    pub action: Option<String>,
    pub id: Option<String>,
    /// `titulo` on the wire
    pub title: Option<String>,
    /// `autor` on the wire
    pub author: Option<String>,
    /// `ano` on the wire
    pub year: Option<String>,
}

impl CatalogForm {
    /// Build a form from decoded key/value pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "action" => &mut form.action,
                "id" => &mut form.id,
                "titulo" => &mut form.title,
                "autor" => &mut form.author,
                "ano" => &mut form.year,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Form for a delete request
    pub fn delete(id: impl Into<String>) -> Self {
        Self {
            action: Some(DELETE_ACTION.to_string()),
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Form for a create request
    pub fn create(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            year: Some(year.into()),
            ..Default::default()
        }
    }

    /// Whether this form asks for a deletion
    pub fn is_delete(&self) -> bool {
        self.action.as_deref() == Some(DELETE_ACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_maps_wire_names() {
        let form = CatalogForm::from_pairs(pairs(&[
            ("titulo", "Dune"),
            ("autor", "Frank Herbert"),
            ("ano", "1965"),
            ("extra", "ignored"),
        ]));
        assert_eq!(form, CatalogForm::create("Dune", "Frank Herbert", "1965"));
    }

    #[test]
    fn test_first_repeated_key_wins() {
        let form = CatalogForm::from_pairs(pairs(&[
            ("action", "delete"),
            ("action", "x"),
            ("id", "1"),
            ("id", "2"),
        ]));
        assert!(form.is_delete());
        assert_eq!(form.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let form = CatalogForm::from_pairs(pairs(&[("action", "delete"), ("id", "")]));
        assert_eq!(form.id.as_deref(), Some(""));
    }
}
