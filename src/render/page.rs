//! Full HTML document around a catalog fragment

use super::escape::{escape, push_escaped};

/// Wrap a rendered catalog fragment into a complete page.
///
/// The page carries the create form (`titulo`, `autor`, `ano`) and, when
/// `error` is set, an error banner above the list. `fragment` is inserted
/// as-is; it must already be escaped.
pub fn page(fragment: &str, error: Option<&str>, base_path: &str) -> String {
    let action = escape(base_path);
    let mut html = String::with_capacity(fragment.len() + 1024);

    html.push_str("<!DOCTYPE html>\n<html lang='en'>\n<head>\n");
    html.push_str("<meta charset='utf-8'/>\n");
    html.push_str("<meta name='viewport' content='width=device-width, initial-scale=1'/>\n");
    html.push_str("<title>Book Catalog</title>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>Book Catalog</h1>\n");

    html.push_str("<form class='create-form' method='post' action='");
    html.push_str(&action);
    html.push_str("'>\n");
    html.push_str("<input type='text' name='titulo' placeholder='Title'/>\n");
    html.push_str("<input type='text' name='autor' placeholder='Author'/>\n");
    html.push_str("<input type='number' name='ano' placeholder='Year'/>\n");
    html.push_str("<button type='submit'>Add</button>\n");
    html.push_str("</form>\n");

    if let Some(message) = error {
        html.push_str("<p class='error'>");
        push_escaped(&mut html, message);
        html.push_str("</p>\n");
    }

    html.push_str("<section class='catalog'>");
    html.push_str(fragment);
    html.push_str("</section>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_without_error() {
        let html = page("<div class='book-card'></div>", None, "/livros");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("action='/livros'"));
        assert!(html.contains("name='titulo'"));
        assert!(html.contains("name='autor'"));
        assert!(html.contains("name='ano'"));
        assert!(html.contains("<div class='book-card'></div>"));
        assert!(!html.contains("class='error'"));
    }

    #[test]
    fn test_error_precedes_list() {
        let html = page("<div class='book-card'></div>", Some("year must be a number"), "/");
        let err = html.find("year must be a number").unwrap();
        let list = html.find("book-card").unwrap();
        assert!(err < list);
    }

    #[test]
    fn test_error_is_escaped() {
        let html = page("", Some("<b>"), "/");
        assert!(html.contains("<p class='error'>&lt;b&gt;</p>"));
    }
}
