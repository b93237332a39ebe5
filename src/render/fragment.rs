//! Catalog list markup

use crate::catalog::Record;

use super::escape::push_escaped;

/// Render one card per record, in the order given.
///
/// Each card holds a delete form posting back to `base_path`, followed by the
/// record's fields. Output depends only on the inputs.
pub fn render(records: &[Record], base_path: &str) -> String {
    let mut html = String::with_capacity(records.len() * 512);

    for record in records {
        html.push_str("<div class='book-card'>");

        html.push_str("<form class='delete-form' method='post' action='");
        push_escaped(&mut html, base_path);
        html.push_str("'>");
        html.push_str("<input type='hidden' name='action' value='delete'/>");
        html.push_str("<input type='hidden' name='id' value='");
        html.push_str(&record.id().to_string());
        html.push_str("'/>");
        html.push_str("<button type='submit' title='Delete'><i class='fas fa-trash'></i></button>");
        html.push_str("</form>");

        field(&mut html, "Title", record.title());
        field(&mut html, "Author", record.author());
        field(&mut html, "Year", &record.year().to_string());
        field(&mut html, "Code", record.code());
        field(&mut html, "ID", &record.id().to_string());

        html.push_str("</div>");
    }

    html
}

fn field(html: &mut String, label: &str, value: &str) {
    html.push_str("<p><strong>");
    html.push_str(label);
    html.push_str(":</strong> ");
    push_escaped(html, value);
    html.push_str("</p>");
}
