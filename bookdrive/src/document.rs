//! Markdown rendering of search results and multipart packaging for upload.

use serde_json::json;

use crate::gateway::Book;
use crate::gateway::NO_DESCRIPTION;

pub(crate) const DOCUMENT_NAME: &str = "books.md";
pub(crate) const DOCUMENT_MIME_TYPE: &str = "text/markdown";

/// Fixed multipart/related boundary shared with the upload request's
/// Content-Type header.
///
/// The boundary is not escaped or randomized, so a book whose title or
/// description contains the literal boundary line would corrupt the
/// body. Catalog data has never tripped this; a randomized boundary
/// would close the gap if it ever does.
pub(crate) const MULTIPART_BOUNDARY: &str = "foo_bar_baz";

const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Render the book list as a markdown document, one section per book in
/// list order.
pub(crate) fn render_markdown(books: &[Book]) -> String {
    let mut content = String::from("# Books List\n\n");

    for book in books {
        let authors = match &book.author_name {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => UNKNOWN_AUTHOR.to_string(),
        };

        content.push_str(&format!("## {}\n", book.title));
        content.push_str(&format!("**Author(s)**: {authors}\n\n"));
        content.push_str(&format!("**Description**: {}\n\n", book.description));
        content.push_str(&format!("[Read more]({})\n\n", book.url));
        content.push_str("---\n\n");
    }

    content
}

/// Package the rendered document into a two-part multipart/related body:
/// a JSON metadata record naming the file, then the markdown content.
pub(crate) fn multipart_related_body(content: &str) -> String {
    let metadata = json!({
        "name": DOCUMENT_NAME,
        "mimeType": DOCUMENT_MIME_TYPE,
    });

    format!(
        "--{MULTIPART_BOUNDARY}\nContent-Type: application/json; charset=UTF-8\n\n{metadata}\n\
        --{MULTIPART_BOUNDARY}\nContent-Type: {DOCUMENT_MIME_TYPE}\n\n{content}\n--{MULTIPART_BOUNDARY}--"
    )
}
