use crate::models::NoteId;

const EDITOR_TEMPLATE: &str = include_str!("editor.html");

/// Escapes text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Renders the self-contained editor page for a note.
///
/// The page carries the auto-sync script, so serving it is all the server
/// does for browser clients; everything afterwards is plain POSTs.
pub fn editor_page(id: &NoteId, content: &str) -> String {
    EDITOR_TEMPLATE
        .replace("{{note_id}}", &escape_html(id.as_str()))
        .replace("{{content}}", &escape_html(content))
}
