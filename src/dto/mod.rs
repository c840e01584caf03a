use serde::Deserialize;

/// URL-encoded body of a save request.
///
/// A missing `text` field reads as an empty string, which the service
/// treats as a delete.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveNoteForm {
    /// New note content
    #[serde(default)]
    pub text: String,
}
