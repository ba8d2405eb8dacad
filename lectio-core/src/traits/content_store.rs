use crate::errors::LectioResult;
use crate::models::ContentId;

/// External source of the actual content, used only to materialize
/// prefetch results.
pub trait IContentStore: Send + Sync {
    /// The ordered items of one section. An empty list means the content
    /// legitimately does not exist (e.g. past the end of a collection) and
    /// is not an error.
    fn fetch_section(&self, content: &ContentId) -> LectioResult<Vec<String>>;
}
