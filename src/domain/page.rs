//! Host page abstraction.
//!
//! The operations only ever read an input field and set the text of a result
//! element, so a page is modelled as those two capabilities. The CLI provides a
//! terminal-backed page, tests use [`MemoryPage`].

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

/// Elements of the host page the client reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Input holding the long URL to shorten.
    LongUrl,
    /// Input holding the short code to look up.
    ShortCode,
    /// Display for the shortening result.
    ShortResult,
    /// Display for the statistics result.
    StatsResult,
}

impl ElementId {
    /// Element id as it appears in the host page markup.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::LongUrl => "longUrl",
            ElementId::ShortCode => "shortCode",
            ElementId::ShortResult => "shortResult",
            ElementId::StatsResult => "statsResult",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface that owns input fields and result elements.
///
/// # Implementations
///
/// - [`MemoryPage`] - in-memory page for tests and embedding
/// - [`crate::infrastructure::terminal::TerminalPage`] - stdin/stdout page used by the CLI
pub trait Page: Send + Sync {
    /// Returns the current value of an input field, or `None` if the page has no such field.
    fn read_field(&self, id: ElementId) -> Option<String>;

    /// Replaces the text content of an element.
    fn write_text(&self, id: ElementId, text: &str);
}

#[derive(Debug, Default)]
struct MemoryPageInner {
    fields: HashMap<ElementId, String>,
    texts: HashMap<ElementId, String>,
    writes: HashMap<ElementId, usize>,
}

/// In-memory [`Page`] that records every write.
#[derive(Debug, Default)]
pub struct MemoryPage {
    inner: Mutex<MemoryPageInner>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an input field value, builder style.
    pub fn with_field(self, id: ElementId, value: impl Into<String>) -> Self {
        self.set_field(id, value);
        self
    }

    pub fn set_field(&self, id: ElementId, value: impl Into<String>) {
        self.inner.lock().fields.insert(id, value.into());
    }

    /// Current text of an element, `None` if it was never written.
    pub fn text(&self, id: ElementId) -> Option<String> {
        self.inner.lock().texts.get(&id).cloned()
    }

    /// Number of times an element has been written.
    pub fn write_count(&self, id: ElementId) -> usize {
        self.inner.lock().writes.get(&id).copied().unwrap_or(0)
    }
}

impl Page for MemoryPage {
    fn read_field(&self, id: ElementId) -> Option<String> {
        self.inner.lock().fields.get(&id).cloned()
    }

    fn write_text(&self, id: ElementId, text: &str) {
        let mut inner = self.inner.lock();
        inner.texts.insert(id, text.to_string());
        *inner.writes.entry(id).or_default() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_match_page_markup() {
        assert_eq!(ElementId::LongUrl.to_string(), "longUrl");
        assert_eq!(ElementId::ShortCode.to_string(), "shortCode");
        assert_eq!(ElementId::ShortResult.to_string(), "shortResult");
        assert_eq!(ElementId::StatsResult.to_string(), "statsResult");
    }

    #[test]
    fn test_memory_page_reads_fields() {
        let page = MemoryPage::new().with_field(ElementId::LongUrl, "https://example.com");

        assert_eq!(
            page.read_field(ElementId::LongUrl).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(page.read_field(ElementId::ShortCode), None);
    }

    #[test]
    fn test_memory_page_records_writes() {
        let page = MemoryPage::new();
        assert_eq!(page.text(ElementId::ShortResult), None);
        assert_eq!(page.write_count(ElementId::ShortResult), 0);

        page.write_text(ElementId::ShortResult, "first");
        page.write_text(ElementId::ShortResult, "second");

        assert_eq!(page.text(ElementId::ShortResult).as_deref(), Some("second"));
        assert_eq!(page.write_count(ElementId::ShortResult), 2);
        assert_eq!(page.write_count(ElementId::StatsResult), 0);
    }

    #[test]
    fn test_fields_and_texts_are_separate() {
        let page = MemoryPage::new().with_field(ElementId::ShortCode, "abc");
        page.write_text(ElementId::ShortCode, "overwritten display");

        assert_eq!(page.read_field(ElementId::ShortCode).as_deref(), Some("abc"));
    }
}
