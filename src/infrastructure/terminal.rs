//! Terminal-backed page used by the command-line client.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Stdout, Write};

use crate::domain::{ElementId, Page};

/// [`Page`] whose input fields are filled up front and whose displays are
/// printed as lines to a writer (stdout by default).
pub struct TerminalPage<W: Write + Send = Stdout> {
    fields: HashMap<ElementId, String>,
    out: Mutex<W>,
}

impl TerminalPage<Stdout> {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write + Send> TerminalPage<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            fields: HashMap::new(),
            out: Mutex::new(out),
        }
    }

    /// Fills an input field, builder style.
    pub fn with_field(mut self, id: ElementId, value: impl Into<String>) -> Self {
        self.fields.insert(id, value.into());
        self
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Page for TerminalPage<W> {
    fn read_field(&self, id: ElementId) -> Option<String> {
        self.fields.get(&id).cloned()
    }

    fn write_text(&self, id: ElementId, text: &str) {
        let mut out = self.out.lock();
        // A closed stdout (e.g. `| head`) is not worth failing the operation for.
        if let Err(e) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            tracing::debug!(element = %id, error = %e, "Failed to write page output");
        }
    }
}
