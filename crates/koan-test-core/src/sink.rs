//! Diagnostic sinks: where assertion feedback lands.

use crate::locale::Locale;
use crate::text::{TextCatalog, TextKey, format_template};
use std::sync::Mutex;

/// Destination for assertion diagnostics.
///
/// Every assertion evaluation calls [`DiagnosticSink::println`] exactly
/// once, after its verdict is computed. Implementations must accept any
/// key/argument combination the engine produces.
pub trait DiagnosticSink {
    fn println(&self, key: TextKey, args: &[String]);
}

/// Renders each diagnostic as one localized line on stdout.
pub struct ConsoleSink {
    catalog: TextCatalog,
    locale: Locale,
    color: bool,
}

impl ConsoleSink {
    #[must_use]
    pub const fn new(catalog: TextCatalog, locale: Locale, color: bool) -> Self {
        Self {
            catalog,
            locale,
            color,
        }
    }

    /// The final display form of one diagnostic.
    #[must_use]
    pub fn render(&self, key: TextKey, args: &[String]) -> String {
        format_template(self.catalog.resolve(key, self.locale), args)
    }
}

impl DiagnosticSink for ConsoleSink {
    fn println(&self, key: TextKey, args: &[String]) {
        let line = self.render(key, args);
        if self.color {
            if key.is_ok() {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                println!("\x1b[31m{line}\x1b[0m");
            }
        } else {
            println!("{line}");
        }
    }
}

/// Records diagnostics for later inspection.
///
/// Used by runners that batch feedback before display, and by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(TextKey, Vec<String>)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything printed so far, in emission order.
    #[must_use]
    pub fn messages(&self) -> Vec<(TextKey, Vec<String>)> {
        self.messages
            .lock()
            .map_or_else(|_| Vec::new(), |messages| messages.clone())
    }

    /// Render everything printed so far against one catalog and locale.
    #[must_use]
    pub fn rendered(&self, catalog: &TextCatalog, locale: Locale) -> Vec<String> {
        self.messages()
            .iter()
            .map(|(key, args)| format_template(catalog.resolve(*key, locale), args))
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn println(&self, key: TextKey, args: &[String]) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((key, args.to_vec()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.println(TextKey::OkAskedForLineInConsole, &[]);
        sink.println(TextKey::OkReturnedInt, &["f()".to_owned(), "1".to_owned()]);

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].0, TextKey::OkAskedForLineInConsole);
        assert_eq!(messages[1].1, vec!["f()".to_owned(), "1".to_owned()]);
    }

    #[test]
    fn test_memory_sink_renders_against_catalog() {
        let sink = MemorySink::new();
        sink.println(
            TextKey::OkDisplayedInConsole,
            &["Hello, Bob".to_owned()],
        );

        let rendered = sink.rendered(&TextCatalog::builtin(), Locale::En);
        assert_eq!(rendered, vec!["OK: displayed Hello, Bob in the console"]);
    }

    #[test]
    fn test_console_sink_render_localizes() {
        let sink = ConsoleSink::new(TextCatalog::builtin(), Locale::Fr, false);
        let line = sink.render(TextKey::OkDisplayedInConsole, &["Bonjour".to_owned()]);
        assert_eq!(line, "OK : Bonjour s'est affiché dans la console");
    }
}
