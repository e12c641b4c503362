//! Message keys, localized templates, and the text catalog.

use crate::locale::{Locale, Localizable};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Identifier of one diagnostic message template.
///
/// Closed set: every line of feedback the engine can emit goes through
/// one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TextKey {
    ExpectedToSeeInConsoleButSawNothing,
    ExpectedToSeeInConsoleButSawInstead,
    OkDisplayedInConsole,
    OkAskedForLineInConsole,
    ExpectedForUserToAnswerInConsole,
    ExpectedToReturnIntButReturnedNull,
    ExpectedToReturnIntButReturnedOtherType,
    ExpectedToReturnIntButReturned,
    OkReturnedInt,
    ExpectedToReturnStringButReturnedNull,
    ExpectedToReturnStringButReturnedOtherType,
    ExpectedToReturnStringButReturned,
    OkReturnedString,
}

impl TextKey {
    /// Whether this key reports a satisfied assertion.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(
            self,
            Self::OkDisplayedInConsole
                | Self::OkAskedForLineInConsole
                | Self::OkReturnedInt
                | Self::OkReturnedString
        )
    }
}

/// Errors raised while loading catalog overrides.
///
/// These are content bugs owned by the exercise author. They surface
/// loudly at load time, never as a false verdict.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("unknown locale '{0}' in catalog overrides")]
    UnknownLocale(String),
    #[error("unknown message key '{0}' in catalog overrides")]
    UnknownKey(String),
    #[error("message key '{key}' overridden for some locales but missing '{locale}'")]
    MissingLocale { key: TextKey, locale: Locale },
}

/// Builtin templates, one `(key, en, fr)` row per [`TextKey`].
const BUILTIN: [(TextKey, &str, &str); 13] = [
    (
        TextKey::ExpectedToSeeInConsoleButSawNothing,
        "Expected to see {0} in the console, but saw nothing",
        "{0} aurait dû s'afficher dans la console, mais rien ne s'est affiché",
    ),
    (
        TextKey::ExpectedToSeeInConsoleButSawInstead,
        "Expected to see {0} in the console, but saw {1} instead",
        "{0} aurait dû s'afficher dans la console, mais {1} s'est affiché à la place",
    ),
    (
        TextKey::OkDisplayedInConsole,
        "OK: displayed {0} in the console",
        "OK : {0} s'est affiché dans la console",
    ),
    (
        TextKey::OkAskedForLineInConsole,
        "OK: asked the user to answer in the console",
        "OK : le programme a demandé une réponse dans la console",
    ),
    (
        TextKey::ExpectedForUserToAnswerInConsole,
        "Expected the user to be asked to answer in the console",
        "Le programme aurait dû demander une réponse dans la console",
    ),
    (
        TextKey::ExpectedToReturnIntButReturnedNull,
        "Expected {0} to return the number {1}, but it returned nothing",
        "{0} aurait dû renvoyer le nombre {1}, mais n'a rien renvoyé",
    ),
    (
        TextKey::ExpectedToReturnIntButReturnedOtherType,
        "Expected {0} to return a number, but it returned a value of type {1}",
        "{0} aurait dû renvoyer un nombre, mais a renvoyé une valeur de type {1}",
    ),
    (
        TextKey::ExpectedToReturnIntButReturned,
        "Expected {0} to return {1}, but it returned {2}",
        "{0} aurait dû renvoyer {1}, mais a renvoyé {2}",
    ),
    (
        TextKey::OkReturnedInt,
        "OK: {0} returned the number {1}",
        "OK : {0} a renvoyé le nombre {1}",
    ),
    (
        TextKey::ExpectedToReturnStringButReturnedNull,
        "Expected {0} to return the text {1}, but it returned nothing",
        "{0} aurait dû renvoyer le texte {1}, mais n'a rien renvoyé",
    ),
    (
        TextKey::ExpectedToReturnStringButReturnedOtherType,
        "Expected {0} to return a text, but it returned a value of type {1}",
        "{0} aurait dû renvoyer un texte, mais a renvoyé une valeur de type {1}",
    ),
    (
        TextKey::ExpectedToReturnStringButReturned,
        "Expected {0} to return {1}, but it returned {2}",
        "{0} aurait dû renvoyer {1}, mais a renvoyé {2}",
    ),
    (
        TextKey::OkReturnedString,
        "OK: {0} returned the text {1}",
        "OK : {0} a renvoyé le texte {1}",
    ),
];

/// Static regex for positional `{0}`-style placeholders.
fn placeholder_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\d+)\}").ok()).as_ref()
}

/// Substitute positional `{0}`, `{1}`, ... placeholders with `args`.
///
/// Total: an out-of-range placeholder renders as the empty string and
/// extra arguments are ignored.
#[must_use]
pub fn format_template(template: &str, args: &[String]) -> String {
    let Some(re) = placeholder_regex() else {
        return template.to_owned();
    };

    re.replace_all(template, |caps: &regex::Captures<'_>| {
        caps.get(1)
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .and_then(|index| args.get(index))
            .cloned()
            .unwrap_or_default()
    })
    .into_owned()
}

/// Raw shape of a translator-supplied override file: locale -> key -> template.
type RawOverrides = HashMap<String, HashMap<String, String>>;

/// The full template table, one [`Localizable`] template per [`TextKey`].
#[derive(Debug, Clone)]
pub struct TextCatalog {
    entries: HashMap<TextKey, Localizable<String>>,
}

impl TextCatalog {
    /// The builtin catalog, complete for every key and locale.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(key, en, fr)| (key, Localizable::new(en.to_owned(), fr.to_owned())))
            .collect();
        Self { entries }
    }

    /// The builtin catalog with a translator-supplied override file
    /// merged on top.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, names an
    /// unknown locale or message key, or overrides a key for some
    /// locales but not all of them.
    pub fn with_overrides_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let mut catalog = Self::builtin();
        catalog.apply_overrides(&raw)?;
        Ok(catalog)
    }

    /// Merge YAML overrides (`locale -> KEY -> template`) into this
    /// catalog. A key that appears for one locale must appear for all:
    /// a partial entry would silently fall back for the other locales,
    /// which is the kind of content bug this check exists to catch.
    ///
    /// # Errors
    /// See [`TextCatalog::with_overrides_file`].
    pub fn apply_overrides(&mut self, raw: &str) -> Result<(), CatalogError> {
        let parsed: RawOverrides = serde_yml::from_str(raw)?;

        let mut staged: HashMap<TextKey, HashMap<Locale, String>> = HashMap::new();
        for (locale_name, templates) in parsed {
            let locale: Locale = locale_name
                .parse()
                .map_err(|_| CatalogError::UnknownLocale(locale_name.clone()))?;
            for (key_name, template) in templates {
                let key: TextKey = key_name
                    .parse()
                    .map_err(|_| CatalogError::UnknownKey(key_name.clone()))?;
                staged.entry(key).or_default().insert(locale, template);
            }
        }

        for (key, mut by_locale) in staged {
            let en = by_locale
                .remove(&Locale::En)
                .ok_or(CatalogError::MissingLocale {
                    key,
                    locale: Locale::En,
                })?;
            let fr = by_locale
                .remove(&Locale::Fr)
                .ok_or(CatalogError::MissingLocale {
                    key,
                    locale: Locale::Fr,
                })?;
            self.entries.insert(key, Localizable::new(en, fr));
        }

        Ok(())
    }

    /// The template for one key and locale.
    ///
    /// [`TextCatalog::builtin`] populates every key and overrides never
    /// remove one, so the fallback arm is unreachable.
    #[must_use]
    pub fn resolve(&self, key: TextKey, locale: Locale) -> &str {
        self.entries
            .get(&key)
            .map_or("", |template| template.get(locale).as_str())
    }
}

impl Default for TextCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_key_identifiers_round_trip() -> Result<(), strum::ParseError> {
        assert_eq!(
            TextKey::ExpectedToSeeInConsoleButSawNothing.to_string(),
            "EXPECTED_TO_SEE_IN_CONSOLE_BUT_SAW_NOTHING"
        );
        assert_eq!(
            "OK_RETURNED_INT".parse::<TextKey>()?,
            TextKey::OkReturnedInt
        );
        Ok(())
    }

    #[test]
    fn test_builtin_is_total() {
        let catalog = TextCatalog::builtin();
        for key in TextKey::iter() {
            for locale in Locale::ALL {
                assert!(
                    !catalog.resolve(key, locale).is_empty(),
                    "missing template for {key}/{locale}"
                );
            }
        }
    }

    #[test]
    fn test_format_template_substitutes_in_order() {
        assert_eq!(
            format_template("Expected {0}, saw {1}", &args(&["a", "b"])),
            "Expected a, saw b"
        );
    }

    #[test]
    fn test_format_template_repeated_placeholder() {
        assert_eq!(format_template("{0} and {0}", &args(&["x"])), "x and x");
    }

    #[test]
    fn test_format_template_out_of_range_renders_empty() {
        assert_eq!(format_template("saw {3}", &args(&["a"])), "saw ");
    }

    #[test]
    fn test_format_template_ignores_extra_args() {
        assert_eq!(format_template("just {0}", &args(&["a", "b"])), "just a");
    }

    #[test]
    fn test_apply_overrides_replaces_entry() -> Result<(), CatalogError> {
        let mut catalog = TextCatalog::builtin();
        catalog.apply_overrides(
            r"
en:
  OK_DISPLAYED_IN_CONSOLE: 'Great, {0} showed up'
fr:
  OK_DISPLAYED_IN_CONSOLE: 'Super, {0} est apparu'
",
        )?;

        assert_eq!(
            catalog.resolve(TextKey::OkDisplayedInConsole, Locale::En),
            "Great, {0} showed up"
        );
        // Untouched entries keep their builtin template.
        assert_eq!(
            catalog.resolve(TextKey::OkReturnedInt, Locale::En),
            "OK: {0} returned the number {1}"
        );
        Ok(())
    }

    #[test]
    fn test_apply_overrides_unknown_key_fails() {
        let mut catalog = TextCatalog::builtin();
        let err = catalog.apply_overrides("en:\n  NOT_A_KEY: 'x'\n");
        assert!(matches!(err, Err(CatalogError::UnknownKey(key)) if key == "NOT_A_KEY"));
    }

    #[test]
    fn test_apply_overrides_unknown_locale_fails() {
        let mut catalog = TextCatalog::builtin();
        let err = catalog.apply_overrides("de:\n  OK_RETURNED_INT: 'x'\n");
        assert!(matches!(err, Err(CatalogError::UnknownLocale(code)) if code == "de"));
    }

    #[test]
    fn test_apply_overrides_partial_key_fails() {
        let mut catalog = TextCatalog::builtin();
        let err = catalog.apply_overrides("en:\n  OK_RETURNED_INT: 'only english'\n");
        assert!(matches!(
            err,
            Err(CatalogError::MissingLocale {
                key: TextKey::OkReturnedInt,
                locale: Locale::Fr,
            })
        ));
    }

    #[test]
    fn test_with_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("texts.yaml");
        fs::write(
            &path,
            "en:\n  OK_RETURNED_INT: 'nice: {0} gave {1}'\nfr:\n  OK_RETURNED_INT: 'bien : {0} a donné {1}'\n",
        )?;

        let catalog = TextCatalog::with_overrides_file(&path)?;
        assert_eq!(
            catalog.resolve(TextKey::OkReturnedInt, Locale::Fr),
            "bien : {0} a donné {1}"
        );
        Ok(())
    }

    #[test]
    fn test_with_overrides_file_missing_file_fails() {
        let result = TextCatalog::with_overrides_file("/nonexistent/texts.yaml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
