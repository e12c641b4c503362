//! Display locales and locale-keyed values.

use strum::{Display, EnumIter, EnumString};

/// A supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
}

impl Locale {
    /// Every supported locale, in catalog order.
    pub const ALL: [Self; 2] = [Self::En, Self::Fr];
}

/// A value with one variant per supported locale.
///
/// Totality is enforced by construction: [`Localizable::new`] takes one
/// value per locale, so [`Localizable::get`] can never miss. Values loaded
/// from data at runtime go through the fallible catalog path instead
/// (see [`crate::text::TextCatalog`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localizable<T> {
    en: T,
    fr: T,
}

impl<T> Localizable<T> {
    #[must_use]
    pub const fn new(en: T, fr: T) -> Self {
        Self { en, fr }
    }

    /// Resolve for one locale. Total: every locale has a value.
    #[must_use]
    pub const fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}

impl<T: Clone> Localizable<T> {
    /// A value identical in every locale.
    #[must_use]
    pub fn same(value: T) -> Self {
        Self {
            en: value.clone(),
            fr: value,
        }
    }
}
