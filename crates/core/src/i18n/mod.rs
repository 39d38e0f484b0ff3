//! Localization context
//!
//! One [`LanguageContext`] is created at startup and handed to every page.
//! Clones share the selected language, so a toggle is seen everywhere at
//! once. Lookups are pure and never leave the process.

mod catalog;

use std::sync::Arc;

use deskmate_domain::Language;
use parking_lot::RwLock;
use tracing::info;

pub use catalog::keys;

/// Session-wide language selection
#[derive(Debug, Clone, Default)]
pub struct LanguageContext {
    current: Arc<RwLock<Language>>,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { current: Arc::new(RwLock::new(language)) }
    }

    pub fn language(&self) -> Language {
        *self.current.read()
    }

    /// Flip between the two languages and return the new one.
    pub fn toggle(&self) -> Language {
        let mut current = self.current.write();
        let next = current.toggled();
        *current = next;
        info!(language = %next, "language toggled");
        next
    }

    pub fn set(&self, language: Language) {
        *self.current.write() = language;
    }

    /// Look `key` up in the active language, falling back to the key.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator().t(key)
    }

    /// Snapshot of the active language for a render pass.
    pub fn translator(&self) -> Translator {
        Translator { language: self.language() }
    }
}

/// Copyable, immutable lookup bound to one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        catalog::lookup(key, self.language).unwrap_or(key)
    }
}
