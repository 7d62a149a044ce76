// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle wrapper used for every user-facing string.

use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale of the strings shipped with the application.
pub const DEFAULT_LOCALE: &str = "fr";

pub struct I18n {
    bundle: FluentBundle<FluentResource>,
    locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n").field("locale", &self.locale).finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new().unwrap_or_else(|err| {
            tracing::warn!(%err, "localization unavailable, falling back to message keys");
            Self::empty(default_locale())
        })
    }
}

impl I18n {
    /// Loads the embedded `.ftl` file for [`DEFAULT_LOCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] if the file is missing or does not parse.
    pub fn new() -> Result<Self> {
        let filename = format!("{DEFAULT_LOCALE}.ftl");
        let file = Asset::get(&filename)
            .ok_or_else(|| Error::I18n(format!("missing embedded resource {filename}")))?;
        let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
        Self::from_source(default_locale(), source)
    }

    /// Builds a bundle from Fluent source text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::I18n`] when the source has syntax errors or
    /// redefines a message.
    pub fn from_source(locale: LanguageIdentifier, source: String) -> Result<Self> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::I18n(format!("{} parse error(s) in {locale} resource", errors.len()))
        })?;

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::I18n(format!("{errors:?}")))?;

        Ok(Self { bundle, locale })
    }

    fn empty(locale: LanguageIdentifier) -> Self {
        Self {
            bundle: FluentBundle::new(vec![locale.clone()]),
            locale,
        }
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    #[must_use]
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let value = self.bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}
