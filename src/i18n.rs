// SPDX-License-Identifier: GPL-3.0-only

//! Internationalization support using fluent

use i18n_embed::{
    LanguageLoader,
    fluent::{FluentLanguageLoader, fluent_language_loader},
    unic_langid::LanguageIdentifier,
};
use rust_embed::RustEmbed;
use std::sync::LazyLock;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

pub static LANGUAGE_LOADER: LazyLock<FluentLanguageLoader> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    loader
        .load_fallback_language(&Localizations)
        .expect("Failed to load fallback language");
    loader
});

/// Initialize i18n with the given language preferences
pub fn init(requested_languages: &[LanguageIdentifier]) {
    if let Err(err) = i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, requested_languages) {
        tracing::warn!("Failed to load requested languages: {err}");
    }
}

/// Get a localized string by key
#[macro_export]
macro_rules! fl {
    ($key:expr) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key)
    };
    ($key:expr, $($arg:tt)*) => {
        i18n_embed_fl::fl!($crate::i18n::LANGUAGE_LOADER, $key, $($arg)*)
    };
}
