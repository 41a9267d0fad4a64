//! Localized block copy for `blockshelf-ui`.
//!
//! Wiring:
//! - `i18n-embed` picks the language and loads assets
//! - `i18n_embed::fluent` formats messages
//! - `rust-embed` bakes the `.ftl` files into the binary
//! - `i18n-embed-fl` provides the compile-time checked `fl!` macro
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/blockshelf_ui.ftl   (fallback/reference)
//!   es-ES/blockshelf_ui.ftl
//! ```
//!
//! Usage in a block (after calling `i18n::init()` once at app start):
//! ```ignore
//! let label = crate::t!("cart-total");
//! let count = crate::t!("cart-items", count = 3);
//! ```
//!
//! Only chrome strings (labels, buttons, legends) are translated here. Copy
//! that the caller hands to a block (headlines, product names) is rendered
//! as given.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup through the shared loader.
///
/// ```ignore
/// t!("nav-home")
/// t!("product-off", percent = 25)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`. `fl!`
/// derives its domain from the package name with `-` turned into `_`, and
/// both must agree.
const DOMAIN: &str = "blockshelf_ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the OS/browser languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(tag, "ignoring unparseable language tag");
            return Ok(());
        }
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted, for the picker.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn every_language_ships_a_domain_file() {
        for lang in available_languages() {
            let path = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
        assert_eq!(DOMAIN, env!("CARGO_PKG_NAME").replace('-', "_"));
    }

    #[test]
    fn fallback_bundle_resolves_keys() {
        // Only the fallback is checked: tests share LOADER and may switch languages.
        init();
        let _ = set_language(FALLBACK);
        let s = fl!(&*LOADER, "cart-total");
        assert_eq!(s, "Total");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let _ = set_language(FALLBACK);
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
