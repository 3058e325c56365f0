//! Localized strings for the dashboard.
//!
//! Fluent files are embedded at compile time from `i18n/<lang>/salarios-ui.ftl`
//! (`en-US` is the fallback, `pt-BR` follows the dataset's own language) and
//! looked up through one global [`FluentLanguageLoader`]. Components call
//! [`init`] once and then use [`t!`](crate::t):
//!
//! ```ignore
//! use crate::t;
//! let heading = t!("filters-header");
//! let caption = t!("table-caption", count = rows);
//! ```
//!
//! The initial language comes from the OS locale list on desktop and from
//! `navigator.languages` on the web. A new locale needs only a new folder with
//! the same message ids and placeables; the i18n tests enforce that.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!` against [`LOADER`]. Message ids are checked against the
/// fallback file at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the file stem of every locale's `.ftl`.
const DOMAIN: &str = "salarios-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("fallback tag is valid");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load bundles for the user's preferred languages. Safe to call repeatedly.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n languages selected"),
            Err(err) => warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch the active language. Unparseable tags are ignored; tags without an
/// embedded bundle fall back to `en-US`.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(%tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
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
