use crate::i18n::locales::{is_rtl_lang, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_KEY: &str = "pokeguess.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl: is_rtl_lang(lang),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::load_pref(LOCALE_KEY).unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the current language for internationalization
///
/// Unknown codes are ignored. In the browser this also updates the
/// `<html lang dir>` attributes and persists the choice.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::debug!("Ignoring unsupported locale {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
                let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
            });
        }
        crate::dom::store_pref(LOCALE_KEY, lang);
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    with_bundle(|bundle| bundle.rtl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("ar").expect("bundle should load");
        assert_eq!(bundle.lang, "ar");
        assert!(bundle.rtl);
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(!bundle.rtl);
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unsupported_locale_keeps_current() {
        set_lang("fr");
        set_lang("xx");
        assert_eq!(current_lang(), "fr");
        set_lang("en");
    }
}
