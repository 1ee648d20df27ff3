use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
        rtl: false,
    },
    LocaleMeta {
        code: "ar",
        name: "العربية",
        rtl: true,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("es", include_str!("../../i18n/es.json")),
    ("fr", include_str!("../../i18n/fr.json")),
    ("ar", include_str!("../../i18n/ar.json")),
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub(super) fn is_rtl_lang(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang && meta.rtl)
}

pub(super) fn load_translations(lang: &str) -> Option<Value> {
    let (_, raw) = LOCALE_TABLE.iter().find(|(code, _)| *code == lang)?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("Locale {lang} failed to parse: {err}");
            None
        }
    }
}
