mod bundle;
mod locales;
mod render;

pub use bundle::{current_lang, is_rtl, set_lang};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
