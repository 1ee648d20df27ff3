//! Standalone host for the capture dialog.
//!
//! Cycles through the bundled roster so the dialog can be exercised without
//! the guessing game around it.

use crate::components::ui::congratulations_modal::CongratulationsModal;
use crate::i18n;
use crate::theme::{save_theme, saved_theme};
use once_cell::sync::Lazy;
use pokeguess_game::{CapturedCreature, load_roster};
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::html::TargetCast;
use yew::prelude::*;

static ROSTER: Lazy<Vec<CapturedCreature>> = Lazy::new(|| {
    load_roster(include_str!("../static/roster.json")).unwrap_or_else(|err| {
        log::error!("Bundled roster failed to load: {err:#}");
        Vec::new()
    })
});

/// Roster bundled with the front end; empty if it failed to parse.
#[must_use]
pub fn roster() -> &'static [CapturedCreature] {
    &ROSTER
}

/// Index of the creature shown after `current` when a new game starts.
#[must_use]
pub const fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// "Capture 2 of 6" in the active locale; `index` is zero-based.
#[must_use]
pub fn counter_label(index: usize, total: usize) -> String {
    let current = (index + 1).to_string();
    let total = total.to_string();
    let mut args = BTreeMap::new();
    args.insert("current", current.as_str());
    args.insert("total", total.as_str());
    i18n::tr("app.counter", Some(&args))
}

fn language_options(selected: &str) -> Html {
    i18n::locales()
        .iter()
        .map(|meta| {
            html! {
                <option value={meta.code} selected={meta.code == selected}>{ meta.name }</option>
            }
        })
        .collect()
}

#[function_component(App)]
pub fn app() -> Html {
    let index = use_state(|| 0_usize);
    let show = use_state(|| true);
    let theme = use_state(|| saved_theme().unwrap_or_default());
    let lang = use_state(i18n::current_lang);
    let creature = use_memo(*index, |idx| roster().get(*idx).cloned().map(Rc::new));

    if roster().is_empty() {
        return html! { <p class="error" role="alert">{ i18n::t("app.roster_error") }</p> };
    }

    let on_close = {
        let show = show.clone();
        Callback::from(move |()| show.set(false))
    };
    let on_new_game = {
        let index = index.clone();
        let show = show.clone();
        Callback::from(move |()| {
            let next = next_index(*index, roster().len());
            log::debug!("Starting new game with roster entry {next}");
            index.set(next);
            show.set(true);
        })
    };
    let on_show = {
        let show = show.clone();
        Callback::from(move |_: MouseEvent| show.set(true))
    };
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            save_theme(next);
            theme.set(next);
        })
    };

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let code = select.value();
                i18n::set_lang(&code);
                lang.set(i18n::current_lang());
            }
        })
    };

    let shown = if *show { (*creature).clone() } else { None };

    html! {
        <main
            class="min-h-screen flex flex-col items-center justify-center gap-4"
            data-theme={theme.as_str()}
            lang={(*lang).clone()}
            dir={if i18n::is_rtl() { "rtl" } else { "ltr" }}
        >
            <h1 class="text-2xl font-bold">{ i18n::t("app.title") }</h1>
            <p class="capture-counter">{ counter_label(*index, roster().len()) }</p>
            <div class="flex gap-3">
                <label for="lang-select" class="sr-only">{ i18n::t("app.language") }</label>
                <select id="lang-select" onchange={on_lang_change}>
                    { language_options(&lang) }
                </select>
                <button type="button" onclick={on_show}>{ i18n::t("app.show_capture") }</button>
                <button type="button" onclick={on_toggle_theme}>{ i18n::t("app.toggle_theme") }</button>
            </div>
            <CongratulationsModal
                creature={shown}
                theme={*theme}
                on_close={Some(on_close)}
                on_new_game={Some(on_new_game)}
            />
        </main>
    }
}
