use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str = "button:not([disabled]), [href], [tabindex]:not([tabindex='-1'])";

fn focusable_in(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Move focus into the dialog while it is visible and hand it back afterwards.
#[hook]
pub fn use_focus_management(visible: bool, container_ref: NodeRef) {
    use_effect_with((visible, container_ref), move |(visible, container_ref)| {
        let mut prev_focus: Option<web_sys::HtmlElement> = None;
        if cfg!(target_arch = "wasm32") && *visible {
            prev_focus = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.active_element())
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(first) = container_ref
                .cast::<web_sys::Element>()
                .and_then(|el| focusable_in(&el).into_iter().next())
            {
                let _ = first.focus();
            }
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Escape dismisses; Tab and Shift+Tab wrap inside the dialog.
pub fn keydown_handler(container_ref: NodeRef, dismiss: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        if e.key() == "Escape" {
            e.prevent_default();
            dismiss.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(container) = container_ref.cast::<web_sys::Element>() else {
            return;
        };
        let focusable = focusable_in(&container);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return;
        };
        let Some(active) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
        else {
            return;
        };
        let first_el: &web_sys::Element = first.unchecked_ref();
        let last_el: &web_sys::Element = last.unchecked_ref();
        if !container.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
        } else if e.shift_key() && active == *first_el {
            e.prevent_default();
            let _ = last.focus();
        } else if !e.shift_key() && active == *last_el {
            e.prevent_default();
            let _ = first.focus();
        }
    })
}
