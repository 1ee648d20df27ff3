use yew::prelude::*;

/// What a dismiss request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The parent's close action was invoked.
    Delegated,
    /// No close action was available; the dialog hid itself.
    ForcedHidden,
}

/// Whether each action reference can be invoked, reported on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountDiagnostics {
    pub close_invocable: bool,
    pub new_game_invocable: bool,
}

impl MountDiagnostics {
    #[must_use]
    pub const fn inspect(
        on_close: Option<&Callback<()>>,
        on_new_game: Option<&Callback<()>>,
    ) -> Self {
        Self {
            close_invocable: on_close.is_some(),
            new_game_invocable: on_new_game.is_some(),
        }
    }
}

/// Invoke `on_close` when present; otherwise report that the dialog must hide itself.
pub fn resolve_dismiss(on_close: Option<&Callback<()>>) -> DismissOutcome {
    if let Some(cb) = on_close {
        cb.emit(());
        DismissOutcome::Delegated
    } else {
        log::error!("Capture dialog has no close action; hiding it locally");
        DismissOutcome::ForcedHidden
    }
}

/// Shared handler behind the close button, corner button, backdrop and Escape.
pub fn dismiss_handler(
    on_close: Option<Callback<()>>,
    forced_hidden: UseStateHandle<bool>,
) -> Callback<()> {
    Callback::from(move |()| {
        if resolve_dismiss(on_close.as_ref()) == DismissOutcome::ForcedHidden {
            forced_hidden.set(true);
        }
    })
}

/// Send the diagnostics to the injected sink, or to the debug log.
pub fn report_mount(diagnostics: MountDiagnostics, sink: Option<&Callback<MountDiagnostics>>) {
    match sink {
        Some(cb) => cb.emit(diagnostics),
        None => log::debug!(
            "Capture dialog mounted: close invocable={}, new game invocable={}",
            diagnostics.close_invocable,
            diagnostics.new_game_invocable
        ),
    }
}
