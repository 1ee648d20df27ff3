//! Dialog shown once the player has identified the hidden creature.
//!
//! Renders nothing without a creature. Every dismiss path (Close button,
//! corner button, backdrop, Escape) goes through one handler that prefers
//! the parent's `on_close` and otherwise hides the dialog locally.

mod focus;
mod interactions;
mod view;
mod view_model;

use crate::theme::palette;
use focus::{keydown_handler, use_focus_management};
use interactions::{dismiss_handler, report_mount};
use pokeguess_game::{CapturedCreature, Theme};
use std::rc::Rc;
use view::{ViewHandles, render_capture};
use yew::prelude::*;

pub use interactions::{DismissOutcome, MountDiagnostics, resolve_dismiss};
pub use view::CONTAINER_ID;
pub use view_model::{AttributeTile, CaptureViewModel, build_capture_viewmodel};

#[derive(Properties, Clone)]
pub struct Props {
    pub creature: Option<Rc<CapturedCreature>>,
    #[prop_or_default]
    pub theme: Theme,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or_default]
    pub on_new_game: Option<Callback<()>>,
    /// Receives invocability diagnostics on mount; defaults to the debug log.
    #[prop_or_default]
    pub on_mount: Option<Callback<MountDiagnostics>>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        let same_creature = match (&self.creature, &other.creature) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_creature
            && self.theme == other.theme
            && self.on_close == other.on_close
            && self.on_new_game == other.on_new_game
            && self.on_mount == other.on_mount
    }
}

#[function_component(CongratulationsModal)]
pub fn congratulations_modal(props: &Props) -> Html {
    let forced_hidden = use_state_eq(|| false);
    let container_ref = use_node_ref();
    let visible = props.creature.is_some();

    {
        let forced_hidden = forced_hidden.clone();
        use_effect_with(props.creature.as_ref().map(Rc::as_ptr), move |_| {
            forced_hidden.set(false);
        });
    }

    {
        let sink = props.on_mount.clone();
        use_effect_with(
            (visible, props.on_close.clone(), props.on_new_game.clone()),
            move |(visible, on_close, on_new_game)| {
                if *visible {
                    let diagnostics =
                        MountDiagnostics::inspect(on_close.as_ref(), on_new_game.as_ref());
                    report_mount(diagnostics, sink.as_ref());
                }
            },
        );
    }

    use_focus_management(visible && !*forced_hidden, container_ref.clone());

    let Some(creature) = props.creature.as_ref() else {
        return Html::default();
    };

    let dismiss = dismiss_handler(props.on_close.clone(), forced_hidden.clone());
    let vm = build_capture_viewmodel(creature);
    render_capture(
        &vm,
        palette(props.theme),
        ViewHandles {
            on_keydown: keydown_handler(container_ref.clone(), dismiss.clone()),
            dismiss,
            on_new_game: props.on_new_game.clone(),
            container_ref,
            forced_hidden: *forced_hidden,
        },
    )
}
