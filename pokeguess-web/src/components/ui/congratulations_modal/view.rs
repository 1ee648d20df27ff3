use super::view_model::{AttributeTile, CaptureViewModel};
use crate::motion;
use crate::theme::ThemePalette;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

pub const CONTAINER_ID: &str = "congratulations-modal";
const TITLE_ID: &str = "congratulations-title";

pub struct ViewHandles {
    pub dismiss: Callback<()>,
    pub on_new_game: Option<Callback<()>>,
    pub on_keydown: Callback<KeyboardEvent>,
    pub container_ref: NodeRef,
    pub forced_hidden: bool,
}

fn render_tile(tile: &AttributeTile, palette: &ThemePalette) -> Html {
    html! {
        <div
            class={format!("capture-tile rounded-full p-3 text-center shadow-sm {}", palette.tile)}
            data-tile={tile.key}
            style={tile.motion.style()}
        >
            <span class={format!("font-medium {}", palette.tile_label)}>{ tile.label.clone() }</span>
            {" "}
            <span class={format!("tile-value {}", palette.tile_value)}>{ tile.value.clone() }</span>
        </div>
    }
}

pub fn render_capture(vm: &CaptureViewModel, palette: &ThemePalette, handles: ViewHandles) -> Html {
    let on_dismiss_click = {
        let dismiss = handles.dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };
    let on_new_game_click = handles
        .on_new_game
        .map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
    let new_game_disabled = on_new_game_click.is_none();
    let container_style = handles
        .forced_hidden
        .then(|| AttrValue::from("display: none"));

    html! {
        <div
            id={CONTAINER_ID}
            class="congratulations-modal-container fixed inset-0 flex items-center justify-center z-50 px-4 py-5"
            style={container_style}
            ref={handles.container_ref}
            onkeydown={handles.on_keydown}
        >
            <style>{ motion::keyframes_css() }</style>
            <div
                class="capture-backdrop fixed inset-0 z-0 bg-black/50 backdrop-blur-xs"
                aria-hidden="true"
                style={motion::BACKDROP.style()}
                onclick={on_dismiss_click.clone()}
            />
            <div
                class={format!("capture-body relative z-10 rounded-xl p-4 sm:p-6 max-w-md w-full mx-auto shadow-2xl {}", palette.panel)}
                role="dialog"
                aria-modal="true"
                aria-labelledby={TITLE_ID}
                style={motion::BODY.style()}
            >
                <div class="text-center">
                    <h3 id={TITLE_ID} class={format!("text-lg sm:text-xl font-bold mb-3 {}", palette.title)}>
                        { vm.title.clone() }
                    </h3>
                    <div class="relative">
                        <div class="w-28 h-28 sm:w-36 sm:h-36 mx-auto mb-4 sm:mb-5 relative z-10" style={motion::ARTWORK.style()}>
                            <img
                                src={vm.image.clone()}
                                alt={vm.image_alt.clone()}
                                class="pg-wiggle w-full h-full object-contain drop-shadow-lg"
                            />
                        </div>
                        <div
                            class={format!("capture-glow absolute inset-0 rounded-full blur-xl {}", palette.glow)}
                            aria-hidden="true"
                            style={motion::GLOW.style()}
                        />
                    </div>
                    <p
                        class={format!("capture-name text-xl sm:text-2xl font-bold mb-4 sm:mb-5 {}", palette.name)}
                        style={motion::NAME.style()}
                    >
                        { vm.name.clone() }
                    </p>
                    <div class="grid grid-cols-2 gap-3 sm:gap-4 mb-5 sm:mb-6 text-xs sm:text-sm">
                        { for vm.tiles.iter().map(|tile| render_tile(tile, palette)) }
                    </div>
                    <div class="flex gap-3 sm:gap-4">
                        <button
                            type="button"
                            data-action="close"
                            class={format!("pg-press flex-1 py-2.5 sm:py-3 px-4 sm:px-5 rounded-full transition-colors text-sm sm:text-base border font-medium shadow-sm {}", palette.secondary_button)}
                            onclick={on_dismiss_click.clone()}
                        >
                            { vm.close_label.clone() }
                        </button>
                        <button
                            type="button"
                            data-action="new-game"
                            class="pg-press flex-1 bg-red-500 hover:bg-red-600 text-white py-2.5 sm:py-3 px-4 sm:px-5 rounded-full transition-colors text-sm sm:text-base font-medium shadow-md"
                            onclick={on_new_game_click}
                            disabled={new_game_disabled}
                        >
                            { vm.new_game_label.clone() }
                        </button>
                    </div>
                </div>
            </div>
            <button
                type="button"
                data-action="corner-close"
                class="absolute top-2 right-2 p-2 bg-red-500 text-white rounded-full"
                style="z-index: 1000"
                aria-label={vm.close_aria.clone()}
                onclick={on_dismiss_click}
            >
                {"X"}
            </button>
        </div>
    }
}
