use crate::i18n;
use crate::motion::{self, Motion};
use pokeguess_game::CapturedCreature;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTile {
    pub key: &'static str,
    pub label: String,
    pub value: String,
    pub motion: Motion,
}

/// Resolved strings for one render of the capture dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureViewModel {
    pub title: String,
    pub name: String,
    pub image: String,
    pub image_alt: String,
    pub tiles: [AttributeTile; 4],
    pub close_label: String,
    pub close_aria: String,
    pub new_game_label: String,
}

fn tile(index: usize, key: &'static str, value: String) -> AttributeTile {
    AttributeTile {
        key,
        label: i18n::t(&format!("capture.labels.{key}")),
        value,
        motion: motion::tile(index),
    }
}

pub fn build_capture_viewmodel(creature: &CapturedCreature) -> CaptureViewModel {
    CaptureViewModel {
        title: i18n::t("capture.title"),
        name: creature.display_name(),
        image: creature.image.clone(),
        image_alt: creature.name.clone(),
        tiles: [
            tile(0, "type", creature.type_label()),
            tile(1, "generation", creature.generation_label()),
            tile(2, "color", creature.display_color()),
            tile(3, "habitat", creature.display_habitat()),
        ],
        close_label: i18n::t("dialogs.close"),
        close_aria: i18n::t("dialogs.close_aria"),
        new_game_label: i18n::t("dialogs.new_game"),
    }
}
