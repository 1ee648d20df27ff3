use futures::executor::block_on;
use pokeguess_game::{CapturedCreature, Generation, NO_SECOND_TYPE, Theme};
use pokeguess_web::components::ui::congratulations_modal::{CongratulationsModal, Props};
use std::rc::Rc;
use yew::{Callback, LocalServerRenderer};

fn creature(type2: &str) -> Rc<CapturedCreature> {
    Rc::new(CapturedCreature {
        name: "bulbasaur".into(),
        image: "bulba.png".into(),
        type1: "grass".into(),
        type2: type2.into(),
        generation: Generation::Number(1),
        color: "green".into(),
        habitat: "grassland".into(),
    })
}

fn render(props: Props) -> String {
    pokeguess_web::i18n::set_lang("en");
    block_on(LocalServerRenderer::<CongratulationsModal>::with_props(props).render())
}

#[test]
fn capture_dialog_lists_all_four_attribute_tiles() {
    let html = render(Props {
        creature: Some(creature("poison")),
        theme: Theme::Light,
        on_close: Some(Callback::noop()),
        on_new_game: Some(Callback::noop()),
        on_mount: None,
    });
    for key in ["type", "generation", "color", "habitat"] {
        assert!(html.contains(&format!("data-tile=\"{key}\"")), "missing {key}");
    }
    assert!(html.contains("Type:"));
    assert!(html.contains("Gen:"));
    assert!(html.contains("Green"));
    assert!(html.contains("Grassland"));
    assert!(html.contains("src=\"bulba.png\""));
    assert!(html.contains("alt=\"bulbasaur\""));
}

#[test]
fn capture_dialog_exposes_dialog_semantics() {
    let html = render(Props {
        creature: Some(creature(NO_SECOND_TYPE)),
        theme: Theme::Dark,
        on_close: None,
        on_new_game: None,
        on_mount: None,
    });
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("aria-label=\"Close dialog\""));
    assert!(html.contains("data-action=\"corner-close\""));
    assert!(html.contains("capture-backdrop"));
    assert!(!html.contains("Grass/"));
}

#[test]
fn capture_dialog_follows_active_locale() {
    pokeguess_web::i18n::set_lang("fr");
    let props = Props {
        creature: Some(creature("poison")),
        theme: Theme::Light,
        on_close: Some(Callback::noop()),
        on_new_game: Some(Callback::noop()),
        on_mount: None,
    };
    let html = block_on(LocalServerRenderer::<CongratulationsModal>::with_props(props).render());
    assert!(html.contains("Nouvelle partie"));
    assert!(html.contains("Fermer"));
    assert!(html.contains("Grass/Poison"));
    pokeguess_web::i18n::set_lang("en");
}

#[test]
fn absent_creature_renders_empty() {
    let html = render(Props {
        creature: None,
        theme: Theme::Dark,
        on_close: Some(Callback::noop()),
        on_new_game: Some(Callback::noop()),
        on_mount: None,
    });
    assert!(!html.contains("congratulations-modal"));
}
