use crate::app::App;
use crate::constants::{ADD_TEAM_ID, FIELD_ATTR, GRID_ID, THEME_TOGGLE_ID};
use crate::dom;
use crate::markup::{CardAction, LABEL_FIELD, TIME_FIELDS};
use std::cell::RefCell;
use std::rc::Rc;
use timer_core::{hms_to_seconds, parse_time_field};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Seconds typed into an idle card's hour/minute/second inputs. Empty or
/// non-numeric fields count as zero.
fn typed_seconds(card: &web::Element) -> u32 {
    let [h, m, s] = TIME_FIELDS.map(|(field, _)| {
        dom::input_value(card, &format!("[{FIELD_ATTR}=\"{field}\"]"))
            .map(|text| parse_time_field(&text))
            .unwrap_or(0)
    });
    hms_to_seconds(h, m, s)
}

pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) -> anyhow::Result<()> {
    let grid = dom::element_by_id(document, GRID_ID)?;
    wire_card_clicks(&grid, app);
    wire_label_edits(&grid, app);

    let app_add = app.clone();
    dom::add_click_listener(document, ADD_TEAM_ID, move || {
        app_add.borrow_mut().add_team();
    });

    let app_theme = app.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        app_theme.borrow_mut().cycle_theme();
    });
    Ok(())
}

// One delegated listener for every button on every card
fn wire_card_clicks(grid: &web::Element, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    dom::listen(grid, "click", move |ev: web::MouseEvent| {
        app.borrow().unlock_audio();
        let Some(action) = dom::event_action(&ev).as_deref().and_then(CardAction::parse) else {
            return;
        };
        let Some((card, id)) = dom::event_card(&ev) else {
            return;
        };
        app.borrow_mut().card_action(id, action, || typed_seconds(&card));
    });
}

fn wire_label_edits(grid: &web::Element, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    dom::listen(grid, "change", move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        if input.get_attribute(FIELD_ATTR).as_deref() != Some(LABEL_FIELD) {
            return;
        }
        if let Some((_, id)) = dom::event_card(&ev) {
            app.borrow_mut().rename(id, &input.value());
        }
    });
}
