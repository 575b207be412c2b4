use crate::constants::{ACTION_ATTR, TIMER_ID_ATTR};
use timer_core::TimerId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// Attach a listener for the lifetime of the page. Events that are not an `E`
/// are skipped.
pub fn listen<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("{} listener error: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", move |_: web::MouseEvent| handler());
    }
}

fn closest(target: Option<web::EventTarget>, selector: &str) -> Option<web::Element> {
    target?
        .dyn_into::<web::Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Card element an event happened in, and the timer it shows.
pub fn event_card(ev: &web::Event) -> Option<(web::Element, TimerId)> {
    let card = closest(ev.target(), &format!("[{TIMER_ID_ATTR}]"))?;
    let id = card.get_attribute(TIMER_ID_ATTR)?.parse().ok()?;
    Some((card, TimerId(id)))
}

pub fn event_action(ev: &web::Event) -> Option<String> {
    closest(ev.target(), &format!("[{ACTION_ATTR}]"))?.get_attribute(ACTION_ATTR)
}

/// First element inside `scope` matching `selector`.
pub fn query(scope: &web::Element, selector: &str) -> Option<web::Element> {
    scope.query_selector(selector).ok().flatten()
}

/// Current text of an `<input>` inside `scope`, matched by selector.
pub fn input_value(scope: &web::Element, selector: &str) -> Option<String> {
    query(scope, selector)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}
