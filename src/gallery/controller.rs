//! DOM wiring for the gallery
//!
//! Renders the project grid and hooks up the filter bar, card tilt, glitch
//! headline, smooth anchor scrolling and the contact dialog. Elements missing
//! from the page leave that feature off.

use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlDialogElement, HtmlElement, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

use super::data::{Filter, ProjectRecord, filter_records, load_projects};
use super::effects;
use super::markup;

/// Gallery glue. Owns the glitch timer handle so the page can shut it down.
pub struct GalleryController {
    glitch_interval: Option<i32>,
}

impl GalleryController {
    /// Render the initial grid and attach all listeners.
    pub fn init() -> Self {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let records = Rc::new(load_projects());
        render_grid(&document, &records, Some(Filter::All));
        setup_filters(&document, Rc::clone(&records));
        setup_smooth_scroll(&document);
        let glitch_interval = setup_glitch(&window, &document);
        setup_contact(&document);

        Self { glitch_interval }
    }

    /// Cancel the glitch timer. Listeners stay attached; they are inert once
    /// the page is going away.
    pub fn stop(&mut self) {
        if let (Some(handle), Some(window)) = (self.glitch_interval.take(), web_sys::window()) {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// Replace the grid contents with the records passing `filter`, then re-attach
/// the tilt handlers the rebuild discarded. `None` (an unrecognized
/// `data-filter` value) renders an empty grid.
fn render_grid(document: &Document, records: &[ProjectRecord], filter: Option<Filter>) {
    if let Some(grid) = document.query_selector(".grid-container").ok().flatten() {
        let html = match filter {
            Some(f) => markup::grid_markup(filter_records(records, f)),
            None => String::new(),
        };
        grid.set_inner_html(&html);

        attach_tilt(document);
    }
}

fn attach_tilt(document: &Document) {
    if let Ok(cards) = document.query_selector_all(".project-card") {
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                hook_card_tilt(&card);
            }
        }
    }
}

fn hook_card_tilt(card: &HtmlElement) {
    {
        let el = card.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = el.get_bounding_client_rect();
            let x = (event.client_x() as f64 - rect.left()) as f32;
            let y = (event.client_y() as f64 - rect.top()) as f32;
            let transform = effects::tilt_transform(x, y, rect.width() as f32, rect.height() as f32);
            let _ = el.style().set_property("transform", &transform);
        });
        let _ = card.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let el = card.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let _ = el.style().set_property("transform", effects::TILT_REST);
        });
        let _ = card.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_filters(document: &Document, records: Rc<Vec<ProjectRecord>>) {
    if let Ok(buttons) = document.query_selector_all(".filter-btn") {
        for i in 0..buttons.length() {
            if let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                hook_filter_button(document, &records, &btn);
            }
        }
    }
}

fn hook_filter_button(document: &Document, records: &Rc<Vec<ProjectRecord>>, btn: &Element) {
    let document = document.clone();
    let records = Rc::clone(records);
    let button = btn.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        // Move the active marker from the previous button to this one.
        if let Some(active) = document.query_selector(".filter-btn.active").ok().flatten() {
            let _ = active.class_list().remove_1("active");
        }
        let _ = button.class_list().add_1("active");

        let filter = button
            .get_attribute("data-filter")
            .and_then(|v| Filter::parse(&v));
        render_grid(&document, &records, filter);
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Start the headline scramble timer. Returns the interval handle, or `None`
/// when the page has no headline.
fn setup_glitch(window: &Window, document: &Document) -> Option<i32> {
    let el: HtmlElement = document
        .query_selector(".glitch-text")
        .ok()
        .flatten()?
        .dyn_into()
        .ok()?;
    let original = match el.get_attribute("data-text") {
        Some(text) if !text.is_empty() => text,
        _ => el.inner_text(),
    };

    // One reusable restore callback, re-scheduled after every scramble pass.
    let restore_el = el.clone();
    let restore_text = original.clone();
    let restore = Closure::<dyn FnMut()>::new(move || {
        restore_el.set_inner_text(&restore_text);
    });

    let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
    let timer_window = window.clone();
    let scramble_pass = Closure::<dyn FnMut()>::new(move || {
        el.set_inner_text(&effects::scramble(&original, &mut rng));
        let _ = timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.as_ref().unchecked_ref(),
            effects::GLITCH_RESTORE_MS,
        );
    });

    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            scramble_pass.as_ref().unchecked_ref(),
            effects::GLITCH_INTERVAL_MS,
        )
        .ok();
    scramble_pass.forget();
    handle
}

fn setup_smooth_scroll(document: &Document) {
    if let Ok(anchors) = document.query_selector_all(r##"a[href^="#"]"##) {
        for i in 0..anchors.length() {
            if let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                hook_anchor_scroll(document, &anchor);
            }
        }
    }
}

fn hook_anchor_scroll(document: &Document, anchor: &Element) {
    let document = document.clone();
    let link = anchor.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        event.prevent_default();
        if let Some(href) = link.get_attribute("href") {
            if let Some(target) = document.query_selector(&href).ok().flatten() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    });
    let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_contact(document: &Document) {
    let btn = document.get_element_by_id("contact-trigger");
    let modal = document
        .get_element_by_id("contact-modal")
        .and_then(|el| el.dyn_into::<HtmlDialogElement>().ok());

    if let (Some(btn), Some(modal)) = (btn, modal) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let _ = modal.show_modal();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
