//! Browser bindings: mount the directory and route DOM events into
//! [`DirectoryView`].
//!
//! ```javascript
//! import init, { mount } from '/static/pkg/jobhunt_view.js';
//! await init();
//! mount('app');
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use jobhunt_core::{Company, CompanyId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Event, HtmlInputElement, Response};

use crate::render::{
    container_class, render_directory, render_rows, render_website_cell, row_dom_id,
    website_cell_dom_id, CONTAINER_ID, DARK_MODE_TOGGLE_ID, ROWS_ID, SEARCH_INPUT_ID,
    THEME_LABEL_ID,
};
use crate::{DirectoryView, RowAction, COMPANIES_PATH};

type SharedView = Rc<RefCell<DirectoryView>>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render the directory into the element with id `root_id` and start the
/// one-time load of the company list.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document available")?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("mount point #{root_id} not found")))?;

    let view: SharedView = Rc::new(RefCell::new(DirectoryView::new()));
    install(&document, &root, &view)?;

    spawn_local(load_companies(document, view));
    Ok(())
}

/// Render `view` into `root` and route the root's DOM events into it.
fn install(document: &Document, root: &Element, view: &SharedView) -> Result<(), JsValue> {
    root.set_inner_html(&render_directory(&view.borrow()));

    listen(root, "input", on_input(document.clone(), Rc::clone(view)))?;
    listen(root, "change", on_change(document.clone(), Rc::clone(view)))?;
    listen(root, "click", on_click(document.clone(), Rc::clone(view)))?;
    Ok(())
}

fn listen(
    root: &Element,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    root.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // The listeners live as long as the page.
    closure.forget();
    Ok(())
}

async fn load_companies(document: Document, view: SharedView) {
    match fetch_companies().await {
        Ok(companies) => {
            view.borrow_mut().load_succeeded(companies);
            if let Some(rows) = document.get_element_by_id(ROWS_ID) {
                rows.set_inner_html(&render_rows(&view.borrow()));
            }
        }
        Err(error) => {
            web_sys::console::error_2(&JsValue::from_str("Error fetching companies:"), &error);
        }
    }
}

async fn fetch_companies() -> Result<Vec<Company>, JsValue> {
    let window = web_sys::window().ok_or("no window available")?;
    let response: Response = JsFuture::from(window.fetch_with_str(COMPANIES_PATH))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "GET {COMPANIES_PATH} returned {}",
            response.status()
        )));
    }
    let body = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(body).map_err(JsValue::from)
}

fn target_input(event: &Event) -> Option<HtmlInputElement> {
    event.target()?.dyn_into::<HtmlInputElement>().ok()
}

fn on_input(document: Document, view: SharedView) -> impl FnMut(Event) {
    move |event| {
        let Some(input) = target_input(&event) else {
            return;
        };
        if input.id() != SEARCH_INPUT_ID {
            return;
        }
        view.borrow_mut().set_search(input.value());
        apply_search(&document, &view.borrow());
    }
}

fn on_change(document: Document, view: SharedView) -> impl FnMut(Event) {
    move |event| {
        let Some(input) = target_input(&event) else {
            return;
        };
        if input.id() != DARK_MODE_TOGGLE_ID {
            return;
        }
        view.borrow_mut().set_dark_mode(input.checked());
        let theme = view.borrow().theme();
        if let Some(container) = document.get_element_by_id(CONTAINER_ID) {
            container.set_class_name(&container_class(theme));
        }
        if let Some(label) = document.get_element_by_id(THEME_LABEL_ID) {
            label.set_text_content(Some(theme.label()));
        }
    }
}

fn on_click(document: Document, view: SharedView) -> impl FnMut(Event) {
    move |event| {
        let Some(button) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-action]").ok().flatten())
        else {
            return;
        };
        let (Some(action), Some(id)) = (
            button
                .get_attribute("data-action")
                .as_deref()
                .and_then(RowAction::from_attr),
            button.get_attribute("data-company-id"),
        ) else {
            return;
        };

        let changed = view.borrow_mut().apply_action(action, &CompanyId::new(id));
        let view = view.borrow();
        for id in &changed {
            refresh_website_cell(&document, &view, id);
        }
    }
}

fn apply_search(document: &Document, view: &DirectoryView) {
    for (company, visible) in view.row_visibility() {
        let Some(row) = document.get_element_by_id(&row_dom_id(&company.id)) else {
            continue;
        };
        let result = if visible {
            row.remove_attribute("hidden")
        } else {
            row.set_attribute("hidden", "")
        };
        if let Err(error) = result {
            web_sys::console::error_1(&error);
        }
    }
}

fn refresh_website_cell(document: &Document, view: &DirectoryView, id: &CompanyId) {
    let (Some(company), Some(cell)) = (
        view.company(id),
        document.get_element_by_id(&website_cell_dom_id(id)),
    ) else {
        return;
    };
    cell.set_inner_html(&render_website_cell(company, view.is_expanded(id)));
}
