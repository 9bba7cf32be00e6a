use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, MouseEvent};

use crate::paint::PaintMode;
use crate::widget::{WidgetCore, WidgetSettings};

use super::renderer::DomRenderer;
use super::status::StatusLine;

// Selectors for the host page's static controls.
const GRID_CONTAINER: &str = ".grid-container";
const STATUS_AREA: &str = ".error-message";
const SIZE_INPUT: &str = ".grid__size";
const SIZE_FORM: &str = ".grid-range";
const DEFAULT_MODE_INPUT: &str = ".grid__default-mode";
const DARKEN_MODE_INPUT: &str = ".grid__darken-mode";
const RGB_MODE_INPUT: &str = ".grid__rgb-mode";
const RESET_BUTTON: &str = ".reset-button";

struct AppState {
    core: WidgetCore,
    renderer: DomRenderer,
    status: StatusLine,
    // Kept alive for as long as their DOM nodes exist. Hover closures are
    // replaced wholesale on every remount; control closures live forever.
    hover_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    control_closures: Vec<Closure<dyn FnMut(Event)>>,
}

type App = Rc<RefCell<AppState>>;

/// Mount the widget into the host page and bind all events.
///
/// Static controls are bound once here; per-cell hover handlers are re-bound
/// on every resize because the old nodes (and their listeners) are discarded
/// with the old grid.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let mut core = WidgetCore::new(WidgetSettings::default());
    core.set_rng_seed(js_sys::Date::now() as u32);

    let app: App = Rc::new(RefCell::new(AppState {
        core,
        renderer: DomRenderer::attach(&document, GRID_CONTAINER)?,
        status: StatusLine::attach(&document, STATUS_AREA)?,
        hover_closures: Vec::new(),
        control_closures: Vec::new(),
    }));

    remount_cells(&app)?;
    bind_controls(&app, &document)?;

    web_sys::console::log_1(
        &format!("sketchgrid mounted: {}x{} grid", app.borrow().core.size(), app.borrow().core.size()).into(),
    );

    Ok(())
}

/// Rebuild the cell elements from the current grid and re-bind one
/// hover-enter handler per cell.
fn remount_cells(app: &App) -> Result<(), JsValue> {
    let mut state = app.borrow_mut();

    let size = state.core.size();
    let cell_edge = state.core.cell_edge();
    state.renderer.mount(size, cell_edge)?;
    state.hover_closures.clear();

    let elements: Vec<_> = state.renderer.cell_elements().to_vec();
    for (idx, el) in elements.iter().enumerate() {
        let (row, col) = (idx as u32 / size, idx as u32 % size);

        let hover = {
            let app = Rc::clone(app);
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                let state = &mut *app.borrow_mut();
                if let Some(paint) = state.core.paint(row, col) {
                    log_dom_err(state.renderer.apply_paint(idx, &paint));
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        el.add_event_listener_with_callback("mouseenter", hover.as_ref().unchecked_ref())?;
        state.hover_closures.push(hover);
    }

    Ok(())
}

fn bind_controls(app: &App, document: &web_sys::Document) -> Result<(), JsValue> {
    bind_size_change(app, document)?;
    bind_mode_change(app, document, DEFAULT_MODE_INPUT, PaintMode::Default)?;
    bind_mode_change(app, document, DARKEN_MODE_INPUT, PaintMode::Darken)?;
    bind_mode_change(app, document, RGB_MODE_INPUT, PaintMode::Rgb)?;
    bind_reset_click(app, document)?;
    bind_form_submit(app, document)?;
    Ok(())
}

/// Size input: validate, then either rebuild the grid or surface the error.
/// Invalid input never reaches the grid; the old cells stay mounted.
fn bind_size_change(app: &App, document: &web_sys::Document) -> Result<(), JsValue> {
    let input = document
        .query_selector(SIZE_INPUT)?
        .ok_or_else(|| JsValue::from_str(SIZE_INPUT))?;

    let handler = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |e: Event| {
            let raw = match e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                Some(input) => input.value(),
                None => return,
            };

            // The borrow must end before remount_cells re-borrows.
            let outcome = app.borrow_mut().core.resize(&raw);
            match outcome {
                Ok(_) => log_dom_err(remount_cells(&app)),
                Err(err) => {
                    let state = app.borrow();
                    let display_ms = state.core.settings().error_display_ms;
                    log_dom_err(state.status.show_transient(err.message(), display_ms));
                }
            }
        }) as Box<dyn FnMut(Event)>)
    };

    input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
    app.borrow_mut().control_closures.push(handler);
    Ok(())
}

fn bind_mode_change(
    app: &App,
    document: &web_sys::Document,
    selector: &str,
    mode: PaintMode,
) -> Result<(), JsValue> {
    let control = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(selector))?;

    let handler = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            app.borrow_mut().core.set_mode(mode);
        }) as Box<dyn FnMut(Event)>)
    };

    control.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
    app.borrow_mut().control_closures.push(handler);
    Ok(())
}

fn bind_reset_click(app: &App, document: &web_sys::Document) -> Result<(), JsValue> {
    let button = document
        .query_selector(RESET_BUTTON)?
        .ok_or_else(|| JsValue::from_str(RESET_BUTTON))?;

    let handler = {
        let app = Rc::clone(app);
        Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let state = &mut *app.borrow_mut();
            state.core.reset();
            log_dom_err(state.renderer.clear_all());
        }) as Box<dyn FnMut(Event)>)
    };

    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    app.borrow_mut().control_closures.push(handler);
    Ok(())
}

/// The size input sits in a form; swallow submit so the page never reloads.
fn bind_form_submit(app: &App, document: &web_sys::Document) -> Result<(), JsValue> {
    let form = match document.query_selector(SIZE_FORM)? {
        Some(form) => form,
        None => return Ok(()),
    };

    let handler = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    app.borrow_mut().control_closures.push(handler);
    Ok(())
}

fn log_dom_err(result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::error_1(&err);
    }
}
