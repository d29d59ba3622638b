//! Утилиты для таблиц: изменение ширины колонок мышью.
//!
//! Заголовок колонки помечается классом `resizable` и атрибутом
//! `data-column-id`:
//!
//! ```html
//! <th class="resizable" data-column-id="sku">SKU</th>
//! ```
//!
//! После отпускания мыши новая ширина передаётся в callback; хранением
//! занимается вызывающий код (обычно `TableState::resize_column`).

use std::cell::{Cell, RefCell};

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent as WebMouseEvent};

/// Ширины одного перетаскивания; DOM не трогает.
#[derive(Debug, Clone, PartialEq)]
struct ResizeDrag {
    column_id: String,
    start_x: i32,
    start_width: i32,
    width: i32,
    min_width: i32,
}

impl ResizeDrag {
    fn start(column_id: String, start_x: i32, start_width: i32, min_width: i32) -> Self {
        Self {
            column_id,
            start_x,
            start_width,
            width: start_width,
            min_width,
        }
    }

    /// New width for the pointer at `client_x`, never below `min_width`.
    fn move_to(&mut self, client_x: i32) -> i32 {
        self.width = (self.start_width + client_x - self.start_x).max(self.min_width);
        self.width
    }

    /// `(column_id, width)` to report, `None` if the width did not change.
    fn finish(self) -> Option<(String, f64)> {
        (self.width != self.start_width).then(|| (self.column_id, self.width as f64))
    }
}

#[derive(Default)]
struct DragState {
    active: Option<HtmlElement>,
    drag: Option<ResizeDrag>,
    on_resize: Option<Callback<(String, f64)>>,
}

thread_local! {
    // Одно перетаскивание за раз на всю страницу.
    static DRAG: RefCell<DragState> = RefCell::new(DragState::default());
    static DOCUMENT_LISTENERS: Cell<bool> = const { Cell::new(false) };
}

fn set_width(th: &HtmlElement, width: i32) {
    let style = th.style();
    let _ = style.set_property("width", &format!("{}px", width));
    let _ = style.set_property("min-width", &format!("{}px", width));
}

fn body_class(add: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let classes = body.class_list();
        let _ = if add {
            classes.add_1("resizing-column")
        } else {
            classes.remove_1("resizing-column")
        };
    }
}

fn column_id_of(th: &Element) -> Option<String> {
    th.get_attribute("data-column-id").or_else(|| {
        th.query_selector("[data-column-id]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("data-column-id"))
    })
}

/// Добавляет resize-handle к каждому заголовку `th.resizable` таблицы
/// `table_id`. Ширина не опускается ниже `min_width`; по окончании
/// перетаскивания вызывается `on_resize(column_id, width)`.
///
/// Повторный вызов безопасен: заголовки с handle пропускаются.
pub fn init_column_resize(table_id: &str, min_width: f64, on_resize: Callback<(String, f64)>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(table) = document.get_element_by_id(table_id) else {
        return;
    };
    let Ok(headers) = table.query_selector_all("th.resizable") else {
        return;
    };
    let min_width = min_width.round() as i32;

    for i in 0..headers.length() {
        let Some(th) = headers.get(i) else { continue };
        let Ok(th) = th.dyn_into::<HtmlElement>() else {
            continue;
        };
        if th.query_selector(".resize-handle").ok().flatten().is_some() {
            continue;
        }
        let Ok(handle) = document.create_element("div") else {
            continue;
        };
        handle.set_class_name("resize-handle");

        let th_md = th.clone();
        let mousedown = Closure::wrap(Box::new(move |e: WebMouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            // The header may show another column since the handle was added:
            // Leptos reuses `<th>` elements when the column list changes.
            let Some(column_id) = column_id_of(&th_md) else {
                return;
            };
            DRAG.with(|drag| {
                let mut state = drag.borrow_mut();
                state.drag = Some(ResizeDrag::start(
                    column_id,
                    e.client_x(),
                    th_md.offset_width(),
                    min_width,
                ));
                state.on_resize = Some(on_resize);
                state.active = Some(th_md.clone());
            });
            body_class(true);
        }) as Box<dyn FnMut(WebMouseEvent)>);
        let _ = handle
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());
        mousedown.forget();

        let _ = th.append_child(&handle);
    }

    install_document_listeners(&document);
}

fn install_document_listeners(document: &web_sys::Document) {
    if DOCUMENT_LISTENERS.with(|installed| installed.replace(true)) {
        return;
    }

    let mousemove = Closure::wrap(Box::new(move |e: WebMouseEvent| {
        DRAG.with(|drag| {
            let mut state = drag.borrow_mut();
            let Some(th) = state.active.clone() else {
                return;
            };
            let Some(resize) = state.drag.as_mut() else {
                return;
            };
            let width = resize.move_to(e.client_x());
            set_width(&th, width);
        });
    }) as Box<dyn FnMut(WebMouseEvent)>);
    let _ =
        document.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());
    mousemove.forget();

    let mouseup = Closure::wrap(Box::new(move |_: WebMouseEvent| {
        let finished = DRAG.with(|drag| {
            let mut state = drag.borrow_mut();
            state.active.take()?;
            let resize = state.drag.take()?;
            let on_resize = state.on_resize.take()?;
            resize
                .finish()
                .map(|(column_id, width)| (on_resize, column_id, width))
        });
        body_class(false);
        if let Some((on_resize, column_id, width)) = finished {
            on_resize.run((column_id, width));
        }
    }) as Box<dyn FnMut(WebMouseEvent)>);
    let _ = document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());
    mouseup.forget();
}
