//! [`PageSurface`] over the live document.

use contracts::shared::surface::{Handler, PageSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

struct Listener {
    target: Element,
    event: String,
    closure: Closure<dyn FnMut()>,
}

#[derive(Clone)]
pub struct WebSurface {
    document: Document,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl WebSurface {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            document,
            listeners: Rc::new(RefCell::new(Vec::new())),
        })
    }
}

fn elements(list: Result<NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl PageSurface for WebSurface {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector))
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        element.closest(selector).ok().flatten()
    }

    fn children(&self, element: &Element) -> Vec<Element> {
        let children = element.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .collect()
    }

    fn attr(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn on(&self, element: &Element, event: &str, handler: Handler) {
        let closure = Closure::wrap(handler);
        if let Err(e) =
            element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach {} listener: {:?}", event, e);
            return;
        }
        self.listeners.borrow_mut().push(Listener {
            target: element.clone(),
            event: event.to_string(),
            closure,
        });
    }

    /// Direct lookup; ids that are not valid CSS selectors still resolve
    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn off_all(&self) {
        let listeners: Vec<Listener> = self.listeners.borrow_mut().drain(..).collect();
        for listener in &listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                &listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_by_id_accepts_non_selector_ids() {
        let surface = WebSurface::new().unwrap();
        let body = surface.document.body().unwrap();
        for id in ["1st-screen", "menu.v2", "a:b"] {
            let el = surface.document.create_element("section").unwrap();
            el.set_id(id);
            body.append_child(&el).unwrap();
            assert_eq!(surface.by_id(id), Some(el.clone()));
            body.remove_child(&el).unwrap();
        }
        assert_eq!(surface.by_id("absent"), None);
    }
}
