//! Capability interface over the page's element tree.
//!
//! Demo components are written against this trait instead of `web-sys` so
//! they can run against the real document in the browser and against an
//! in-memory tree in unit tests. Selectors are plain CSS selectors; the
//! components only rely on `#id`, `.class` and compound `.a.b` forms.

/// Event handler registered through [`PageSurface::on`]
pub type Handler = Box<dyn FnMut()>;

pub trait PageSurface: Clone + 'static {
    type Element: Clone + PartialEq + 'static;

    /// First element in document order matching `selector`
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements in document order matching `selector`
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `root` matching `selector`
    fn query_within(&self, root: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Nearest ancestor of `element` (itself included) matching `selector`
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Direct element children
    fn children(&self, element: &Self::Element) -> Vec<Self::Element>;

    fn attr(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&self, element: &Self::Element, text: &str);

    /// Set an inline style property, e.g. `("opacity", "0")`
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);

    /// Attach `handler` to `event` on `element`
    fn on(&self, element: &Self::Element, event: &str, handler: Handler);

    /// Detach every handler attached through this surface
    fn off_all(&self);

    fn by_id(&self, id: &str) -> Option<Self::Element> {
        self.query(&format!("#{}", id))
    }

    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool) {
        if enabled {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
