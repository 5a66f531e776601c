use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// What a tracker binds to. Anything falsy resolves to no elements.
#[derive(Clone, Debug, Default)]
pub enum Selector {
    #[default]
    None,
    /// CSS selector run through `querySelectorAll`.
    Query(String),
    Element(Element),
    Elements(Vec<Element>),
}

impl From<&str> for Selector {
    fn from(query: &str) -> Self {
        Selector::from(query.to_string())
    }
}

impl From<String> for Selector {
    fn from(query: String) -> Self {
        if query.is_empty() {
            Selector::None
        } else {
            Selector::Query(query)
        }
    }
}

impl From<Element> for Selector {
    fn from(el: Element) -> Self {
        Selector::Element(el)
    }
}

impl From<Option<Element>> for Selector {
    fn from(el: Option<Element>) -> Self {
        el.map_or(Selector::None, Selector::Element)
    }
}

impl From<Vec<Element>> for Selector {
    fn from(els: Vec<Element>) -> Self {
        Selector::Elements(els)
    }
}

impl Selector {
    /// Interprets a value handed over from JS: a selector string, an element,
    /// or any array-like (Array, NodeList, HTMLCollection, jQuery selection).
    pub fn from_js(value: &JsValue) -> Self {
        if !value.is_truthy() {
            return Selector::None;
        }
        if let Some(query) = value.as_string() {
            return Selector::from(query);
        }
        if let Some(el) = value.dyn_ref::<Element>() {
            return Selector::Element(el.clone());
        }
        if value.is_object() && Reflect::has(value, &JsValue::from_str("length")).unwrap_or(false) {
            let els = Array::from(value)
                .iter()
                .filter_map(|v| v.dyn_into::<Element>().ok())
                .collect();
            return Selector::Elements(els);
        }
        Selector::None
    }

    /// Flat, ordered element list. Invalid queries resolve to nothing.
    pub fn resolve(self) -> Vec<Element> {
        match self {
            Selector::None => Vec::new(),
            Selector::Element(el) => vec![el],
            Selector::Elements(els) => els,
            Selector::Query(query) => {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return Vec::new();
                };
                let Ok(list) = document.query_selector_all(&query) else {
                    return Vec::new();
                };
                (0..list.length())
                    .filter_map(|i| list.item(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_no_selector() {
        assert!(matches!(Selector::from(""), Selector::None));
        assert!(matches!(Selector::from(".pad"), Selector::Query(q) if q == ".pad"));
        assert!(matches!(Selector::from(None::<Element>), Selector::None));
    }

    #[test]
    fn empty_selectors_resolve_to_nothing() {
        assert!(Selector::None.resolve().is_empty());
        assert!(Selector::Elements(vec![]).resolve().is_empty());
    }
}
