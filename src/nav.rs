use crate::constants::*;
use crate::core::nav::{link_states, LinkHighlighter, NavLink};
use crate::core::rotation::Face;
use crate::dom;
use web_sys as web;

/// The four corner anchors.
pub struct DomNavLinks {
    links: Vec<NavLink>,
    elements: Vec<Option<web::HtmlElement>>,
    // `None` is a valid state (all shown), so track "never applied" separately
    last: Option<Option<Face>>,
}

impl DomNavLinks {
    /// Fill in text and targets and show every link.
    pub fn install(document: &web::Document, links: Vec<NavLink>) -> Self {
        let elements: Vec<Option<web::HtmlElement>> = links
            .iter()
            .map(|l| {
                let el = dom::html_element(document, l.corner.element_id());
                match &el {
                    Some(el) => {
                        _ = el.set_attribute("href", &l.href);
                        _ = el.style().set_property("pointer-events", "auto");
                    }
                    None => log::warn!("[nav] missing #{}", l.corner.element_id()),
                }
                el
            })
            .collect();
        let mut nav = Self {
            links,
            elements,
            last: None,
        };
        nav.apply(None);
        nav
    }

    fn apply(&mut self, face: Option<Face>) {
        for (state, el) in link_states(&self.links, face).iter().zip(&self.elements) {
            let Some(el) = el else { continue };
            let style = el.style();
            if state.visible {
                el.set_text_content(Some(&state.link.label));
                _ = el.class_list().add_1(LINK_VISIBLE_CLASS);
                _ = style.set_property("background-color", LINK_SHOWN_BG);
                _ = style.set_property("color", LINK_SHOWN_FG);
            } else {
                el.set_text_content(Some(""));
                _ = el.class_list().remove_1(LINK_VISIBLE_CLASS);
                _ = style.set_property("background-color", LINK_HIDDEN_BG);
                _ = style.set_property("color", LINK_HIDDEN_FG);
            }
        }
        self.last = Some(face);
    }
}

impl LinkHighlighter for DomNavLinks {
    fn highlight(&mut self, face: Option<Face>) {
        if self.last != Some(face) {
            self.apply(face);
        }
    }
}
