use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::animation::tilt::ElementBox;
use crate::error::PlatformError;

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

/// Viewport-relative top edge of each section, in the order given. Sections
/// that are not in the document are skipped.
pub fn section_tops(ids: &[&'static str]) -> Result<Vec<(&'static str, f64)>, PlatformError> {
    let document = document()?;
    Ok(ids
        .iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .map(|element| (*id, element.get_bounding_client_rect().top()))
        })
        .collect())
}

pub fn scroll_to_top() -> Result<(), PlatformError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Adds or removes a class on `<html>`.
pub fn set_root_class(class: &str, enabled: bool) -> Result<(), PlatformError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| PlatformError::MissingElement("html".to_string()))?;
    root.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

pub fn element_box(element: &Element) -> ElementBox {
    let rect = element.get_bounding_client_rect();
    ElementBox {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
