// frontend/src/pages/mod.rs
//
// Page-level views. The backend renders several different pages that all
// load this bundle; instead of guessing which page we are on, every view
// declares the DOM ids it needs and the registry mounts only the views whose
// ids are all present.

pub mod home;
pub mod my_reservations;
pub mod staff;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::debug_log;

/// A self-contained piece of UI bound to elements of a server-rendered page.
pub trait PageView {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Ids that must exist for this view to mount.
    fn required_elements(&self) -> &'static [&'static str];

    /// Attach listeners and kick off the initial load. Only called when every
    /// required element is present.
    fn mount(&self, document: &Document) -> Result<(), JsValue>;
}

/// Ordered collection of views, built once at start-up.
#[derive(Default)]
pub struct PageRegistry {
    views: Vec<Box<dyn PageView>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every view this bundle knows about.
    pub fn standard() -> Self {
        Self::new()
            .register(home::SlotSearchView)
            .register(home::ReviewListView)
            .register(home::ReviewFormView)
            .register(my_reservations::MyReservationsView)
            .register(staff::SlotFormView)
            .register(staff::AllSlotsView)
            .register(staff::ReportsView)
    }

    pub fn register<V: PageView + 'static>(mut self, view: V) -> Self {
        self.views.push(Box::new(view));
        self
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Views whose required elements all satisfy `present`, in
    /// registration order.
    pub fn mountable<P>(&self, present: P) -> Vec<&dyn PageView>
    where
        P: Fn(&str) -> bool,
    {
        self.views
            .iter()
            .map(|v| &**v)
            .filter(|v| v.required_elements().iter().all(|&id| present(id)))
            .collect()
    }

    /// Mount every view the document supports. A failing view is logged and
    /// does not stop the others. Returns the names of the mounted views.
    pub fn mount_all(&self, document: &Document) -> Vec<&'static str> {
        let present = |id: &str| document.get_element_by_id(id).is_some();
        let mut mounted = Vec::new();
        for view in self.views.iter() {
            if let Some(_missing) = view.required_elements().iter().find(|&&id| !present(id)) {
                debug_log!("Skipping {}: #{} not on this page", view.name(), _missing);
                continue;
            }
            match view.mount(document) {
                Ok(()) => mounted.push(view.name()),
                Err(e) => web_sys::console::error_1(
                    &format!("Failed to mount {}: {:?}", view.name(), e).into(),
                ),
            }
        }
        debug_log!("Mounted {}/{} views: {:?}", mounted.len(), self.len(), mounted);
        mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use std::collections::HashSet;

    fn names(registry: &PageRegistry, ids: &[&str]) -> Vec<&'static str> {
        let present: HashSet<&str> = ids.iter().copied().collect();
        registry
            .mountable(|id| present.contains(id))
            .into_iter()
            .map(|v| v.name())
            .collect()
    }

    #[test]
    fn empty_page_mounts_nothing() {
        assert!(names(&PageRegistry::standard(), &[]).is_empty());
    }

    #[test]
    fn home_page_mounts_search_and_reviews() {
        let ids = [
            SLOTS_CONTAINER_ID,
            SEARCH_BUTTON_ID,
            REVIEWS_CONTAINER_ID,
            REVIEW_BUTTON_ID,
        ];
        assert_eq!(
            names(&PageRegistry::standard(), &ids),
            vec!["slot-search", "review-list", "review-form"]
        );
    }

    #[test]
    fn my_reservations_page() {
        assert_eq!(
            names(&PageRegistry::standard(), &[MY_RESERVATIONS_CONTAINER_ID]),
            vec!["my-reservations"]
        );
    }

    #[test]
    fn staff_dashboard_page() {
        let ids = [ADD_SLOT_BUTTON_ID, ALL_SLOTS_CONTAINER_ID, REPORT_OUTPUT_ID];
        assert_eq!(
            names(&PageRegistry::standard(), &ids),
            vec!["add-slot", "all-slots", "reports"]
        );
    }

    #[test]
    fn report_buttons_without_output_do_not_mount_reports() {
        let ids = [DAILY_REPORT_BUTTON_ID, WEEKLY_REPORT_BUTTON_ID];
        assert!(names(&PageRegistry::standard(), &ids).is_empty());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let registry = PageRegistry::new()
            .register(staff::ReportsView)
            .register(home::ReviewListView);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            names(&registry, &[REPORT_OUTPUT_ID, REVIEWS_CONTAINER_ID]),
            vec!["reports", "review-list"]
        );
    }
}
