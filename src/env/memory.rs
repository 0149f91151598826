//! In-memory [`View`] for headless hosts and tests.

use super::view::{ElementId, ObserverOptions, RevealGroup, SectionBox, Tone, View};
use crate::validation::{FieldId, FormKind};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Snapshot of one status banner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Banner {
    pub text: String,
    pub tone: Option<Tone>,
    pub visible: bool,
}

/// Page state held in plain collections.
///
/// Error slots are bound for every validated reservation field; use
/// [`MemoryView::unbind_slot`] to model a page missing one.
#[derive(Clone, Debug)]
pub struct MemoryView {
    fields: HashMap<FieldId, String>,
    initial: HashMap<FieldId, String>,
    slots: BTreeMap<FieldId, String>,
    banners: HashMap<FormKind, Banner>,
    banner_scrolls: Vec<FormKind>,
    min_date: Option<NaiveDate>,
    scroll_requests: Vec<f64>,
    page_y: f64,
    viewport_width: f64,
    nav_height: f64,
    sections: Vec<SectionBox>,
    menu_open: bool,
    active_link: Option<String>,
    scroll_top_visible: bool,
    observers: Vec<(RevealGroup, ObserverOptions)>,
    classes: HashMap<ElementId, BTreeSet<String>>,
    texts: HashMap<ElementId, String>,
    data_targets: HashMap<ElementId, String>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            initial: HashMap::new(),
            slots: FieldId::VALIDATED
                .into_iter()
                .map(|field| (field, String::new()))
                .collect(),
            banners: HashMap::new(),
            banner_scrolls: Vec::new(),
            min_date: None,
            scroll_requests: Vec::new(),
            page_y: 0.0,
            viewport_width: 1280.0,
            nav_height: 0.0,
            sections: Vec::new(),
            menu_open: false,
            active_link: None,
            scroll_top_visible: false,
            observers: Vec::new(),
            classes: HashMap::new(),
            texts: HashMap::new(),
            data_targets: HashMap::new(),
        }
    }

    /// Value a control returns to on form reset.
    pub fn with_initial_value(mut self, field: FieldId, value: &str) -> Self {
        self.initial.insert(field, value.to_string());
        self.fields.insert(field, value.to_string());
        self
    }

    pub fn with_layout(mut self, nav_height: f64, sections: Vec<SectionBox>) -> Self {
        self.nav_height = nav_height;
        self.sections = sections;
        self
    }

    pub fn with_data_target(mut self, element: ElementId, target: &str) -> Self {
        self.data_targets.insert(element, target.to_string());
        self
    }

    pub fn unbind_slot(&mut self, field: FieldId) {
        self.slots.remove(&field);
    }

    pub fn set_page_y(&mut self, y: f64) {
        self.page_y = y;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Text of the error slot bound to `field`.
    pub fn slot(&self, field: FieldId) -> Option<&str> {
        self.slots.get(&field).map(String::as_str)
    }

    /// Bound slots that currently show a message.
    pub fn filled_slots(&self) -> Vec<FieldId> {
        self.slots
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn banner(&self, form: FormKind) -> Banner {
        self.banners.get(&form).cloned().unwrap_or_default()
    }

    pub fn banner_scrolls(&self) -> &[FormKind] {
        &self.banner_scrolls
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn scroll_top_visible(&self) -> bool {
        self.scroll_top_visible
    }

    pub fn observers(&self) -> &[(RevealGroup, ObserverOptions)] {
        &self.observers
    }

    pub fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.classes
            .get(element)
            .is_some_and(|classes| classes.contains(class))
    }

    pub fn text(&self, element: &ElementId) -> Option<&str> {
        self.texts.get(element).map(String::as_str)
    }
}

impl View for MemoryView {
    fn field_value(&self, field: FieldId) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_value(&mut self, field: FieldId, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn reset_form(&mut self, form: FormKind) {
        let initial = &self.initial;
        self.fields.retain(|field, _| field.form() != form);
        for (field, value) in initial.iter().filter(|(f, _)| f.form() == form) {
            self.fields.insert(*field, value.clone());
        }
    }

    fn set_min_date(&mut self, _field: FieldId, date: NaiveDate) {
        self.min_date = Some(date);
    }

    fn write_slot(&mut self, field: FieldId, text: &str) -> bool {
        match self.slots.get_mut(&field) {
            Some(slot) => {
                *slot = text.to_string();
                true
            }
            None => false,
        }
    }

    fn slots(&self, form: FormKind) -> Vec<FieldId> {
        self.slots
            .keys()
            .filter(|field| field.form() == form)
            .copied()
            .collect()
    }

    fn show_banner(&mut self, form: FormKind, tone: Tone, text: &str) {
        self.banners.insert(
            form,
            Banner {
                text: text.to_string(),
                tone: Some(tone),
                visible: true,
            },
        );
    }

    fn hide_banner(&mut self, form: FormKind) {
        let banner = self.banners.entry(form).or_default();
        banner.tone = None;
        banner.visible = false;
    }

    fn scroll_banner_into_view(&mut self, form: FormKind) {
        self.banner_scrolls.push(form);
    }

    fn scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
        self.page_y = top;
    }

    fn page_y(&self) -> f64 {
        self.page_y
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn nav_height(&self) -> f64 {
        self.nav_height
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections.clone()
    }

    fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn set_active_link(&mut self, section_id: &str) {
        self.active_link = Some(section_id.to_string());
    }

    fn set_scroll_top_visible(&mut self, visible: bool) {
        self.scroll_top_visible = visible;
    }

    fn observe(&mut self, group: RevealGroup, options: ObserverOptions) {
        self.observers.push((group, options));
    }

    fn add_class(&mut self, element: &ElementId, class: &str) {
        self.classes
            .entry(element.clone())
            .or_default()
            .insert(class.to_string());
    }

    fn set_text(&mut self, element: &ElementId, text: &str) {
        self.texts.insert(element.clone(), text.to_string());
    }

    fn data_target(&self, element: &ElementId) -> Option<String> {
        self.data_targets.get(element).cloned()
    }
}
