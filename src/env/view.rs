//! The presentation seam.
//!
//! Everything the components need from the page goes through [`View`]. A
//! browser host implements it over the DOM; [`super::MemoryView`] keeps the
//! same state in memory.

use crate::validation::{FieldId, FormKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Styling of a status banner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Error,
}

/// Identifier of a page element the host knows how to resolve.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geometry of a `section[id]` element, in document coordinates.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Elements observed for visibility, grouped by what happens on first sight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RevealGroup {
    /// `.fade-in-up` elements gain the `visible` class.
    FadeIn,
    /// `.stat-number` elements run the counter animation.
    StatCounter,
}

/// Visibility observer registration options.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Bottom root margin in pixels (negative shrinks the viewport).
    pub bottom_margin_px: f64,
}

/// Page operations consumed by the components.
pub trait View {
    fn field_value(&self, field: FieldId) -> String;

    fn set_field_value(&mut self, field: FieldId, value: &str);

    /// Restore every control of `form` to its initial value.
    fn reset_form(&mut self, form: FormKind);

    /// Earliest date the date picker offers.
    fn set_min_date(&mut self, field: FieldId, date: NaiveDate);

    /// Write `text` into the error slot of `field`. Returns `false` when the
    /// page has no slot for that field.
    fn write_slot(&mut self, field: FieldId, text: &str) -> bool;

    /// Fields of `form` that have an error slot on the page.
    fn slots(&self, form: FormKind) -> Vec<FieldId>;

    fn show_banner(&mut self, form: FormKind, tone: Tone, text: &str);

    /// Hide the banner and drop its tone.
    fn hide_banner(&mut self, form: FormKind);

    fn scroll_banner_into_view(&mut self, form: FormKind);

    /// Smooth-scroll the window to `top`.
    fn scroll_to(&mut self, top: f64);

    fn page_y(&self) -> f64;

    fn viewport_width(&self) -> f64;

    fn nav_height(&self) -> f64;

    /// Sections in document order.
    fn sections(&self) -> Vec<SectionBox>;

    fn set_menu_open(&mut self, open: bool);

    /// Mark the nav link pointing at `#section_id` active and every other
    /// link inactive.
    fn set_active_link(&mut self, section_id: &str);

    fn set_scroll_top_visible(&mut self, visible: bool);

    /// Start reporting visibility changes for every element of `group`.
    fn observe(&mut self, group: RevealGroup, options: ObserverOptions);

    fn add_class(&mut self, element: &ElementId, class: &str);

    fn set_text(&mut self, element: &ElementId, text: &str);

    /// Raw `data-target` attribute of a stat element.
    fn data_target(&self, element: &ElementId) -> Option<String>;
}
