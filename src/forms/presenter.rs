//! Writes validation messages and form outcomes to the view.

use crate::env::{Tone, View};
use crate::validation::{FieldId, FormKind};
use tracing::debug;

/// Display side of one form: its error slots and its status banner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorPresenter {
    form: FormKind,
    scroll_on_status: bool,
}

impl ErrorPresenter {
    /// Presenter configured the way `form` behaves on the page: the
    /// reservation banner scrolls into view, the newsletter one does not.
    pub fn for_form(form: FormKind) -> Self {
        Self {
            form,
            scroll_on_status: form == FormKind::Reservation,
        }
    }

    pub fn form(&self) -> FormKind {
        self.form
    }

    /// Show `message` in the slot of `field`; an empty message clears it.
    /// Fields without a slot are skipped.
    pub fn show_error<V: View>(&self, view: &mut V, field: FieldId, message: &str) {
        if !view.write_slot(field, message) {
            debug!(%field, "no error slot bound, message dropped");
        }
    }

    /// Empty every slot of the form and hide the banner.
    pub fn clear_all<V: View>(&self, view: &mut V) {
        for field in view.slots(self.form) {
            view.write_slot(field, "");
        }
        view.hide_banner(self.form);
    }

    /// Show the banner in `tone` with `text`.
    pub fn show_status<V: View>(&self, view: &mut V, tone: Tone, text: &str) {
        view.show_banner(self.form, tone, text);
        if self.scroll_on_status {
            view.scroll_banner_into_view(self.form);
        }
    }
}
