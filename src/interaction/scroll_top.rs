//! Scroll-to-top button.

use crate::config::ScrollTopConfig;
use crate::env::View;

#[derive(Clone, Debug)]
pub struct ScrollTopButton {
    config: ScrollTopConfig,
    visible: bool,
}

impl ScrollTopButton {
    pub fn new(config: ScrollTopConfig) -> Self {
        Self {
            config,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the button once the page is scrolled past the threshold.
    pub fn scrolled<V: View>(&mut self, view: &mut V) {
        let visible = view.page_y() > self.config.threshold_px;
        if visible != self.visible {
            self.visible = visible;
            view.set_scroll_top_visible(visible);
        }
    }

    pub fn clicked<V: View>(&self, view: &mut V) {
        view.scroll_to(0.0);
    }
}
