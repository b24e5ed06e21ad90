//! Applying a presentation state to a display surface.
//!
//! The [`Surface`] trait names the panel's display regions; [`apply`] is the
//! only code that writes to them. Everything upstream works on plain
//! `PresentationState` values and never touches a region directly.

pub mod popup;

pub use popup::PopupDocument;

use crate::decision::{BadgeCategory, Bars, PresentationState, ProductView};

/// Named display regions of the verdict panel.
pub trait Surface {
    fn set_badge(&mut self, text: &str, category: BadgeCategory);
    fn set_advice(&mut self, html: &str);
    /// `None` hides the product panel.
    fn set_product(&mut self, product: Option<&ProductView>);
    /// `None` hides all three bars.
    fn set_bars(&mut self, bars: Option<&Bars>);
    /// `None` hides the signals panel.
    fn set_signals(&mut self, html: Option<&str>);
}

/// Paints `state` onto `surface`, region by region.
pub fn apply<S: Surface + ?Sized>(state: &PresentationState, surface: &mut S) {
    surface.set_badge(&state.badge_text, state.badge_category);
    surface.set_advice(&state.advice_html);
    surface.set_product(state.product.as_ref());
    surface.set_bars(state.bars.as_ref());
    surface.set_signals(state.signals_html.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::BadgeCategory;

    /// Records every region write for assertions.
    #[derive(Default)]
    struct RecordingSurface {
        badge: Option<(String, BadgeCategory)>,
        advice: Option<String>,
        product_visible: bool,
        bars_visible: bool,
        signals_visible: bool,
    }

    impl Surface for RecordingSurface {
        fn set_badge(&mut self, text: &str, category: BadgeCategory) {
            self.badge = Some((text.to_string(), category));
        }

        fn set_advice(&mut self, html: &str) {
            self.advice = Some(html.to_string());
        }

        fn set_product(&mut self, product: Option<&ProductView>) {
            self.product_visible = product.is_some();
        }

        fn set_bars(&mut self, bars: Option<&Bars>) {
            self.bars_visible = bars.is_some();
        }

        fn set_signals(&mut self, html: Option<&str>) {
            self.signals_visible = html.is_some();
        }
    }

    #[test]
    fn test_apply_writes_every_region() {
        let mut surface = RecordingSurface::default();
        apply(&PresentationState::unsupported_page(), &mut surface);

        let (text, category) = surface.badge.unwrap();
        assert_eq!(text, "Unsupported Page");
        assert_eq!(category, BadgeCategory::Avoid);
        assert!(surface.advice.is_some());
        assert!(!surface.product_visible);
        assert!(!surface.bars_visible);
        assert!(!surface.signals_visible);
    }
}
