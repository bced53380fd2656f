use crate::config::AnimationConfig;

pub fn is_scrolled(scroll_y: f64, config: &AnimationConfig) -> bool {
    scroll_y > config.header_scrolled_px
}

pub fn shows_scroll_top(scroll_y: f64, config: &AnimationConfig) -> bool {
    scroll_y > config.scroll_top_button_px
}

/// Picks the nav entry to highlight from `(id, top)` pairs given in page
/// order: the last section whose top edge has passed the offset line.
/// `None` when no section has been reached yet.
pub fn active_section<'a>(sections: &[(&'a str, f64)], config: &AnimationConfig) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= config.active_section_offset_px)
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_button_thresholds() {
        let config = AnimationConfig::default();
        assert!(!is_scrolled(20.0, &config));
        assert!(is_scrolled(21.0, &config));
        assert!(!shows_scroll_top(400.0, &config));
        assert!(shows_scroll_top(401.0, &config));
    }

    #[test]
    fn last_passed_section_wins() {
        let config = AnimationConfig::default();
        let sections = [
            ("home", -1200.0),
            ("about", -300.0),
            ("services", 90.0),
            ("projects", 700.0),
        ];
        assert_eq!(active_section(&sections, &config), Some("services"));
    }

    #[test]
    fn nothing_passed_yet() {
        let config = AnimationConfig::default();
        assert_eq!(active_section(&[("home", 120.0)], &config), None);
    }
}
