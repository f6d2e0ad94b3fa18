//! The reveal convention: every section and card maps its visibility
//! boolean onto the same fade/slide transition, optionally staggered across
//! sibling items. The delay is purely presentational - it never changes
//! when the visibility flag itself flips.

/// Stagger unit for project cards and skill bars.
pub const CARD_STAGGER_MS: u32 = 100;
/// Stagger unit for experience timeline entries.
pub const TIMELINE_STAGGER_MS: u32 = 150;

/// Compose `base` utility classes with the 700ms reveal transition pair:
/// fully opaque at rest, transparent and offset downward while hidden.
pub fn reveal_class(base: &str, visible: bool) -> String {
    let state = if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    if base.is_empty() {
        format!("transition-all duration-700 {state}")
    } else {
        format!("{base} transition-all duration-700 {state}")
    }
}

pub fn stagger_delay_ms(index: usize, unit_ms: u32) -> u32 {
    index as u32 * unit_ms
}

/// Inline style delaying item `index` by `index * unit_ms`.
pub fn stagger_style(index: usize, unit_ms: u32) -> String {
    format!("transition-delay: {}ms", stagger_delay_ms(index, unit_ms))
}

/// Width for a skill bar: the measured level once visible, collapsed before.
pub fn bar_width(level: u8, visible: bool) -> String {
    if visible {
        format!("{}%", level.min(100))
    } else {
        "0%".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_visible() {
        let class = reveal_class("mb-8", true);
        assert_eq!(class, "mb-8 transition-all duration-700 opacity-100 translate-y-0");
    }

    #[test]
    fn test_reveal_class_hidden() {
        let class = reveal_class("mb-8", false);
        assert_eq!(class, "mb-8 transition-all duration-700 opacity-0 translate-y-10");
    }

    #[test]
    fn test_reveal_class_empty_base() {
        assert!(reveal_class("", true).starts_with("transition-all"));
    }

    #[test]
    fn test_reveal_class_round_trips() {
        // leaving and re-entering the viewport restores the hidden baseline
        let hidden = reveal_class("x", false);
        assert_eq!(reveal_class("x", false), hidden);
        assert_ne!(reveal_class("x", true), hidden);
    }

    #[test]
    fn test_stagger_is_linear_in_index() {
        for (i, unit) in [(0usize, 100u32), (1, 100), (5, 100), (3, 150)] {
            assert_eq!(stagger_delay_ms(i, unit), i as u32 * unit);
        }
        assert_eq!(stagger_style(0, CARD_STAGGER_MS), "transition-delay: 0ms");
        assert_eq!(stagger_style(2, TIMELINE_STAGGER_MS), "transition-delay: 300ms");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(85, true), "85%");
        assert_eq!(bar_width(85, false), "0%");
        // levels above 100 clamp
        assert_eq!(bar_width(120, true), "100%");
    }
}
