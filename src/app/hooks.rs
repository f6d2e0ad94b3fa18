use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Observation config for [`use_in_view`].
///
/// `threshold` is the fraction of the element's area that must intersect the
/// viewport before it counts as visible; `root_margin` grows or shrinks the
/// viewport bounds used for the intersection test.
#[derive(Debug, Clone, PartialEq)]
pub struct InViewOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for InViewOptions {
    fn default() -> Self {
        InViewOptions {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

impl InViewOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        InViewOptions {
            threshold,
            ..Default::default()
        }
    }
}

/// Thresholds outside [0, 1] are not meaningful to the observer.
fn clamp_threshold(threshold: f64) -> f64 {
    threshold.clamp(0.0, 1.0)
}

/// Tracks whether `target` is scrolled into the viewport.
///
/// Returns `false` until the first intersection callback fires, then follows
/// the element in both directions - an element that scrolls back out reads
/// `false` again, so reveal animations replay on re-entry. The underlying
/// observer is re-registered if the element remounts and released when the
/// owning scope is disposed. Before the node ref resolves (and on the
/// server) there is no subscription and the value stays `false`.
pub fn use_in_view(target: NodeRef<html::Div>, options: InViewOptions) -> Signal<bool> {
    let (in_view, set_in_view) = signal(false);
    let InViewOptions {
        threshold,
        root_margin,
    } = options;

    let _ = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            // entries may be batched - the last one is the current state
            if let Some(entry) = entries.last() {
                set_in_view(entry.is_intersecting());
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![clamp_threshold(threshold)])
            .root_margin(root_margin),
    );

    in_view.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = InViewOptions::default();
        assert_eq!(opts.threshold, 0.0);
        assert_eq!(opts.root_margin, "0px");
    }

    #[test]
    fn test_with_threshold_keeps_margin_default() {
        let opts = InViewOptions::with_threshold(0.2);
        assert_eq!(opts.threshold, 0.2);
        assert_eq!(opts.root_margin, "0px");
    }

    #[test]
    fn test_threshold_clamping() {
        assert_eq!(clamp_threshold(-0.5), 0.0);
        assert_eq!(clamp_threshold(0.0), 0.0);
        assert_eq!(clamp_threshold(0.1), 0.1);
        assert_eq!(clamp_threshold(1.0), 1.0);
        assert_eq!(clamp_threshold(7.0), 1.0);
    }
}
