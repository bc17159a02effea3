/// Fraction of the element that must overlap the viewport before the image is requested.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// One observation from whatever is watching the element's visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityReport {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl VisibilityReport {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

/// Load state of a deferred image.
///
/// `NotVisible -> Loading -> Loaded | Errored`. Entering the viewport happens
/// once and is never undone; `Loaded` and `Errored` are final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageLoad {
    #[default]
    NotVisible,
    Loading,
    Loaded,
    Errored,
}

impl ImageLoad {
    /// Feeds a visibility report in. Returns `true` exactly once: on the report
    /// that moves the image out of `NotVisible`, which is when it should be fetched.
    pub fn observe(&mut self, report: VisibilityReport, threshold: f64) -> bool {
        if *self == Self::NotVisible && report.crosses(threshold) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Whether visibility reports still matter. Once this is false the
    /// observer can be stopped.
    pub fn wants_observation(&self) -> bool {
        *self == Self::NotVisible
    }

    pub fn mark_loaded(&mut self) {
        if *self == Self::Loading {
            *self = Self::Loaded;
        }
    }

    pub fn mark_errored(&mut self) {
        if *self == Self::Loading {
            *self = Self::Errored;
        }
    }

    pub fn has_entered_viewport(&self) -> bool {
        *self != Self::NotVisible
    }

    pub fn is_loaded(&self) -> bool {
        *self == Self::Loaded
    }

    pub fn has_errored(&self) -> bool {
        *self == Self::Errored
    }
}

/// Inline style reserving the layout box so the placeholder and the image
/// occupy the same space.
pub fn box_style(width: Option<u32>, height: Option<u32>) -> String {
    let mut style = String::new();
    if let Some(w) = width {
        style.push_str(&format!("width: {w}px;"));
    }
    if let Some(h) = height {
        style.push_str(&format!("height: {h}px;"));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(ratio: f64) -> VisibilityReport {
        VisibilityReport {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_no_request_below_threshold() {
        let mut load = ImageLoad::default();
        assert!(!load.observe(seen(0.0), DEFAULT_VISIBILITY_THRESHOLD));
        assert!(!load.observe(seen(0.05), DEFAULT_VISIBILITY_THRESHOLD));
        assert!(!load.has_entered_viewport());
    }

    #[test]
    fn test_requests_exactly_once() {
        let mut load = ImageLoad::default();
        let reports = [seen(0.02), seen(0.1), seen(0.5), seen(0.0), seen(1.0)];
        let requests = reports
            .into_iter()
            .filter(|r| load.observe(*r, DEFAULT_VISIBILITY_THRESHOLD))
            .count();
        assert_eq!(requests, 1);
        // scrolling back out does not revert
        assert_eq!(load, ImageLoad::Loading);
    }

    #[test]
    fn test_observation_ends_after_trigger() {
        let mut load = ImageLoad::default();
        assert!(load.wants_observation());
        assert!(!load.observe(seen(0.05), DEFAULT_VISIBILITY_THRESHOLD));
        assert!(load.wants_observation());

        assert!(load.observe(seen(0.5), DEFAULT_VISIBILITY_THRESHOLD));
        assert!(!load.wants_observation());
        load.mark_errored();
        assert!(!load.wants_observation());
    }

    #[test]
    fn test_not_intersecting_never_triggers() {
        let mut load = ImageLoad::default();
        let report = VisibilityReport {
            is_intersecting: false,
            ratio: 0.3,
        };
        assert!(!load.observe(report, DEFAULT_VISIBILITY_THRESHOLD));
    }

    #[test]
    fn test_terminal_states_are_exclusive() {
        let mut load = ImageLoad::default();
        // load events before visibility are ignored
        load.mark_loaded();
        assert_eq!(load, ImageLoad::NotVisible);

        load.observe(seen(1.0), DEFAULT_VISIBILITY_THRESHOLD);
        load.mark_loaded();
        load.mark_errored();
        assert!(load.is_loaded());
        assert!(!load.has_errored());

        let mut broken = ImageLoad::Loading;
        broken.mark_errored();
        broken.mark_loaded();
        assert!(broken.has_errored());
        assert!(!broken.is_loaded());
        assert!(broken.has_entered_viewport());
    }

    #[test]
    fn test_box_style() {
        assert_eq!(box_style(None, None), "");
        assert_eq!(box_style(Some(320), None), "width: 320px;");
        assert_eq!(box_style(Some(320), Some(180)), "width: 320px;height: 180px;");
    }
}
