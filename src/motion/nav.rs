pub const HOME_LABEL: &str = "Home";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// Pixels from the top that still count as "at top".
    pub top_threshold: f64,
    /// Fraction of the viewport past which the bar turns compact.
    pub below_hero_fraction: f64,
    /// Fraction of the viewport under which the label is forced to Home.
    pub home_fraction: f64,
    /// Fraction cut from the top and bottom of the viewport for the
    /// observation band.
    pub band_margin: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            top_threshold: 50.0,
            below_hero_fraction: 0.8,
            home_fraction: 0.5,
            band_margin: 0.45,
        }
    }
}

impl NavConfig {
    pub fn root_margin(&self) -> String {
        let pct = (self.band_margin * 1000.0).round() / 10.0;
        format!("-{pct}% 0px -{pct}% 0px")
    }

    pub fn thresholds() -> [f64; 5] {
        [0.0, 0.25, 0.5, 0.75, 1.0]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub is_at_top: bool,
    pub is_below_hero: bool,
    pub active_section: String,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            is_at_top: true,
            is_below_hero: false,
            active_section: HOME_LABEL.to_string(),
        }
    }
}

/// Fields that changed in one update. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavUpdate {
    pub is_at_top: Option<bool>,
    pub is_below_hero: Option<bool>,
    pub active_section: Option<String>,
}

impl NavUpdate {
    pub fn is_empty(&self) -> bool {
        self.is_at_top.is_none() && self.is_below_hero.is_none() && self.active_section.is_none()
    }
}

/// One entry of an intersection observer batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Picks the intersecting entry with the greatest ratio. Exact ties go to
/// the section registered first in `order`.
pub fn most_visible<'a>(
    entries: &'a [SectionVisibility],
    order: &[&str],
) -> Option<&'a SectionVisibility> {
    let rank = |id: &str| order.iter().position(|o| *o == id).unwrap_or(usize::MAX);
    entries
        .iter()
        .filter(|e| e.is_intersecting)
        .fold(None, |best: Option<&'a SectionVisibility>, entry| match best {
            None => Some(entry),
            Some(b) if entry.ratio > b.ratio => Some(entry),
            Some(b) if entry.ratio == b.ratio && rank(&entry.id) < rank(&b.id) => Some(entry),
            keep => keep,
        })
}

pub fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone)]
pub struct NavPresence {
    config: NavConfig,
    sections: Vec<&'static str>,
    /// Latest observer entry per section, in registration order. Batches
    /// only carry the entries that changed.
    visibility: Vec<Option<SectionVisibility>>,
    state: NavState,
    near_top: bool,
}

impl NavPresence {
    pub fn new(config: NavConfig, sections: Vec<&'static str>) -> Self {
        Self {
            config,
            visibility: vec![None; sections.len()],
            sections,
            state: NavState::default(),
            near_top: true,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn sections(&self) -> &[&'static str] {
        &self.sections
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> NavUpdate {
        let mut update = NavUpdate::default();

        let at_top = scroll_y < self.config.top_threshold;
        if at_top != self.state.is_at_top {
            self.state.is_at_top = at_top;
            update.is_at_top = Some(at_top);
        }

        let below_hero = scroll_y > viewport_height * self.config.below_hero_fraction;
        if below_hero != self.state.is_below_hero {
            self.state.is_below_hero = below_hero;
            update.is_below_hero = Some(below_hero);
        }

        self.near_top = scroll_y < viewport_height * self.config.home_fraction;
        update.active_section = if self.near_top {
            self.set_label(HOME_LABEL.to_string())
        } else {
            self.rank()
        };
        update
    }

    pub fn on_intersections(&mut self, entries: &[SectionVisibility]) -> NavUpdate {
        for entry in entries {
            if let Some(i) = self.sections.iter().position(|s| *s == entry.id) {
                self.visibility[i] = Some(entry.clone());
            }
        }
        if self.near_top {
            return NavUpdate::default();
        }
        NavUpdate {
            active_section: self.rank(),
            ..Default::default()
        }
    }

    /// Labels the most visible section seen so far. Keeps the current label
    /// when nothing intersects.
    fn rank(&mut self) -> Option<String> {
        let seen: Vec<SectionVisibility> = self.visibility.iter().flatten().cloned().collect();
        let label = section_label(&most_visible(&seen, &self.sections)?.id);
        self.set_label(label)
    }

    fn set_label(&mut self, label: String) -> Option<String> {
        if label == self.state.active_section {
            return None;
        }
        self.state.active_section = label.clone();
        Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presence() -> NavPresence {
        NavPresence::new(
            NavConfig::default(),
            vec!["profile", "work", "about", "contact"],
        )
    }

    fn seen(id: &str, ratio: f64) -> SectionVisibility {
        SectionVisibility {
            id: id.to_string(),
            ratio,
            is_intersecting: true,
        }
    }

    #[test]
    fn test_threshold_crossings_fire_once() {
        let mut nav = presence();
        let mut at_top_changes = 0;
        let mut below_hero_changes = 0;
        for y in [10.0, 1000.0, 1000.0, 1010.0, 1200.0] {
            let update = nav.on_scroll(y, 800.0);
            if let Some(v) = update.is_at_top {
                assert!(!v);
                at_top_changes += 1;
            }
            if let Some(v) = update.is_below_hero {
                assert!(v);
                below_hero_changes += 1;
            }
        }
        assert_eq!(at_top_changes, 1);
        assert_eq!(below_hero_changes, 1);
    }

    #[test]
    fn test_no_update_when_unchanged() {
        let mut nav = presence();
        assert!(nav.on_scroll(0.0, 800.0).is_empty());
        assert!(nav.on_scroll(20.0, 800.0).is_empty());
    }

    #[test]
    fn test_most_visible_ratio() {
        let entries = vec![
            seen("profile", 0.25),
            seen("work", 0.75),
            SectionVisibility {
                id: "about".to_string(),
                ratio: 1.0,
                is_intersecting: false,
            },
        ];
        let order = ["profile", "work", "about", "contact"];
        assert_eq!(most_visible(&entries, &order).unwrap().id, "work");
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let order = ["profile", "work", "about", "contact"];
        let entries = vec![seen("about", 0.5), seen("work", 0.5)];
        assert_eq!(most_visible(&entries, &order).unwrap().id, "work");
        assert!(most_visible(&[], &order).is_none());
    }

    #[test]
    fn test_label_from_observer() {
        let mut nav = presence();
        nav.on_scroll(2000.0, 800.0);
        let update = nav.on_intersections(&[seen("work", 0.5)]);
        assert_eq!(update.active_section.as_deref(), Some("Work"));
        assert_eq!(nav.state().active_section, "Work");
        // same label again is not re-emitted
        assert!(nav.on_intersections(&[seen("work", 1.0)]).is_empty());
    }

    #[test]
    fn test_home_overrides_observer_near_top() {
        let mut nav = presence();
        nav.on_scroll(2000.0, 800.0);
        nav.on_intersections(&[seen("about", 0.5)]);

        let update = nav.on_scroll(100.0, 800.0);
        assert_eq!(update.active_section.as_deref(), Some(HOME_LABEL));
        assert!(nav.on_intersections(&[seen("profile", 1.0)]).is_empty());
        assert_eq!(nav.state().active_section, HOME_LABEL);
    }

    #[test]
    fn test_entry_seen_near_top_labels_after_leaving() {
        let mut nav = presence();
        nav.on_scroll(360.0, 800.0);
        // profile enters the band while the hero still counts as home
        assert!(nav.on_intersections(&[seen("profile", 0.05)]).is_empty());
        assert_eq!(nav.state().active_section, HOME_LABEL);

        let update = nav.on_scroll(700.0, 800.0);
        assert_eq!(update.active_section.as_deref(), Some("Profile"));
        assert!(nav.on_scroll(1200.0, 800.0).active_section.is_none());
        assert_eq!(nav.state().active_section, "Profile");
    }

    #[test]
    fn test_ranks_across_batches() {
        let mut nav = presence();
        nav.on_scroll(2000.0, 800.0);
        nav.on_intersections(&[seen("profile", 0.05)]);
        let update = nav.on_intersections(&[seen("work", 0.75)]);
        assert_eq!(update.active_section.as_deref(), Some("Work"));
        // a weaker newcomer does not displace a section still in view
        assert!(nav.on_intersections(&[seen("about", 0.25)]).is_empty());
        assert_eq!(nav.state().active_section, "Work");

        let left = SectionVisibility {
            id: "work".to_string(),
            ratio: 0.0,
            is_intersecting: false,
        };
        let update = nav.on_intersections(&[left]);
        assert_eq!(update.active_section.as_deref(), Some("About"));
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(NavConfig::default().root_margin(), "-45% 0px -45% 0px");
        assert_eq!(section_label("contact"), "Contact");
        assert_eq!(section_label(""), "");
    }
}
