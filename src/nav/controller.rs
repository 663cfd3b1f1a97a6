//! Navigation state for the sticky navbar: which section is active, whether
//! the page has scrolled past the hero, and whether the mobile menu (and with
//! it the page scroll lock) is open.

use log::{debug, info};

use super::scroll_lock::{ScrollLockGuard, ScrollLockHost};
use super::sections::{SectionRegion, SectionRegistry};
use super::smooth_scroll::ScrollCommand;
use crate::config;

/// Snapshot handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub active_section: &'static str,
    pub is_menu_open: bool,
    pub has_scrolled: bool,
}

pub struct NavController<H: ScrollLockHost + Clone> {
    sections: SectionRegistry,
    lock_host: H,
    active_section: &'static str,
    has_scrolled: bool,
    menu_lock: Option<ScrollLockGuard<H>>,
    scroll_threshold: f64,
    nav_offset: f64,
}

impl<H: ScrollLockHost + Clone> NavController<H> {
    pub fn new(sections: SectionRegistry, lock_host: H) -> Self {
        let active_section = sections.first();
        Self {
            sections,
            lock_host,
            active_section,
            has_scrolled: false,
            menu_lock: None,
            scroll_threshold: config::SCROLL_THRESHOLD,
            nav_offset: config::NAV_OFFSET,
        }
    }

    pub fn state(&self) -> NavState {
        NavState {
            active_section: self.active_section,
            is_menu_open: self.menu_lock.is_some(),
            has_scrolled: self.has_scrolled,
        }
    }

    /// Recomputes the condensed flag and the active section from a scroll
    /// sample. Regions for unregistered ids are ignored. When several regions
    /// cover the reference line the last one in document order wins; when
    /// none does the previous section stays active.
    pub fn on_scroll(&mut self, offset: f64, regions: &[SectionRegion]) {
        self.has_scrolled = offset > self.scroll_threshold;

        let line = offset + self.nav_offset;
        let hit = self
            .sections
            .iter()
            .filter_map(|section| regions.iter().find(|r| r.id == section.id))
            .filter(|region| region.contains(line))
            .last();

        if let Some(region) = hit {
            if region.id != self.active_section {
                debug!("Active section {} -> {}", self.active_section, region.id);
                self.active_section = region.id;
            }
        }
    }

    /// Jumps to a section. Returns the scroll to perform, or `None` when the
    /// id is not registered or its region was not measured, in which case
    /// nothing changes.
    pub fn activate(
        &mut self,
        id: &str,
        offset: f64,
        regions: &[SectionRegion],
    ) -> Option<ScrollCommand> {
        let Some(section) = self.sections.get(id) else {
            debug!("Ignoring navigation to unknown section {:?}", id);
            return None;
        };
        let region = regions.iter().find(|r| r.id == section.id)?;
        let target = (region.top - self.nav_offset).max(0.0);

        info!("Navigating to {}", section.id);
        self.active_section = section.id;
        Some(ScrollCommand::new(offset, target))
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_lock.is_some() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_menu(&mut self) {
        if self.menu_lock.is_none() {
            self.menu_lock = Some(ScrollLockGuard::acquire(self.lock_host.clone()));
        }
    }

    pub fn close_menu(&mut self) {
        // Dropping the guard releases the lock.
        self.menu_lock = None;
    }

    /// A link inside the mobile menu: navigate, then close and unlock.
    pub fn navigate_from_menu(
        &mut self,
        id: &str,
        offset: f64,
        regions: &[SectionRegion],
    ) -> Option<ScrollCommand> {
        let command = self.activate(id, offset, regions);
        self.close_menu();
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::scroll_lock::testing::CountingLock;

    /// Six stacked sections, each 1000px tall, starting at 0.
    fn stacked() -> Vec<SectionRegion> {
        ["hero", "theory", "research", "data", "case", "team"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionRegion::new(*id, i as f64 * 1000.0, 1000.0))
            .collect()
    }

    fn controller() -> (NavController<CountingLock>, CountingLock) {
        let lock = CountingLock::default();
        (NavController::new(SectionRegistry::page(), lock.clone()), lock)
    }

    #[test]
    fn starts_on_first_section() {
        let (nav, _) = controller();
        assert_eq!(
            nav.state(),
            NavState { active_section: "hero", is_menu_open: false, has_scrolled: false }
        );
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let (mut nav, _) = controller();
        let regions = stacked();
        nav.on_scroll(config::SCROLL_THRESHOLD, &regions);
        assert!(!nav.state().has_scrolled);
        nav.on_scroll(config::SCROLL_THRESHOLD + 1.0, &regions);
        assert!(nav.state().has_scrolled);
        nav.on_scroll(0.0, &regions);
        assert!(!nav.state().has_scrolled);
    }

    #[test]
    fn active_section_tracks_reference_line() {
        let (mut nav, _) = controller();
        let regions = stacked();
        nav.on_scroll(2100.0, &regions);
        assert_eq!(nav.state().active_section, "research");
        // The line sits NAV_OFFSET below the top, so 80px before `data`
        // starts it already counts as inside `data`.
        nav.on_scroll(3000.0 - config::NAV_OFFSET, &regions);
        assert_eq!(nav.state().active_section, "data");
        nav.on_scroll(3000.0 - config::NAV_OFFSET - 1.0, &regions);
        assert_eq!(nav.state().active_section, "research");
    }

    #[test]
    fn sparse_samples_land_on_the_right_section() {
        let (mut nav, _) = controller();
        let regions = stacked();
        nav.on_scroll(5500.0, &regions);
        assert_eq!(nav.state().active_section, "team");
        nav.on_scroll(200.0, &regions);
        assert_eq!(nav.state().active_section, "hero");
    }

    #[test]
    fn overlapping_regions_prefer_later_section() {
        let (mut nav, _) = controller();
        let regions = vec![
            SectionRegion::new("theory", 1000.0, 600.0),
            SectionRegion::new("research", 1400.0, 600.0),
        ];
        nav.on_scroll(1500.0 - config::NAV_OFFSET, &regions);
        assert_eq!(nav.state().active_section, "research");
    }

    #[test]
    fn later_wins_by_document_order_not_slice_order() {
        let (mut nav, _) = controller();
        let regions = vec![
            SectionRegion::new("research", 1400.0, 600.0),
            SectionRegion::new("theory", 1000.0, 600.0),
        ];
        nav.on_scroll(1500.0 - config::NAV_OFFSET, &regions);
        assert_eq!(nav.state().active_section, "research");
    }

    #[test]
    fn gap_keeps_previous_section() {
        let (mut nav, _) = controller();
        let regions = vec![
            SectionRegion::new("hero", 0.0, 500.0),
            SectionRegion::new("theory", 2000.0, 500.0),
        ];
        nav.on_scroll(2000.0, &regions);
        assert_eq!(nav.state().active_section, "theory");
        nav.on_scroll(900.0, &regions);
        assert_eq!(nav.state().active_section, "theory");
    }

    #[test]
    fn unregistered_regions_are_ignored() {
        let (mut nav, _) = controller();
        let regions = vec![SectionRegion::new("footer", 0.0, 10_000.0)];
        nav.on_scroll(4000.0, &regions);
        assert_eq!(nav.state().active_section, "hero");
    }

    #[test]
    fn activate_is_optimistic_and_targets_offset_position() {
        let (mut nav, _) = controller();
        let regions = stacked();
        let command = nav.activate("team", 0.0, &regions).unwrap();
        assert_eq!(nav.state().active_section, "team");
        assert_eq!(command.from, 0.0);
        assert_eq!(command.to, 5000.0 - config::NAV_OFFSET);
    }

    #[test]
    fn activated_scroll_settles_inside_target() {
        let (mut nav, _) = controller();
        let regions = stacked();
        for section in SectionRegistry::page().iter() {
            let command = nav.activate(section.id, 2500.0, &regions).unwrap();
            let (settled, done) = command.position_at(command.duration_ms);
            assert!(done);
            nav.on_scroll(settled, &regions);
            assert_eq!(nav.state().active_section, section.id);
        }
    }

    #[test]
    fn activate_unknown_id_changes_nothing() {
        let (mut nav, _) = controller();
        let regions = stacked();
        nav.on_scroll(2100.0, &regions);
        let before = nav.state();
        assert!(nav.activate("nonexistent", 2100.0, &regions).is_none());
        assert_eq!(nav.state(), before);
    }

    #[test]
    fn activate_first_section_never_targets_negative_offset() {
        let (mut nav, _) = controller();
        let command = nav.activate("hero", 3000.0, &stacked()).unwrap();
        assert_eq!(command.to, 0.0);
    }

    #[test]
    fn last_activation_wins() {
        let (mut nav, _) = controller();
        let regions = stacked();
        nav.activate("data", 0.0, &regions);
        nav.activate("theory", 400.0, &regions);
        assert_eq!(nav.state().active_section, "theory");
    }

    #[test]
    fn menu_holds_exactly_one_lock_while_open() {
        let (mut nav, lock) = controller();
        nav.open_menu();
        nav.open_menu();
        assert!(nav.state().is_menu_open);
        assert_eq!(lock.holders.get(), 1);
        assert_eq!(lock.acquired.get(), 1);
    }

    #[test]
    fn every_close_path_releases_the_lock() {
        let (mut nav, lock) = controller();
        let regions = stacked();

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.state().is_menu_open);
        assert_eq!(lock.holders.get(), 0);

        nav.open_menu();
        nav.close_menu();
        assert_eq!(lock.holders.get(), 0);

        nav.open_menu();
        let command = nav.navigate_from_menu("case", 0.0, &regions);
        assert!(command.is_some());
        assert_eq!(nav.state().active_section, "case");
        assert!(!nav.state().is_menu_open);
        assert_eq!(lock.holders.get(), 0);
        assert_eq!(lock.acquired.get(), lock.released.get());
    }

    #[test]
    fn menu_link_to_unknown_section_still_closes() {
        let (mut nav, lock) = controller();
        nav.open_menu();
        assert!(nav.navigate_from_menu("nowhere", 0.0, &stacked()).is_none());
        assert!(!nav.state().is_menu_open);
        assert_eq!(lock.holders.get(), 0);
    }

    #[test]
    fn closing_a_closed_menu_is_a_no_op() {
        let (mut nav, lock) = controller();
        nav.close_menu();
        nav.close_menu();
        assert_eq!(lock.released.get(), 0);
        assert!(!nav.state().is_menu_open);
    }

    #[test]
    fn dropping_controller_releases_held_lock() {
        let (mut nav, lock) = controller();
        nav.open_menu();
        drop(nav);
        assert_eq!(lock.holders.get(), 0);
    }
}
