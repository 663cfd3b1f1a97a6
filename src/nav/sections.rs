use crate::components::icons::IconKind;

/// One top-level region of the page and its navigation entry. The DOM anchor
/// is the element whose `id` attribute equals `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
}

/// Menu order, document order and scroll order all follow this list.
pub const SECTIONS: [SectionDescriptor; 6] = [
    SectionDescriptor { id: "hero", label: "首页", icon: IconKind::Home },
    SectionDescriptor { id: "theory", label: "理论基础", icon: IconKind::Book },
    SectionDescriptor { id: "research", label: "实地调研", icon: IconKind::Search },
    SectionDescriptor { id: "data", label: "数据分析", icon: IconKind::Chart },
    SectionDescriptor { id: "case", label: "案例剖析", icon: IconKind::Bulb },
    SectionDescriptor { id: "team", label: "团队介绍", icon: IconKind::Team },
];

/// Vertical extent of a section in document coordinates, measured at the
/// time of a scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRegion {
    pub id: &'static str,
    pub top: f64,
    pub bottom: f64,
}

impl SectionRegion {
    pub fn new(id: &'static str, top: f64, height: f64) -> Self {
        Self { id, top, bottom: top + height }
    }

    /// Half-open: a region ending exactly on the line has already been left.
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && line < self.bottom
    }
}

/// The ordered set of sections a controller is allowed to activate.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    pub fn page() -> Self {
        Self { sections: SECTIONS.to_vec() }
    }

    pub fn first(&self) -> &'static str {
        self.sections[0].id
    }

    pub fn get(&self, id: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_sections_are_in_fixed_order() {
        let ids: Vec<_> = SectionRegistry::page().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["hero", "theory", "research", "data", "case", "team"]);
    }

    #[test]
    fn page_sections_are_unique() {
        let registry = SectionRegistry::page();
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[..i].iter().all(|earlier| earlier.id != section.id), "{}", section.id);
            assert_eq!(registry.get(section.id), Some(section));
        }
    }

    #[test]
    fn region_is_half_open() {
        let region = SectionRegion::new("theory", 100.0, 50.0);
        assert!(region.contains(100.0));
        assert!(region.contains(149.9));
        assert!(!region.contains(150.0));
        assert!(!region.contains(99.0));
    }
}
