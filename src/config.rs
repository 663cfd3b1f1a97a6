use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll offset (px) past which the navbar switches to its condensed style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed navbar. The scroll-spy reference line sits this far
/// below the top of the viewport and scroll targets stop this far above a
/// section.
pub const NAV_OFFSET: f64 = 80.0;

pub const SCROLL_DURATION_MS: f64 = 500.0;
pub const FRAME_MS: u32 = 16;

/// Root margin handed to the intersection observer. Negative shrinks the
/// viewport, so a section reveals once it is 100px on screen.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const CAROUSEL_AUTOPLAY_MS: u32 = 4000;
pub const CAROUSEL_BREAKPOINTS: [(f64, usize); 2] = [(1024.0, 3), (640.0, 2)];

pub const RESOURCE_BASE: &str = "/resource";

/// Builds the `src` for a bundled image. Folder and file names are Chinese,
/// so every segment is percent-encoded.
pub fn resource_url(path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{}/{}", RESOURCE_BASE, encoded.join("/"))
}

/// Slides per view for the gallery carousel at a given viewport width.
pub fn slides_per_view(viewport_width: f64) -> usize {
    CAROUSEL_BREAKPOINTS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, per_view)| *per_view)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_encodes_each_segment() {
        assert_eq!(
            resource_url("人与自然/湖畔荷叶.jpg"),
            "/resource/%E4%BA%BA%E4%B8%8E%E8%87%AA%E7%84%B6/%E6%B9%96%E7%95%94%E8%8D%B7%E5%8F%B6.jpg"
        );
    }

    #[test]
    fn resource_url_keeps_ascii_names() {
        assert_eq!(resource_url("/group.jpg"), "/resource/group.jpg");
    }

    #[test]
    fn breakpoints_pick_widest_match() {
        assert_eq!(slides_per_view(320.0), 1);
        assert_eq!(slides_per_view(640.0), 2);
        assert_eq!(slides_per_view(900.0), 2);
        assert_eq!(slides_per_view(1440.0), 3);
    }
}
