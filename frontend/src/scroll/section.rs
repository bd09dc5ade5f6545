use std::fmt;

/// The addressable blocks of the page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Services,
    Gallery,
    Team,
    Booking,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Gallery,
        SectionId::Team,
        SectionId::Booking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Gallery => "gallery",
            SectionId::Team => "team",
            SectionId::Booking => "booking",
        }
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn from_fragment(href: &str) -> Option<SectionId> {
        let id = href.strip_prefix('#').unwrap_or(href);
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::ALL[0]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live layout of a mounted section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, offset_top: f64, height: f64) -> Self {
        Self { id, offset_top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.height
    }
}

/// First section (in the order given) whose range holds `scroll_y + probe`.
/// Unmounted sections are simply absent from `bounds`.
pub fn locate_section(bounds: &[SectionBounds], scroll_y: f64, probe: f64) -> Option<SectionId> {
    let position = scroll_y + probe;
    bounds.iter().find(|b| b.contains(position)).map(|b| b.id)
}

/// Same scan as [`locate_section`], falling back to the first section near
/// the top of the page and otherwise keeping `previous`.
pub fn resolve_active(
    bounds: &[SectionBounds],
    scroll_y: f64,
    probe: f64,
    top_of_page: f64,
    previous: SectionId,
) -> SectionId {
    match locate_section(bounds, scroll_y, probe) {
        Some(id) => id,
        None if scroll_y < top_of_page => SectionId::default(),
        None => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(SectionId::Home, 0.0, 800.0),
            SectionBounds::new(SectionId::Services, 800.0, 600.0),
            SectionBounds::new(SectionId::Gallery, 1400.0, 700.0),
        ]
    }

    #[test]
    fn probe_lands_in_services() {
        assert_eq!(locate_section(&layout(), 850.0, 150.0), Some(SectionId::Services));
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(locate_section(&layout(), 0.0, 150.0), Some(SectionId::Home));
    }

    #[test]
    fn range_end_is_exclusive() {
        // 1250 + 150 = 1400 is the first pixel of the gallery
        assert_eq!(locate_section(&layout(), 1250.0, 150.0), Some(SectionId::Gallery));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let bounds = vec![
            SectionBounds::new(SectionId::Home, 0.0, 800.0),
            SectionBounds::new(SectionId::Gallery, 1400.0, 700.0),
        ];
        assert_eq!(locate_section(&bounds, 900.0, 150.0), None);
        assert_eq!(
            resolve_active(&bounds, 900.0, 150.0, 100.0, SectionId::Home),
            SectionId::Home
        );
    }

    #[test]
    fn empty_layout_defaults_near_top_and_holds_elsewhere() {
        assert_eq!(resolve_active(&[], 40.0, 150.0, 100.0, SectionId::Team), SectionId::Home);
        assert_eq!(resolve_active(&[], 4000.0, 150.0, 100.0, SectionId::Team), SectionId::Team);
    }

    #[test]
    fn fragments_round_trip_through_ids() {
        assert_eq!(SectionId::from_fragment("#booking"), Some(SectionId::Booking));
        assert_eq!(SectionId::from_fragment("team"), Some(SectionId::Team));
        assert_eq!(SectionId::from_fragment("#pricing"), None);
        assert_eq!(SectionId::Gallery.fragment(), "#gallery");
    }
}
