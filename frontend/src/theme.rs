#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            Theme::Light => "/assets/logo-light.png",
            Theme::Dark => "/assets/logo-dark.png",
        }
    }

    /// Background aurora strength behind the page.
    pub fn aurora_opacity(self) -> f64 {
        match self {
            Theme::Light => 0.25,
            Theme::Dark => 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn preference_picks_initial_theme() {
        assert!(Theme::from_preference(true).is_dark());
        assert!(!Theme::from_preference(false).is_dark());
    }
}
