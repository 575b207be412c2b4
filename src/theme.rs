/// Visual theme. Only the page styling reads it; the timer core never does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Holiday,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Holiday];

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Holiday => "holiday",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Missing or unknown stored values fall back to the light theme.
    pub fn from_stored(value: Option<&str>) -> Theme {
        value.and_then(Theme::parse).unwrap_or_default()
    }

    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Holiday,
            Theme::Holiday => Theme::Light,
        }
    }

    /// Caption of the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Holiday => "Holiday",
        }
    }
}
