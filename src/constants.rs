// DOM hooks and storage keys shared by the web frontend.

// Static page elements (see index.html)
pub const GRID_ID: &str = "timer-grid";
pub const ADD_TEAM_ID: &str = "add-team";
pub const DELETE_ZONE_ID: &str = "delete-zone";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Generated card markup
pub const CARD_ID_PREFIX: &str = "timer-card-";
pub const TIMER_ID_ATTR: &str = "data-timer-id";
pub const ACTION_ATTR: &str = "data-action";
pub const FIELD_ATTR: &str = "data-field";

// Drag payload type; Firefox will not start a drag without one
pub const DRAG_MIME: &str = "text/plain";

// Persistence shim
pub const THEME_STORAGE_KEY: &str = "boss-timer-theme";
pub const THEME_ATTR: &str = "data-theme";
