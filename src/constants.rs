// DOM wiring for the landing page.

pub const CANVAS_ID: &str = "background-canvas";
pub const PLAY_BUTTON_ID: &str = "music-player-btn";

// Play button labels
pub const PLAY_LABEL: &str = "Play";
pub const PAUSE_LABEL: &str = "Pause";

// Corner link styling
pub const LINK_VISIBLE_CLASS: &str = "visible";
pub const LINK_SHOWN_BG: &str = "transparent";
pub const LINK_SHOWN_FG: &str = "white";
pub const LINK_HIDDEN_BG: &str = "black";
pub const LINK_HIDDEN_FG: &str = "black";
