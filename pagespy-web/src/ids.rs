//! Element ids the page markup is expected to provide. Every one is optional.

pub const THEME_TOGGLE: &str = "theme-toggle";

pub const RAIL_NAV: &str = "rail-nav";
pub const RAIL_TRACK: &str = "rail-track";

pub const DATA_TOGGLE: &str = "data-toggle";
pub const TOGGLE_CIRCLE: &str = "toggle-circle";
pub const STATE_RAW: &str = "state-raw";
pub const STATE_PROCESSED: &str = "state-processed";
pub const ROWS_VALUE: &str = "rows-value";
pub const SIZE_VALUE: &str = "size-value";

pub const ROUTE_SCROLLBAR: &str = "route-scrollbar";
pub const CAR_THUMB: &str = "car-thumb";

#[must_use]
pub fn rail_dot(key: &str) -> String {
    format!("rail-dot-{key}")
}

#[must_use]
pub fn rail_label(key: &str) -> String {
    format!("rail-label-{key}")
}
