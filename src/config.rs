use log::Level;

// Navigation bar switches to its solid style past this offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

// A reveal fires once its trigger's top edge reaches 80% of the viewport height.
pub const REVEAL_START_FRACTION: f64 = 0.8;

pub const SUBMIT_DELAY_MS: u32 = 1_500;

// power3.out
pub const EASE_OUT_CUBIC: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";

pub const IMAGE_ROOT: &str = "/images";

/// Root margin handed to the intersection observer so that "intersecting"
/// means "past the start line".
pub fn reveal_root_margin() -> String {
    let bottom = ((1.0 - REVEAL_START_FRACTION) * 100.0).round();
    format!("0px 0px -{}% 0px", bottom)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose binding traces while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_start_line() {
        assert_eq!(reveal_root_margin(), "0px 0px -20% 0px");
    }
}
