use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose animation tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings and thresholds shared by every section. All durations are in
/// milliseconds, all distances in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub reveal_threshold: f64,
    pub reveal_threshold_dense: f64,
    pub hero_load_delay_ms: u32,
    pub typewriter_interval_ms: u32,
    pub typewriter_delay_ms: u32,
    pub carousel_lock_ms: u32,
    pub carousel_auto_advance_ms: u32,
    pub filter_lock_ms: u32,
    pub count_up_duration_ms: u32,
    pub count_up_stagger_ms: u32,
    pub count_up_frame_ms: u32,
    pub contact_round_trip_ms: u32,
    pub contact_success_hold_ms: u32,
    pub tilt_divisor: f64,
    pub header_scrolled_px: f64,
    pub scroll_top_button_px: f64,
    pub active_section_offset_px: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            // About and Contact wait until a fifth of the section is on screen
            reveal_threshold_dense: 0.2,
            hero_load_delay_ms: 100,
            typewriter_interval_ms: 80,
            typewriter_delay_ms: 500,
            carousel_lock_ms: 600,
            carousel_auto_advance_ms: 5_000,
            filter_lock_ms: 500,
            count_up_duration_ms: 1_500,
            count_up_stagger_ms: 200,
            count_up_frame_ms: 16,
            contact_round_trip_ms: 1_500,
            contact_success_hold_ms: 3_000,
            tilt_divisor: 20.0,
            header_scrolled_px: 20.0,
            scroll_top_button_px: 400.0,
            active_section_offset_px: 100.0,
        }
    }
}

pub fn animation() -> AnimationConfig {
    AnimationConfig::default()
}
