//! Shared test infrastructure for HTTP-level tests.

use nyc311_dashboard::config::AppConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const GRAND_TOTAL: u64 = 332_102;
pub const TEST_PLOTLY_SRC: &str = "/static/plotly-test.js";

/// Config with a local plotly URL so rendered pages are easy to assert on.
pub fn test_config() -> AppConfig {
    AppConfig {
        plotly_src: TEST_PLOTLY_SRC.to_string(),
        ..AppConfig::default()
    }
}
