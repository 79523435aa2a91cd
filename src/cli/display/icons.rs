//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Request accepted
    pub const SUCCESS: &'static str = "✓";

    /// Accepted with adjustments
    pub const WARNING: &'static str = "⚠";

    /// Request rejected
    pub const ERROR: &'static str = "✗";

    pub fn get_result_icon(ok: bool) -> &'static str {
        if ok {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }

    pub fn get_result_text(ok: bool) -> &'static str {
        if ok {
            "Valid"
        } else {
            "Invalid"
        }
    }
}
