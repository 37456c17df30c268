//! Theme constants for the quality dashboard
//!
//! Colors are kept as hex strings so they can be serialized into snapshots
//! unchanged. The TUI converts them with [`parse_hex`].

/// Brand colors used by the header and chart accents
pub mod brand {
    /// Primary accent (terracotta)
    pub const ACCENT: &str = "#c75d3c";
    /// Darker accent for borders and emphasis
    pub const ACCENT_DARK: &str = "#a64b2f";
    /// Muted slate used for secondary labels
    pub const MUTED: &str = "#5c6b63";
}

/// Text colors
pub mod text {
    /// Primary text color
    pub const PRIMARY: &str = "#e2e8f0";
    /// Secondary text color (muted)
    pub const SECONDARY: &str = "#94a3b8";
}

/// Status colors
pub mod status {
    /// Success color (green)
    pub const SUCCESS: &str = "#68904d";
    /// Danger color (red)
    pub const DANGER: &str = "#c14953";
    /// Warning color (amber)
    pub const WARNING: &str = "#f59e0b";
}

/// Static-analysis grade colors
pub mod rating {
    pub const A: &str = "#22c55e";
    pub const B: &str = "#3b82f6";
    pub const C: &str = "#eab308";
    pub const D: &str = "#f97316";
    pub const E: &str = "#ef4444";
    /// Fallback for anything that is not a known grade
    pub const NEUTRAL: &str = "#6b7280";

    pub const A_BG: &str = "#dcfce7";
    pub const B_BG: &str = "#dbeafe";
    pub const C_BG: &str = "#fef9c3";
    pub const D_BG: &str = "#ffedd5";
    pub const E_BG: &str = "#fee2e2";
    pub const NEUTRAL_BG: &str = "#f3f4f6";
}

/// Line colors of the history charts
pub mod trend {
    pub const SCORE: &str = "#c75d3c";
    pub const BUGS: &str = "#c14953";
    pub const COVERAGE: &str = "#68904d";
}

/// Tool integration status colors
pub mod tool {
    pub const ACTIVE: &str = "#22c55e";
    pub const INACTIVE: &str = "#9ca3af";
}

/// Parse a `#rrggbb` color into its components.
///
/// Returns `None` for anything that is not a six-digit hex color.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Get the color for a tool status dot
pub fn tool_status_color(active: bool) -> &'static str {
    if active { tool::ACTIVE } else { tool::INACTIVE }
}

/// Color for a usage gauge: green below 70%, amber below 85%, red above.
pub fn usage_color(percent: u8) -> &'static str {
    match percent {
        0..=69 => status::SUCCESS,
        70..=84 => status::WARNING,
        _ => status::DANGER,
    }
}
