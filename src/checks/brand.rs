//! Phoenix brand literals shared between the markup and the theme script.
//!
//! Every value is matched verbatim. `#ff1a1a` does not satisfy a check for
//! `#FF1A1A`.

/// Phoenix Red accent
pub const PHOENIX_RED: &str = "#FF1A1A";

/// Phoenix Gold accent
pub const PHOENIX_GOLD: &str = "#D4AF37";

/// Deep Black page background
pub const DEEP_BLACK: &str = "#0a0a0a";

/// Uppercase brand keyword expected in the preview page
pub const BRAND_KEYWORD: &str = "PHOENIX";

/// Theme variant names registered by the installer script
pub const THEME_DARK: &str = "PhoenixElectric-Dark";
pub const THEME_GOLD: &str = "PhoenixElectric-Gold";
pub const THEME_LIGHT: &str = "PhoenixElectric-Light";
