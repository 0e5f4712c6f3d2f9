//! Stable identifiers shared between subsystems: settings keys, value type tags,
//! well-known property names and converter names.

// --- Settings file ---

pub const SETTINGS_FILE: &str = "settings.toml";

pub const CONVERTER_SECTION: &str = "Converter";
pub const CONVERTER_NAMES: &str = "Names";
pub const CONVERTER_COPY: &str = "Copy";
pub const CONVERTER_PASTE: &str = "Paste";
pub const CONVERTER_DISPLAY: &str = "Display";

// --- Dynamic value type tags ---

pub const TAG_STRING: &str = "string";
pub const TAG_INT32: &str = "int32";
pub const TAG_FLOAT: &str = "float";
pub const TAG_COLOR: &str = "color";
pub const TAG_PTR: &str = "ptr";

// --- Well-known property names ---

pub const PROP_CONVERTERS: &str = "Converters";

// --- Converters ---

pub const COLOR_WEB_HEX: &str = "color_web_hex";
pub const COLOR_WEB_HEX_NO_HASH: &str = "color_web_hex_no_hash";
pub const COLOR_CSS_RGB: &str = "color_css_rgb";
pub const COLOR_CSS_HSL: &str = "color_css_hsl";
pub const COLOR_VEC3_FLOAT: &str = "color_vec3_float";

/// Converter order and enablement used when no order was ever persisted.
pub const FALLBACK_CONVERTERS: &[&str] = &[COLOR_WEB_HEX, COLOR_CSS_RGB, COLOR_CSS_HSL];

/// Display converter used when the persisted one is missing or unknown.
pub const DEFAULT_DISPLAY_CONVERTER: &str = COLOR_WEB_HEX;
