use tinct_domain::constants::{
    COLOR_CSS_HSL, COLOR_CSS_RGB, COLOR_WEB_HEX, CONVERTER_COPY, CONVERTER_DISPLAY,
    CONVERTER_NAMES, CONVERTER_PASTE, CONVERTER_SECTION, DEFAULT_DISPLAY_CONVERTER,
    FALLBACK_CONVERTERS,
};

#[test]
fn converter_settings_keys_are_stable() {
    assert_eq!(CONVERTER_SECTION, "Converter");
    assert_eq!(CONVERTER_NAMES, "Names");
    assert_eq!(CONVERTER_COPY, "Copy");
    assert_eq!(CONVERTER_PASTE, "Paste");
    assert_eq!(CONVERTER_DISPLAY, "Display");
}

#[test]
fn fallback_converters_start_with_display_default() {
    assert_eq!(FALLBACK_CONVERTERS, &[COLOR_WEB_HEX, COLOR_CSS_RGB, COLOR_CSS_HSL]);
    assert_eq!(DEFAULT_DISPLAY_CONVERTER, "color_web_hex");
}
