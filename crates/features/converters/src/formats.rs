//! Text forms of the built-in converters.
//!
//! Every parser trims surrounding whitespace and is case-insensitive where the format
//! has letters. Parsers return `None` rather than guessing on malformed input.

use tinct_domain::Color;

// --- Web hex ---

#[must_use]
pub fn web_hex(color: Color) -> String {
    format!("#{}", web_hex_no_hash(color))
}

#[must_use]
pub fn web_hex_no_hash(color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("{r:02x}{g:02x}{b:02x}")
}

/// Parses `#rrggbb` or the short `#rgb` form.
#[must_use]
pub fn parse_web_hex(text: &str) -> Option<Color> {
    parse_hex_digits(text.trim().strip_prefix('#')?)
}

/// Parses bare `rrggbb` or `rgb` digits.
#[must_use]
pub fn parse_web_hex_no_hash(text: &str) -> Option<Color> {
    parse_hex_digits(text.trim())
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some(Color::from_rgb8(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        },
        _ => None,
    }
}

// --- CSS functional notation ---

#[must_use]
pub fn css_rgb(color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("rgb({r}, {g}, {b})")
}

/// Parses `rgb(r, g, b)` with integer channels in `0..=255`.
#[must_use]
pub fn parse_css_rgb(text: &str) -> Option<Color> {
    let [r, g, b] = css_arguments(text, "rgb")?;
    Some(Color::from_rgb8(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?))
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn css_hsl(color: Color) -> String {
    let (h, s, l) = rgb_to_hsl(color);
    format!("hsl({}, {}%, {}%)", h.round() as i32 % 360, (s * 100.0).round() as i32, (l * 100.0).round() as i32)
}

/// Parses `hsl(h, s%, l%)`. Hue is in degrees and wraps; saturation and lightness are clamped.
#[must_use]
pub fn parse_css_hsl(text: &str) -> Option<Color> {
    let [h, s, l] = css_arguments(text, "hsl")?;
    let percent = |v: &str| v.strip_suffix('%')?.trim().parse::<f32>().ok().map(|p| (p / 100.0).clamp(0.0, 1.0));
    let hue = h.strip_suffix("deg").unwrap_or(h).trim().parse::<f32>().ok()?;
    if !hue.is_finite() {
        return None;
    }
    Some(hsl_to_rgb(hue, percent(s)?, percent(l)?))
}

fn css_arguments<'a>(text: &'a str, function: &str) -> Option<[&'a str; 3]> {
    let text = text.trim();
    let (head, rest) = text.split_at_checked(function.len())?;
    if !head.eq_ignore_ascii_case(function) {
        return None;
    }
    let inner = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;

    let mut parts = inner.split(',').map(str::trim);
    let args = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() { None } else { Some(args) }
}

// --- Float vector ---

/// Three channel floats with three decimals, as used in shader source.
#[must_use]
pub fn vec3_float(color: Color) -> String {
    format!("{:.3}, {:.3}, {:.3}", color.red, color.green, color.blue)
}

// --- HSL ---

/// Converts to hue in degrees `0.0..360.0`, saturation and lightness in `0.0..=1.0`.
#[must_use]
pub fn rgb_to_hsl(color: Color) -> (f32, f32, f32) {
    let Color { red, green, blue } = color;
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let lightness = (max + min) / 2.0;
    let delta = max - min;

    if delta <= f32::EPSILON {
        return (0.0, 0.0, lightness);
    }

    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
    let sector = if (max - red).abs() <= f32::EPSILON {
        ((green - blue) / delta).rem_euclid(6.0)
    } else if (max - green).abs() <= f32::EPSILON {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    ((sector * 60.0).rem_euclid(360.0), saturation.clamp(0.0, 1.0), lightness)
}

#[must_use]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector {
        s if s < 1.0 => (chroma, x, 0.0),
        s if s < 2.0 => (x, chroma, 0.0),
        s if s < 3.0 => (0.0, chroma, x),
        s if s < 4.0 => (0.0, x, chroma),
        s if s < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Color::new(r + m, g + m, b + m)
}
