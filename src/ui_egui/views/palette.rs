use egui::Color32;

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(crate) fn fallback_color() -> Color32 {
    Color32::from_rgb(100, 150, 200)
}

/// Parse a `#RRGGBB` or `#RGB` color.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim_start_matches('#');
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color32::from_rgb(r, g, b))
    } else if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
        Some(Color32::from_rgb(r, g, b))
    } else {
        None
    }
}

/// Resolve a style token such as `bg-blue-500`, `text-blue-500` or `#3B82F6`.
///
/// Named tokens map by color family; the shade is ignored.
pub fn token_color(token: &str) -> Option<Color32> {
    if token.starts_with('#') {
        return parse_hex_color(token);
    }

    let mut parts = token.split('-');
    let first = parts.next()?;
    let family = match first {
        "bg" | "text" | "border" => parts.next()?,
        other => other,
    };

    let rgb = match family {
        "slate" => (0x64, 0x74, 0x8B),
        "gray" => (0x6B, 0x72, 0x80),
        "red" => (0xEF, 0x44, 0x44),
        "orange" => (0xF9, 0x73, 0x16),
        "amber" => (0xF5, 0x9E, 0x0B),
        "yellow" => (0xEA, 0xB3, 0x08),
        "lime" => (0x84, 0xCC, 0x16),
        "green" => (0x22, 0xC5, 0x5E),
        "emerald" => (0x10, 0xB9, 0x81),
        "teal" => (0x14, 0xB8, 0xA6),
        "cyan" => (0x06, 0xB6, 0xD4),
        "sky" => (0x0E, 0xA5, 0xE9),
        "blue" => (0x3B, 0x82, 0xF6),
        "indigo" => (0x63, 0x66, 0xF1),
        "violet" => (0x8B, 0x5C, 0xF6),
        "purple" => (0xA8, 0x55, 0xF7),
        "fuchsia" => (0xD9, 0x46, 0xEF),
        "pink" => (0xEC, 0x48, 0x99),
        "rose" => (0xF4, 0x3F, 0x5E),
        _ => return None,
    };
    Some(Color32::from_rgb(rgb.0, rgb.1, rgb.2))
}

/// Readable text color on top of `background`.
pub(crate) fn text_on(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 170.0 {
        Color32::from_rgb(20, 20, 20)
    } else {
        Color32::WHITE
    }
}
