//! Color and border value resolution.

use crate::palette::Palette;
use crate::rules::units::{is_digits, parse_number};
use crate::rules::Profile;
use crate::types::StyleMap;

/// Resolves a color token for the given output profile.
///
/// Hex literals pass through verbatim. Bare names resolve through the
/// palette with a literal fallback. In the CSS profile a `name/NN`
/// suffix lowers to a `color-mix` percentage against transparent; the
/// native profile treats the whole text as one palette lookup.
pub fn resolve_color(raw: &str, palette: &Palette, profile: Profile) -> String {
    match profile {
        Profile::Native => palette.resolve(raw),
        Profile::Css => {
            if let Some((base, opacity)) = raw.split_once('/') {
                if is_digits(opacity) {
                    let resolved = if base.starts_with('#') {
                        base.to_string()
                    } else {
                        palette.resolve(base)
                    };
                    return format!("color-mix(in srgb, {resolved} {opacity}%, transparent)");
                }
            }
            if raw.starts_with('#') {
                raw.to_string()
            } else {
                palette.resolve(raw)
            }
        }
    }
}

/// Property names for one border edge in both profiles.
pub(crate) struct BorderEdgeProps {
    pub css: &'static str,
    pub native_width: &'static str,
    pub native_color: &'static str,
}

pub(crate) static BORDER_ALL: BorderEdgeProps = BorderEdgeProps {
    css: "border",
    native_width: "borderWidth",
    native_color: "borderColor",
};
pub(crate) static BORDER_TOP: BorderEdgeProps = BorderEdgeProps {
    css: "border-top",
    native_width: "borderTopWidth",
    native_color: "borderTopColor",
};
pub(crate) static BORDER_RIGHT: BorderEdgeProps = BorderEdgeProps {
    css: "border-right",
    native_width: "borderRightWidth",
    native_color: "borderRightColor",
};
pub(crate) static BORDER_BOTTOM: BorderEdgeProps = BorderEdgeProps {
    css: "border-bottom",
    native_width: "borderBottomWidth",
    native_color: "borderBottomColor",
};
pub(crate) static BORDER_LEFT: BorderEdgeProps = BorderEdgeProps {
    css: "border-left",
    native_width: "borderLeftWidth",
    native_color: "borderLeftColor",
};

/// Builds a border fragment from `color` or `color|width|style`.
///
/// Width defaults to 1, style to `solid`; a bare `0` or `none` means no
/// border at all.
pub(crate) fn border_map(
    value: &str,
    edge: &BorderEdgeProps,
    palette: &Palette,
    profile: Profile,
) -> StyleMap {
    let mut map = StyleMap::new();

    if value == "0" || value == "none" {
        match profile {
            Profile::Css => map.set(edge.css, "none"),
            Profile::Native => map.set(edge.native_width, 0.0),
        }
        return map;
    }

    let mut parts = value.split('|');
    let color = parts.next().unwrap_or_default();
    let width = parts.next().filter(|w| !w.is_empty()).unwrap_or("1");
    let style = parts.next().filter(|s| !s.is_empty()).unwrap_or("solid");
    let resolved = resolve_color(color, palette, profile);

    match profile {
        Profile::Css => {
            let width_val = if is_digits(width) {
                format!("{width}px")
            } else {
                width.to_string()
            };
            map.set(edge.css, format!("{width_val} {style} {resolved}"));
        }
        Profile::Native => {
            match parse_number(width) {
                Some(n) => map.set(edge.native_width, n),
                None => map.set(edge.native_width, width),
            }
            map.set(edge.native_color, resolved);
            map.set("borderStyle", style);
        }
    }
    map
}

/// Resolves the color part of a `shadow:` token: `(r,g,b,a)` lowers to
/// `rgba(...)`, hex passes through, names resolve via the palette.
pub(crate) fn shadow_color(raw: &str, palette: &Palette) -> String {
    if raw.starts_with('(') && raw.ends_with(')') {
        format!("rgba({})", &raw[1..raw.len() - 1])
    } else if raw.starts_with('#') {
        raw.to_string()
    } else {
        resolve_color(raw, palette, Profile::Css)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StyleValue;

    #[test]
    fn hex_passes_through() {
        let palette = Palette::default();
        assert_eq!(resolve_color("#ff0000", &palette, Profile::Css), "#ff0000");
        assert_eq!(
            resolve_color("#ff0000", &palette, Profile::Native),
            "#ff0000"
        );
    }

    #[test]
    fn opacity_suffix_lowers_to_color_mix() {
        let palette = Palette::default();
        assert_eq!(
            resolve_color("blue/50", &palette, Profile::Css),
            "color-mix(in srgb, #1289F8 50%, transparent)"
        );
        assert_eq!(
            resolve_color("#123456/25", &palette, Profile::Css),
            "color-mix(in srgb, #123456 25%, transparent)"
        );
    }

    #[test]
    fn border_defaults_width_and_style() {
        let palette = Palette::default();
        let map = border_map("gray-20", &BORDER_ALL, &palette, Profile::Css);
        assert_eq!(
            map.get("border").and_then(StyleValue::as_str),
            Some("1px solid #E3E5E5")
        );

        let map = border_map("gray-20|2|dashed", &BORDER_ALL, &palette, Profile::Native);
        assert_eq!(map.get("borderWidth"), Some(&StyleValue::Num(2.0)));
        assert_eq!(
            map.get("borderColor").and_then(StyleValue::as_str),
            Some("#E3E5E5")
        );
        assert_eq!(
            map.get("borderStyle").and_then(StyleValue::as_str),
            Some("dashed")
        );
    }

    #[test]
    fn zero_border_means_none() {
        let palette = Palette::default();
        let css = border_map("0", &BORDER_ALL, &palette, Profile::Css);
        assert_eq!(css.get("border").and_then(StyleValue::as_str), Some("none"));

        let native = border_map("none", &BORDER_ALL, &palette, Profile::Native);
        assert_eq!(native.get("borderWidth"), Some(&StyleValue::Num(0.0)));
    }
}
