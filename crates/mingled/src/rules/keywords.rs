//! Fixed keyword tables used by flex and typography handlers.

use phf::{phf_map, phf_set};

/// Compact justify-content keywords mapped to CSS values.
pub static JUSTIFY_CONTENT: phf::Map<&'static str, &'static str> = phf_map! {
    "start" => "flex-start",
    "end" => "flex-end",
    "center" => "center",
    "between" => "space-between",
    "around" => "space-around",
    "evenly" => "space-evenly",
};

/// Compact align-items keywords mapped to CSS values.
pub static ALIGN_ITEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "start" => "flex-start",
    "end" => "flex-end",
    "center" => "center",
    "stretch" => "stretch",
    "baseline" => "baseline",
};

/// Named font weights.
pub static FONT_WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "xlight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "xbold" => "800",
    "black" => "900",
};

/// The closed set of pseudo-class suffixes the variant pipeline strips.
pub static PSEUDO_CLASSES: phf::Set<&'static str> = phf_set! {
    "hover",
    "focus",
    "active",
    "visited",
    "disabled",
    "focus-within",
};

/// Expands the two justify shorthands that differ from their CSS names;
/// every other keyword passes through as written.
pub fn shorten_justify(value: &str) -> &str {
    match value {
        "between" => "space-between",
        "around" => "space-around",
        other => other,
    }
}
