//! Handler implementations and the per-profile rule tables.
//!
//! Handlers are pure: captured value text in, style fragment out, with
//! the palette and the rem base as the only shared lookups. A handler
//! returning `None` means the rule declines the matcher; an empty map
//! means it matched but produced no styles. Both are valid.

use smallvec::SmallVec;

use crate::palette::Palette;
use crate::rules::keywords::{shorten_justify, ALIGN_ITEMS, FONT_WEIGHTS, JUSTIFY_CONTENT};
use crate::rules::units::{is_digits, offset_value, parse_length, parse_number, px_to_rem};
use crate::rules::values::{
    border_map, resolve_color, shadow_color, BorderEdgeProps, BORDER_ALL, BORDER_BOTTOM,
    BORDER_LEFT, BORDER_RIGHT, BORDER_TOP,
};
use crate::rules::{Profile, Rule, RuleTable};
use crate::types::{static_map, StyleMap, StyleValue};

/// Pipe-separated value list; four slots cover every token grammar.
type Values<'a> = SmallVec<[&'a str; 4]>;

fn split_values(value: &str) -> Values<'_> {
    value.split('|').collect()
}

/// Numeric text becomes a number, everything else stays a string. An
/// empty piece counts as zero.
fn maybe_number(value: &str) -> StyleValue {
    if value.is_empty() {
        return StyleValue::Num(0.0);
    }
    match parse_number(value) {
        Some(n) => StyleValue::Num(n),
        None => StyleValue::Str(value.to_string()),
    }
}

/// Property names for a spacing shorthand in one profile.
pub(crate) struct SpacingProps {
    all: &'static str,
    vertical: &'static str,
    horizontal: &'static str,
    top: &'static str,
    right: &'static str,
    bottom: &'static str,
    left: &'static str,
}

static PADDING: SpacingProps = SpacingProps {
    all: "padding",
    vertical: "paddingVertical",
    horizontal: "paddingHorizontal",
    top: "paddingTop",
    right: "paddingRight",
    bottom: "paddingBottom",
    left: "paddingLeft",
};

static MARGIN: SpacingProps = SpacingProps {
    all: "margin",
    vertical: "marginVertical",
    horizontal: "marginHorizontal",
    top: "marginTop",
    right: "marginRight",
    bottom: "marginBottom",
    left: "marginLeft",
};

/// Direction variants of the CSS flex family.
pub(crate) enum FlexKind {
    Row,
    Col,
    Inline,
}

/// The closed set of handler kinds a rule can dispatch to.
pub(crate) enum Handler {
    /// `p:`/`m:` shorthand with 1–4 pipe values.
    Spacing(&'static SpacingProps),
    /// One converted value applied to a pair of properties.
    SpacingPair([&'static str; 2]),
    /// One converted value applied to a single property.
    SpacingSingle(&'static str),
    /// Keyword-aware length (`full`, `screen`, `fit`, numbers).
    Sidelength(&'static str),
    /// One length applied to both dimensions (`size:`).
    SidelengthPair([&'static str; 2]),
    /// Palette-resolved color.
    Color(&'static str),
    /// Border shorthand for one edge.
    Border(&'static BorderEdgeProps),
    /// `r:` with 1–4 corner values.
    Radius,
    /// `f:size[|color]`.
    FontSize,
    FontWeight,
    /// `ff:` font family indirection (CSS profile).
    FontFamily,
    /// `lh:` with px-or-raw formatting (CSS profile).
    LineHeightCss,
    /// Number-or-raw passthrough on one property.
    NumberProp(&'static str),
    /// Number-or-raw passthrough on a property pair.
    NumberPair([&'static str; 2]),
    /// Raw string passthrough.
    RawProp(&'static str),
    /// Justify keyword expansion (`between`, `around`).
    JustifyProp(&'static str),
    /// CSS flex family with direction and optional value.
    Flex(FlexKind),
    /// `row[:align|justify]`.
    Row,
    /// Digit-only value with a `px` suffix.
    PxProp(&'static str),
    /// Percent opacity scaled to a fraction (native profile).
    OpacityPercent,
    /// Raw numeric opacity (CSS profile).
    OpacityRaw,
    ZIndex,
    /// `shadow:x|y|blur|spread|color`.
    Shadow,
    /// Single-word value passthrough.
    WordProp(&'static str),
    /// Integer-or-percent position offset (CSS profile).
    OffsetProp(&'static str),
    /// `inset:` applied to all four sides.
    Inset,
    /// `abs:t|r|b|l` progressive sides (native profile).
    AbsoluteSides,
    /// `translate:x[|y]`.
    Translate,
    /// `grid-cols:N`.
    GridCols,
    /// `ta:` restricted text-align (CSS profile).
    TextAlignCss,
    /// `scroll:hide` nested scrollbar fragment.
    ScrollHide,
    /// A fixed property set.
    Static(&'static [(&'static str, &'static str)]),
}

impl RuleTable {
    pub(crate) fn apply(
        &self,
        handler: &Handler,
        value: &str,
        palette: &Palette,
    ) -> Option<StyleMap> {
        let profile = self.profile();
        let mut map = StyleMap::new();
        match handler {
            Handler::Static(props) => return Some(static_map(props)),
            Handler::Spacing(props) => return Some(spacing_map(value, props, profile)),
            Handler::SpacingPair(props) => {
                let converted = px_to_rem(value);
                map.set(props[0], converted.clone());
                map.set(props[1], converted);
            }
            Handler::SpacingSingle(prop) => match profile {
                Profile::Native => map.set(*prop, maybe_number(value)),
                Profile::Css => map.set(*prop, px_to_rem(value)),
            },
            Handler::Sidelength(prop) => map.set(*prop, sidelength(value, profile)),
            Handler::SidelengthPair(props) => {
                let length = sidelength(value, profile);
                map.set(props[0], length.clone());
                map.set(props[1], length);
            }
            Handler::Color(prop) => map.set(*prop, resolve_color(value, palette, profile)),
            Handler::Border(edge) => return Some(border_map(value, edge, palette, profile)),
            Handler::Radius => return radius_map(value, profile),
            Handler::FontSize => return font_size_map(value, palette, profile),
            Handler::FontWeight => {
                let prop = match profile {
                    Profile::Native => "fontWeight",
                    Profile::Css => "font-weight",
                };
                match FONT_WEIGHTS.get(value) {
                    Some(weight) => map.set(prop, *weight),
                    None => match profile {
                        Profile::Native => map.set(prop, maybe_number(value)),
                        Profile::Css => map.set(prop, value),
                    },
                }
            }
            Handler::FontFamily => {
                if value.is_empty()
                    || !value
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
                {
                    return None;
                }
                let family = if value == "inherit" {
                    "inherit".to_string()
                } else {
                    format!("var(--font-{value}, {value})")
                };
                map.set("font-family", family);
            }
            Handler::LineHeightCss => {
                let n = parse_number(value)?;
                if value.starts_with('-') {
                    return None;
                }
                if n.fract() == 0.0 {
                    map.set("line-height", format!("{value}px"));
                } else {
                    map.set("line-height", value);
                }
            }
            Handler::NumberProp(prop) => map.set(*prop, maybe_number(value)),
            Handler::NumberPair(props) => {
                let parsed = maybe_number(value);
                map.set(props[0], parsed.clone());
                map.set(props[1], parsed);
            }
            Handler::RawProp(prop) => map.set(*prop, value),
            Handler::JustifyProp(prop) => map.set(*prop, shorten_justify(value)),
            Handler::Flex(kind) => return Some(flex_map(kind, value)),
            Handler::Row => return Some(row_map(value, profile)),
            Handler::PxProp(prop) => {
                if !is_digits(value) {
                    return None;
                }
                map.set(*prop, format!("{value}px"));
            }
            Handler::OpacityPercent => match parse_number(value) {
                Some(n) => map.set("opacity", n / 100.0),
                None => map.set("opacity", value),
            },
            Handler::OpacityRaw => {
                if value.starts_with('-') || parse_number(value).is_none() {
                    return None;
                }
                map.set("opacity", value);
            }
            Handler::ZIndex => {
                let n = parse_number(value)?;
                if n.fract() != 0.0 {
                    return None;
                }
                map.set("z-index", value);
            }
            Handler::Shadow => return shadow_map(value, palette),
            Handler::WordProp(prop) => {
                if value.is_empty()
                    || !value.chars().all(|c| c.is_alphanumeric() || c == '_')
                {
                    return None;
                }
                map.set(*prop, value);
            }
            Handler::OffsetProp(prop) => map.set(*prop, offset_value(value)?),
            Handler::Inset => {
                let offset = offset_value(value)?;
                for side in ["top", "right", "bottom", "left"] {
                    map.set(side, offset.clone());
                }
            }
            Handler::AbsoluteSides => return Some(absolute_map(value)),
            Handler::Translate => return translate_map(value),
            Handler::GridCols => {
                if !is_digits(value) {
                    return None;
                }
                map.set("grid-template-columns", format!("repeat({value}, minmax(0, 1fr))"));
            }
            Handler::TextAlignCss => {
                if !matches!(value, "left" | "center" | "right" | "justify") {
                    return None;
                }
                map.set("text-align", value);
            }
            Handler::ScrollHide => {
                let mut scrollbar = StyleMap::new();
                scrollbar.set("display", "none");
                map.set("&::-webkit-scrollbar", scrollbar);
                map.set("-ms-overflow-style", "none");
                map.set("scrollbar-width", "none");
            }
        }
        Some(map)
    }
}

/// Spacing shorthand: 1 = all, 2 = vertical|horizontal, 3 =
/// top|horizontal|bottom, 4 = top|right|bottom|left. The CSS profile
/// emits one shorthand string with px to rem conversion; the native
/// profile expands to the per-side properties with raw numbers.
fn spacing_map(value: &str, props: &SpacingProps, profile: Profile) -> StyleMap {
    let mut map = StyleMap::new();
    let parts = split_values(value);
    match profile {
        Profile::Css => {
            let joined = parts
                .iter()
                .map(|part| {
                    if part.is_empty() {
                        "0".to_string()
                    } else {
                        px_to_rem(part)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            map.set(props.all, joined);
        }
        Profile::Native => {
            let values: SmallVec<[StyleValue; 4]> =
                parts.iter().map(|part| maybe_number(part)).collect();
            match values.len() {
                1 => map.set(props.all, values[0].clone()),
                2 => {
                    map.set(props.vertical, values[0].clone());
                    map.set(props.horizontal, values[1].clone());
                }
                3 => {
                    map.set(props.top, values[0].clone());
                    map.set(props.right, values[1].clone());
                    map.set(props.bottom, values[2].clone());
                    map.set(props.left, values[1].clone());
                }
                4 => {
                    map.set(props.top, values[0].clone());
                    map.set(props.right, values[1].clone());
                    map.set(props.bottom, values[2].clone());
                    map.set(props.left, values[3].clone());
                }
                _ => {}
            }
        }
    }
    map
}

/// Length with the three reserved keywords; digits become pixels (CSS)
/// or raw numbers (native), anything else passes through.
fn sidelength(value: &str, profile: Profile) -> StyleValue {
    match value {
        "full" => StyleValue::Str("100%".to_string()),
        "screen" => StyleValue::Str("100vh".to_string()),
        "fit" => StyleValue::Str("fit-content".to_string()),
        _ => match profile {
            Profile::Css => {
                if is_digits(value) {
                    StyleValue::Str(format!("{value}px"))
                } else {
                    StyleValue::Str(value.to_string())
                }
            }
            Profile::Native => maybe_number(value),
        },
    }
}

/// Border-radius corner inheritance: missing top-right and bottom-right
/// fall back to top-left, missing bottom-left falls back to top-right.
fn radius_map(value: &str, profile: Profile) -> Option<StyleMap> {
    let parts = split_values(value);
    if parts.len() > 4 || parts.iter().any(|part| !is_digits(part)) {
        return None;
    }
    let top_left = parts[0];
    let top_right = parts.get(1).copied().unwrap_or(top_left);
    let bottom_right = parts.get(2).copied().unwrap_or(top_left);
    let bottom_left = parts.get(3).copied().unwrap_or(top_right);

    let mut map = StyleMap::new();
    match profile {
        Profile::Css => {
            map.set(
                "border-radius",
                format!("{top_left}px {top_right}px {bottom_right}px {bottom_left}px"),
            );
        }
        Profile::Native => {
            if parts.len() == 1 {
                map.set("borderRadius", top_left.parse::<f64>().ok()?);
            } else {
                map.set("borderTopLeftRadius", top_left.parse::<f64>().ok()?);
                map.set("borderTopRightRadius", top_right.parse::<f64>().ok()?);
                map.set("borderBottomRightRadius", bottom_right.parse::<f64>().ok()?);
                map.set("borderBottomLeftRadius", bottom_left.parse::<f64>().ok()?);
            }
        }
    }
    Some(map)
}

fn font_size_map(value: &str, palette: &Palette, profile: Profile) -> Option<StyleMap> {
    let parts = split_values(value);
    if parts.len() > 2 {
        return Some(StyleMap::new());
    }
    let mut map = StyleMap::new();
    match profile {
        Profile::Css => {
            if !is_digits(parts[0]) {
                return None;
            }
            map.set("font-size", px_to_rem(parts[0]));
        }
        Profile::Native => map.set("fontSize", maybe_number(parts[0])),
    }
    if let Some(color) = parts.get(1) {
        map.set("color", resolve_color(color, palette, profile));
    }
    Some(map)
}

fn flex_map(kind: &FlexKind, value: &str) -> StyleMap {
    let direction = match kind {
        FlexKind::Col => "column",
        _ => "row",
    };
    let display = match kind {
        FlexKind::Inline => "inline-flex",
        _ => "flex",
    };

    let mut map = StyleMap::new();
    if value.is_empty() {
        map.set("display", display);
        map.set("flex-direction", direction);
        return map;
    }

    // A bare number is the grow shorthand and replaces the whole
    // fragment.
    if parse_number(value).is_some() {
        map.set("flex", value);
        return map;
    }

    map.set("display", display);
    map.set("flex-direction", direction);

    let mut parts = value.splitn(2, '|');
    let justify = parts.next().unwrap_or_default();
    let align = parts.next();

    if justify == "center" && align.is_none_or(str::is_empty) {
        map.set("justify-content", "center");
        map.set("align-items", "center");
        return map;
    }

    if let Some(mapped) = JUSTIFY_CONTENT.get(justify) {
        map.set("justify-content", *mapped);
    }
    if let Some(mapped) = align.and_then(|a| ALIGN_ITEMS.get(a)) {
        map.set("align-items", *mapped);
    }
    map
}

/// `row` takes its values in align|justify order; an empty align slot
/// falls back to `stretch`. More than two values yields nothing.
fn row_map(value: &str, profile: Profile) -> StyleMap {
    let (direction_prop, align_prop, justify_prop) = match profile {
        Profile::Native => ("flexDirection", "alignItems", "justifyContent"),
        Profile::Css => ("flex-direction", "align-items", "justify-content"),
    };

    let mut map = StyleMap::new();
    if profile == Profile::Css {
        map.set("display", "flex");
    }
    map.set(direction_prop, "row");

    if value.is_empty() {
        return map;
    }
    let parts = split_values(value);
    match parts.len() {
        1 => map.set(align_prop, parts[0]),
        2 => {
            let align = if parts[0].is_empty() { "stretch" } else { parts[0] };
            map.set(align_prop, align);
            map.set(justify_prop, shorten_justify(parts[1]));
        }
        _ => return StyleMap::new(),
    }
    map
}

fn absolute_map(value: &str) -> StyleMap {
    let mut map = StyleMap::new();
    map.set("position", "absolute");
    for (side, part) in ["top", "right", "bottom", "left"]
        .iter()
        .zip(split_values(value).iter())
    {
        map.set(*side, maybe_number(part));
    }
    map
}

fn translate_map(value: &str) -> Option<StyleMap> {
    let parts = split_values(value);
    if parts.len() > 2 {
        return None;
    }
    let x = translate_value(parts[0])?;
    let y = match parts.get(1) {
        Some(part) => translate_value(part)?,
        None => "0".to_string(),
    };
    let mut map = StyleMap::new();
    map.set("transform", format!("translate({x}, {y})"));
    Some(map)
}

fn translate_value(value: &str) -> Option<String> {
    let (_, percent) = parse_length(value)?;
    if percent {
        Some(value.to_string())
    } else {
        Some(format!("{value}px"))
    }
}

fn shadow_map(value: &str, palette: &Palette) -> Option<StyleMap> {
    let parts = split_values(value);
    if parts.len() != 5 {
        return None;
    }
    for part in &parts[..4] {
        let n = parse_number(part)?;
        if n.fract() != 0.0 {
            return None;
        }
    }
    let color = shadow_color(parts[4], palette);
    let mut map = StyleMap::new();
    map.set(
        "box-shadow",
        format!(
            "{}px {}px {}px {}px {color}",
            parts[0], parts[1], parts[2], parts[3]
        ),
    );
    Some(map)
}

// Fixed property sets, native vocabulary.

static CENTER_NATIVE: [(&str, &str); 2] =
    [("alignItems", "center"), ("justifyContent", "center")];
static WRAP_NATIVE: [(&str, &str); 1] = [("flexWrap", "wrap")];
static UPPERCASE_NATIVE: [(&str, &str); 1] = [("textTransform", "uppercase")];
static UNDERLINE_NATIVE: [(&str, &str); 1] = [("textDecorationLine", "underline")];
static SEMI_NATIVE: [(&str, &str); 1] = [("fontWeight", "600")];
static BOLD_NATIVE: [(&str, &str); 1] = [("fontWeight", "bold")];
static CLEAR_NATIVE: [(&str, &str); 1] = [("backgroundColor", "transparent")];
static OVERFLOW_HIDDEN_NATIVE: [(&str, &str); 1] = [("overflow", "hidden")];
static ABSOLUTE_NATIVE: [(&str, &str); 1] = [("position", "absolute")];

// Fixed property sets, CSS vocabulary.

static CENTER_CSS: [(&str, &str); 2] =
    [("align-items", "center"), ("justify-content", "center")];
static WRAP_CSS: [(&str, &str); 1] = [("flex-wrap", "wrap")];
static BOLD_CSS: [(&str, &str); 1] = [("font-weight", "700")];
static SEMI_CSS: [(&str, &str); 1] = [("font-weight", "600")];
static REGULAR_CSS: [(&str, &str); 1] = [("font-weight", "400")];
static MEDIUM_CSS: [(&str, &str); 1] = [("font-weight", "500")];
static BLOCK_CSS: [(&str, &str); 1] = [("display", "block")];
static INLINE_CSS: [(&str, &str); 1] = [("display", "inline")];
static INLINE_BLOCK_CSS: [(&str, &str); 1] = [("display", "inline-block")];
static HIDDEN_CSS: [(&str, &str); 1] = [("display", "none")];
static GRID_CSS: [(&str, &str); 1] = [("display", "grid")];
static UPPERCASE_CSS: [(&str, &str); 1] = [("text-transform", "uppercase")];
static LOWERCASE_CSS: [(&str, &str); 1] = [("text-transform", "lowercase")];
static CAPITALIZE_CSS: [(&str, &str); 1] = [("text-transform", "capitalize")];
static NORMAL_CASE_CSS: [(&str, &str); 1] = [("text-transform", "none")];
static UNDERLINE_CSS: [(&str, &str); 1] = [("text-decoration", "underline")];
static LINE_THROUGH_CSS: [(&str, &str); 1] = [("text-decoration", "line-through")];
static OVERLINE_CSS: [(&str, &str); 1] = [("text-decoration", "overline")];
static NO_UNDERLINE_CSS: [(&str, &str); 1] = [("text-decoration", "none")];
static TEXT_LEFT_CSS: [(&str, &str); 1] = [("text-align", "left")];
static TEXT_CENTER_CSS: [(&str, &str); 1] = [("text-align", "center")];
static TEXT_RIGHT_CSS: [(&str, &str); 1] = [("text-align", "right")];
static NOWRAP_CSS: [(&str, &str); 1] = [("white-space", "nowrap")];
static PRE_WRAP_CSS: [(&str, &str); 1] = [("white-space", "pre-wrap")];
static ELLIPSIS_CSS: [(&str, &str); 3] = [
    ("overflow", "hidden"),
    ("text-overflow", "ellipsis"),
    ("white-space", "nowrap"),
];
static CODE_CSS: [(&str, &str); 4] = [
    ("font-family", "monospace"),
    ("background-color", "#f5f5f5"),
    ("padding", "2px 4px"),
    ("border-radius", "3px"),
];
static POINTER_CSS: [(&str, &str); 1] = [("cursor", "pointer")];
static NO_SELECT_CSS: [(&str, &str); 1] = [("user-select", "none")];
static RELATIVE_CSS: [(&str, &str); 1] = [("position", "relative")];
static ABSOLUTE_CSS: [(&str, &str); 1] = [("position", "absolute")];
static FIXED_CSS: [(&str, &str); 1] = [("position", "fixed")];
static STICKY_CSS: [(&str, &str); 1] = [("position", "sticky")];
static APPEARANCE_NONE_CSS: [(&str, &str); 1] = [("appearance", "none")];

/// Rule table for the structured-mapping backend.
pub(crate) fn native_rules() -> Vec<Rule> {
    use Handler::*;
    vec![
        // Spacing
        Rule::prefix("p:", Spacing(&PADDING)),
        Rule::prefix("pt:", SpacingSingle("paddingTop")),
        Rule::prefix("pr:", SpacingSingle("paddingRight")),
        Rule::prefix("pb:", SpacingSingle("paddingBottom")),
        Rule::prefix("pl:", SpacingSingle("paddingLeft")),
        Rule::prefix("px:", SpacingSingle("paddingHorizontal")),
        Rule::prefix("py:", SpacingSingle("paddingVertical")),
        Rule::prefix("m:", Spacing(&MARGIN)),
        Rule::prefix("mt:", SpacingSingle("marginTop")),
        Rule::prefix("ml:", SpacingSingle("marginLeft")),
        Rule::prefix("mb:", SpacingSingle("marginBottom")),
        Rule::prefix("mr:", SpacingSingle("marginRight")),
        Rule::prefix("mx:", SpacingSingle("marginHorizontal")),
        Rule::prefix("my:", SpacingSingle("marginVertical")),
        // Layout
        Rule::prefix("flex:", NumberProp("flex")),
        Rule::exact("row", Row),
        Rule::prefix("row:", Row),
        Rule::prefix("gap:", NumberProp("gap")),
        Rule::prefix("ar:", NumberProp("aspectRatio")),
        Rule::prefix("jc:", JustifyProp("justifyContent")),
        Rule::prefix("ai:", RawProp("alignItems")),
        Rule::prefix("self:", RawProp("alignSelf")),
        Rule::exact("center", Static(&CENTER_NATIVE)),
        Rule::exact("wrap", Static(&WRAP_NATIVE)),
        // Sizing
        Rule::prefix("w:", Sidelength("width")),
        Rule::prefix("max-w:", Sidelength("maxWidth")),
        Rule::prefix("min-w:", Sidelength("minWidth")),
        Rule::prefix("max-h:", Sidelength("maxHeight")),
        Rule::prefix("min-h:", Sidelength("minHeight")),
        Rule::prefix("h:", Sidelength("height")),
        Rule::prefix("size:", SidelengthPair(["width", "height"])),
        // Borders
        Rule::prefix("b:", Border(&BORDER_ALL)),
        Rule::prefix("bb:", Border(&BORDER_BOTTOM)),
        Rule::prefix("bt:", Border(&BORDER_TOP)),
        Rule::prefix("bl:", Border(&BORDER_LEFT)),
        Rule::prefix("br:", Border(&BORDER_RIGHT)),
        Rule::prefix("r:", Radius),
        Rule::prefix("tr:", NumberPair(["borderTopRightRadius", "borderTopLeftRadius"])),
        // Colors
        Rule::prefix("c:", Color("color")),
        Rule::prefix("bg:", Color("backgroundColor")),
        Rule::exact("clear", Static(&CLEAR_NATIVE)),
        // Typography
        Rule::prefix("f:", FontSize),
        Rule::prefix("t:", RawProp("textAlign")),
        Rule::prefix("ls:", NumberProp("letterSpacing")),
        Rule::exact("uc", Static(&UPPERCASE_NATIVE)),
        Rule::exact("u", Static(&UNDERLINE_NATIVE)),
        Rule::exact("underline", Static(&UNDERLINE_NATIVE)),
        Rule::prefix("lh:", NumberProp("lineHeight")),
        Rule::exact("semi", Static(&SEMI_NATIVE)),
        Rule::exact("bold", Static(&BOLD_NATIVE)),
        Rule::prefix("fw:", FontWeight),
        // Overflow and opacity
        Rule::prefix("of:", RawProp("overflow")),
        Rule::exact("ofh", Static(&OVERFLOW_HIDDEN_NATIVE)),
        Rule::prefix("o:", OpacityPercent),
        Rule::prefix("opacity:", OpacityPercent),
        // Positioning
        Rule::exact("abs", Static(&ABSOLUTE_NATIVE)),
        Rule::prefix("abs:", AbsoluteSides),
        Rule::prefix("bottom:", NumberProp("bottom")),
        Rule::prefix("top:", NumberProp("top")),
        Rule::prefix("left:", NumberProp("left")),
        Rule::prefix("right:", NumberProp("right")),
    ]
}

/// Rule table for the CSS backend.
pub(crate) fn css_rules() -> Vec<Rule> {
    use Handler::*;
    vec![
        // Dimensions
        Rule::prefix("h:", Sidelength("height")),
        Rule::prefix("min-h:", Sidelength("min-height")),
        Rule::prefix("max-h:", Sidelength("max-height")),
        Rule::prefix("w:", Sidelength("width")),
        Rule::prefix("min-w:", Sidelength("min-width")),
        Rule::prefix("max-w:", Sidelength("max-width")),
        Rule::prefix("size:", SidelengthPair(["width", "height"])),
        // Colors
        Rule::prefix("c:", Color("color")),
        Rule::prefix("bg:", Color("background-color")),
        // Margin
        Rule::prefix("m:", Spacing(&MARGIN)),
        Rule::prefix("mx:", SpacingPair(["margin-left", "margin-right"])),
        Rule::prefix("my:", SpacingPair(["margin-top", "margin-bottom"])),
        Rule::prefix("mt:", SpacingSingle("margin-top")),
        Rule::prefix("mr:", SpacingSingle("margin-right")),
        Rule::prefix("mb:", SpacingSingle("margin-bottom")),
        Rule::prefix("ml:", SpacingSingle("margin-left")),
        // Padding
        Rule::prefix("p:", Spacing(&PADDING)),
        Rule::prefix("px:", SpacingPair(["padding-left", "padding-right"])),
        Rule::prefix("py:", SpacingPair(["padding-top", "padding-bottom"])),
        Rule::prefix("pt:", SpacingSingle("padding-top")),
        Rule::prefix("pr:", SpacingSingle("padding-right")),
        Rule::prefix("pb:", SpacingSingle("padding-bottom")),
        Rule::prefix("pl:", SpacingSingle("padding-left")),
        // Typography
        Rule::prefix("f:", FontSize),
        Rule::prefix("lh:", LineHeightCss),
        Rule::prefix("fw:", FontWeight),
        Rule::exact("bold", Static(&BOLD_CSS)),
        Rule::exact("semi", Static(&SEMI_CSS)),
        Rule::exact("regular", Static(&REGULAR_CSS)),
        Rule::exact("medium", Static(&MEDIUM_CSS)),
        Rule::prefix("ff:", FontFamily),
        // Flex & layout
        Rule::exact("flex", Flex(FlexKind::Row)),
        Rule::prefix("flex:", Flex(FlexKind::Row)),
        Rule::exact("flex-col", Flex(FlexKind::Col)),
        Rule::prefix("flex-col:", Flex(FlexKind::Col)),
        Rule::exact("flex-inline", Flex(FlexKind::Inline)),
        Rule::prefix("flex-inline:", Flex(FlexKind::Inline)),
        Rule::exact("row", Row),
        Rule::prefix("row:", Row),
        Rule::exact("center", Static(&CENTER_CSS)),
        Rule::exact("wrap", Static(&WRAP_CSS)),
        Rule::prefix("gap:", PxProp("gap")),
        Rule::exact("block", Static(&BLOCK_CSS)),
        Rule::exact("inline", Static(&INLINE_CSS)),
        Rule::exact("inline-block", Static(&INLINE_BLOCK_CSS)),
        Rule::exact("hidden", Static(&HIDDEN_CSS)),
        // Grid
        Rule::exact("grid", Static(&GRID_CSS)),
        Rule::prefix("grid-cols:", GridCols),
        // Text
        Rule::exact("upper", Static(&UPPERCASE_CSS)),
        Rule::exact("uppercase", Static(&UPPERCASE_CSS)),
        Rule::exact("lower", Static(&LOWERCASE_CSS)),
        Rule::exact("lowercase", Static(&LOWERCASE_CSS)),
        Rule::exact("capitalize", Static(&CAPITALIZE_CSS)),
        Rule::exact("normal-case", Static(&NORMAL_CASE_CSS)),
        Rule::exact("underline", Static(&UNDERLINE_CSS)),
        Rule::exact("line-through", Static(&LINE_THROUGH_CSS)),
        Rule::exact("overline", Static(&OVERLINE_CSS)),
        Rule::exact("no-underline", Static(&NO_UNDERLINE_CSS)),
        Rule::exact("text-left", Static(&TEXT_LEFT_CSS)),
        Rule::exact("text-center", Static(&TEXT_CENTER_CSS)),
        Rule::exact("text-right", Static(&TEXT_RIGHT_CSS)),
        Rule::prefix("ta:", TextAlignCss),
        Rule::exact("nowrap", Static(&NOWRAP_CSS)),
        Rule::exact("pre-wrap", Static(&PRE_WRAP_CSS)),
        Rule::exact("ellipsis", Static(&ELLIPSIS_CSS)),
        Rule::exact("code", Static(&CODE_CSS)),
        // Cursor
        Rule::exact("pointer", Static(&POINTER_CSS)),
        Rule::exact("no-select", Static(&NO_SELECT_CSS)),
        // Borders
        Rule::prefix("b:", Border(&BORDER_ALL)),
        Rule::prefix("bt:", Border(&BORDER_TOP)),
        Rule::prefix("br:", Border(&BORDER_RIGHT)),
        Rule::prefix("bb:", Border(&BORDER_BOTTOM)),
        Rule::prefix("bl:", Border(&BORDER_LEFT)),
        Rule::prefix("r:", Radius),
        Rule::prefix("outline:", RawProp("outline")),
        // Visual
        Rule::prefix("o:", OpacityRaw),
        Rule::prefix("z:", ZIndex),
        Rule::prefix("shadow:", Shadow),
        // Overflow
        Rule::prefix("overflow:", WordProp("overflow")),
        Rule::prefix("overflow-x:", WordProp("overflow-x")),
        Rule::prefix("overflow-y:", WordProp("overflow-y")),
        Rule::exact("scroll:hide", ScrollHide),
        // Position
        Rule::exact("relative", Static(&RELATIVE_CSS)),
        Rule::exact("absolute", Static(&ABSOLUTE_CSS)),
        Rule::exact("fixed", Static(&FIXED_CSS)),
        Rule::exact("sticky", Static(&STICKY_CSS)),
        Rule::prefix("top:", OffsetProp("top")),
        Rule::prefix("right:", OffsetProp("right")),
        Rule::prefix("bottom:", OffsetProp("bottom")),
        Rule::prefix("left:", OffsetProp("left")),
        Rule::prefix("inset:", Inset),
        // Transform
        Rule::prefix("translate:", Translate),
        Rule::prefix("transform:", RawProp("transform")),
        // SVG
        Rule::prefix("stroke:", Color("stroke")),
        Rule::prefix("stroke-w:", PxProp("stroke-width")),
        // Misc
        Rule::exact("none", Static(&APPEARANCE_NONE_CSS)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(profile: Profile, matcher: &str) -> Option<StyleMap> {
        let table = RuleTable::new(profile);
        let palette = Palette::default();
        table.resolve(matcher, &palette)
    }

    #[test]
    fn native_spacing_arity() {
        let map = resolve(Profile::Native, "p:16").unwrap();
        assert_eq!(map.get("padding"), Some(&StyleValue::Num(16.0)));

        let map = resolve(Profile::Native, "p:12|16").unwrap();
        assert_eq!(map.get("paddingVertical"), Some(&StyleValue::Num(12.0)));
        assert_eq!(map.get("paddingHorizontal"), Some(&StyleValue::Num(16.0)));

        let map = resolve(Profile::Native, "p:1|2|3|4").unwrap();
        assert_eq!(map.get("paddingTop"), Some(&StyleValue::Num(1.0)));
        assert_eq!(map.get("paddingRight"), Some(&StyleValue::Num(2.0)));
        assert_eq!(map.get("paddingBottom"), Some(&StyleValue::Num(3.0)));
        assert_eq!(map.get("paddingLeft"), Some(&StyleValue::Num(4.0)));
    }

    #[test]
    fn native_three_value_spacing_mirrors_horizontal() {
        let map = resolve(Profile::Native, "m:1|2|3").unwrap();
        assert_eq!(map.get("marginTop"), Some(&StyleValue::Num(1.0)));
        assert_eq!(map.get("marginRight"), Some(&StyleValue::Num(2.0)));
        assert_eq!(map.get("marginBottom"), Some(&StyleValue::Num(3.0)));
        assert_eq!(map.get("marginLeft"), Some(&StyleValue::Num(2.0)));
    }

    #[test]
    fn css_spacing_converts_to_rem() {
        let map = resolve(Profile::Css, "p:12|16").unwrap();
        assert_eq!(
            map.get("padding").and_then(StyleValue::as_str),
            Some("0.75rem 1rem")
        );
    }

    #[test]
    fn css_empty_spacing_piece_is_zero() {
        let map = resolve(Profile::Css, "m:|8").unwrap();
        assert_eq!(
            map.get("margin").and_then(StyleValue::as_str),
            Some("0 0.5rem")
        );
    }

    #[test]
    fn sidelength_keywords() {
        let map = resolve(Profile::Css, "w:full").unwrap();
        assert_eq!(map.get("width").and_then(StyleValue::as_str), Some("100%"));

        let map = resolve(Profile::Css, "h:screen").unwrap();
        assert_eq!(map.get("height").and_then(StyleValue::as_str), Some("100vh"));

        let map = resolve(Profile::Native, "w:fit").unwrap();
        assert_eq!(
            map.get("width").and_then(StyleValue::as_str),
            Some("fit-content")
        );

        let map = resolve(Profile::Css, "w:100").unwrap();
        assert_eq!(map.get("width").and_then(StyleValue::as_str), Some("100px"));

        let map = resolve(Profile::Native, "w:100").unwrap();
        assert_eq!(map.get("width"), Some(&StyleValue::Num(100.0)));
    }

    #[test]
    fn radius_corner_inheritance() {
        let map = resolve(Profile::Css, "r:8").unwrap();
        assert_eq!(
            map.get("border-radius").and_then(StyleValue::as_str),
            Some("8px 8px 8px 8px")
        );

        let map = resolve(Profile::Css, "r:1|2").unwrap();
        // bottom-right inherits top-left, bottom-left inherits top-right
        assert_eq!(
            map.get("border-radius").and_then(StyleValue::as_str),
            Some("1px 2px 1px 2px")
        );

        let map = resolve(Profile::Native, "r:8").unwrap();
        assert_eq!(map.get("borderRadius"), Some(&StyleValue::Num(8.0)));
    }

    #[test]
    fn flex_family() {
        let map = resolve(Profile::Css, "flex").unwrap();
        assert_eq!(map.get("display").and_then(StyleValue::as_str), Some("flex"));
        assert_eq!(
            map.get("flex-direction").and_then(StyleValue::as_str),
            Some("row")
        );

        let map = resolve(Profile::Css, "flex-col").unwrap();
        assert_eq!(
            map.get("flex-direction").and_then(StyleValue::as_str),
            Some("column")
        );

        let map = resolve(Profile::Css, "flex:1").unwrap();
        assert_eq!(map.get("flex").and_then(StyleValue::as_str), Some("1"));
        assert!(map.get("display").is_none());

        let map = resolve(Profile::Css, "flex:between|center").unwrap();
        assert_eq!(
            map.get("justify-content").and_then(StyleValue::as_str),
            Some("space-between")
        );
        assert_eq!(
            map.get("align-items").and_then(StyleValue::as_str),
            Some("center")
        );

        // center shorthand sets both axes
        let map = resolve(Profile::Css, "flex:center").unwrap();
        assert_eq!(
            map.get("justify-content").and_then(StyleValue::as_str),
            Some("center")
        );
        assert_eq!(
            map.get("align-items").and_then(StyleValue::as_str),
            Some("center")
        );
    }

    #[test]
    fn row_values_are_align_then_justify() {
        let map = resolve(Profile::Native, "row:center|between").unwrap();
        assert_eq!(
            map.get("flexDirection").and_then(StyleValue::as_str),
            Some("row")
        );
        assert_eq!(
            map.get("alignItems").and_then(StyleValue::as_str),
            Some("center")
        );
        assert_eq!(
            map.get("justifyContent").and_then(StyleValue::as_str),
            Some("space-between")
        );
    }

    #[test]
    fn native_absolute_sides_are_progressive() {
        let map = resolve(Profile::Native, "abs:10|20").unwrap();
        assert_eq!(
            map.get("position").and_then(StyleValue::as_str),
            Some("absolute")
        );
        assert_eq!(map.get("top"), Some(&StyleValue::Num(10.0)));
        assert_eq!(map.get("right"), Some(&StyleValue::Num(20.0)));
        assert!(map.get("bottom").is_none());
        assert!(map.get("left").is_none());
    }

    #[test]
    fn native_opacity_scales_percent() {
        let map = resolve(Profile::Native, "o:50").unwrap();
        assert_eq!(map.get("opacity"), Some(&StyleValue::Num(0.5)));

        let map = resolve(Profile::Native, "opacity:25").unwrap();
        assert_eq!(map.get("opacity"), Some(&StyleValue::Num(0.25)));
    }

    #[test]
    fn css_shadow_lowers_color_forms() {
        let map = resolve(Profile::Css, "shadow:0|2|4|0|(0,0,0,0.2)").unwrap();
        assert_eq!(
            map.get("box-shadow").and_then(StyleValue::as_str),
            Some("0px 2px 4px 0px rgba(0,0,0,0.2)")
        );

        let map = resolve(Profile::Css, "shadow:1|1|2|0|gray-50").unwrap();
        assert_eq!(
            map.get("box-shadow").and_then(StyleValue::as_str),
            Some("1px 1px 2px 0px #999999")
        );
    }

    #[test]
    fn scroll_hide_produces_nested_fragment() {
        let map = resolve(Profile::Css, "scroll:hide").unwrap();
        let StyleValue::Nested(nested) = map.get("&::-webkit-scrollbar").unwrap() else {
            panic!("expected nested fragment");
        };
        assert_eq!(nested.get("display").and_then(StyleValue::as_str), Some("none"));
        assert_eq!(
            map.get("scrollbar-width").and_then(StyleValue::as_str),
            Some("none")
        );
    }

    #[test]
    fn font_size_with_color() {
        let map = resolve(Profile::Native, "f:18|gray-60").unwrap();
        assert_eq!(map.get("fontSize"), Some(&StyleValue::Num(18.0)));
        assert_eq!(
            map.get("color").and_then(StyleValue::as_str),
            Some("#666666")
        );

        let map = resolve(Profile::Css, "f:16").unwrap();
        assert_eq!(
            map.get("font-size").and_then(StyleValue::as_str),
            Some("1rem")
        );
    }

    #[test]
    fn font_weight_keywords_and_numbers() {
        let map = resolve(Profile::Css, "fw:semibold").unwrap();
        assert_eq!(
            map.get("font-weight").and_then(StyleValue::as_str),
            Some("600")
        );

        let map = resolve(Profile::Native, "fw:700").unwrap();
        assert_eq!(map.get("fontWeight"), Some(&StyleValue::Num(700.0)));
    }

    #[test]
    fn malformed_numbers_pass_through_raw() {
        let map = resolve(Profile::Native, "ls:wide").unwrap();
        assert_eq!(
            map.get("letterSpacing").and_then(StyleValue::as_str),
            Some("wide")
        );
    }

    #[test]
    fn css_offsets_keep_percent() {
        let map = resolve(Profile::Css, "top:-50%").unwrap();
        assert_eq!(map.get("top").and_then(StyleValue::as_str), Some("-50%"));

        let map = resolve(Profile::Css, "left:10").unwrap();
        assert_eq!(map.get("left").and_then(StyleValue::as_str), Some("10px"));

        let map = resolve(Profile::Css, "inset:0").unwrap();
        for side in ["top", "right", "bottom", "left"] {
            assert_eq!(map.get(side).and_then(StyleValue::as_str), Some("0px"));
        }
    }

    #[test]
    fn translate_defaults_y_to_zero() {
        let map = resolve(Profile::Css, "translate:10").unwrap();
        assert_eq!(
            map.get("transform").and_then(StyleValue::as_str),
            Some("translate(10px, 0)")
        );

        let map = resolve(Profile::Css, "translate:-50%|4.5").unwrap();
        assert_eq!(
            map.get("transform").and_then(StyleValue::as_str),
            Some("translate(-50%, 4.5px)")
        );
    }

    #[test]
    fn grid_columns_repeat() {
        let map = resolve(Profile::Css, "grid-cols:3").unwrap();
        assert_eq!(
            map.get("grid-template-columns").and_then(StyleValue::as_str),
            Some("repeat(3, minmax(0, 1fr))")
        );
    }
}
