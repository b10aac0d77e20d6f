//! String table for the map viewer
//!
//! Templates use `{}` placeholders that consume format arguments in order. A
//! string id argument expands to its own template, which keeps consuming from
//! the same argument stream.

use std::fmt::Write;

use crate::tooltip::{FormatArg, STR_MAP_TOOLTIP_STRINGID, STR_NONE, StringId, TooltipPayload};

pub const STR_TILE_TOOLTIP: StringId = StringId(1000);
pub const STR_ERROR_TITLE: StringId = StringId(1001);
pub const STR_ERROR_BODY: StringId = StringId(1002);
pub const STR_TOOLBAR_IDLE: StringId = StringId(1003);

pub const STR_TILE_GRASS: StringId = StringId(1100);
pub const STR_TILE_WATER: StringId = StringId(1101);
pub const STR_TILE_PATH: StringId = StringId(1102);
pub const STR_TILE_TREE: StringId = StringId(1103);
pub const STR_TILE_RIDE: StringId = StringId(1104);

const MAX_NESTING: usize = 4;

const STRINGS: &[(StringId, &str)] = &[
    (STR_MAP_TOOLTIP_STRINGID, "{}"),
    (STR_TILE_TOOLTIP, "{} - height {}"),
    (STR_ERROR_TITLE, "Can't build this here..."),
    (STR_ERROR_BODY, "Press e to dismiss"),
    (STR_TOOLBAR_IDLE, "Hover a tile for details"),
    (STR_TILE_GRASS, "Grass"),
    (STR_TILE_WATER, "Water"),
    (STR_TILE_PATH, "Footpath"),
    (STR_TILE_TREE, "Tree"),
    (STR_TILE_RIDE, "Ride entrance"),
];

pub fn template(id: StringId) -> Option<&'static str> {
    STRINGS
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, text)| *text)
}

/// Format `id` with `args`. [`STR_NONE`] formats to an empty string.
pub fn format_string(id: StringId, args: &[FormatArg]) -> String {
    let mut out = String::new();
    let mut args = args.iter();
    format_into(&mut out, id, &mut args, 0);
    out
}

/// Format a tooltip payload through `template`
pub fn format_payload(template: StringId, payload: &TooltipPayload) -> String {
    format_string(template, &payload.to_format_args())
}

fn format_into(out: &mut String, id: StringId, args: &mut std::slice::Iter<'_, FormatArg>, depth: usize) {
    if id == STR_NONE || depth > MAX_NESTING {
        return;
    }

    let Some(mut rest) = template(id) else {
        let _ = write!(out, "<string {}>", id.0);
        return;
    };

    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(FormatArg::StringId(nested)) => format_into(out, *nested, args, depth + 1),
            Some(FormatArg::Int(value)) => {
                let _ = write!(out, "{}", value);
            }
            Some(FormatArg::Text(text)) => out.push_str(text),
            None => {}
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
}
