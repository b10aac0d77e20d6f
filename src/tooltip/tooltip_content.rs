//! Tooltip content store
//!
//! Holds the message producers want shown under the pointer. The store is
//! overwritten wholesale on every write; there is no merging.

/// Identifier of a localizable string template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(pub u16);

/// Sentinel meaning "no tooltip requested"
pub const STR_NONE: StringId = StringId(u16::MAX);

/// Template the overlay renders its payload through. It formats the payload's
/// own string id followed by that string's arguments.
pub const STR_MAP_TOOLTIP_STRINGID: StringId = StringId(1);

/// A single formatted argument trailing the payload's string id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatArg {
    StringId(StringId),
    Int(i64),
    Text(String),
}

/// Formatted message buffer: a string id followed by its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipPayload {
    string_id: StringId,
    args: Vec<FormatArg>,
}

impl TooltipPayload {
    pub fn new(string_id: StringId) -> Self {
        Self {
            string_id,
            args: Vec::new(),
        }
    }

    /// Payload tagged with [`STR_NONE`]
    pub fn none() -> Self {
        Self::new(STR_NONE)
    }

    /// Append an argument, builder style
    pub fn with_arg(mut self, arg: FormatArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn push_arg(&mut self, arg: FormatArg) {
        self.args.push(arg);
    }

    pub fn string_id(&self) -> StringId {
        self.string_id
    }

    pub fn args(&self) -> &[FormatArg] {
        &self.args
    }

    pub fn is_none(&self) -> bool {
        self.string_id == STR_NONE
    }

    /// Flattened argument stream with the string id first, as consumed by
    /// [`STR_MAP_TOOLTIP_STRINGID`]
    pub fn to_format_args(&self) -> Vec<FormatArg> {
        let mut out = Vec::with_capacity(self.args.len() + 1);
        out.push(FormatArg::StringId(self.string_id));
        out.extend(self.args.iter().cloned());
        out
    }
}

impl Default for TooltipPayload {
    fn default() -> Self {
        Self::none()
    }
}

/// Holder of the currently requested tooltip
#[derive(Debug, Clone, Default)]
pub struct TooltipStore {
    payload: TooltipPayload,
}

impl TooltipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored payload. Producers pass a [`STR_NONE`] payload to
    /// request no tooltip.
    pub fn set_tooltip(&mut self, payload: TooltipPayload) {
        self.payload = payload;
    }

    /// Last payload set
    pub fn tooltip(&self) -> &TooltipPayload {
        &self.payload
    }

    pub fn clear_tooltip(&mut self) {
        self.payload = TooltipPayload::none();
    }
}

#[cfg(test)]
#[path = "tooltip_content_tests.rs"]
mod tooltip_content_tests;
