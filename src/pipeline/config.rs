/// What to do with a `jelly:core` tag the emitter has no translation for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownControlTags {
    /// Write nothing for the tag itself but still convert its children. (Default)
    #[default]
    Skip,
    /// Fail the conversion.
    Reject,
}

/// How quoted string literals are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StringEscaping {
    /// Copy the source text between the quotes unchanged. (Default)
    #[default]
    Verbatim,
    /// Backslash-escape `\`, `"` and `$` so the literal is always valid Groovy.
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub unknown_control_tags: UnknownControlTags,
    pub escaping: StringEscaping,
}
