use std::fmt;

/// Text inserted by the dialogue-dash toolbar button.
pub const DASH_SNIPPET: &str = "– ";

/// Question asked before inserting an image.
pub const IMAGE_PROMPT: &str = "Länk till bild?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    H1,
    H2,
    Paragraph,
}

impl BlockFormat {
    fn tag(self) -> &'static str {
        match self {
            BlockFormat::H1 => "<h1>",
            BlockFormat::H2 => "<h2>",
            BlockFormat::Paragraph => "<p>",
        }
    }
}

/// One native text-editing command a toolbar button or chord triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Undo,
    Redo,
    RemoveFormat,
    FormatBlock(BlockFormat),
    Bold,
    Italic,
    InsertUnorderedList,
    InsertOrderedList,
    /// The value is asked from the user with [`IMAGE_PROMPT`].
    InsertImage,
    /// Inserts [`DASH_SNIPPET`].
    InsertDash,
}

impl EditCommand {
    /// Every toolbar command, in toolbar order.
    pub const TOOLBAR: [EditCommand; 12] = [
        EditCommand::Undo,
        EditCommand::Redo,
        EditCommand::RemoveFormat,
        EditCommand::FormatBlock(BlockFormat::H1),
        EditCommand::FormatBlock(BlockFormat::H2),
        EditCommand::FormatBlock(BlockFormat::Paragraph),
        EditCommand::Bold,
        EditCommand::Italic,
        EditCommand::InsertUnorderedList,
        EditCommand::InsertOrderedList,
        EditCommand::InsertImage,
        EditCommand::InsertDash,
    ];

    /// Material icon name of the toolbar button bound to this command.
    pub fn icon(self) -> &'static str {
        match self {
            EditCommand::Undo => "undo",
            EditCommand::Redo => "redo",
            EditCommand::RemoveFormat => "format_clear",
            EditCommand::FormatBlock(BlockFormat::H1) => "format_h1",
            EditCommand::FormatBlock(BlockFormat::H2) => "format_h2",
            EditCommand::FormatBlock(BlockFormat::Paragraph) => "format_paragraph",
            EditCommand::Bold => "format_bold",
            EditCommand::Italic => "format_italic",
            EditCommand::InsertUnorderedList => "format_list_bulleted",
            EditCommand::InsertOrderedList => "format_list_numbered",
            EditCommand::InsertImage => "add_photo_alternate",
            EditCommand::InsertDash => "chat",
        }
    }

    pub fn from_icon(icon: &str) -> Option<Self> {
        Self::TOOLBAR.into_iter().find(|command| command.icon() == icon)
    }

    /// Command name passed to `document.execCommand`.
    pub fn exec_name(self) -> &'static str {
        match self {
            EditCommand::Undo => "undo",
            EditCommand::Redo => "redo",
            EditCommand::RemoveFormat => "removeFormat",
            EditCommand::FormatBlock(_) => "formatBlock",
            EditCommand::Bold => "bold",
            EditCommand::Italic => "italic",
            EditCommand::InsertUnorderedList => "insertUnorderedList",
            EditCommand::InsertOrderedList => "insertOrderedList",
            EditCommand::InsertImage => "insertImage",
            EditCommand::InsertDash => "insertText",
        }
    }

    /// Fixed command value, if the command takes one. `InsertImage` takes a user supplied value.
    pub fn exec_value(self) -> Option<&'static str> {
        match self {
            EditCommand::FormatBlock(format) => Some(format.tag()),
            EditCommand::InsertDash => Some(DASH_SNIPPET),
            _ => None,
        }
    }

    /// Whether the value has to be asked from the user first.
    pub fn needs_prompt(self) -> bool {
        matches!(self, EditCommand::InsertImage)
    }
}

/// A key press with its modifiers, as seen by the keydown handler of a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub key: String,
}

impl KeyChord {
    pub fn new(ctrl: bool, alt: bool, shift: bool, key: &str) -> Self {
        Self {
            ctrl,
            alt,
            shift,
            key: key.to_uppercase(),
        }
    }

    /// The command bound to this chord. Only Ctrl+B and Ctrl+I are bound.
    pub fn command(&self) -> Option<EditCommand> {
        match (self.ctrl, self.alt, self.shift, self.key.as_str()) {
            (true, false, false, "B") => Some(EditCommand::Bold),
            (true, false, false, "I") => Some(EditCommand::Italic),
            _ => None,
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl")?;
        }
        if self.alt {
            f.write_str("Alt")?;
        }
        if self.shift {
            f.write_str("Shift")?;
        }
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn icons_map_back_to_their_commands() {
        for command in EditCommand::TOOLBAR {
            assert_eq!(EditCommand::from_icon(command.icon()), Some(command));
        }
        assert_eq!(EditCommand::from_icon("format_underlined"), None);
    }

    #[test]
    fn exec_arguments() {
        let h2 = EditCommand::FormatBlock(BlockFormat::H2);
        assert_eq!((h2.exec_name(), h2.exec_value()), ("formatBlock", Some("<h2>")));
        assert_eq!(EditCommand::RemoveFormat.exec_name(), "removeFormat");
        assert_eq!(EditCommand::InsertDash.exec_value(), Some("– "));
        assert!(EditCommand::InsertImage.needs_prompt());
        assert_eq!(EditCommand::InsertImage.exec_value(), None);
    }

    #[test]
    fn only_ctrl_b_and_ctrl_i_are_bound() {
        assert_eq!(KeyChord::new(true, false, false, "b").command(), Some(EditCommand::Bold));
        assert_eq!(KeyChord::new(true, false, false, "i").command(), Some(EditCommand::Italic));
        assert_eq!(KeyChord::new(true, false, true, "b").command(), None);
        assert_eq!(KeyChord::new(false, false, false, "b").command(), None);
        assert_eq!(KeyChord::new(true, false, false, "u").command(), None);
    }

    #[test]
    fn chord_display_matches_key_map_names() {
        assert_eq!(KeyChord::new(true, false, false, "b").to_string(), "CtrlB");
        assert_eq!(KeyChord::new(true, true, true, "x").to_string(), "CtrlAltShiftX");
    }
}
