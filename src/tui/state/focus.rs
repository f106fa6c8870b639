//! Input focus for the board screen.

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFocus {
    /// Keys navigate the message list.
    #[default]
    List,
    /// Keys edit the draft.
    Draft,
}
