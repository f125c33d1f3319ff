#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    Quit,

    // Navigation
    FocusNext,
    FocusPrevious,
    CursorUp,
    CursorDown,

    // Controls
    NextOption,
    PreviousOption,
    Activate,
}
