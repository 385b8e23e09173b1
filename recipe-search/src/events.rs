use crate::state::FieldKind;
use recipe_catalog::Catalog;

/// Commands to execute (user actions → state changes or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Field focus
    FocusNextField,
    FocusField(FieldKind),

    // Editing the focused field
    AppendChar(char),
    DeleteChar,
    ClearField,

    // Suggestions
    HighlightSuggestion { up: bool },
    ConfirmSuggestion,
    SelectSuggestion { index: usize },
    ValidateField,

    // Data loading
    LoadCatalog,

    // Log screen
    NavigateToLogs,
    NavigateBack,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // System
    ToggleHelp,
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    CatalogLoaded { catalog: Catalog },
    LoadError { error: String },
}
