use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::state::{suggestions::SuggestionBox, SuggestionField};
use crate::ui::theme;

/// A bordered text input with an autocomplete dropdown overlay
pub struct AutocompleteInput<'a> {
    /// Label shown in the border
    pub label: &'a str,
    /// Input value and its suggestions
    pub input: &'a SuggestionBox,
    /// Placeholder text when value is empty
    pub placeholder: &'a str,
    /// Whether the input is focused
    pub is_focused: bool,
    /// Outcome of the last validation, shown in the bottom border
    pub validation: Option<&'a Result<(), String>>,
}

impl<'a> AutocompleteInput<'a> {
    pub fn new(input: &'a SuggestionBox, placeholder: &'a str) -> Self {
        Self {
            label: "",
            input,
            placeholder,
            is_focused: false,
            validation: None,
        }
    }

    /// Build from a search field, taking label, placeholder and validation from it
    pub fn for_field(field: &'a SuggestionField) -> Self {
        Self::new(&field.input, field.kind.placeholder())
            .label(field.kind.label())
            .validation(field.validation.as_ref())
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn validation(mut self, validation: Option<&'a Result<(), String>>) -> Self {
        self.validation = validation;
        self
    }

    /// Render the bordered input line
    pub fn render_input(&self, f: &mut Frame, area: Rect) {
        let value = self.input.value();
        let text = if value.is_empty() {
            Span::styled(self.placeholder, theme::placeholder_style())
        } else {
            let style = if self.is_focused {
                theme::form_field_focused_style()
            } else {
                theme::form_field_style()
            };
            Span::styled(value, style)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.label));
        if self.is_focused {
            block = block.border_style(theme::input_focused_border_style());
        }
        if let Some(result) = self.validation {
            let (message, valid) = match result {
                Ok(()) => ("✓ valid".to_string(), true),
                Err(e) => (format!("x {}", e), false),
            };
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", message),
                theme::validation_style(valid),
            )));
        }

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if self.is_focused {
            // Cursor sits after the last character, inside the border
            let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(width)
                .min(area.right().saturating_sub(2));
            f.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }

    /// Render the suggestion dropdown next to `input_area`
    ///
    /// Every suggestion is in the list; the list scrolls so the highlighted
    /// one stays visible. Returns the area drawn, or None when nothing is shown.
    pub fn render_dropdown(
        &self,
        f: &mut Frame,
        input_area: Rect,
        list_state: &mut ListState,
    ) -> Option<Rect> {
        let suggestions = self.input.suggestions();
        let dropdown_area = dropdown_area(input_area, f.area(), suggestions.len())?;

        // Clear the dropdown area
        f.render_widget(Clear, dropdown_area);

        let items: Vec<ListItem> = suggestions
            .iter()
            .map(|name| ListItem::new(Line::from(name.as_str())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::dropdown_border_style()),
            )
            .highlight_style(theme::selection_style());

        let highlighted = self.input.highlighted();
        // Stale offsets from a longer previous list would hide the highlight
        *list_state.offset_mut() = list_state.offset().min(highlighted);
        list_state.select(Some(highlighted));

        f.render_stateful_widget(list, dropdown_area, list_state);

        Some(dropdown_area)
    }
}

/// Where the dropdown goes for `item_count` suggestions.
///
/// Prefers the space below the input, then above it; when neither fits the
/// whole list, takes the larger of the two and the list scrolls.
/// Returns None when there is nothing to show or no room for a bordered row.
pub fn dropdown_area(input_area: Rect, frame_area: Rect, item_count: usize) -> Option<Rect> {
    if item_count == 0 {
        return None;
    }

    // Add 2 for borders
    let wanted = u16::try_from(item_count)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let width = input_area
        .width
        .max(theme::DROPDOWN_MIN_WIDTH)
        .min(frame_area.right().saturating_sub(input_area.x));

    let below_y = input_area.bottom();
    let room_below = frame_area.bottom().saturating_sub(below_y);
    let room_above = input_area.y.saturating_sub(frame_area.y);

    let (y, height) = if wanted <= room_below {
        (below_y, wanted)
    } else if wanted <= room_above {
        (input_area.y - wanted, wanted)
    } else if room_below >= room_above {
        (below_y, room_below)
    } else {
        (frame_area.y, room_above)
    };

    if height < 3 || width == 0 {
        return None;
    }

    Some(Rect::new(input_area.x, y, width, height))
}
