use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);

    // Use shared popup frame
    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        layouts::popup_sizes::LARGE,
        " Help (press F1 or Esc to close) ",
        theme::accent_border_style(),
    );

    // Create the help list
    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    // Screen-specific help
    match screen {
        Screen::Search(state) => {
            items.push(("Type", "Search the focused field"));
            items.push(("Backspace", "Delete last character"));
            items.push(("Ctrl+U", "Clear the field"));
            items.push(("↑/↓", "Move through suggestions"));
            items.push(("Enter", "Use highlighted suggestion"));
            items.push(("Click", "Use a suggestion or focus a field"));
            items.push(("Tab", "Switch between recipe and location"));
            if state.focused_field().has_post_select() {
                items.push(("Enter (no list)", "Check the current value"));
            }
            items.push(("Ctrl+R", "Reload the catalog"));
            items.push(("Ctrl+L", "View session logs"));
            items.push(("Esc", "Quit"));
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
            items.push(("h/←/Esc", "Back to search"));
            items.push(("q", "Quit application"));
        }
    }

    // Global help
    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("F1", "Toggle this help"));
    items.push(("Ctrl+C", "Quit application"));

    items
}
