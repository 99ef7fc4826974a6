//! Student details form rendering

use crate::app::{AppState, FieldInput};
use crate::catalog::ReferenceCatalog;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

const LABEL_WIDTH: usize = 22;

/// Render the form fields with the cursor row highlighted
pub fn render_form(f: &mut Frame, area: Rect, state: &AppState, catalog: &ReferenceCatalog) {
    let form = &state.form;

    let items: Vec<ListItem> = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let selected = index == form.selected;
            let value = match &field.input {
                FieldInput::Text(text) if selected => format!("{}▏", text),
                FieldInput::Text(text) if text.is_empty() => "(optional)".to_string(),
                FieldInput::Choice { .. } | FieldInput::Number { .. } if selected => {
                    format!("◀ {} ▶", field.input.display())
                }
                _ => field.input.display(),
            };

            let mut spans = vec![
                Span::styled(format!("{:<LABEL_WIDTH$}", field.id.label()), Styles::header()),
                Span::styled(value, Styles::text()),
            ];
            if selected {
                if let Some(column) = field.id.catalog_field() {
                    spans.push(Span::styled(
                        format!("   {} choices in dataset", catalog.value_set(column).len()),
                        Styles::text_muted(),
                    ));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📋 Enter Your Details ")
                .border_style(Styles::border_active()),
        )
        .highlight_style(Styles::selected())
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(form.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}
