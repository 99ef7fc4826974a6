//! Read-only preview of the reference dataset

use crate::app::AppState;
use crate::catalog::ReferenceCatalog;
use crate::theme::Styles;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Rows visible in an area of the given height (borders and header excluded)
pub fn visible_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(3))
}

/// Render the dataset table starting at the state's row offset
pub fn render_dataset(f: &mut Frame, area: Rect, state: &AppState, catalog: &ReferenceCatalog) {
    let headers = catalog.headers();
    let offset = state.dataset_offset.min(catalog.len().saturating_sub(1));
    let rows: Vec<Row> = catalog
        .rows()
        .iter()
        .skip(offset)
        .take(visible_rows(area.height))
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.clone()))))
        .collect();

    let widths: Vec<Constraint> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let longest = catalog
                .rows()
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(1);
            Constraint::Length(longest.min(24) as u16)
        })
        .collect();

    let title = format!(
        " 📊 Sample Student Dataset ({}-{} of {}) ",
        offset + 1,
        (offset + rows.len()).max(offset + 1),
        catalog.len()
    );

    let table = Table::new(rows, widths)
        .header(
            Row::new(headers.iter().map(|h| Cell::from(h.clone()))).style(Styles::category()),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Styles::border_active()),
        )
        .column_spacing(1)
        .style(Styles::text());

    f.render_widget(table, area);
}
