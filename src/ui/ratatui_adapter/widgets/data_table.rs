//! Creatives table widget

use crate::table::{Column, TableView};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Rows taken by the border and header line
pub const CHROME_HEIGHT: u16 = 3;

const fn width(column: Column) -> Constraint {
    match column {
        Column::CreativeId => Constraint::Length(8),
        Column::CreativeName => Constraint::Min(16),
        Column::Tags => Constraint::Min(18),
        Column::Country | Column::Os => Constraint::Length(8),
        Column::AdNetwork | Column::Campaign => Constraint::Length(12),
        Column::Ipm | Column::Ctr => Constraint::Length(8),
        Column::Spend => Constraint::Length(11),
        Column::Impressions | Column::Clicks => Constraint::Length(12),
    }
}

/// Table of the visible rows, windowed to the rows that fit
pub struct DataTable<'a> {
    view: &'a TableView,
    cursor: usize,
    scroll: usize,
    focused: Column,
    theme: &'a Theme,
}

impl<'a> DataTable<'a> {
    #[must_use]
    pub const fn new(
        view: &'a TableView,
        cursor: usize,
        scroll: usize,
        focused: Column,
        theme: &'a Theme,
    ) -> Self {
        Self {
            view,
            cursor,
            scroll,
            focused,
            theme,
        }
    }

    fn header(&self) -> Row<'static> {
        let sort = self.view.sort();
        let cells = Column::ALL.into_iter().map(|column| {
            let arrow = sort
                .filter(|s| s.column == column)
                .map_or("", |s| s.direction.arrow());
            let style = if column == self.focused {
                self.theme.focused_header_style()
            } else {
                self.theme.header_style()
            };
            let line = Line::from(format!("{}{arrow}", column.header()));
            let line = if column.is_numeric() {
                line.alignment(Alignment::Right)
            } else {
                line
            };
            Cell::from(line).style(style)
        });
        Row::new(cells)
    }

    fn row(&self, index: usize) -> Option<Row<'static>> {
        let creative = self.view.get(index)?;
        let cells = Column::ALL.into_iter().map(|column| {
            let text = column.format(creative);
            let cell = if column.is_numeric() {
                Cell::from(Line::from(text).alignment(Alignment::Right))
            } else {
                Cell::from(text)
            };
            if column == Column::Tags {
                cell.style(self.theme.tag_style())
            } else {
                cell
            }
        });
        Some(Row::new(cells))
    }
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Creatives ");

        if self.view.is_empty() {
            Paragraph::new(Line::styled(
                "No creatives match the current filters",
                self.theme.dimmed_style(),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let height = usize::from(area.height.saturating_sub(CHROME_HEIGHT));
        let end = (self.scroll + height).min(self.view.len());
        let rows: Vec<Row> = (self.scroll..end).filter_map(|i| self.row(i)).collect();

        let table = Table::new(rows, Column::ALL.map(width))
            .header(self.header())
            .block(block)
            .column_spacing(1)
            .row_highlight_style(self.theme.selected_style());

        let mut state = TableState::default()
            .with_selected((self.scroll..end).contains(&self.cursor).then(|| self.cursor - self.scroll));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
