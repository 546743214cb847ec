//! Detail modal: the items of the open list.

use super::styles::Palette;
use crate::model::display_category;
use crate::state::{
    DetailProjection, DetailRow, DetailViewState, ItemFilter, ItemRow, NO_COMPLETED_ITEMS,
    NO_OPEN_ITEMS,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Open items, then completed items, each under a section line.
pub struct DetailView<'a> {
    list_name: &'a str,
    view: DetailViewState,
    projection: &'a DetailProjection,
    palette: &'a Palette,
}

impl<'a> DetailView<'a> {
    /// Widget for one open list.
    pub fn new(
        list_name: &'a str,
        view: DetailViewState,
        projection: &'a DetailProjection,
        palette: &'a Palette,
    ) -> Self {
        Self {
            list_name,
            view,
            projection,
            palette,
        }
    }

    /// Build the rows and the row index of the selected item.
    fn rows(&self) -> (Vec<ListItem<'static>>, Option<usize>) {
        let mut rows = Vec::new();
        let mut selected_row = None;
        let mut item_index = 0;

        let sections = [
            ("Open", self.projection.open_count(), &self.projection.open, NO_OPEN_ITEMS),
            (
                "Completed",
                self.projection.completed.len(),
                &self.projection.completed,
                NO_COMPLETED_ITEMS,
            ),
        ];
        for (n, (title, count, section, placeholder)) in sections.into_iter().enumerate() {
            if n > 0 {
                rows.push(ListItem::new(Line::default()));
            }
            rows.push(ListItem::new(Line::from(Span::styled(
                format!("{title} ({count})"),
                self.palette.header,
            ))));
            if section.is_empty() {
                rows.push(ListItem::new(Line::from(Span::styled(
                    format!("  {placeholder}"),
                    self.palette.muted,
                ))));
                continue;
            }
            for row in section {
                match row {
                    DetailRow::Header(name) => rows.push(ListItem::new(Line::from(
                        Span::styled(format!(" {name}"), self.palette.key),
                    ))),
                    DetailRow::Item(item) => {
                        if item_index == self.view.selected {
                            selected_row = Some(rows.len());
                        }
                        item_index += 1;
                        rows.push(ListItem::new(self.item_line(item)));
                    }
                }
            }
        }
        (rows, selected_row)
    }

    fn item_line(&self, item: &ItemRow) -> Line<'static> {
        let (check, name_style) = if item.completed {
            ("[x] ", self.palette.done)
        } else {
            ("[ ] ", ratatui::style::Style::default())
        };
        let mut spans = vec![
            Span::raw(format!("  {check}")),
            Span::styled(item.name.clone(), name_style),
        ];
        if !item.amount.is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(item.amount.clone(), self.palette.muted));
        }
        if self.view.filter == ItemFilter::All && !item.category.trim().is_empty() {
            spans.push(Span::styled(
                format!("  ({})", display_category(&item.category)),
                self.palette.muted,
            ));
        }
        if !item.description.is_empty() {
            spans.push(Span::styled(
                format!("  {}", item.description),
                self.palette.muted,
            ));
        }
        Line::from(spans)
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .title(format!(" {} {} ", self.list_name, self.view.indicator()))
            .title_bottom(" a add  e edit  Space check  d delete  f group  S sort  Esc close ")
            .borders(Borders::ALL)
            .border_style(self.palette.focused_border);

        let (rows, selected) = self.rows();
        let list = List::new(rows)
            .block(block)
            .highlight_style(self.palette.selected);
        let mut state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
