//! Rendering for prompts, confirmations and the item form.

use super::constants::{DIALOG_WIDTH_PERCENT, ITEM_FORM_HEIGHT, PROMPT_HEIGHT};
use super::layout::centered_fixed;
use super::styles::Palette;
use crate::mediator::ConfirmRequest;
use crate::model::display_category;
use crate::state::{CategoryChoice, Dialog, FormField, ItemFormState, PromptState, TextInput};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Width reserved for form field labels.
const LABEL_WIDTH: usize = 13;

/// Draw the open dialog, if any, centered over `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog, palette: &Palette) {
    match dialog {
        Dialog::None => {}
        Dialog::Prompt(prompt) => render_prompt(frame, area, prompt, palette),
        Dialog::Confirm(request) => render_confirm(frame, area, request, palette),
        Dialog::ItemForm(form) => render_item_form(frame, area, form, palette),
    }
}

fn dialog_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(palette.focused_border)
}

fn hint_line(hints: &[(&'static str, &'static str)], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, palette.key));
        spans.push(Span::styled(format!(" {action}  "), palette.muted));
    }
    Line::from(spans)
}

/// Display width of the input up to the cursor.
fn cursor_offset(input: &TextInput) -> u16 {
    let before: String = input.value().chars().take(input.cursor()).collect();
    u16::try_from(before.width()).unwrap_or(u16::MAX)
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &PromptState, palette: &Palette) {
    let popup = centered_fixed(DIALOG_WIDTH_PERCENT, PROMPT_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let label = format!("{}: ", prompt.kind.label());
    let lines = vec![
        Line::from(vec![
            Span::styled(label.clone(), palette.header),
            Span::raw(prompt.input.value().to_string()),
        ]),
        Line::default(),
        hint_line(&[("Enter", "confirm"), ("Esc", "cancel")], palette),
    ];
    let block = dialog_block(prompt.kind.title(), palette);
    let inner = block.inner(popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
    let x = inner
        .x
        .saturating_add(label_width)
        .saturating_add(cursor_offset(&prompt.input))
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, inner.y));
}

fn render_confirm(frame: &mut Frame, area: Rect, request: &ConfirmRequest, palette: &Palette) {
    let popup = centered_fixed(DIALOG_WIDTH_PERCENT, PROMPT_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(request.prompt()),
        Line::default(),
        hint_line(&[("y", "yes"), ("n", "no")], palette),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(dialog_block(" Confirm ", palette)),
        popup,
    );
}

fn render_item_form(frame: &mut Frame, area: Rect, form: &ItemFormState, palette: &Palette) {
    let popup = centered_fixed(DIALOG_WIDTH_PERCENT, ITEM_FORM_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| form_line(form, *field, palette))
        .collect();
    lines.push(match &form.error {
        Some(error) => Line::from(Span::styled(error.clone(), palette.error)),
        None => Line::default(),
    });
    lines.push(hint_line(
        &[
            ("Tab", "next"),
            ("←/→", "choose"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
        palette,
    ));

    let block = dialog_block(form.title(), palette);
    let inner = block.inner(popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    let input = match form.field {
        FormField::Name => Some(&form.name),
        FormField::Quantity => Some(&form.quantity),
        FormField::Description => Some(&form.description),
        FormField::Unit | FormField::Category => None,
    };
    if let Some(input) = input {
        let row = FormField::ALL
            .iter()
            .position(|field| *field == form.field)
            .unwrap_or(0);
        let y = inner.y.saturating_add(u16::try_from(row).unwrap_or(0));
        let x = inner
            .x
            .saturating_add(u16::try_from(LABEL_WIDTH).unwrap_or(0))
            .saturating_add(cursor_offset(input))
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn form_line(form: &ItemFormState, field: FormField, palette: &Palette) -> Line<'static> {
    let focused = form.field == field;
    let label_style = if focused { palette.key } else { palette.muted };
    let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);

    let value = match field {
        FormField::Name => Span::raw(form.name.value().to_string()),
        FormField::Quantity => Span::raw(form.quantity.value().to_string()),
        FormField::Description => Span::raw(form.description.value().to_string()),
        FormField::Unit => choice_span(&form.unit, focused),
        FormField::Category => {
            let shown = match &form.category {
                CategoryChoice::Named(name) => display_category(name),
                _ => form.category_label().to_string(),
            };
            choice_span(&shown, focused)
        }
    };
    Line::from(vec![Span::styled(label, label_style), value])
}

/// Cycled fields show arrows while focused.
fn choice_span(value: &str, focused: bool) -> Span<'static> {
    let shown = if value.is_empty() { "none" } else { value };
    if focused {
        Span::styled(format!("< {shown} >"), Style::default())
    } else {
        Span::raw(shown.to_string())
    }
}
