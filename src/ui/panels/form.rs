use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::input::AmountField;
use crate::money::{format_amount, format_grouped};
use crate::ui::app::{App, InputMode};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .fields
        .iter()
        .enumerate()
        .flat_map(|(i, field)| {
            let focused = i == app.field_index;
            let editing = focused && app.input_mode == InputMode::Editing;
            let row = field_row(app, *field, focused, editing, i);

            // Gap between income and the expense block
            if matches!(field, AmountField::Income) {
                vec![row, ListItem::new(Line::from("")), expenses_heading()]
            } else {
                vec![row]
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Monthly Budget ", theme::panel_title_style())),
    );
    f.render_widget(list, area);
}

fn field_row(
    app: &App,
    field: AmountField,
    focused: bool,
    editing: bool,
    i: usize,
) -> ListItem<'static> {
    let style = if editing {
        theme::editing_style()
    } else if focused {
        theme::selected_style()
    } else if i % 2 == 0 {
        theme::alt_row_style()
    } else {
        theme::normal_style()
    };

    let value = if editing {
        format!("{}█", app.command_input)
    } else {
        format_amount(field.current(&app.plan))
    };
    let (min, max) = field.bounds();
    let marker = if focused { "▸" } else { " " };

    ListItem::new(Line::from(vec![
        Span::styled(format!("{marker} {:<16}", field.label()), style),
        Span::styled(format!("{value:>14} "), style),
        Span::styled(
            format!(" {}–{}", format_grouped(min), format_grouped(max)),
            theme::dim_style(),
        ),
    ]))
}

fn expenses_heading() -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        "  Expenses",
        Style::default().fg(theme::YELLOW),
    )))
}
