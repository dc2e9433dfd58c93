use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rust_decimal::Decimal;

use crate::money::format_amount;
use crate::summary::{BudgetSummary, Recommendation};
use crate::ui::theme;

pub(crate) fn render_cards(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let savings_color = if summary.savings >= Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };

    render_card(
        f,
        cards[0],
        "Income",
        format_amount(summary.income),
        theme::GREEN,
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(summary.total_expenses),
        theme::RED,
    );
    render_card(
        f,
        cards[2],
        "Savings",
        format_amount(summary.savings),
        savings_color,
    );
    render_card(
        f,
        cards[3],
        "Savings Rate",
        summary.savings_rate.formatted(),
        savings_color,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::panel_title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

pub(crate) fn render_recommendation(f: &mut Frame, area: Rect, recommendation: Recommendation) {
    let color = match recommendation {
        Recommendation::OverBudget => theme::RED,
        _ if recommendation.is_warning() => theme::YELLOW,
        _ => theme::GREEN,
    };

    let msg = Paragraph::new(Line::from(Span::styled(
        recommendation.message(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(" Recommendation ", theme::panel_title_style())),
    );
    f.render_widget(msg, area);
}
