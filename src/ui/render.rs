use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::notification::NotificationWidget;
use super::panels;
use super::theme;
use super::util::centered_rect;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(12),   // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0]);
    render_main(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if let Some(toast) = app.notifications.current() {
        render_toast(f, f.area(), toast);
    }

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" BudgetPlan ", theme::header_style()),
        Span::styled(
            " Plan your monthly budget and track your savings",
            Style::default().fg(theme::TEXT_DIM),
        ),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

fn render_main(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(52), Constraint::Min(40)])
        .split(area);

    panels::form::render(f, columns[0], app);

    // Derived on every frame from the current plan
    let summary = app.summary();

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary cards
            Constraint::Length(4), // Recommendation
            Constraint::Min(8),    // Pie chart
        ])
        .split(columns[1]);

    panels::summary::render_cards(f, right[0], &summary);
    panels::summary::render_recommendation(f, right[1], summary.recommendation);
    panels::chart::render(f, right[2], &summary);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
        InputMode::Editing => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | exports → {}",
        app.focused_field(),
        app.export_dir.display()
    );

    let right = match app.input_mode {
        InputMode::Normal => " x xlsx | t txt | c csv | ? help ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Editing => " Enter save | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Editing => {
            let prompt = format!("{}> ", app.focused_field());
            let offset = prompt.chars().count() + app.command_input.chars().count();
            (
                Line::from(vec![
                    Span::styled(prompt, Style::default().fg(theme::GREEN)),
                    Span::styled(&app.command_input, theme::command_bar_style()),
                ]),
                Some(offset as u16),
            )
        }
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " j/k select | Enter edit | +/- adjust | : commands",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_toast(f: &mut Frame, area: Rect, toast: &super::notification::Notification) {
    let width = 48.min(area.width);
    let height = 4.min(area.height);
    let x = area.x + area.width.saturating_sub(width + 1);
    let toast_area = Rect::new(x, area.y + 1, width, height);
    f.render_widget(NotificationWidget::new(toast), toast_area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " BudgetPlan Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        row("  j/k or Up/Down   Select field          g/G        First/Last field"),
        row("  Enter            Edit field            0-9        Start typing a value"),
        row("  +/-              Step value            Esc        Cancel edit"),
        Line::from(""),
        section(" Actions"),
        row("  x                Export .xlsx          t          Export .txt"),
        row("  c                Export .csv           r          Reset to defaults"),
        row("  :                Command mode          q/Ctrl-q   Quit"),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<15} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let popup_area = centered_rect(area, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
