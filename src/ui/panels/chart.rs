use std::f64::consts::TAU;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, List, ListItem, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::money::format_amount;
use crate::summary::{BudgetSummary, ChartSlice};
use crate::ui::theme;
use crate::ui::util::{share_percent, truncate};

const RADIUS: f64 = 0.95;

pub(crate) fn render(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Expense Breakdown ", theme::panel_title_style()));

    if summary.total_expenses <= Decimal::ZERO {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses entered yet", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_pie(f, chunks[0], &summary.chart);
    render_legend(f, chunks[1], summary);
}

fn render_pie(f: &mut Frame, area: Rect, chart: &[ChartSlice]) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Braille dots are roughly square, so widen x to keep the circle round.
    let half_width = f64::from(area.width) / (2.0 * f64::from(area.height));
    let step = 1.0 / (2.0 * f64::from(area.height));
    let slices = pie_points(chart, step);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-half_width, half_width])
        .y_bounds([-1.0, 1.0])
        .paint(move |ctx| {
            for (i, coords) in slices.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: theme::slice_color(i),
                });
            }
        });
    f.render_widget(canvas, area);
}

fn render_legend(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let width = area.width.saturating_sub(20) as usize;
    let items: Vec<ListItem> = summary
        .chart
        .iter()
        .map(|slice| {
            let color = theme::slice_color(slice.color_index(theme::PALETTE.len()));
            let pct = share_percent(slice.value, summary.total_expenses);
            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<w$}", truncate(slice.label, width.max(4)), w = width.max(4)),
                    theme::normal_style(),
                ),
                Span::styled(format!("{:>11}", format_amount(slice.value)), theme::normal_style()),
                Span::styled(format!(" {pct:>3.0}%"), theme::dim_style()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items), area);
}

/// Cumulative end of each slice as a fraction of the full turn.
pub(crate) fn slice_ends(chart: &[ChartSlice]) -> Vec<f64> {
    let values: Vec<f64> = chart
        .iter()
        .map(|s| s.value.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }

    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            acc += v / total;
            acc
        })
        .collect()
}

/// Slice covering `fraction` of the turn, starting at 12 o'clock going clockwise.
pub(crate) fn slice_at(fraction: f64, ends: &[f64]) -> Option<usize> {
    ends.iter().position(|&end| fraction < end)
}

/// Dot coordinates inside the unit circle, grouped by slice.
fn pie_points(chart: &[ChartSlice], step: f64) -> Vec<Vec<(f64, f64)>> {
    let ends = slice_ends(chart);
    let mut slices: Vec<Vec<(f64, f64)>> = vec![Vec::new(); chart.len()];
    if step <= 0.0 {
        return slices;
    }

    let n = (RADIUS / step).ceil() as i64;
    for yi in -n..=n {
        for xi in -n..=n {
            let (x, y) = (xi as f64 * step, yi as f64 * step);
            if x * x + y * y > RADIUS * RADIUS {
                continue;
            }
            let fraction = (x.atan2(y) / TAU).rem_euclid(1.0);
            if let Some(idx) = slice_at(fraction, &ends) {
                slices[idx].push((x, y));
            }
        }
    }
    slices
}
