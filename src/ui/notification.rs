//! Toast notifications shown after exports and rejected edits.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::theme;

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub(crate) fn color(&self) -> Color {
        match self {
            Self::Success => theme::GREEN,
            Self::Error => theme::RED,
        }
    }

    pub(crate) fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Error => "x",
        }
    }
}

/// A title + description pair that expires a few seconds after it is first shown.
#[derive(Debug, Clone)]
pub(crate) struct Notification {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            shown_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub(crate) fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationKind::Success)
    }

    pub(crate) fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationKind::Error)
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }

    fn restart(&mut self) {
        self.shown_at = Instant::now();
    }

    #[cfg(test)]
    pub(crate) fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

pub(crate) struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub(crate) fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(
                format!(" {} {} ", self.notification.kind.icon(), self.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(Line::from(Span::styled(
            self.notification.description.as_str(),
            theme::normal_style(),
        )))
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }
}

/// Pending toasts, oldest first. Only the front one is shown, and its
/// timer starts when it reaches the front.
#[derive(Debug, Default)]
pub(crate) struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub(crate) fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub(crate) fn remove_expired(&mut self) {
        if self.notifications.first().is_some_and(Notification::is_expired) {
            self.notifications.remove(0);
            if let Some(next) = self.notifications.first_mut() {
                next.restart();
            }
        }
    }

    pub(crate) fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.notifications.len()
    }
}
