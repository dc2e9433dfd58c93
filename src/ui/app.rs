use std::path::PathBuf;

use tracing::{debug, warn};

use super::notification::{Notification, NotificationQueue};
use crate::export::{self, ExportFormat};
use crate::input::AmountField;
use crate::models::BudgetPlan;
use crate::money::format_amount;
use crate::summary::BudgetSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    /// Shared buffer for `:` commands and field edits.
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) plan: BudgetPlan,
    pub(crate) fields: Vec<AmountField>,
    pub(crate) field_index: usize,

    pub(crate) notifications: NotificationQueue,
    pub(crate) export_dir: PathBuf,
}

impl App {
    pub(crate) fn new(export_dir: PathBuf) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            plan: BudgetPlan::default(),
            fields: AmountField::all(),
            field_index: 0,

            notifications: NotificationQueue::default(),
            export_dir,
        }
    }

    /// Derived values for the current plan, recomputed on every call.
    pub(crate) fn summary(&self) -> BudgetSummary {
        BudgetSummary::of(&self.plan)
    }

    pub(crate) fn focused_field(&self) -> AmountField {
        self.fields
            .get(self.field_index)
            .copied()
            .unwrap_or(AmountField::Income)
    }

    pub(crate) fn focus_next(&mut self) {
        if self.field_index + 1 < self.fields.len() {
            self.field_index += 1;
        }
    }

    pub(crate) fn focus_prev(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    pub(crate) fn focus_first(&mut self) {
        self.field_index = 0;
    }

    pub(crate) fn focus_last(&mut self) {
        self.field_index = self.fields.len().saturating_sub(1);
    }

    /// Enter edit mode for the focused field, prefilled with its value.
    pub(crate) fn begin_edit(&mut self) {
        let current = self.focused_field().current(&self.plan);
        self.command_input = current.normalize().to_string();
        self.input_mode = InputMode::Editing;
    }

    /// Enter edit mode with an empty buffer seeded by the first typed char.
    pub(crate) fn begin_edit_with(&mut self, c: char) {
        self.command_input.clear();
        self.command_input.push(c);
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.command_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    /// Apply the edit buffer to the focused field. Rejected input keeps the
    /// previous value and raises an error toast.
    pub(crate) fn commit_edit(&mut self) {
        let field = self.focused_field();
        let raw = std::mem::take(&mut self.command_input);
        self.input_mode = InputMode::Normal;
        self.set_field(field, &raw);
    }

    /// Parse `raw` into `field`, reporting the outcome on the status line.
    pub(crate) fn set_field(&mut self, field: AmountField, raw: &str) {
        match field.apply(&mut self.plan, raw) {
            Ok(value) => {
                debug!(field = %field, value = %value, "field updated");
                self.set_status(format!("{field} set to {}", format_amount(value)));
            }
            Err(e) => {
                warn!(field = %field, input = raw, error = %e, "rejected edit");
                self.notifications
                    .push(Notification::error("Invalid amount", e.to_string()));
                self.set_status(e.to_string());
            }
        }
    }

    pub(crate) fn adjust_focused(&mut self, delta: i32) {
        let field = self.focused_field();
        let value = field.adjust(&mut self.plan, delta);
        debug!(field = %field, value = %value, "field adjusted");
        self.set_status(format!("{field}: {}", format_amount(value)));
    }

    pub(crate) fn export(&mut self, format: ExportFormat) {
        match export::export_plan(&self.plan, format, &self.export_dir) {
            Ok(path) => {
                self.notifications.push(Notification::success(
                    export::SUCCESS_TITLE,
                    format.success_message(),
                ));
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(e) => {
                self.notifications
                    .push(Notification::error(export::FAILURE_TITLE, e.to_string()));
                self.set_status(e.to_string());
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.plan.reset();
        self.set_status("Plan reset to defaults");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
