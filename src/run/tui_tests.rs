#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::*;
use crate::models::BudgetPlan;

fn app() -> App {
    App::new(std::env::temp_dir())
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_quit_keys() {
    let mut a = app();
    press(&mut a, KeyCode::Char('q'));
    assert!(!a.running);

    let mut b = app();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut b,
    )
    .unwrap();
    assert!(!b.running);
}

#[test]
fn test_navigation_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.field_index, 2);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.field_index, 1);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.field_index, 6);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.field_index, 0);
}

#[test]
fn test_typing_digits_edits_focused_field() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    type_str(&mut app, "1800");
    assert_eq!(app.input_mode, InputMode::Editing);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.plan.expenses.housing, dec!(1800));
}

#[test]
fn test_enter_edit_backspace_and_save() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.command_input, "5000");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "75");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.plan.income, dec!(5075));
}

#[test]
fn test_escape_cancels_edit() {
    let mut app = app();
    type_str(&mut app, "9");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.plan, BudgetPlan::default());
}

#[test]
fn test_invalid_edit_is_ignored() {
    let mut app = app();
    type_str(&mut app, "12abc");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.plan.income, dec!(5000));
    assert!(app.notifications.current().is_some());
}

#[test]
fn test_plus_minus_adjust() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.plan.income, dec!(5100));
}

#[test]
fn test_command_mode_runs_command() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_str(&mut app, "set food 640");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.plan.expenses.food, dec!(640));
}

#[test]
fn test_command_mode_backspace_to_empty_exits() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "q");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.running);
}

#[test]
fn test_help_closes_on_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.show_help);
    assert!(app.running);
}

#[test]
fn test_export_key_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(dir.path().to_path_buf());
    press(&mut app, KeyCode::Char('x'));
    assert!(dir.path().join("my_budget_plan.xlsx").exists());
    press(&mut app, KeyCode::Char('t'));
    assert!(dir.path().join("my_budget_plan.txt").exists());
}
