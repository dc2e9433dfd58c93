use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::info;

use crate::config::Settings;
use crate::export::ExportFormat;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;

const TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(settings: &Settings) -> Result<()> {
    let mut app = App::new(settings.export_dir.clone());
    info!(export_dir = %settings.export_dir.display(), "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.notifications.remove_expired();
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        // Poll so expired toasts disappear without a keypress
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Command => handle_command_input(key, app)?,
        InputMode::Editing => handle_editing_input(key, app),
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.focus_first(),
        KeyCode::Char('G') | KeyCode::End => app.focus_last(),
        KeyCode::Enter => app.begin_edit(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '$' => app.begin_edit_with(c),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.adjust_focused(1),
        KeyCode::Char('-') | KeyCode::Left => app.adjust_focused(-1),
        KeyCode::Char('x') => app.export(ExportFormat::Spreadsheet),
        KeyCode::Char('t') => app.export(ExportFormat::Text),
        KeyCode::Char('c') => app.export(ExportFormat::Csv),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
