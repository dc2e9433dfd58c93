use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::export::ExportFormat;
use crate::input::AmountField;
use crate::models::ExpenseCategory;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetPlan", cmd_quit, r);
    register_command!("quit", "Quit BudgetPlan", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "income",
        "Set monthly income (e.g. :income 5200)",
        cmd_income,
        r
    );
    register_command!("i", "Set monthly income (e.g. :i 5200)", cmd_income, r);
    register_command!(
        "set",
        "Set an expense (e.g. :set food 650)",
        cmd_set,
        r
    );
    register_command!("s", "Set an expense (e.g. :s food 650)", cmd_set, r);
    register_command!(
        "export",
        "Export the plan (e.g. :export xlsx | txt | csv)",
        cmd_export,
        r
    );
    register_command!("e", "Export the plan (e.g. :e txt)", cmd_export, r);
    register_command!("reset", "Restore default amounts", cmd_reset, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount>");
        return Ok(());
    }
    app.set_field(AmountField::Income, args);
    Ok(())
}

fn cmd_set(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut parts = args.splitn(2, ' ');
    let name = parts.next().unwrap_or("").trim();
    let amount = parts.next().unwrap_or("").trim();

    if name.is_empty() || amount.is_empty() {
        let keys: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.key()).collect();
        app.set_status(format!("Usage: :set <{}> <amount>", keys.join("|")));
        return Ok(());
    }

    match ExpenseCategory::parse(name) {
        Ok(category) => app.set_field(AmountField::Expense(category), amount),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let format = if args.is_empty() {
        Some(ExportFormat::Spreadsheet)
    } else {
        ExportFormat::parse(args)
    };

    match format {
        Some(format) => app.export(format),
        None => app.set_status(format!("Unknown export format: {args} (use xlsx, txt or csv)")),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.reset();
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
