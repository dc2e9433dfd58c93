use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Settings;
use crate::export::{self, ExportFormat};
use crate::input::AmountField;
use crate::models::{BudgetPlan, ExpenseCategory};

pub(crate) fn as_cli(args: &[String], settings: Settings) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };
    let rest = args.get(2..).unwrap_or_default();

    match command.as_str() {
        "summary" | "s" => cli_summary(rest),
        "export" | "e" => cli_export(rest, settings),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetplan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("BudgetPlan: monthly budget planner");
    println!();
    println!("Usage: budgetplan [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print the budget summary");
    let formats: Vec<String> = ExportFormat::all().iter().map(|f| f.to_string()).collect();
    let export_usage = format!("export <{}>", formats.join("|"));
    println!("  {export_usage:<30}Write my_budget_plan.<ext>");
    println!("    --out <dir>                 Output directory (default: Downloads)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Amount flags (summary and export):");
    println!("  --income <amount>             Monthly income, 1000-100000 (default: 5000)");
    for category in ExpenseCategory::all() {
        let flag = format!("--{} <amount>", category.key());
        println!(
            "  {flag:<30}{} expense, 0-50000 (default: {})",
            category.label(),
            BudgetPlan::default().expenses.get(*category)
        );
    }
}

/// Options parsed from `--flag value` pairs.
#[derive(Debug)]
pub(crate) struct PlanArgs {
    pub(crate) plan: BudgetPlan,
    pub(crate) out: Option<PathBuf>,
    pub(crate) positional: Vec<String>,
}

pub(crate) fn parse_plan_args(args: &[String]) -> Result<PlanArgs> {
    let mut plan = BudgetPlan::default();
    let mut out = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(flag) = arg.strip_prefix("--") else {
            positional.push(arg.clone());
            continue;
        };
        let value = iter
            .next()
            .with_context(|| format!("Missing value for --{flag}"))?;

        if flag == "out" {
            out = Some(PathBuf::from(value));
            continue;
        }

        let field = if flag == "income" {
            AmountField::Income
        } else {
            let category = ExpenseCategory::find_by_name(flag)
                .with_context(|| format!("Unknown option: --{flag}"))?;
            AmountField::Expense(category)
        };
        field.apply(&mut plan, value)?;
    }

    Ok(PlanArgs {
        plan,
        out,
        positional,
    })
}

fn cli_summary(args: &[String]) -> Result<()> {
    let parsed = parse_plan_args(args)?;
    if parsed.out.is_some() {
        anyhow::bail!("--out is only valid with the export command");
    }
    println!("{}", export::render_text(&parsed.plan));
    Ok(())
}

fn cli_export(args: &[String], settings: Settings) -> Result<()> {
    let parsed = parse_plan_args(args)?;

    let format_arg = parsed
        .positional
        .first()
        .map(String::as_str)
        .unwrap_or("xlsx");
    let format = ExportFormat::parse(format_arg)
        .with_context(|| format!("Unknown export format: {format_arg} (use xlsx, txt or csv)"))?;

    let settings = match parsed.out {
        Some(dir) => settings.with_export_dir(dir),
        None => settings,
    };

    let path = export::export_plan(&parsed.plan, format, &settings.export_dir)?;
    println!("{}: {}", export::SUCCESS_TITLE, format.success_message());
    println!("  {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
