use crate::core::{overwrite_first_rows, Cleaner, DataProfile, Spread, Summary};
use crate::error::EmployeeResult;
use crate::excel::{EmployeeExporter, EmployeeImporter};
use crate::types::{format_number, Table};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Default output path of the process command
pub const DEFAULT_OUTPUT: &str = "Processed_Employee_Data.xlsx";

fn format_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), format_number)
}

/// Execute the process command: load, clean, overwrite, summarize, save
pub fn process(input: PathBuf, output: PathBuf, verbose: bool, json: bool) -> EmployeeResult<()> {
    if !json {
        println!("{}", "🧹 Employee Data - Processing".bold().green());
        println!("   Input:  {}", input.display());
        println!("   Output: {}", output.display());
        println!();
    }

    let mut table = EmployeeImporter::new(&input).import()?;
    info!("Loaded {} rows from {}", table.row_count(), input.display());

    if !json {
        println!("{}", "📋 Before cleaning:".bold().cyan());
        print_profile(&DataProfile::from_table(&table), verbose);
    }

    let report = Cleaner::new().clean(&mut table)?;

    if !json {
        println!("{}", "📋 After cleaning:".bold().cyan());
        print_profile(&DataProfile::from_table(&table), verbose);

        if verbose {
            println!("{}", "🔧 Cleaning steps:".bold().cyan());
            println!("   duplicates removed: {}", report.duplicates_removed);
            for fill in &report.filled {
                println!("   {:<15} {} filled", fill.column.bright_blue(), fill.cells);
            }
            println!();
        }
    }

    overwrite_first_rows(&mut table)?;
    let summary = Summary::from_table(&table)?;

    EmployeeExporter::new(&table).export(&output)?;
    info!("Saved {} rows to {}", table.row_count(), output.display());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json(&table)?)?);
    } else {
        print_summary(&summary, &table);
        println!(
            "{} {}",
            "✅ Processed data saved to:".bold().green(),
            output.display()
        );
    }

    Ok(())
}

/// Execute the inspect command: load and print diagnostics only
pub fn inspect(input: PathBuf) -> EmployeeResult<()> {
    println!("{}", "🔍 Employee Data - Inspect".bold().green());
    println!("   File: {}\n", input.display());

    let table = EmployeeImporter::new(&input).import()?;
    print_profile(&DataProfile::from_table(&table), true);
    Ok(())
}

/// Print shape, types, null counts, unique counts and duplicates
pub fn print_profile(profile: &DataProfile, per_column: bool) {
    println!("   Shape: {} rows x {} columns", profile.rows, profile.columns);
    println!(
        "   Missing values: {}   Duplicate rows: {}",
        profile.total_nulls(),
        profile.duplicate_rows
    );

    if per_column {
        println!(
            "   {:<20} {:<8} {:>8} {:>8}",
            "Column".bold(),
            "Type".bold(),
            "Nulls".bold(),
            "Unique".bold()
        );
        for column in &profile.column_profiles {
            let nulls = if column.nulls > 0 {
                column.nulls.to_string().yellow()
            } else {
                column.nulls.to_string().normal()
            };
            println!(
                "   {:<20} {:<8} {:>8} {:>8}",
                column.name.cyan(),
                column.kind,
                nulls,
                column.unique
            );
        }
    }
    println!();
}

/// Print the highest-paid rows and the grouped statistics
pub fn print_summary(summary: &Summary, table: &Table) {
    println!("{}", "💰 Highest Salary Employee:".bold().green());
    print_table(&summary.highest_salary_table(table));
    println!();

    println!("{}", "📊 Average Age & Salary per Department:".bold().green());
    println!("   {:<25} {:>10} {:>14}", "Department".bold(), "Age".bold(), "Salary".bold());
    for (department, means) in &summary.by_department {
        println!(
            "   {:<25} {:>10} {:>14}",
            department.to_string().bright_blue(),
            format_opt(means.age),
            format_opt(means.salary)
        );
    }
    println!();

    println!("{}", "📊 Department + Ethnicity Analysis:".bold().green());
    println!(
        "   {:<20} {:<15} {:>24} {:>32}",
        "Department".bold(),
        "Ethnicity".bold(),
        "Age (max/min/median)".bold(),
        "Salary (max/min/median)".bold()
    );
    for group in &summary.by_department_ethnicity {
        println!(
            "   {:<20} {:<15} {:>24} {:>32}",
            group.department.to_string().bright_blue(),
            group.ethnicity.to_string(),
            format_spread(&group.age),
            format_spread(&group.salary)
        );
    }
    println!();
}

fn format_spread(spread: &Spread) -> String {
    format!(
        "{} / {} / {}",
        format_opt(spread.max),
        format_opt(spread.min),
        format_opt(spread.median)
    )
}

/// Print a table as `header: value` blocks, one per row
fn print_table(table: &Table) {
    if table.rows.is_empty() {
        println!("   {}", "(no rows)".yellow());
        return;
    }
    for row in &table.rows {
        for (header, value) in table.headers.iter().zip(row) {
            println!("   {:<15} {}", header.cyan(), value);
        }
        println!();
    }
}
