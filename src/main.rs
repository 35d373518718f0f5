use clap::{Parser, Subcommand};
use employee_data::cli;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "employee-data")]
#[command(about = "Clean, impute and summarize an employee spreadsheet.")]
#[command(long_about = "Employee Data - spreadsheet cleaning pipeline

PIPELINE:
  load -> inspect -> deduplicate + impute -> overwrite sample rows
       -> summarize -> save

COMMANDS:
  process   - Run the full pipeline and write the processed workbook
  inspect   - Print shape, types, missing values and duplicates

EXAMPLES:
  employee-data process \"Employee Sample Data.xlsx\"
  employee-data process data.xlsx -o cleaned.xlsx --verbose
  employee-data process data.xlsx --json
  employee-data inspect data.xlsx

Set RUST_LOG (e.g. RUST_LOG=employee_data=debug) for detailed logs on stderr.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Run the full cleaning pipeline.

Removes duplicate rows, fills missing values column by column, overwrites
the first five rows with fixed sample values, prints summary statistics and
writes the processed table to a new .xlsx file (one sheet, header row).

FILL RULES (in order):
  Full Name, Country     -> \"Not Provided\"
  Gender                 -> most frequent gender
  Job Title              -> most frequent title in the same Department,
                            else \"Unknown\"
  Department             -> most frequent department
  Ethnicity              -> by Country (China: Asian, Brazil: Latino)
  Age                    -> median age
  Annual Salary          -> median salary for the same Job Title,
                            else the overall median salary
  Bonus %                -> mean bonus
  Hire Date              -> earliest hire date
  City                   -> most frequent city (United States + Caucasian)
  Exit Date              -> Hire Date + (retirement age - Age) years")]
    /// Clean, summarize and save an employee workbook
    Process {
        /// Path to the input Excel file (.xlsx)
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        #[arg(
            short,
            long,
            default_value = cli::DEFAULT_OUTPUT,
            env = "EMPLOYEE_DATA_OUTPUT"
        )]
        output: PathBuf,

        /// Show per-column diagnostics and cleaning steps
        #[arg(short, long)]
        verbose: bool,

        /// Print the summary as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print diagnostics for an employee workbook
    Inspect {
        /// Path to the input Excel file (.xlsx)
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "employee_data=info"
    } else {
        "employee_data=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            verbose,
            json,
        } => {
            init_tracing(verbose);
            cli::process(input, output, verbose, json)?;
        }

        Commands::Inspect { input } => {
            init_tracing(false);
            cli::inspect(input)?;
        }
    }

    Ok(())
}
