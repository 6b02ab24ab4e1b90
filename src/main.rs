use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::{RosterEntry, StudentRecord};
use database::StudentRepository;
use intake::{IntakeWorkflow, RecordStore};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The main entry point for the rollbook application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file, when one exists.
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Resolve configuration. DATABASE_URL from the environment wins over
    // the config file, which keeps credentials out of the file.
    let mut config = configuration::load_config().context("failed to load configuration")?;
    if let Ok(url) = std::env::var("DATABASE_URL") {
        tracing::debug!("using DATABASE_URL from the environment");
        config.database.url = url;
    }

    // Establish the single process-lifetime connection pool. The tool
    // cannot function without its storage, so a failure here is fatal.
    let pool = database::connect(
        &config.database.url,
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await
    .context("failed to connect to the student database")?;
    let repository = StudentRepository::new(pool);

    // Execute the appropriate command
    match cli.command {
        Commands::List => handle_list(&repository).await,
        Commands::Add(args) => handle_add(repository, args).await,
        Commands::Session => handle_session(repository).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Records students and their subject marks in the school database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug-level logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every recorded student with their average marks.
    List,

    /// Record a single student from command-line options.
    Add(AddArgs),

    /// Interactively record students one after another.
    Session,
}

#[derive(Parser)]
struct AddArgs {
    /// The student's full name.
    #[arg(long)]
    name: String,

    /// The student's registration number.
    #[arg(long)]
    reg_number: String,

    /// Marks scored in math, 0 to 100.
    #[arg(long)]
    math: String,

    /// Marks scored in java, 0 to 100.
    #[arg(long)]
    java: String,

    /// Marks scored in php, 0 to 100.
    #[arg(long)]
    php: String,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Handles `list`: the startup load, rendered as a table.
async fn handle_list(repository: &StudentRepository) -> anyhow::Result<()> {
    let students = repository
        .list_all()
        .await
        .context("failed to load existing students")?;

    println!("{}", render_roster(&students));
    Ok(())
}

/// Handles `add`: one submission from command-line options.
async fn handle_add(repository: StudentRepository, args: AddArgs) -> anyhow::Result<()> {
    let workflow = IntakeWorkflow::new(repository);

    match workflow
        .submit(&args.name, &args.reg_number, &args.math, &args.java, &args.php)
        .await
    {
        Ok(record) => {
            println!(
                "Recorded {} ({}) with average marks {:.2}",
                record.name,
                record.reg_number,
                record.average_marks()
            );
            Ok(())
        }
        Err(reason) => {
            eprintln!("{reason}");
            std::process::exit(1);
        }
    }
}

/// Handles `session`: the interactive form loop.
///
/// Loads the existing roster first (fatal on failure, like any startup
/// load), then prompts for the five fields until the operator types
/// `exit` at the name prompt or closes stdin. After a rejected submission
/// the previous answers are offered back as defaults so the operator can
/// correct the one bad field in place; after an accepted one the form is
/// cleared for the next entry.
async fn handle_session(repository: StudentRepository) -> anyhow::Result<()> {
    let mut roster = repository
        .list_all()
        .await
        .context("failed to load existing students")?;
    println!("{}", render_roster(&roster));
    println!("Enter students one at a time. Type `exit` at the name prompt to quit.");

    let workflow = IntakeWorkflow::new(repository);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    // The five buffered answers, kept across a rejection.
    let mut form = ["", "", "", "", ""].map(String::from);
    let labels = ["Name", "Reg Number", "Math Marks", "Java Marks", "PHP Marks"];

    loop {
        match prompt_field(labels[0], &form[0], &mut input)? {
            Some(entered) if entered == "exit" => break,
            Some(entered) => form[0] = entered,
            None => break,
        }

        let mut closed = false;
        for index in 1..form.len() {
            match prompt_field(labels[index], &form[index], &mut input)? {
                Some(entered) => form[index] = entered,
                None => {
                    closed = true;
                    break;
                }
            }
        }
        if closed {
            break;
        }

        match workflow
            .submit(&form[0], &form[1], &form[2], &form[3], &form[4])
            .await
        {
            Ok(record) => {
                roster.push(record);
                println!("{}", render_roster(&roster));
                form = ["", "", "", "", ""].map(String::from);
            }
            // A rejected record stays in the form so the operator can
            // correct it in place; a failed write is dropped, not retried.
            Err(reason) => eprintln!("{reason}"),
        }
    }

    Ok(())
}

/// Prompts for one field. An empty reply keeps the previous answer when
/// there is one. Returns `None` when stdin is closed.
fn prompt_field(
    label: &str,
    previous: &str,
    input: &mut impl BufRead,
) -> anyhow::Result<Option<String>> {
    if previous.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{previous}]: ");
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let entered = line.trim().to_string();
    if entered.is_empty() && !previous.is_empty() {
        return Ok(Some(previous.to_string()));
    }
    Ok(Some(entered))
}

/// Renders the roster as a table, one row per student with the derived
/// average.
fn render_roster(records: &[StudentRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Reg Number", "Average Marks"]);

    for record in records {
        let entry = RosterEntry::from(record);
        table.add_row(vec![
            entry.name,
            entry.reg_number,
            format!("{:.2}", entry.average_marks),
        ]);
    }

    table
}
