use std::path::PathBuf;

use anyhow::Result;
use bujo_labels::config::Config;
use bujo_labels::constants::{
    INFO_NO_ITEMS, INFO_NO_LABELS, SUCCESS_LABEL_CREATED, SUCCESS_LABEL_DELETED, SUCCESS_LABEL_UPDATED,
};
use bujo_labels::label;
use bujo_labels::logger;
use bujo_labels::models::{ProjectItems, UpdateLabelParams};
use bujo_labels::storage::LocalStorage;
use bujo_labels::utils::datetime;
use bujo_labels::LabelService;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "bujo-labels: labels for bullet journal tasks, transactions and notes")]
struct Cli {
    /// Configuration file (defaults to ./bujo-labels.toml, then the XDG config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// User performing the request
    #[arg(short, long, env = "BUJO_USER", global = true)]
    user: Option<String>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage labels
    Label {
        #[command(subcommand)]
        command: LabelCommand,
    },
    /// List project items carrying any of the given labels, grouped by date
    Items {
        /// Comma-separated label ids
        #[arg(long, value_delimiter = ',', required = true)]
        labels: Vec<i32>,
        /// IANA timezone used to bucket notes (defaults to query.default_timezone)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LabelCommand {
    /// Create a label
    Create {
        name: String,
        #[arg(long)]
        icon: Option<String>,
    },
    /// List your labels, most recently updated first
    List,
    /// Show a single label
    Show { id: i32 },
    /// Rename a label or change its icon
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete a label and remove it from every item
    Delete { id: i32 },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default configuration file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config {
        command: ConfigCommand::Init { path },
    } = &cli.command
    {
        let path = match path {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;

    let user = cli
        .user
        .clone()
        .ok_or_else(|| anyhow::anyhow!("No user given: pass --user or set BUJO_USER"))?;

    let storage = LocalStorage::new(&config.database).await?;
    let service = LabelService::new(storage.conn.clone())
        .include_undated_tasks(config.query.include_undated_tasks);

    match cli.command {
        Commands::Label { command } => run_label(&service, &user, command, cli.json).await,
        Commands::Items { labels, timezone } => {
            let timezone = timezone.unwrap_or_else(|| config.query.default_timezone.clone());
            let items = service.get_items_by_labels(&timezone, &labels, &user).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                print_items(&items);
            }
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    }
}

async fn run_label(service: &LabelService, user: &str, command: LabelCommand, json: bool) -> Result<()> {
    match command {
        LabelCommand::Create { name, icon } => {
            let label = service.create(&name, user, icon).await?;
            print_label_result(&label, SUCCESS_LABEL_CREATED, json)?;
        }
        LabelCommand::List => {
            let labels = service.get_labels(user).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&labels)?);
            } else if labels.is_empty() {
                println!("{}", INFO_NO_LABELS);
            } else {
                for label in &labels {
                    println!("{}", format_label(label));
                }
            }
        }
        LabelCommand::Show { id } => {
            let label = service.get_label(id).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&label)?);
            } else {
                println!("{}", format_label(&label));
            }
        }
        LabelCommand::Update { id, name, icon } => {
            let params = UpdateLabelParams { value: name, icon };
            let label = service.partial_update(user, id, params).await?;
            print_label_result(&label, SUCCESS_LABEL_UPDATED, json)?;
        }
        LabelCommand::Delete { id } => {
            service.delete(user, id).await?;
            if !json {
                println!("{}: {}", SUCCESS_LABEL_DELETED, id);
            }
        }
    }
    Ok(())
}

fn print_label_result(label: &label::Model, message: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(label)?);
    } else {
        println!("{}: {}", message, format_label(label));
    }
    Ok(())
}

fn format_label(label: &label::Model) -> String {
    match &label.icon {
        Some(icon) => format!("#{} {} {}", label.id, icon, label.name),
        None => format!("#{} {}", label.id, label.name),
    }
}

fn print_items(groups: &[ProjectItems]) {
    if groups.is_empty() {
        println!("{}", INFO_NO_ITEMS);
        return;
    }

    let today = chrono::Local::now().date_naive();
    for group in groups {
        println!(
            "{} ({})",
            datetime::format_ymd(group.date),
            datetime::format_human_date(group.date, today)
        );
        for task in &group.tasks {
            let assignees: Vec<&str> = task.assignees.iter().map(|a| a.alias.as_str()).collect();
            println!("  [task] {} {}{}", task.name, label_names(&task.labels), format_assignees(&assignees));
        }
        for transaction in &group.transactions {
            println!(
                "  [transaction] {} {:.2} {}",
                transaction.name,
                transaction.amount,
                label_names(&transaction.labels)
            );
        }
        for note in &group.notes {
            println!("  [note] {} {}", note.name, label_names(&note.labels));
        }
    }
}

fn label_names(labels: &[bujo_labels::models::LabelView]) -> String {
    labels.iter().map(|l| format!("#{}", l.name)).collect::<Vec<_>>().join(" ")
}

fn format_assignees(assignees: &[&str]) -> String {
    if assignees.is_empty() {
        String::new()
    } else {
        format!(" @{}", assignees.join(" @"))
    }
}
