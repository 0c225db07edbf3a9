//! `labguard`: the LabGuard QC command-line client.
//!
//! Manages the SKU standards catalog, records QC inspection reports and
//! exports backups from a local redb database.

mod commands;
mod config;

use clap::{Parser, Subcommand};

use commands::report::NewReport;
use config::AppConfig;

/// LabGuard QC tool.
#[derive(Parser, Debug)]
#[command(name = "labguard", about = "LabGuard QC record keeper")]
struct Cli {
    /// Path to config file (default: ~/.labguard/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Data directory (overrides [storage] data_dir).
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// SKU standards catalog.
    Sku {
        #[command(subcommand)]
        action: SkuAction,
    },

    /// Preview the checklist generated for a SKU.
    Checklist {
        /// SKU id.
        sku_id: String,
    },

    /// Lab reports.
    Report {
        #[command(subcommand)]
        action: ReportAction,
    },

    /// Export all SKUs and reports to a backup file.
    Export {
        /// Target directory (default: [storage] backup_dir).
        #[arg(long)]
        out: Option<String>,
    },

    /// Show the cloud storage folder link.
    Cloud,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum SkuAction {
    /// List SKUs.
    List {
        /// Filter by name or id.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one SKU with its standards.
    Show { id: String },
    /// Create or update a SKU from JSON.
    Save {
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },
    /// Print an empty SKU of a category, ready to fill in and save.
    Template { category: String },
    /// Delete a SKU.
    Delete {
        id: String,
        /// Skip confirmation.
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ReportAction {
    /// Fill in and save a new report.
    New {
        /// Category (Laminate, Sack).
        category: String,
        /// SKU id.
        #[arg(long)]
        sku: String,
        #[arg(long)]
        invoice: String,
        #[arg(long = "invoice-date", default_value = "")]
        invoice_date: String,
        #[arg(long, default_value = "")]
        unit: String,
        #[arg(long, default_value = "")]
        vendor: String,
        #[arg(long = "material-code", default_value = "")]
        material_code: String,
        #[arg(long = "rolls-supplied", default_value = "")]
        rolls_supplied: String,
        #[arg(long = "rolls-sampled", default_value = "")]
        rolls_sampled: String,
        #[arg(long = "received-unit", default_value = "")]
        receiving_date_unit: String,
        #[arg(long = "received-lab", default_value = "")]
        receiving_date_lab: String,
        /// Reporting date (default: today).
        #[arg(long = "reporting-date")]
        reporting_date: Option<String>,
        #[arg(long, default_value = "")]
        remarks: String,
        /// Set a checkpoint result: "<n>=<value>" (repeatable).
        #[arg(long = "set")]
        set: Vec<String>,
        /// Set a checkpoint status: "<n>=pass|fail|na|blank" (repeatable).
        #[arg(long = "status")]
        status: Vec<String>,
        /// Set a length/width checkpoint: "<n>=<L>,<W>" (repeatable).
        #[arg(long = "dual")]
        dual: Vec<String>,
        /// Image of the sack (Sack reports only).
        #[arg(long)]
        image: Option<String>,
    },
    /// List reports, oldest first.
    List {
        /// Filter by invoice number or SKU name.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one report.
    Show { id: String },
    /// Delete a report (admin passkey required).
    Delete {
        id: String,
        /// Admin passkey (prompted if omitted).
        #[arg(long)]
        passkey: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Keep stdout clean for table/json output unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(AppConfig::default_path);
    let app = AppConfig::load(&config_path)?;
    let storage = app.service_config(cli.data_dir.as_deref());
    let json_output = cli.output == "json";

    match cli.command {
        Commands::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite).",
                    config_path.display()
                );
            }
            app.save(&config_path)?;
            println!("Config written to {}.", config_path.display());
        }

        Commands::Sku { action } => {
            let svc = commands::open(&app, &storage)?;
            match action {
                SkuAction::List { search } => {
                    commands::sku::list(&svc, search.as_deref(), json_output)?;
                }
                SkuAction::Show { id } => {
                    commands::sku::show(&svc, &id, json_output)?;
                }
                SkuAction::Save { json_body, file } => {
                    let body = if let Some(path) = file {
                        std::fs::read_to_string(&path)?
                    } else if let Some(json) = json_body {
                        json
                    } else {
                        anyhow::bail!("Provide --json or -f <file>.");
                    };
                    commands::sku::save(&svc, &body)?;
                }
                SkuAction::Template { category } => {
                    commands::sku::template(&category)?;
                }
                SkuAction::Delete { id, yes } => {
                    if !yes && !commands::confirm("Are you sure? [y/N]: ")? {
                        println!("Cancelled.");
                        return Ok(());
                    }
                    commands::sku::delete(&svc, &id)?;
                }
            }
        }

        Commands::Checklist { sku_id } => {
            let svc = commands::open(&app, &storage)?;
            commands::sku::checklist(&svc, &sku_id, json_output)?;
        }

        Commands::Report { action } => {
            let svc = commands::open(&app, &storage)?;
            match action {
                ReportAction::New {
                    category,
                    sku,
                    invoice,
                    invoice_date,
                    unit,
                    vendor,
                    material_code,
                    rolls_supplied,
                    rolls_sampled,
                    receiving_date_unit,
                    receiving_date_lab,
                    reporting_date,
                    remarks,
                    set,
                    status,
                    dual,
                    image,
                } => {
                    let req = NewReport {
                        category,
                        sku_id: sku,
                        info: labguard_qc::GeneralInfo {
                            unit,
                            vendor,
                            material_code,
                            invoice_number: invoice,
                            invoice_date,
                            rolls_supplied,
                            rolls_sampled,
                            receiving_date_unit,
                            receiving_date_lab,
                            reporting_date: reporting_date
                                .unwrap_or_else(labguard_core::today_utc),
                            remarks,
                        },
                        set,
                        status,
                        dual,
                        image,
                    };
                    commands::report::create(&svc, req, json_output)?;
                }
                ReportAction::List { search } => {
                    commands::report::list(&svc, search.as_deref(), json_output)?;
                }
                ReportAction::Show { id } => {
                    commands::report::show(&svc, &id, json_output)?;
                }
                ReportAction::Delete { id, passkey } => {
                    let passkey = commands::report::resolve_passkey(passkey, || {
                        rpassword::prompt_password("Admin passkey: ")
                    })?;
                    commands::report::delete(&svc, &id, &passkey)?;
                }
            }
        }

        Commands::Export { out } => {
            let svc = commands::open(&app, &storage)?;
            let dir = out
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| storage.resolve_backup_dir());
            let path = svc.export_to(&dir)?;
            println!("Backup written to {}.", path.display());
        }

        Commands::Cloud => {
            if app.cloud.url.is_empty() {
                println!("No cloud folder configured.");
                println!("Set [cloud] url in {}.", config_path.display());
            } else {
                println!("{}", app.cloud.url);
            }
        }

        Commands::Version => {
            println!("labguard v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
