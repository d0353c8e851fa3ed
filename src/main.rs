use clap::Parser;
use localflip::cli::commands::{Cli, Commands};
use localflip::LocalFlip;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("LOCALFLIP_DB").unwrap_or_else(|_| "./localflip.db".into());

    let lf = match LocalFlip::new(&db_path) {
        Ok(lf) => lf,
        Err(e) => {
            eprintln!("Error initializing LocalFlip: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(lf, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(lf: LocalFlip, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Scan { query, args } => {
            let config = args.to_config();
            let report = lf.scan(&config, query.trim()).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if args.export_csv {
                let path = lf.export_csv(&report.rows, "single")?;
                println!("Exported to CSV: {}", path.display());
            }
        }
        Commands::ScanSaved { args } => {
            let terms = lf.saved_searches()?;
            if terms.is_empty() {
                eprintln!("No saved searches to run. Add some terms first.");
                std::process::exit(1);
            }
            let config = args.to_config();
            let report = lf.scan_terms(&config, &terms).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if args.export_csv {
                let path = lf.export_csv(&report.rows, "saved")?;
                println!("Exported to CSV: {}", path.display());
            }
        }
        Commands::Searches => {
            let terms = lf.saved_searches()?;
            if terms.is_empty() {
                println!("No saved searches yet.");
            } else {
                for term in terms {
                    println!("{term}");
                }
            }
        }
        Commands::SearchAdd { term } => {
            lf.add_saved_search(&term)?;
            println!("Added saved search: {}", term.trim());
        }
        Commands::SearchRemove { term } => {
            lf.remove_saved_search(&term)?;
            println!("Removed saved search: {}", term.trim());
        }
    }
    Ok(())
}
