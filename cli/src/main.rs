use anyhow::Context;
use clap::Parser;
use collabpath::app::CollabPathApp;
use collabpath::display::{
    PathDisplayOptions, display_artist_info, display_expansion, display_graph_stats, display_search_info,
    display_search_result, display_suggestions,
};
use collabpath::json_output::{create_json_output, print_json_output};
use collabpath::progress::SearchProgressBar;
use collabpath::{Args, ColorScheme, Command};
use collabpath_core::{Config, GraphStats};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(e) = run(args, &colors).await {
        eprintln!("{}", colors.error(&format!("❌ Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "collabpath=info,collabpath_core=info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args, colors: &ColorScheme) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("Failed to read configuration")?;
    args.apply_overrides(&mut config)?;
    info!(
        command = args.command.name(),
        cache = %config.cache_path.display(),
        json = args.json,
        "Running command"
    );
    let app = CollabPathApp::new(config);

    match &args.command {
        Command::Path {
            artist1,
            artist2,
            algorithm,
            hide_urls,
            quiet,
        } => {
            let orchestrator = app.orchestrator()?;

            if args.verbose && !args.json {
                display_search_info(artist1, artist2, algorithm, colors);
            }

            let mut progress = if args.json || *quiet {
                SearchProgressBar::hidden()
            } else {
                SearchProgressBar::new()
            };
            let outcome = orchestrator
                .find_connection(artist1, artist2, algorithm, &mut progress)
                .await;
            progress.clear();
            let result = outcome?;
            info!(
                found = result.found,
                degrees = ?result.degrees,
                duration_ms = result.duration_ms,
                "Path command finished"
            );

            if args.json {
                print_json_output(&create_json_output(&result));
            } else {
                let options = PathDisplayOptions {
                    hide_urls: *hide_urls,
                    quiet: *quiet,
                    verbose: args.verbose,
                };
                display_search_result(&result, &options, colors);
            }
        }
        Command::Expand { artist } => {
            let report = app.orchestrator()?.expand_artist_network(artist).await?;

            if args.json {
                print_json_output(&report);
            } else {
                display_expansion(&report, colors);
            }
        }
        Command::Info { artist } => {
            let artist_info = app.orchestrator()?.artist_info(artist).await?;
            info!(
                artist = %artist_info.artist.name,
                in_database = artist_info.in_database,
                "Looked up artist"
            );

            if args.json {
                print_json_output(&artist_info);
            } else {
                display_artist_info(&artist_info, colors);
            }
        }
        Command::Suggest { query, limit } => {
            let suggestions = app.orchestrator()?.suggest_artists(query, *limit).await?;

            if args.json {
                print_json_output(&suggestions);
            } else {
                display_suggestions(query, &suggestions, colors);
            }
        }
        Command::Stats => {
            // Reads the cache only, so no access token is needed
            let stats = GraphStats::from_snapshot(&app.cache.load_all().await);

            if args.json {
                print_json_output(&stats);
            } else {
                println!("📁 {}", app.config().cache_path.display());
                display_graph_stats(&stats, colors);
            }
        }
    }

    Ok(())
}
