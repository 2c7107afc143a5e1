use collabpath_core::{ArtistInfo, ArtistSummary, ExpansionReport, GraphStats, SearchResult};

use crate::colors::ColorScheme;
use crate::utils::format_number;

pub struct PathDisplayOptions {
    pub hide_urls: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn display_search_info(from: &str, to: &str, algorithm: &str, colors: &ColorScheme) {
    println!(
        "🎵 Finding path from {} to {}",
        colors.artist_name(&format!("\"{}\"", from)),
        colors.artist_name(&format!("\"{}\"", to))
    );

    if algorithm.trim().eq_ignore_ascii_case("dfs") {
        println!("⚙️  Using depth-first search (any path, not necessarily the shortest)");
    } else {
        println!("⚙️  Using shortest hop pathfinding (BFS)");
    }

    println!("🔍 Searching...");
}

pub fn display_search_result(
    result: &SearchResult,
    options: &PathDisplayOptions,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!("\n---\n");
    }

    if result.found {
        display_successful_path(result, options, colors);
    } else {
        println!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.artist_name(&format!("\"{}\"", result.start_artist)),
            colors.artist_name(&format!("\"{}\"", result.end_artist))
        );
    }

    display_warnings(&result.warnings, colors);

    if options.verbose {
        display_search_statistics(result.nodes_expanded, result.duration_ms, colors);
    }
}

fn display_successful_path(
    result: &SearchResult,
    options: &PathDisplayOptions,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&result.degrees.unwrap_or_default().to_string())
        );
    }

    println!("{}", format_path_flow(&result.path_names, colors));

    if !options.quiet {
        println!();
        for (step_index, (artist_id, artist_name)) in
            result.path_ids.iter().zip(&result.path_names).enumerate()
        {
            let formatted_line = format_path_step(
                step_index,
                artist_name,
                artist_id.as_str(),
                options.hide_urls,
                colors,
            );
            println!("{}", formatted_line);
        }
    }
}

pub fn format_path_flow(names: &[String], colors: &ColorScheme) -> String {
    names
        .iter()
        .map(|name| colors.artist_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_path_step(
    step_index: usize,
    artist_name: &str,
    artist_url: &str,
    hide_urls: bool,
    colors: &ColorScheme,
) -> String {
    let step_number = format!("{}.", step_index + 1);
    let mut formatted_line = format!(
        "{:2} {}",
        colors.step_number(&step_number),
        colors.artist_name(&format!("\"{}\"", artist_name))
    );

    // DFS names are the identifiers themselves
    if !hide_urls && artist_name != artist_url {
        formatted_line.push_str(&format!(" - {}", colors.url(artist_url)));
    }

    formatted_line
}

pub fn display_warnings(warnings: &[String], colors: &ColorScheme) {
    for warning in warnings {
        eprintln!("{} {}", colors.warning("⚠️  Cache not saved:"), warning);
    }
}

fn display_search_statistics(nodes_expanded: Option<usize>, duration_ms: u64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} artists in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_expanded.unwrap_or_default())),
        colors.number(&format!("{:.3}", duration_ms as f64 / 1000.0))
    );
}

pub fn display_expansion(report: &ExpansionReport, colors: &ColorScheme) {
    let source = if report.already_cached {
        "already cached"
    } else {
        "fetched from catalog"
    };

    println!(
        "{} {} has {} collaborators ({})",
        colors.success("✅"),
        colors.artist_name(&format!("\"{}\"", report.artist.name)),
        colors.number(&format_number(report.connections.len())),
        source
    );
}

pub fn format_artist_info(info: &ArtistInfo, colors: &ColorScheme) -> String {
    let cache_status = if info.in_database {
        format!(
            "{} cached collaborators",
            colors.number(&format_number(info.connections_in_db))
        )
    } else {
        "not cached yet".to_string()
    };

    format!(
        "{} - popularity {}, {} followers, {}",
        colors.artist_name(&format!("\"{}\"", info.artist.name)),
        colors.number(&info.artist.popularity.to_string()),
        colors.number(&format_number(info.artist.followers as usize)),
        cache_status
    )
}

pub fn display_artist_info(info: &ArtistInfo, colors: &ColorScheme) {
    println!("{}", format_artist_info(info, colors));

    if !info.artist.genres.is_empty() {
        println!("🎶 {}", colors.genre(&info.artist.genres.join(", ")));
    }
    println!("🔗 {}", colors.url(info.artist.node.as_str()));
}

pub fn format_suggestion(index: usize, artist: &ArtistSummary, colors: &ColorScheme) -> String {
    let mut formatted_line = format!(
        "{:3} {}",
        colors.step_number(&format!("{}.", index + 1)),
        colors.artist_name(&artist.name)
    );

    if !artist.genres.is_empty() {
        formatted_line.push_str(&format!(" {}", colors.genre(&artist.genres.join(", "))));
    }

    formatted_line.push_str(&format!(
        " - {} followers",
        colors.number(&format_number(artist.followers as usize))
    ));

    formatted_line
}

pub fn display_suggestions(query: &str, artists: &[ArtistSummary], colors: &ColorScheme) {
    if artists.is_empty() {
        println!(
            "{} {}",
            colors.error("❌ No artists match"),
            colors.artist_name(&format!("\"{}\"", query))
        );
        return;
    }

    for (index, artist) in artists.iter().enumerate() {
        println!("{}", format_suggestion(index, artist, colors));
    }
}

pub fn display_graph_stats(stats: &GraphStats, colors: &ColorScheme) {
    println!(
        "{} {} artists, {} connections ({} per artist)",
        colors.stats("📊"),
        colors.number(&format_number(stats.total_artists)),
        colors.number(&format_number(stats.total_connections)),
        colors.number(&format!("{:.1}", stats.average_connections))
    );

    if let (Some(artist), Some(count)) = (&stats.most_connected_artist, stats.most_connections_count)
    {
        println!(
            "🔝 Most connected: {} with {} collaborators",
            colors.url(artist.as_str()),
            colors.number(&format_number(count))
        );
    }
}
