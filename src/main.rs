//! # Popline Main Entry Point
//!
//! Console front-end for the population view model: fetches one category,
//! applies the requested year and search narrowing, and prints the result.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use popline::cmd_args::CommandLineArgs;
use popline::{
    format, DetailsViewModel, NetworkService, PopulationViewModel, RenderState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let default_filter = if args.verbose() { "popline=debug" } else { "popline=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let service = Arc::new(NetworkService::new());
    let mut view_model = PopulationViewModel::new(service, args.category());

    // Wait for the initial fetch to resolve.
    while view_model.is_loading() {
        view_model.pump().await;
    }

    if let Some(year) = args.year() {
        view_model.set_selected_year(year);
    }
    if let Some(search) = args.search() {
        view_model.set_search_text(search);
        while view_model.has_pending_search() {
            view_model.pump().await;
        }
    }

    match view_model.render_state() {
        RenderState::Error(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
        RenderState::NoResults { search_text } => {
            println!("No results for \"{search_text}\".");
        }
        RenderState::Populated => {
            let category = view_model.category();
            println!(
                "{} population, {} ({} result{})",
                category,
                view_model.selected_year(),
                view_model.filtered_data().len(),
                if view_model.filtered_data().len() == 1 { "" } else { "s" },
            );
            for record in view_model.filtered_data() {
                let name = record.display_name(category).unwrap_or("Unknown");
                let population = record
                    .population
                    .map(format::with_separator)
                    .unwrap_or_else(|| "Unknown".to_string());
                println!("  {name:<30} {population:>15}");
            }

            // Single match gets the full detail block
            if let [record] = view_model.filtered_data() {
                let details = DetailsViewModel::new(record, category);
                println!();
                println!("  ID:   {}", details.id);
                println!("  Year: {}", details.year);
                for (label, value) in &details.additional_info {
                    println!("  {label}: {value}");
                }
            }
        }
        RenderState::Loading => unreachable!("fetch resolved above"),
    }

    Ok(())
}
