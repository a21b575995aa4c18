pub mod cache;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod export;
pub mod filter;
pub mod session;
pub mod stats;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;

use cli::{Cli, Command, FilterArgs};
use domain::Award;
use filter::FilterSelection;
use session::{Dashboard, DashboardView, ViewOptions};
use stats::Stratifier;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        data,
        cache_dir,
        command,
    } = cli;

    if let Command::Completions { shell } = &command {
        return handle_completions(*shell);
    }

    let dashboard = Dashboard::load(&data, cache_dir.as_deref())?;

    match command {
        Command::Summary { filters, top_n } => handle_summary(&dashboard, &filters, top_n),
        Command::Cuisines { filters, top_n } => handle_cuisines(&dashboard, &filters, top_n),
        Command::Facilities { filters, limit, by } => {
            handle_facilities(&dashboard, &filters, limit, by)
        }
        Command::Map { filters } => handle_map(&dashboard, &filters),
        Command::Options { filters } => handle_options(&dashboard, &filters),
        Command::Export { filters, output } => handle_export(&dashboard, &filters, &output),
        Command::Completions { .. } => Ok(()),
    }
}

fn handle_summary(dashboard: &Dashboard, filters: &FilterArgs, top_n: usize) -> Result<()> {
    let selection = filters.to_selection().reconciled(dashboard.table());
    let view = dashboard.view(
        &selection,
        ViewOptions {
            top_n,
            ..ViewOptions::default()
        },
    );

    println!("{}", "Core metrics".bold());
    println!(
        "  Restaurants:       {}",
        view.metrics.total_restaurants.to_string().red().bold()
    );
    println!("  Cities covered:    {}", view.metrics.unique_cities);
    println!("  Cuisines in view:  {}", view.metrics.selected_cuisines);
    println!("  Starred share:     {:.1}%", view.metrics.starred_percentage);

    print_selection(&selection);
    warn_if_empty(&view);

    Ok(())
}

fn handle_cuisines(dashboard: &Dashboard, filters: &FilterArgs, top_n: usize) -> Result<()> {
    let selection = filters.to_selection().reconciled(dashboard.table());
    let view = dashboard.view(
        &selection,
        ViewOptions {
            top_n,
            ..ViewOptions::default()
        },
    );

    println!("{}", format!("Top {} cuisines", view.ranking.len()).bold());
    println!(
        "  {:<28} {:>6} {:>10} {:>8} {:>10} {:>10}",
        "Cuisine", "Count", "Avg price", "Starred", "Starred %", "Avg stars"
    );

    for stats in &view.cuisine_stats {
        println!(
            "  {:<28} {:>6} {:>10.2} {:>8} {:>9.1}% {:>10.2}",
            stats.cuisine,
            stats.restaurant_count,
            stats.avg_price_level,
            stats.starred_count,
            stats.starred_percentage,
            stats.avg_award_score
        );
    }

    print_award_distribution(&view);
    print_selection(&selection);
    warn_if_empty(&view);

    Ok(())
}

fn print_award_distribution(view: &DashboardView) {
    if view.award_distribution.is_empty() {
        return;
    }

    println!("{}", "Award distribution".bold());
    print!("  {:<28}", "Cuisine");
    for award in Award::ALL {
        print!(" {:>12}", award.as_str());
    }
    println!();

    for ranked in &view.ranking {
        print!("  {:<28}", ranked.cuisine);
        for award in Award::ALL {
            let count = view
                .award_distribution
                .iter()
                .find(|bucket| bucket.cuisine == ranked.cuisine && bucket.award == award)
                .map(|bucket| bucket.count.to_string())
                .unwrap_or_else(|| "-".to_string());
            print!(" {:>12}", count);
        }
        println!();
    }
}

fn handle_facilities(
    dashboard: &Dashboard,
    filters: &FilterArgs,
    limit: usize,
    by: Stratifier,
) -> Result<()> {
    let selection = filters.to_selection().reconciled(dashboard.table());
    let view = dashboard.view(
        &selection,
        ViewOptions {
            facility_limit: limit,
            stratifier: by,
            ..ViewOptions::default()
        },
    );

    let prevalence = &view.prevalence;
    println!(
        "{}",
        format!("Facility prevalence by {} (%)", by.as_str()).bold()
    );

    print!("  {:<28}", "Facility");
    for stratum in prevalence.strata() {
        print!(" {:>14}", stratum);
    }
    println!();

    for (row, facility) in prevalence.facilities().iter().enumerate() {
        print!("  {:<28}", facility);
        for col in 0..prevalence.strata().len() {
            print!(" {:>13.1}%", prevalence.rate(row, col));
        }
        println!();
    }

    print_selection(&selection);
    warn_if_empty(&view);

    Ok(())
}

fn handle_map(dashboard: &Dashboard, filters: &FilterArgs) -> Result<()> {
    let selection = filters.to_selection().reconciled(dashboard.table());
    let view = dashboard.view(&selection, ViewOptions::default());

    println!("{}", "City distribution".bold());
    println!(
        "  {:<20} {:>6} {:>10} {:>10}",
        "City", "Count", "Latitude", "Longitude"
    );

    for point in &view.map_points {
        println!(
            "  {:<20} {:>6} {:>10.4} {:>10.4}",
            point.city, point.count, point.latitude, point.longitude
        );
    }

    if view.map_points.is_empty() {
        println!("  {}", "No mapped cities in the current selection".yellow());
    }

    print_selection(&selection);

    Ok(())
}

fn handle_options(dashboard: &Dashboard, filters: &FilterArgs) -> Result<()> {
    let table = dashboard.table();
    let selection = filters.to_selection();

    println!("{}", "Filter options".bold());

    let continents: Vec<&str> = table.continents().iter().map(|c| c.as_str()).collect();
    println!("  Continents: {}", continents.join(", "));

    let awards: Vec<&str> = table.awards().iter().map(|a| a.as_str()).collect();
    println!("  Awards:     {}", awards.join(", "));
    println!("  Price levels: 1-4");

    println!("  Cuisines:   {}", table.cuisines().len());
    println!("  Facilities: {}", table.facilities().len());

    let cities = table.cities(selection.continent);
    match selection.continent {
        Some(continent) => {
            println!("  Cities in {}: {}", continent, cities.join(", "));
        }
        None => println!("  Cities:     {}", cities.len()),
    }

    Ok(())
}

fn handle_export(dashboard: &Dashboard, filters: &FilterArgs, output: &Path) -> Result<()> {
    let selection = filters.to_selection();
    let view = dashboard.view(&selection, ViewOptions::default());

    export::export_to_path(output, &view.filtered)?;

    println!(
        "Exported {} restaurants to {}",
        view.filtered.len().to_string().bold(),
        output.display()
    );

    Ok(())
}

fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

/// Echo the active filters, mirroring the dashboard's sidebar summary
fn print_selection(selection: &FilterSelection) {
    if selection.is_unfiltered() {
        return;
    }

    println!("{}", "Active filters".bold());

    if let Some(continent) = selection.continent {
        println!("  Continent:   {}", continent);
    }
    if let Some(city) = &selection.city {
        println!("  City:        {}", city);
    }
    if !selection.cuisines.is_empty() {
        println!("  Cuisines:    {}", selection.cuisines.join(", "));
    }
    if let Some(award) = selection.award {
        println!("  Award:       {}", award);
    }
    if !selection.facilities.is_empty() {
        println!("  Facilities:  {}", selection.facilities.join(", "));
    }
    if let Some(level) = selection.price_level {
        println!("  Price level: {}", level);
    }
}

fn warn_if_empty(view: &DashboardView) {
    if view.filtered.is_empty() {
        println!(
            "{}",
            "No restaurants match the current filters".yellow()
        );
    }
}
