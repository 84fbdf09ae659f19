//! The interactive menu loop.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ludex_core::{GameCatalog, SearchQuery};

/// Run the main menu until the user exits or stdin closes.
pub fn run(catalog: &GameCatalog) {
    loop {
        println!("  1. Search for a game");
        println!("  2. View possible search terms");
        println!("  3. Exit");

        let Some(choice) = prompt_choice(1..=3) else {
            return;
        };
        match choice {
            1 => search(catalog),
            2 => view_terms(catalog),
            _ => return,
        }
    }
}

/// Collect one term per facet and run the combined search.
fn search(catalog: &GameCatalog) {
    println!("Here are the possible search terms; press Enter to skip one.");

    let inputs = [
        prompt("  Date bounds (two dates separated by a space, format yyyy-mm-dd): "),
        prompt("  Developer: "),
        prompt("  Publisher: "),
        prompt("  Genre: "),
        prompt("  Number of positive reviews: "),
    ];
    let [Some(dates), Some(developer), Some(publisher), Some(genre), Some(min_reviews)] = inputs
    else {
        return; // stdin closed mid-prompt
    };

    let date_range = if dates.is_empty() {
        None
    } else {
        // A lone date searches from there to the latest catalog date.
        match dates.find(' ') {
            Some(pos) => Some((dates[..pos].to_string(), dates[pos + 1..].to_string())),
            None => Some((dates, String::new())),
        }
    };

    let query = SearchQuery {
        date_range,
        developer: Some(developer),
        publisher: Some(publisher),
        genre: Some(genre),
        min_reviews: Some(min_reviews),
    };

    if query.is_blank() {
        println!(
            "{}",
            "All terms were blank; nothing to search for.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        println!();
        return;
    }

    let names = catalog.combine_and_resolve(&query);
    if names.is_empty() {
        println!(
            "{}",
            "No games matched every term.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        for name in &names {
            println!("{name}");
        }
        println!(
            "{} {} games matched",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            names.len(),
        );
    }
    println!();
}

/// Show date bounds or one of the facet key lists.
fn view_terms(catalog: &GameCatalog) {
    println!("Would you like to view:");
    println!("  1. Date boundaries");
    println!("  2. List of developers ({} items)", catalog.developer_names().len());
    println!("  3. List of publishers ({} items)", catalog.publisher_names().len());
    println!("  4. List of genres ({} items)", catalog.genre_names().len());

    let Some(choice) = prompt_choice(1..=4) else {
        return;
    };
    match choice {
        1 => match catalog.date_bounds() {
            Some((min, max)) => println!("{min} and {max}"),
            None => println!(
                "{}",
                "No dated games in the catalog.".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        },
        2 => print_list("List of developers", catalog.developer_names()),
        3 => print_list("List of publishers", catalog.publisher_names()),
        _ => print_list("List of genres", catalog.genre_names()),
    }
    println!();
}

fn print_list(label: &str, names: &[String]) {
    println!(
        "{}: {}",
        label.if_supports_color(Stdout, |t| t.bold()),
        names.join(", "),
    );
}

/// Prompt until the user enters a number within `range`. `None` on EOF.
fn prompt_choice(range: RangeInclusive<u32>) -> Option<u32> {
    loop {
        let input = prompt("Enter a number: ")?;
        match input.trim().parse::<u32>() {
            Ok(choice) if range.contains(&choice) => return Some(choice),
            _ => println!(
                "{}",
                format!(
                    "Incorrect choice selected, enter a number from {} to {}.",
                    range.start(),
                    range.end(),
                )
                .if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
}

fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).ok()? == 0 {
        return None; // EOF
    }
    Some(line.trim_end_matches(['\r', '\n']).to_string())
}
