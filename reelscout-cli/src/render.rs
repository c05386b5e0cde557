//! Plain-text rendering of session snapshots.

use std::fmt::Write;

use reelscout_core::session::SessionView;
use reelscout_model::{MovieDetail, MovieSummary, SortOption, TrendingEntry, UiGenre};

const CAST_LIMIT: usize = 5;

/// One result row: id, title, rating, language and year.
pub fn movie_line(movie: &MovieSummary, favorite: bool) -> String {
    format!(
        "{marker} {id:>8}  {title}  | {rating} | {lang} | {year}",
        marker = if favorite { "*" } else { " " },
        id = movie.id.as_u64(),
        title = movie.title,
        rating = movie.rating_label(),
        lang = movie.original_language,
        year = movie.release_year().unwrap_or("N/A"),
    )
}

pub fn results(view: &SessionView) -> String {
    let mut out = String::new();
    if view.is_search() {
        let _ = writeln!(out, "Search results for \"{}\"", view.debounced_search_text);
    } else {
        let _ = writeln!(out, "All Movies (sorted by {})", view.sort.label());
    }

    if view.results.is_empty() {
        out.push_str("No movies found.\n");
        return out;
    }

    for movie in &view.results {
        let _ = writeln!(out, "{}", movie_line(movie, view.is_favorite(movie.id)));
    }
    if let Some(controls) = view.page_controls {
        let _ = writeln!(out, "\n{}", controls.label());
    }
    out
}

pub fn detail(detail: &MovieDetail, favorite: bool) -> String {
    let mut out = String::new();
    let marker = if favorite { " *" } else { "" };
    let _ = writeln!(out, "{}{marker}", detail.title);
    if let Some(tagline) = &detail.tagline {
        let _ = writeln!(out, "\"{tagline}\"");
    }

    let mut meta = vec![detail.release_year().unwrap_or("N/A").to_string()];
    if let Some(runtime) = detail.runtime {
        meta.push(format!("{runtime} mins"));
    }
    meta.push(detail.original_language.clone());
    meta.push(format!("rating {}", detail.rating_label()));
    let _ = writeln!(out, "{}", meta.join(" | "));

    if !detail.genres.is_empty() {
        let names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
        let _ = writeln!(out, "Genres: {}", names.join(", "));
    }

    let _ = writeln!(
        out,
        "\n{}",
        detail.overview.as_deref().unwrap_or("No overview available")
    );

    let cast = detail.top_cast(CAST_LIMIT);
    if !cast.is_empty() {
        out.push_str("\nCast\n");
        for member in cast {
            match &member.character {
                Some(character) => {
                    let _ = writeln!(out, "  {} as {character}", member.name);
                }
                None => {
                    let _ = writeln!(out, "  {}", member.name);
                }
            }
        }
    }

    if let Some(url) = detail.featured_video().and_then(|video| video.embed_url()) {
        let _ = writeln!(out, "\nTrailer: {url}");
    }
    out
}

pub fn favorites(items: &[MovieSummary]) -> String {
    if items.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    let mut out = String::new();
    for movie in items {
        let _ = writeln!(out, "{}", movie_line(movie, true));
    }
    out
}

pub fn trending(entries: &[TrendingEntry]) -> String {
    if entries.is_empty() {
        return "No trending searches yet.\n".to_string();
    }
    let mut out = String::from("Trending Movies\n");
    for (rank, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} ({} searches, top hit: {})",
            rank + 1,
            entry.search_term,
            entry.count,
            entry.title
        );
    }
    out
}

pub fn genres() -> String {
    UiGenre::all()
        .iter()
        .map(|genre| format!("{:>6}  {}\n", genre.id().as_u32(), genre.api_name()))
        .collect()
}

pub fn sorts() -> String {
    SortOption::all()
        .iter()
        .map(|option| format!("{:<22} {}\n", option.as_str(), option.label()))
        .collect()
}
