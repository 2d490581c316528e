//! Small helpers shared by the server modules and their clients.

/// Case-insensitive substring match of `query` against `title`. An empty
/// query matches everything.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}
