//! Static resources of the web front end.

/// The single page: input card, result card, scoring criteria.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Stylesheet referenced by [`INDEX_HTML`] as `/static/style.css`.
pub const STYLE_CSS: &str = include_str!("../assets/style.css");
