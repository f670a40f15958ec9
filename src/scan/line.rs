//! Cleaning of raw DNSBL lines into entry tokens.

/// The significant token of a DNSBL line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEntry<'a> {
    /// A blocklisted address or range.
    Block(&'a str),
    /// An exclusion (`!`-prefixed), with the `!` removed.
    Exclude(&'a str),
}

impl<'a> LineEntry<'a> {
    /// The address text of the entry.
    #[must_use]
    pub const fn token(&self) -> &'a str {
        match *self {
            Self::Block(token) | Self::Exclude(token) => token,
        }
    }
}

/// Extracts the entry token from one line of a DNSBL file.
///
/// Returns `None` for blank, comment-only, variable (`$`) and
/// description (`:`) lines. The token is not validated as an address.
///
/// # Examples
///
/// ```
/// use dnsbl_scanner::scan::{LineEntry, parse_line};
///
/// assert_eq!(
///     parse_line("  10.0.0.0/8  spam source # listed 2024"),
///     Some(LineEntry::Block("10.0.0.0/8"))
/// );
/// assert_eq!(parse_line("!10.1.0.0/16"), Some(LineEntry::Exclude("10.1.0.0/16")));
/// assert_eq!(parse_line("$TTL 3600"), None);
/// assert_eq!(parse_line("# comment"), None);
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<LineEntry<'_>> {
    let content = line
        .split_once('#')
        .map_or(line, |(content, _comment)| content)
        .trim();

    if content.is_empty() || content.starts_with('$') || content.starts_with(':') {
        return None;
    }

    let token = content.split_whitespace().next()?;

    Some(match token.strip_prefix('!') {
        Some(excluded) => LineEntry::Exclude(excluded),
        None => LineEntry::Block(token),
    })
}
