//! Class list composition.

/// Join class lists into one `class` attribute value.
///
/// Empty parts are skipped and repeated tokens keep their first position.
pub fn cn<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens: Vec<&str> = Vec::new();
    for token in parts.into_iter().flat_map(str::split_whitespace) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}
