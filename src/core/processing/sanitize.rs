/// Keep ASCII alphanumerics, spaces, and the four operator symbols.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|&c| is_permitted(c)).collect()
}

fn is_permitted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '+' | '-' | '*' | '/')
}
