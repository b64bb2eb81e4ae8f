/// Greedy word wrap. Words longer than `width` land on their own line
/// unbroken.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Caps `s` at `max_len` characters, replacing the tail with an ellipsis
/// when it does not fit.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    if max_len == 0 {
        return String::new();
    }

    let kept: String = s.chars().take(max_len - 1).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("formula tally", 20), vec!["formula tally"]);
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(
            wrap("the listing did not fit", 11),
            vec!["the listing", "did not fit"]
        );
    }

    #[test]
    fn wrap_empty_input_gives_one_blank_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("butane", 10), "butane");
        assert_eq!(truncate("butane", 6), "butane");
    }

    #[test]
    fn truncate_replaces_tail_with_ellipsis() {
        assert_eq!(truncate("isobutane", 5), "isob…");
        assert_eq!(truncate("isobutane", 1), "…");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("метан этан", 6), "метан…");
    }
}
