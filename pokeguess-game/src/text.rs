/// Upper-case the first character of `s` and leave the rest untouched.
///
/// Multi-codepoint upper-case forms (e.g. `ß` → `SS`) are kept whole.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_lowercase_words() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("grassland"), "Grassland");
    }

    #[test]
    fn leaves_tail_casing_alone() {
        assert_eq!(capitalize("mR. mime"), "MR. mime");
        assert_eq!(capitalize("Bulbasaur"), "Bulbasaur");
    }

    #[test]
    fn empty_and_non_alphabetic_inputs() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("—"), "—");
        assert_eq!(capitalize("1st"), "1st");
    }

    #[test]
    fn handles_non_ascii_first_character() {
        assert_eq!(capitalize("évoli"), "Évoli");
        assert_eq!(capitalize("ßeta"), "SSeta");
    }
}
