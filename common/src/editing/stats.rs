/// Live counters shown under a rich-text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    pub chars_no_whitespace: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            chars_no_whitespace: text.chars().filter(|c| !c.is_whitespace()).count(),
            words: text.split_whitespace().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn counts_chars_and_words() {
        assert_eq!(
            TextStats::of("  Hej på\tdig \n"),
            TextStats {
                chars: 14,
                chars_no_whitespace: 8,
                words: 3
            }
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(TextStats::of(" \n "), TextStats { chars: 3, chars_no_whitespace: 0, words: 0 });
    }
}
