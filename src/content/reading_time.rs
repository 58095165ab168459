//! Reading-time estimation

/// Average adult reading speed used for the estimate
const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes for a post body
///
/// Words are whitespace-separated. The result is rounded up and never
/// drops below one minute, even for an empty body.
pub fn estimate(body: &str) -> u32 {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    minutes.max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_one_minute() {
        assert_eq!(estimate(""), 1);
        assert_eq!(estimate("   \n\t  "), 1);
    }

    #[test]
    fn test_single_word_is_one_minute() {
        assert_eq!(estimate("single"), 1);
    }

    #[test]
    fn test_exact_multiple_rounds_to_quotient() {
        let body = "word ".repeat(400);
        assert_eq!(estimate(&body), 2);
    }

    #[test]
    fn test_partial_minute_rounds_up() {
        let body = "word ".repeat(201);
        assert_eq!(estimate(&body), 2);
    }

    #[test]
    fn test_markdown_punctuation_counts_as_words() {
        // The estimate is over raw body text, markup included
        assert_eq!(estimate("# Heading\n\nhello world"), 1);
    }
}
