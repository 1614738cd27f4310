//! Normalisation shared by optional free-text fields.

/// Optional text exceeded its length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TextTooLong;

/// Trim `raw`, mapping blank text to `None`.
pub(crate) fn optional_text(
    raw: Option<String>,
    max: usize,
) -> Result<Option<String>, TextTooLong> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max {
        return Err(TextTooLong);
    }
    Ok(Some(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Ok(None))]
    #[case(Some("  "), Ok(None))]
    #[case(Some(" rack "), Ok(Some("rack")))]
    #[case(Some("abcdef"), Err(TextTooLong))]
    fn optional_text_trims_and_bounds(
        #[case] raw: Option<&str>,
        #[case] expected: Result<Option<&str>, TextTooLong>,
    ) {
        let result = optional_text(raw.map(str::to_owned), 5);
        assert_eq!(result.as_ref().map(Option::as_deref), expected.as_ref().copied());
    }
}
