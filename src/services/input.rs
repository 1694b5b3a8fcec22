//! Character ID input parsing

use crate::types::{Result, ZkillError};

/// Parse comma-separated decimal character IDs (e.g. "93382481, 2113893486").
///
/// Empty or whitespace-only input is an empty list. Any other token that is
/// not a decimal integer, including an empty one between commas, is rejected.
pub fn parse_character_ids(text: &str) -> Result<Vec<u64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u64>()
                .map_err(|_| ZkillError::InvalidCharacterId(token.to_string()))
        })
        .collect()
}

/// Parse several arguments, each of which may itself be comma-separated
pub fn parse_character_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<u64>> {
    let mut ids = Vec::new();
    for arg in args {
        ids.extend(parse_character_ids(arg.as_ref())?);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id() {
        assert_eq!(parse_character_ids("93382481").unwrap(), vec![93382481]);
    }

    #[test]
    fn test_multiple_ids_with_whitespace() {
        assert_eq!(
            parse_character_ids(" 93382481 ,2113893486,  7 ").unwrap(),
            vec![93382481, 2113893486, 7]
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        assert_eq!(parse_character_ids("3,1,3").unwrap(), vec![3, 1, 3]);
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(parse_character_ids("").unwrap().is_empty());
        assert!(parse_character_ids("   ").unwrap().is_empty());
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let err = parse_character_ids("123, abc").unwrap_err();
        assert!(matches!(err, ZkillError::InvalidCharacterId(ref t) if t == "abc"));
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(parse_character_ids("1,,2").is_err());
        assert!(parse_character_ids("1,").is_err());
    }

    #[test]
    fn test_negative_and_fractional_rejected() {
        assert!(parse_character_ids("-5").is_err());
        assert!(parse_character_ids("1.5").is_err());
    }

    #[test]
    fn test_character_args_flatten() {
        let args = vec!["1,2".to_string(), "3".to_string()];
        assert_eq!(parse_character_args(&args).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_character_args_empty() {
        let args: Vec<String> = Vec::new();
        assert!(parse_character_args(&args).unwrap().is_empty());
    }
}
