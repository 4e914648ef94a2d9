use crate::errors;

// Integer parsing with the leniency HTTP clients of this API rely on:
// surrounding whitespace is skipped, one optional sign is accepted and parsing
// stops at the first non-digit. At least one digit is required.
// Values that do not fit in an i64 are rejected rather than clamped.
pub fn parse_integer_param(value: &str) -> errors::Result<i64> {
    let trimmed = value.trim();

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(|b| b.is_ascii_digit()).count();

    if digit_count == 0 {
        return Err(errors::Errors::new(errors::ErrorCodes::ValidationError)
            .with_message(format!("'{}' is not a number", value)));
    }

    let magnitude = digits[..digit_count]
        .bytes()
        .try_fold(0i64, |acc, b| {
            acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
        })
        .ok_or_else(|| {
            errors::Errors::new(errors::ErrorCodes::ValidationError)
                .with_message(format!("'{}' is out of range", value))
        })?;

    Ok(if negative { -magnitude } else { magnitude })
}

pub fn validate_start(start: i64) -> errors::Result<usize> {
    if start < 0 {
        return Err(errors::Errors::new(errors::ErrorCodes::ValidationError)
            .with_message(format!("start must be >= 0, got {}", start)));
    }

    Ok(usize::try_from(start).unwrap_or(usize::MAX))
}

pub fn validate_limit(limit: i64) -> errors::Result<usize> {
    if limit <= 0 {
        return Err(errors::Errors::new(errors::ErrorCodes::ValidationError)
            .with_message(format!("limit must be > 0, got {}", limit)));
    }

    Ok(usize::try_from(limit).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_param() {
        assert_eq!(parse_integer_param("0").unwrap(), 0);
        assert_eq!(parse_integer_param("25").unwrap(), 25);
        assert_eq!(parse_integer_param(" 7 ").unwrap(), 7);
        assert_eq!(parse_integer_param("+5").unwrap(), 5);
        assert_eq!(parse_integer_param("-1").unwrap(), -1);
        assert_eq!(parse_integer_param("10abc").unwrap(), 10);
        assert_eq!(parse_integer_param("1.5").unwrap(), 1);
        assert_eq!(
            parse_integer_param("9223372036854775807").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_integer_param_rejects_out_of_range() {
        for input in ["9223372036854775808", "99999999999999999999", "-99999999999999999999"] {
            let error = parse_integer_param(input).unwrap_err();
            assert_eq!(error.code, errors::ErrorCodes::ValidationError, "{input:?}");
        }
    }

    #[test]
    fn test_parse_integer_param_rejects_non_numeric() {
        for input in ["", "   ", "abc", "-", "+", "x10", "--1"] {
            let error = parse_integer_param(input).unwrap_err();
            assert_eq!(error.code, errors::ErrorCodes::ValidationError, "{input:?}");
        }
    }

    #[test]
    fn test_validate_start() {
        assert_eq!(validate_start(0).unwrap(), 0);
        assert_eq!(validate_start(30).unwrap(), 30);
        assert!(validate_start(-1).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(1).unwrap(), 1);
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(-5).is_err());
    }
}
