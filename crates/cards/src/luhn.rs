//! Luhn checksum over a normalized card number.

use crate::models::CardNumber;

/// Returns true when the Luhn sum of `number` is divisible by 10.
///
/// Every second digit counting leftward from the second-to-last is doubled,
/// with 9 subtracted when the doubled value exceeds 9. An empty string sums
/// to zero and is therefore valid.
pub fn is_valid(number: &CardNumber) -> bool {
    let sum: u32 = number
        .as_str()
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(digits: &str) -> bool {
        is_valid(&CardNumber::new(digits).unwrap())
    }

    #[test]
    fn test_known_valid_numbers() {
        assert!(check("4532015112830366"));
        assert!(check("1234567812345670"));
        assert!(check("79927398713"));
        assert!(check("378282246310005"));
    }

    #[test]
    fn test_known_invalid_numbers() {
        assert!(!check("1234567890123456"));
        assert!(!check("4532015112830367"));
        assert!(!check("79927398710"));
    }

    #[test]
    fn test_single_digits() {
        assert!(check("0"));
        for d in 1..=9 {
            assert!(!check(&d.to_string()), "{d} should fail");
        }
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(check(""));
    }

    #[test]
    fn test_doubling_wraps_above_nine() {
        // 5 doubles to 10 -> 1, plus check digit 9
        assert!(check("59"));
        // 9 doubles to 18 -> 9, plus check digit 1
        assert!(check("91"));
        assert!(!check("95"));
    }

    #[test]
    fn test_formatting_never_reaches_checksum() {
        // spaces are stripped before the digit arithmetic runs
        assert!(check(" "));
        assert!(check("7992 7398 713"));
        assert!(CardNumber::new("/").is_err());
    }

    #[test]
    fn test_leading_zeros_do_not_change_result() {
        assert_eq!(check("79927398713"), check("0079927398713"));
        assert_eq!(check("1234567890123456"), check("001234567890123456"));
    }
}
