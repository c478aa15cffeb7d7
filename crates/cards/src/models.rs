use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

const CREDIT_CARD_NUMBER: &str = "credit_card_number";

/// Decoded leniently: the key matches case-insensitively, the last occurrence
/// wins, `null` leaves the current value alone, and unknown keys are skipped.
/// A missing field or a `null` body reads as an empty number.
#[derive(Debug, Default, Serialize, PartialEq, Clone)]
pub struct ValidateRequest {
    pub credit_card_number: String,
}

struct ValidateRequestVisitor;

impl<'de> Visitor<'de> for ValidateRequestVisitor {
    type Value = ValidateRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with a credit_card_number string")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = ValidateRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(CREDIT_CARD_NUMBER) {
                if let Some(number) = map.next_value::<Option<String>>()? {
                    req.credit_card_number = number;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(req)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ValidateRequest::default())
    }
}

impl<'de> Deserialize<'de> for ValidateRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValidateRequestVisitor)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct ValidateResponse {
    pub is_valid: bool,
}

/// A card number with formatting removed. Every character is an ASCII digit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CardNumber(String);

impl CardNumber {
    /// Strips spaces and hyphens, then rejects anything that is not a digit.
    pub fn new(raw: &str) -> Result<Self, String> {
        let digits: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(format!("Card number contains non-digit character {bad:?}"));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
