use crate::luhn;
use crate::models::{CardNumber, ValidateRequest, ValidateResponse};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid JSON request: {0}")]
    MalformedRequest(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::MalformedRequest(err.to_string())
    }
}

pub struct CardService;

impl CardService {
    /// Parses a raw JSON body into a request. Content type is not checked.
    pub fn parse_request(body: &[u8]) -> Result<ValidateRequest, CardError> {
        Ok(serde_json::from_slice(body)?)
    }

    #[instrument(skip_all, fields(len = req.credit_card_number.len()))]
    pub fn validate(req: &ValidateRequest) -> Result<ValidateResponse, CardError> {
        let number = CardNumber::new(&req.credit_card_number).map_err(CardError::InvalidInput)?;
        let is_valid = luhn::is_valid(&number);

        tracing::debug!(is_valid, "card number checked");
        Ok(ValidateResponse { is_valid })
    }
}
