use validator::Validate;

use crate::errors::ApiError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|err| ApiError::BadRequest(err.to_string()))
}
