use crate::error::TooFlowError;
use tooflow_domain::ID;

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: &str) -> Result<ID, TooFlowError> {
        val.parse()
            .map_err(|e| TooFlowError::BadClientData(format!("{}", e)))
    }

    pub fn against_missing<T>(val: Option<T>, field: &str) -> Result<T, TooFlowError> {
        val.ok_or_else(|| {
            TooFlowError::BadClientData(format!("Missing required field: `{}`", field))
        })
    }
}
