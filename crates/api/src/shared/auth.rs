use crate::{error::TooFlowError, shared::guard::Guard};
use actix_web::HttpRequest;
use tooflow_domain::ID;

/// Header carrying the id of the user the managed backend authenticated
pub const USER_HEADER: &str = "tooflow-user";

/// Resolves the `User` the request is made on behalf of
pub fn protect_user_route(req: &HttpRequest) -> Result<ID, TooFlowError> {
    match req.headers().get(USER_HEADER) {
        Some(user_id) => match user_id.to_str() {
            Ok(user_id) => Guard::against_malformed_id(user_id).map_err(|_| {
                TooFlowError::Unauthorized(format!(
                    "Malformed {} header provided: {}",
                    USER_HEADER, user_id
                ))
            }),
            Err(_) => Err(TooFlowError::Unauthorized(format!(
                "Malformed {} header provided",
                USER_HEADER
            ))),
        },
        None => Err(TooFlowError::Unauthorized(format!(
            "Unable to find the user in the {} header",
            USER_HEADER
        ))),
    }
}
