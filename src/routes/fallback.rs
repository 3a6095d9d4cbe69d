use crate::error::AppError;

/// Handler for paths no route matches
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Handler for known paths hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
