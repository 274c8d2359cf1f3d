//! Request body extraction

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body whose parse failures are reported as validation errors
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
