use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use thiserror::Error;

/// Methods the company resources can be requested with
pub const ALLOWED_METHODS: &str = "GET";

#[derive(Error, Debug, PartialEq)]
pub enum CompaniesError {
    #[error("Internal server error")]
    InternalError,
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
    #[error("Method `{0}` is not allowed. Allowed methods: {allowed}", allowed = ALLOWED_METHODS)]
    MethodNotAllowed(String),
}

impl actix_web::error::ResponseError for CompaniesError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        res.insert_header((header::CONTENT_TYPE, "text/plain; charset=utf-8"));
        if let Self::MethodNotAllowed(_) = self {
            res.insert_header((header::ALLOW, ALLOWED_METHODS));
        }
        res.body(self.to_string())
    }
}
