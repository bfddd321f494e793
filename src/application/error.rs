#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    UnsupportedMediaType(String),
    InternalError(String),
}
