#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}
