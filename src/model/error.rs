use crate::color::ColorParseError;

/// Reasons an effect model fails validation at the boundary
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown effect kind `{0}`")]
    UnknownKind(String),

    #[error("field `{field}`: {source}")]
    InvalidColor {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },

    #[error("unknown speed `{0}`")]
    UnknownSpeed(String),

    #[error("slot {0} is outside 1..=12")]
    SlotOutOfRange(i64),

    #[error("malformed effect document: {0}")]
    Malformed(#[from] serde_json::Error),
}
