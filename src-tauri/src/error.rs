use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillPathError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown preference: {0}")]
    UnknownPreference(String),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidPreference { key: String, value: String },
}

impl From<SkillPathError> for String {
    fn from(err: SkillPathError) -> Self {
        err.to_string()
    }
}
