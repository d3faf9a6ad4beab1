use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneFinderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Diagnostics error: {0}")]
    Diagnostics(String),
}

impl From<SceneFinderError> for String {
    fn from(err: SceneFinderError) -> Self {
        err.to_string()
    }
}
