use crate::sequencer::{Page, Trigger};

/// Errors produced by the eco-globe core.
///
/// None of these are fatal: callers degrade the presentation (flat globe,
/// ignored click) and keep the session running.
#[derive(thiserror::Error, Debug)]
pub enum EcoError {
    /// The drawing surface for the globe texture could not be created
    #[error("drawing surface unavailable: {0}")]
    ResourceUnavailable(String),
    /// An answer value that the current question does not offer
    #[error("question {question} has no option with value {value}")]
    InvalidAnswer { question: u32, value: u8 },
    /// Result requested before the last question was answered
    #[error("quiz result requested before completion")]
    NotReady,
    /// Answer submitted after the quiz reached its terminal state
    #[error("quiz is already complete")]
    QuizComplete,
    /// Trigger that the current page does not accept (yet)
    #[error("{trigger:?} rejected on {page:?}: {reason}")]
    TransitionRejected {
        page: Page,
        trigger: Trigger,
        reason: &'static str,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config io error: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EcoError>;
