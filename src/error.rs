use thiserror::Error;

/// Everything that can stop the fetch, decode and plot pipeline.
#[derive(Debug, Error)]
pub enum PmError {
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("could not decode the PM json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("sample {index} has an invalid timestamp '{value}': {source}")]
    Timestamp {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("the PM object has no samples to plot")]
    EmptySeries,

    #[error("could not draw the chart: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PmError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PmError::Transport(_) => 2,
            _ => 1,
        }
    }
}
