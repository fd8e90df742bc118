use thiserror::Error;

pub type StoryResult<T> = Result<T, StoryError>;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("step index {index} out of range for storyboard of {len} steps")]
    StepOutOfRange { index: usize, len: usize },

    #[error("element {element} has no animatable channel `{channel}`")]
    ChannelMismatch { element: u32, channel: &'static str },

    #[error("element {element} does not exist in the scene")]
    UnknownElement { element: u32 },

    #[error("table `{table}` is missing required column `{column}`")]
    MissingColumn { table: String, column: String },

    #[error("failed to read dataset `{path}`: {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
