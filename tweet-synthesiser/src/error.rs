use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error(
        "cannot sample {requested} timestamps without replacement from a candidate pool of {available}"
    )]
    InsufficientPool { requested: usize, available: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("hour {0} is outside of the range 0-23")]
    HourOutOfRange(u32),
    #[error("the window {name:?} starts at hour {first_hour} which is after its last hour {last_hour}")]
    Inverted {
        name: String,
        first_hour: u32,
        last_hour: u32,
    },
}
