use std::fmt::Formatter;

#[derive(Debug)]
pub enum FetchError {
    Transport(Box<reqwest::Error>),
    Decode(Box<serde_json::Error>),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            FetchError::Transport(inner) => {
                format!("Transport: {}", inner)
            },
            FetchError::Decode(inner) => {
                format!("Invalid response body: {}", inner)
            },
        };
        write!(f, "Fetch error: {}", msg)
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(error))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode(Box::new(error))
    }
}
