use std::path::PathBuf;

/// Where the static airport data lives
#[derive(Debug, Clone)]
pub struct AirportModelConfig {
    /// JSON file with `pois`, `zones` and `navGraph`
    pub data_path: PathBuf,
}

impl AirportModelConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }
}
