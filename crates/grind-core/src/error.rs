use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrindError {
    #[error("not initialized: run 'grind init'")]
    NotInitialized,

    #[error("invalid start date '{0}': expected YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error("roadmap week {0} has an empty task list")]
    EmptyWeek(u32),

    #[error("roadmap maintenance task list is empty")]
    EmptyMaintenanceList,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrindError>;
