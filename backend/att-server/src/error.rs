use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] att_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] att_db::DbError),

    #[error("Face service client error: {0}")]
    FaceClient(#[from] att_face::FaceClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics exporter error: {message}")]
    Metrics { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
