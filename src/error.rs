use std::io;

/// Failures while resolving the input file, all terminal before counting
/// starts. Once counting begins no error path exists.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{path}: file does not exist")]
    NotFound { path: String },

    #[error("{path}: cannot open file: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}
