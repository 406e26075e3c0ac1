use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// SECURITY: Display messages are sanitized and safe for logs/console output.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Log file could not be created. Check LOG_FILE.")]
    LogFile(#[source] std::io::Error),

    #[error("TCP bind failed. Check BIND_ADDR.")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
