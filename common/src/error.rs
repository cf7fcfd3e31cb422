use thiserror::Error;

/// Failures of the collaborators around the report parser.
///
/// The parser itself never fails; everything here happens before it runs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scanner '{0}' was not found, install nmap (e.g. `brew install nmap` or `apt install nmap`) or pass --nmap <PATH>")]
    ScannerNotFound(String),

    #[error("scanner exited with {status}: {stderr}")]
    ScannerFailed { status: String, stderr: String },

    #[error("scanner produced no output")]
    EmptyReport,

    #[error("scanner output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),

    #[error("no interfaces available for LAN discovery")]
    NoLanInterface,

    #[error("interface '{0}' has no private IPv4 network")]
    NoLanNetwork(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
