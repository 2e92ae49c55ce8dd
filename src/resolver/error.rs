#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No value obtained from the environment, the terminal, or stdin.
    #[error("secret is not set")]
    Unresolved,

    #[error("failed to read secret from terminal: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("failed to read secret from stdin: {0}")]
    Stdin(#[from] std::io::Error),
}
