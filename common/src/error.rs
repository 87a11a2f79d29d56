use thiserror::Error;

/// Error kinds for a single pipeline run.
///
/// Every stage fails fast and maps onto exactly one variant; nothing is
/// retried anywhere. The `Submission` variant carries the RPC error text
/// untouched so the operator sees what the network actually said.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Invalid input: {0}")] InvalidInput(String),

    #[error("Pool list unavailable: {0}")] PoolListUnavailable(String),

    #[error("No pool found for pair {base}/{quote}")] PoolNotFound {
        base: String,
        quote: String,
    },

    #[error("Amount overflow: {0}")] AmountOverflow(String),

    #[error("Blockhash unavailable: {0}")] BlockhashUnavailable(String),

    #[error("Signing failed: {0}")] SigningFailure(String),

    #[error("Submission failed: {0}")] Submission(String),

    #[error("Config error: {0}")] Config(String),
}
