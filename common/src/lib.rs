// common/src/lib.rs
//! Single-swap transaction pipeline.
//!
//! One `buy` request flows strictly forward through four stages: resolve the
//! liquidity pool for the (SOL, token) pair from the bulk listing endpoint,
//! encode the swap instruction in the AMM program's binary layout, compile
//! and sign a transaction against a fresh blockhash, and submit it over RPC.
//! Any stage failure aborts the run and surfaces as one [`SwapError`] kind.

pub mod config;
pub mod error;
pub mod instruction;
pub mod pipeline;
pub mod pool;
pub mod submit;
pub mod transaction;
pub mod wallet;

pub use config::{load_config, Config};
pub use error::SwapError;
pub use pipeline::SwapPipeline;
