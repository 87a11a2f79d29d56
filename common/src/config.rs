use std::env;
use std::str::FromStr;

use dotenv::dotenv;
use reqwest::Client;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};

use crate::error::SwapError;

// ─────────────────── Constants ───────────────────

/// Default pool listing endpoint (Raydium bulk liquidity list).
pub const DEFAULT_POOL_LIST_URL: &str =
    "https://api.raydium.io/v2/sdk/liquidity/mainnet.json";

/// Timeout for the pool list download. The bulk list is a large document.
pub const POOL_LIST_TIMEOUT_SECS: u64 = 30;

// ─────────────────── Configuration ───────────────────

/// Process-level configuration, read once at startup from the environment.
pub struct Config {
    pub rpc_url: String,
    pub keypair_path: String,
    pub pool_list_url: String,
    /// How much confirmation evidence submission waits for. `processed`
    /// returns on the network's immediate acknowledgment.
    pub commitment: CommitmentConfig,
    /// Minimum acceptable output amount, in token minor units.
    ///
    /// UNSAFE DEFAULT: zero accepts any output amount, however bad the
    /// execution. Set `MIN_AMOUNT_OUT` to a real floor for live trading.
    pub min_amount_out: u64,
}

/// Load .env and read the process configuration.
///
/// `RPC_URL` is required. The wallet comes from `SECRET_KEY` (base58) or the
/// file at `KEYPAIR_PATH`; see [`crate::wallet::load_keypair`].
pub fn load_config() -> Result<Config, SwapError> {
    dotenv().ok();

    let rpc_url = env::var("RPC_URL")
        .map_err(|_| SwapError::Config("RPC_URL must be set".to_string()))?;
    let keypair_path = env::var("KEYPAIR_PATH").unwrap_or_default();
    let pool_list_url =
        env::var("POOL_LIST_URL").unwrap_or_else(|_| DEFAULT_POOL_LIST_URL.to_string());

    let commitment = match env::var("COMMITMENT") {
        Ok(level) => CommitmentLevel::from_str(&level)
            .map(|commitment| CommitmentConfig { commitment })
            .map_err(|e| SwapError::Config(format!("invalid COMMITMENT {level:?}: {e}")))?,
        Err(_) => CommitmentConfig::confirmed(),
    };

    let min_amount_out = match env::var("MIN_AMOUNT_OUT") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| SwapError::Config(format!("invalid MIN_AMOUNT_OUT {raw:?}: {e}")))?,
        Err(_) => 0,
    };

    Ok(Config {
        rpc_url,
        keypair_path,
        pool_list_url,
        commitment,
        min_amount_out,
    })
}

pub fn rpc_client(cfg: &Config) -> RpcClient {
    RpcClient::new_with_commitment(cfg.rpc_url.clone(), cfg.commitment)
}

pub fn http_client() -> Result<Client, SwapError> {
    Client::builder()
        .build()
        .map_err(|e| SwapError::Config(format!("failed to build HTTP client: {e}")))
}
