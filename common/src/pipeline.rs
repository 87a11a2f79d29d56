use log::{debug, info};
use reqwest::Client;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;

use crate::config::{self, Config};
use crate::error::SwapError;
use crate::instruction::{build_swap_instruction, sol_to_lamports_checked, SwapOrder};
use crate::pool::resolve_pool;
use crate::submit::submit;
use crate::transaction::assemble;
use crate::wallet;

// ─────────────────── Input parsing ───────────────────

/// Parse a base58 token address. It must decode to exactly 32 bytes.
pub fn parse_token_address(text: &str) -> Result<Pubkey, SwapError> {
    let bytes = bs58::decode(text.trim())
        .into_vec()
        .map_err(|e| SwapError::InvalidInput(format!("token address is not valid base58: {e}")))?;
    let raw: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
        SwapError::InvalidInput(format!(
            "token address decodes to {} bytes, expected 32",
            bytes.len()
        ))
    })?;
    Ok(Pubkey::new_from_array(raw))
}

/// Parse the decimal SOL amount. Must be a positive finite number.
pub fn parse_native_amount(text: &str) -> Result<f64, SwapError> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| SwapError::InvalidInput(format!("amount {text:?} is not a decimal number")))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(SwapError::InvalidInput(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(amount)
}

// ─────────────────── Pipeline (resolve -> encode -> assemble -> submit) ───────────────────

/// Process-scoped resources for pipeline runs: one HTTP client, one RPC
/// client, one signing keypair, all injected here once at startup.
///
/// `buy` owns no state beyond its locals and the keypair is read-only after
/// construction, so independent runs may execute concurrently on a shared
/// `SwapPipeline`.
pub struct SwapPipeline {
    http: Client,
    rpc: RpcClient,
    wallet: Keypair,
    config: Config,
}

impl SwapPipeline {
    pub fn new(config: Config) -> Result<Self, SwapError> {
        let wallet = wallet::load_keypair(&config.keypair_path)?;
        Ok(Self {
            http: config::http_client()?,
            rpc: config::rpc_client(&config),
            wallet,
            config,
        })
    }

    /// Run the whole buy pipeline once.
    ///
    /// Input validation happens before any network call; after that the
    /// stages run strictly forward and the first failure aborts the run.
    pub async fn buy(
        &self,
        token_address: &str,
        amount_native: &str,
    ) -> Result<Signature, SwapError> {
        let target_mint = parse_token_address(token_address)?;
        let amount_sol = parse_native_amount(amount_native)?;
        let amount_in = sol_to_lamports_checked(amount_sol)?;
        let native_mint = spl_token::native_mint::id();
        debug!("buying {target_mint} with {amount_in} lamports");

        let pool = resolve_pool(
            &self.http,
            &self.config.pool_list_url,
            &native_mint,
            &target_mint,
        )
        .await?;
        info!("matched pool {} for {target_mint}", pool.id);

        let order = SwapOrder {
            input_mint: native_mint,
            output_mint: target_mint,
            amount_in,
            min_amount_out: self.config.min_amount_out,
        };
        let instruction = build_swap_instruction(&order, &pool, &self.wallet.pubkey());

        // Fetch the blockhash only now: it expires within a narrow window
        // that has to cover the submission below, nothing more.
        let recent_blockhash = self
            .rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| SwapError::BlockhashUnavailable(e.to_string()))?;
        let tx = assemble(&[instruction], &self.wallet, recent_blockhash)?;

        let signature = submit(&self.rpc, &tx, self.config.commitment).await?;
        info!("swap submitted: {signature}");
        Ok(signature)
    }
}
