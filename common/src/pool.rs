use std::str::FromStr;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use tokio::time::timeout;

use crate::config::POOL_LIST_TIMEOUT_SECS;
use crate::error::SwapError;

// ─────────────────── Listing records ───────────────────

/// One record from the pool listing service.
///
/// Addresses stay as base58 text until a record is actually matched; the bulk
/// list is large and parsing every address up front buys nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolRecord {
    pub id: String,
    pub authority: String,
    #[serde(rename = "baseMint")]
    pub base_mint: String,
    #[serde(rename = "quoteMint")]
    pub quote_mint: String,
    #[serde(rename = "baseVault")]
    pub base_vault: String,
    #[serde(rename = "quoteVault")]
    pub quote_vault: String,
}

/// Which side of a matched pool holds the native mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeSide {
    Base,
    Quote,
}

/// A matched pool with parsed addresses.
///
/// The pair is unordered from the caller's point of view, so the resolver
/// records which side turned out to be native; vault selection depends on it.
#[derive(Debug, Clone)]
pub struct ResolvedPool {
    pub id: Pubkey,
    pub authority: Pubkey,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub native_side: NativeSide,
}

impl ResolvedPool {
    /// Vault on the input (native) side of the swap.
    pub fn source_vault(&self) -> Pubkey {
        match self.native_side {
            NativeSide::Base => self.base_vault,
            NativeSide::Quote => self.quote_vault,
        }
    }

    /// Vault on the output (target token) side of the swap.
    pub fn destination_vault(&self) -> Pubkey {
        match self.native_side {
            NativeSide::Base => self.quote_vault,
            NativeSide::Quote => self.base_vault,
        }
    }
}

// ─────────────────── Resolution ───────────────────

/// Download the full pool list from the listing endpoint.
///
/// Any transport failure, non-success status, or unparseable body counts as
/// the listing service being unavailable.
pub async fn fetch_pool_list(http: &Client, url: &str) -> Result<Vec<PoolRecord>, SwapError> {
    let request = async {
        let resp = http
            .get(url)
            .send()
            .await
            .map_err(|e| SwapError::PoolListUnavailable(format!("request failed: {e}")))?;
        if !resp.status().is_success() {
            return Err(SwapError::PoolListUnavailable(format!(
                "listing service returned {}",
                resp.status()
            )));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| SwapError::PoolListUnavailable(format!("failed to read body: {e}")))?;
        serde_json::from_str(&body)
            .map_err(|e| SwapError::PoolListUnavailable(format!("malformed listing: {e}")))
    };

    timeout(Duration::from_secs(POOL_LIST_TIMEOUT_SECS), request)
        .await
        .map_err(|_| {
            SwapError::PoolListUnavailable(format!(
                "no response within {POOL_LIST_TIMEOUT_SECS}s"
            ))
        })?
}

/// Linear scan for the (native, target) pair, accepting either orientation.
pub fn match_pool<'a>(
    records: &'a [PoolRecord],
    native_mint: &str,
    target_mint: &str,
) -> Option<(&'a PoolRecord, NativeSide)> {
    records.iter().find_map(|record| {
        if record.base_mint == native_mint && record.quote_mint == target_mint {
            Some((record, NativeSide::Base))
        } else if record.base_mint == target_mint && record.quote_mint == native_mint {
            Some((record, NativeSide::Quote))
        } else {
            None
        }
    })
}

fn parse_record(record: &PoolRecord, native_side: NativeSide) -> Result<ResolvedPool, SwapError> {
    let field = |name: &str, value: &str| {
        Pubkey::from_str(value).map_err(|e| {
            SwapError::PoolListUnavailable(format!("listing record has malformed {name}: {e}"))
        })
    };
    Ok(ResolvedPool {
        id: field("id", &record.id)?,
        authority: field("authority", &record.authority)?,
        base_mint: field("baseMint", &record.base_mint)?,
        quote_mint: field("quoteMint", &record.quote_mint)?,
        base_vault: field("baseVault", &record.base_vault)?,
        quote_vault: field("quoteVault", &record.quote_vault)?,
        native_side,
    })
}

/// Fetch the list and match the requested pair. Fetched fresh on every call;
/// the listing is never cached across requests.
pub async fn resolve_pool(
    http: &Client,
    url: &str,
    native_mint: &Pubkey,
    target_mint: &Pubkey,
) -> Result<ResolvedPool, SwapError> {
    let records = fetch_pool_list(http, url).await?;
    debug!("pool list holds {} records", records.len());

    let (record, side) = match_pool(&records, &native_mint.to_string(), &target_mint.to_string())
        .ok_or_else(|| SwapError::PoolNotFound {
            base: native_mint.to_string(),
            quote: target_mint.to_string(),
        })?;
    parse_record(record, side)
}
