use log::{debug, warn};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;

use crate::error::SwapError;

/// Send the signed envelope to the network.
///
/// `processed` returns on the network's immediate acknowledgment; stronger
/// levels wait for confirmation evidence at the client's configured
/// commitment. One attempt only, and resubmission is not idempotent: whether
/// an already-accepted envelope can land twice is bounded by blockhash
/// expiry, not by anything this function does.
pub async fn submit(
    rpc: &RpcClient,
    tx: &VersionedTransaction,
    commitment: CommitmentConfig,
) -> Result<Signature, SwapError> {
    if let Ok(wire) = bincode::serialize(tx) {
        debug!("submitting transaction, {} bytes on the wire", wire.len());
        if wire.len() > PACKET_DATA_SIZE {
            warn!(
                "serialized transaction is {} bytes, above the {PACKET_DATA_SIZE} byte packet limit",
                wire.len()
            );
        }
    }

    let result = if commitment.commitment == CommitmentLevel::Processed {
        rpc.send_transaction(tx).await
    } else {
        rpc.send_and_confirm_transaction(tx).await
    };
    result.map_err(|e| SwapError::Submission(e.to_string()))
}
