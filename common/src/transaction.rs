use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::{v0::Message, VersionedMessage};
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::VersionedTransaction;

use crate::error::SwapError;

/// Compile the instructions into a v0 message and sign it with the payer.
///
/// The caller must fetch `recent_blockhash` immediately before calling this:
/// the network rejects envelopes whose blockhash has aged out, and nothing
/// here can detect that locally. Inputs are otherwise trusted as-is.
pub fn assemble(
    instructions: &[Instruction],
    payer: &Keypair,
    recent_blockhash: Hash,
) -> Result<VersionedTransaction, SwapError> {
    let message = Message::try_compile(&payer.pubkey(), instructions, &[], recent_blockhash)
        .map_err(|e| SwapError::SigningFailure(format!("message compile failed: {e}")))?;
    VersionedTransaction::try_new(VersionedMessage::V0(message), &[payer])
        .map_err(|e| SwapError::SigningFailure(e.to_string()))
}
