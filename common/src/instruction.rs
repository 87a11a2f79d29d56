use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;

use crate::error::SwapError;
use crate::pool::ResolvedPool;

// ─────────────────── Program constants ───────────────────

/// AMM program the swap instruction targets.
pub const AMM_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");

/// Leading byte selecting the swap operation among the program's
/// instructions. The layout below is not self-describing; it must match the
/// deployed program's ABI byte for byte, and the program (not this codec) is
/// what rejects a mismatch. Validate both against the published interface
/// before pointing this at real funds.
pub const SWAP_TAG: u8 = 9;

/// Payload size: tag + amount_in + min_amount_out.
pub const SWAP_DATA_LEN: usize = 1 + 8 + 8;

// ─────────────────── Orders ───────────────────

/// A buy order: spend `amount_in` of the input mint, accept no less than
/// `min_amount_out` of the output mint. Amounts are in minor units.
#[derive(Debug, Clone)]
pub struct SwapOrder {
    pub input_mint: Pubkey,
    pub output_mint: Pubkey,
    pub amount_in: u64,
    pub min_amount_out: u64,
}

/// Convert a decimal SOL amount to lamports, rejecting values the u64 wire
/// field cannot carry.
pub fn sol_to_lamports_checked(amount_sol: f64) -> Result<u64, SwapError> {
    let lamports = (amount_sol * LAMPORTS_PER_SOL as f64).round();
    if !lamports.is_finite() || lamports < 0.0 || lamports >= u64::MAX as f64 {
        return Err(SwapError::AmountOverflow(format!(
            "{amount_sol} SOL does not fit the u64 lamport field"
        )));
    }
    Ok(lamports as u64)
}

// ─────────────────── Encoding ───────────────────

/// Build the swap call against the matched pool.
///
/// The account order is positional ABI: the program indexes accounts by slot,
/// not by name, so this sequence must never be reordered. No address-level
/// validation happens here; whatever the listing handed over goes on the wire
/// and the program enforces correctness.
pub fn build_swap_instruction(
    order: &SwapOrder,
    pool: &ResolvedPool,
    payer: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(pool.id, false),                  // amm pool state
        AccountMeta::new_readonly(pool.authority, false),  // amm authority
        AccountMeta::new(*payer, true),                    // user transfer authority
        AccountMeta::new(pool.source_vault(), false),      // input-side vault
        AccountMeta::new(pool.destination_vault(), false), // output-side vault
        AccountMeta::new(pool.base_vault, false),          // coin vault
        AccountMeta::new(pool.quote_vault, false),         // pc vault
        AccountMeta::new_readonly(spl_token::id(), false), // token program
    ];

    let mut data = Vec::with_capacity(SWAP_DATA_LEN);
    data.push(SWAP_TAG);
    data.extend_from_slice(&order.amount_in.to_le_bytes());
    data.extend_from_slice(&order.min_amount_out.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::NativeSide;

    fn sample_pool() -> ResolvedPool {
        ResolvedPool {
            id: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            base_mint: spl_token::native_mint::id(),
            quote_mint: Pubkey::new_unique(),
            base_vault: Pubkey::new_unique(),
            quote_vault: Pubkey::new_unique(),
            native_side: NativeSide::Base,
        }
    }

    fn sample_order(pool: &ResolvedPool, amount_in: u64, min_amount_out: u64) -> SwapOrder {
        SwapOrder {
            input_mint: pool.base_mint,
            output_mint: pool.quote_mint,
            amount_in,
            min_amount_out,
        }
    }

    #[test]
    fn tenth_of_sol_is_one_hundred_million_lamports() {
        assert_eq!(sol_to_lamports_checked(0.1).unwrap(), 100_000_000);
    }

    #[test]
    fn conversion_rounds_to_the_nearest_lamport() {
        // 0.29 * 1e9 lands just below the integer in f64.
        assert_eq!(sol_to_lamports_checked(0.29).unwrap(), 290_000_000);
        assert_eq!(sol_to_lamports_checked(1.0).unwrap(), LAMPORTS_PER_SOL);
    }

    #[test]
    fn oversized_amounts_overflow() {
        // 2e10 SOL is 2e19 lamports, past u64::MAX.
        assert!(matches!(
            sol_to_lamports_checked(2e10),
            Err(SwapError::AmountOverflow(_))
        ));
        assert!(matches!(
            sol_to_lamports_checked(f64::INFINITY),
            Err(SwapError::AmountOverflow(_))
        ));
    }

    #[test]
    fn payload_is_tag_then_two_le_u64s() {
        let pool = sample_pool();
        let order = sample_order(&pool, 100_000_000, 42);
        let ix = build_swap_instruction(&order, &pool, &Pubkey::new_unique());

        assert_eq!(ix.data.len(), SWAP_DATA_LEN);
        assert_eq!(ix.data[0], SWAP_TAG);
        assert_eq!(u64::from_le_bytes(ix.data[1..9].try_into().unwrap()), 100_000_000);
        assert_eq!(u64::from_le_bytes(ix.data[9..17].try_into().unwrap()), 42);
    }

    #[test]
    fn account_order_matches_the_program_abi() {
        let pool = sample_pool();
        let order = sample_order(&pool, 1, 0);
        let payer = Pubkey::new_unique();
        let ix = build_swap_instruction(&order, &pool, &payer);

        assert_eq!(ix.program_id, AMM_PROGRAM_ID);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|a| a.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                pool.id,
                pool.authority,
                payer,
                pool.base_vault,  // native on base side, so source = base vault
                pool.quote_vault, // destination = quote vault
                pool.base_vault,
                pool.quote_vault,
                spl_token::id(),
            ]
        );

        // The payer is the only signer; authority and token program stay readonly.
        let signers: Vec<bool> = ix.accounts.iter().map(|a| a.is_signer).collect();
        assert_eq!(signers, vec![false, false, true, false, false, false, false, false]);
        assert!(!ix.accounts[1].is_writable);
        assert!(!ix.accounts[7].is_writable);
    }

    #[test]
    fn vaults_swap_position_when_native_is_the_quote_side() {
        let mut pool = sample_pool();
        pool.native_side = NativeSide::Quote;
        let order = sample_order(&pool, 1, 0);
        let ix = build_swap_instruction(&order, &pool, &Pubkey::new_unique());

        assert_eq!(ix.accounts[3].pubkey, pool.quote_vault);
        assert_eq!(ix.accounts[4].pubkey, pool.base_vault);
        // Pool-ordered vault slots are unaffected by swap direction.
        assert_eq!(ix.accounts[5].pubkey, pool.base_vault);
        assert_eq!(ix.accounts[6].pubkey, pool.quote_vault);
    }
}
