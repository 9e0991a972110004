use anchor_lang::prelude::*;
use crate::state::{RegistryState, StoreAccount};
use crate::errors::RegistryError;

#[derive(Accounts)]
pub struct RegisterStore<'info> {
    /// Registering wallet, recorded as the store owner
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// Store slot for the next id. `init_if_needed` so an occupied slot
    /// surfaces as `StoreAlreadyExists` instead of a generic init failure.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + StoreAccount::INIT_SPACE,
        seeds = [
            StoreAccount::SEED_PREFIX,
            registry.store_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub store: Account<'info, StoreAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterStore>, name: String, address: String) -> Result<u64> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();
    let bump = ctx.bumps.store;

    register(
        &mut ctx.accounts.registry,
        &mut ctx.accounts.store,
        owner,
        name,
        address,
        clock.unix_timestamp,
        bump,
    )
}

/// Write a new store at the registry's next id and advance the counter.
/// Every check runs before the first write.
pub(crate) fn register(
    registry: &mut RegistryState,
    store: &mut StoreAccount,
    owner: Pubkey,
    name: String,
    address: String,
    now: i64,
    bump: u8,
) -> Result<u64> {
    StoreAccount::check_capacity(&name, &address)?;

    let store_id = registry.next_store_id();
    require!(!store.is_registered(), RegistryError::StoreAlreadyExists);

    registry.record_registration()?;
    store.init(store_id, owner, name, address, now, bump);

    msg!(
        "Store registered: id={}, name={}, owner={}",
        store_id,
        store.name,
        owner
    );

    Ok(store_id)
}
