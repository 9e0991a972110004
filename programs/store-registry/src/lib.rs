use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod errors;

use instructions::*;
use state::StoreRecord;


declare_id!("EWcHnfy8tEqJZ9TJ9uyyTGYrw68rZEeJE1UYaVLswqTT");

#[program]
pub mod store_registry {
    use super::*;

    /// Create the admin authority and store counter (upgrade authority only)
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Register a new store owned by the signer, returning its id
    pub fn register_store(
        ctx: Context<RegisterStore>,
        name: String,
        address: String,
    ) -> Result<u64> {
        instructions::register_store::handler(ctx, name, address)
    }

    /// Mark a store as verified (admin only)
    pub fn verify_store(ctx: Context<VerifyStore>, store_id: u64) -> Result<()> {
        instructions::verify_store::handler(ctx, store_id)
    }

    /// Fetch a store record, or None if the id was never registered
    pub fn get_store(ctx: Context<StoreLookup>, store_id: u64) -> Result<Option<StoreRecord>> {
        instructions::get_store::handler(ctx, store_id)
    }

    /// Verification flag of a registered store
    pub fn is_store_verified(ctx: Context<StoreLookup>, store_id: u64) -> Result<bool> {
        instructions::is_store_verified::handler(ctx, store_id)
    }

    /// Hand the admin role to another wallet (admin only)
    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::set_admin::handler(ctx, new_admin)
    }

    /// Current admin pubkey
    pub fn current_admin(ctx: Context<CurrentAdmin>) -> Result<Pubkey> {
        instructions::current_admin::handler(ctx)
    }
}
