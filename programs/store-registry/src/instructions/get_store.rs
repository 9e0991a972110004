use anchor_lang::prelude::*;
use crate::state::{StoreAccount, StoreRecord};

/// Read-only access to a single store slot
#[derive(Accounts)]
#[instruction(store_id: u64)]
pub struct StoreLookup<'info> {
    /// CHECK: only the PDA address is checked; an empty slot is a valid answer
    #[account(
        seeds = [StoreAccount::SEED_PREFIX, store_id.to_le_bytes().as_ref()],
        bump
    )]
    pub store: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<StoreLookup>, _store_id: u64) -> Result<Option<StoreRecord>> {
    let info = ctx.accounts.store.to_account_info();
    let data = info.try_borrow_data()?;
    lookup(info.owner, &data)
}

/// Absence is `Ok(None)`, not an error
pub(crate) fn lookup(account_owner: &Pubkey, data: &[u8]) -> Result<Option<StoreRecord>> {
    Ok(StoreAccount::decode(account_owner, data)?.map(|store| store.record()))
}
