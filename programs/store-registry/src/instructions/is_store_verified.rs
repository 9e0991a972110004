use anchor_lang::prelude::*;
use crate::state::StoreAccount;
use crate::errors::RegistryError;
use super::StoreLookup;

pub fn handler(ctx: Context<StoreLookup>, _store_id: u64) -> Result<bool> {
    let info = ctx.accounts.store.to_account_info();
    let data = info.try_borrow_data()?;
    verification_status(info.owner, &data)
}

/// Unlike `get_store`, a missing store is an error here
pub(crate) fn verification_status(account_owner: &Pubkey, data: &[u8]) -> Result<bool> {
    let store = StoreAccount::decode(account_owner, data)?
        .ok_or(RegistryError::StoreNotFound)?;
    Ok(store.verified)
}
