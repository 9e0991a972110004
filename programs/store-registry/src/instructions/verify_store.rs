use anchor_lang::prelude::*;
use crate::state::{AdminAuthority, StoreAccount};
use crate::errors::RegistryError;

#[derive(Accounts)]
#[instruction(store_id: u64)]
pub struct VerifyStore<'info> {
    /// Must be the current admin
    pub caller: Signer<'info>,

    #[account(
        seeds = [AdminAuthority::SEED_PREFIX],
        bump = authority.bump
    )]
    pub authority: Account<'info, AdminAuthority>,

    /// CHECK: only the PDA address is checked here. The store may not
    /// exist, and that is decided in the handler after the admin check.
    #[account(
        mut,
        seeds = [StoreAccount::SEED_PREFIX, store_id.to_le_bytes().as_ref()],
        bump
    )]
    pub store: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<VerifyStore>, _store_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.caller.key();
    let info = ctx.accounts.store.to_account_info();
    let mut data = info.try_borrow_mut_data()?;

    verify(
        &ctx.accounts.authority,
        &caller,
        info.owner,
        &mut data[..],
        clock.unix_timestamp,
    )
}

/// Admin check first, store lookup second: a non-admin gets
/// `NotAuthorized` whether or not the store exists.
pub(crate) fn verify(
    authority: &AdminAuthority,
    caller: &Pubkey,
    account_owner: &Pubkey,
    data: &mut [u8],
    now: i64,
) -> Result<()> {
    authority.authorize(caller)?;

    let mut store = StoreAccount::decode(account_owner, data)?
        .ok_or(RegistryError::StoreNotFound)?;

    if store.mark_verified(now) {
        store.encode_into(data)?;
        msg!("Store verified: id={}, admin={}", store.store_id, caller);
    } else {
        msg!("Store {} already verified", store.store_id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::tests::{encoded, sample};

    fn authority(admin: Pubkey) -> AdminAuthority {
        AdminAuthority { admin, bump: 255 }
    }

    #[test]
    fn admin_verifies_existing_store() {
        let admin = Pubkey::new_unique();
        let mut data = encoded(&sample(0, Pubkey::new_unique()));

        verify(&authority(admin), &admin, &crate::ID, &mut data, 77).unwrap();

        let store = StoreAccount::decode(&crate::ID, &data).unwrap().unwrap();
        assert!(store.verified);
        assert_eq!(store.verified_at, 77);
    }

    #[test]
    fn non_admin_is_rejected_and_store_untouched() {
        let admin = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut data = encoded(&sample(0, owner));
        let before = data.clone();

        let err = verify(&authority(admin), &owner, &crate::ID, &mut data, 77).unwrap_err();

        assert_eq!(err, RegistryError::NotAuthorized.into());
        assert_eq!(data, before);
    }

    #[test]
    fn authorization_is_checked_before_existence() {
        let admin = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();

        let err = verify(
            &authority(admin),
            &stranger,
            &anchor_lang::system_program::ID,
            &mut [],
            0,
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::NotAuthorized.into());

        let err = verify(
            &authority(admin),
            &admin,
            &anchor_lang::system_program::ID,
            &mut [],
            0,
        )
        .unwrap_err();
        assert_eq!(err, RegistryError::StoreNotFound.into());
    }

    #[test]
    fn repeat_verification_succeeds_without_change() {
        let admin = Pubkey::new_unique();
        let mut data = encoded(&sample(2, Pubkey::new_unique()));

        verify(&authority(admin), &admin, &crate::ID, &mut data, 5).unwrap();
        let after_first = data.clone();
        verify(&authority(admin), &admin, &crate::ID, &mut data, 9).unwrap();

        assert_eq!(data, after_first);
    }
}
