use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Single admin authority - the only identity allowed to verify stores
/// and hand the role over to someone else
#[account]
#[derive(InitSpace, Default)]
pub struct AdminAuthority {
    /// Current admin pubkey
    pub admin: Pubkey,
    /// Bump seed for PDA
    pub bump: u8,
}

impl AdminAuthority {
    pub const SEED_PREFIX: &'static [u8] = b"admin";

    pub fn current_admin(&self) -> Pubkey {
        self.admin
    }

    pub fn is_admin(&self, caller: &Pubkey) -> bool {
        self.admin == *caller
    }

    /// Fails with `NotAuthorized` unless `caller` holds the admin role
    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_admin(caller), RegistryError::NotAuthorized);
        Ok(())
    }

    /// Replace the admin. No check on `new_admin`; handing the role to
    /// yourself is allowed and changes nothing.
    pub fn transfer(&mut self, new_admin: Pubkey, caller: &Pubkey) -> Result<()> {
        self.authorize(caller)?;
        self.admin = new_admin;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority(admin: Pubkey) -> AdminAuthority {
        AdminAuthority { admin, bump: 255 }
    }

    #[test]
    fn only_current_admin_is_authorized() {
        let admin = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let auth = authority(admin);

        assert!(auth.is_admin(&admin));
        assert!(!auth.is_admin(&other));
        assert!(auth.authorize(&admin).is_ok());
        assert_eq!(
            auth.authorize(&other).unwrap_err(),
            RegistryError::NotAuthorized.into()
        );
    }

    #[test]
    fn transfer_moves_the_role() {
        let a0 = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let c = Pubkey::new_unique();
        let mut auth = authority(a0);

        auth.transfer(b, &a0).unwrap();
        assert_eq!(auth.current_admin(), b);

        // old admin lost the role
        assert_eq!(
            auth.transfer(c, &a0).unwrap_err(),
            RegistryError::NotAuthorized.into()
        );
        assert_eq!(auth.current_admin(), b);

        auth.transfer(c, &b).unwrap();
        assert_eq!(auth.current_admin(), c);
    }

    #[test]
    fn non_admin_transfer_leaves_state_alone() {
        let a0 = Pubkey::new_unique();
        let intruder = Pubkey::new_unique();
        let mut auth = authority(a0);

        assert!(auth.transfer(intruder, &intruder).is_err());
        assert_eq!(auth.current_admin(), a0);
    }

    #[test]
    fn self_transfer_is_allowed() {
        let a0 = Pubkey::new_unique();
        let mut auth = authority(a0);

        auth.transfer(a0, &a0).unwrap();
        assert_eq!(auth.current_admin(), a0);
    }
}
