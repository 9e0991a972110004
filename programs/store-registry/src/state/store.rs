use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Store account - one registered store, keyed by its id
#[account]
#[derive(InitSpace, Default)]
pub struct StoreAccount {
    /// Id assigned by the registry (never reused)
    pub store_id: u64,

    /// Wallet that registered the store
    pub owner: Pubkey,

    /// Store name (max 64 bytes)
    #[max_len(64)]
    pub name: String,

    /// Street address (max 128 bytes)
    #[max_len(128)]
    pub address: String,

    /// Set by the admin, never cleared
    pub verified: bool,

    /// Unix timestamp of registration
    pub registered_at: i64,

    /// Unix timestamp of the first verification, 0 while unverified
    pub verified_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Public view of a store, returned by `get_store`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StoreRecord {
    pub store_id: u64,
    pub name: String,
    pub address: String,
    pub verified: bool,
    pub owner: Pubkey,
}

impl StoreAccount {
    pub const SEED_PREFIX: &'static [u8] = b"store";

    pub const MAX_NAME_LEN: usize = 64;
    pub const MAX_ADDRESS_LEN: usize = 128;

    /// Reject text that would not fit in the account
    pub fn check_capacity(name: &str, address: &str) -> Result<()> {
        require!(name.len() <= Self::MAX_NAME_LEN, RegistryError::NameTooLong);
        require!(
            address.len() <= Self::MAX_ADDRESS_LEN,
            RegistryError::AddressTooLong
        );
        Ok(())
    }

    /// A freshly allocated account is all zeroes, so a default owner means
    /// nothing was ever written here
    pub fn is_registered(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn init(
        &mut self,
        store_id: u64,
        owner: Pubkey,
        name: String,
        address: String,
        now: i64,
        bump: u8,
    ) {
        self.store_id = store_id;
        self.owner = owner;
        self.name = name;
        self.address = address;
        self.verified = false;
        self.registered_at = now;
        self.verified_at = 0;
        self.bump = bump;
    }

    /// Flip `verified` on. Returns false if it already was.
    pub fn mark_verified(&mut self, now: i64) -> bool {
        if self.verified {
            return false;
        }
        self.verified = true;
        self.verified_at = now;
        true
    }

    pub fn record(&self) -> StoreRecord {
        StoreRecord {
            store_id: self.store_id,
            name: self.name.clone(),
            address: self.address.clone(),
            verified: self.verified,
            owner: self.owner,
        }
    }

    /// Read a store out of raw account data. Empty data, an account the
    /// program does not own, or a never-written account all mean "no store".
    pub fn decode(account_owner: &Pubkey, data: &[u8]) -> Result<Option<Self>> {
        if data.is_empty() || account_owner != &crate::ID {
            return Ok(None);
        }
        let mut bytes = data;
        let store = Self::try_deserialize(&mut bytes)?;
        Ok(Some(store).filter(Self::is_registered))
    }

    /// Write the store back over raw account data
    pub fn encode_into(&self, data: &mut [u8]) -> Result<()> {
        let mut writer: &mut [u8] = data;
        self.try_serialize(&mut writer)
    }
}
