use anchor_lang::prelude::*;
use crate::errors::RegistryError;

/// Global registry state - hands out store ids
#[account]
#[derive(InitSpace, Default)]
pub struct RegistryState {
    /// Number of stores ever registered, which is also the next store id
    pub store_count: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl RegistryState {
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    /// Id the next registration will receive
    pub fn next_store_id(&self) -> u64 {
        self.store_count
    }

    /// Bump the counter after a store was written at `next_store_id()`
    pub fn record_registration(&mut self) -> Result<()> {
        self.store_count = self
            .store_count
            .checked_add(1)
            .ok_or(RegistryError::StoreCountOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut registry = RegistryState::default();
        for expected in 0..5u64 {
            assert_eq!(registry.next_store_id(), expected);
            registry.record_registration().unwrap();
        }
        assert_eq!(registry.store_count, 5);
    }

    #[test]
    fn counter_never_wraps() {
        let mut registry = RegistryState {
            store_count: u64::MAX,
            bump: 0,
        };
        assert_eq!(
            registry.record_registration().unwrap_err(),
            RegistryError::StoreCountOverflow.into()
        );
        assert_eq!(registry.store_count, u64::MAX);
    }
}
