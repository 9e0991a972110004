use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized: caller is not the registry admin")]
    NotAuthorized,

    #[msg("Store not found")]
    StoreNotFound,

    #[msg("Store already exists")]
    StoreAlreadyExists,

    #[msg("Store name is too long (max 64 bytes)")]
    NameTooLong,

    #[msg("Store address is too long (max 128 bytes)")]
    AddressTooLong,

    #[msg("Store counter overflow")]
    StoreCountOverflow,
}
