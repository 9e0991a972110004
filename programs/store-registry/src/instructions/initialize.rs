use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use crate::program::StoreRegistry;
use crate::state::{AdminAuthority, RegistryState};

/// Genesis: creates the admin authority and the store counter.
/// Only the program's upgrade authority may run it, and it becomes the
/// first admin.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + AdminAuthority::INIT_SPACE,
        seeds = [AdminAuthority::SEED_PREFIX],
        bump
    )]
    pub authority: Account<'info, AdminAuthority>,

    #[account(
        init,
        payer = admin,
        space = 8 + RegistryState::INIT_SPACE,
        seeds = [RegistryState::SEED_PREFIX],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, StoreRegistry>,

    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let signer = ctx.accounts.admin.key();
    let upgrade_authority = ctx.accounts.program_data.upgrade_authority_address;

    genesis(
        &mut ctx.accounts.authority,
        &mut ctx.accounts.registry,
        upgrade_authority,
        signer,
        ctx.bumps.authority,
        ctx.bumps.registry,
    )
}

/// The signer must be the upgrade authority; a program deployed as
/// immutable (no upgrade authority) can never be initialized.
pub(crate) fn genesis(
    authority: &mut AdminAuthority,
    registry: &mut RegistryState,
    upgrade_authority: Option<Pubkey>,
    signer: Pubkey,
    authority_bump: u8,
    registry_bump: u8,
) -> Result<()> {
    require!(
        upgrade_authority == Some(signer),
        RegistryError::NotAuthorized
    );

    authority.admin = signer;
    authority.bump = authority_bump;

    registry.store_count = 0;
    registry.bump = registry_bump;

    msg!("Registry initialized with admin: {}", authority.admin);

    Ok(())
}
