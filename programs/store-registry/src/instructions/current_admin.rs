use anchor_lang::prelude::*;
use crate::state::AdminAuthority;

#[derive(Accounts)]
pub struct CurrentAdmin<'info> {
    #[account(
        seeds = [AdminAuthority::SEED_PREFIX],
        bump = authority.bump
    )]
    pub authority: Account<'info, AdminAuthority>,
}

pub fn handler(ctx: Context<CurrentAdmin>) -> Result<Pubkey> {
    Ok(ctx.accounts.authority.current_admin())
}
