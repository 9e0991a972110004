use anchor_lang::prelude::*;
use crate::state::AdminAuthority;

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    /// Must be the current admin
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [AdminAuthority::SEED_PREFIX],
        bump = authority.bump
    )]
    pub authority: Account<'info, AdminAuthority>,
}

pub fn handler(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let authority = &mut ctx.accounts.authority;
    let previous = authority.current_admin();

    authority.transfer(new_admin, &caller)?;

    msg!("Admin transferred: {} -> {}", previous, new_admin);

    Ok(())
}
