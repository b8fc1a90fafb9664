// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Fixed-supply ERC-20 ledger.
//!
//! [`Erc20`] owns the balance and allowance books of a single token and
//! implements the standard movements between them. It is meant to be embedded
//! as a field of an entrypoint contract, which exposes it through
//! [`IErc20`](crate::ierc20::IErc20).
//!
//! The token's immutable metadata is supplied by an [`Erc20Params`] type.
//!
//! Every mutating method validates all of its preconditions before touching
//! storage, so a rejected call leaves the books exactly as they were.

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use stylus_sdk::{
    prelude::*,
    storage::{StorageMap, StorageU256},
};

/// Immutable token definition.
pub trait Erc20Params {
    /// Immutable token name
    const NAME: &'static str;

    /// Immutable token symbol
    const SYMBOL: &'static str;

    /// Immutable token decimals
    const DECIMALS: u8;

    /// Supply minted to the deployer, in whole tokens.
    const INITIAL_SUPPLY: u64;

    /// [`Self::INITIAL_SUPPLY`] scaled to base units.
    fn initial_supply() -> U256 {
        U256::from(Self::INITIAL_SUPPLY) * U256::from(10).pow(U256::from(Self::DECIMALS))
    }
}

/// Allowance value that is never decremented by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: U256 = U256::MAX;

#[storage]
pub struct Erc20 {
    /// Maps users to balances
    balances: StorageMap<Address, StorageU256>,
    /// Maps owners to a mapping of each spender's allowance
    allowances: StorageMap<Address, StorageMap<Address, StorageU256>>,
    /// The total supply of the token
    total_supply: StorageU256,
}

// Events and ERC-6093 custom errors
sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);

    error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
    error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
    error ERC20InvalidReceiver(address receiver);
}

/// Represents the ways methods may fail.
#[derive(SolidityError)]
pub enum Erc20Error {
    InsufficientBalance(ERC20InsufficientBalance),
    InsufficientAllowance(ERC20InsufficientAllowance),
    InvalidReceiver(ERC20InvalidReceiver),
}

impl Erc20 {
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.getter(owner).get(spender)
    }

    /// Credits the whole supply to `to`. Only the constructor calls this, so
    /// the supply is set exactly once.
    pub fn mint_initial_supply(&mut self, to: Address, value: U256) -> Result<(), Erc20Error> {
        ensure_receiver(to)?;
        self.total_supply.set(value);
        self.balances.insert(to, value);
        self.vm().log(Transfer {
            from: Address::ZERO,
            to,
            value,
        });
        Ok(())
    }

    /// Moves `value` from the caller's balance to `to`.
    pub fn transfer(&mut self, caller: Address, to: Address, value: U256) -> Result<(), Erc20Error> {
        ensure_receiver(to)?;
        let from_balance = self.checked_balance(caller, value)?;
        self.move_balance(caller, from_balance, to, value);
        Ok(())
    }

    /// Overwrites the allowance `caller` grants to `spender`.
    pub fn approve(&mut self, caller: Address, spender: Address, value: U256) {
        self.allowances.setter(caller).insert(spender, value);
        self.vm().log(Approval {
            owner: caller,
            spender,
            value,
        });
    }

    /// Moves `value` from `from` to `to` on behalf of `caller`, spending
    /// `caller`'s allowance unless it is [`UNLIMITED_ALLOWANCE`].
    ///
    /// Checks run receiver, then allowance, then balance: when both the
    /// allowance and the balance fall short, the allowance error is reported.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<(), Erc20Error> {
        ensure_receiver(to)?;

        let allowance = self.allowance(from, caller);
        if allowance < value {
            return Err(Erc20Error::InsufficientAllowance(
                ERC20InsufficientAllowance {
                    spender: caller,
                    allowance,
                    needed: value,
                },
            ));
        }
        let from_balance = self.checked_balance(from, value)?;

        if allowance != UNLIMITED_ALLOWANCE {
            self.allowances
                .setter(from)
                .insert(caller, allowance - value);
        }
        self.move_balance(from, from_balance, to, value);
        Ok(())
    }

    /// Returns `account`'s balance if it covers `value`.
    fn checked_balance(&self, account: Address, value: U256) -> Result<U256, Erc20Error> {
        let balance = self.balances.get(account);
        if balance < value {
            return Err(Erc20Error::InsufficientBalance(ERC20InsufficientBalance {
                sender: account,
                balance,
                needed: value,
            }));
        }
        Ok(balance)
    }

    // `from_balance` must already be known to cover `value`.
    fn move_balance(&mut self, from: Address, from_balance: U256, to: Address, value: U256) {
        self.balances.insert(from, from_balance - value);
        // Re-read after the debit so a self-transfer nets to zero.
        let to_balance = self.balances.get(to);
        self.balances.insert(to, to_balance + value);
        self.vm().log(Transfer { from, to, value });
    }
}

fn ensure_receiver(to: Address) -> Result<(), Erc20Error> {
    if to == Address::ZERO {
        return Err(Erc20Error::InvalidReceiver(ERC20InvalidReceiver {
            receiver: to,
        }));
    }
    Ok(())
}
