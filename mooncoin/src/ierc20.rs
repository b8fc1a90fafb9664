// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy_primitives::{Address, U256};
use stylus_sdk::prelude::*;

use crate::erc20::Erc20Error;

/// Solidity surface of MoonCoin. Failures revert with the ERC-6093 errors
/// carried by [`Erc20Error`].
#[public]
pub trait IErc20 {
    fn name(&self) -> String;

    fn symbol(&self) -> String;

    fn decimals(&self) -> u8;

    /// Fixed at construction; no call changes it afterwards.
    fn total_supply(&self) -> U256;

    /// Zero for any account never credited, including the zero address.
    fn balance_of(&self, account: Address) -> U256;

    /// Moves `value` from the caller to `to` and logs `Transfer`.
    ///
    /// Reverts with `ERC20InvalidReceiver` when `to` is the zero address, then
    /// with `ERC20InsufficientBalance` when the caller holds less than `value`.
    /// Zero amounts and self-transfers succeed.
    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Erc20Error>;

    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Replaces the caller's allowance for `spender` and logs `Approval`.
    /// Never reverts; `U256::MAX` grants an allowance that is never spent down.
    fn approve(&mut self, spender: Address, value: U256) -> bool;

    /// Moves `value` from `from` to `to`, spending the caller's allowance.
    ///
    /// Checks the receiver, then the allowance (`ERC20InsufficientAllowance`),
    /// then `from`'s balance (`ERC20InsufficientBalance`). Only `Transfer` is
    /// logged; the allowance decrement emits no `Approval`.
    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Erc20Error>;
}
