// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

// Only run this as a WASM if the export-abi feature is not set.
#![cfg_attr(not(any(feature = "export-abi", test)), no_main)]
#![cfg_attr(feature = "contract-client-gen", allow(unused_imports))]
extern crate alloc;

pub mod erc20;
pub mod ierc20;

use crate::erc20::{Erc20, Erc20Error, Erc20Params};
use crate::ierc20::IErc20;
use alloy_primitives::{Address, U256};
use stylus_sdk::{console, prelude::*};

/// Immutable definitions
pub struct MoonCoinParams;
impl Erc20Params for MoonCoinParams {
    const NAME: &'static str = "MoonCoin";
    const SYMBOL: &'static str = "MCN";
    const DECIMALS: u8 = 18;
    const INITIAL_SUPPLY: u64 = 1_000_001;
}

#[storage]
#[entrypoint]
pub struct MoonCoin {
    erc20: Erc20,
}

#[public]
#[implements(IErc20)]
impl MoonCoin {
    /// Credits the whole supply to the account that deployed the contract.
    #[constructor]
    pub fn constructor(&mut self) -> Result<(), Erc20Error> {
        // Use tx_origin instead of msg_sender because we use a factory contract in deployment.
        let deployer = self.vm().tx_origin();
        let supply = MoonCoinParams::initial_supply();
        self.erc20.mint_initial_supply(deployer, supply)?;
        console!("{} {} credited to {}", supply, MoonCoinParams::SYMBOL, deployer);
        Ok(())
    }
}

#[public]
impl IErc20 for MoonCoin {
    fn name(&self) -> String {
        MoonCoinParams::NAME.into()
    }

    fn symbol(&self) -> String {
        MoonCoinParams::SYMBOL.into()
    }

    fn decimals(&self) -> u8 {
        MoonCoinParams::DECIMALS
    }

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(&mut self, to: Address, value: U256) -> Result<bool, Erc20Error> {
        let caller = self.vm().msg_sender();
        self.erc20.transfer(caller, to, value)?;
        Ok(true)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(&mut self, spender: Address, value: U256) -> bool {
        let caller = self.vm().msg_sender();
        self.erc20.approve(caller, spender, value);
        true
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Erc20Error> {
        let caller = self.vm().msg_sender();
        self.erc20.transfer_from(caller, from, to, value)?;
        Ok(true)
    }
}
