//! Property tests for fee arithmetic and spendable amounts.

use proptest::prelude::*;
use trx_types::{Amount, AssetKind, ChainParameters};
use trx_wallet_core::fee::{coin_transfer_fee, declared_fee_limit, token_transfer_fee};
use trx_wallet_core::Balances;

proptest! {
    #[test]
    fn new_account_fee_ignores_bandwidth(size in 0usize..10_000, free in any::<u64>()) {
        let params = ChainParameters::default();
        prop_assert_eq!(coin_transfer_fee(&params, false, size, free), Amount::new(1_100_000));
    }

    #[test]
    fn existing_account_fee_is_zero_or_per_byte(size in 0usize..10_000, free in 0u64..20_000) {
        let params = ChainParameters::default();
        let fee = coin_transfer_fee(&params, true, size, free);
        if size as u64 <= free {
            prop_assert_eq!(fee, Amount::ZERO);
        } else {
            prop_assert_eq!(fee, Amount::new(size as u128 * 1_000));
        }
    }

    #[test]
    fn token_fee_covers_energy(energy in 0u64..1_000_000, size in 0usize..1_000, free in 0u64..2_000) {
        let params = ChainParameters::default();
        let fee = token_transfer_fee(&params, energy, size, free);
        prop_assert!(fee >= Amount::new(u128::from(energy) * 420));
    }

    #[test]
    fn declared_limit_bounds_both(limit in any::<u64>(), fee in any::<u64>()) {
        let declared = declared_fee_limit(limit, Amount::from(fee));
        prop_assert!(declared >= limit);
        prop_assert!(declared >= fee);
    }

    #[test]
    fn coin_max_amount_is_balance_minus_fee(balance in any::<u64>(), fee in any::<u64>()) {
        let balances = Balances { coin: Amount::from(balance), token: Amount::ZERO };
        let max = balances.max_amount(&AssetKind::Coin, Amount::from(fee));
        prop_assert_eq!(max, Amount::from(balance.saturating_sub(fee)));
        prop_assert!(max <= balances.coin);
    }
}
