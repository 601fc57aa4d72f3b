//! Tests for balance reporting.

use crate::mock::{bound_account, shared, MockProvider, MockState};
use bridge::{report_balances, WatchedAccount};
use primitives::{Address, Token};
use tokio::runtime::Runtime;

/// Tests a committed balance with an empty verified view.
#[test]
fn test_committed_without_verified() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let mut state = MockState::default();
        state
            .committed
            .insert("ETH".to_string(), "1000000000000000000".to_string());
        let state = shared(state);
        let account = bound_account(&state).await;

        let report = report_balances(&account, &Token::eth()).await.unwrap();
        assert_eq!(report.committed, "1");
        assert_eq!(report.verified, "0");
    });
}

/// Tests fractional balances in both views.
#[test]
fn test_fractional_balances() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let mut state = MockState::default();
        state
            .committed
            .insert("ETH".to_string(), "100000000000000000".to_string());
        state
            .verified
            .insert("ETH".to_string(), "50000000000000000".to_string());
        let state = shared(state);
        let account = bound_account(&state).await;

        let report = report_balances(&account, &Token::eth()).await.unwrap();
        assert_eq!(report.committed, "0.1");
        assert_eq!(report.verified, "0.05");
    });
}

/// Tests that a token never seen in either view reports zero.
#[test]
fn test_missing_token_reports_zero() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let mut state = MockState::default();
        state
            .committed
            .insert("ETH".to_string(), "1000000000000000000".to_string());
        let state = shared(state);
        let account = WatchedAccount::new(MockProvider::new(state), Address::zero());

        let report = report_balances(&account, &Token::new("DAI", 18)).await.unwrap();
        assert_eq!(report.address, Address::zero());
        assert_eq!(report.committed, "0");
        assert_eq!(report.verified, "0");
    });
}
