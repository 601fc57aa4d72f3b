//! Tests for layer-2 transfers.

use crate::mock::{bound_account, receipt, shared, MockAccount, MockState, SharedState, Submission, Wait};
use bridge::wallet::TransferRequest;
use bridge::{ensure_registered, transfer, AccountSession, BridgeError};
use primitives::packing::{AMOUNT_FORMAT, FEE_FORMAT};
use primitives::units::parse_amount;
use primitives::{Address, Outcome, Token, U256};
use tokio::runtime::Runtime;

async fn session(state: &SharedState) -> AccountSession<MockAccount> {
    ensure_registered(bound_account(state).await).await.unwrap()
}

fn registered() -> MockState {
    MockState {
        signing_key_set: true,
        ..MockState::default()
    }
}

fn recipient() -> Address {
    "0x8ba1f109551bd432803012645ac136ddd64dba72".parse().unwrap()
}

fn submitted_transfer(state: &SharedState) -> TransferRequest {
    match state.lock().unwrap().submissions.last() {
        Some(Submission::Transfer(request)) => request.clone(),
        other => panic!("expected a transfer, got {:?}", other),
    }
}

/// Tests that amount and fee are packable and do not exceed the inputs.
#[test]
fn test_transfer_packs_amount_and_fee() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(registered());
        let session = session(&state).await;

        let outcome = transfer(&session, recipient(), "1.23456789", "0.001", &Token::eth())
            .await
            .unwrap();
        assert!(outcome.is_completed());

        let request = submitted_transfer(&state);
        let amount = request.amount.value();
        let fee = request.fee.value();
        assert_eq!(request.to, recipient());
        assert_eq!(request.token, "ETH");
        assert!(amount <= parse_amount("1.23456789", 18).unwrap());
        assert!(fee <= parse_amount("0.001", 18).unwrap());
        assert!(AMOUNT_FORMAT.is_packable(amount));
        assert!(FEE_FORMAT.is_packable(fee));
    });
}

/// Tests that values with too many significant digits are rounded down.
#[test]
fn test_transfer_rounds_down_unpackable_values() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(registered());
        let session = session(&state).await;

        transfer(&session, recipient(), "1.234567890123456789", "0.0012345", &Token::eth())
            .await
            .unwrap();

        let request = submitted_transfer(&state);
        assert_eq!(
            request.amount.value(),
            U256::from(1_234_567_890_100_000_000u64)
        );
        assert_eq!(request.fee.value(), U256::from(1_234_000_000_000_000u64));
    });
}

/// Tests that a transfer waits for the commit receipt only.
#[test]
fn test_transfer_waits_for_commit_only() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(registered());
        let session = session(&state).await;

        transfer(&session, recipient(), "0.5", "0.001", &Token::eth())
            .await
            .unwrap();
        assert_eq!(state.lock().unwrap().waits, vec![Wait::Commit]);
    });
}

/// Tests that a failed receipt is an error.
#[test]
fn test_transfer_rejected() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            commit_result: Ok(receipt(false, true, false)),
            ..registered()
        });
        let session = session(&state).await;

        let result = transfer(&session, recipient(), "0.5", "0.001", &Token::eth()).await;
        assert!(matches!(result, Err(BridgeError::Rejected(_))));
    });
}

/// Tests that a timeout after submission leaves the transfer indeterminate.
#[test]
fn test_transfer_timeout_is_indeterminate() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            commit_result: Err(BridgeError::Timeout("commit receipt".into())),
            ..registered()
        });
        let session = session(&state).await;

        let outcome = transfer(&session, recipient(), "0.5", "0.001", &Token::eth())
            .await
            .unwrap();
        match outcome {
            Outcome::Indeterminate { tx_hash, .. } => assert!(tx_hash.starts_with("sync-tx:")),
            Outcome::Completed(_) => panic!("expected an indeterminate outcome"),
        }
    });
}

/// Tests that a non-transient wait error propagates.
#[test]
fn test_transfer_wait_error_propagates() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            commit_result: Err(BridgeError::RpcError("tx_info: Invalid nonce".into())),
            ..registered()
        });
        let session = session(&state).await;

        let result = transfer(&session, recipient(), "0.5", "0.001", &Token::eth()).await;
        assert_eq!(
            result.unwrap_err(),
            BridgeError::RpcError("tx_info: Invalid nonce".into())
        );
    });
}

/// Tests that invalid amounts are rejected before anything is submitted.
#[test]
fn test_transfer_invalid_amount() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(registered());
        let session = session(&state).await;

        let result = transfer(&session, recipient(), "one", "0.001", &Token::eth()).await;
        assert!(matches!(result, Err(BridgeError::InvalidAmount(_))));
        assert!(state.lock().unwrap().submissions.is_empty());
    });
}

/// Tests that a transfer the client refuses to submit is an error and is never awaited.
#[test]
fn test_transfer_submission_failure() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(registered());
        let session = session(&state).await;
        state.lock().unwrap().submit_error = Some(BridgeError::SignatureError("signer unavailable".into()));

        let result = transfer(&session, recipient(), "0.5", "0.001", &Token::eth()).await;
        assert_eq!(
            result.unwrap_err(),
            BridgeError::SignatureError("signer unavailable".into())
        );

        let state = state.lock().unwrap();
        assert!(state.submissions.is_empty());
        assert!(state.waits.is_empty());
    });
}
