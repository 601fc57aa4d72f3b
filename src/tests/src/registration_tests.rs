//! Tests for account binding and signing-key registration.

use crate::mock::{bound_account, receipt, shared, test_signer, MockAccount, MockProvider, MockState, Submission, Wait};
use bridge::{bind_account, deposit_to_layer2, ensure_registered, AccountView, BridgeError, RegistrationError};
use ethers::signers::Signer;
use primitives::Token;
use tokio::runtime::Runtime;

/// Tests that binding surfaces the client's error.
#[test]
fn test_bind_account_propagates_errors() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            bind_error: Some(BridgeError::SignatureError("account mismatch".into())),
            ..MockState::default()
        });

        let result = bind_account::<MockAccount>(test_signer(), MockProvider::new(state)).await;
        assert_eq!(
            result.unwrap_err(),
            BridgeError::SignatureError("account mismatch".into())
        );
    });
}

/// Tests that the bound account carries the signer's address.
#[test]
fn test_bind_account_uses_signer_address() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState::default());
        let account = bound_account(&state).await;
        assert_eq!(account.address(), test_signer().address());
    });
}

/// Tests that an account with a key set is registered without submitting.
#[test]
fn test_registered_account_submits_nothing() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            signing_key_set: true,
            ..MockState::default()
        });

        let session = ensure_registered(bound_account(&state).await).await.unwrap();
        let session = ensure_registered(session.into_inner()).await.unwrap();

        assert_eq!(session.address(), test_signer().address());
        assert!(state.lock().unwrap().submissions.is_empty());
    });
}

/// Tests that an account unknown to the network fails and never submits.
#[test]
fn test_unknown_account_is_rejected() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            account_id: None,
            ..MockState::default()
        });

        let result = ensure_registered(bound_account(&state).await).await;
        assert!(matches!(
            result,
            Err(RegistrationError {
                error: BridgeError::UnknownAccount(_),
                ..
            })
        ));
        assert!(state.lock().unwrap().submissions.is_empty());
    });
}

/// Tests that a known account registers once and registration is idempotent.
#[test]
fn test_registration_is_idempotent() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState::default());

        let session = ensure_registered(bound_account(&state).await).await.unwrap();
        {
            let state = state.lock().unwrap();
            assert_eq!(state.submissions, vec![Submission::SetSigningKey]);
            assert_eq!(state.waits, vec![Wait::Commit]);
        }

        ensure_registered(session.into_inner()).await.unwrap();
        assert_eq!(state.lock().unwrap().submissions.len(), 1);
    });
}

/// Tests that a failed key change is reported.
#[test]
fn test_failed_key_change_is_rejected() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            commit_result: Ok(receipt(false, true, false)),
            ..MockState::default()
        });

        let result = ensure_registered(bound_account(&state).await).await;
        assert!(matches!(
            result,
            Err(RegistrationError {
                error: BridgeError::Rejected(_),
                ..
            })
        ));
    });
}

/// Tests that an unknown account keeps its handle, deposits and then registers.
#[test]
fn test_unknown_account_deposits_then_registers() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            account_id: None,
            ..MockState::default()
        });

        let (account, error) = ensure_registered(bound_account(&state).await)
            .await
            .unwrap_err()
            .into_parts();
        assert!(matches!(error, BridgeError::UnknownAccount(_)));

        let outcome = deposit_to_layer2(&account, &Token::eth(), "0.1").await.unwrap();
        assert!(outcome.is_completed());
        state.lock().unwrap().account_id = Some(138);

        let session = ensure_registered(account).await.unwrap();
        assert_eq!(session.address(), test_signer().address());

        let state = state.lock().unwrap();
        assert!(matches!(
            state.submissions.as_slice(),
            [Submission::Deposit(_), Submission::SetSigningKey]
        ));
        assert_eq!(state.waits, vec![Wait::Commit, Wait::Commit]);
    });
}

/// Tests that a refused key change hands the account back and converts into a bridge error.
#[test]
fn test_failed_submission_returns_account() {
    let rt = Runtime::new().unwrap();

    rt.block_on(async {
        let state = shared(MockState {
            submit_error: Some(BridgeError::SignatureError("key derivation failed".into())),
            ..MockState::default()
        });

        let failure = ensure_registered(bound_account(&state).await).await.unwrap_err();
        assert_eq!(failure.account.address(), test_signer().address());
        assert_eq!(
            failure.to_string(),
            "Registration failed: Signature error: key derivation failed"
        );

        let error: BridgeError = failure.into();
        assert_eq!(error, BridgeError::SignatureError("key derivation failed".into()));
        assert!(state.lock().unwrap().waits.is_empty());
    });
}
