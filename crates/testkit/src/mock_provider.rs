//! Recording test double for the upstream movements provider.
//!
//! `setup` stubs the response for any arguments; every call's arguments are
//! recorded so tests can verify how often, and with which account, the
//! upstream was called.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use movements_core::errors::CoreError;
use movements_core::models::filter::MovementQuery;
use movements_core::models::movement::PagedMovements;
use movements_core::providers::traits::MovementsProvider;

enum Stub {
    Page(PagedMovements),
    Failure(String),
}

#[derive(Default)]
struct MockState {
    stub: Option<Stub>,
    calls: Vec<MovementQuery>,
}

/// Mock upstream. Unconfigured mocks answer with an empty default page.
#[derive(Default)]
pub struct MockMovementsProvider {
    state: Mutex<MockState>,
}

impl MockMovementsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that already answers every call with `page`.
    pub fn returning(page: PagedMovements) -> Self {
        let mock = Self::new();
        mock.setup(page);
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking assertion must not hide the recorded calls.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer every call, whatever its arguments, with `page`.
    pub fn setup(&self, page: PagedMovements) {
        self.state().stub = Some(Stub::Page(page));
    }

    /// Fail every call with `CoreError::Api` carrying `message`.
    pub fn setup_failure(&self, message: impl Into<String>) {
        self.state().stub = Some(Stub::Failure(message.into()));
    }

    /// Arguments of every call so far, oldest first.
    pub fn calls(&self) -> Vec<MovementQuery> {
        self.state().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Assert exactly one call was made, with any arguments.
    #[track_caller]
    pub fn verify_called_at_all(&self) {
        let calls = self.calls();
        assert_eq!(
            calls.len(),
            1,
            "expected exactly one upstream call, got {}: {calls:?}",
            calls.len()
        );
    }

    /// Assert exactly one call was made and it carried `account` as the
    /// account-number argument.
    #[track_caller]
    pub fn verify_called_with_account(&self, account: &str) {
        let calls = self.calls();
        let matching = calls
            .iter()
            .filter(|q| q.account_number.as_deref() == Some(account))
            .count();
        assert!(
            calls.len() == 1 && matching == 1,
            "expected exactly one upstream call with account {account}, got {} call(s): {calls:?}",
            calls.len()
        );
    }

    /// Assert the upstream was never called.
    #[track_caller]
    pub fn verify_not_called(&self) {
        let calls = self.calls();
        assert!(calls.is_empty(), "expected no upstream call, got {calls:?}");
    }
}

#[async_trait]
impl MovementsProvider for MockMovementsProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn get_movements(&self, query: &MovementQuery) -> Result<PagedMovements, CoreError> {
        let mut state = self.state();
        state.calls.push(query.clone());
        match &state.stub {
            Some(Stub::Page(page)) => Ok(page.clone()),
            Some(Stub::Failure(message)) => Err(CoreError::Api {
                provider: "Mock".into(),
                message: message.clone(),
            }),
            None => Ok(PagedMovements::default()),
        }
    }
}
