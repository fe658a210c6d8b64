use dioxus::prelude::*;
use shared_types::WorkerProfile;

/// Client-side identity of the signed-in worker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_worker: Signal<Option<WorkerProfile>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_worker: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_worker.read().is_some()
    }

    pub fn set_worker(&mut self, worker: WorkerProfile) {
        self.current_worker.set(Some(worker));
    }

    pub fn clear_auth(&mut self) {
        self.current_worker.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The signed-in worker, or the default profile before the guard resolves.
pub fn use_current_worker() -> WorkerProfile {
    let auth = use_auth();
    let worker = auth.current_worker.read().clone().unwrap_or_default();
    worker
}
