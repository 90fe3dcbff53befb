use codeforces::CodeforcesClient;
use storage::Database;

/// Shared per-request state. Both members are internally reference-counted
/// handles, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub codeforces: CodeforcesClient,
}
