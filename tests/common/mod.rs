//! Shared test fixtures

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tempfile::TempDir;
use url::Url;
use wiremock::MockServer;

use quickxpos_admin::api::client::{ApiClient, Navigator};
use quickxpos_admin::auth::roles::Role;
use quickxpos_admin::auth::routes::Route;
use quickxpos_admin::auth::session::{Credentials, Identity, SessionStore};
use quickxpos_admin::auth::storage::FileSessionStorage;
use quickxpos_admin::config::Settings;

/// Navigator that records every redirect it is asked to perform.
pub struct RecordingNavigator {
    current: Mutex<Route>,
    redirects: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn at(route: Route) -> Self {
        Self {
            current: Mutex::new(route),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn redirects(&self) -> Vec<Route> {
        self.redirects.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_route(&self) -> Route {
        *self.current.lock()
    }

    fn redirect(&self, route: Route) {
        self.redirects.lock().push(route);
        *self.current.lock() = route;
    }
}

/// A mock backend plus a client wired to it through a file-backed session.
pub struct Harness {
    pub server: MockServer,
    pub client: ApiClient,
    pub session: Arc<SessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    // Keeps the session file alive for the test's duration.
    _dir: TempDir,
}

impl Harness {
    pub async fn start() -> Self {
        Self::start_at(Route::Dashboard).await
    }

    /// Start with the navigator positioned at `route`.
    pub async fn start_at(route: Route) -> Self {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            api_base_url: Url::parse(&server.uri()).unwrap(),
            session_file: dir.path().join("auth.json"),
            cache_ttl: Duration::from_secs(60),
        };
        let storage = Arc::new(FileSessionStorage::new(settings.session_file.clone()));
        let session = Arc::new(SessionStore::new(storage));
        let navigator = Arc::new(RecordingNavigator::at(route));
        let client = ApiClient::new(&settings, session.clone(), navigator.clone()).unwrap();
        Self {
            server,
            client,
            session,
            navigator,
            _dir: dir,
        }
    }

    pub fn session_file(&self) -> std::path::PathBuf {
        self._dir.path().join("auth.json")
    }

    /// Put an authenticated identity into the session store.
    pub fn sign_in(&self, role: Role) {
        self.session.set_credentials(Credentials {
            user: Identity {
                id: "u1".into(),
                name: "Test User".into(),
                email: "user@example.com".into(),
                ..Default::default()
            },
            role,
            permissions: None,
            token: "test-token".into(),
            refresh_token: None,
        });
    }
}
