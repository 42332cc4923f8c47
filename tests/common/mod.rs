#![allow(dead_code)]

use flicket_identity::entity::user;
use flicket_identity::urls::{GROUP_ENDPOINT, USERS_ENDPOINT, USER_ENDPOINT};
use flicket_identity::{IdentityStore, NewUser, RouteTable};
use sea_orm::{ConnectOptions, Database};
use tempfile::TempDir;

/// Lowest cost bcrypt accepts; keeps the suite fast.
pub const TEST_COST: u32 = 4;

pub const ADMIN_GROUP: &str = "flicket_admin";

/// A migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pub store: IdentityStore,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = TempDir::new().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("identity.db").display()
    );

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(1).sqlx_logging(false);
    let conn = Database::connect(opt).await.unwrap();

    let store = IdentityStore::new(conn);
    store.migrate().await.unwrap();

    TestDb { store, _dir: dir }
}

pub fn new_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: format!("{username} name"),
        email: format!("{username}@example.com"),
        password: password.to_string(),
        job_title: None,
    }
}

pub async fn register(store: &IdentityStore, username: &str, password: &str) -> user::Model {
    store
        .register_user(new_user(username, password), TEST_COST)
        .await
        .unwrap()
}

pub fn routes() -> RouteTable {
    RouteTable::new()
        .route(USERS_ENDPOINT, "/api/users")
        .route(USER_ENDPOINT, "/api/users/{id}")
        .route(GROUP_ENDPOINT, "/api/groups/{id}")
}
