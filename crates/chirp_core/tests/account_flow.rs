use chirp_core::db::migrations::latest_version;
use chirp_core::db::open_db_in_memory;
use chirp_core::{
    AccountRepository, AccountService, NewAccount, RepoError, SqliteAccountRepository,
};
use rusqlite::Connection;

#[test]
fn register_persists_account_and_assigns_id() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    let stored = service
        .register(&NewAccount::new("alice", "s3cret"))
        .unwrap()
        .expect("valid registration should be accepted");

    assert!(stored.account_id > 0);
    assert_eq!(stored.username, "alice");
    assert_eq!(stored.password, "s3cret");

    let repo = SqliteAccountRepository::try_new(&conn).unwrap();
    let loaded = repo.find_by_id(stored.account_id).unwrap().unwrap();
    assert_eq!(loaded, stored);
}

#[test]
fn register_rejects_blank_username_regardless_of_password() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    assert!(service
        .register(&NewAccount::new("", "longenough"))
        .unwrap()
        .is_none());
    assert!(service
        .register(&NewAccount::new("   \t", "longenough"))
        .unwrap()
        .is_none());
}

#[test]
fn register_password_length_boundary_is_four() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    assert!(service
        .register(&NewAccount::new("bob", "abc"))
        .unwrap()
        .is_none());
    assert!(service
        .register(&NewAccount::new("bob", "abcd"))
        .unwrap()
        .is_some());
}

#[test]
fn register_rejects_duplicate_username_even_with_valid_password() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    service
        .register(&NewAccount::new("carol", "first-pass"))
        .unwrap()
        .expect("first registration should succeed");

    let rejected = service
        .register(&NewAccount::new("carol", "other-pass"))
        .unwrap();
    assert!(rejected.is_none());
}

#[test]
fn login_succeeds_only_on_exact_credentials() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    let registered = service
        .register(&NewAccount::new("dave", "hunter2"))
        .unwrap()
        .unwrap();

    let logged_in = service
        .login(&NewAccount::new("dave", "hunter2"))
        .unwrap()
        .expect("correct credentials should log in");
    assert_eq!(logged_in, registered);

    // Wrong password and unknown username are indistinguishable: both None.
    assert!(service
        .login(&NewAccount::new("dave", "Hunter2"))
        .unwrap()
        .is_none());
    assert!(service
        .login(&NewAccount::new("nobody", "hunter2"))
        .unwrap()
        .is_none());
}

#[test]
fn login_never_mutates_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = AccountService::new(SqliteAccountRepository::try_new(&conn).unwrap());

    service
        .register(&NewAccount::new("erin", "pass1234"))
        .unwrap()
        .unwrap();
    service.login(&NewAccount::new("erin", "wrong")).unwrap();
    service.login(&NewAccount::new("erin", "pass1234")).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM accounts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteAccountRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_accounts_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteAccountRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("accounts"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_accounts_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE accounts (
            account_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteAccountRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "accounts",
            column: "password"
        })
    ));
}
