use crate::SessionStore;
use crate::tests::mint_token;

use std::sync::Arc;

use ak_store::FileTokenStore;
use tempfile::TempDir;

#[test]
fn given_file_backed_login_when_new_store_starts_then_session_restores() {
    let dir = TempDir::new().unwrap();

    let first = SessionStore::new(Arc::new(FileTokenStore::new(dir.path())));
    first.bootstrap();
    first
        .login(&mint_token(11, "user@example.com", 3600))
        .unwrap();
    drop(first);

    // Simulates a fresh launch against the same data directory
    let second = SessionStore::new(Arc::new(FileTokenStore::new(dir.path())));
    second.bootstrap();

    let identity = second.identity().unwrap();
    assert_eq!(identity.id, 11);
    assert_eq!(identity.email, "user@example.com");
}

#[test]
fn given_file_backed_logout_when_directory_inspected_then_token_file_gone() {
    let dir = TempDir::new().unwrap();
    let tokens = FileTokenStore::new(dir.path());
    let token_path = tokens.path().to_path_buf();

    let session = SessionStore::new(Arc::new(tokens));
    session.bootstrap();
    session
        .login(&mint_token(11, "user@example.com", 3600))
        .unwrap();
    assert!(token_path.exists());

    session.logout();

    assert!(!token_path.exists());
}
