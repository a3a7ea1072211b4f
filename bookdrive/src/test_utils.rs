//! Test utilities module for shared test initialization
//!
//! Centralized setup used across all test modules in the crate so every
//! test sees the same environment configuration and an initialized
//! session store.

use std::sync::Once;

/// Centralized test initialization for all tests across the entire crate
///
/// This function ensures that:
/// 1. Test environment variables are loaded from .env_test (with fallback to .env) - **ONCE**
/// 2. The session store is initialized
///
/// ## Usage
/// ```rust
/// use crate::test_utils::init_test_environment;
///
/// #[tokio::test]
/// async fn my_test() {
///     init_test_environment().await;
///     // ... test code that requires configuration or the session store
/// }
/// ```
pub(crate) async fn init_test_environment() {
    // Environment setup (synchronous, runs once)
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        println!("🧪 Loading test environment (.env_test)");
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });

    // Initialize the store - log errors but don't panic in tests
    if let Err(e) = crate::session::init().await {
        eprintln!("Warning: Failed to initialize session store: {e}");
    }
}
