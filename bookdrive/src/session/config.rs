use std::env;
use std::sync::LazyLock;
use tokio::sync::Mutex;

use super::store::{InMemorySessionStore, SessionStore};

static SESSION_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_STORE_TYPE")
        .ok()
        .unwrap_or_else(|| "memory".to_string())
});

pub(super) static SESSION_STORE: LazyLock<Mutex<Box<dyn SessionStore>>> =
    LazyLock::new(|| {
        let store_type = SESSION_STORE_TYPE.as_str();

        let store: Box<dyn SessionStore> = match store_type {
            "memory" => Box::new(InMemorySessionStore::new()),
            t => panic!("Unsupported session store type: {t}. Supported type is 'memory'"),
        };

        Mutex::new(store)
    });
