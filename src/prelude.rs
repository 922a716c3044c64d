pub use std::{
    collections::BTreeMap,
    env, fs,
    io::Cursor,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
