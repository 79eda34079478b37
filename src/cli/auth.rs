use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{types::PkceToken, youtube};

pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    youtube::auth::auth(shared_state).await;
}
