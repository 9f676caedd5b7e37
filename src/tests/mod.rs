
use std::path::PathBuf;
use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test::TestRequest,
};
use rstest::*;
use serde::Deserialize;
use serde_json::json;
use tempfile::TempDir;

use crate::config::StoreConfig;
use crate::container::Container;

pub struct TestContext {
    pub dir: TempDir,
    pub store: StoreConfig,
    pub container: Arc<Container>,
}

impl TestContext {
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store.path)
    }

    /// A fresh container over the same document, as after a service restart.
    pub fn restart(&self) -> Arc<Container> {
        Arc::new(Container::new(&self.store))
    }
}

#[fixture]
fn context() -> TestContext {
    let dir = TempDir::new().unwrap();

    let store = StoreConfig {
        path: dir.path().join("users.json").to_string_lossy().into_owned(),
        case_insensitive_email: false,
    };

    let container = Arc::new(Container::new(&store));

    TestContext {
        dir,
        store,
        container,
    }
}

async fn send_credentials<S, B>(
    app: &S,
    uri: &str,
    email: &str,
    password: &str,
) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    TestRequest::post()
        .uri(uri)
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(app)
        .await
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
