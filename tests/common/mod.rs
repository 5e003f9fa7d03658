#![allow(dead_code)]

use electricitymap_rs::EmClient;
use httpmock::MockServer;
use std::{fs, path::Path};
use url::Url;

pub const TOKEN: &str = "test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, zone: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{zone}.json");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client(server: &MockServer) -> EmClient {
    EmClient::builder()
        .token(TOKEN)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}
