mod common;

use business_insight::insight::{BusinessRequest, HttpBackend};
use common::*;
use std::time::Duration;

#[tokio::test]
async fn backend_payload_is_returned_unmodified() {
    let client = client_for(&spawn_backend(succeeding_backend()).await);
    let request = BusinessRequest::parse("Cake & Co", "Mumbai").unwrap();

    let data = client.fetch_insights(&request).await;

    // 3.9 and 1234 lie outside the mock pools, so nothing was synthesized.
    assert_eq!(data, fixed_payload());
}

#[tokio::test]
async fn regenerate_encodes_query_parameters() {
    let client = client_for(&spawn_backend(succeeding_backend()).await);

    let headline = client
        .regenerate_headline("Cake & Co", "São Paulo?x=1")
        .await
        .headline;

    assert_eq!(headline, "Cake & Co live from São Paulo?x=1");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_backend(succeeding_backend()).await;
    let backend = HttpBackend::new(&format!("{base}/"), Duration::from_secs(2)).unwrap();
    assert_eq!(backend.base_url(), base);

    let request = BusinessRequest::parse("Cake & Co", "Mumbai").unwrap();
    let data = backend.business_data(&request).await.unwrap();
    assert_eq!(data, fixed_payload());
}
