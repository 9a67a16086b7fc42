//! Integration tests for the command handlers.
//!
//! Handlers run against an in-memory backend and write into a buffer, so
//! these cover argument validation, output and exit-code mapping without
//! network access (except the connection-refused case, which targets the
//! loopback interface).

use std::time::Duration;

use tactver_cli::handlers::{snapshot, versions};
use tactver_cli::{CliConfig, CliContext, CliError, OutputFormat, bootstrap};
use tactver_tact::testing::{CannedResponse, FakeBackend};

const HEADER: &str = "Region!STRING:0|BuildConfig!HEX:0|CDNConfig!HEX:0|BuildId!DEC:4|VersionsName!String:0|ProductConfig!HEX:0";

fn config() -> CliConfig {
    CliConfig {
        base_url: "http://tact.test:1119".to_string(),
        timeout: Duration::from_secs(10),
    }
}

fn context(backend: FakeBackend) -> CliContext<FakeBackend> {
    CliContext::with_backend(&config(), backend).unwrap()
}

fn wow_body() -> String {
    format!(
        "{HEADER}\n## seqn = 2241282\n\
         us|abcd1234|ef567890|54321|1.2.3.54321|fedc9876\n\
         eu|abcd1234|ef567890|54321|1.2.3.54321|fedc9876\n\
         kr|abcd1234|ef567890|54320|1.2.3.54320|fedc9876\n"
    )
}

async fn run_versions(
    ctx: &CliContext<FakeBackend>,
    product: &str,
    region: &str,
    format: OutputFormat,
) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = versions::execute(ctx, product, region, format, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_versions_table_all_regions() {
    let ctx = context(FakeBackend::new().with_response("/wow/", CannedResponse::body(wow_body())));

    let (result, output) = run_versions(&ctx, "wow", "all", OutputFormat::Table).await;
    result.unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Region"));
    assert!(lines[2].starts_with("us"));
    assert!(lines[2].contains("54321"));
    assert!(lines[4].starts_with("kr"));
    assert!(lines[4].ends_with("1.2.3.54320"));
}

#[tokio::test]
async fn test_versions_json_single_region() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(wow_body())));

    let (result, output) = run_versions(&ctx, "wow", "eu", OutputFormat::Json).await;
    result.unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["region"], "eu");
    assert_eq!(records[0]["build_id"], 54321);
    assert_eq!(records[0]["versions_name"], "1.2.3.54321");
}

#[tokio::test]
async fn test_versions_empty_product_succeeds() {
    let ctx = context(
        FakeBackend::new().with_default(CannedResponse::body(format!("{HEADER}\n## seqn = 3\n"))),
    );

    let (result, output) = run_versions(&ctx, "wowdev", "all", OutputFormat::Table).await;
    result.unwrap();
    assert_eq!(output, "No versions published for 'wowdev'\n");

    let (result, output) = run_versions(&ctx, "wowdev", "all", OutputFormat::Json).await;
    result.unwrap();
    assert_eq!(output.trim(), "[]");
}

#[tokio::test]
async fn test_versions_unknown_region_exit_code() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(wow_body())));

    let (result, output) = run_versions(&ctx, "wow", "cn", OutputFormat::Table).await;
    let err = result.unwrap_err();

    assert!(matches!(err, CliError::NotFound(_)));
    assert_eq!(err.exit_code(), 3);
    assert_eq!(err.kind_label(), "not-found");
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_versions_malformed_body_exit_code() {
    let body = format!("{HEADER}\nus|abcd1234|ef567890|54321\n");
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(body)));

    let (result, output) = run_versions(&ctx, "wow", "us", OutputFormat::Table).await;
    let err = result.unwrap_err();

    assert!(matches!(err, CliError::Parse(_)));
    assert_eq!(err.exit_code(), 65);
    assert!(err.to_string().contains("us|abcd1234|ef567890|54321"));
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_versions_http_failure_exit_code() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::Status(503)));

    let (result, _) = run_versions(&ctx, "wow", "all", OutputFormat::Table).await;
    let err = result.unwrap_err();

    assert!(matches!(err, CliError::Transport(_)));
    assert_eq!(err.exit_code(), 69);
}

#[tokio::test]
async fn test_versions_invalid_arguments() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(wow_body())));

    let (result, _) = run_versions(&ctx, "wow classic", "all", OutputFormat::Table).await;
    assert_eq!(result.unwrap_err().exit_code(), 2);

    let (result, _) = run_versions(&ctx, "wow", "", OutputFormat::Table).await;
    assert_eq!(result.unwrap_err().exit_code(), 2);

    assert!(ctx.client.backend().requests().is_empty());
}

#[tokio::test]
async fn test_versions_connection_refused() {
    let config = CliConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
    };
    let ctx = bootstrap(&config).unwrap();

    let mut out = Vec::new();
    let err = versions::execute(&ctx, "wow", "us", OutputFormat::Table, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Transport(_)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_snapshot_named_products() {
    let backend = FakeBackend::new()
        .with_response(
            "/wow_classic/",
            CannedResponse::body(format!(
                "{HEADER}\n## seqn = 12\nus|aa|bb|55646|1.15.3.55646|cc\n"
            )),
        )
        .with_response("/wow/", CannedResponse::body(wow_body()));
    let ctx = context(backend);

    let mut out = Vec::new();
    snapshot::execute(
        &ctx,
        &["wow".to_string(), "wow_classic".to_string()],
        &mut out,
    )
    .await
    .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(json["retrieval_datetime"].as_str().unwrap().ends_with('Z'));

    let wow = &json["products"]["wow"];
    assert_eq!(wow["name"], "wow");
    assert_eq!(wow["sequence_number"], 2_241_282);
    assert_eq!(wow["versions"].as_array().unwrap().len(), 3);
    assert_eq!(wow["versions"][0]["version"], "1.2.3");
    assert_eq!(wow["versions"][0]["build"], "54321");

    let classic = &json["products"]["wow_classic"];
    assert_eq!(classic["sequence_number"], 12);
    assert_eq!(classic["versions"][0]["region"], "us");
}

#[tokio::test]
async fn test_snapshot_defaults_to_known_products() {
    let backend = FakeBackend::new().with_default(CannedResponse::body(wow_body()));
    let ctx = context(backend);

    let mut out = Vec::new();
    snapshot::execute(&ctx, &[], &mut out).await.unwrap();

    let mut requested = ctx.client.backend().requests();
    requested.sort();
    assert_eq!(
        requested,
        vec![
            "http://tact.test:1119/wow/versions",
            "http://tact.test:1119/wow_classic/versions",
            "http://tact.test:1119/wow_classic_era/versions",
        ]
    );

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let products = json["products"].as_object().unwrap();
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_snapshot_failure_writes_nothing() {
    let backend = FakeBackend::new()
        .with_response("/wow/", CannedResponse::body(wow_body()))
        .with_response("/wow_classic_era/", CannedResponse::Timeout);
    let ctx = context(backend);

    let mut out = Vec::new();
    let err = snapshot::execute(
        &ctx,
        &["wow".to_string(), "wow_classic_era".to_string()],
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Transport(_)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_versions_rejects_path_like_products() {
    let config = CliConfig {
        base_url: "https://mirror.example.com/tact/".to_string(),
        timeout: Duration::from_secs(10),
    };
    let ctx = CliContext::with_backend(
        &config,
        FakeBackend::new().with_default(CannedResponse::body(wow_body())),
    )
    .unwrap();

    for product in ["..", ".", "a\\b"] {
        let mut out = Vec::new();
        let err = versions::execute(&ctx, product, "all", OutputFormat::Table, &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2, "product {product:?}");
    }
    assert!(ctx.client.backend().requests().is_empty());
}

#[tokio::test]
async fn test_snapshot_keeps_request_order() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(wow_body())));

    let mut out = Vec::new();
    snapshot::execute(&ctx, &["wowt".to_string(), "wow".to_string()], &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let wowt = text.find("\"wowt\": {").unwrap();
    let wow = text.find("\"wow\": {").unwrap();
    assert!(wowt < wow);
}

#[tokio::test]
async fn test_snapshot_fetches_repeated_products_once() {
    let ctx = context(FakeBackend::new().with_default(CannedResponse::body(wow_body())));

    let mut out = Vec::new();
    snapshot::execute(
        &ctx,
        &["wow".to_string(), "wowt".to_string(), "wow".to_string()],
        &mut out,
    )
    .await
    .unwrap();

    let mut requested = ctx.client.backend().requests();
    requested.sort();
    assert_eq!(
        requested,
        vec![
            "http://tact.test:1119/wow/versions",
            "http://tact.test:1119/wowt/versions",
        ]
    );
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["products"].as_object().unwrap().len(), 2);
}
