//! End-to-end tests for locus resolve and locus classify

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn locus(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("locus").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("NCBI_EMAIL")
        .env_remove("NCBI_EUTILS_URL")
        .env("LOCUS_DELAY_MS", "0");
    cmd
}

#[tokio::test]
async fn test_resolve_symbol_as_csv() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "LOC101488245[Gene Name]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "esearchresult": {"count": "1", "idlist": ["101488245"]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("id", "101488245"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "uids": ["101488245"],
                "101488245": {
                    "uid": "101488245",
                    "name": "LOC101488245",
                    "description": "uncharacterized LOC101488245",
                    "organism": {"scientificname": "Cicer arietinum"},
                    "chromosome": "Ca4",
                    "maplocation": ""
                }
            }
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    locus(&dir)
        .args(["resolve", "LOC101488245", "--format", "csv"])
        .args(["--email", "curator@example.org", "--eutils-url"])
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "LOC101488245,101488245,LOC101488245,-,uncharacterized LOC101488245,-,Cicer arietinum,Ca4,-",
        ));
}

#[tokio::test]
async fn test_resolve_invalid_id_as_table() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    locus(&dir)
        .args(["resolve", "ENSG00000142192", "--email", "curator@example.org"])
        .arg("--eutils-url")
        .arg(server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid format"))
        .stdout(predicate::str::contains("Invalid input ID"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test]
fn test_resolve_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();

    locus(&dir)
        .args(["resolve", "NM_1", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown table format"));
}

#[test]
fn test_classify_works_offline() {
    let dir = TempDir::new().unwrap();

    locus(&dir)
        .args(["classify", "NM_000014.6", "NP_000475.1", "XM_004485479.3", "LOC101488245", "nm_1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RefSeq nucleotide (NM_)"))
        .stdout(predicate::str::contains("RefSeq protein (NP_)"))
        .stdout(predicate::str::contains("RefSeq predicted nucleotide (XM_)"))
        .stdout(predicate::str::contains("esearch gene [Gene Name]"))
        .stderr(predicate::str::contains("1 identifier(s) will be reported as 'Invalid format'"));
}

#[test]
fn test_no_subcommand_shows_help() {
    let dir = TempDir::new().unwrap();

    locus(&dir).assert().failure().stderr(predicate::str::contains("Usage"));
}
