//! End-to-end tests for locus annotate
//!
//! These tests run the binary against a mock E-utilities server and validate:
//! - The written table (header, row order, sentinel rows)
//! - Output formats and stdout output
//! - Input errors reported before any request

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const HEADER: &str =
    "InputID,GeneID,GeneName,GeneSymbol,Description,GeneType,Organism,Chromosome,MapLocation";

/// Helper to write an input table into the temp directory
fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let input = dir.path().join(name);
    fs::write(&input, content).expect("Failed to write input table");
    input
}

/// Helper to build a locus command isolated from the caller's environment
fn locus(dir: &Path, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("locus").unwrap();
    cmd.current_dir(dir)
        .env_remove("NCBI_API_KEY")
        .env_remove("LOCUS_LOG_LEVEL")
        .env_remove("LOCUS_LOG_OUTPUT")
        .env("NCBI_EMAIL", "curator@example.org")
        .env("NCBI_EUTILS_URL", server.uri())
        .env("LOCUS_DELAY_MS", "0");
    cmd
}

/// Mount link, search and summary responses for the standard fixture
async fn mount_fixture(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/elink.fcgi"))
        .and(query_param("id", "NM_001301717.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "linksets": [{
                "dbfrom": "nuccore",
                "linksetdbs": [{"dbto": "gene", "linkname": "nuccore_gene", "links": ["351"]}]
            }]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "LOC101488245[Gene Name]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "esearchresult": {"count": "0", "idlist": []}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("id", "351"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": {
                "uids": ["351"],
                "351": {
                    "uid": "351",
                    "name": "APP",
                    "description": "amyloid beta precursor protein",
                    "nomenclaturesymbol": "APP",
                    "genetype": "protein-coding",
                    "organism": {"scientificname": "Homo sapiens", "taxid": 9606},
                    "chromosome": "21",
                    "maplocation": "21q21.3"
                }
            }
        })))
        .mount(server)
        .await;
}

const FIXTURE_INPUT: &str = "GeneID,Notes\n\
NM_001301717.1,first\n\
ABC,bad prefix\n\
,blank\n\
LOC101488245,symbol\n\
NM_001301717.1,duplicate\n";

#[tokio::test]
async fn test_annotate_writes_expected_csv() {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", FIXTURE_INPUT);

    locus(dir.path(), &server)
        .arg("annotate")
        .arg(&input)
        .arg("--no-preview")
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let output = fs::read_to_string(dir.path().join("Annotated_Genes.csv")).unwrap();
    let expected = format!(
        "{}\n{}\n{}\n{}\n",
        HEADER,
        "NM_001301717.1,351,APP,APP,amyloid beta precursor protein,protein-coding,Homo sapiens,21,21q21.3",
        "ABC,Invalid format,Invalid,,Invalid input ID,,,,",
        "LOC101488245,Not found,Not found,,Not found,,,,"
    );
    assert_eq!(output, expected);

    // One link, one search, one summary: no call for the invalid or repeated rows
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_annotate_to_stdout() {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", FIXTURE_INPUT);

    locus(dir.path(), &server)
        .args(["annotate", "-o", "-"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(HEADER))
        .stdout(predicate::str::contains("LOC101488245,Not found,Not found"))
        .stdout(predicate::str::contains("Preview").not());

    assert!(!dir.path().join("Annotated_Genes.csv").exists());
}

#[tokio::test]
async fn test_annotate_tsv_input_with_custom_column() {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ids.tsv", "Accession\tSample\nNM_001301717.1\tS1\n");

    locus(dir.path(), &server)
        .args(["annotate", "--column", "Accession", "-o", "annotated.tsv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview"));

    let output = fs::read_to_string(dir.path().join("annotated.tsv")).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some(HEADER.replace(',', "\t").as_str()));
    assert!(lines.next().unwrap().starts_with("NM_001301717.1\t351\tAPP\t"));
}

#[tokio::test]
async fn test_annotate_json_output() {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", "GeneID\nLOC101488245\nXYZ_1\n");

    locus(dir.path(), &server)
        .args(["annotate", "-f", "json", "-o", "out.txt", "--no-preview"])
        .arg(&input)
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("out.txt")).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["InputID"], "LOC101488245");
    assert_eq!(rows[0]["GeneID"], "Not found");
    assert_eq!(rows[1]["GeneName"], "Invalid");
    assert!(rows[1]["Organism"].is_null());
}

#[tokio::test]
async fn test_annotate_missing_column_fails_before_requests() {
    let server = MockServer::start().await;
    mount_fixture(&server).await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", "Accession\nNM_001301717.1\n");

    locus(dir.path(), &server)
        .arg("annotate")
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no column named 'GeneID'"));

    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!dir.path().join("Annotated_Genes.csv").exists());
}

#[tokio::test]
async fn test_annotate_missing_input_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    locus(dir.path(), &server)
        .args(["annotate", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[tokio::test]
async fn test_annotate_requires_email() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", "GeneID\nNM_001301717.1\n");

    locus(dir.path(), &server)
        .env_remove("NCBI_EMAIL")
        .arg("annotate")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NCBI_EMAIL"));
}

#[tokio::test]
async fn test_annotate_server_error_becomes_error_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/elink.fcgi"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "genes.csv", "GeneID\nNM_000014.6\n");

    locus(dir.path(), &server)
        .args(["annotate", "-o", "-"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NM_000014.6,Error,Error,,elink returned HTTP 503: Service Unavailable,,,,",
        ));
}
