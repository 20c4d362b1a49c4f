//! End-to-end outcome pipelines: construction through fold

use railguard_outcome::{Fault, FaultOutcome, Outcome};

fn find_user(id: &str) -> FaultOutcome<String> {
    if id == "7" {
        Outcome::success("Ada".to_string())
    } else {
        Outcome::failure(Fault::not_found("not found"))
    }
}

fn validate_name(name: String) -> FaultOutcome<String> {
    if name.is_empty() {
        Outcome::failure(Fault::validation("name is empty"))
    } else {
        Outcome::success(name)
    }
}

#[test]
fn test_failure_survives_chain_into_fold() {
    // A failed lookup skips the chained step entirely; the original
    // message reaches the fold unchanged.
    let outcome = find_user("missing").and_then(|_| Outcome::success(42));
    let rendered = outcome.fold(|v| format!("ok:{v}"), |e| format!("err:{}", e.message()));
    assert_eq!(rendered, "err:not found");
}

#[test]
fn test_successful_pipeline_reaches_the_end() {
    let rendered = find_user("7")
        .and_then(validate_name)
        .map(|name| name.to_uppercase())
        .fold(|v| format!("ok:{v}"), |e| format!("err:{}", e.message()));
    assert_eq!(rendered, "ok:ADA");
}

#[test]
fn test_recovery_reroutes_a_failed_pipeline() {
    let rendered = find_user("missing")
        .or_else(|fault| match fault {
            Fault::NotFound(_) => Outcome::success("guest".to_string()),
            other => Outcome::failure(other),
        })
        .and_then(validate_name)
        .fold(|v| format!("ok:{v}"), |e| format!("err:{}", e.message()));
    assert_eq!(rendered, "ok:guest");
}

#[test]
fn test_error_channel_remapping() {
    let outcome: Outcome<String, String> = find_user("missing")
        .map_failure(|fault| format!("user lookup: {fault}"));
    assert_eq!(
        outcome.unwrap_failure(),
        "user lookup: not found: not found"
    );
}

#[test]
fn test_question_mark_interop_at_the_boundary() {
    fn handler(id: &str) -> Result<String, Fault> {
        let name = find_user(id).into_result()?;
        Ok(format!("hello {name}"))
    }

    assert_eq!(handler("7").unwrap(), "hello Ada");
    assert_eq!(handler("0").unwrap_err(), Fault::not_found("not found"));
}

#[test]
fn test_taxonomy_drives_terminal_branching() {
    // The typical fold at an HTTP-ish boundary: status per fault category.
    fn status_of(outcome: FaultOutcome<String>) -> u16 {
        outcome.fold(
            |_| 200,
            |fault| match fault {
                Fault::Validation(_) => 400,
                Fault::NotFound(_) => 404,
                Fault::Conflict(_) => 409,
                Fault::Dependency(_) => 502,
            },
        )
    }

    assert_eq!(status_of(Outcome::success("row".to_string())), 200);
    assert_eq!(status_of(Outcome::failure(Fault::validation("bad"))), 400);
    assert_eq!(status_of(Outcome::failure(Fault::not_found("gone"))), 404);
    assert_eq!(status_of(Outcome::failure(Fault::conflict("dup"))), 409);
    assert_eq!(status_of(Outcome::failure(Fault::dependency("db down"))), 502);
}
