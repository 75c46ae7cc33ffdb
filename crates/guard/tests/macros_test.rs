//! Integration tests for the name-capturing macros.

use param_guard::{reject, require, require_non_null, require_non_null_or_empty};

struct Request {
    user: Option<String>,
    scopes: Vec<&'static str>,
    limit: u32,
}

fn handle(request: &Request) -> param_guard::GuardResult<usize> {
    let user = require_non_null!(request.user.as_deref())?;
    require_non_null_or_empty!(user)?;
    require_non_null_or_empty!(&request.scopes, "at least one scope is required")?;
    require!(request.limit, |l: &u32| *l <= 100)?;
    reject!(request.scopes, |s: &Vec<&str>| s.contains(&"root"))?;
    Ok(request.scopes.len())
}

fn request() -> Request {
    Request {
        user: Some("ada".into()),
        scopes: vec!["read"],
        limit: 10,
    }
}

#[test]
fn valid_request_passes() {
    assert_eq!(handle(&request()), Ok(1));
}

#[test]
fn missing_user_reports_expression() {
    let mut req = request();
    req.user = None;
    let error = handle(&req).unwrap_err();
    assert!(error.is_null());
    assert_eq!(error.parameter(), "request.user.as_deref()");
}

#[test]
fn empty_scopes_use_custom_message() {
    let mut req = request();
    req.scopes.clear();
    let error = handle(&req).unwrap_err();
    assert!(error.is_invalid());
    assert_eq!(error.parameter(), "&request.scopes");
    assert_eq!(error.message(), "at least one scope is required");
}

#[test]
fn predicate_failures_name_field() {
    let mut req = request();
    req.limit = 500;
    let error = handle(&req).unwrap_err();
    assert_eq!(error.parameter(), "request.limit");
    assert_eq!(error.message(), "request.limit failed parameter validation.");

    let mut req = request();
    req.scopes.push("root");
    let error = handle(&req).unwrap_err();
    assert_eq!(error.parameter(), "request.scopes");
}
