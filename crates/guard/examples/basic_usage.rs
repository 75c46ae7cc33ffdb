//! Basic usage example for param-guard

use param_guard::prelude::*;

fn open_session(user: Option<&str>, roles: &[&str], ttl_secs: u64) -> GuardResult<String> {
    let user = require_non_null!(user)?;
    require_non_null_or_empty!(user)?;
    require_non_null_or_empty!(roles, "a session needs at least one role")?;
    require!(ttl_secs, |t: &u64| (60..=86_400).contains(t))?;
    Ok(format!("{user} [{}] for {ttl_secs}s", roles.join(",")))
}

fn main() {
    let attempts = [
        (Some("ada"), vec!["admin"], 3_600),
        (None, vec!["admin"], 3_600),
        (Some("ada"), vec![], 3_600),
        (Some("ada"), vec!["viewer"], 5),
    ];

    for (user, roles, ttl) in attempts {
        match open_session(user, &roles, ttl) {
            Ok(session) => println!("✓ {session}"),
            Err(e) => println!("✗ [{}] {e}", e.code()),
        }
    }
}
