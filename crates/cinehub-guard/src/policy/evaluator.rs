//! The pure permission evaluator.
//!
//! Decides access for a matched page given the user's kind and permission
//! codes. Deterministic, side-effect free, never errors. Rules are applied
//! in a fixed order, short-circuiting on the first deny:
//!
//! 1. Denylisted kind.
//! 2. Required kind mismatch (undeclared = pass).
//! 3. Missing or empty permission list (explicit opt-in model — a page must
//!    declare codes to be reachable through this check; unrestricted pages
//!    use `auth = false` instead).
//! 4. `separate` pair selection by the trailing `create` segment.
//! 5. `ROLE_` prefix normalization of the user's codes.
//! 6. AND across the effective code list.

use std::collections::HashSet;

use cinehub_entity::decision::AccessDecision;
use cinehub_entity::route::RouteRules;
use cinehub_entity::user::UserContext;

/// Index into a `separate` permission pair for the create page.
const CREATE_INDEX: usize = 0;
/// Index into a `separate` permission pair for the edit page.
const EDIT_INDEX: usize = 1;

/// Strip a case-insensitive `ROLE_` prefix, preserving the value's case:
/// `role_Admin` becomes `Admin`.
pub fn strip_role_prefix(code: &str) -> &str {
    match code.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("ROLE_") => &code[5..],
        _ => code,
    }
}

/// Normalize a set of held permission codes for membership tests.
pub fn normalize_codes(codes: &[String]) -> HashSet<&str> {
    codes.iter().map(|c| strip_role_prefix(c)).collect()
}

/// The trailing segment of a navigated path (`/movie/create` → `create`).
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Evaluate access to a page for a user navigating `path`.
///
/// The concrete path is needed because `separate` pages select their
/// required code by the trailing segment.
pub fn evaluate(rules: &RouteRules, path: &str, user: &UserContext) -> AccessDecision {
    if rules.exclude_kind.contains(&user.kind) {
        return AccessDecision::Denied;
    }

    if let Some(required) = rules.required_kind {
        if required != user.kind {
            return AccessDecision::Denied;
        }
    }

    let codes = rules.permission_codes.as_deref().unwrap_or(&[]);
    if codes.is_empty() {
        return AccessDecision::Denied;
    }

    // Tree construction guarantees a separate page declares exactly two
    // codes; a hand-built rule that violates this denies rather than
    // panics.
    let effective: &[String] = if rules.separate {
        let index = if last_segment(path) == "create" {
            CREATE_INDEX
        } else {
            EDIT_INDEX
        };
        match codes.get(index) {
            Some(code) => std::slice::from_ref(code),
            None => return AccessDecision::Denied,
        }
    } else {
        codes
    };

    let held = normalize_codes(&user.permission_codes);
    effective
        .iter()
        .all(|code| held.contains(code.as_str()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_entity::user::UserKind;

    fn rules(codes: Option<Vec<&str>>) -> RouteRules {
        RouteRules {
            auth: true,
            permission_codes: codes.map(|c| c.into_iter().map(String::from).collect()),
            required_kind: None,
            exclude_kind: Vec::new(),
            separate: false,
        }
    }

    fn user(kind: i32, codes: &[&str]) -> UserContext {
        UserContext::new(kind, codes.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_excluded_kind_denies_regardless_of_codes() {
        let mut r = rules(Some(vec!["VIEW_MOVIE"]));
        r.exclude_kind = vec![UserKind(2)];
        let u = user(2, &["VIEW_MOVIE"]);
        assert_eq!(evaluate(&r, "/movie", &u), AccessDecision::Denied);
    }

    #[test]
    fn test_required_kind_mismatch_denies() {
        let mut r = rules(Some(vec!["VIEW_MOVIE"]));
        r.required_kind = Some(UserKind(1));
        let u = user(2, &["VIEW_MOVIE"]);
        assert_eq!(evaluate(&r, "/movie", &u), AccessDecision::Denied);
    }

    #[test]
    fn test_required_kind_match_grants() {
        let mut r = rules(Some(vec!["VIEW_MOVIE"]));
        r.required_kind = Some(UserKind(1));
        let u = user(1, &["VIEW_MOVIE"]);
        assert_eq!(evaluate(&r, "/movie", &u), AccessDecision::Granted);
    }

    #[test]
    fn test_empty_permission_list_denies() {
        // Counter-intuitive but deliberate: declaring an empty list is not
        // "open access".
        let r = rules(Some(vec![]));
        let u = user(1, &["VIEW_MOVIE"]);
        assert_eq!(evaluate(&r, "/movie", &u), AccessDecision::Denied);
    }

    #[test]
    fn test_absent_permission_list_denies() {
        let r = rules(None);
        let u = user(1, &["VIEW_MOVIE"]);
        assert_eq!(evaluate(&r, "/movie", &u), AccessDecision::Denied);
    }

    #[test]
    fn test_all_codes_required() {
        let r = rules(Some(vec!["VIEW_MOVIE", "EDIT_MOVIE"]));
        assert_eq!(
            evaluate(&r, "/movie", &user(1, &["VIEW_MOVIE"])),
            AccessDecision::Denied
        );
        assert_eq!(
            evaluate(&r, "/movie", &user(1, &["VIEW_MOVIE", "EDIT_MOVIE"])),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_role_prefix_stripped_case_insensitively() {
        let r = rules(Some(vec!["Admin"]));
        assert_eq!(
            evaluate(&r, "/employee", &user(1, &["role_Admin"])),
            AccessDecision::Granted
        );
        assert_eq!(
            evaluate(&r, "/employee", &user(1, &["ROLE_Admin"])),
            AccessDecision::Granted
        );
        // Value case is preserved: "admin" is not "Admin".
        assert_eq!(
            evaluate(&r, "/employee", &user(1, &["ROLE_admin"])),
            AccessDecision::Denied
        );
    }

    #[test]
    fn test_strip_role_prefix() {
        assert_eq!(strip_role_prefix("ROLE_ADMIN"), "ADMIN");
        assert_eq!(strip_role_prefix("role_Admin"), "Admin");
        assert_eq!(strip_role_prefix("ROLE"), "ROLE");
        assert_eq!(strip_role_prefix("MANAGER"), "MANAGER");
    }

    #[test]
    fn test_separate_selects_create_code_on_create_path() {
        let mut r = rules(Some(vec!["CREATE_X", "EDIT_X"]));
        r.separate = true;
        let u = user(1, &["EDIT_X"]);

        assert_eq!(evaluate(&r, "/x/create", &u), AccessDecision::Denied);
        assert_eq!(evaluate(&r, "/x/123", &u), AccessDecision::Granted);
    }

    #[test]
    fn test_separate_selects_edit_code_elsewhere() {
        let mut r = rules(Some(vec!["CREATE_X", "EDIT_X"]));
        r.separate = true;
        let u = user(1, &["CREATE_X"]);

        assert_eq!(evaluate(&r, "/x/create", &u), AccessDecision::Granted);
        assert_eq!(evaluate(&r, "/x/123", &u), AccessDecision::Denied);
    }
}
