mod common;

use common::{now, token_from_claims, unsigned_token};
use reservapp_gate::access::{Decision, DenyReason, RouteGuard, RouteRule, RouteTables};
use reservapp_gate::reservapp_auth::{Role, TokenCodec};
use serde_json::json;

fn guard() -> RouteGuard {
    RouteGuard::new(RouteTables::reservapp().unwrap(), TokenCodec::unverified())
}

fn decide(path: &str, token: Option<&str>) -> Decision {
    let guard = guard();
    guard.check(&guard.context(path, token), now())
}

#[test]
fn test_scenario_admin_area_without_token() {
    assert_eq!(
        decide("/dashboard/admin", None),
        Decision::deny("/login", DenyReason::Unauthorized)
    );
}

#[test]
fn test_scenario_admin_area_as_customer() {
    let token = unsigned_token("CUSTOMER", 3600);
    assert_eq!(
        decide("/dashboard/admin", Some(&token)),
        Decision::deny("/unauthorized", DenyReason::InvalidRole)
    );
}

#[test]
fn test_scenario_admin_area_as_admin() {
    let token = unsigned_token("ADMIN", 3600);
    assert_eq!(decide("/dashboard/admin", Some(&token)), Decision::allow());
}

#[test]
fn test_scenario_login_as_provider() {
    let token = unsigned_token("PROVIDER", 3600);
    assert_eq!(
        decide("/login", Some(&token)),
        Decision::deny("/dashboard/provider", DenyReason::Unauthorized)
    );
}

#[test]
fn test_scenario_dashboard_as_customer() {
    let token = unsigned_token("CUSTOMER", 3600);
    let decision = decide("/dashboard", Some(&token));
    assert!(!decision.is_allowed());
    assert_eq!(decision.redirect_to(), Some("/dashboard/customer"));
}

#[test]
fn test_scenario_unlisted_path_expired() {
    let token = unsigned_token("ADMIN", -60);
    assert_eq!(
        decide("/some/unlisted/path", Some(&token)),
        Decision::deny("/login", DenyReason::TokenExpired)
    );
}

#[test]
fn test_expired_token_on_every_protected_rule() {
    let token = unsigned_token("ADMIN", -1);
    let guard = guard();
    for rule in guard.tables().protected_rules() {
        let path = rule.pattern.to_string().replace('*', "page");
        assert_eq!(
            guard.check(&guard.context(&path, Some(&token)), now()),
            Decision::deny("/login", DenyReason::TokenExpired),
            "{path}"
        );
    }
}

#[test]
fn test_each_role_reaches_only_its_dashboard() {
    let areas = [
        (Role::Admin, "/dashboard/admin/users"),
        (Role::Provider, "/dashboard/provider/services"),
        (Role::Customer, "/dashboard/customer/reservations"),
    ];

    for role in Role::ALL {
        let token = unsigned_token(role.as_str(), 3600);
        for (owner, path) in areas {
            let decision = decide(path, Some(&token));
            if owner == role {
                assert_eq!(decision, Decision::allow(), "{role} on {path}");
            } else {
                assert_eq!(
                    decision,
                    Decision::deny("/unauthorized", DenyReason::InvalidRole),
                    "{role} on {path}"
                );
            }
        }
    }
}

#[test]
fn test_profile_open_to_all_roles() {
    for role in Role::ALL {
        let token = unsigned_token(role.as_str(), 3600);
        assert_eq!(decide("/profile", Some(&token)), Decision::allow());
    }
}

#[test]
fn test_denials_always_carry_target_and_reason() {
    let tokens = [
        None,
        Some(unsigned_token("ADMIN", 3600)),
        Some(unsigned_token("CUSTOMER", -10)),
        Some(unsigned_token("NOBODY", 3600)),
        Some("x.y.z".to_string()),
    ];
    let paths = [
        "/",
        "/login",
        "/register",
        "/dashboard",
        "/dashboard/admin",
        "/dashboard/provider/x",
        "/profile",
        "/settings",
        "/elsewhere",
    ];

    for token in &tokens {
        for path in paths {
            let decision = decide(path, token.as_deref());
            if !decision.is_allowed() {
                assert!(decision.redirect_to().is_some_and(|t| !t.is_empty()));
                assert!(decision.reason().is_some());
            }
        }
    }
}

#[test]
fn test_custom_tables_open_rule() {
    let mut open = RouteRule::authenticated("/help/*").unwrap();
    open.requires_auth = false;

    let tables = RouteTables::new(&["/"], &["/login"], vec![open]).unwrap();
    let guard = RouteGuard::new(tables, TokenCodec::unverified());

    let ctx = guard.context("/help/faq", None);
    assert_eq!(guard.check(&ctx, now()), Decision::allow());
}

#[test]
fn test_numeric_user_id_claim_admits_admin() {
    let token = token_from_claims(&json!({
        "userId": 5,
        "email": "a@b.c",
        "role": "ADMIN",
        "exp": now() + 3600
    }));

    let guard = guard();
    let ctx = guard.context("/dashboard/admin", Some(&token));
    assert_eq!(ctx.identity.as_ref().map(|i| i.id.as_str()), Some("5"));
    assert_eq!(guard.check(&ctx, now()), Decision::allow());
}

#[test]
fn test_string_iat_does_not_expire_token() {
    let token = token_from_claims(&json!({
        "sub": "1",
        "role": "ADMIN",
        "exp": now() + 3600,
        "iat": "2024-01-01"
    }));

    assert_eq!(decide("/dashboard/admin", Some(&token)), Decision::allow());
}
