use reservapp_auth::Role;

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// The dashboard a role lands on after sign-in.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard/admin",
        Role::Provider => "/dashboard/provider",
        Role::Customer => "/dashboard/customer",
    }
}
