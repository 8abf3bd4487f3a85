//! Build information for the crate, filled in by `build.rs`. The binary logs
//! [`full_version`] on startup and the API client sends [`user_agent`] so server logs show
//! which astorya build looked up a member list.

/// `git describe` output for the tree this was built from, or the package version when built
/// outside a checkout.
pub fn repo_version() -> &'static str {
    env!("REPO_VERSION")
}

/// One line describing this build: source version, cargo profile, active features and when it
/// was compiled.
pub fn full_version() -> String {
    format!(
        "astorya {} ({} build, features: {}, built {})",
        repo_version(),
        env!("BUILD_PROFILE"),
        env!("BUILD_FEATURES"),
        env!("BUILD_TIMESTAMP"),
    )
}

/// User agent sent by [`ApiClient`](crate::api::ApiClient) on every request.
pub fn user_agent() -> String {
    format!("astorya/{}", repo_version())
}
