/*! Integration tests for roster.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - user: Tests for UserRecord and the UserStore slot array
 * - session: Tests for the SessionManager token lifecycle
 * - maintenance: Tests for the daily-tick scheduler
 * - instance: End-to-end tests through the Instance context
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("roster=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod instance;
mod maintenance;
