// End-to-end tests for the VoiceAloud backend.
//
// One shared testcontainers PostgreSQL instance serves the whole suite. Each
// test creates its own migrated database and drops it on teardown, so tests
// run in parallel without seeing each other's history rows.

mod helpers;
mod test_health;
