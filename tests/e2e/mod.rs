// End-to-end tests for the Review Backend API
//
// Each test starts the full axum application on an ephemeral port, backed by
// fresh in-memory stores, and talks to it over real HTTP. Tests therefore run
// in parallel without sharing state.
//
// The PostgreSQL repository tests in `test_pg_repositories` run only when
// DATABASE_URL points at a disposable database; they truncate its tables.

mod helpers;
mod test_accounts;
mod test_health;
mod test_reviews;
