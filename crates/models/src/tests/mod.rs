

use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Database tests only run against an explicitly provided server.
pub(crate) fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

/// Connect and bring the schema up to date.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
