//! Shared integration-test infrastructure.
//!
//! One Postgres container serves the whole test run: the first test to
//! ask for a harness starts it and applies migrations, later tests just
//! open a fresh pool against it. Because the database is shared, tests
//! scope their data with fresh user ids and unique text markers rather
//! than truncating tables.

use anyhow::{Context, Result};
use sqlx::PgPool;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use discussion_core::kernel::{ServiceDeps, TestDependencies};

static DATABASE: OnceCell<TestDatabase> = OnceCell::const_new();

/// The run-wide container plus its connection URL. Dropping the
/// container stops it, so the static holds it until the process exits.
struct TestDatabase {
    url: String,
    _container: ContainerAsync<Postgres>,
}

async fn database() -> &'static TestDatabase {
    DATABASE
        .get_or_init(|| async {
            start_database()
                .await
                .expect("failed to start test database")
        })
        .await
}

async fn start_database() -> Result<TestDatabase> {
    // Honor RUST_LOG for test output; later calls are no-ops.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    // Concurrency tests open many short-lived connections, so raise the
    // server-side cap above the default.
    let container = Postgres::default()
        .with_tag("16")
        .with_cmd(["-c", "max_connections=200"])
        .start()
        .await
        .context("starting Postgres container")?;

    let url = format!(
        "postgresql://postgres:postgres@{}:{}/postgres",
        container.get_host().await?,
        container.get_host_port_ipv4(5432).await?,
    );

    let pool = PgPool::connect(&url)
        .await
        .context("connecting for migrations")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("applying migrations")?;

    Ok(TestDatabase {
        url,
        _container: container,
    })
}

/// Per-test handle: a pool on the shared, migrated database.
///
/// ```ignore
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let deps = ctx.deps(TestDependencies::new());
///     // ...
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let db = database().await;
        let db_pool = PgPool::connect(&db.url)
            .await
            .context("connecting test pool")?;
        Ok(Self { db_pool })
    }

    /// Build ServiceDeps over this harness's pool from the given mocks.
    ///
    /// Clone mock handles out of `test_deps` first when the test needs
    /// to assert on recorded calls.
    pub fn deps(&self, test_deps: TestDependencies) -> ServiceDeps {
        test_deps.into_deps(self.db_pool.clone())
    }
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("failed to create test harness")
    }

    async fn teardown(self) {}
}
