use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// One database session. Returned to the pool when dropped, whichever way the
/// borrowing scope exits.
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Build the process-wide pool. Fails if the first connections cannot be
/// established within the pool's connection timeout.
pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().max_size(max_size).build(manager)
}
