use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Transaction,
};

pub mod model;

// 部屋の行ロックを待っている書き込みも接続を 1 本握ったままになる
const MAX_CONNECTIONS: u32 = 10;

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(&cfg.password)
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    // 分離レベルは PostgreSQL 既定の READ COMMITTED のまま。
    // 競合する書き込みは呼び出し側が SELECT ... FOR UPDATE で直列化する
    pub async fn begin(&self) -> AppResult<Transaction<'_, Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }
}

// 接続は最初のクエリまで張らない。起動時に DB が落ちていても /health は応答できる
pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_lazy_with(make_pg_connect_options(cfg));
    ConnectionPool(pool)
}
