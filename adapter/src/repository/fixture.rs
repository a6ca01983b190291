// sqlx::test 用のテストデータ投入ヘルパー
use kernel::model::id::{EnrollmentId, RoomId, UserId};
use sqlx::PgPool;

pub async fn insert_user(pool: &PgPool, email: &str) -> anyhow::Result<UserId> {
    let id = sqlx::query_scalar::<_, UserId>("INSERT INTO users (email) VALUES ($1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn insert_room(pool: &PgPool, name: &str, capacity: i32) -> anyhow::Result<RoomId> {
    let hotel_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO hotels (name) VALUES ('Driven Resort') RETURNING id",
    )
    .fetch_one(pool)
    .await?;
    let id = sqlx::query_scalar::<_, RoomId>(
        "INSERT INTO rooms (name, capacity, hotel_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(capacity)
    .bind(hotel_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_enrollment(pool: &PgPool, user_id: UserId) -> anyhow::Result<EnrollmentId> {
    let id = sqlx::query_scalar::<_, EnrollmentId>(
        "INSERT INTO enrollments (user_id, name) VALUES ($1, 'Test User') RETURNING id",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn insert_ticket(
    pool: &PgPool,
    enrollment_id: EnrollmentId,
    status: &str,
    is_remote: bool,
    includes_hotel: bool,
) -> anyhow::Result<()> {
    let ticket_type_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO ticket_types (name, is_remote, includes_hotel) VALUES ('Presencial', $1, $2) RETURNING id",
    )
    .bind(is_remote)
    .bind(includes_hotel)
    .fetch_one(pool)
    .await?;
    sqlx::query("INSERT INTO tickets (ticket_type_id, enrollment_id, status) VALUES ($1, $2, $3)")
        .bind(ticket_type_id)
        .bind(enrollment_id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(())
}
