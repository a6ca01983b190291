use crate::database::{model::booking::BookingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

const SELECT_BOOKING: &str = r#"
    SELECT
    b.id AS booking_id,
    b.user_id,
    r.id AS room_id,
    r.name AS room_name,
    r.capacity,
    r.hotel_id
    FROM bookings AS b
    INNER JOIN rooms AS r ON b.room_id = r.id
"#;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    // ユーザーの予約が複数あっても、最も古い 1 件だけを返す
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let sql = format!("{SELECT_BOOKING} WHERE b.user_id = $1 ORDER BY b.id ASC LIMIT 1");
        sqlx::query_as::<_, BookingRow>(&sql)
            .bind(user_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map(|row| row.map(Booking::from))
            .map_err(AppError::SpecificOperationError)
    }

    async fn count_by_room_id(&self, room_id: RoomId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        // 部屋の行をロックしてから数える。同じ部屋への書き込み同士だけが待ち合わせる
        ensure_room_has_space(&mut tx, event.room_id).await?;

        let booking_id = sqlx::query_scalar::<_, BookingId>(
            "INSERT INTO bookings (user_id, room_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let booking = find_by_id(&mut tx, booking_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking)
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;

        ensure_room_has_space(&mut tx, event.room_id).await?;

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $2, updated_at = CURRENT_TIMESTAMP(3)
                WHERE id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "予約（{}）が見つかりませんでした。",
                event.booking_id
            )));
        }

        let booking = find_by_id(&mut tx, event.booking_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking)
    }
}

// 部屋の行を FOR UPDATE でロックし、トランザクション内で予約数を数え直す。
// 移動元が同じ部屋でも自分の予約は数に含める
async fn ensure_room_has_space(conn: &mut PgConnection, room_id: RoomId) -> AppResult<()> {
    let capacity =
        sqlx::query_scalar::<_, i32>("SELECT capacity FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(room_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(AppError::SpecificOperationError)?;

    let Some(capacity) = capacity else {
        return Err(AppError::EntityNotFound(format!(
            "部屋（{room_id}）が見つかりませんでした。"
        )));
    };

    let booked = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
        .bind(room_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(AppError::SpecificOperationError)?;

    if booked >= i64::from(capacity) {
        return Err(AppError::RoomAtCapacity);
    }
    Ok(())
}

async fn find_by_id(conn: &mut PgConnection, booking_id: BookingId) -> AppResult<Booking> {
    let sql = format!("{SELECT_BOOKING} WHERE b.id = $1");
    sqlx::query_as::<_, BookingRow>(&sql)
        .bind(booking_id)
        .fetch_one(&mut *conn)
        .await
        .map(Booking::from)
        .map_err(AppError::SpecificOperationError)
}
