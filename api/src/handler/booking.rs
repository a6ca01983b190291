use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::{BookingId, RoomId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingIdResponse, CreateBookingRequest, CurrentBookingResponse, UpdateBookingRequest,
    },
};

pub async fn show_current_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CurrentBookingResponse>> {
    registry
        .booking_service()
        .get_current_booking(user.id())
        .await
        .map(CurrentBookingResponse::from)
        .map(Json)
}

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    req: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> AppResult<Json<BookingIdResponse>> {
    let Json(req) = req?;
    req.validate(&())?;

    registry
        .booking_service()
        .create_booking(user.id(), RoomId::new(req.room_id))
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    req: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> AppResult<Json<BookingIdResponse>> {
    let Json(req) = req?;
    req.validate(&())?;

    registry
        .booking_service()
        .update_booking(user.id(), booking_id, RoomId::new(req.room_id))
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use kernel::{
        model::{
            booking::Booking,
            enrollment::Enrollment,
            id::{EnrollmentId, HotelId, TicketId, UserId},
            room::Room,
            ticket::{Ticket, TicketStatus, TicketType},
        },
        repository::{
            booking::MockBookingRepository, enrollment::MockEnrollmentRepository,
            health::MockHealthCheckRepository, room::MockRoomRepository,
            session::MockSessionRepository, ticket::MockTicketRepository,
        },
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::route::routes;

    const TOKEN: &str = "valid-token";

    fn sessions() -> MockSessionRepository {
        let mut repo = MockSessionRepository::new();
        repo.expect_find_user_id()
            .returning(|token| Ok((token == TOKEN).then(|| UserId::new(1))));
        repo
    }

    fn enrollments(enrolled: bool) -> MockEnrollmentRepository {
        let mut repo = MockEnrollmentRepository::new();
        repo.expect_find_by_user_id().returning(move |user_id| {
            Ok(enrolled.then(|| Enrollment {
                enrollment_id: EnrollmentId::new(11),
                user_id,
            }))
        });
        repo
    }

    fn tickets(status: TicketStatus) -> MockTicketRepository {
        let mut repo = MockTicketRepository::new();
        repo.expect_find_by_enrollment_id()
            .returning(move |enrollment_id| {
                Ok(Some(Ticket {
                    ticket_id: TicketId::new(1),
                    enrollment_id,
                    status,
                    ticket_type: TicketType {
                        is_remote: false,
                        includes_hotel: true,
                    },
                }))
            });
        repo
    }

    fn room(room_id: RoomId) -> Room {
        Room {
            room_id,
            name: "Ocean View".into(),
            capacity: 1,
            hotel_id: HotelId::new(1),
        }
    }

    // room_id 5 だけが存在する
    fn rooms() -> MockRoomRepository {
        let mut repo = MockRoomRepository::new();
        repo.expect_find_by_id()
            .returning(|room_id| Ok((room_id == RoomId::new(5)).then(|| room(room_id))));
        repo
    }

    fn bookings(already_booked: i64) -> MockBookingRepository {
        let mut repo = MockBookingRepository::new();
        repo.expect_count_by_room_id()
            .returning(move |_| Ok(already_booked));
        repo.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(Booking {
                booking_id: BookingId::new(7),
                user_id,
                room: room(RoomId::new(5)),
            }))
        });
        repo.expect_create().returning(|event| {
            Ok(Booking {
                booking_id: BookingId::new(3),
                user_id: event.user_id,
                room: room(event.room_id),
            })
        });
        repo.expect_update_room().returning(|event| {
            Ok(Booking {
                booking_id: event.booking_id,
                user_id: UserId::new(1),
                room: room(event.room_id),
            })
        });
        repo
    }

    fn app(
        enrollments: MockEnrollmentRepository,
        tickets: MockTicketRepository,
        bookings: MockBookingRepository,
    ) -> Router {
        let registry = AppRegistry::from_repositories(
            Arc::new(MockHealthCheckRepository::new()),
            Arc::new(sessions()),
            Arc::new(enrollments),
            Arc::new(tickets),
            Arc::new(rooms()),
            Arc::new(bookings),
        );
        routes().with_state(registry)
    }

    fn eligible_app(already_booked: i64) -> Router {
        app(
            enrollments(true),
            tickets(TicketStatus::Paid),
            bookings(already_booked),
        )
    }

    fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_or_unknown_token_is_unauthorized() {
        for token in [None, Some("forged")] {
            let res = eligible_app(0)
                .oneshot(request(Method::GET, "/booking", token, None))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn user_without_enrollment_is_forbidden() {
        let app = app(
            enrollments(false),
            MockTicketRepository::new(),
            MockBookingRepository::new(),
        );

        let res = app
            .clone()
            .oneshot(request(Method::GET, "/booking", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = app
            .oneshot(request(
                Method::POST,
                "/booking",
                Some(TOKEN),
                Some(json!({ "roomId": 5 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unpaid_ticket_is_forbidden() {
        let app = app(
            enrollments(true),
            tickets(TicketStatus::Reserved),
            MockBookingRepository::new(),
        );

        let res = app
            .oneshot(request(
                Method::PUT,
                "/booking/7",
                Some(TOKEN),
                Some(json!({ "roomId": 5 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn full_room_is_forbidden() {
        let res = eligible_app(1)
            .oneshot(request(
                Method::POST,
                "/booking",
                Some(TOKEN),
                Some(json!({ "roomId": 5 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_room_is_not_found() {
        let res = eligible_app(0)
            .oneshot(request(
                Method::POST,
                "/booking",
                Some(TOKEN),
                Some(json!({ "roomId": 404 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_to_unknown_room_is_not_found() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(Booking {
                booking_id: BookingId::new(7),
                user_id,
                room: room(RoomId::new(5)),
            }))
        });
        bookings.expect_count_by_room_id().never();
        bookings.expect_update_room().never();
        let app = app(enrollments(true), tickets(TicketStatus::Paid), bookings);

        let res = app
            .oneshot(request(
                Method::PUT,
                "/booking/7",
                Some(TOKEN),
                Some(json!({ "roomId": 404 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_input_is_bad_request() {
        let cases = [
            (Method::PUT, "/booking/abc", Some(json!({ "roomId": 5 }))),
            (Method::POST, "/booking", Some(json!({ "roomId": 0 }))),
            (Method::POST, "/booking", Some(json!({ "roomId": "five" }))),
        ];
        for (method, uri, body) in cases {
            let res = eligible_app(0)
                .oneshot(request(method, uri, Some(TOKEN), body))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn create_returns_booking_id() {
        let res = eligible_app(0)
            .oneshot(request(
                Method::POST,
                "/booking",
                Some(TOKEN),
                Some(json!({ "roomId": 5 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "bookingId": 3 }));
    }

    #[tokio::test]
    async fn current_booking_includes_room() {
        let res = eligible_app(0)
            .oneshot(request(Method::GET, "/booking", Some(TOKEN), None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            body_json(res).await,
            json!({
                "id": 7,
                "room": { "id": 5, "name": "Ocean View", "capacity": 1, "hotelId": 1 }
            })
        );
    }

    #[tokio::test]
    async fn update_returns_the_located_booking_id() {
        let res = eligible_app(0)
            .oneshot(request(
                Method::PUT,
                "/booking/999",
                Some(TOKEN),
                Some(json!({ "roomId": 5 })),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await, json!({ "bookingId": 7 }));
    }

    #[tokio::test]
    async fn health_check_does_not_require_a_token() {
        let res = eligible_app(0)
            .oneshot(request(Method::GET, "/health", None, None))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
}
