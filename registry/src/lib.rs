use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    booking::BookingRepositoryImpl, enrollment::EnrollmentRepositoryImpl,
    health::HealthCheckRepositoryImpl, room::RoomRepositoryImpl, session::SessionRepositoryImpl,
    ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    booking::BookingRepository, enrollment::EnrollmentRepository, health::HealthCheckRepository,
    room::RoomRepository, session::SessionRepository, ticket::TicketRepository,
};
use kernel::service::booking::BookingService;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    session_repository: Arc<dyn SessionRepository>,
    booking_service: BookingService,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositoryImpl::new(pool.clone()));
        let enrollment_repository = Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository = Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool));
        Self::from_repositories(
            health_check_repository,
            session_repository,
            enrollment_repository,
            ticket_repository,
            room_repository,
            booking_repository,
        )
    }

    // 実装を差し替えて組み立てる。テストではモックを渡す
    pub fn from_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        session_repository: Arc<dyn SessionRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        room_repository: Arc<dyn RoomRepository>,
        booking_repository: Arc<dyn BookingRepository>,
    ) -> Self {
        let booking_service = BookingService::new(
            enrollment_repository,
            ticket_repository,
            room_repository,
            booking_repository,
        );
        Self {
            health_check_repository,
            session_repository,
            booking_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn session_repository(&self) -> Arc<dyn SessionRepository> {
        self.session_repository.clone()
    }

    pub fn booking_service(&self) -> &BookingService {
        &self.booking_service
    }
}
