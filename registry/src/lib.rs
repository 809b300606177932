use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl,
    office::OfficeRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, health::HealthCheckRepository,
    office::OfficeRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    office_repository: Arc<dyn OfficeRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    auth_repository: Arc<dyn AuthRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::from_parts(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(OfficeRepositoryImpl::new(pool.clone())),
            Arc::new(BookingRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(pool)),
        )
    }

    /// Assembles a registry from arbitrary implementations, e.g. in-memory
    /// ones in tests.
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        office_repository: Arc<dyn OfficeRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        auth_repository: Arc<dyn AuthRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            office_repository,
            booking_repository,
            auth_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn office_repository(&self) -> Arc<dyn OfficeRepository> {
        self.office_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }
}
