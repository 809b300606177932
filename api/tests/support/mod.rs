use std::{
    collections::HashMap,
    str::FromStr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use api::route::v1;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use kernel::{
    model::{
        booking::{
            admission::{self, BookableOffice},
            event::{CancelBooking, CreateBooking},
            Booking, DateRange,
        },
        id::{BookingId, OfficeId, UserId},
        list::PaginatedList,
        office::{Office, OfficeListOptions},
        user::{BookingUser, OfficeOwner, User},
    },
    repository::{
        auth::AuthRepository, booking::BookingRepository, health::HealthCheckRepository,
        office::OfficeRepository,
    },
};
use registry::AppRegistry;
use rust_decimal::Decimal;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

pub fn open_office() -> OfficeId {
    OfficeId::from_str("1a8d34f4-0a5a-4c4e-9cbf-4c5cf9b6b3a1").unwrap()
}

pub fn closed_office() -> OfficeId {
    OfficeId::from_str("7d1f1c2e-2b8e-4a3c-8f0e-6a9d3c1b5e22").unwrap()
}

struct State {
    users: Vec<User>,
    tokens: HashMap<String, UserId>,
    offices: Vec<Office>,
    bookings: Vec<Booking>,
}

/// A single-process stand-in for the PostgreSQL repositories. One mutex
/// guards the whole store, so create is atomic the way the real transaction
/// is.
pub struct MemoryStore {
    state: Mutex<State>,
    store_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn seeded() -> Arc<Self> {
        let alice = User {
            user_id: UserId::new(),
            user_name: "Alice".into(),
            email: "alice@example.com".into(),
            company_name: Some("Alice Studio".into()),
        };
        let bob = User {
            user_id: UserId::new(),
            user_name: "Bob".into(),
            email: "bob@example.com".into(),
            company_name: None,
        };
        let owner = OfficeOwner {
            owner_id: alice.user_id,
            owner_name: alice.user_name.clone(),
        };
        let offices = vec![
            Office {
                office_id: open_office(),
                name: "Riverside Desk".into(),
                address: "ul. Długa 1".into(),
                city: "Gdańsk".into(),
                description: "Quiet desk by the river".into(),
                monthly_price: Decimal::from(3000),
                is_available: true,
                owner: owner.clone(),
            },
            Office {
                office_id: closed_office(),
                name: "Closed Loft".into(),
                address: "ul. Krótka 2".into(),
                city: "Gdańsk".into(),
                description: "Under renovation".into(),
                monthly_price: Decimal::from(4500),
                is_available: false,
                owner,
            },
        ];
        let tokens = HashMap::from([
            (ALICE_TOKEN.to_string(), alice.user_id),
            (BOB_TOKEN.to_string(), bob.user_id),
        ]);

        Arc::new(Self {
            state: Mutex::new(State {
                users: vec![alice, bob],
                tokens,
                offices,
                bookings: Vec::new(),
            }),
            store_calls: AtomicUsize::new(0),
        })
    }

    /// How many times a booking operation reached the store.
    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock().unwrap().bookings.clone()
    }
}

#[async_trait]
impl HealthCheckRepository for MemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl AuthRepository for MemoryStore {
    async fn find_user_by_token(&self, access_token: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tokens
            .get(access_token)
            .and_then(|id| state.users.iter().find(|u| u.user_id == *id))
            .cloned())
    }
}

#[async_trait]
impl OfficeRepository for MemoryStore {
    async fn find_all(&self, options: OfficeListOptions) -> AppResult<PaginatedList<Office>> {
        let state = self.state.lock().unwrap();
        let open: Vec<&Office> = state.offices.iter().filter(|o| o.is_available).collect();
        Ok(PaginatedList {
            total: open.len() as i64,
            limit: options.limit,
            offset: options.offset,
            items: open
                .into_iter()
                .skip(options.offset as usize)
                .take(options.limit as usize)
                .cloned()
                .collect(),
        })
    }

    async fn find_by_id(&self, office_id: OfficeId) -> AppResult<Option<Office>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .offices
            .iter()
            .find(|o| o.office_id == office_id)
            .cloned())
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();

        let office = state
            .offices
            .iter()
            .find(|o| o.office_id == event.office_id)
            .map(|o| BookableOffice {
                office_id: o.office_id,
                monthly_price: o.monthly_price,
                is_available: o.is_available,
            })
            .ok_or_else(|| AppError::EntityNotFound("office not found".into()))?;
        let live: Vec<DateRange> = state
            .bookings
            .iter()
            .filter(|b| b.office_id == event.office_id && b.status.is_live())
            .map(|b| b.period)
            .collect();
        let total_price = admission::admit(&office, &live, &event.period)?;

        let user_name = state
            .users
            .iter()
            .find(|u| u.user_id == event.requested_by)
            .map(|u| u.user_name.clone())
            .unwrap_or_default();
        let booking = Booking {
            booking_id: BookingId::new(),
            office_id: event.office_id,
            booked_by: BookingUser {
                user_id: event.requested_by,
                user_name,
            },
            period: event.period,
            total_price,
            status: Default::default(),
            created_at: Utc::now(),
        };
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<Booking> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        let booking = state
            .bookings
            .iter_mut()
            .find(|b| {
                b.booking_id == event.booking_id && b.booked_by.user_id == event.requested_by
            })
            .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))?;
        booking.cancel();
        Ok(booking.clone())
    }

    async fn is_available(&self, office_id: OfficeId, period: DateRange) -> AppResult<bool> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        let office = state
            .offices
            .iter()
            .find(|o| o.office_id == office_id)
            .map(|o| BookableOffice {
                office_id: o.office_id,
                monthly_price: o.monthly_price,
                is_available: o.is_available,
            })
            .ok_or_else(|| AppError::EntityNotFound("office not found".into()))?;
        let live: Vec<DateRange> = state
            .bookings
            .iter()
            .filter(|b| b.office_id == office_id && b.status.is_live())
            .map(|b| b.period)
            .collect();
        Ok(office.accepts(&live, &period))
    }

    async fn find_live_by_office_id(&self, office_id: OfficeId) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().unwrap();
        let mut live: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| b.office_id == office_id && b.status.is_live())
            .cloned()
            .collect();
        live.sort_by_key(|b| b.period.start());
        Ok(live)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .rev()
            .filter(|b| b.booked_by.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub fn app(store: Arc<MemoryStore>) -> Router {
    let registry = AppRegistry::from_parts(store.clone(), store.clone(), store.clone(), store);
    Router::new().merge(v1::routes()).with_state(registry)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let res = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
