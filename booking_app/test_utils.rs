#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::{HashMap, HashSet},
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };
    use tokio_util::sync::CancellationToken;
    use uuid::Uuid;

    use booking_domain::models::{airport::Airport, passenger::Passenger};
    use booking_types::{
        common::User,
        errors::{ApplicationError, DbError},
    };

    use crate::{
        config::Config,
        repository::{AirportRepository, PassengerRepository, UserRepository},
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    pub const AIRPORT_CODE_INDEX: &str = "airports_code_live_idx";
    pub const PASSPORT_INDEX: &str = "passengers_passport_live_idx";
    pub const USER_EMAIL_INDEX: &str = "users_email_key";

    pub fn test_config() -> Config {
        Config {
            api_base: "/api/v1".to_string(),
            http_port: 0,
            auth_cookie_secret: "test-secret-".repeat(8),
            secure_cookies: false,
            request_timeout: Duration::from_secs(5),
        }
    }

    fn unique_violation(index: &str) -> ApplicationError {
        ApplicationError::Db(DbError::UniqueViolation(index.to_string()))
    }

    /// Committed data of the in-memory store.
    #[derive(Default, Clone)]
    pub struct MemoryState {
        airports: HashMap<Uuid, Airport>,
        passengers: HashMap<Uuid, Passenger>,
        users: HashMap<Uuid, User>,
    }

    impl MemoryState {
        fn live_airport_by_code(&self, code: &str) -> Option<&Airport> {
            self.airports
                .values()
                .find(|a| a.is_live() && a.code == code)
        }

        fn live_passenger_by_passport(&self, passport_number: &str) -> Option<&Passenger> {
            self.passengers
                .values()
                .find(|p| p.is_live() && p.passport_number == passport_number)
        }

        fn user_by_email(&self, email: &str) -> Option<&User> {
            self.users.values().find(|u| u.email == email)
        }

        fn apply(&mut self, writes: &[Write]) {
            for write in writes {
                match write {
                    Write::PutAirport(airport) => {
                        self.airports.insert(airport.id, airport.clone());
                    }
                    Write::DeleteAirport(id) => {
                        if let Some(airport) = self.airports.get_mut(id) {
                            airport.is_deleted = true;
                        }
                    }
                    Write::PutPassenger(passenger) => {
                        self.passengers.insert(passenger.id, passenger.clone());
                    }
                    Write::DeletePassenger(id) => {
                        if let Some(passenger) = self.passengers.get_mut(id) {
                            passenger.is_deleted = true;
                        }
                    }
                    Write::PutUser(user) => {
                        self.users.insert(user.id, user.clone());
                    }
                }
            }
        }

        /// Mirrors the unique indexes of the Postgres schema.
        fn check_unique(&self) -> Result<(), ApplicationError> {
            let mut codes = HashSet::new();
            for airport in self.airports.values().filter(|a| a.is_live()) {
                if !codes.insert(airport.code.as_str()) {
                    return Err(unique_violation(AIRPORT_CODE_INDEX));
                }
            }

            let mut passports = HashSet::new();
            for passenger in self.passengers.values().filter(|p| p.is_live()) {
                if !passports.insert(passenger.passport_number.as_str()) {
                    return Err(unique_violation(PASSPORT_INDEX));
                }
            }

            let mut emails = HashSet::new();
            for user in self.users.values() {
                if !emails.insert(user.email.as_str()) {
                    return Err(unique_violation(USER_EMAIL_INDEX));
                }
            }

            Ok(())
        }
    }

    #[derive(Debug, Clone)]
    enum Write {
        PutAirport(Airport),
        DeleteAirport(Uuid),
        PutPassenger(Passenger),
        DeletePassenger(Uuid),
        PutUser(User),
    }

    /// Snapshot taken at `begin` plus this UoW's own writes.
    #[derive(Default)]
    struct Staged {
        state: MemoryState,
        writes: Vec<Write>,
    }

    /// Gate in front of every in-memory store call.
    #[derive(Clone, Default)]
    struct StoreProbe {
        cancel: CancellationToken,
        calls: Arc<AtomicUsize>,
        latency: Option<Duration>,
    }

    impl StoreProbe {
        async fn enter(&self) -> Result<(), ApplicationError> {
            if self.cancel.is_cancelled() {
                return Err(ApplicationError::Cancelled);
            }
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(latency) = self.latency {
                tokio::select! {
                    _ = tokio::time::sleep(latency) => {}
                    _ = self.cancel.cancelled() => return Err(ApplicationError::Cancelled),
                }
            }
            Ok(())
        }
    }

    #[derive(Clone)]
    pub struct MockAirportRepository {
        staged: Arc<Mutex<Staged>>,
        probe: StoreProbe,
    }

    #[async_trait]
    impl AirportRepository for MockAirportRepository {
        async fn add(&self, airport: &Airport) -> Result<(), ApplicationError> {
            self.probe.enter().await?;
            let mut staged = self.staged.lock().unwrap();

            if staged.state.airports.contains_key(&airport.id)
                || (airport.is_live() && staged.state.live_airport_by_code(&airport.code).is_some())
            {
                return Err(unique_violation(AIRPORT_CODE_INDEX));
            }

            staged.state.airports.insert(airport.id, airport.clone());
            staged.writes.push(Write::PutAirport(airport.clone()));
            Ok(())
        }

        async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            Ok(staged.state.live_airport_by_code(code).cloned())
        }

        async fn get_by_id(&self, airport_id: Uuid) -> Result<Airport, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            staged
                .state
                .airports
                .get(&airport_id)
                .filter(|a| a.is_live())
                .cloned()
                .ok_or(ApplicationError::Db(DbError::AirportNotFound(airport_id)))
        }

        async fn mark_deleted(&self, airport_id: Uuid) -> Result<(), ApplicationError> {
            self.probe.enter().await?;
            let mut guard = self.staged.lock().unwrap();
            let staged = &mut *guard;
            match staged.state.airports.get_mut(&airport_id) {
                Some(airport) if airport.is_live() => {
                    airport.is_deleted = true;
                    staged.writes.push(Write::DeleteAirport(airport_id));
                    Ok(())
                }
                _ => Err(ApplicationError::Db(DbError::AirportNotFound(airport_id))),
            }
        }
    }

    #[derive(Clone)]
    pub struct MockPassengerRepository {
        staged: Arc<Mutex<Staged>>,
        probe: StoreProbe,
    }

    #[async_trait]
    impl PassengerRepository for MockPassengerRepository {
        async fn add(&self, passenger: &Passenger) -> Result<(), ApplicationError> {
            self.probe.enter().await?;
            let mut staged = self.staged.lock().unwrap();

            if staged.state.passengers.contains_key(&passenger.id)
                || (passenger.is_live()
                    && staged
                        .state
                        .live_passenger_by_passport(&passenger.passport_number)
                        .is_some())
            {
                return Err(unique_violation(PASSPORT_INDEX));
            }

            staged
                .state
                .passengers
                .insert(passenger.id, passenger.clone());
            staged.writes.push(Write::PutPassenger(passenger.clone()));
            Ok(())
        }

        async fn find_by_passport_number(
            &self,
            passport_number: &str,
        ) -> Result<Option<Passenger>, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            Ok(staged
                .state
                .live_passenger_by_passport(passport_number)
                .cloned())
        }

        async fn get_by_id(&self, passenger_id: Uuid) -> Result<Passenger, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            staged
                .state
                .passengers
                .get(&passenger_id)
                .filter(|p| p.is_live())
                .cloned()
                .ok_or(ApplicationError::Db(DbError::PassengerNotFound(
                    passenger_id,
                )))
        }

        async fn mark_deleted(&self, passenger_id: Uuid) -> Result<(), ApplicationError> {
            self.probe.enter().await?;
            let mut guard = self.staged.lock().unwrap();
            let staged = &mut *guard;
            match staged.state.passengers.get_mut(&passenger_id) {
                Some(passenger) if passenger.is_live() => {
                    passenger.is_deleted = true;
                    staged.writes.push(Write::DeletePassenger(passenger_id));
                    Ok(())
                }
                _ => Err(ApplicationError::Db(DbError::PassengerNotFound(
                    passenger_id,
                ))),
            }
        }
    }

    #[derive(Clone)]
    pub struct MockUserRepository {
        staged: Arc<Mutex<Staged>>,
        probe: StoreProbe,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn add(&self, user: &User) -> Result<(), ApplicationError> {
            self.probe.enter().await?;
            let mut staged = self.staged.lock().unwrap();

            if staged.state.users.contains_key(&user.id)
                || staged.state.user_by_email(&user.email).is_some()
            {
                return Err(unique_violation(USER_EMAIL_INDEX));
            }

            staged.state.users.insert(user.id, user.clone());
            staged.writes.push(Write::PutUser(user.clone()));
            Ok(())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            Ok(staged.state.user_by_email(email).cloned())
        }

        async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError> {
            self.probe.enter().await?;
            let staged = self.staged.lock().unwrap();
            staged
                .state
                .users
                .get(&user_id)
                .cloned()
                .ok_or(ApplicationError::Db(DbError::UserByIdNotFound(user_id)))
        }
    }

    #[derive(Default)]
    struct Counters {
        transactions: AtomicUsize,
        commits: AtomicUsize,
        rollbacks: AtomicUsize,
    }

    #[derive(Default)]
    pub struct MockUnitOfWork {
        staged: Arc<Mutex<Staged>>,
        // None for a standalone UoW used directly by handler tests
        shared: Option<Arc<Mutex<MemoryState>>>,
        probe: StoreProbe,
        counters: Arc<Counters>,
        // applied writes are acknowledged only after this delay
        commit_delay: Option<Duration>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }

        /// Stores an airport as already committed data.
        pub fn seed_airport(&self, airport: Airport) {
            let mut staged = self.staged.lock().unwrap();
            staged.state.airports.insert(airport.id, airport);
        }

        pub fn seed_passenger(&self, passenger: Passenger) {
            let mut staged = self.staged.lock().unwrap();
            staged.state.passengers.insert(passenger.id, passenger);
        }

        pub fn seed_user(&self, user: User) {
            let mut staged = self.staged.lock().unwrap();
            staged.state.users.insert(user.id, user);
        }

        /// Replays this UoW's writes onto the shared state, enforcing the
        /// unique indexes against whatever other UoWs committed meanwhile.
        fn flush(&self) -> Result<(), ApplicationError> {
            let Some(shared) = &self.shared else {
                return Ok(());
            };
            let staged = self.staged.lock().unwrap();
            let mut shared = shared.lock().unwrap();

            let mut next = shared.clone();
            next.apply(&staged.writes);
            next.check_unique()?;
            *shared = next;
            Ok(())
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn airports(&self) -> Arc<dyn AirportRepository + 'a> {
            Arc::new(MockAirportRepository {
                staged: self.staged.clone(),
                probe: self.probe.clone(),
            })
        }

        fn passengers(&self) -> Arc<dyn PassengerRepository + 'a> {
            Arc::new(MockPassengerRepository {
                staged: self.staged.clone(),
                probe: self.probe.clone(),
            })
        }

        fn users(&self) -> Arc<dyn UserRepository + 'a> {
            Arc::new(MockUserRepository {
                staged: self.staged.clone(),
                probe: self.probe.clone(),
            })
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.flush()?;
            if let Some(delay) = self.commit_delay {
                tokio::time::sleep(delay).await;
            }
            self.counters.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.counters.rollbacks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out UoWs over one shared in-memory store and counts what they do.
    #[derive(Default)]
    pub struct MockUnitOfWorkProvider {
        shared: Arc<Mutex<MemoryState>>,
        store_calls: Arc<AtomicUsize>,
        counters: Arc<Counters>,
        latency: Option<Duration>,
        commit_delay: Option<Duration>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        /// Every store call sleeps for `latency` before answering.
        pub fn with_latency(mut self, latency: Duration) -> Self {
            self.latency = Some(latency);
            self
        }

        /// Commits apply their writes at once but take `delay` to return.
        pub fn with_commit_delay(mut self, delay: Duration) -> Self {
            self.commit_delay = Some(delay);
            self
        }

        pub fn seed_airport(&self, airport: Airport) {
            self.shared
                .lock()
                .unwrap()
                .airports
                .insert(airport.id, airport);
        }

        pub fn seed_passenger(&self, passenger: Passenger) {
            self.shared
                .lock()
                .unwrap()
                .passengers
                .insert(passenger.id, passenger);
        }

        pub fn seed_user(&self, user: User) {
            self.shared.lock().unwrap().users.insert(user.id, user);
        }

        /// Committed airports, deleted ones included.
        pub fn airport_count(&self) -> usize {
            self.shared.lock().unwrap().airports.len()
        }

        pub fn passenger(&self, id: Uuid) -> Option<Passenger> {
            self.shared.lock().unwrap().passengers.get(&id).cloned()
        }

        pub fn airport(&self, id: Uuid) -> Option<Airport> {
            self.shared.lock().unwrap().airports.get(&id).cloned()
        }

        pub fn store_calls(&self) -> usize {
            self.store_calls.load(Ordering::SeqCst)
        }

        pub fn transactions_begun(&self) -> usize {
            self.counters.transactions.load(Ordering::SeqCst)
        }

        pub fn commits(&self) -> usize {
            self.counters.commits.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.counters.rollbacks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(
            &'p self,
            cancel: CancellationToken,
        ) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            self.counters.transactions.fetch_add(1, Ordering::SeqCst);
            let snapshot = self.shared.lock().unwrap().clone();

            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                staged: Arc::new(Mutex::new(Staged {
                    state: snapshot,
                    writes: Vec::new(),
                })),
                shared: Some(self.shared.clone()),
                probe: StoreProbe {
                    cancel,
                    calls: self.store_calls.clone(),
                    latency: self.latency,
                },
                counters: self.counters.clone(),
                commit_delay: self.commit_delay,
            });
            Ok(uow)
        }
    }
}
