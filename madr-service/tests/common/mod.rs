#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::TokenSettings;
use chrono::Duration;
use chrono::Utc;
use madr_service::author::errors::AuthorError;
use madr_service::author::models::Author;
use madr_service::author::models::AuthorId;
use madr_service::author::models::AuthorName;
use madr_service::author::ports::AuthorRepository;
use madr_service::book::errors::BookError;
use madr_service::book::models::Book;
use madr_service::book::models::BookId;
use madr_service::book::models::BookSearch;
use madr_service::book::models::BookTitle;
use madr_service::book::models::CreateBookCommand;
use madr_service::book::ports::BookRepository;
use madr_service::domain::auth::service::AuthService;
use madr_service::domain::author::service::AuthorService;
use madr_service::domain::book::service::BookService;
use madr_service::domain::user::service::UserService;
use madr_service::inbound::http::router::create_router;
use madr_service::user::errors::UserError;
use madr_service::user::models::EmailAddress;
use madr_service::user::models::NewUser;
use madr_service::user::models::User;
use madr_service::user::models::UserId;
use madr_service::user::models::Username;
use madr_service::user::ports::UserRepository;
use serde_json::Value;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Rows keyed by identifier plus the next identifier to hand out.
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory credential store with the same uniqueness rules as Postgres.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    fn check_unique(
        table: &Table<User>,
        id: Option<UserId>,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<(), UserError> {
        let is_other = |u: &&User| Some(u.id) != id;

        if table
            .rows
            .values()
            .filter(is_other)
            .any(|u| &u.username == username)
        {
            return Err(UserError::UsernameAlreadyExists(username.to_string()));
        }
        if table
            .rows
            .values()
            .filter(is_other)
            .any(|u| &u.email == email)
        {
            return Err(UserError::EmailAlreadyExists(email.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut table = self.table.lock().unwrap();
        Self::check_unique(&table, None, &user.username, &user.email)?;

        let id = table.allocate_id();
        let user = User {
            id: UserId(id),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.table.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserError> {
        let table = self.table.lock().unwrap();
        let by_username = table.rows.values().find(|u| &u.username == username);
        let by_email = table.rows.values().find(|u| &u.email == email);
        Ok(by_username.or(by_email).cloned())
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<User>, UserError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut table = self.table.lock().unwrap();
        if !table.rows.contains_key(&user.id.0) {
            return Err(UserError::NotFound(user.id));
        }
        Self::check_unique(&table, Some(user.id), &user.username, &user.email)?;

        table.rows.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(*id))
    }
}

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    table: Mutex<Table<Author>>,
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn create(&self, name: AuthorName) -> Result<Author, AuthorError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.values().any(|a| a.name == name) {
            return Err(AuthorError::AlreadyExists(name.to_string()));
        }

        let id = table.allocate_id();
        let author = Author {
            id: AuthorId(id),
            name,
        };
        table.rows.insert(id, author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        Ok(self.table.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_name(&self, name: &AuthorName) -> Result<Option<Author>, AuthorError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().find(|a| &a.name == name).cloned())
    }

    async fn search(
        &self,
        fragment: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Author>, AuthorError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .filter(|a| a.name.as_str().contains(fragment))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, author: Author) -> Result<Author, AuthorError> {
        let mut table = self.table.lock().unwrap();
        if !table.rows.contains_key(&author.id.0) {
            return Err(AuthorError::NotFound(author.id));
        }
        if table
            .rows
            .values()
            .any(|a| a.id != author.id && a.name == author.name)
        {
            return Err(AuthorError::AlreadyExists(author.name.to_string()));
        }

        table.rows.insert(author.id.0, author.clone());
        Ok(author)
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), AuthorError> {
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(AuthorError::NotFound(*id))
    }
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    table: Mutex<Table<Book>>,
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, command: CreateBookCommand) -> Result<Book, BookError> {
        let mut table = self.table.lock().unwrap();
        if table.rows.values().any(|b| b.title == command.title) {
            return Err(BookError::AlreadyExists(command.title.to_string()));
        }

        let id = table.allocate_id();
        let book = Book {
            id: BookId(id),
            year: command.year,
            title: command.title,
            author_id: command.author_id,
        };
        table.rows.insert(id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self.table.lock().unwrap().rows.get(&id.0).cloned())
    }

    async fn find_by_title(&self, title: &BookTitle) -> Result<Option<Book>, BookError> {
        let table = self.table.lock().unwrap();
        Ok(table.rows.values().find(|b| &b.title == title).cloned())
    }

    async fn search(&self, search: &BookSearch) -> Result<Vec<Book>, BookError> {
        let table = self.table.lock().unwrap();
        Ok(table
            .rows
            .values()
            .filter(|b| {
                search
                    .title
                    .as_deref()
                    .map_or(true, |t| b.title.as_str().contains(t))
            })
            .filter(|b| search.year.map_or(true, |y| b.year.value() == y))
            .skip(search.offset as usize)
            .take(search.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut table = self.table.lock().unwrap();
        if !table.rows.contains_key(&book.id.0) {
            return Err(BookError::NotFound(book.id));
        }
        if table
            .rows
            .values()
            .any(|b| b.id != book.id && b.title == book.title)
        {
            return Err(BookError::AlreadyExists(book.title.to_string()));
        }

        table.rows.insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        self.table
            .lock()
            .unwrap()
            .rows
            .remove(&id.0)
            .map(|_| ())
            .ok_or(BookError::NotFound(*id))
    }
}

/// A registered user together with the plaintext password used to create it.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let settings = TokenSettings::hs256(TEST_SECRET, Duration::minutes(60));
        let authenticator = Arc::new(Authenticator::new(&settings));

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let auth_service = Arc::new(AuthService::new(user_repository, authenticator));
        let author_service = Arc::new(AuthorService::new(Arc::new(
            InMemoryAuthorRepository::default(),
        )));
        let book_service = Arc::new(BookService::new(Arc::new(
            InMemoryBookRepository::default(),
        )));

        let router = create_router(user_service, auth_service, author_service, book_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(&settings),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user through the API.
    pub async fn create_user(&self, username: &str, email: &str, password: &str) -> TestUser {
        let response = self
            .post("/users")
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        TestUser {
            id: body["id"].as_i64().expect("id is a number"),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Password grant against `/auth/token`.
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/auth/token")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn token_for(&self, user: &TestUser) -> String {
        let response = self.login(&user.email, &user.password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token is a string")
            .to_string()
    }

    /// A user with a valid token, for routes that only need some principal.
    pub async fn signed_in(&self) -> (TestUser, String) {
        let user = self
            .create_user("test_user", "test@test.com", "testtest")
            .await;
        let token = self.token_for(&user).await;
        (user, token)
    }

    /// Token signed with the server secret whose issue instant lies in the past.
    pub fn token_issued_ago(&self, subject: &str, age: Duration) -> String {
        self.jwt_handler
            .issue(subject, Utc::now() - age)
            .expect("Failed to sign token")
    }
}

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Throwaway Postgres database with migrations applied.
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    server_url: String,
}

impl TestDb {
    /// Create a fresh database on the server named by `DATABASE_URL`.
    ///
    /// Returns `None` when `DATABASE_URL` is unset so Postgres-backed tests
    /// are skipped on machines without a server.
    pub async fn new() -> Option<Self> {
        let server_url = std::env::var("DATABASE_URL").ok()?;
        let db_name = format!(
            "test_madr_{}_{}_{}",
            std::process::id(),
            Utc::now().timestamp_micros(),
            NEXT_DB.fetch_add(1, Ordering::Relaxed)
        );

        let mut conn = PgConnection::connect(&server_url)
            .await
            .expect("Failed to connect to Postgres");
        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = server_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            server_url,
        })
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let db_name = self.db_name.clone();
        let server_url = self.server_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&server_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;
                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}
