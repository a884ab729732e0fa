//! Project skeleton file contents
//!
//! Rendered once by `servicegen new`; resource generation only ever appends
//! new files next to these.

/// Cargo.toml for a generated service
///
/// The generated project keeps its modules at the crate root (`main.rs`,
/// `mapper/`, `handler/`) so artifact paths line up with the migration
/// directory layout downstream tooling expects.
pub const CARGO_TOML: &str = r#"[package]
name = "{{project_name}}"
version = "0.1.0"
edition = "2021"
rust-version = "1.75"

[[bin]]
name = "{{project_name_snake}}"
path = "main.rs"

[dependencies]
anyhow = "1"
axum = "0.8"
chrono = { version = "0.4", features = ["serde"] }
clap = { version = "4", features = ["derive"] }
serde = { version = "1", features = ["derive"] }
serde_json = "1"
sqlx = { version = "0.8", features = ["runtime-tokio", "postgres", "chrono"] }
tokio = { version = "1", features = ["full"] }
tracing = "0.1"
tracing-subscriber = { version = "0.3", features = ["env-filter"] }
"#;

/// Service entry point
pub const MAIN_RS: &str = r#"//! {{project_name}} service entry point

mod handler;
mod mapper;

use clap::Parser;
use mapper::DbConfig;

/// Database connection flags
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value = "localhost")]
    db_host: String,
    #[arg(long, default_value_t = 5432)]
    db_port: u16,
    #[arg(long, default_value = "postgres")]
    db_user: String,
    #[arg(long, default_value = "")]
    db_pass: String,
    #[arg(long, default_value = "{{project_name_snake}}")]
    db_name: String,
}

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: sqlx::PgPool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = DbConfig {
        host: args.db_host,
        port: args.db_port,
        user: args.db_user,
        password: args.db_pass,
        name: args.db_name,
    };

    let pool = mapper::connect(&config).await?;
    let app = handler::routes().with_state(AppState { pool });

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on port 8080");
    axum::serve(listener, app).await?;
    Ok(())
}
"#;

/// Root mapper module with explicit database configuration
pub const MAPPER_MOD: &str = r#"//! Database access layer for {{project_name}}

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Database configuration, passed explicitly by the caller at startup
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DbConfig {
    /// Connection URL for the configured database
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Open a connection pool for the given configuration
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.url())
        .await
}

/// A page request with an ordered list of sort keys
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Rows per page
    pub size: i64,
    /// Zero-based page number
    pub number: i64,
    /// Sort keys, applied in order
    pub sort: Vec<SortKey>,
}

/// One sort key
#[derive(Debug, Clone)]
pub struct SortKey {
    /// Column to sort by; mappers reject columns they do not select
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

/// Sort direction, restricted to the two SQL orders
#[derive(Debug, Clone, Copy)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL spelling of the direction
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
"#;

/// Root handler module
pub const HANDLER_MOD: &str = r"//! HTTP routing for {{project_name}}

use axum::Router;

use crate::AppState;

/// Root router; merge each generated resource's routes here
pub fn routes() -> Router<AppState> {
    Router::new()
}
";

/// Project configuration consumed by `servicegen resource`
pub const SERVICEGEN_TOML: &str = r#"# servicegen project configuration
project_name = "{{project_name}}"
database = "postgres"
"#;

/// Dockerfile for the generated service
pub const DOCKERFILE: &str = r#"FROM rust:1.75 AS build
WORKDIR /app
COPY . .
RUN cargo build --release

FROM debian:bookworm-slim
COPY --from=build /app/target/release/{{project_name_snake}} /usr/local/bin/{{project_name_snake}}
EXPOSE 8080
CMD ["{{project_name_snake}}"]
"#;

/// Compose file wiring the service to its database
pub const DOCKER_COMPOSE: &str = r#"services:
  app:
    build: .
    ports:
      - "8080:8080"
    depends_on:
      - db
    environment:
      - SERVICE_NAME={{project_name}}
      - DB_HOST=db
  db:
    image: postgres:16
    expose:
      - "5432"
    environment:
      - POSTGRES_USER=postgres
      - POSTGRES_PASSWORD=postgres
      - POSTGRES_DB={{project_name_snake}}
"#;

/// README for the generated service
pub const README_MD: &str = r#"# {{project_name}}

A CRUD service generated by servicegen.

## Quick Start

1. Create the database:
   ```bash
   createdb {{project_name_snake}}
   ```

2. Apply migrations in `database/ddl/` in ordinal order:
   ```bash
   for f in database/ddl/*.sql; do psql {{project_name_snake}} -f "$f"; done
   ```

3. Run the service:
   ```bash
   cargo run -- --db-name {{project_name_snake}}
   ```

## Adding resources

```bash
servicegen resource Book Title:string Published:timestamp
```

Each resource generates a mapper module, a handler module, and a sequenced
migration file. Follow the printed next steps to register the new modules.

## Project Structure

```
{{project_name}}/
├── main.rs              # Service entry point
├── handler/             # HTTP handlers, one module per resource
├── mapper/              # Persistence layer, one module per resource
└── database/ddl/        # Sequenced migration files
```
"#;

/// .gitignore for the generated service
pub const GITIGNORE: &str = r"# Rust
/target
/Cargo.lock
**/*.rs.bk

# Environment
.env
.env.local
";
