//! Resource artifact skeletons
//!
//! These templates receive fully-resolved, pre-validated values from the
//! generator: derived identifiers, complete statement strings, and ordered
//! bind/scan lists. No derivation happens here.

/// Persistence module for one resource
pub const MAPPER_RS: &str = r#"//! Data access for {{resource}} records
//!
//! Generated by servicegen for the {{project}} service. Column order matches
//! the migration for this resource and must stay in sync with it.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::mapper::PageRequest;

/// Columns selected for {{resource}} rows, in scan order
const COLUMNS: &[&str] = &[
{{#each scan_targets}}
    "{{this}}",
{{/each}}
];

/// A {{resource}} record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct {{resource}} {
    pub id: String,
{{#each fields}}
    pub {{this.name}}: {{this.rust_type}},
{{/each}}
}

fn from_row(row: &PgRow) -> Result<{{resource}}, sqlx::Error> {
    Ok({{resource}} {
{{#each scan_targets}}
        {{this}}: row.try_get({{@index}})?,
{{/each}}
    })
}

/// Fetch one page of {{resource}} rows
pub async fn get_{{table}}_page(
    pool: &PgPool,
    page: &PageRequest,
) -> Result<Vec<{{resource}}>, sqlx::Error> {
    let mut sql = String::from("SELECT {{select_columns}} FROM {{table}}");
    if !page.sort.is_empty() {
        for key in &page.sort {
            if !COLUMNS.contains(&key.column.as_str()) {
                return Err(sqlx::Error::ColumnNotFound(key.column.clone()));
            }
        }
        let keys: Vec<String> = page
            .sort
            .iter()
            .map(|key| format!("{} {}", key.column, key.direction.as_sql()))
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&keys.join(", "));
    }
    sql.push_str(" LIMIT $1 OFFSET $2");

    let rows = sqlx::query(&sql)
        .bind(page.size)
        .bind(page.number * page.size)
        .fetch_all(pool)
        .await?;
    rows.iter().map(from_row).collect()
}

/// Fetch one {{resource}} by id
pub async fn get_one_{{table}}(
    pool: &PgPool,
    id: &str,
) -> Result<Option<{{resource}}>, sqlx::Error> {
    let row = sqlx::query("{{select_one_sql}}")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.as_ref().map(from_row).transpose()
}

/// Insert a new {{resource}}
pub async fn create_{{table}}(pool: &PgPool, entity: &{{resource}}) -> Result<(), sqlx::Error> {
    sqlx::query("{{insert_sql}}")
{{#each insert_binds}}
        .bind(&entity.{{this}})
{{/each}}
        .execute(pool)
        .await?;
    Ok(())
}

/// Update an existing {{resource}}
pub async fn update_{{table}}(pool: &PgPool, entity: &{{resource}}) -> Result<(), sqlx::Error> {
    sqlx::query("{{update_sql}}")
{{#each update_binds}}
        .bind(&entity.{{this}})
{{/each}}
        .execute(pool)
        .await?;
    Ok(())
}

/// Delete a {{resource}} by id
pub async fn delete_{{table}}(pool: &PgPool, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("{{delete_sql}}").bind(id).execute(pool).await?;
    Ok(())
}
"#;

/// HTTP handler module for one resource
pub const HANDLER_RS: &str = r#"//! HTTP handlers for {{resource}} resources
//!
//! Generated by servicegen for the {{project}} service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::mapper::PageRequest;
use crate::mapper::{{table}}_mapper::{self as db, {{resource}}};
use crate::AppState;

/// Routes for the /{{table}} resource
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{{table}}", get(page).post(create).put(update))
        .route("/{{table}}/{id}", get(one).delete(remove))
}

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default = "default_size")]
    size: i64,
    #[serde(default)]
    page: i64,
}

const fn default_size() -> i64 {
    20
}

async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<{{resource}}>>, StatusCode> {
    let page = PageRequest {
        size: params.size,
        number: params.page,
        sort: Vec::new(),
    };
    db::get_{{table}}_page(&state.pool, &page)
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<{{resource}}>, StatusCode> {
    match db::get_one_{{table}}(&state.pool, &id).await {
        Ok(Some(entity)) => Ok(Json(entity)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

async fn create(
    State(state): State<AppState>,
    Json(entity): Json<{{resource}}>,
) -> Result<StatusCode, StatusCode> {
    db::create_{{table}}(&state.pool, &entity)
        .await
        .map(|()| StatusCode::CREATED)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn update(
    State(state): State<AppState>,
    Json(entity): Json<{{resource}}>,
) -> Result<StatusCode, StatusCode> {
    db::update_{{table}}(&state.pool, &entity)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    db::delete_{{table}}(&state.pool, &id)
        .await
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
"#;

/// DDL migration file for one resource
pub const MIGRATION_SQL: &str = r"CREATE TABLE {{table}} (
    id varchar PRIMARY KEY{{#each ddl_columns}},
    {{this.column}} {{this.sql_type}}{{/each}}
);
";
