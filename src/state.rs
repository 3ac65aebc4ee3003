use crate::{
    config::RuntimeConfiguration,
    data::student::Student,
    error::{OpenDatabaseSnafu, RecordsError, RecordsResult},
};
use axum::{extract::FromRequestParts, http::request::Parts};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{ConnectOptions, SqliteConnection, sqlite::SqliteConnectOptions};
use std::ops::{Deref, DerefMut};

#[derive(Clone, Debug)]
pub struct RecordsState {
    connect_options: SqliteConnectOptions,
}

impl RecordsState {
    /// Points the state at the configured database file and makes sure the `students` table exists.
    pub async fn new(config: &RuntimeConfiguration) -> RecordsResult<Self> {
        let connect_options = SqliteConnectOptions::new()
            .filename(config.db_config().path())
            .create_if_missing(true);

        let state = Self { connect_options };

        let mut conn = state.get_connection().await?;
        Student::ensure_schema(&mut conn).await?;

        Ok(state)
    }

    #[allow(clippy::unused_self)]
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Records" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center justify-center text-white p-4" {
                    (markup)
                }
            }
        }
    }

    /// Opens a fresh connection. It is closed when the returned value is dropped.
    pub async fn get_connection(&self) -> RecordsResult<DbConnection> {
        self.connect_options
            .connect()
            .await
            .context(OpenDatabaseSnafu)
            .map(DbConnection)
    }
}

/// A connection owned by a single request.
///
/// Handlers take this as an argument, so every request gets its own connection and loses it on
/// every way out of the handler, including early `?` returns and later extractor rejections.
#[derive(Debug)]
pub struct DbConnection(SqliteConnection);

impl FromRequestParts<RecordsState> for DbConnection {
    type Rejection = RecordsError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &RecordsState,
    ) -> Result<Self, Self::Rejection> {
        state.get_connection().await
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
