use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::net::AddrParseError;

pub type RecordsResult<T> = Result<T, RecordsError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RecordsError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse server address {:?}", original))]
    ParseServerAddr {
        source: AddrParseError,
        original: String,
    },
    #[snafu(display("Missing form field `{}`", name))]
    MissingFormField { name: &'static str },
}

impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. }
            | Self::MakeQuery { .. }
            | Self::BadEnvVar { .. }
            | Self::ParseServerAddr { .. } => ISE,
            Self::MissingFormField { .. } => BI,
        };

        error!(?self, "Error!");
        let body = html! {
            div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                strong class="font-bold" {"Student Records Error"}
                " "
                span {(self.to_string())}
            }
        };
        (status_code, Html(body.into_string())).into_response()
    }
}
