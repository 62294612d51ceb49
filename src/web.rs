//! Web form for running an extraction from the browser.
//!
//! ## Endpoints
//! - GET /          - the form
//! - POST /extract  - run the extraction, respond with the CSV download
//! - GET /healthz   - health check

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};

use crate::client::DriveClient;
use crate::error::{DriveError, Result};
use crate::export::{CSV_FILE_NAME, CSV_MIME_TYPE};
use crate::extract::{extract_audio_links, Extraction, EMPTY_RESULT_WARNING};
use crate::secrets::CredentialSource;
use crate::url_parser::extract_folder_id;

/// Response header carrying the number of exported rows.
pub const AUDIO_FILES_HEADER: &str = "X-Audio-Files";

/// Shared state: how to authenticate, and the client once it has been built.
pub struct AppState {
    credentials: CredentialSource,
    api_base: String,
    client: OnceCell<DriveClient>,
}

impl AppState {
    pub fn new(credentials: CredentialSource, api_base: impl Into<String>) -> Self {
        Self {
            credentials,
            api_base: api_base.into(),
            client: OnceCell::new(),
        }
    }

    /// The process-wide Drive client, built on first use.
    ///
    /// A failed build caches nothing, so a later request tries again.
    pub async fn drive_client(&self) -> Result<&DriveClient> {
        self.client
            .get_or_try_init(|| async {
                let auth = self.credentials.authenticator()?;
                info!(client_email = auth.client_email(), "drive client ready");
                Ok::<_, DriveError>(DriveClient::with_base_url(auth, self.api_base.as_str()))
            })
            .await
    }
}

/// Form body of POST /extract.
#[derive(Debug, Deserialize)]
pub struct ExtractForm {
    pub folder_url: String,
}

/// Message shown above the form.
enum Notice<'a> {
    Error(&'a str),
    Warning(&'a str),
    Success(&'a str),
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_page(folder_url: &str, notices: &[Notice<'_>]) -> String {
    let notices: String = notices
        .iter()
        .map(|notice| {
            let (class, text) = match notice {
                Notice::Error(text) => ("error", text),
                Notice::Warning(text) => ("warning", text),
                Notice::Success(text) => ("success", text),
            };
            format!("<p class=\"{}\">{}</p>\n", class, escape_html(text))
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Drive Audio Link Extractor</title>
</head>
<body>
<h1>Google Drive Audio Link Extractor</h1>
{notices}<form method="post" action="/extract">
<label for="folder_url">Google Drive Folder URL (Regular or Shared Drive)</label>
<input type="text" id="folder_url" name="folder_url" value="{value}">
<button type="submit">Start Extraction</button>
</form>
</body>
</html>
"#,
        notices = notices,
        value = escape_html(folder_url),
    )
}

fn page(status: StatusCode, folder_url: &str, notices: &[Notice<'_>]) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_page(folder_url, notices))
}

/// GET / - the empty form.
pub async fn index_handler() -> impl Responder {
    page(StatusCode::OK, "", &[])
}

/// POST /extract - parse the folder reference, walk it and return the CSV.
pub async fn extract_handler(
    state: web::Data<AppState>,
    form: web::Form<ExtractForm>,
) -> HttpResponse {
    let folder_url = form.folder_url.as_str();

    let folder_id = match extract_folder_id(folder_url) {
        Ok(id) => id,
        Err(e) => {
            warn!(input = folder_url, "rejected folder reference");
            return page(
                StatusCode::BAD_REQUEST,
                folder_url,
                &[Notice::Error(&e.to_string())],
            );
        }
    };

    let client = match state.drive_client().await {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build drive client");
            return page(
                StatusCode::INTERNAL_SERVER_ERROR,
                folder_url,
                &[Notice::Error(&e.to_string())],
            );
        }
    };

    match extract_audio_links(client, &folder_id).await {
        Ok(Extraction::Found { rows, csv }) => {
            info!(folder_id = %folder_id, audio_files = rows.len(), "sending csv");
            HttpResponse::Ok()
                .content_type(CSV_MIME_TYPE)
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
                ))
                .insert_header((AUDIO_FILES_HEADER, rows.len().to_string()))
                .body(csv)
        }
        Ok(Extraction::Empty) => page(
            StatusCode::OK,
            folder_url,
            &[
                Notice::Success("Done. Found 0 audio files."),
                Notice::Warning(EMPTY_RESULT_WARNING),
            ],
        ),
        Err(e) => {
            error!(folder_id = %folder_id, error = %e, "extraction failed");
            page(
                StatusCode::BAD_GATEWAY,
                folder_url,
                &[Notice::Error(&e.to_string())],
            )
        }
    }
}

/// GET /healthz - health check
pub async fn healthz_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Register the form routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index_handler))
        .route("/extract", web::post().to(extract_handler))
        .route("/healthz", web::get().to(healthz_handler));
}

/// Serve the form until the server is stopped.
pub async fn serve(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let state = web::Data::new(state);
    info!("listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
