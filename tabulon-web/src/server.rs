//! HTTP serving loop

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::Method;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::debug;
use log::error;
use log::info;
use tabulon_lib::output::Inputs;
use tabulon_lib::output::RenderContext;
use tabulon_lib::render_table;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::assets;
use crate::error::ServeError;
use crate::page::Page;

/// HTTP/1 server for an assembled [`Page`].
///
/// Each connection is served on its own task; each `GET /output/{id}`
/// request runs one render cycle against that output's value source.
///
/// # Example
///
/// ```ignore
/// let server = Server::bind("127.0.0.1:8000").await?;
/// server.serve(page, CancellationToken::new()).await?;
/// ```
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl Server {
    /// Binds a listener on the given address.
    ///
    /// Use port `0` to let the OS pick one; [`Server::local_addr`] reports
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Bind`] when the address cannot be bound.
    pub async fn bind(addr: &str) -> Result<Self, ServeError> {
        let listener = TcpListener::bind(addr).await.map_err(|e| ServeError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;
        let local_addr = listener.local_addr().map_err(|e| ServeError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;
        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Returns the bound address.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves the page until the token is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError::Accept`] when accepting a connection fails.
    pub async fn serve(self, page: Page, shutdown: CancellationToken) -> Result<(), ServeError> {
        let page = Arc::new(page);
        info!("Serving on http://{}/", self.local_addr);

        loop {
            let accepted = tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested, stopping accept loop");
                    return Ok(());
                }
                accepted = self.listener.accept() => accepted,
            };
            let (stream, peer) = accepted.map_err(ServeError::Accept)?;
            debug!("Connection from {}", peer);

            let page = page.clone();
            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let service = service_fn(move |req| {
                    let page = page.clone();
                    async move { Ok::<_, Infallible>(handle_request(&page, req).await) }
                });
                // Browsers drop keep-alive connections early; not worth surfacing.
                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("Connection closed: {}", e);
                }
            });
        }
    }
}

/// Routes one request against the page.
///
/// Public so tests can drive the router without a socket.
pub async fn handle_request<B>(page: &Page, req: Request<B>) -> Response<Full<Bytes>> {
    if req.method() != Method::GET {
        return not_found();
    }

    let path = req.uri().path();
    debug!("GET {}", path);

    if path == "/" {
        return html_response(page.to_html());
    }
    if path == assets::TABLE_OUTPUT_JS_ROUTE && page.has_bundled_outputs() {
        return js_response(assets::TABLE_OUTPUT_JS);
    }
    if let Some(id) = path.strip_prefix("/output/") {
        let query = req.uri().query().unwrap_or("");
        return render_output(page, id, query).await;
    }
    not_found()
}

/// Runs one render cycle for an output and builds its HTTP response.
async fn render_output(page: &Page, id: &str, query: &str) -> Response<Full<Bytes>> {
    let Some(output) = page.output(id) else {
        return not_found();
    };

    let ctx = RenderContext::new(id, Inputs::from_query(query));
    let rendered = output.source().resolve(&ctx).await.and_then(render_table);

    match rendered {
        Ok(Some(payload)) => match serde_json::to_string(&payload) {
            Ok(body) => json_response(body),
            Err(e) => {
                error!("Output '{}' serialization failed: {}", id, e);
                error_response(&e.to_string())
            }
        },
        // No data yet: the glue script clears the table region.
        Ok(None) => json_response("null".to_string()),
        Err(e) => {
            error!("Output '{}' failed: {}", id, e);
            error_response(&e.to_string())
        }
    }
}

fn html_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn js_response(body: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/javascript; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn json_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn error_response(message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn not_found() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Not found")))
        .unwrap()
}
