//! Preview server.
//!
//! Every request re-reads the content directory and renders the page it
//! names; nothing is cached between requests.

mod lifecycle;
mod reply;
mod response;

use reply::reply;

use crate::{config::SiteConfig, debug, log};
use anyhow::Result;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Worker threads answering requests.
const WORKERS: usize = 4;

/// Bind, then answer requests until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::shutdown_on_ctrlc(Arc::clone(&server))?;

    log!(
        "serve";
        "http://{}/{}/{}",
        addr,
        config.site.default_locale,
        config.content.content_type
    );
    run_request_loop(&server, config)
}

fn run_request_loop(server: &Server, config: &SiteConfig) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()?;

    pool.scope(|scope| {
        for request in server.incoming_requests() {
            scope.spawn(move |_| {
                if let Err(e) = handle_request(request, config) {
                    log!("serve"; "request error: {e}");
                }
            });
        }
    });
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    debug!("serve"; "{} {}", request.method(), request.url());

    if !response::is_read_method(request.method()) {
        return response::respond_method_not_allowed(request);
    }

    let reply = reply(request.url(), config);
    response::respond(request, reply)
}
