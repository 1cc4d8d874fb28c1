//! HTTP response handlers.

use anyhow::{Result, anyhow};
use percent_encoding::{CONTROLS, utf8_percent_encode};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use super::reply::Reply;

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

/// Send a reply; `HEAD` gets the same status and headers without a body.
pub fn respond(request: Request, reply: Reply) -> Result<()> {
    match reply {
        Reply::Page(body) => send_body(request, 200, HTML, body.into_bytes()),
        Reply::Redirect(location) => respond_redirect(request, &location),
        Reply::NotFound => send_body(request, 404, PLAIN, b"404 Not Found".to_vec()),
    }
}

/// Anything but `GET` and `HEAD`.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_data(b"405 Method Not Allowed".to_vec())
        .with_status_code(StatusCode(405))
        .with_header(make_header("Content-Type", PLAIN)?)
        .with_header(make_header("Allow", "GET, HEAD")?);
    request.respond(response)?;
    Ok(())
}

/// Non-ASCII bytes in the target are percent-encoded; header values are ASCII.
fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let location = utf8_percent_encode(location, CONTROLS).to_string();
    let response =
        Response::empty(StatusCode(302)).with_header(make_header("Location", &location)?);
    request.respond(response)?;
    Ok(())
}

pub fn is_read_method(method: &Method) -> bool {
    matches!(method, Method::Get | Method::Head)
}

fn send_body(request: Request, status: u16, content_type: &str, body: Vec<u8>) -> Result<()> {
    let header = make_header("Content-Type", content_type)?;
    if request.method() == &Method::Head {
        let response = Response::empty(StatusCode(status)).with_header(header);
        request.respond(response)?;
        return Ok(());
    }

    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow!("invalid header `{key}: {value}`"))
}
