//! 🏗 HTTP routing and responses

use std::io::Read;

use log::debug;
use room_booking_core::BookingMode;
use serde::Deserialize;
use tiny_http::{Header, Response};

use crate::handler::{ActionReply, DeskHandler};

/// The demo page, embedded so the binary is self-contained
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Body of `POST /api/book`
///
/// The count is read as a signed integer so that a negative input reaches
/// the engine as an invalid count instead of failing to parse.
#[derive(Deserialize)]
#[serde(default)]
struct BookingBody {
    count: i64,
    mode: BookingMode,
}

impl Default for BookingBody {
    fn default() -> Self {
        Self {
            count: 1,
            mode: BookingMode::Fresh,
        }
    }
}

/// Route the given HTTP request and send the response
pub fn handle(mut rq: tiny_http::Request, desk: &DeskHandler) {
    use tiny_http::Method::*;

    debug!("{} {}", rq.method(), rq.url());

    match (rq.method(), rq.url()) {
        (Options, _) => {
            let mut res = Response::empty(204);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
        }
        (Get, "/") | (Get, "/index.html") => {
            let res = Response::from_string(INDEX_HTML).with_header(
                Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap(),
            );
            respond(rq, res);
        }
        (Get, "/api/rooms") => respond_json(rq, 200, desk.rooms()),
        (Get, "/api/bookings") => respond_json(rq, 200, desk.bookings()),
        (Post, "/api/book") => {
            let booking = read_booking(&mut rq);
            let count = booking.count.clamp(0, u32::MAX as i64) as u32;
            respond_reply(rq, desk.book(count, booking.mode));
        }
        (Post, "/api/randomize") => respond_reply(rq, desk.randomize()),
        (Post, "/api/reset") => respond_reply(rq, desk.reset()),
        (Get, _) | (Post, _) => {
            let res = Response::from_string(
                "🛎 could not find the service you are looking for!

Valid requests are:
  GET  /
  GET  /api/rooms
  GET  /api/bookings
  POST /api/book
  POST /api/randomize
  POST /api/reset",
            )
            .with_status_code(404);
            respond(rq, res);
        }
        _ => {
            let mut res = Response::empty(405);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
        }
    }
}

/// Parse the booking body, treating anything unreadable as a zero count so
/// the engine rejects it with its own message.
fn read_booking(rq: &mut tiny_http::Request) -> BookingBody {
    let mut body = String::with_capacity(rq.body_length().unwrap_or(0));
    if rq.as_reader().read_to_string(&mut body).is_err() {
        body.clear();
    }
    serde_json::from_str(&body).unwrap_or(BookingBody {
        count: 0,
        mode: BookingMode::Fresh,
    })
}

fn respond_reply(rq: tiny_http::Request, reply: ActionReply) {
    let status = if reply.ok { 200 } else { 400 };
    let body = serde_json::to_string(&reply).expect("serializing the reply failed");
    respond_json(rq, status, body);
}

fn respond_json(rq: tiny_http::Request, status: u16, body: String) {
    let res = Response::from_string(body)
        .with_header(Header::from_bytes(b"Content-Type", b"application/json").unwrap())
        .with_status_code(status);
    respond(rq, res);
}

/// Add CORS headers to `res` and send it
fn respond<R: Read>(rq: tiny_http::Request, mut res: Response<R>) {
    add_response_cors_headers(&mut res);
    rq.respond(res).expect("HTTP response failed");
}

/// Add CORS headers to `res`
fn add_response_cors_headers<R: Read>(res: &mut Response<R>) {
    res.add_header(Header::from_bytes(b"Access-Control-Request-Method", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Origin", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Headers", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Expose-Headers", b"*").unwrap());
}
