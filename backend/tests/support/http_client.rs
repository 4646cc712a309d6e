//! awc helpers recording each response into the scenario world.

use actix_web::http::Method;
use awc::Client;
use scoops_backend::domain::TRACE_ID_HEADER;
use serde_json::Value;

use crate::harness::{SharedWorld, with_world_async};

/// Request body variants the scenarios send.
pub(crate) enum Payload {
    Empty,
    Form(Vec<(String, String)>),
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

/// Send a request and store status, body and `trace-id` in the world.
pub(crate) fn perform_request(world: &SharedWorld, method: Method, path: &str, payload: Payload) {
    let path = path.to_owned();
    let captured = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Payload::Empty => request.send().await.expect("request"),
            Payload::Form(fields) => request.send_form(&fields).await.expect("form request"),
        };
        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.body().await.expect("body");
        let body = serde_json::from_slice(&body).expect("json body");
        CapturedResponse {
            status,
            trace_id,
            body,
        }
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = Some(captured.body);
}

/// Last recorded status, panicking if no request was sent.
pub(crate) fn last_status(world: &SharedWorld) -> u16 {
    world.borrow().last_status.expect("a request was sent")
}

/// Last recorded JSON body, panicking if no request was sent.
pub(crate) fn last_body(world: &SharedWorld) -> Value {
    world.borrow().last_body.clone().expect("a request was sent")
}
