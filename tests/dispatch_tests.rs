//! End-to-end dispatch tests, driving [`App::handle`] the way a host
//! gateway would.

use std::sync::{Arc, Mutex};

use serde_json::json;
use umi::{middleware, App, Captures, Environ, HandlerFn, Method, Request, Response, Router, Status};

/// Runs one dispatch cycle and collects the full gateway-visible exchange.
fn respond(app: &App, environ: Environ) -> (String, Vec<(String, String)>, Vec<u8>) {
    let mut status_line = String::new();
    let mut headers = Vec::new();
    let chunks = app.handle(environ, |status, header_list| {
        status_line = status.to_owned();
        headers = header_list.to_vec();
    });

    let mut body = Vec::new();
    for chunk in &chunks {
        body.extend_from_slice(chunk);
    }
    (status_line, headers, body)
}

fn health(_req: &Request, res: &mut Response, _params: &Captures) {
    res.send(Status::Ok, json!({"message": "Service is healthy"}));
}

#[test]
fn health_check_round_trip() {
    let app = App::new(Router::new().get("/health", health));

    let (status, headers, body) = respond(&app, Environ::new("GET", "/health"));

    assert_eq!(status, "200 OK");
    assert_eq!(body, br#"{"message":"Service is healthy"}"#);
    assert_eq!(
        headers,
        vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            ("Content-Length".to_owned(), body.len().to_string()),
        ]
    );
}

#[test]
fn post_handler_reads_the_json_body() {
    let store: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let create_user = {
        let store = Arc::clone(&store);
        move |req: &Request, res: &mut Response, _params: &Captures| {
            let Some(name) = req
                .body()
                .as_json()
                .and_then(|body| body.get("name"))
                .and_then(|name| name.as_str())
            else {
                res.send(Status::BadRequest, json!({"error": "missing name"}));
                return;
            };
            store.lock().unwrap().push(name.to_owned());
            res.send(Status::Created, json!({"name": name}));
        }
    };

    let app = App::new(Router::new().post("/users", create_user));

    let (status, _, body) = respond(
        &app,
        Environ::new("POST", "/users")
            .content_type("application/json")
            .body(r#"{"name": "Ada"}"#),
    );

    assert_eq!(status, "201 Created");
    assert_eq!(body, br#"{"name":"Ada"}"#);
    assert_eq!(*store.lock().unwrap(), vec!["Ada".to_owned()]);
}

#[test]
fn unmatched_path_gets_the_default_response() {
    let app = App::new(Router::new().get("/health", health));

    let (status, headers, body) = respond(&app, Environ::new("GET", "/nonexistent"));

    assert_eq!(status, "404 Not Found");
    assert_eq!(body, b"Route not found!");
    assert!(headers.is_empty());
}

#[test]
fn wrong_method_gets_the_default_response() {
    let app = App::new(Router::new().get("/health", health));

    let (status, _, _) = respond(&app, Environ::new("POST", "/health"));

    assert_eq!(status, "404 Not Found");
}

#[test]
fn unsupported_method_string_gets_the_default_response() {
    let app = App::new(Router::new().get("/health", health));

    let (status, _, body) = respond(&app, Environ::new("BREW", "/health"));

    assert_eq!(status, "404 Not Found");
    assert_eq!(body, b"Route not found!");
}

#[test]
fn first_registered_route_wins_over_later_more_specific_one() {
    let router = Router::new()
        .get("/users/{id}", |_req: &Request, res: &mut Response, params: &Captures| {
            res.send(Status::Ok, json!({"id": params.get("id"), "matched": "capture"}));
        })
        .get("/users/new", |_req: &Request, res: &mut Response, _params: &Captures| {
            res.send(Status::Ok, json!({"matched": "literal"}));
        });
    let app = App::new(router);

    let (_, _, body) = respond(&app, Environ::new("GET", "/users/new"));

    assert_eq!(body, br#"{"id":"new","matched":"capture"}"#);
}

#[test]
fn method_mismatch_keeps_scanning_later_entries() {
    let router = Router::new()
        .on(Method::Post, "/things/{id}", |_req: &Request, res: &mut Response, _params: &Captures| {
            res.send(Status::Created, "created");
        })
        .on(Method::Get, "/things/{id}", |_req: &Request, res: &mut Response, _params: &Captures| {
            res.send(Status::Ok, "fetched");
        });
    let app = App::new(router);

    let (status, _, body) = respond(&app, Environ::new("GET", "/things/7"));

    assert_eq!(status, "200 OK");
    assert_eq!(body, b"fetched");
}

#[test]
fn captures_and_queries_reach_the_handler() {
    let get_post = |_req: &Request, res: &mut Response, params: &Captures| {
        res.send(
            Status::Ok,
            json!({"user": params.get("user_id"), "post": params.get("post_id")}),
        );
    };
    let app = App::new(Router::new().get("/users/{user_id}/posts/{post_id}", get_post));

    let (_, _, body) = respond(&app, Environ::new("GET", "/users/7/posts/99").query("draft=1"));

    assert_eq!(body, br#"{"post":"99","user":"7"}"#);
}

#[test]
fn query_parameters_are_visible_to_handlers() {
    let search = |req: &Request, res: &mut Response, _params: &Captures| {
        let page = req.query("page").unwrap_or("1").to_owned();
        res.send(Status::Ok, json!({"page": page}));
    };
    let app = App::new(Router::new().get("/search", search));

    let (_, _, body) = respond(&app, Environ::new("GET", "/search").query("q=umi&page=3"));

    assert_eq!(body, br#"{"page":"3"}"#);
}

#[test]
fn global_middleware_runs_even_when_nothing_matches() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
    let global = {
        let log = Arc::clone(&log);
        move |_req: &Request| log.lock().unwrap().push("global")
    };

    let app = App::new(Router::new()).middleware(global);

    let (status, _, _) = respond(&app, Environ::new("GET", "/anywhere"));

    assert_eq!(status, "404 Not Found");
    assert_eq!(*log.lock().unwrap(), vec!["global"]);
}

#[test]
fn middleware_runs_global_then_route_then_handler() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let global = {
        let log = Arc::clone(&log);
        move |_req: &Request| log.lock().unwrap().push("global")
    };
    let scoped = {
        let log = Arc::clone(&log);
        move |_req: &Request| log.lock().unwrap().push("route")
    };
    let handler = {
        let log = Arc::clone(&log);
        move |_req: &Request, res: &mut Response, _params: &Captures| {
            log.lock().unwrap().push("handler");
            res.send(Status::Ok, "done");
        }
    };

    let app = App::new(
        Router::new().get_with("/work", vec![middleware::boxed(scoped)], handler),
    )
    .middleware(global);

    respond(&app, Environ::new("GET", "/work"));

    assert_eq!(*log.lock().unwrap(), vec!["global", "route", "handler"]);
}

#[test]
fn route_middleware_only_runs_for_its_own_route() {
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let a_mw = {
        let log = Arc::clone(&log);
        move |_req: &Request| log.lock().unwrap().push("a")
    };
    let b_mw = {
        let log = Arc::clone(&log);
        move |_req: &Request| log.lock().unwrap().push("b")
    };
    let ok = |_req: &Request, res: &mut Response, _params: &Captures| {
        res.send(Status::Ok, "ok");
    };

    let app = App::new(
        Router::new()
            .get_with("/a", vec![middleware::boxed(a_mw)], ok)
            .get_with("/b", vec![middleware::boxed(b_mw)], ok),
    );

    respond(&app, Environ::new("GET", "/b"));

    assert_eq!(*log.lock().unwrap(), vec!["b"]);
}

#[test]
fn unparsable_json_body_dispatches_with_an_absent_body() {
    let echo = |req: &Request, res: &mut Response, _params: &Captures| {
        assert!(req.body().is_none());
        res.send(Status::Ok, "handled");
    };
    let app = App::new(Router::new().post("/users", echo));

    let (status, _, body) = respond(
        &app,
        Environ::new("POST", "/users")
            .content_type("application/json")
            .body("{not json"),
    );

    assert_eq!(status, "200 OK");
    assert_eq!(body, b"handled");
}

#[test]
fn send_appends_to_handler_set_headers() {
    let tagged = |_req: &Request, res: &mut Response, _params: &Captures| {
        res.header("x-request-id", "abc").send(Status::Ok, "tagged");
    };
    let app = App::new(Router::new().get("/tagged", tagged));

    let (_, headers, _) = respond(&app, Environ::new("GET", "/tagged"));

    assert_eq!(headers.len(), 3);
    assert_eq!(headers[0], ("x-request-id".to_owned(), "abc".to_owned()));
    assert_eq!(headers[1].0, "Content-Type");
    assert_eq!(headers[2].0, "Content-Length");
}

#[test]
fn repeated_send_reaches_the_gateway_with_duplicate_headers() {
    let twice = |_req: &Request, res: &mut Response, _params: &Captures| {
        res.send(Status::Ok, "one").send(Status::Created, "two");
    };
    let app = App::new(Router::new().get("/twice", twice));

    let (status, headers, body) = respond(&app, Environ::new("GET", "/twice"));

    assert_eq!(status, "201 Created");
    assert_eq!(body, b"two");
    assert_eq!(headers.len(), 4);
}

#[test]
fn grouped_routes_dispatch_per_verb() {
    fn list(_req: &Request, res: &mut Response, _params: &Captures) {
        res.send(Status::Ok, "list");
    }
    fn create(_req: &Request, res: &mut Response, _params: &Captures) {
        res.send(Status::Created, "create");
    }
    fn patch(_req: &Request, res: &mut Response, _params: &Captures) {
        res.send(Status::Ok, "patch");
    }

    let app = App::new(Router::new().group(
        "/items",
        Vec::new(),
        [
            ("get", list as HandlerFn),
            ("POST", create),
            ("Patch", patch),
            ("purge", list),
        ],
    ));

    let (_, _, body) = respond(&app, Environ::new("GET", "/items"));
    assert_eq!(body, b"list");

    let (status, _, body) = respond(&app, Environ::new("POST", "/items"));
    assert_eq!(status, "201 Created");
    assert_eq!(body, b"create");

    let (_, _, body) = respond(&app, Environ::new("PATCH", "/items"));
    assert_eq!(body, b"patch");

    // "purge" was skipped at registration; a PURGE request finds nothing.
    let (status, _, _) = respond(&app, Environ::new("PURGE", "/items"));
    assert_eq!(status, "404 Not Found");
}

#[test]
fn one_handler_may_back_several_routes() {
    fn pong(_req: &Request, res: &mut Response, _params: &Captures) {
        res.send(Status::Ok, "pong");
    }

    let app = App::new(Router::new().get("/ping", pong).get("/ping/deep", pong));

    let (_, _, body) = respond(&app, Environ::new("GET", "/ping"));
    assert_eq!(body, b"pong");
    let (_, _, body) = respond(&app, Environ::new("GET", "/ping/deep"));
    assert_eq!(body, b"pong");
}

#[test]
fn built_in_health_handlers_answer_probes() {
    let app = App::new(
        Router::new()
            .get("/healthz", umi::health::liveness)
            .get("/readyz", umi::health::readiness),
    );

    let (status, _, body) = respond(&app, Environ::new("GET", "/healthz"));
    assert_eq!(status, "200 OK");
    assert_eq!(body, b"ok");

    let (_, _, body) = respond(&app, Environ::new("GET", "/readyz"));
    assert_eq!(body, b"ready");
}

#[test]
fn app_is_reusable_across_cycles() {
    let hits = Arc::new(Mutex::new(0));
    let count = {
        let hits = Arc::clone(&hits);
        move |_req: &Request, res: &mut Response, _params: &Captures| {
            *hits.lock().unwrap() += 1;
            res.send(Status::Ok, "counted");
        }
    };
    let app = App::new(Router::new().get("/count", count));

    for _ in 0..3 {
        let (status, _, _) = respond(&app, Environ::new("GET", "/count"));
        assert_eq!(status, "200 OK");
    }
    assert_eq!(*hits.lock().unwrap(), 3);
}
