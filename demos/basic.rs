//! Minimal umi example — CRUD-style JSON endpoints and health checks,
//! driven in-process the way a host gateway would drive them.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Each simulated request prints the status line, headers, and body, as if
//! you had run:
//!   curl http://app/health
//!   curl http://app/users
//!   curl http://app/users/1?verbose=1
//!   curl -X POST http://app/users \
//!        -H 'content-type: application/json' \
//!        -d '{"name": "Ada"}'
//!   curl -X DELETE http://app/users/1

use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::json;
use umi::environ::{PATH_INFO, REQUEST_METHOD};
use umi::{middleware, App, Captures, Environ, Request, Response, Router, Status};

#[derive(Clone, Serialize)]
struct User {
    id: u32,
    name: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let users = Arc::new(Mutex::new(vec![User { id: 1, name: "Ada".to_owned() }]));

    // GET /users
    let list_users = {
        let users = Arc::clone(&users);
        move |_req: &Request, res: &mut Response, _params: &Captures| {
            let users = users.lock().unwrap();
            res.send(Status::Ok, serde_json::to_value(&*users).unwrap());
        }
    };

    // GET /users/{id}
    let get_user = {
        let users = Arc::clone(&users);
        move |req: &Request, res: &mut Response, params: &Captures| {
            let id: u32 = match params.get("id").and_then(|raw| raw.parse().ok()) {
                Some(id) => id,
                None => {
                    res.send(Status::BadRequest, json!({"error": "invalid id"}));
                    return;
                }
            };
            if req.query("verbose").is_some() {
                println!("(verbose lookup for user {id})");
            }
            let users = users.lock().unwrap();
            match users.iter().find(|user| user.id == id) {
                Some(user) => res.send(Status::Ok, serde_json::to_value(user).unwrap()),
                None => res.send(Status::NotFound, json!({"error": "no such user"})),
            };
        }
    };

    // POST /users — reads {"name": "..."} from the JSON body
    let create_user = {
        let users = Arc::clone(&users);
        move |req: &Request, res: &mut Response, _params: &Captures| {
            let name = req
                .body()
                .as_json()
                .and_then(|body| body.get("name"))
                .and_then(|name| name.as_str());
            let Some(name) = name else {
                res.send(Status::BadRequest, json!({"error": "missing name"}));
                return;
            };
            let mut users = users.lock().unwrap();
            let user = User { id: users.len() as u32 + 1, name: name.to_owned() };
            users.push(user.clone());
            res.send(Status::Created, serde_json::to_value(&user).unwrap());
        }
    };

    // DELETE /users/{id}
    let delete_user = {
        let users = Arc::clone(&users);
        move |_req: &Request, res: &mut Response, params: &Captures| {
            let id: Option<u32> = params.get("id").and_then(|raw| raw.parse().ok());
            let mut users = users.lock().unwrap();
            users.retain(|user| Some(user.id) != id);
            res.send(Status::Ok, json!({"deleted": id}));
        }
    };

    let app = App::new(
        Router::new()
            .get("/health", |_req: &Request, res: &mut Response, _params: &Captures| {
                res.send(Status::Ok, json!({"message": "Service is healthy"}));
            })
            .get("/users", list_users)
            .get("/users/{id}", get_user)
            .post("/users", create_user)
            .delete("/users/{id}", delete_user),
    )
    .middleware(middleware::request_logger);

    call(&app, Environ::new("GET", "/health"));
    call(&app, Environ::new("GET", "/users"));
    call(&app, Environ::new("GET", "/users/1").query("verbose=1"));
    call(
        &app,
        Environ::new("POST", "/users")
            .content_type("application/json")
            .body(r#"{"name": "Grace"}"#),
    );
    call(&app, Environ::new("GET", "/users/2"));
    call(&app, Environ::new("DELETE", "/users/1"));
    call(&app, Environ::new("GET", "/nonexistent"));
}

/// Runs one dispatch cycle and prints the exchange, curl style.
fn call(app: &App, environ: Environ) {
    let method = environ.get(REQUEST_METHOD).unwrap_or("-").to_owned();
    let path = environ.get(PATH_INFO).unwrap_or("-").to_owned();
    println!("> {method} {path}");

    let body = app.handle(environ, |status_line, headers| {
        println!("< {status_line}");
        for (name, value) in headers {
            println!("< {name}: {value}");
        }
    });

    for chunk in &body {
        println!("{}", String::from_utf8_lossy(chunk));
    }
    println!();
}
