// Dobles de prueba para el transporte HTTP

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::services::{ApiClient, HttpRequest, HttpResponse, HttpTransport, Method};

pub use futures::executor::block_on;

pub const TEST_BASE_URL: &str = "http://api.test";

/// Cede el turno una vez al executor
pub fn yield_now() -> impl Future<Output = ()> {
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    YieldNow(false)
}

/// JSON de un listado de productos con esos ids
pub fn products_json(ids: &[i64]) -> String {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("P{}", id), "description": "", "price": 10}))
        .collect();
    Value::Array(items).to_string()
}

type Reply = Result<HttpResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Transporte con respuestas en cola, en orden de llegada de peticiones
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, response: HttpResponse) {
        self.script.borrow_mut().push_back(Scripted::Ready(Ok(response)));
    }

    pub fn fail(&self, message: &str) {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Err(ApiError::Transport(message.to_string()))));
    }

    /// La respuesta llega cuando el test la envía por el canal
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".into()))),
            None => Err(ApiError::Transport("no scripted reply".into())),
        }
    }
}

/// Backend falso en proceso con las rutas reales:
/// `/health`, `/products`, `/login`, `/admin/products`.
pub struct FakeBackend {
    pub email: String,
    pub password: String,
    pub token: String,
    products: RefCell<Vec<Value>>,
    next_id: Cell<i64>,
    offline: Cell<bool>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            email: "admin@alixe.com".into(),
            password: "s3cret".into(),
            token: "token-123".into(),
            products: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            offline: Cell::new(false),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn client(self: &Rc<Self>) -> ApiClient {
        ApiClient::new(TEST_BASE_URL, self.clone())
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn product_count(&self) -> usize {
        self.products.borrow().len()
    }

    fn route(&self, request: &HttpRequest) -> HttpResponse {
        let path = request.url.strip_prefix(TEST_BASE_URL).unwrap_or(request.url.as_str());
        let body: Value = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(Value::Null);

        match (request.method, path) {
            (Method::Get, "/health") => HttpResponse::new(200, r#"{"status":"ok"}"#),
            (Method::Get, "/products") => {
                HttpResponse::new(200, Value::Array(self.products.borrow().clone()).to_string())
            }
            (Method::Post, "/login") => {
                if body["email"] == self.email.as_str() && body["password"] == self.password.as_str() {
                    HttpResponse::new(
                        200,
                        json!({"access_token": self.token, "token_type": "bearer"}).to_string(),
                    )
                } else {
                    HttpResponse::new(401, r#"{"detail":"Invalid email or password"}"#)
                }
            }
            (Method::Post, "/admin/products") => {
                let expected = format!("Bearer {}", self.token);
                match request.header("Authorization") {
                    None => HttpResponse::new(401, r#"{"detail":"Not authenticated"}"#),
                    Some(auth) if auth != expected => {
                        HttpResponse::new(403, r#"{"detail":"Invalid token"}"#)
                    }
                    Some(_) => {
                        let id = self.next_id.get();
                        self.next_id.set(id + 1);
                        let mut product = body;
                        product["id"] = json!(id);
                        self.products.borrow_mut().push(product.clone());
                        HttpResponse::new(201, product.to_string())
                    }
                }
            }
            _ => HttpResponse::new(404, r#"{"detail":"Not Found"}"#),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline.get() {
            return Err(ApiError::Transport("Network error: Failed to fetch".into()));
        }
        Ok(self.route(&request))
    }
}
