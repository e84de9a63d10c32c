pub mod mock {
    use crate::api::{ApiError, ApiRequest, ApiResponse, Transport};
    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::Value;
    use std::cell::RefCell;

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;

    pub const BASE_URL: &str = "http://mock.test/api";

    #[derive(Clone)]
    enum Reply {
        Json { status: u16, body: Value },
        Raw { status: u16, body: Vec<u8> },
        Hang,
    }

    struct Route {
        method: Method,
        path: String,
        reply: Reply,
    }

    /// In-process transport answering from registered routes and recording
    /// every request it sees.
    #[derive(Default)]
    pub struct MockTransport {
        routes: RefCell<Vec<Route>>,
        seen: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.expect("mock requires method");
            let path = when.path.expect("mock requires path");
            let reply = if then.hang {
                Reply::Hang
            } else if let Some(raw) = then.raw {
                Reply::Raw {
                    status: then.status.unwrap_or(200),
                    body: raw,
                }
            } else {
                Reply::Json {
                    status: then.status.unwrap_or(200),
                    body: then.body.unwrap_or_else(|| serde_json::json!({})),
                }
            };
            self.routes.borrow_mut().push(Route {
                method,
                path,
                reply,
            });
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.seen.borrow().clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            let url = format!("{}{}", BASE_URL, path);
            self.seen
                .borrow()
                .iter()
                .filter(|req| req.method == method && req.url == url)
                .count()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            let path = request
                .url
                .strip_prefix(BASE_URL)
                .unwrap_or(&request.url)
                .to_string();
            let reply = self
                .routes
                .borrow()
                .iter()
                .rev()
                .find(|route| route.method == request.method && route.path == path)
                .map(|route| route.reply.clone());

            match reply {
                Some(Reply::Json { status, body }) => Ok(ApiResponse {
                    status,
                    body: serde_json::to_vec(&body).unwrap_or_default(),
                }),
                Some(Reply::Raw { status, body }) => Ok(ApiResponse { status, body }),
                Some(Reply::Hang) => futures::future::pending().await,
                None => Err(ApiError::unknown(format!(
                    "No mock for {} {}",
                    request.method, path
                ))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw: Option<Vec<u8>>,
        hang: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, raw: &str) -> &mut Self {
            self.raw = Some(raw.as_bytes().to_vec());
            self
        }

        pub fn hang(&mut self) -> &mut Self {
            self.hang = true;
            self
        }
    }
}
