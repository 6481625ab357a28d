// File: ./src/client/middleware.rs
//! Tower middleware that stamps every feed request with the board's
//! `User-Agent` and a JSON `Accept` header.
use http::{HeaderValue, Request, header};
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug)]
pub struct FeedHeadersLayer {
    user_agent: String,
}

impl FeedHeadersLayer {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl<S> Layer<S> for FeedHeadersLayer {
    type Service = FeedHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FeedHeadersService {
            inner,
            user_agent: self.user_agent.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FeedHeadersService<S> {
    inner: S,
    user_agent: String,
}

impl<S, ReqBody> Service<Request<ReqBody>> for FeedHeadersService<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        let headers = req.headers_mut();
        // An unrepresentable agent string is dropped rather than failing the fetch.
        if let Ok(val) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(header::USER_AGENT, val);
        }
        headers
            .entry(header::ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));
        self.inner.call(req)
    }
}
