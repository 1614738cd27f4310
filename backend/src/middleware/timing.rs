//! Middleware reporting how long the server spent on each request.
//!
//! Adds an `x-process-time` header holding the elapsed wall-clock time in
//! seconds, measured from the moment the request enters the middleware until
//! the inner service has produced a response.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::debug;

/// Response header carrying the processing time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Timing middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use fitness_backend::middleware::ProcessTime;
///
/// let app = App::new().wrap(ProcessTime);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessTime;

impl<S, B> Transform<S, ServiceRequest> for ProcessTime
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ProcessTimeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ProcessTimeMiddleware { service }))
    }
}

/// Service wrapper produced by [`ProcessTime`].
pub struct ProcessTimeMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ProcessTimeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            let elapsed = started.elapsed().as_secs_f64();
            let status = res.status().as_u16();
            debug!(elapsed_seconds = elapsed, status, "request completed");
            if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
                res.response_mut()
                    .headers_mut()
                    .insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
            }
            Ok(res)
        })
    }
}
