use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue, CACHE_CONTROL},
    Error,
};
use futures_util::future::{ok, Ready};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Data documents change with every content edit; the wasm bundle and media
/// are versioned by deploy.
pub fn cache_policy(path: &str) -> &'static str {
    if path.starts_with("/data/") {
        "no-cache"
    } else if ["/pkg/", "/images/", "/docs/", "/style/"]
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        "public, max-age=86400"
    } else {
        "no-cache"
    }
}

const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval' https://cdn.tailwindcss.com; style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; frame-src https://www.youtube.com; frame-ancestors 'none'",
    ),
];

/// Security and cache headers for everything the static server returns
pub struct StaticHeaders;

impl<S, B> Transform<S, ServiceRequest> for StaticHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = StaticHeadersMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(StaticHeadersMiddleware { service })
    }
}

pub struct StaticHeadersMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StaticHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cache = cache_policy(req.path());
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();

            for (name, value) in SECURITY_HEADERS {
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }
            headers.insert(CACHE_CONTROL, HeaderValue::from_static(cache));

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::cache_policy;

    #[test]
    fn data_documents_are_revalidated() {
        assert_eq!(cache_policy("/data/projects.json"), "no-cache");
        assert_eq!(cache_policy("/projects/2"), "no-cache");
    }

    #[test]
    fn bundle_and_media_are_cached() {
        assert_eq!(cache_policy("/pkg/portfolio_bg.wasm"), "public, max-age=86400");
        assert_eq!(cache_policy("/images/profile/b.jpg"), "public, max-age=86400");
    }
}
