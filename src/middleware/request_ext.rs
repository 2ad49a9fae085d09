//! Access to the bearer-token claims carried in request extensions.

use actix_web::HttpMessage;

use crate::models::Claims;

/// Claims storage shared by the middleware, which attaches them to the
/// `ServiceRequest`, and handlers, which read them back from the `HttpRequest`.
pub trait RequestExt {
    /// Claims of a verified bearer token; `None` for anonymous requests.
    fn get_claims(&self) -> Option<Claims>;

    fn attach_claims(&self, claims: Claims);
}

impl<T: HttpMessage> RequestExt for T {
    fn get_claims(&self) -> Option<Claims> {
        self.extensions().get::<Claims>().cloned()
    }

    fn attach_claims(&self, claims: Claims) {
        self.extensions_mut().insert(claims);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::claims_with;
    use actix_web::test::TestRequest;

    #[test]
    fn test_claims_attached_to_service_request_reach_handler_request() {
        let req = TestRequest::default().to_srv_request();
        assert!(req.get_claims().is_none());

        req.attach_claims(claims_with(&["patch:drinks"]));
        let http_req = req.request();
        let claims = http_req.get_claims().expect("claims");
        assert!(claims.has_permission("patch:drinks"));
    }
}
