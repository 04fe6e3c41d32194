//! Bearer token middleware
//!
//! Resolves the caller identity from `Authorization: Bearer <jwt>` and stores
//! it in the request extensions as an [`AuthUser`]. Requests without the
//! header pass through untouched; a malformed header or a bad token is
//! rejected with 401.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

use crate::auth::jwt::JwtService;
use crate::auth::models::AuthUser;
use crate::types::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

pub struct JwtMiddleware {
    jwt_service: JwtService,
}

impl JwtMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self {
            jwt_service,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = JwtMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtMiddlewareService {
            service: Rc::new(service),
            jwt_service: self.jwt_service.clone(),
        }))
    }
}

pub struct JwtMiddlewareService<S> {
    service: Rc<S>,
    jwt_service: JwtService,
}

impl<S> JwtMiddlewareService<S> {
    fn resolve_identity(&self, req: &ServiceRequest) -> Result<Option<AuthUser>, ApiError> {
        let header = match req.headers().get(AUTHORIZATION) {
            Some(header) => header,
            None => return Ok(None),
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ApiError::Unauthorized("Invalid authorization header format".to_string())
            })?;

        let claims = self.jwt_service.validate_token(token)?;
        Ok(Some(AuthUser::from(claims)))
    }
}

impl<S, B> Service<ServiceRequest> for JwtMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.resolve_identity(&req) {
            Ok(Some(user)) => {
                debug!("Authenticated request from {} ({})", user.email, user.role);
                req.extensions_mut().insert(user);
            },
            Ok(None) => {},
            Err(err) => {
                debug!("Rejected bearer token on {}: {}", req.path(), err);
                return Box::pin(async move { Err(err.into()) });
            },
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await })
    }
}
