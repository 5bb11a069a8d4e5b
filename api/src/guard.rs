use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest};
use rocket::Request;

use rocket_okapi::request::OpenApiFromRequest;

use service::error::GenericError;

/// The identity of the caller as asserted by the auth proxy in front of
/// the api. The proxy verifies the session and forwards the user's opaque
/// id in the `X-User-Id` header; we never see credentials here.
#[derive(OpenApiFromRequest, Debug)]
pub struct UserId(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for UserId {
    type Error = GenericError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match request.headers().get_one("X-User-Id") {
            Some(id) if !id.is_empty() => Outcome::Success(UserId(id.to_string())),
            _ => Outcome::Error((
                Status::Unauthorized,
                GenericError::Unauthorized("Missing user identity"),
            )),
        }
    }
}
