use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::{JsonSchema, Map};
use rocket_okapi::response::OpenApiResponderInner;
use std::fmt::Debug;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum GenericError {
    #[response(status = 500)]
    DatabaseError(&'static str),
    #[response(status = 500)]
    UnknownError(&'static str),
    #[response(status = 404)]
    NotFound(&'static str),
    #[response(status = 400)]
    BadRequest(&'static str),
    #[response(status = 401)]
    Unauthorized(&'static str),
    #[response(status = 502)]
    FeedError(&'static str),
    RosterError(RosterError),
    TeamError(TeamError),
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum RosterError {
    #[response(status = 403)]
    TeamFull(&'static str),
    #[response(status = 409)]
    AlreadyRostered(&'static str),
    #[response(status = 404)]
    PlayerNotFound(&'static str),
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum TeamError {
    #[response(status = 409)]
    AlreadyOwnsTeam(&'static str),
    #[response(status = 404)]
    NotFound(&'static str),
}

impl From<RosterError> for GenericError {
    fn from(e: RosterError) -> Self {
        Self::RosterError(e)
    }
}

impl From<TeamError> for GenericError {
    fn from(e: TeamError) -> Self {
        Self::TeamError(e)
    }
}

impl OpenApiResponderInner for GenericError {
    fn responses(_: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::okapi::openapi3::{RefOr, Response as OpenApiResponse};

        let mut responses = Map::new();
        for (status, description) in [
            ("400", "The request is wrongly formatted or refers to data that does not exist."),
            ("401", "The request is missing the caller's identity."),
            ("403", "The request is valid but not allowed, such as adding to a full roster."),
            ("404", "The requested resource does not exist."),
            ("409", "The resource already exists, such as a player already on the roster."),
            ("500", "Something went wrong on the server."),
            ("502", "The upstream score feed could not be reached or understood."),
        ] {
            responses.insert(
                status.to_string(),
                RefOr::Object(OpenApiResponse {
                    description: description.to_string(),
                    ..Default::default()
                }),
            );
        }
        Ok(Responses {
            responses,
            ..Default::default()
        })
    }
}
