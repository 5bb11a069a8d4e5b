mod guard;
mod mutation;
mod query;

use rocket_okapi::openapi_get_routes;

#[macro_use]
extern crate rocket;

use dotenvy::dotenv;
use mutation::*;
use query::*;
use rocket::{Build, Rocket};

use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub use guard::UserId;

#[catch(404)]
fn general_not_found() -> &'static str {
    "Api endpoint not found"
}

/// The full route list; `launch()` mounts these under `/api`.
pub fn routes() -> Vec<rocket::Route> {
    openapi_get_routes![
        get_players,
        get_leaderboard,
        get_upcoming_matches,
        get_recent_matches,
        get_my_team,
        create_team,
        add_to_roster,
        remove_from_roster,
    ]
}

pub async fn launch() -> Rocket<Build> {
    dotenv().ok();

    let db =
        sea_orm::Database::connect(std::env::var("DATABASE_URL").expect("DATABASE_URL not set"))
            .await
            .expect("Unable to connect to database");

    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .expect("Invalid CORS configuration");

    rocket::build()
        .manage(db)
        .attach(cors)
        .mount("/api", routes())
        .mount(
            "/api/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/api/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "./openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .register("/api", catchers![general_not_found])
}
