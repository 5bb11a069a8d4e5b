use std::time::Duration;

use log::{error, info};

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenvy::dotenv().ok();

    let feed_url = std::env::var("FEED_URL").ok();
    let rankings_url = std::env::var("RANKINGS_URL").ok();
    if feed_url.is_some() || rankings_url.is_some() {
        tokio::spawn(async move {
            let db = sea_orm::Database::connect(
                std::env::var("DATABASE_URL").expect("DATABASE_URL not set"),
            )
            .await
            .expect("Unable to connect to database");
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                // Players first so match upserts and rosters see them.
                if let Some(url) = &rankings_url {
                    match service::feed::sync_players(&db, url).await {
                        Ok(count) => info!("Rankings sync completed, {} players", count),
                        Err(e) => error!("Rankings sync failed: {:?}", e),
                    }
                }
                if let Some(url) = &feed_url {
                    match service::feed::sync_matches(&db, url).await {
                        Ok(count) => info!("Feed sync completed, {} matches", count),
                        Err(e) => error!("Feed sync failed: {:?}", e),
                    }
                }
            }
        });
    }

    api::launch().await.launch().await?;
    Ok(())
}
