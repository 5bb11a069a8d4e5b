use std::env;
fn main() {
    dotenvy::dotenv().ok();

    // FEED_URL is optional, the server runs without the sync task.
    let required_vars = ["DATABASE_URL"];

    for &var in &required_vars {
        match env::var(var) {
            Ok(value) => {
                println!("{} is set to {}", var, value);
            }
            Err(_) => {
                println!(
                    "cargo:warning=Required environment variable {} is not set.",
                    var
                );
            }
        }
    }
}
