use dapan_client::prelude::Api;
use rocket::fs::{relative, FileServer, Options};
use rocket::{launch, routes};
use rocket_dyn_templates::Template;

mod icons;
mod views;

#[cfg(test)]
mod tests;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger; the test harness builds more than one rocket
    let _ = env_logger::try_init();
}

#[launch]
fn rocket() -> _ {
    preprocess();

    let api = Api::from_env().expect("backend client must be constructible");
    log::info!("backend client configured; mounting views");

    // anchor the template dir to the crate, not the working directory
    let figment = rocket::Config::figment()
        .merge(("template_dir", relative!("templates")));

    rocket::custom(figment)
        // templating system, with the icon set registered
        .attach(Template::custom(|engines| icons::register(&mut engines.tera)))
        // shared backend handle
        .manage(api)
        // serve content from disk
        .mount(
            "/public",
            FileServer::new(relative!("public"), Options::Missing | Options::NormalizeDirs),
        )
        // register routes
        .mount(
            "/",
            routes![
                views::stock_list,
                views::stock_detail,
                views::market_stats,
                views::high_rise_stocks,
                views::stock_check,
                views::refresh_market_stats,
                views::refresh_high_rise_stocks,
                views::refresh_rise_fall_distribution,
                views::refresh_market_analysis,
            ],
        )
}
