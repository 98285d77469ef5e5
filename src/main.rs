use gallery_updater::{config::Config, gallery, pool::Pool, update::Updater, Error};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_exe() {
        Ok(config) => config,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    let pool = match Pool::load_or_curated(&config.pool_path()) {
        Ok(pool) => pool,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    let updater = Updater::new(config.gallery_path(), pool);

    match updater.run(&mut rand::thread_rng()) {
        Ok(entry) => println!("Successfully added: {}", entry.title),
        Err(err) => report(&err),
    }
}

// Message shapes double as the failure signal for the scheduler, keep
// them stable.
fn report(err: &Error) {
    match err {
        Error::Gallery(gallery::Error::NotFound(path)) => {
            println!("Error: {} not found.", path.display());
        }
        Error::Gallery(err @ (gallery::Error::Read { .. } | gallery::Error::Parse(_))) => {
            println!("Error reading JSON: {err}");
        }
        Error::Gallery(err @ (gallery::Error::Serialize(_) | gallery::Error::Write { .. })) => {
            println!("Error writing JSON: {err}");
        }
        err => println!("Error: {err}"),
    }
}
