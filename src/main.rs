use canteen_pos::{Config, Session, init_logger, menu};
use std::io::BufReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    // 2. Configuration
    let config = Config::from_env();

    // 3. Load catalog, then orders against it
    let mut session = Session::load(&config)?;

    // 4. Interactive loop
    let mut input = BufReader::new(std::io::stdin());
    let mut out = std::io::stdout();
    menu::run(
        &mut session,
        config.best_sellers_limit,
        &mut input,
        &mut out,
    )?;

    // 5. Persist orders and both reports
    session.save(&config)?;

    Ok(())
}
