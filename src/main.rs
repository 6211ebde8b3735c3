use log::error;

use prd_dist::error::ErrorKind;
use prd_dist::runtime::parse_from_cli;

fn main() {
    const LOG_FILTER_VAR: &str = "PRD_DIST_LOG_FILTER";
    const LOG_WRITE_STYLE_VAR: &str = "PRD_DIST_WRITE_STYLE";
    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(LOG_FILTER_VAR, "warn")
            .write_style(LOG_WRITE_STYLE_VAR),
    )
    .init();
    let runtime = parse_from_cli();
    std::process::exit(match prd_dist::run(&runtime) {
        Ok(_) => 0,
        Err(err) => {
            match err.kind {
                ErrorKind::Interrupted => println!("\n{}", err.message),
                ErrorKind::Setup => error!("Error: {}", err.message),
            }
            1
        }
    });
}
