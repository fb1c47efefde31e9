//! The "Banking CLI" app's entry point.

use banking_cli::logic::{get_config, main_loop, DEFAULT_LOG_FILTER};
use banking_common::cli::helpers::Console;
use banking_common::BankingApplication;
use std::env;
use std::error::Error;
use std::io::{stdin, stdout};

/// The "Banking CLI" app's entry point.
///
/// The optional first argument names the amount policy: `permissive` or `strict`.
fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", DEFAULT_LOG_FILTER);
    }
    pretty_env_logger::init();

    let config = get_config(env::args().nth(1));
    log::info!("starting; config = {:?}", config);

    let mut app = BankingApplication::new(config);
    let mut console = Console::new(stdin().lock(), stdout().lock());

    main_loop(&mut app, &mut console)?;

    Ok(())
}
