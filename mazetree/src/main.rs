//! Reads a maze file name and a command from stdin and prints the result.

use std::io;

use mazetree::{LOG_ENV, LOG_STYLE_ENV, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var(LOG_ENV).is_ok() {
        let e = env_logger::Env::new()
            .filter(LOG_ENV)
            .write_style(LOG_STYLE_ENV);
        env_logger::init_from_env(e);
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let outcome = session.run()?;
    log::debug!("session finished: {outcome:?}");
    Ok(())
}
