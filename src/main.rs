//! Binary entry point: open the viewer, optionally with an options preset.
//!
//! ```text
//! strider [path/to/preset.toml]
//! ```

use strider::{Options, Viewer};

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder();

    if let Some(arg) = std::env::args().nth(1) {
        match Options::load(std::path::Path::new(&arg)) {
            Ok(options) => {
                log::info!("loaded options preset from {arg}");
                builder = builder.with_options(options);
            }
            Err(e) => {
                log::error!("failed to load options from {arg}: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
