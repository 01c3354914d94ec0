use std::{fs::File, io::BufReader, path::Path, process::ExitCode};

use error::InputError;
use options::Config;

mod counter;
mod error;
mod options;

fn open_input(path: &Path) -> Result<File, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.display().to_string(),
        });
    }

    File::open(path).map_err(|source| InputError::Open {
        path: path.display().to_string(),
        source,
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;

    // Dropped on every exit path once counting is done.
    let file = open_input(&config.path)?;

    let counts = counter::count(BufReader::new(file), &config.metrics);

    for (label, value) in counter::report(&counts, &config.metrics) {
        println!("{label}: {value}");
    }

    Ok(ExitCode::SUCCESS)
}
