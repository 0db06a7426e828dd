//! Render configuration.

use serde::{Serialize, Deserialize};

use crate::{Report, Result, Size};

/// Stores the settings of a render.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Image size.
    pub size: Size,
    /// Progress reporting.
    pub report: Report,
}

/// Save to file.
pub fn save(file: &str, config: &Config) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(file)?;
    let encoded: Vec<u8> = bincode::serialize(config)?;
    file.write_all(&encoded)?;
    Ok(())
}

/// Open file.
///
/// Fails with `Error::Config` if the stored size is degenerate.
pub fn open(file: &str) -> Result<Config> {
    use std::fs::File;
    use std::io::Read;

    let mut file = File::open(file)?;
    let mut decoded: Vec<u8> = vec![];
    file.read_to_end(&mut decoded)?;
    Ok(bincode::deserialize(&decoded)?)
}
