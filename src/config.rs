//! Configuration of the bitcrust-script tool
//!
//! Settings come from an optional toml-file (`--config`) and are
//! overridden by the command line; each `-d` raises the log level one step.
//!
//! ```toml
//! log_level = "info"
//! warn_non_minimal = false
//! ```

use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::Level;
use toml;


#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Toml(toml::de::Error),
    InvalidLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigError::Io(ref err) => write!(f, "Can't read config file: {}", err),
            ConfigError::Toml(ref err) => write!(f, "Invalid config file: {}", err),
            ConfigError::InvalidLevel(ref level) => write!(f, "Invalid log level {:?}", level),
        }
    }
}

impl error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}


/// Contents of the toml config file; all keys are optional
#[derive(Deserialize, Serialize, Debug, Default, PartialEq)]
pub struct ConfigFile {
    pub log_level: Option<String>,
    pub warn_non_minimal: Option<bool>,
}

impl ConfigFile {

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile, ConfigError> {
        let mut f = File::open(path)?;
        let mut s = String::new();
        f.read_to_string(&mut s)?;
        Ok(toml::from_str(&s)?)
    }
}


#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: Level,

    /// Log a warning when decoding a scriptnum that is not minimally encoded
    pub warn_non_minimal: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            log_level: Level::Warn,
            warn_non_minimal: true,
        }
    }
}

impl Config {

    /// Applies the settings of a config file over the defaults
    pub fn from_file_contents(file: &ConfigFile) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(ref level) = file.log_level {
            config.log_level = Level::from_str(level)
                .map_err(|_| ConfigError::InvalidLevel(level.clone()))?;
        }
        if let Some(warn) = file.warn_non_minimal {
            config.warn_non_minimal = warn;
        }
        Ok(config)
    }

    pub fn from_args(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let mut config = match matches.value_of("config") {
            Some(path) => Config::from_file_contents(&ConfigFile::from_file(path)?)?,
            None => Config::default(),
        };

        for _ in 0..matches.occurrences_of("debug") {
            config.log_level = more_verbose(config.log_level);
        }
        Ok(config)
    }

    pub fn matches<'a, 'b>() -> App<'a, 'b> {
        App::new("bitcrust-script")
            .version(crate_version!())
            .about("Inspects script stack values")
            .setting(AppSettings::SubcommandRequiredElseHelp)
            .arg(Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("Location of a toml config file"))
            .arg(Arg::with_name("debug")
                .short("d")
                .long("debug")
                .multiple(true)
                .help("Turn debugging information on"))
            .subcommand(SubCommand::with_name("decode")
                .about("Prints the scriptnum value of a hex stack item")
                .arg(Arg::with_name("hex")
                    .required(true)
                    .index(1)))
            .subcommand(SubCommand::with_name("encode")
                .about("Prints the stack item of a decimal scriptnum")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(Arg::with_name("number")
                    .required(true)
                    .index(1)))
            .subcommand(SubCommand::with_name("truth")
                .about("Prints the boolean value of a hex stack item")
                .arg(Arg::with_name("hex")
                    .required(true)
                    .index(1)))
            .subcommand(SubCommand::with_name("cmp")
                .about("Compares two hex stack items as numbers and as bytes")
                .arg(Arg::with_name("left")
                    .required(true)
                    .index(1))
                .arg(Arg::with_name("right")
                    .required(true)
                    .index(2)))
    }
}

fn more_verbose(level: Level) -> Level {
    match level {
        Level::Error => Level::Warn,
        Level::Warn => Level::Info,
        Level::Info => Level::Debug,
        Level::Debug | Level::Trace => Level::Trace,
    }
}
