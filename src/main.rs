#[macro_use]
extern crate log;
extern crate clap;
extern crate simple_logger;
extern crate num_bigint;
extern crate bitcrust_script;

use std::cmp::Ordering;
use std::error::Error;
use std::process;

use clap::ArgMatches;
use num_bigint::BigInt;

use bitcrust_script::StackValue;
use bitcrust_script::config::Config;

fn main() {
    let matches = Config::matches().get_matches();

    let config = Config::from_args(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });
    simple_logger::init_with_level(config.log_level).expect("Couldn't initialize logger");

    let result = match matches.subcommand() {
        ("decode", Some(m)) => decode(&config, m),
        ("encode", Some(m)) => encode(m),
        ("truth", Some(m)) => truth(m),
        ("cmp", Some(m)) => cmp(m),
        _ => unreachable!(), // SubcommandRequiredElseHelp
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn value_of(matches: &ArgMatches, name: &str) -> Result<StackValue, Box<dyn Error>> {
    let hex = matches.value_of(name).unwrap_or("");
    let value = hex.parse::<StackValue>()?;
    debug!("{} = {:?}", name, value);
    Ok(value)
}

fn decode(config: &Config, matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let value = value_of(matches, "hex")?;
    if config.warn_non_minimal && !value.is_minimal() {
        warn!("{} is not minimally encoded; minimal is {}",
            value, StackValue::from(value.to_bigint()));
    }
    println!("{}", value.to_bigint());
    Ok(())
}

fn encode(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let number = matches.value_of("number").unwrap_or("");
    let n = number.parse::<BigInt>()?;
    println!("{}", StackValue::from(&n));
    Ok(())
}

fn truth(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let value = value_of(matches, "hex")?;
    println!("{}", value.is_true());
    Ok(())
}

fn cmp(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let left = value_of(matches, "left")?;
    let right = value_of(matches, "right")?;

    let ordering = match left.cmp_numeric(&right) {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    };
    println!("{}", ordering);
    println!("bytes {}", if left == right { "equal" } else { "differ" });
    Ok(())
}
