// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard Poker CLI, prints the best 5 cards out of a 7 cards hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;

pub mod report;
use report::{HandSource, Report};

#[derive(Debug, Parser)]
#[command(about = "Finds the best poker hand out of 7 cards, jokers included")]
struct Cli {
    /// The hand cards, for example `TD TC 5H 5C 7C ?R ?B`.
    #[clap(required_unless_present = "random", num_args = 7)]
    cards: Vec<String>,
    /// Deal a random hand.
    #[clap(long, short, conflicts_with = "cards")]
    random: bool,
    /// Deal from a deck with the two jokers.
    #[clap(long, short, requires = "random")]
    jokers: bool,
    /// The random hand seed.
    #[clap(long, short, requires = "random")]
    seed: Option<u64>,
    /// Replace jokers in the best hand with concrete cards.
    #[clap(long)]
    resolve: bool,
    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
}

/// The tool configuration.
#[derive(Debug)]
struct Config {
    source: HandSource,
    resolve: bool,
    json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = if cli.random {
            HandSource::Random {
                jokers: cli.jokers,
                seed: cli.seed,
            }
        } else {
            HandSource::Tokens(cli.cards.join(" "))
        };

        Self {
            source,
            resolve: cli.resolve,
            json: cli.json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config::from(Cli::parse());
    let hand = config.source.hand()?;
    let report = Report::new(&hand, config.resolve)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
