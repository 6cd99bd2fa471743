//! dropdowns: print and query the bundled reference lists
//!
//! Usage examples
//! --------------
//!
//! - Dataset names
//!   $ dropdowns datasets
//!
//! - A dataset through its builder (category defaults apply)
//!   $ dropdowns list us-states
//!   $ dropdowns list us-states --only TX,PR --order value-desc
//!
//! - One entry by value, or by label substring
//!   $ dropdowns lookup time-zones asia/tokyo
//!   $ dropdowns search mexican-states queretaro
//!
//! - Generated lists
//!   $ dropdowns numbers 1 10 --step 3
//!   $ dropdowns years next 3 --descending
//!
//! Add `--json` to any listing for `[{"value", "text"}]` output.
mod args;
mod logging;

use crate::args::{direction, CliArgs, Commands, YearSpan};
use anyhow::Context;
use clap::Parser;
use dropdowns_core::{dropdowns, DatasetKind, OptionItem, OptionQuery, SelectOption};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbosity.tracing_level_filter());

    #[cfg(feature = "json")]
    let json = args.json;
    #[cfg(not(feature = "json"))]
    let json = false;

    let d = dropdowns();

    match args.command {
        Commands::Datasets => {
            for kind in DatasetKind::ALL {
                println!("{kind}");
            }
        }

        Commands::List {
            dataset,
            only,
            exclude,
            order,
        } => {
            let kind = parse_kind(&dataset)?;
            let mut query = OptionQuery::new().only(only).exclude(exclude);
            if let Some(order) = order {
                query = query.order(order.into());
            }
            let items = d.options(kind, &query);
            tracing::info!(dataset = %kind, count = items.len(), "listed options");
            print_items(&items, json)?;
        }

        Commands::Lookup { dataset, value } => {
            let item = lookup(&dataset, &value)?;
            print_items(std::slice::from_ref(&item), json)?;
        }

        Commands::Search { dataset, query } => {
            let kind = parse_kind(&dataset)?;
            let hits = d.search(kind, &query);
            if hits.is_empty() {
                eprintln!("No {kind} entries matching: {query}");
            } else {
                print_items(&hits, json)?;
            }
        }

        Commands::Numbers {
            start,
            end,
            step,
            descending,
        } => {
            let numbers = d
                .numbers()
                .range(start, end)
                .step(step)
                .direction(direction(descending))
                .build()
                .context("invalid number range")?;
            print_items(&flatten(&numbers), json)?;
        }

        Commands::Years { span } => {
            let years = d.years();
            let list = match span {
                YearSpan::Last { count, ascending } => years
                    .last_with(count, direction(!ascending))
                    .context("invalid year count")?,
                YearSpan::Next { count, descending } => years
                    .next_with(count, direction(descending))
                    .context("invalid year count")?,
                YearSpan::Range {
                    start,
                    end,
                    descending,
                } => years.range(start, end, direction(descending)),
            };
            print_items(&flatten(&list), json)?;
        }
    }

    Ok(())
}

fn parse_kind(name: &str) -> anyhow::Result<DatasetKind> {
    name.parse::<DatasetKind>()
        .with_context(|| "run `dropdowns datasets` for the accepted names")
}

/// A miss is an error so scripts can tell it apart from a hit by exit status.
fn lookup(dataset: &str, value: &str) -> anyhow::Result<OptionItem> {
    let kind = parse_kind(dataset)?;
    dropdowns()
        .lookup(kind, value)
        .with_context(|| format!("no {kind} entry with value: {value}"))
}

fn flatten<T: SelectOption>(items: &[T]) -> Vec<OptionItem> {
    items.iter().map(OptionItem::from_option).collect()
}

fn print_items(items: &[OptionItem], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(items);
    }
    let width = items.iter().map(|i| i.value.chars().count()).max().unwrap_or(0);
    for item in items {
        println!("{:<width$}  {}", item.value, item.text);
    }
    Ok(())
}

#[cfg(feature = "json")]
fn print_json(items: &[OptionItem]) -> anyhow::Result<()> {
    println!("{}", dropdowns_core::api::to_json(items)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_json(_items: &[OptionItem]) -> anyhow::Result<()> {
    anyhow::bail!("built without the `json` feature")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hit_returns_the_option() {
        let item = lookup("us_states", " tx ").unwrap();
        assert_eq!(item, OptionItem::new("TX", "Texas"));
    }

    #[test]
    fn lookup_miss_is_an_error() {
        let err = lookup("us-states", "ZZ").unwrap_err();
        assert_eq!(err.to_string(), "no us-states entry with value: ZZ");
        assert!(lookup("planets", "earth").is_err());
    }
}
