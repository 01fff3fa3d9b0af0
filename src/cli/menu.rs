//! Interactive menus
//!
//! The menus read line-buffered choices from any `BufRead` and print to any
//! `Write`, so a whole session can be scripted in tests. End of input leaves
//! every menu and ends the session.

use crate::cli::args::MenuConfig;
use crate::core::{ChannelStores, SortOutcome, StoreKind, TransactionStore};
use crate::io::{display, export_json, list_matches};
use crate::types::{Channel, Field};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::warn;

/// Print `message`, then read one line of input
///
/// Returns `None` at end of input. The trailing newline and surrounding
/// whitespace are stripped.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask which store implementation to use
///
/// Returns `None` when the answer is not a valid choice or input ended.
pub fn prompt_store_kind<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<StoreKind>> {
    writeln!(output, "Choose implementation:")?;
    writeln!(output, "1. Linked List")?;
    writeln!(output, "2. Array")?;

    let answer = prompt_line(input, output, "Enter choice: ")?;
    Ok(match answer.as_deref() {
        Some("1") => Some(StoreKind::Linked),
        Some("2") => Some(StoreKind::Array),
        _ => None,
    })
}

/// Whether the caller should keep looping after a sub-menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Menu-driven session over one import
pub struct Menu<R, W> {
    input: R,
    output: W,
    stores: ChannelStores,
    config: MenuConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, stores: ChannelStores, config: MenuConfig) -> Self {
        Menu {
            input,
            output,
            stores,
            config,
        }
    }

    /// Give back the stores, e.g. to inspect them after a scripted session
    pub fn into_stores(self) -> ChannelStores {
        self.stores
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, message)
    }

    /// Read a numeric menu choice; anything unparsable reads as 0
    fn read_choice(&mut self) -> io::Result<Option<u32>> {
        let answer = self.prompt("Enter choice: ")?;
        Ok(answer.map(|text| text.parse().unwrap_or(0)))
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n=== MAIN MENU ===")?;
            for (number, channel) in (1..).zip(Channel::ALL) {
                writeln!(self.output, "{}. {} Transactions", number, channel)?;
            }
            writeln!(self.output, "5. Performance Comparison")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.read_choice()? else {
                return Ok(());
            };

            match choice {
                1..=4 => {
                    let channel = Channel::ALL[choice as usize - 1];
                    if self.channel_menu(channel)? == Flow::Quit {
                        return Ok(());
                    }
                }
                5 => self.compare_efficiency()?,
                6 => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn channel_menu(&mut self, channel: Channel) -> io::Result<Flow> {
        loop {
            let kind = self.stores.kind();
            let count = self.stores.get(channel).len();
            writeln!(
                self.output,
                "\n=== {} Transactions ({}) ({}) ===",
                channel, kind, count
            )?;
            writeln!(self.output, "1. Display First {} Transactions", self.config.display_limit)?;
            writeln!(self.output, "2. Display All Transactions")?;
            writeln!(self.output, "3. Search by Transaction Type (Linear)")?;
            writeln!(self.output, "4. Search by Location (Linear)")?;
            writeln!(self.output, "5. Search by Fraud Status (Linear)")?;
            writeln!(self.output, "6. Search by Transaction Type (Binary)")?;
            writeln!(self.output, "7. Search by Location (Binary)")?;
            writeln!(self.output, "8. Sort by Location")?;
            writeln!(self.output, "9. Sort by Transaction Type")?;
            writeln!(self.output, "10. Sort by Fraud Status")?;
            writeln!(self.output, "11. Export to JSON")?;
            writeln!(self.output, "12. Back to Main Menu")?;

            let Some(choice) = self.read_choice()? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice {
                1 => {
                    let limit = self.config.display_limit;
                    display(self.stores.get(channel), Some(limit), &mut self.output)?;
                    Flow::Continue
                }
                2 => {
                    display(self.stores.get(channel), None, &mut self.output)?;
                    Flow::Continue
                }
                3 => self.linear_search(channel, Field::TransactionType)?,
                4 => self.linear_search(channel, Field::Location)?,
                5 => self.linear_search(channel, Field::FraudStatus)?,
                6 => self.binary_search(channel, Field::TransactionType)?,
                7 => self.binary_search(channel, Field::Location)?,
                8 => self.sort(channel, Field::Location)?,
                9 => self.sort(channel, Field::TransactionType)?,
                10 => self.sort(channel, Field::FraudStatus)?,
                11 => self.export(channel)?,
                12 => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn linear_search(&mut self, channel: Channel, field: Field) -> io::Result<Flow> {
        let Some(query) = self.prompt(&format!("Enter {} to search (Linear): ", field))? else {
            return Ok(Flow::Quit);
        };

        let store = self.stores.get(channel);
        if store.is_empty() {
            writeln!(self.output, "No transactions to search.")?;
            return Ok(Flow::Continue);
        }

        let start = Instant::now();
        let found = store.linear_search(&query, field);
        let elapsed = start.elapsed();

        writeln!(self.output, "\nLinear Search Results for {} = {}:", field, query)?;
        list_matches(store, &query, field, self.config.display_limit, &mut self.output)?;
        writeln!(
            self.output,
            "Found {} matches in {:.6} seconds",
            found,
            elapsed.as_secs_f64()
        )?;
        Ok(Flow::Continue)
    }

    fn binary_search(&mut self, channel: Channel, field: Field) -> io::Result<Flow> {
        let Some(query) = self.prompt(&format!("Enter {} to search (Binary): ", field))? else {
            return Ok(Flow::Quit);
        };

        let store = self.stores.get(channel);
        if store.is_empty() {
            writeln!(self.output, "No transactions to search.")?;
            return Ok(Flow::Continue);
        }

        if store.sorted_by() != Some(field) {
            warn!(%channel, %field, "binary search on a store not sorted by the searched field");
            writeln!(
                self.output,
                "Warning: {} transactions are not sorted by {}; results may be incomplete.",
                channel, field
            )?;
        }

        let start = Instant::now();
        let outcome = store.binary_search(&query, field);
        let elapsed = start.elapsed();

        writeln!(self.output, "\nBinary Search Results for {} = {}:", field, query)?;
        if outcome.found {
            writeln!(
                self.output,
                "Found {} matches in {:.6} seconds",
                outcome.matches,
                elapsed.as_secs_f64()
            )?;
        } else {
            writeln!(
                self.output,
                "No matches found in {:.6} seconds",
                elapsed.as_secs_f64()
            )?;
        }
        Ok(Flow::Continue)
    }

    fn sort(&mut self, channel: Channel, field: Field) -> io::Result<Flow> {
        let store = self.stores.get_mut(channel);

        let start = Instant::now();
        let outcome = store.sort_by_field(field);
        let elapsed = start.elapsed();

        match outcome {
            SortOutcome::Sorted { count } => writeln!(
                self.output,
                "Successfully sorted {} transactions by {} (merge sort) in {:.6} seconds.",
                count,
                field,
                elapsed.as_secs_f64()
            )?,
            SortOutcome::NothingToSort { .. } => {
                writeln!(self.output, "No transactions to sort or already sorted.")?
            }
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self, channel: Channel) -> io::Result<Flow> {
        let default_name = format!("{}_transactions.json", channel.as_str().to_lowercase());
        let message = format!("Enter filename to export (default: {}): ", default_name);
        let Some(filename) = self.prompt(&message)? else {
            return Ok(Flow::Quit);
        };
        let filename = if filename.is_empty() {
            default_name
        } else {
            filename
        };

        match export_json(self.stores.get(channel), Path::new(&filename)) {
            Ok(count) => writeln!(
                self.output,
                "Successfully exported {} transactions to {}",
                count, filename
            )?,
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn compare_efficiency(&mut self) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "\nPerformance Comparison Summary:")?;
        writeln!(out, "1. Linked List Pros:")?;
        writeln!(out, "   - Appends never reallocate or move existing records")?;
        writeln!(out, "   - Sorting relinks nodes instead of moving records")?;
        writeln!(out, "   - No spare capacity held for unused elements")?;
        writeln!(out, "2. Array Pros:")?;
        writeln!(out, "   - Better memory locality (faster iteration)")?;
        writeln!(out, "   - Constant time random access")?;
        writeln!(out, "   - Binary search runs directly on the storage")?;
        writeln!(out, "3. Recommendation:")?;
        writeln!(out, "   - Use arrays when frequent searching is needed")?;
        writeln!(out, "   - Use linked lists when frequent modifications are needed")?;
        Ok(())
    }
}
