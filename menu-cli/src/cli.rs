//! Command line definition

use clap::{Args, Parser, Subcommand};
use menu_engine::cart::MAX_QUANTITY;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hotel-veg")]
#[command(author, version, about = "Hotel-Veg restaurant menu")]
#[command(
    after_help = "Environment:\n  MENU_DATA_DIR   Data directory (default ./data)\n  LOG_LEVEL       Log verbosity (default info)"
)]
pub struct Cli {
    /// Overrides MENU_DATA_DIR
    #[arg(long, global = true, env = "MENU_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the menu and order dishes
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },
    /// Review the order summary
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Manage the dish catalog
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// List dishes matching the search and category filter
    List {
        /// Case-insensitive match on the dish name
        #[arg(long, short, default_value = "")]
        search: String,
        /// Category, or "All"
        #[arg(long, short, default_value = "All")]
        filter: String,
    },
    /// Show the filter choices
    Filters,
    /// Show one dish in the showcase panel
    Show { id: String },
    /// Select dishes and add them to the cart
    Order {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Copies of the whole selection (1-99)
        #[arg(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_QUANTITY))
        )]
        quantity: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartCommand {
    /// Cart lines and totals
    Show {
        /// Leave GST out of the total
        #[arg(long, default_value_t = false)]
        no_gst: bool,
    },
    /// Remove every line of a dish
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// List the full catalog
    List,
    /// Add a dish
    Add(DishArgs),
    /// Remove a dish
    Remove { id: String },
}

/// Admin form fields
///
/// Everything is optional here so that a missing field is reported the same
/// way the form reports it.
#[derive(Args, Debug)]
pub struct DishArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<i64>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub rating: Option<i32>,
    /// Image path; the default picture is used when absent
    #[arg(long)]
    pub image: Option<String>,
    /// Animation path; the default animation is used when absent
    #[arg(long)]
    pub gif: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order() {
        let cli = Cli::try_parse_from(["hotel-veg", "menu", "order", "1", "4", "-q", "2"]).unwrap();
        match cli.command {
            Command::Menu {
                command: MenuCommand::Order { ids, quantity },
            } => {
                assert_eq!(ids, ["1", "4"]);
                assert_eq!(quantity, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_order_quantity_bounds() {
        for quantity in ["0", "100", "4000000000"] {
            let parsed = Cli::try_parse_from(["hotel-veg", "menu", "order", "1", "-q", quantity]);
            assert!(parsed.is_err(), "quantity {} should be rejected", quantity);
        }
        assert!(Cli::try_parse_from(["hotel-veg", "menu", "order", "1", "-q", "99"]).is_ok());
    }

    #[test]
    fn test_parse_admin_add_with_missing_fields() {
        let cli = Cli::try_parse_from(["hotel-veg", "admin", "add", "--name", "Dal Tadka"]).unwrap();
        match cli.command {
            Command::Admin {
                command: AdminCommand::Add(args),
            } => {
                assert_eq!(args.name.as_deref(), Some("Dal Tadka"));
                assert!(args.price.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_data_dir() {
        let cli =
            Cli::try_parse_from(["hotel-veg", "cart", "show", "--data-dir", "/tmp/menu"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/menu")));
    }
}
