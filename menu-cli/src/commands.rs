//! Command handlers - one per subcommand, printing to stdout

use anyhow::Result;
use menu_engine::session::stars;
use menu_engine::{MenuSession, MenuState, format_price, view};
use shared::models::{CategoryFilter, Dish, DishCreate, menu_filters};

use crate::cli::{AdminCommand, CartCommand, DishArgs, MenuCommand};

pub fn menu(state: &MenuState, command: MenuCommand) -> Result<()> {
    let catalog = state.catalog_store()?;

    match command {
        MenuCommand::List { search, filter } => {
            let filter = CategoryFilter::parse(&filter);
            let dishes = view(catalog.dishes(), &search, &filter);
            if dishes.is_empty() {
                println!("No dishes match.");
            }
            for dish in dishes {
                print_dish_row(dish);
            }
        }
        MenuCommand::Filters => {
            for filter in menu_filters() {
                println!("{}", filter);
            }
        }
        MenuCommand::Show { id } => {
            let mut session = MenuSession::new();
            session.show_dish(catalog.dishes(), &id)?;
            let panel = session.showcase(catalog.dishes());
            println!("{}", panel.name);
            if let Some(rating) = panel.rating {
                println!("{}", stars(rating));
            }
            println!("{}", panel.description);
            println!("{}", panel.gif);
        }
        MenuCommand::Order { ids, quantity } => {
            let mut cart = state.cart_store()?;
            let mut session = MenuSession::new();
            for id in &ids {
                catalog.require(id)?;
                if !session.selection().contains(id) {
                    session.toggle(id);
                }
            }
            session.set_quantity(quantity)?;

            let appended = session.add_to_cart(catalog.dishes(), &mut cart)?;
            println!("Added {} item(s) to the cart ({} total).", appended, cart.count());
        }
    }
    Ok(())
}

pub fn cart(state: &MenuState, command: CartCommand) -> Result<()> {
    let mut cart = state.cart_store()?;

    match command {
        CartCommand::Show { no_gst } => {
            println!("Cart ({})", cart.count());
            if cart.is_empty() {
                println!("Your cart is empty.");
            }
            for line in cart.summary() {
                println!(
                    "{:>6}  {:<20} {:>3} x {:>6} = {:>7}",
                    line.id,
                    line.name,
                    line.units,
                    format_price(line.unit_price),
                    format_price(line.line_total)
                );
            }

            let totals = cart.totals(!no_gst);
            println!("Subtotal: {}", format_price(totals.subtotal));
            if totals.include_gst {
                println!("GST (18%): {}", format_price(totals.gst));
            }
            println!("Total: {}", format_price(totals.total));
        }
        CartCommand::Remove { id } => {
            let removed = cart.remove_item(&id)?;
            println!("Removed {} item(s); {} left in the cart.", removed, cart.count());
        }
    }
    Ok(())
}

pub fn admin(state: &MenuState, command: AdminCommand) -> Result<()> {
    let mut catalog = state.catalog_store()?;

    match command {
        AdminCommand::List => {
            for dish in catalog.dishes() {
                print_dish_row(dish);
                println!("        {}", dish.description);
                println!("        image: {}  gif: {}", dish.image, dish.gif);
            }
        }
        AdminCommand::Add(args) => {
            let dish = catalog.add(dish_create(args))?;
            println!("Added {} ({})", dish.name, dish.id);
        }
        AdminCommand::Remove { id } => {
            if catalog.remove(&id)? {
                println!("Removed dish {}", id);
            } else {
                println!("No dish {}; catalog unchanged.", id);
            }
        }
    }
    Ok(())
}

fn dish_create(args: DishArgs) -> DishCreate {
    DishCreate {
        name: args.name.unwrap_or_default(),
        category: args.category.unwrap_or_default(),
        price: args.price,
        description: args.description.unwrap_or_default(),
        rating: args.rating.unwrap_or(0),
        image: args.image,
        gif: args.gif,
    }
}

fn print_dish_row(dish: &Dish) {
    println!(
        "{:>6}  {:<20} {:<13} {:>6}  {}",
        dish.id,
        dish.name,
        dish.category,
        format_price(dish.price),
        stars(dish.rating)
    );
}
