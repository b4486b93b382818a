//! Interactive menu
//!
//! The numbered-choice prompt loop around the session operations. Reads
//! selections line by line; `0` finishes the current prompt. All rendering
//! goes through the supplied writer so the whole loop is scriptable in
//! tests.

use crate::core::PosError;
use crate::reports;
use crate::session::Session;
use chrono::Local;
use std::io::{self, BufRead, Write};

const LINE_BREAK: &str = "--------------------------------------------------";

const MAIN_MENU_HEADER: &str = "Enter a choice...";
const MAIN_MENU_TEXT: [&str; 5] = [
    "Add order",
    "Delete order",
    "Sales Report",
    "Best sellers",
    "Press 0 to exit",
];

const ADD_ORDER_HEADER: &str = "Add products to the order...";
const ADD_ORDER_FOOTER: &str = "Press 0 to finish order...";

const DELETE_ORDER_HEADER: &str = "Choose an order to delete...";
const DELETE_ORDER_FOOTER: &str = "Press 0 to finish deleting orders...";

/// Main menu actions, in display order.
#[derive(Debug, Clone, Copy)]
enum MenuAction {
    AddOrder,
    DeleteOrder,
    SalesReport,
    BestSellers,
}

const ACTIONS: [MenuAction; 4] = [
    MenuAction::AddOrder,
    MenuAction::DeleteOrder,
    MenuAction::SalesReport,
    MenuAction::BestSellers,
];

/// Run the main menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    best_sellers_limit: usize,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out, "{MAIN_MENU_HEADER}")?;
        for (i, text) in MAIN_MENU_TEXT.iter().enumerate() {
            if i + 1 < MAIN_MENU_TEXT.len() {
                writeln!(out, "{}. {}", i + 1, text)?;
            } else {
                writeln!(out, "{text}")?;
            }
        }

        let Some(choice) = read_selection(input)? else {
            return Ok(());
        };
        if choice == 0 {
            return Ok(());
        }
        let Some(action) = usize::try_from(choice)
            .ok()
            .and_then(|c| ACTIONS.get(c - 1))
        else {
            writeln!(out, "Please enter a valid menu option!")?;
            writeln!(out, "{LINE_BREAK}")?;
            continue;
        };
        writeln!(out, "{LINE_BREAK}")?;

        match action {
            MenuAction::AddOrder => add_order(session, input, out)?,
            MenuAction::DeleteOrder => delete_order(session, input, out)?,
            MenuAction::SalesReport => {
                out.write_all(reports::render_sales_report(&session.sales_by_date()).as_bytes())?;
                writeln!(out, "{LINE_BREAK}")?;
            }
            MenuAction::BestSellers => {
                let top = session.best_sellers(best_sellers_limit);
                out.write_all(reports::render_best_sellers(&top, best_sellers_limit).as_bytes())?;
                writeln!(out, "{LINE_BREAK}")?;
            }
        }
    }
}

/// Build one order interactively, dated today. Committed on `0`; an order
/// with no products is dropped.
fn add_order<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{ADD_ORDER_HEADER}")?;
    for (i, product) in session.catalog().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, product)?;
    }
    writeln!(out, "{ADD_ORDER_FOOTER}")?;

    let mut order = session.create_order(Local::now().date_naive());
    loop {
        let Some(choice) = read_selection(input)? else {
            break;
        };
        if choice == 0 {
            break;
        }
        match session.add_product_to_order(&mut order, choice) {
            Ok(product) => writeln!(out, "{} added", product.name)?,
            Err(PosError::InvalidSelection { .. }) => {
                writeln!(out, "Please enter a valid product index!")?;
            }
            Err(e) => return Err(io::Error::other(e)),
        }
    }

    let summary = (!order.is_empty()).then(|| order.to_string());
    session.commit_order(order);
    if let Some(summary) = summary {
        writeln!(out, "{summary}")?;
    }
    writeln!(out, "{LINE_BREAK}")?;
    Ok(())
}

/// Delete orders one at a time until `0`. The listing is renumbered after
/// every deletion; removal itself goes through a stable order id.
fn delete_order<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{DELETE_ORDER_HEADER}")?;
    loop {
        for (i, order) in session.orders().orders().enumerate() {
            writeln!(out, "{}. {}", i + 1, order)?;
        }
        writeln!(out, "{DELETE_ORDER_FOOTER}")?;

        let Some(choice) = read_selection(input)? else {
            break;
        };
        if choice == 0 {
            break;
        }
        match session.remove_order(choice) {
            Ok(_) => writeln!(out, "Order with index {choice} deleted")?,
            Err(PosError::InvalidSelection { .. }) => {
                writeln!(out, "Please enter a valid order index!")?;
            }
            Err(e) => return Err(io::Error::other(e)),
        }
        writeln!(out, "{LINE_BREAK}")?;
    }
    Ok(())
}

/// Read one selection. `None` means end of input; anything that is not an
/// integer maps to `-1`, which every prompt rejects as out of range.
fn read_selection<R: BufRead>(input: &mut R) -> io::Result<Option<i64>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().parse().unwrap_or(-1)))
}
