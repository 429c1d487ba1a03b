//! Terminal rendering target.

use std::{
    cell::RefCell,
    io::{self, Write as _},
};

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing::warn;

use trolley::{
    controller::CartView,
    render::{CLEAR_LABEL, CartBodyView, CartPageView},
};

/// Writes cart state to a terminal.
#[derive(Debug)]
pub(crate) struct TerminalView<W> {
    out: RefCell<W>,
}

impl<W: io::Write> TerminalView<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_block(&self, text: &str) {
        if let Err(error) = writeln!(self.out.borrow_mut(), "{text}") {
            warn!(%error, "failed to write to terminal");
        }
    }
}

impl<W: io::Write> CartView for TerminalView<W> {
    fn show_item_count(&self, count: u64) {
        self.write_block(&format!("Items in cart: {count}"));
    }

    fn show_page(&self, page: CartPageView) {
        self.write_block(&format_page(&page));
    }

    fn show_success(&self, message: &str) {
        self.write_block(&format!("✓ {message}"));
    }

    fn show_error(&self, message: &str) {
        self.write_block(&format!("✗ {message}"));
    }
}

/// Lay out a cart page as text.
pub(crate) fn format_page(page: &CartPageView) -> String {
    let clear_state = if page.header.clear_enabled {
        "available"
    } else {
        "disabled"
    };

    let header = format!("{}  [{CLEAR_LABEL}: {clear_state}]", page.header.title);

    let body = match &page.body {
        CartBodyView::Empty { message } => message.clone(),
        CartBodyView::Items { rows, total } => {
            let mut builder = Builder::default();

            builder.push_record(["ID", "Name", "Price", "Qty", "Description", "Image"]);

            for row in rows {
                builder.push_record([
                    row.product_id.to_string(),
                    row.name.clone(),
                    row.price.clone(),
                    row.quantity.to_string(),
                    row.description.clone(),
                    row.image_src.clone(),
                ]);
            }

            let mut table = builder.build();

            table.with(Style::modern_rounded());
            table.modify(Columns::new(2..4), Alignment::right());

            format!("{table}\n{total}")
        }
    };

    format!("{header}\n{body}")
}
