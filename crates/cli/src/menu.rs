//! Numbered text menu over an [`Inventory`].

use std::io::{BufRead, Write};

use anyhow::Context;
use stockroom_inventory::{
    Inventory, Price, Product, ProductPatch, ProductStore, Supplier, SupplierListing,
};

const MENU: &str = "
=== INVENTORY ===
1. Add product
2. Show inventory
3. Find product
4. Modify product
5. Remove product
6. Total value
7. Products by supplier
8. Save and exit";

/// Interactive loop reading choices from `input` and writing to `output`.
///
/// Domain errors are shown to the user and the loop continues. End of input
/// behaves like "save and exit".
pub struct Menu<R, W> {
    input: R,
    output: W,
}

enum Flow {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run<S: ProductStore>(&mut self, inventory: &mut Inventory<S>) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                writeln!(self.output)?;
                tracing::info!("end of input; saving");
                return inventory.save().context("failed to save inventory at end of input");
            };

            let flow = match choice.parse::<u8>() {
                Ok(1) => self.add(inventory)?,
                Ok(2) => self.show(inventory)?,
                Ok(3) => self.find(inventory)?,
                Ok(4) => self.modify(inventory)?,
                Ok(5) => self.remove(inventory)?,
                Ok(6) => self.total(inventory)?,
                Ok(7) => self.by_supplier(inventory)?,
                Ok(8) => self.save_and_exit(inventory)?,
                _ => {
                    writeln!(self.output, "Unknown option: {choice}")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, with a blank answer mapped to `None`.
    fn prompt_optional(&mut self, label: &str) -> anyhow::Result<Option<Option<String>>> {
        Ok(self
            .prompt(label)?
            .map(|answer| (!answer.is_empty()).then_some(answer)))
    }

    fn add<S: ProductStore>(&mut self, inventory: &mut Inventory<S>) -> anyhow::Result<Flow> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(price) = self.prompt("Price: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(stock) = self.prompt("Stock: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(supplier_code) = self.prompt_optional("Supplier code: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(supplier_name) = self.prompt_optional("Supplier name: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(supplier_contact) = self.prompt_optional("Supplier contact: ")? else {
            return Ok(Flow::Continue);
        };

        let Ok(price) = price.parse::<f64>() else {
            writeln!(self.output, "Invalid price '{price}'")?;
            return Ok(Flow::Continue);
        };
        let price = match Price::new(price) {
            Ok(price) => price,
            Err(e) => {
                writeln!(self.output, "Error: {e}")?;
                return Ok(Flow::Continue);
            }
        };
        let Ok(stock) = stock.parse::<u64>() else {
            writeln!(self.output, "Invalid stock '{stock}': expected a whole number >= 0")?;
            return Ok(Flow::Continue);
        };

        let supplier = Supplier {
            code: supplier_code,
            name: supplier_name,
            contact: supplier_contact,
        };
        match inventory.add_product(Product::new(code, name, price, stock, supplier)) {
            Ok(()) => writeln!(self.output, "Product added")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn show<S: ProductStore>(&mut self, inventory: &Inventory<S>) -> anyhow::Result<Flow> {
        if inventory.is_empty() {
            writeln!(self.output, "The inventory is empty")?;
        }
        for line in inventory.list_all() {
            writeln!(self.output, "{line}")?;
        }
        Ok(Flow::Continue)
    }

    fn find<S: ProductStore>(&mut self, inventory: &Inventory<S>) -> anyhow::Result<Flow> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(Flow::Continue);
        };
        match inventory.find(&code) {
            Some(product) => writeln!(self.output, "{product}")?,
            None => writeln!(self.output, "No product with code {code}")?,
        }
        Ok(Flow::Continue)
    }

    fn modify<S: ProductStore>(&mut self, inventory: &mut Inventory<S>) -> anyhow::Result<Flow> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(Flow::Continue);
        };
        if inventory.find(&code).is_none() {
            writeln!(self.output, "No product with code {code}")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Leave blank to keep the current value.")?;
        let Some(name) = self.prompt_optional("New name: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(price) = self.prompt_optional("New price: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(stock) = self.prompt_optional("New stock: ")? else {
            return Ok(Flow::Continue);
        };

        let mut patch = ProductPatch {
            name,
            ..ProductPatch::default()
        };
        if let Some(price) = price {
            let Ok(price) = price.parse::<f64>() else {
                writeln!(self.output, "Invalid price '{price}'")?;
                return Ok(Flow::Continue);
            };
            patch.price = Some(price);
        }
        if let Some(stock) = stock {
            let Ok(stock) = stock.parse::<i64>() else {
                writeln!(self.output, "Invalid stock '{stock}'")?;
                return Ok(Flow::Continue);
            };
            patch.stock = Some(stock);
        }

        match inventory.update(&code, &patch) {
            Ok(product) => writeln!(self.output, "Updated: {product}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn remove<S: ProductStore>(&mut self, inventory: &mut Inventory<S>) -> anyhow::Result<Flow> {
        let Some(code) = self.prompt("Code: ")? else {
            return Ok(Flow::Continue);
        };
        match inventory.remove(&code) {
            Ok(product) => writeln!(self.output, "Removed: {product}")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn total<S: ProductStore>(&mut self, inventory: &Inventory<S>) -> anyhow::Result<Flow> {
        writeln!(
            self.output,
            "Total inventory value: {:.2} €",
            inventory.total_value()
        )?;
        Ok(Flow::Continue)
    }

    fn by_supplier<S: ProductStore>(&mut self, inventory: &Inventory<S>) -> anyhow::Result<Flow> {
        let Some(name) = self.prompt("Supplier name: ")? else {
            return Ok(Flow::Continue);
        };
        match inventory.list_by_supplier(&name) {
            SupplierListing::Matches(products) => {
                for product in products {
                    writeln!(self.output, "{product}")?;
                }
            }
            SupplierListing::NoProducts { supplier } => {
                writeln!(self.output, "No products for supplier {supplier}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn save_and_exit<S: ProductStore>(&mut self, inventory: &Inventory<S>) -> anyhow::Result<Flow> {
        match inventory.save() {
            Ok(()) => {
                writeln!(self.output, "Inventory saved. Bye!")?;
                Ok(Flow::Exit)
            }
            Err(e) => {
                writeln!(self.output, "Could not save: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use stockroom_inventory::InMemoryProductStore;

    fn run(script: &str, inventory: &mut Inventory<InMemoryProductStore>) -> String {
        let mut out = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut out)
            .run(inventory)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn inventory() -> Inventory<InMemoryProductStore> {
        Inventory::with_store(InMemoryProductStore::new())
    }

    const ADD_KEYBOARD: &str = "1\nP001\nTeclado\n45.99\n10\nS1\nTechZone\nventas@techzone.com\n";

    #[test]
    fn add_list_and_save() {
        let mut inv = inventory();
        let out = run(&format!("{ADD_KEYBOARD}2\n8\n"), &mut inv);

        assert!(out.contains("Product added"), "{out}");
        assert!(
            out.contains("[P001] Teclado - 45.99 € (10 units) | Supplier: TechZone (ventas@techzone.com)"),
            "{out}"
        );
        assert!(out.contains("Inventory saved"), "{out}");
        assert_eq!(inv.store().snapshot().unwrap(), inv.products());
    }

    #[test]
    fn duplicate_add_reports_error() {
        let mut inv = inventory();
        let out = run(&format!("{ADD_KEYBOARD}{ADD_KEYBOARD}8\n"), &mut inv);

        assert!(out.contains("duplicate product code: P001"), "{out}");
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn blank_supplier_fields_become_absent() {
        let mut inv = inventory();
        run("1\nP9\nCable\n1.5\n3\n\n\n\n8\n", &mut inv);
        assert_eq!(inv.find("P9").unwrap().supplier(), &Supplier::unknown());
    }

    #[test]
    fn invalid_numbers_are_reported_without_adding() {
        let mut inv = inventory();
        let out = run("1\nP1\nx\nabc\n1\n\n\n\n1\nP2\nx\n1\n-4\n\n\n\n8\n", &mut inv);

        assert!(out.contains("Invalid price 'abc'"), "{out}");
        assert!(out.contains("Invalid stock '-4'"), "{out}");
        assert!(inv.is_empty());
    }

    #[test]
    fn modify_keeps_blank_fields() {
        let mut inv = inventory();
        run(&format!("{ADD_KEYBOARD}4\nP001\n\n39.5\n\n8\n"), &mut inv);

        let product = inv.find("P001").unwrap();
        assert_eq!(product.name(), "Teclado");
        assert_eq!(product.price().amount(), 39.5);
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn modify_with_negative_stock_is_rejected() {
        let mut inv = inventory();
        let out = run(&format!("{ADD_KEYBOARD}4\nP001\nNuevo\n\n-1\n8\n"), &mut inv);

        assert!(out.contains("invalid value"), "{out}");
        assert_eq!(inv.find("P001").unwrap().name(), "Teclado");
    }

    #[test]
    fn find_remove_and_total() {
        let mut inv = inventory();
        let out = run(&format!("{ADD_KEYBOARD}6\n3\nP404\n5\nP001\n5\nP001\n6\n8\n"), &mut inv);

        assert!(out.contains("Total inventory value: 459.90 €"), "{out}");
        assert!(out.contains("No product with code P404"), "{out}");
        assert!(out.contains("Removed: [P001]"), "{out}");
        assert!(out.contains("product not found: P001"), "{out}");
        assert!(out.contains("Total inventory value: 0.00 €"), "{out}");
    }

    #[test]
    fn supplier_listing_distinguishes_no_match() {
        let mut inv = inventory();
        let out = run(&format!("{ADD_KEYBOARD}7\nTechZone\n7\nNadie\n8\n"), &mut inv);

        assert!(out.contains("| Supplier: TechZone"), "{out}");
        assert!(out.contains("No products for supplier Nadie"), "{out}");
    }

    #[test]
    fn unknown_option_keeps_looping() {
        let mut inv = inventory();
        let out = run("9\nabc\n8\n", &mut inv);
        assert!(out.contains("Unknown option: 9"), "{out}");
        assert!(out.contains("Unknown option: abc"), "{out}");
    }

    #[test]
    fn end_of_input_saves() {
        let mut inv = inventory();
        run(ADD_KEYBOARD, &mut inv);
        assert_eq!(inv.store().snapshot().unwrap().len(), 1);
    }
}
