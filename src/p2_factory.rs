// Pattern 2: Factory Method - Parametrized Creation of UI Controls
// Demonstrates a stateless factory dispatching a runtime discriminator to
// one of several interchangeable product variants.
//
// Out-of-range discriminators fall back to the Windows variant with a
// notice; a hardened factory would return a Result from each creation
// operation instead of defaulting.

use std::io::{self, Write};

// ============================================================================
// Example: Product Interfaces
// ============================================================================

// Clickable control.
trait Button {
    fn variant(&self) -> &'static str;

    fn on_click(&self) {
        println!("{} OS Button Click Event", self.variant());
    }
}

// Text-display control.
trait TextBox {
    fn variant(&self) -> &'static str;

    fn show_text(&self) {
        println!("{} OS TextBox Event", self.variant());
    }
}

// ============================================================================
// Example: Concrete Products per Platform
// ============================================================================

struct WinButton;
impl Button for WinButton {
    fn variant(&self) -> &'static str {
        "Windows"
    }
}

struct MacButton;
impl Button for MacButton {
    fn variant(&self) -> &'static str {
        "Mac"
    }
}

struct LinuxButton;
impl Button for LinuxButton {
    fn variant(&self) -> &'static str {
        "Linux"
    }
}

struct WinTextBox;
impl TextBox for WinTextBox {
    fn variant(&self) -> &'static str {
        "Windows"
    }
}

struct MacTextBox;
impl TextBox for MacTextBox {
    fn variant(&self) -> &'static str {
        "Mac"
    }
}

struct LinuxTextBox;
impl TextBox for LinuxTextBox {
    fn variant(&self) -> &'static str {
        "Linux"
    }
}

// ============================================================================
// Example: The Factory - Discriminator Dispatch
// ============================================================================

// Stateless: no registry, no cache. Every call hands the caller a fresh,
// independently owned instance.
struct UiFactory;

impl UiFactory {
    fn create_button(os_type: i32) -> Box<dyn Button> {
        match os_type {
            0 => Box::new(WinButton),
            1 => Box::new(MacButton),
            2 => Box::new(LinuxButton),
            _ => {
                println!("Unknown OS type. Defaulting to Windows.");
                Box::new(WinButton)
            }
        }
    }

    fn create_text_box(os_type: i32) -> Box<dyn TextBox> {
        match os_type {
            0 => Box::new(WinTextBox),
            1 => Box::new(MacTextBox),
            2 => Box::new(LinuxTextBox),
            _ => {
                println!("Unknown OS type. Defaulting to Windows.");
                Box::new(WinTextBox)
            }
        }
    }
}

fn factory_example(os_type: i32) {
    // The client never names a concrete variant.
    let button = UiFactory::create_button(os_type);
    let text_box = UiFactory::create_text_box(os_type);

    button.on_click();
    text_box.show_text();
}

// ============================================================================
// Example: Enum-based Factory (Zero-Cost)
// ============================================================================

enum PlatformButton {
    Windows(WinButton),
    Mac(MacButton),
    Linux(LinuxButton),
}

impl PlatformButton {
    // No heap allocation, no dynamic dispatch; same fallback contract.
    fn new(os_type: i32) -> Self {
        match os_type {
            0 => PlatformButton::Windows(WinButton),
            1 => PlatformButton::Mac(MacButton),
            2 => PlatformButton::Linux(LinuxButton),
            _ => {
                println!("Unknown OS type. Defaulting to Windows.");
                PlatformButton::Windows(WinButton)
            }
        }
    }

    fn variant(&self) -> &'static str {
        match self {
            PlatformButton::Windows(btn) => btn.variant(),
            PlatformButton::Mac(btn) => btn.variant(),
            PlatformButton::Linux(btn) => btn.variant(),
        }
    }
}

fn enum_factory_example(os_type: i32) {
    let button = PlatformButton::new(os_type);
    println!("Enum-based factory made a {} button", button.variant());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn discriminators_map_to_variants() {
        assert_eq!(UiFactory::create_button(0).variant(), "Windows");
        assert_eq!(UiFactory::create_button(1).variant(), "Mac");
        assert_eq!(UiFactory::create_button(2).variant(), "Linux");

        assert_eq!(UiFactory::create_text_box(0).variant(), "Windows");
        assert_eq!(UiFactory::create_text_box(1).variant(), "Mac");
        assert_eq!(UiFactory::create_text_box(2).variant(), "Linux");
    }

    #[test]
    fn out_of_range_falls_back_to_windows() {
        assert_eq!(UiFactory::create_button(-1).variant(), "Windows");
        assert_eq!(UiFactory::create_button(99).variant(), "Windows");
        assert_eq!(UiFactory::create_text_box(-1).variant(), "Windows");
        assert_eq!(UiFactory::create_text_box(99).variant(), "Windows");
    }

    #[test]
    fn every_call_returns_an_independent_instance() {
        // Each call hands back its own Box; consuming one leaves the other
        // fully usable, which a cached shared instance could not survive.
        let first = UiFactory::create_button(1);
        let second = UiFactory::create_button(1);

        drop(first);
        assert_eq!(second.variant(), "Mac");
    }

    #[test]
    fn products_are_interchangeable_behind_the_trait() {
        let buttons: Vec<Box<dyn Button>> = (0..3).map(UiFactory::create_button).collect();
        let labels: Vec<_> = buttons.iter().map(|b| b.variant()).collect();

        assert_eq!(labels, ["Windows", "Mac", "Linux"]);
    }

    #[test]
    fn enum_factory_matches_trait_factory() {
        for os_type in [-5, 0, 1, 2, 42] {
            assert_eq!(
                PlatformButton::new(os_type).variant(),
                UiFactory::create_button(os_type).variant()
            );
        }
    }

    proptest! {
        #[test]
        fn any_other_integer_defaults_to_windows(os_type: i32) {
            prop_assume!(!(0..=2).contains(&os_type));

            prop_assert_eq!(UiFactory::create_button(os_type).variant(), "Windows");
            prop_assert_eq!(UiFactory::create_text_box(os_type).variant(), "Windows");
        }
    }
}

fn main() -> anyhow::Result<()> {
    println!("Pattern 2: Factory Method");
    println!("=========================\n");

    print!("Select OS type (0: Windows, 1: Mac, 2: Linux): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    // Non-numeric input takes the unknown-OS path.
    let os_type: i32 = input.trim().parse().unwrap_or(-1);

    println!("\n=== Factory with Trait Objects ===");
    factory_example(os_type);

    println!("\n=== Enum-based Factory ===");
    enum_factory_example(os_type);

    Ok(())
}
