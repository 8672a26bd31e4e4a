// Pattern 1: Abstract Factory - Families of Related Widgets
// A factory produces a matched button + checkbox pair; the client never
// learns which family it is rendering.

use colored::Colorize;

// ============================================================================
// Abstract products
// ============================================================================

trait Button {
    fn click(&self) -> String;
}

trait Checkbox {
    fn check(&self) -> String;
}

// ============================================================================
// Concrete products - Windows family
// ============================================================================

struct WindowsButton;
impl Button for WindowsButton {
    fn click(&self) -> String {
        "Windows Button Clicked!".to_string()
    }
}

struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn check(&self) -> String {
        "Windows Checkbox Checked!".to_string()
    }
}

// ============================================================================
// Concrete products - Mac family
// ============================================================================

struct MacButton;
impl Button for MacButton {
    fn click(&self) -> String {
        "Mac Button Clicked!".to_string()
    }
}

struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn check(&self) -> String {
        "Mac Checkbox Checked!".to_string()
    }
}

// ============================================================================
// Abstract factory and concrete factories
// ============================================================================

trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

// Family selector, normally supplied from outside.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum OsType {
    Windows,
    Mac,
}

fn factory_for(os: OsType) -> Box<dyn GuiFactory> {
    match os {
        OsType::Windows => Box::new(WindowsFactory),
        OsType::Mac => Box::new(MacFactory),
    }
}

// Client code: sees only the factory trait, never a concrete family.
fn create_ui(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![button.click(), checkbox.check()]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family_is_consistent() {
        let lines = create_ui(&WindowsFactory);
        assert_eq!(
            lines,
            vec!["Windows Button Clicked!", "Windows Checkbox Checked!"]
        );
    }

    #[test]
    fn test_mac_family_is_consistent() {
        let lines = create_ui(&MacFactory);
        assert_eq!(lines, vec!["Mac Button Clicked!", "Mac Checkbox Checked!"]);
    }

    #[test]
    fn test_families_never_mix() {
        // Every selector yields a button and checkbox from the same family.
        for os in [OsType::Windows, OsType::Mac] {
            let factory = factory_for(os);
            let button = factory.create_button().click();
            let checkbox = factory.create_checkbox().check();
            let family = button.split(' ').next().unwrap();
            assert!(checkbox.starts_with(family));
        }
    }

    #[test]
    fn test_selector_picks_family() {
        let factory = factory_for(OsType::Mac);
        assert_eq!(factory.create_button().click(), "Mac Button Clicked!");
    }
}

fn main() {
    println!("{}", "=== Abstract Factory ===".bold());

    // Imagine the OS type is detected dynamically.
    let os_type = OsType::Windows;
    let factory = factory_for(os_type);
    for line in create_ui(factory.as_ref()) {
        println!("{}", line);
    }
}
