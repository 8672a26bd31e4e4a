// Pattern 6: Decorator - Stacked Notification Channels
// Each decorator delegates to the wrapped notifier first, then appends its
// own channel's line, so output order follows nesting order.

use colored::Colorize;

// ============================================================================
// Component trait and base component
// ============================================================================

trait Notifier {
    fn send_notification(&self, message: &str) -> Vec<String>;
}

struct BasicNotifier;

impl Notifier for BasicNotifier {
    fn send_notification(&self, message: &str) -> Vec<String> {
        vec![format!("Basic Notification: {}", message)]
    }
}

// ============================================================================
// Decorators
// ============================================================================

struct SmsNotifier {
    wrapped: Box<dyn Notifier>,
}

impl Notifier for SmsNotifier {
    fn send_notification(&self, message: &str) -> Vec<String> {
        let mut lines = self.wrapped.send_notification(message);
        lines.push(format!("SMS Notification: {}", message));
        lines
    }
}

struct EmailNotifier {
    wrapped: Box<dyn Notifier>,
}

impl Notifier for EmailNotifier {
    fn send_notification(&self, message: &str) -> Vec<String> {
        let mut lines = self.wrapped.send_notification(message);
        lines.push(format!("Email Notification: {}", message));
        lines
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_component_alone() {
        let lines = BasicNotifier.send_notification("hi");
        assert_eq!(lines, vec!["Basic Notification: hi"]);
    }

    #[test]
    fn test_single_decorator_appends_after_base() {
        let notifier = SmsNotifier {
            wrapped: Box::new(BasicNotifier),
        };
        assert_eq!(
            notifier.send_notification("hi"),
            vec!["Basic Notification: hi", "SMS Notification: hi"]
        );
    }

    #[test]
    fn test_output_order_matches_nesting_order() {
        // Email(Sms(Basic)): base effect first, then SMS, then email.
        let notifier = EmailNotifier {
            wrapped: Box::new(SmsNotifier {
                wrapped: Box::new(BasicNotifier),
            }),
        };
        assert_eq!(
            notifier.send_notification("X"),
            vec![
                "Basic Notification: X",
                "SMS Notification: X",
                "Email Notification: X"
            ]
        );
    }

    #[test]
    fn test_reversed_nesting_reverses_added_effects() {
        let notifier = SmsNotifier {
            wrapped: Box::new(EmailNotifier {
                wrapped: Box::new(BasicNotifier),
            }),
        };
        assert_eq!(
            notifier.send_notification("X"),
            vec![
                "Basic Notification: X",
                "Email Notification: X",
                "SMS Notification: X"
            ]
        );
    }
}

fn main() {
    println!("{}", "=== Decorator ===".bold());

    // Decorate the basic notifier with SMS and email channels.
    let notifier = EmailNotifier {
        wrapped: Box::new(SmsNotifier {
            wrapped: Box::new(BasicNotifier),
        }),
    };

    for line in notifier.send_notification("This is an important notification!") {
        println!("{}", line);
    }
}
