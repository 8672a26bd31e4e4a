// Pattern 5: Chain of Responsibility - Log Handlers Forwarding by Level
// Each handler either formats the message for its own level or forwards to
// the next link; a request no link matches falls off the chain silently.

use colored::Colorize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Info,
    Warning,
    Error,
}

// ============================================================================
// Handler trait and chain links
// ============================================================================

trait LogHandler {
    // None means the request reached the end of the chain unhandled.
    fn handle(&self, level: LogLevel, message: &str) -> Option<String>;
}

fn forward(
    next: &Option<Box<dyn LogHandler>>,
    level: LogLevel,
    message: &str,
) -> Option<String> {
    next.as_ref().and_then(|handler| handler.handle(level, message))
}

struct InfoLogger {
    next: Option<Box<dyn LogHandler>>,
}

impl LogHandler for InfoLogger {
    fn handle(&self, level: LogLevel, message: &str) -> Option<String> {
        if level == LogLevel::Info {
            Some(format!("[INFO]: {}", message))
        } else {
            forward(&self.next, level, message)
        }
    }
}

struct WarningLogger {
    next: Option<Box<dyn LogHandler>>,
}

impl LogHandler for WarningLogger {
    fn handle(&self, level: LogLevel, message: &str) -> Option<String> {
        if level == LogLevel::Warning {
            Some(format!("[WARNING]: {}", message))
        } else {
            forward(&self.next, level, message)
        }
    }
}

struct ErrorLogger {
    next: Option<Box<dyn LogHandler>>,
}

impl LogHandler for ErrorLogger {
    fn handle(&self, level: LogLevel, message: &str) -> Option<String> {
        if level == LogLevel::Error {
            Some(format!("[ERROR]: {}", message))
        } else {
            forward(&self.next, level, message)
        }
    }
}

// Standard chain order: Info -> Warning -> Error.
fn build_chain() -> Box<dyn LogHandler> {
    let error_logger = ErrorLogger { next: None };
    let warning_logger = WarningLogger {
        next: Some(Box::new(error_logger)),
    };
    Box::new(InfoLogger {
        next: Some(Box::new(warning_logger)),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_handled_by_first_link() {
        let chain = build_chain();
        assert_eq!(
            chain.handle(LogLevel::Info, "X"),
            Some("[INFO]: X".to_string())
        );
    }

    #[test]
    fn test_warning_forwarded_then_handled() {
        let chain = build_chain();
        assert_eq!(
            chain.handle(LogLevel::Warning, "X"),
            Some("[WARNING]: X".to_string())
        );
    }

    #[test]
    fn test_error_reaches_last_link() {
        let chain = build_chain();
        assert_eq!(
            chain.handle(LogLevel::Error, "disk full"),
            Some("[ERROR]: disk full".to_string())
        );
    }

    #[test]
    fn test_unmatched_request_is_silent() {
        // A truncated chain with no error link terminates with no output.
        let chain = InfoLogger {
            next: Some(Box::new(WarningLogger { next: None })),
        };
        assert_eq!(chain.handle(LogLevel::Error, "lost"), None);
    }

    #[test]
    fn test_request_is_handled_exactly_once() {
        // A warning entering mid-chain is handled there, not by later links.
        let tail = WarningLogger {
            next: Some(Box::new(ErrorLogger { next: None })),
        };
        assert_eq!(
            tail.handle(LogLevel::Warning, "X"),
            Some("[WARNING]: X".to_string())
        );
    }
}

fn main() {
    println!("{}", "=== Chain of Responsibility ===".bold());

    let chain = build_chain();
    let requests = [
        (LogLevel::Info, "This is an informational message."),
        (LogLevel::Warning, "This is a warning message."),
        (LogLevel::Error, "This is an error message."),
    ];

    for (level, message) in requests {
        if let Some(line) = chain.handle(level, message) {
            println!("{}", line);
        }
    }
}
