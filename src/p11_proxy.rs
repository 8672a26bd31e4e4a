// Pattern 11: Proxy - Role-Checked Database Access
// The proxy checks the caller's role before forwarding; a denied request
// never reaches the real subject. Denial is a normal outcome, not an error.

use colored::Colorize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum UserRole {
    Admin,
    Guest,
}

// Access outcomes are expected and frequent, so they are a plain enum
// rather than a Result error.
#[derive(Debug, PartialEq, Eq)]
enum DataAccess {
    Granted(String),
    Denied(String),
}

// ============================================================================
// Real subject
// ============================================================================

struct RealDatabase {
    requests: AtomicUsize,
}

impl RealDatabase {
    fn new() -> Self {
        Self {
            requests: AtomicUsize::new(0),
        }
    }

    fn fetch(&self) -> String {
        self.requests.fetch_add(1, Ordering::SeqCst);
        "Data from the real database.".to_string()
    }

    #[allow(dead_code)]
    fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Proxy
// ============================================================================

struct DatabaseProxy {
    database: RealDatabase,
    role: UserRole,
}

impl DatabaseProxy {
    fn new(role: UserRole) -> Self {
        Self {
            database: RealDatabase::new(),
            role,
        }
    }

    fn request_data(&self) -> DataAccess {
        match self.role {
            UserRole::Admin => DataAccess::Granted(self.database.fetch()),
            UserRole::Guest => {
                DataAccess::Denied("Access Denied: Insufficient permissions.".to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "=== Proxy ===".bold());

    // Client with the admin role.
    let admin_client = DatabaseProxy::new(UserRole::Admin);
    match admin_client.request_data() {
        DataAccess::Granted(data) => {
            println!("Proxy: Logging access to the real database.");
            println!("{}", data);
        }
        DataAccess::Denied(reason) => println!("{}", reason),
    }

    // Client with the guest role.
    let guest_client = DatabaseProxy::new(UserRole::Guest);
    match guest_client.request_data() {
        DataAccess::Granted(data) => println!("{}", data),
        DataAccess::Denied(reason) => println!("{}", reason),
    }
}
