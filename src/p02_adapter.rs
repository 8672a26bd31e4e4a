// Pattern 2: Adapter - Incompatible Interfaces Made Compatible
// A European socket supplies 220V; the adapter converts its output into the
// shape an American device expects.

use colored::Colorize;

// ============================================================================
// Adaptee: the interface we already have
// ============================================================================

struct EuropeanSocket;

impl EuropeanSocket {
    fn provide_power(&self) -> String {
        "Power supply at 220V".to_string()
    }
}

// ============================================================================
// Target: the interface the client expects
// ============================================================================

trait PowerSource {
    fn supply_110v(&self) -> String;
}

struct AmericanDevice;

impl AmericanDevice {
    fn operate(&self, source: &dyn PowerSource) -> String {
        source.supply_110v()
    }
}

// ============================================================================
// Adapter
// ============================================================================

struct SocketAdapter {
    socket: EuropeanSocket,
}

impl SocketAdapter {
    fn new(socket: EuropeanSocket) -> Self {
        Self { socket }
    }
}

impl PowerSource for SocketAdapter {
    fn supply_110v(&self) -> String {
        // The output is a deterministic transform of the adaptee's output.
        let power = self.socket.provide_power();
        format!("{} converted to 110V for American device.", power)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptee_output() {
        assert_eq!(EuropeanSocket.provide_power(), "Power supply at 220V");
    }

    #[test]
    fn test_adapted_output_is_exact() {
        let adapter = SocketAdapter::new(EuropeanSocket);
        assert_eq!(
            adapter.supply_110v(),
            "Power supply at 220V converted to 110V for American device."
        );
    }

    #[test]
    fn test_device_uses_adapter_through_target_trait() {
        let adapter = SocketAdapter::new(EuropeanSocket);
        let device = AmericanDevice;
        assert!(device.operate(&adapter).ends_with("for American device."));
    }
}

fn main() {
    println!("{}", "=== Adapter ===".bold());

    let european_socket = EuropeanSocket;
    let adapter = SocketAdapter::new(european_socket);

    let american_device = AmericanDevice;
    println!("{}", american_device.operate(&adapter));
}
