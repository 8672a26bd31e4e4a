// Pattern 3: Bridge - Abstraction Decoupled from Implementation
// Remote controls and TV brands vary independently; the remote holds any
// device behind the implementation trait.

use colored::Colorize;

// ============================================================================
// Implementation side: TV devices
// ============================================================================

trait TvDevice {
    fn turn_on(&self) -> String;
    fn turn_off(&self) -> String;
}

struct SamsungTv;
impl TvDevice for SamsungTv {
    fn turn_on(&self) -> String {
        "Samsung TV is now ON.".to_string()
    }

    fn turn_off(&self) -> String {
        "Samsung TV is now OFF.".to_string()
    }
}

struct LgTv;
impl TvDevice for LgTv {
    fn turn_on(&self) -> String {
        "LG TV is now ON.".to_string()
    }

    fn turn_off(&self) -> String {
        "LG TV is now OFF.".to_string()
    }
}

// ============================================================================
// Abstraction side: the remote control
// ============================================================================

struct RemoteControl {
    tv: Box<dyn TvDevice>,
}

impl RemoteControl {
    fn new(tv: Box<dyn TvDevice>) -> Self {
        Self { tv }
    }

    fn power_on(&self) -> String {
        self.tv.turn_on()
    }

    fn power_off(&self) -> String {
        self.tv.turn_off()
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("{}", "=== Bridge ===".bold());

    let remote_samsung = RemoteControl::new(Box::new(SamsungTv));
    println!("{}", remote_samsung.power_on());
    println!("{}", remote_samsung.power_off());

    let remote_lg = RemoteControl::new(Box::new(LgTv));
    println!("{}", remote_lg.power_on());
    println!("{}", remote_lg.power_off());
}
