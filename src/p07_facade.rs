// Pattern 7: Facade - One-Call Computer Startup
// The facade sequences calls into independent subsystems in a fixed order
// and aggregates their output lines.

use colored::Colorize;

// ============================================================================
// Subsystems
// ============================================================================

struct Cpu;

impl Cpu {
    fn freeze(&self) -> String {
        "CPU: Freezing processor.".to_string()
    }

    fn jump(&self, position: u64) -> String {
        format!("CPU: Jumping to start position {}.", position)
    }

    fn execute(&self) -> String {
        "CPU: Executing instructions.".to_string()
    }
}

struct Memory;

impl Memory {
    fn load(&self, position: u64, data: &str) -> String {
        format!("Memory: Loading {} to position {}.", data, position)
    }
}

struct HardDrive;

impl HardDrive {
    fn read(&self, lba: u64, size: u64) -> String {
        format!("HardDrive: Reading {} bytes from LBA {}.", size, lba)
    }
}

// ============================================================================
// Facade
// ============================================================================

struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    fn new() -> Self {
        Self {
            cpu: Cpu,
            memory: Memory,
            hard_drive: HardDrive,
        }
    }

    // Fixed startup sequence; clients call this instead of the subsystems.
    fn start_computer(&self) -> String {
        [
            self.cpu.freeze(),
            self.memory.load(0, "bootloader"),
            self.cpu.jump(0),
            self.hard_drive.read(0, 1024),
            self.cpu.execute(),
        ]
        .join("\n")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_sequence_is_exact() {
        let computer = ComputerFacade::new();
        assert_eq!(
            computer.start_computer(),
            "CPU: Freezing processor.\n\
             Memory: Loading bootloader to position 0.\n\
             CPU: Jumping to start position 0.\n\
             HardDrive: Reading 1024 bytes from LBA 0.\n\
             CPU: Executing instructions."
        );
    }

    #[test]
    fn test_subsystems_work_independently() {
        assert_eq!(Memory.load(4, "kernel"), "Memory: Loading kernel to position 4.");
        assert_eq!(HardDrive.read(2, 512), "HardDrive: Reading 512 bytes from LBA 2.");
        assert_eq!(Cpu.jump(7), "CPU: Jumping to start position 7.");
    }

    #[test]
    fn test_sequence_has_five_steps() {
        let output = ComputerFacade::new().start_computer();
        assert_eq!(output.lines().count(), 5);
    }
}

fn main() {
    println!("{}", "=== Facade ===".bold());

    let computer = ComputerFacade::new();
    println!("{}", computer.start_computer());
}
