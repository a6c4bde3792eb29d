//! The boot screen shown before the login prompt.
//!
//! Nothing here affects the shell. It prints a fake firmware walk over a
//! fixed [`Machine`] and a progress bar, pausing between steps.

use std::io::{self, Write};
use std::time::Duration;

/// Width of the progress bar, brackets excluded.
pub const BAR_WIDTH: usize = 70;

/// Percent added per progress bar step.
pub const BAR_STEP: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    pub name: String,
    pub bits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    pub name: String,
    pub capacity_gb: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    pub name: String,
    pub capacity_gb: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vga {
    pub name: String,
    pub memory_gb: u32,
}

/// Hardware the boot screen reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub board: String,
    pub cpu: Cpu,
    pub ram: Vec<Ram>,
    pub storage: Vec<Storage>,
    pub vga: Vec<Vga>,
    pub power_supply: String,
}

impl Machine {
    /// The stock desktop: Ryzen on an x570 board, two 8GB sticks.
    pub fn desktop() -> Self {
        let stick = Ram {
            name: "Corsair Vengeance DDR4".to_string(),
            capacity_gb: 8,
        };
        Self {
            board: "AMD x570".to_string(),
            cpu: Cpu {
                name: "AMD Ryzen 7 2700X".to_string(),
                bits: 64,
            },
            ram: vec![stick.clone(), stick],
            storage: vec![Storage {
                name: "Samsung SSD 870 EVO".to_string(),
                capacity_gb: 1024,
            }],
            vga: vec![Vga {
                name: "Asus ROG Strix RTX 2080".to_string(),
                memory_gb: 8,
            }],
            power_supply: "Asus ROG Thor".to_string(),
        }
    }

    pub fn ram_total_gb(&self) -> u32 {
        self.ram.iter().map(|r| r.capacity_gb).sum()
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::desktop()
    }
}

/// One frame of the progress bar, ending in a carriage return.
pub fn progress_frame(percent: usize) -> String {
    let pos = BAR_WIDTH * percent / 100;
    let mut frame = String::with_capacity(BAR_WIDTH + 10);
    frame.push('[');
    for i in 0..BAR_WIDTH {
        frame.push(match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '>',
            std::cmp::Ordering::Greater => ' ',
        });
    }
    frame.push_str(&format!("] {percent} %\r"));
    frame
}

/// Sleep for `ms` scaled by `pacing`. Zero or invalid pacing returns at once.
async fn pause(ms: u64, pacing: f64) {
    if !(pacing.is_finite() && pacing > 0.0) {
        return;
    }
    tokio::time::sleep(Duration::from_millis(ms).mul_f64(pacing)).await;
}

/// Write the boot sequence for `machine` to `out`.
pub async fn boot<W: Write>(machine: &Machine, out: &mut W, pacing: f64) -> io::Result<()> {
    tracing::debug!(board = %machine.board, cpu = %machine.cpu.name, pacing, "booting");

    writeln!(out, "Finding bios...")?;
    pause(200, pacing).await;
    writeln!(out, "BIOS found")?;

    writeln!(out, "Executing bios...")?;
    pause(100, pacing).await;

    writeln!(out, "RAM ({}GB):", machine.ram_total_gb())?;
    for stick in &machine.ram {
        writeln!(out, "  {}GB", stick.capacity_gb)?;
    }

    writeln!(out, "POST")?;
    writeln!(out, "  Test block memory a...")?;
    writeln!(out, "  Test block memory b...")?;
    pause(300, pacing).await;
    writeln!(out, "  Test block memory c...")?;
    pause(300, pacing).await;
    writeln!(out, "  Test block memory d...")?;
    writeln!(out, "  Test block memory e...")?;
    pause(100, pacing).await;

    writeln!(out, "Checking graphic cards...")?;
    pause(400, pacing).await;
    writeln!(out, "Graphic card found: ")?;
    for card in &machine.vga {
        writeln!(out, "  {}", card.name)?;
    }

    writeln!(out, "Finding operating system...")?;
    pause(300, pacing).await;
    writeln!(out, "OS found")?;

    writeln!(out, "Delivering to OS...")?;
    pause(300, pacing).await;

    writeln!(out, "Booting...")?;
    for percent in (0..100).step_by(BAR_STEP) {
        write!(out, "{}", progress_frame(percent))?;
        out.flush()?;
        pause(300, pacing).await;
    }
    write!(out, "\n\n")?;
    out.flush()
}
