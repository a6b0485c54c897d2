use std::error::Error;
use std::fs::File;
use std::time::Duration;

use clap::Parser;

use chip8_workbench::control::{Command, Controls, TermControls};
use chip8_workbench::display::{Display, TermWorkbench};
use chip8_workbench::interpreter::{Chip8Vm, RunState};

/// CHIP-8 workbench: load a program image, then run, step and inspect it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// path to the program image (.ch8)
    rom: String,

    /// instruction cadence while free-running
    #[arg(short, long, default_value_t = 700)]
    steps_per_second: u64,
}

fn load(vm: &mut Chip8Vm, path: &str) -> Result<(), Box<dyn Error>> {
    let mut f = File::open(path)?;
    vm.load_image(&mut f)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut vm = Chip8Vm::new();
    load(&mut vm, &args.rom)?;

    let mut controls = TermControls::new();
    let mut display = TermWorkbench::new()?;

    let tick = Duration::from_micros(1_000_000 / args.steps_per_second.max(1));
    let steps_per_frame = (args.steps_per_second / 60).max(1);
    let mut ticks: u64 = 0;

    'outer: loop {
        for command in controls.poll_commands()? {
            match command {
                Command::Step => {
                    // a faulted step parks the machine; the pane shows it
                    vm.start();
                    let _ = vm.step();
                    vm.stop();
                }
                Command::Continue => vm.start(),
                Command::Stop => vm.stop(),
                Command::Reset => {
                    vm.reset();
                    load(&mut vm, &args.rom)?;
                }
                Command::Quit => break 'outer,
            }
        }

        if vm.run_state() == RunState::Running {
            let _ = vm.step();
        }

        ticks += 1;
        if vm.run_state() != RunState::Running || ticks % steps_per_frame == 0 {
            display.draw(&vm)?;
        }
        spin_sleep::sleep(tick);
    }
    Ok(())
}
