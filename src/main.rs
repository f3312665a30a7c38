use perfrun::error::RunError;
use perfrun::flags::Flags;
use perfrun::process::signal::InterruptFlag;
use perfrun::runner::Runner;
use std::env;
use std::process;

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("perfrun: {}", e);
        process::exit(1);
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("perfrun {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let interrupt = InterruptFlag::new();
    if let Err(e) = interrupt.register() {
        eprintln!("perfrun: {}", e);
        process::exit(1);
    }

    // The first failing step's status becomes our own exit status.
    let code = match Runner::new(flags, interrupt).and_then(|mut runner| runner.run()) {
        Ok(_) => 0,
        Err(RunError::StepFailed { status, .. }) => status,
        Err(RunError::Interrupted) => 130,
        Err(e) => {
            eprintln!("perfrun: {}", e);
            1
        }
    };
    process::exit(code);
}
