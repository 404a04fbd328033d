use std::process;

use clap::{Parser, Subcommand};
use device::{ErrorKind, Subsystem};
use drivers::sim::SimPlatform;
use log::{error, info};
use sequencer::{BoardProfile, Sequencer};

mod machines;

use machines::{Machine, MACHINES};

#[derive(Parser)]
#[clap(author, version, about = "Board bring-up tasks", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the known machines
    List,
    /// Print the bring-up steps of a machine
    Show {
        #[clap(long)]
        machine: String,
    },
    /// Bring a machine up on the simulated platform
    Run {
        #[clap(long)]
        machine: String,
        /// Make registration of this subsystem fail, e.g. `eth1`
        #[clap(long)]
        fail: Option<Subsystem>,
    },
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    match &cli.command {
        Commands::List => {
            for machine in MACHINES {
                println!("{:<8} {}", machine.id, machine.name);
            }
        }
        Commands::Show { machine } => {
            let profile = load(machine);
            println!("{}", profile.info());
            for (name, kind) in profile.domains() {
                println!("  domain {name}: {kind:?}");
            }
            for (index, step) in profile.steps().iter().enumerate() {
                println!("  [{index:2}] {step}");
            }
            for descriptor in profile.descriptors() {
                println!("  {descriptor:?}");
            }
        }
        Commands::Run { machine, fail } => {
            let profile = load(machine);
            let mut platform = SimPlatform::new(*profile.limits());
            if let Some(subsystem) = fail {
                platform.fail_on(*subsystem, ErrorKind::Other);
            }

            let mut seq = Sequencer::new(platform);
            if let Err(err) = seq.run(profile) {
                error!("{err}");
                process::exit(1);
            }
            for (name, record) in seq.config().domains() {
                info!("{name}: {record:?}");
            }
            println!("{} calls, {:?}", seq.platform().calls().len(), seq.state());
        }
    }
}

fn machine(id: &str) -> &'static Machine {
    match machines::find(id) {
        Some(machine) => machine,
        None => {
            error!("unknown machine {id}, see `xtask list`");
            process::exit(1);
        }
    }
}

fn load(id: &str) -> BoardProfile {
    let machine = machine(id);
    match (machine.profile)() {
        Ok(profile) => profile,
        Err(err) => {
            error!("{}: {err}", machine.id);
            process::exit(1);
        }
    }
}
