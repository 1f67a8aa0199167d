/*!
 * schedsim - Scenario Driver
 *
 * External controller for the simulator core: reads one JSON scenario
 * (a scheduling run or a deadlock check) from a file argument or stdin,
 * invokes the matching entry point, and prints the report as JSON.
 */

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};

use log::info;
use sched_sim::{check_deadlock, run_simulation, Policy, ProcessRow};
use serde::Deserialize;

/// One scenario per invocation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Scenario {
    Simulation {
        processes: Vec<ProcessRow>,
        policy: Policy,
        #[serde(default)]
        quantum: Option<u64>,
    },
    Deadlock {
        allocation: Vec<Vec<u64>>,
        max_demand: Vec<Vec<u64>>,
        available: Vec<u64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let input = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let scenario: Scenario = serde_json::from_str(&input)?;
    let output = match scenario {
        Scenario::Simulation {
            processes,
            policy,
            quantum,
        } => {
            info!(
                "simulation scenario: {} processes, {}",
                processes.len(),
                policy
            );
            serde_json::to_string_pretty(&run_simulation(&processes, policy, quantum)?)?
        }
        Scenario::Deadlock {
            allocation,
            max_demand,
            available,
        } => {
            info!(
                "deadlock scenario: {} processes, {} resource types",
                allocation.len(),
                available.len()
            );
            serde_json::to_string_pretty(&check_deadlock(allocation, max_demand, available)?)?
        }
    };

    println!("{output}");
    Ok(())
}
