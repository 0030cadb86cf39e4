//! Subjective simulation demo.
//!
//! Replays a scripted scenario and reports, step by step, what each
//! agent's environment model comes to believe about the world.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use epistemic::{verify_plan, EnvironmentModel, Scenario};

/// Command line arguments for the demo
#[derive(Parser, Debug)]
#[command(name = "subjective_sim")]
#[command(about = "Replay a scenario and trace each agent's beliefs")]
struct Args {
    /// Path to the scenario TOML file
    #[arg(long, default_value = "scenarios/two_room.toml")]
    scenario: PathBuf,

    /// Only track this agent (default: all scenario agents)
    #[arg(long)]
    agent: Option<String>,

    /// Print every believed literal after each step
    #[arg(long)]
    dump_beliefs: bool,

    /// Print the final compiled subjective problems as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let scenario = match Scenario::from_file(&args.scenario) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Could not load scenario {}: {}", args.scenario.display(), e);
            process::exit(1);
        }
    };

    println!("Subjective Simulation");
    println!("=====================");
    println!("Scenario: {} (domain {})", scenario.name, scenario.domain);

    let domain = Arc::new(scenario.to_domain());
    let problem = Arc::new(scenario.to_problem());
    let steps = scenario.step_operators();
    println!(
        "  {} objects, {} relations, {} scripted steps",
        problem.objects.len(),
        domain.predicates.len(),
        steps.len()
    );

    let plan = scenario.to_plan();
    if verify_plan(&plan, &problem.initial, &problem.objects) {
        println!("  Script verified executable from the initial state");
    } else {
        eprintln!("  Warning: script is not executable in order; replaying anyway");
    }

    let agents: Vec<String> = match &args.agent {
        Some(agent) => vec![agent.clone()],
        None => scenario.agents.clone(),
    };

    println!();
    println!("Initial beliefs:");
    let mut models: Vec<EnvironmentModel> = Vec::with_capacity(agents.len());
    for agent in &agents {
        match EnvironmentModel::new(agent, Arc::clone(&domain), Arc::clone(&problem)) {
            Ok(model) => models.push(model),
            Err(e) => {
                eprintln!("Could not build model for {}: {}", agent, e);
                process::exit(1);
            }
        }
    }
    for model in &models {
        report(model, args.dump_beliefs);
    }

    let mut state = problem.initial.clone();
    for (index, action) in steps.iter().enumerate() {
        state = state.apply(action, &problem.objects);
        println!();
        println!("[Step {}] {}", index + 1, action);

        for model in &mut models {
            if let Err(e) = model.update_after(action, &state) {
                eprintln!("Could not update model for {}: {}", model.agent(), e);
                process::exit(1);
            }
            report(model, args.dump_beliefs);
        }
    }

    println!();
    println!("Replay complete. Compiled subjective views:");
    for model in &models {
        let subjective = model.compile_problem();
        println!(
            "  {}: {} objects, {} initial literals",
            subjective.name,
            subjective.objects.len(),
            subjective.initial.len()
        );
        if args.json {
            match serde_json::to_string_pretty(&subjective) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => eprintln!("  Warning: could not serialize {}: {}", subjective.name, e),
            }
        }
    }
}

fn report(model: &EnvironmentModel, dump_beliefs: bool) {
    println!(
        "  {}: knows {} objects, {} relations, {} operators, {} literals",
        model.agent(),
        model.known_objects().len(),
        model.known_predicates().len(),
        model.known_operators().len(),
        model.known_state().len()
    );
    if dump_beliefs {
        for literal in &model.known_state().literals {
            println!("    {}", literal);
        }
    }
}
