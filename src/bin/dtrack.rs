//! Dependency-Track project CLI binary.
//!
//! A command-line interface for looking up, enriching, and deleting projects.

use clap::Parser;
use dtrackapi::cli::{Cli, Command};
use dtrackapi::{PrettyPrint, Project, ProjectReconciler};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let reconciler = match ProjectReconciler::from_env() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set DTRACK_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&reconciler, cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

type Reconciler = ProjectReconciler<dtrackapi::DtrackClient, dtrackapi::CycloneDxReader>;

async fn run(reconciler: &Reconciler, cli: Cli) -> dtrackapi::Result<bool> {
    match cli.command {
        Command::Get { name, version } => {
            let project = reconciler.get_project(&name, &version).await?;
            output_single(&project, cli.json);
            Ok(true)
        }
        Command::UpdateInfo { name, version, bom } => {
            let project = reconciler.get_project(&name, &version).await?;
            let updated = reconciler.update_project_info(&project, &bom).await?;
            report(&project, "updated", updated, cli.json);
            Ok(updated)
        }
        Command::Delete { name, version } => {
            let project = reconciler.get_project(&name, &version).await?;
            let deleted = reconciler.delete_project(&project).await?;
            report(&project, "deleted", deleted, cli.json);
            Ok(deleted)
        }
    }
}

fn output_single(project: &Project, json: bool) {
    if json {
        match serde_json::to_string_pretty(project) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        println!("{}", project.pretty_print());
    }
}

fn report(project: &Project, action: &str, done: bool, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::json!({
                "uuid": project.id,
                "name": project.name,
                "version": project.version,
                (action): done,
            })
        );
    } else if done {
        println!("Project {}-{} {action}", project.name, project.version);
    } else {
        println!("Project {}-{} not {action}", project.name, project.version);
    }
}
