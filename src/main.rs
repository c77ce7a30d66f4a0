use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use twig::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    about = "An in-memory version control engine",
    long_about = "Twig is an in-memory version control engine with branches, \
    merges and content-addressed snapshots. It keeps the whole repository in \
    process memory; the only files it writes are the workspace files restored \
    by checkout and merge.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "demo",
        about = "Run the scripted demo scenario",
        long_about = "This command runs the automated demo: an initial commit, \
        a feature branch with divergent edits, a merge that produces a content \
        conflict, and the history listing."
    )]
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Demo) => run_demo()?,
        None => interactive_shell()?,
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(pwd, Box::new(std::io::stdout()))
}

/// Scripted scenario: branching, divergent edits, a conflicted merge
fn run_demo() -> Result<()> {
    println!("{}", "=== AUTOMATED DEMO SCENARIO STARTED ===".green());

    let mut repo = open_repository()?;

    let outcome: Result<()> = (|| {
        println!("{}", "\n[STEP 1] Initial commit on master".cyan());
        repo.add("src/main.rs", "fn main() {}")?;
        repo.add("README.md", "A twig demo project.")?;
        repo.commit("Initial commit", "Umut")?;

        println!("{}", "\n[STEP 2] Create and switch to 'feature-login'".cyan());
        repo.create_branch("feature-login")?;
        repo.checkout("feature-login")?;

        println!("{}", "\n[STEP 3] Work on the feature branch".cyan());
        repo.add("src/login.rs", "pub fn login() {}")?;
        repo.add("src/main.rs", "fn main() { login(); }")?;
        repo.commit("Added login feature", "Alp")?;

        println!("{}", "\n[STEP 4] Diverge on master".cyan());
        repo.checkout("master")?;
        repo.add("src/main.rs", "fn main() { println!(\"hello\"); }")?;
        repo.commit("Changed main on master", "Umut")?;

        println!(
            "{}",
            "\n[STEP 5] Merge 'feature-login' into 'master' (expect a conflict)".cyan()
        );
        repo.merge("feature-login")?;

        println!("{}", "\n[STEP 6] Show history".cyan());
        repo.log()?;

        Ok(())
    })();

    if let Err(e) = outcome {
        eprintln!("{}", format!("Demo Error: {}", e).red());
    }

    println!("{}", "\n=== DEMO FINISHED ===".green());
    Ok(())
}

const HELP_TEXT: &str = "Commands:
  add <file> [content]   : Stage a file (prompts for content if omitted)
  commit                 : Commit changes (prompts for message and author)
  log                    : Show history
  branch <name>          : Create a new branch
  checkout <name>        : Switch branch
  merge <branch>         : Merge a branch into the current one
  demo                   : Run the automated demo
  clear                  : Clear the screen
  exit                   : Exit the shell";

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Interactive command loop
///
/// Operation errors are printed and the session stays alive; only `exit` or
/// end of input leave the loop.
fn interactive_shell() -> Result<()> {
    let mut repo = open_repository()?;

    println!("{}", "=== TWIG INTERACTIVE SHELL ===".green());
    println!("Type 'help' for commands.\n");

    loop {
        let prompt = format!("{}> ", repo.current_branch_name());
        let Some(line) = prompt_line(&prompt.yellow().to_string())? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let args: Vec<&str> = line.split_whitespace().collect();
        let command = args[0];

        let outcome: Result<bool> = (|| {
            match command {
                "exit" | "quit" => return Ok(true),
                "clear" => {
                    // ANSI clear screen + cursor home
                    print!("\x1b[2J\x1b[H");
                    std::io::stdout().flush()?;
                }
                "help" => println!("{}", HELP_TEXT),
                "add" => match args.len() {
                    1 => println!("Usage: add <filename> [content]"),
                    2 => {
                        let content =
                            prompt_line(&format!("Enter content for {}: ", args[1]))?
                                .unwrap_or_default();
                        repo.add(args[1], content)?;
                    }
                    _ => repo.add(args[1], args[2..].join(" "))?,
                },
                "commit" => {
                    let message = prompt_line("Enter commit message: ")?.unwrap_or_default();
                    let author = prompt_line("Enter author: ")?.unwrap_or_default();
                    repo.commit(&message, &author)?;
                }
                "branch" => match args.len() {
                    1 => println!("Usage: branch <name>"),
                    _ => repo.create_branch(args[1])?,
                },
                "checkout" => match args.len() {
                    1 => println!("Usage: checkout <name>"),
                    _ => repo.checkout(args[1])?,
                },
                "merge" => match args.len() {
                    1 => println!("Usage: merge <branch_name>"),
                    _ => {
                        repo.merge(args[1])?;
                    }
                },
                "log" => repo.log()?,
                "demo" => run_demo()?,
                _ => println!("Unknown command. Type 'help'."),
            }

            Ok(false)
        })();

        match outcome {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }

    Ok(())
}
