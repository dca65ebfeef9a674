// Terminal front end: a login screen followed by the task dashboard REPL.
// Session and task operations report their own failures; only stdin/stdout
// problems bubble up from here.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::config::LatencyConfig;
use crate::dashboard::Dashboard;
use crate::models::Task;
use crate::services::LocalStore;
use crate::session::SessionStore;

/// Outcome of one screen: hand over to the next one, or leave the program.
enum Flow {
    Continue,
    Quit,
}

pub async fn run(mut session: SessionStore, store: LocalStore, latency: LatencyConfig) -> Result<()> {
    loop {
        if session.user().is_none() {
            if let Flow::Quit = login_screen(&mut session).await? {
                break;
            }
        }
        if let Flow::Quit = dashboard_screen(&mut session, &store, &latency).await? {
            break;
        }
    }
    println!("Goodbye!");
    Ok(())
}

// ─── Login screen ─────────────────────────────────────────────────────────────

async fn login_screen(session: &mut SessionStore) -> Result<Flow> {
    println!();
    println!("=== Task Manager Login ===");
    println!("Demo accounts: admin/password123, user/user123");

    loop {
        let username = match prompt("Username: ")? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };
        let password = match prompt("Password: ")? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };

        println!("Signing in...");
        match session.login(&username, &password).await {
            Ok(user) => {
                println!("Welcome, {}!", user.name);
                return Ok(Flow::Continue);
            }
            Err(e) => println!("Login failed: {}", e),
        }
    }
}

// ─── Dashboard screen ─────────────────────────────────────────────────────────

async fn dashboard_screen(
    session: &mut SessionStore,
    store: &LocalStore,
    latency: &LatencyConfig,
) -> Result<Flow> {
    let name = match session.user() {
        Some(user) => user.name.clone(),
        None => return Ok(Flow::Continue),
    };

    let mut dashboard = Dashboard::new(store.clone(), latency.clone());
    if let Err(e) = dashboard.restore() {
        println!("Failed to load tasks: {}", e);
    }

    println!();
    println!("Task Manager Dashboard - Welcome, {}!", name);
    render(&dashboard);
    println!("Type 'help' for the command list.");

    loop {
        let line = match prompt("> ")? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        };

        match line.as_str() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "logout" => {
                match session.logout() {
                    Ok(()) => println!("Logged out."),
                    Err(e) => println!("Logged out, but stored data could not be cleared: {}", e),
                }
                return Ok(Flow::Continue);
            }
            "list" => render(&dashboard),
            "stats" => render_stats(&dashboard),
            "help" => print_help(),
            cmd if cmd == "add" || cmd.starts_with("add ") => {
                let text = cmd.strip_prefix("add").unwrap_or("");
                println!("Adding task...");
                match dashboard.add_task(text).await {
                    Ok(_) => render(&dashboard),
                    Err(e) => println!("{}", e),
                }
            }
            cmd if cmd.starts_with("done ") || cmd.starts_with("toggle ") => {
                let arg = arg_of(cmd);
                match task_id_at(&dashboard, arg) {
                    Some(id) => {
                        println!("Updating task...");
                        match dashboard.toggle_task(&id).await {
                            Ok(()) => render(&dashboard),
                            Err(e) => println!("{}", e),
                        }
                    }
                    None => println!("No such task: {}", arg),
                }
            }
            cmd if cmd.starts_with("rm ") || cmd.starts_with("del ") || cmd.starts_with("delete ") => {
                let arg = arg_of(cmd);
                match task_id_at(&dashboard, arg) {
                    Some(id) => {
                        println!("Deleting task...");
                        match dashboard.delete_task(&id).await {
                            Ok(()) => render(&dashboard),
                            Err(e) => println!("{}", e),
                        }
                    }
                    None => println!("No such task: {}", arg),
                }
            }
            _ => println!("Unknown command. Type 'help' for the command list."),
        }
    }
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn render(dashboard: &Dashboard) {
    println!();
    render_stats(dashboard);
    if dashboard.tasks().is_empty() {
        println!("No tasks yet. Add your first task above!");
    } else {
        for (i, task) in dashboard.tasks().iter().enumerate() {
            println!("  {}. {}", i + 1, format_task(task));
        }
    }
}

fn render_stats(dashboard: &Dashboard) {
    let stats = dashboard.stats();
    println!(
        "Total: {}  Completed: {}  Pending: {}",
        stats.total, stats.completed, stats.pending
    );
}

fn format_task(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!(
        "[{}] {}  (created {})",
        mark,
        task.text,
        task.created_at.format("%Y-%m-%d %H:%M")
    )
}

fn print_help() {
    println!("Commands:");
    println!("  add <text>    add a task");
    println!("  done <n>      toggle task n between pending and completed");
    println!("  rm <n>        delete task n");
    println!("  list          show the task list");
    println!("  stats         show the counters");
    println!("  logout        sign out and clear stored data");
    println!("  quit          leave without signing out");
}

// ─── Input helpers ────────────────────────────────────────────────────────────

/// Print a prompt and read one trimmed line. Ok(None) means stdin was closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Everything after the command word.
fn arg_of(cmd: &str) -> &str {
    cmd.split_once(' ').map(|(_, rest)| rest.trim()).unwrap_or("")
}

/// Resolve a 1-based list position to a task id.
fn task_id_at(dashboard: &Dashboard, arg: &str) -> Option<String> {
    let n: usize = arg.parse().ok()?;
    let task = dashboard.tasks().get(n.checked_sub(1)?)?;
    Some(task.id.clone())
}
