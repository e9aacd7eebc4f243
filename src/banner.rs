use colored::*;

pub fn print_banner() {
    let banner = r#"
  ______                    ____                     _
 |  ____|                  / ___|_   _  __ _ _ __ __| |
 | |__ ___  _ __ _ __ ___ | |  _| | | |/ _` | '__/ _` |
 |  __/ _ \| '__| '_ ` _ \| |_| | |_| | (_| | | | (_| |
 |_|  \___/|_|  |_| |_| |_|\____|\__,_|\__,_|_|  \__,_|
    "#;

    println!("{}", banner.bright_cyan().bold());
    println!("{}", "   Keeping community forms clean and honest".bright_white().italic());
    println!("{}", "   =========================================".bright_black());
    println!();
}

pub fn print_step(msg: &str) {
    println!("{} {}", "➜".bright_blue().bold(), msg);
    tracing::info!("STEP: {}", msg);
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✔".bright_green().bold(), msg);
    tracing::info!("SUCCESS: {}", msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠".bright_yellow().bold(), msg);
    tracing::warn!("WARNING: {}", msg);
}

pub fn print_error(msg: &str) {
    println!("{} {}", "✘".bright_red().bold(), msg);
    tracing::error!("ERROR: {}", msg);
}
