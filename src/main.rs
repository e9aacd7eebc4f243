use clap::{Parser, Subcommand};

use formguard::csrf::DEFAULT_TOKEN_MAX_AGE_MILLIS;
use formguard::random::DEFAULT_RANDOM_STRING_LEN;
use formguard::{banner, config, logger};

#[derive(Parser)]
#[command(name = "formguard")]
#[command(about = "Input sanitization and request-security toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan text for content-policy violations and print the sanitized form
    Scan {
        /// Text to scan
        input: String,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a contact field the way form handlers do
    Check {
        #[command(subcommand)]
        field: CheckField,
    },
    /// CSRF token operations
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    /// SHA-256 digest of a value, as lowercase hex
    Hash {
        /// Value to digest
        data: String,
    },
    /// Generate a secure random alphanumeric string
    Random {
        /// Number of characters
        #[arg(short, long, default_value_t = DEFAULT_RANDOM_STRING_LEN)]
        length: usize,
    },
}

#[derive(Subcommand, Debug, Clone)]
enum CheckField {
    /// Email address
    Email { value: String },
    /// US phone number
    Phone { value: String },
    /// ZIP code (5-digit or ZIP+4)
    Zip { value: String },
}

#[derive(Subcommand, Debug, Clone)]
enum TokenAction {
    /// Mint a new token
    Generate,
    /// Validate a token against its max age
    Validate {
        token: String,

        /// Override the max age (milliseconds); falls back to
        /// formguard.toml, then the built-in default
        #[arg(long)]
        max_age_millis: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let cli = Cli::parse();
    banner::print_banner();

    match cli.command {
        Commands::Scan { input, json } => {
            let report = formguard::scan_content(&input);
            let sanitized = formguard::sanitize_text(&input);

            if json {
                let body = serde_json::json!({
                    "is_valid": report.is_valid,
                    "violations": report.violations,
                    "sanitized": sanitized,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                if report.is_valid {
                    banner::print_success("No policy violations found.");
                } else {
                    for violation in &report.violations {
                        banner::print_warning(violation);
                    }
                }
                banner::print_step(&format!("Sanitized: {}", sanitized));
            }
        }
        Commands::Check { field } => {
            let result = match field {
                CheckField::Email { value } => formguard::sanitize_email(&value),
                CheckField::Phone { value } => formguard::sanitize_phone(&value),
                CheckField::Zip { value } => formguard::sanitize_zip_code(&value),
            };
            match result {
                Ok(normalized) => banner::print_success(&format!("Valid: {}", normalized)),
                Err(e) => {
                    banner::print_error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }
        Commands::Token { action } => match action {
            TokenAction::Generate => {
                println!("{}", formguard::generate_csrf_token());
            }
            TokenAction::Validate {
                token,
                max_age_millis,
            } => {
                let file_config = config::load_config();
                let max_age = max_age_millis
                    .or(file_config.csrf.as_ref().and_then(|c| c.max_age_millis))
                    .unwrap_or(DEFAULT_TOKEN_MAX_AGE_MILLIS);

                if formguard::validate_csrf_token(&token, max_age) {
                    banner::print_success("Token is valid.");
                } else {
                    banner::print_error("Token is invalid or expired.");
                    std::process::exit(1);
                }
            }
        },
        Commands::Hash { data } => {
            println!("{}", formguard::hash_data(&data).await);
        }
        Commands::Random { length } => {
            println!("{}", formguard::generate_secure_random_string(length));
        }
    }

    Ok(())
}
