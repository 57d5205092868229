use crate::cli::{Cli, Commands};
use crate::json::ErrorJson;
use anyhow::Result;
use console::style;

pub fn run(cli: Cli) -> Result<()> {
    let json = cli.json;

    let result = match cli.command {
        Commands::Encrypt {
            input,
            output,
            password,
            user_password,
            owner_password,
            key_length,
            no_overwrite,
            ignore_warnings,
            restrictions,
        } => crate::commands::encrypt_pdf(
            input,
            output,
            password,
            user_password,
            owner_password,
            key_length,
            no_overwrite,
            ignore_warnings,
            restrictions,
            json,
        ),

        Commands::Decrypt {
            input,
            output,
            password,
            no_overwrite,
        } => crate::commands::decrypt_pdf(input, output, password, no_overwrite, json),

        Commands::Info { input, password } => crate::commands::info_pdf(input, password, json),
    };

    if let Err(e) = &result {
        if json {
            let causes: Vec<String> = e.chain().skip(1).map(|c| c.to_string()).collect();
            let payload = ErrorJson {
                status: "error",
                error: e.to_string(),
                causes,
            };
            println!("{}", serde_json::to_string(&payload)?);
        } else {
            eprintln!("\n{} {}", style("[ERROR]").red().bold(), style(&e).red());

            for (i, cause) in e.chain().skip(1).enumerate() {
                if i == 0 {
                    eprintln!("\n    Caused by:");
                }
                eprintln!("      - {}", style(cause).red());
            }
            eprintln!();
        }
    }

    result
}
