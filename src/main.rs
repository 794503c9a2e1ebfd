use clap::Parser;
use tradecheck::cli::commands::{Cli, Commands};
use tradecheck::cli::report;
use tradecheck::config::AppConfig;
use tradecheck::domain::values::condition_status::ConditionStatus;
use tradecheck::domain::values::trade_inputs::InputField;
use tradecheck::{setup_logging, TradeCheck};

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    setup_logging(&config);

    let tc = match TradeCheck::new(&config.db_path) {
        Ok(tc) => tc,
        Err(e) => {
            eprintln!("Error initializing tradecheck: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(tc, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(mut tc: TradeCheck, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(tc.conditions())?);
            } else {
                print!("{}", report::checklist_report(tc.conditions(), tc.satisfied_count()));
            }
        }
        Commands::Add {
            description,
            details,
        } => {
            let condition = tc.add_condition();
            if description.is_some() || details.is_some() {
                tc.update_condition(
                    condition.id,
                    description.unwrap_or_default(),
                    details.unwrap_or_default(),
                    condition.status,
                );
            }
            println!("Added condition #{}", condition.id);
        }
        Commands::Update {
            id,
            description,
            details,
            status,
        } => {
            let current = tc.condition(id)?.clone();
            let status = match status {
                Some(s) => s.parse::<ConditionStatus>()?,
                None => current.status,
            };
            tc.update_condition(
                id,
                description.unwrap_or(current.description),
                details.unwrap_or(current.details),
                status,
            );
            print!("{}", report::checklist_report(tc.conditions(), tc.satisfied_count()));
        }
        Commands::Toggle { id } => {
            let current = tc.condition(id)?.clone();
            tc.update_condition(
                id,
                current.description,
                current.details,
                current.status.toggled(),
            );
            print!("{}", report::checklist_report(tc.conditions(), tc.satisfied_count()));
        }
        Commands::Remove { id } => {
            tc.condition(id)?;
            if let Some(c) = tc.remove_condition(id) {
                println!("Removed condition #{} {}", c.id, c.description);
            }
        }
        Commands::Inputs => {
            print!("{}", report::inputs_report(tc.inputs()));
        }
        Commands::Calc {
            position,
            entry_price,
            total_capital,
            entry_capital,
            risk_percent,
            leverage,
            risk_reward_ratio,
            fee_rate,
            json,
        } => {
            let overrides = [
                (InputField::Position, position),
                (InputField::EntryPrice, entry_price),
                (InputField::TotalCapital, total_capital),
                (InputField::EntryCapital, entry_capital),
                (InputField::RiskPercent, risk_percent),
                (InputField::Leverage, leverage),
                (InputField::RiskRewardRatio, risk_reward_ratio),
                (InputField::FeeRate, fee_rate),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    tc.set_input(field, &value)?;
                }
            }

            let calc = tc.calculate()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&calc)?);
            } else {
                print!("{}", report::calculation_report(&calc));
            }
        }
        Commands::Reset => {
            tc.reset_calculator()?;
            print!("{}", report::inputs_report(tc.inputs()));
        }
    }
    Ok(())
}
